use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while turning block records into tags and point types.
///
/// Element decoding itself never fails; see [`crate::decoder::decode_elements`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Array expansion was requested for a descriptor that is not `Array[a..b] of T`.
    #[error("invalid array data type: {data_type}")]
    InvalidArrayType { data_type: String },

    /// No point-type mapping is registered for this S7 type.
    #[error("unsupported type: {s7_type}")]
    UnsupportedType { s7_type: String },

    #[error("record is missing field {field}")]
    MissingField { field: &'static str },

    #[error("field {field} has the wrong kind, expected {expected}")]
    FieldType {
        field: &'static str,
        expected: &'static str,
    },

    /// Raised by [`crate::blocks::TableReader`] implementations.
    #[error("failed to read table {}: {message}", path.display())]
    Table { path: PathBuf, message: String },
}

impl Error {
    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidArrayType { .. } => "invalid-array-type",
            Error::UnsupportedType { .. } => "unsupported-type",
            Error::MissingField { .. } => "missing-field",
            Error::FieldType { .. } => "field-type",
            Error::Table { .. } => "table-read",
        }
    }
}
