use serde::Serialize;

/// One named, typed entry decoded from a block's `_DATEN` record data.
///
/// `data_type` is either a primitive type name (`INT`, `REAL`, ...) or an
/// array descriptor such as `Array[0..9] of INT`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockElement {
    pub name: String,
    pub data_type: String,
}

impl BlockElement {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        BlockElement {
            name: name.into(),
            data_type: data_type.into(),
        }
    }
}

/// A PLC data block read from one BAUSTEIN.DBF row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Block number (`_NUMMER`), e.g. 100 for DB100.
    pub number: u32,
    /// Block type (`_TYP`), e.g. `DB`.
    pub block_type: String,
    /// Elements in declaration order.
    pub elements: Vec<BlockElement>,
}

/// A single addressable PLC point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub name: String,
    /// Vendor addressing string, e.g. `DB100.DBW18`.
    pub address: String,
    pub data_type: String,
}

impl Tag {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        data_type: impl Into<String>,
    ) -> Self {
        Tag {
            name: name.into(),
            address: address.into(),
            data_type: data_type.into(),
        }
    }
}

/// Historian point type for one S7 primitive type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PiTypeMapping {
    pub point_type: &'static str,
    pub location2: u32,
}
