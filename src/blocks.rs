use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use crate::arrays::{match_array, type_size, word_address};
use crate::decoder::decode_elements;
use crate::error::Error;
use crate::model::{Block, Tag};

// ── BAUSTEIN.DBF fields ─────────────────────────────────────────────

pub const FIELD_NUMBER: &str = "_NUMMER";
pub const FIELD_TYPE: &str = "_TYP";
pub const FIELD_DATA: &str = "_DATEN";

// ── Table rows ──────────────────────────────────────────────────────

/// A field value as produced by a tabular database reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Integer(i64),
    Text(String),
    Bytes(Vec<u8>),
    Null,
}

/// One table row, indexed by column name.
pub type Row = BTreeMap<String, FieldValue>;

/// Reads the rows of a tabular database file (e.g. a dBASE table).
pub trait TableReader {
    fn read_rows(&self, path: &Path) -> Result<Vec<Row>, Error>;
}

fn field<'r>(row: &'r Row, name: &'static str) -> Result<&'r FieldValue, Error> {
    row.get(name).ok_or(Error::MissingField { field: name })
}

fn number_field(row: &Row, name: &'static str) -> Result<u32, Error> {
    let wrong_kind = Error::FieldType {
        field: name,
        expected: "unsigned 32-bit integer",
    };
    match field(row, name)? {
        FieldValue::Integer(n) => u32::try_from(*n).map_err(|_| wrong_kind),
        _ => Err(wrong_kind),
    }
}

fn text_field(row: &Row, name: &'static str) -> Result<String, Error> {
    match field(row, name)? {
        FieldValue::Text(s) => Ok(s.clone()),
        _ => Err(Error::FieldType {
            field: name,
            expected: "text",
        }),
    }
}

fn data_field<'r>(row: &'r Row, name: &'static str) -> Result<&'r [u8], Error> {
    match field(row, name)? {
        FieldValue::Bytes(b) => Ok(b.as_slice()),
        FieldValue::Text(s) => Ok(s.as_bytes()),
        FieldValue::Null => Ok(&[] as &[u8]),
        FieldValue::Integer(_) => Err(Error::FieldType {
            field: name,
            expected: "binary data",
        }),
    }
}

// ── Block parsing ───────────────────────────────────────────────────

/// Read every block definition from a BAUSTEIN.DBF table.
pub fn parse_blocks(reader: &dyn TableReader, path: &Path) -> Result<Vec<Block>, Error> {
    let rows = reader.read_rows(path)?;
    debug!(path = %path.display(), rows = rows.len(), "reading block table");

    rows.iter().map(parse_block).collect()
}

/// Build a block from one BAUSTEIN.DBF row.
pub fn parse_block(row: &Row) -> Result<Block, Error> {
    let number = number_field(row, FIELD_NUMBER)?;
    let block_type = text_field(row, FIELD_TYPE)?;
    let elements = decode_elements(data_field(row, FIELD_DATA)?);

    debug!(
        number,
        block_type = %block_type,
        elements = elements.len(),
        "parsed block"
    );
    Ok(Block {
        number,
        block_type,
        elements,
    })
}

impl Block {
    /// Derive every tag of this block.
    ///
    /// Elements are laid out in declaration order from byte 0: arrays
    /// expand to one tag per index and occupy their full span, scalars
    /// occupy the size of their type.
    pub fn tags(&self) -> Vec<Tag> {
        let mut tags = Vec::new();
        let mut offset = 0;

        for element in &self.elements {
            match match_array(&element.data_type) {
                Some(array) => {
                    tags.extend(array.expand(&element.name, self.number, offset));
                    offset += array.byte_span();
                }
                None => {
                    tags.push(Tag {
                        name: element.name.clone(),
                        address: word_address(self.number, offset),
                        data_type: element.data_type.clone(),
                    });
                    offset += type_size(&element.data_type);
                }
            }
        }
        tags
    }
}
