//! Tag extraction for Siemens S7 projects.
//!
//! Decodes the element definitions stored in BAUSTEIN.DBF block records,
//! expands array elements into individually addressed tags, and maps S7
//! types onto historian point types.

pub mod arrays;
pub mod blocks;
pub mod decoder;
pub mod error;
pub mod model;
pub mod type_map;

use std::collections::BTreeMap;
use std::path::Path;

pub use arrays::{expand_array, match_array, type_size, ArrayType};
pub use blocks::{parse_blocks, FieldValue, Row, TableReader};
pub use decoder::decode_elements;
pub use error::Error;
pub use model::{Block, BlockElement, PiTypeMapping, Tag};
pub use type_map::{map_type, map_types};

// ── Core API ───────────────────────────────────────────────────────

/// Tags and point types extracted from one block table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub tags: Vec<Tag>,
    /// One mapping per distinct tag data type.
    pub point_types: BTreeMap<String, PiTypeMapping>,
}

/// Read a BAUSTEIN.DBF table and derive its tags and point types.
///
/// Fails if any derived tag has a type with no point-type mapping.
pub fn extract(reader: &dyn TableReader, path: &Path) -> Result<Extraction, Error> {
    let blocks = parse_blocks(reader, path)?;
    let tags: Vec<Tag> = blocks.iter().flat_map(Block::tags).collect();
    let point_types = map_types(tags.iter().map(|t| t.data_type.as_str()))?;
    Ok(Extraction { tags, point_types })
}
