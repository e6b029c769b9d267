use std::sync::OnceLock;

use regex::Regex;

use crate::error::Error;
use crate::model::{BlockElement, Tag};

/// Array descriptor grammar, e.g. `Array[0..9] of INT`.
const ARRAY_PATTERN: &str = r"^Array\[(\d+)\.\.(\d+)\][ \t]+of[ \t]+(\w+)$";

/// Byte width used for types missing from [`type_size`].
pub const DEFAULT_TYPE_SIZE: usize = 2;

/// Size in bytes of an S7 primitive type.
pub fn type_size(type_name: &str) -> usize {
    match type_name {
        "BOOL" | "BYTE" => 1,
        "INT" | "WORD" => 2,
        "DINT" | "REAL" | "DWORD" => 4,
        _ => DEFAULT_TYPE_SIZE,
    }
}

/// Word address of a byte offset inside a data block.
pub fn word_address(db_number: u32, offset: usize) -> String {
    format!("DB{}.DBW{}", db_number, offset)
}

fn array_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(ARRAY_PATTERN).expect("array pattern is a valid regex"))
}

/// The range and member type of an array descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayType {
    pub start: u32,
    pub end: u32,
    pub element_type: String,
}

/// Match an `Array[<start>..<end>] of <type>` descriptor.
///
/// Anything else, including bounds too large for `u32`, is a scalar type
/// and yields `None`.
pub fn match_array(descriptor: &str) -> Option<ArrayType> {
    let caps = array_regex().captures(descriptor)?;
    Some(ArrayType {
        start: caps[1].parse().ok()?,
        end: caps[2].parse().ok()?,
        element_type: caps[3].to_string(),
    })
}

impl ArrayType {
    /// Number of indices; zero when `end < start`.
    pub fn len(&self) -> usize {
        if self.end < self.start {
            0
        } else {
            (self.end - self.start) as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total bytes occupied by all members.
    pub fn byte_span(&self) -> usize {
        self.len() * type_size(&self.element_type)
    }

    /// One tag per index, addressed from `base_offset` upward.
    ///
    /// Every member gets a `DBW` address regardless of its width, BOOL
    /// included.
    pub fn expand(&self, name: &str, db_number: u32, base_offset: usize) -> Vec<Tag> {
        let size = type_size(&self.element_type);
        let mut tags = Vec::with_capacity(self.len());
        if self.is_empty() {
            return tags;
        }
        for idx in self.start..=self.end {
            let offset = base_offset + (idx - self.start) as usize * size;
            tags.push(Tag {
                name: format!("{}[{}]", name, idx),
                address: word_address(db_number, offset),
                data_type: self.element_type.clone(),
            });
        }
        tags
    }
}

/// Expand an array-typed element into individually addressed tags.
pub fn expand_array(
    element: &BlockElement,
    db_number: u32,
    base_offset: usize,
) -> Result<Vec<Tag>, Error> {
    let array = match_array(&element.data_type).ok_or_else(|| Error::InvalidArrayType {
        data_type: element.data_type.clone(),
    })?;
    Ok(array.expand(&element.name, db_number, base_offset))
}
