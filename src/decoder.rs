use tracing::{debug, trace};

use crate::model::BlockElement;

/// Marker that may precede an element name.
const METADATA_MARKER: [u8; 2] = [0x10, 0x00];

/// Decoder state: tracks the cursor into the record data.
struct Decoder<'a> {
    data: &'a [u8],
    pos: usize,
}

/// Decode the `_DATEN` record data of a block into its elements.
///
/// The data is a sequence of null-terminated `name`, `type` string pairs,
/// optionally preceded by a `0x10 0x00` marker and separated by stray
/// nulls. Decoding stops at the first entry that cannot be read in full
/// and returns everything decoded before it; it never fails.
pub fn decode_elements(data: &[u8]) -> Vec<BlockElement> {
    let mut decoder = Decoder { data, pos: 0 };
    let mut elements = Vec::new();

    while !decoder.at_end() {
        if decoder.starts_with(&METADATA_MARKER) {
            decoder.advance(METADATA_MARKER.len());
        } else if decoder.peek() == Some(0) {
            decoder.advance(1);
            continue;
        }

        let Some(name) = decoder.read_string() else {
            break;
        };
        let Some(data_type) = decoder.read_string() else {
            break;
        };

        trace!(name = %name, data_type = %data_type, "decoded block element");
        elements.push(BlockElement { name, data_type });
    }

    if !decoder.at_end() {
        debug!(
            offset = decoder.pos,
            remaining = decoder.remaining().len(),
            decoded = elements.len(),
            "stopped decoding block elements before end of data"
        );
    }

    elements
}

impl<'a> Decoder<'a> {
    fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos.min(self.data.len())..]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    fn peek(&self) -> Option<u8> {
        self.remaining().first().copied()
    }

    fn starts_with(&self, bytes: &[u8]) -> bool {
        self.remaining().starts_with(bytes)
    }

    fn advance(&mut self, n: usize) {
        self.pos += n;
    }

    /// Read a non-empty null-terminated string and move past its terminator.
    ///
    /// Returns `None` without moving when there is no terminator or the
    /// string is empty. Invalid UTF-8 is replaced, never rejected.
    fn read_string(&mut self) -> Option<String> {
        let remaining = self.remaining();
        let len = memchr::memchr(0, remaining)?;
        if len == 0 {
            return None;
        }
        let text = String::from_utf8_lossy(&remaining[..len]).into_owned();
        self.advance(len + 1);
        Some(text)
    }
}
