//! Codepoint-to-byte offset mapping for token text.
//!
//! Gram lengths are defined in Unicode codepoints, while token offsets are
//! byte positions in the source document. [`CodepointIndex`] bridges the two
//! coordinate spaces for one token's text: it precomputes the byte offset of
//! every codepoint so the generators can cut grams on guaranteed character
//! boundaries, including text outside the Basic Multilingual Plane where a
//! single codepoint spans up to four bytes.
//!
//! # Examples
//!
//! ```
//! use phonogram::codepoint::CodepointIndex;
//!
//! let text = "ni好";
//! let index = CodepointIndex::new(text);
//!
//! assert_eq!(index.count(), 3);
//! assert_eq!(index.byte_offset(2).unwrap(), 2); // "好" starts at byte 2
//! assert_eq!(index.slice(text, 1, 2).unwrap(), "i好");
//! ```

use crate::error::{PhonogramError, Result};

/// Byte offsets of each codepoint in one token's text.
///
/// Built once per token at generator entry; all subsequent offset queries are
/// array lookups. Requests past the sequence length fail with
/// [`PhonogramError::IndexOutOfRange`] instead of clamping.
#[derive(Clone, Debug)]
pub struct CodepointIndex {
    /// Byte offset of the i-th codepoint.
    offsets: Vec<usize>,
    /// Total byte length of the indexed text.
    byte_len: usize,
}

impl CodepointIndex {
    /// Build the index for the given text.
    pub fn new(text: &str) -> Self {
        CodepointIndex {
            offsets: text.char_indices().map(|(offset, _)| offset).collect(),
            byte_len: text.len(),
        }
    }

    /// Number of codepoints in the indexed text.
    pub fn count(&self) -> usize {
        self.offsets.len()
    }

    /// Total byte length of the indexed text.
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    /// Byte offset of the codepoint at `index`.
    ///
    /// `index == count()` is the end boundary and maps to the byte length;
    /// anything beyond fails with `IndexOutOfRange`.
    pub fn byte_offset(&self, index: usize) -> Result<usize> {
        if index < self.offsets.len() {
            Ok(self.offsets[index])
        } else if index == self.offsets.len() {
            Ok(self.byte_len)
        } else {
            Err(PhonogramError::IndexOutOfRange {
                index,
                count: self.offsets.len(),
            })
        }
    }

    /// Slice `len` codepoints of `text` starting at codepoint `start`.
    ///
    /// `text` must be the same string the index was built from. The returned
    /// subslice always lies on character boundaries.
    pub fn slice<'t>(&self, text: &'t str, start: usize, len: usize) -> Result<&'t str> {
        let from = self.byte_offset(start)?;
        let to = self.byte_offset(start + len)?;
        Ok(&text[from..to])
    }
}
