//! A token source that segments raw text on Unicode word boundaries.

use unicode_segmentation::UnicodeSegmentation;

use crate::error::Result;
use crate::source::TokenSource;
use crate::token::Token;

/// Splits text into word tokens per UAX-29 word boundaries, dropping
/// segments with no alphanumeric content (whitespace, punctuation runs).
///
/// Offsets are byte positions into the original text. Tokens come out with
/// the default kind and a position increment of 1; tagging terms as
/// transliterations or originals is the job of whatever produced the text,
/// so a plain-text source leaves every token untagged. Note that UAX-29
/// treats each Han character as its own segment, which suits the exemption
/// rules downstream: original-script characters surface as single tokens.
///
/// Segmentation happens once at construction; pulling and resetting just
/// move a cursor over the prepared list.
#[derive(Debug, Clone)]
pub struct UnicodeWordSource {
    tokens: Vec<Token>,
    cursor: usize,
}

impl UnicodeWordSource {
    pub fn new(text: &str) -> Self {
        let tokens = text
            .split_word_bound_indices()
            .filter(|(_, segment)| segment.chars().any(|c| c.is_alphanumeric()))
            .map(|(offset, segment)| {
                Token::with_offsets(segment, offset, offset + segment.len())
            })
            .collect();
        UnicodeWordSource { tokens, cursor: 0 }
    }
}

impl TokenSource for UnicodeWordSource {
    fn pull(&mut self) -> Result<Option<Token>> {
        match self.tokens.get(self.cursor) {
            Some(token) => {
                self.cursor += 1;
                Ok(Some(token.clone()))
            }
            None => Ok(None),
        }
    }

    fn reset(&mut self) -> Result<()> {
        self.cursor = 0;
        Ok(())
    }
}
