//! Full-mode gram generation: a sliding window across the whole token.
//!
//! For a source token of `n` codepoints and a window of `[min, max]`, the
//! generator visits every `(pos, size)` pair with `pos + size <= n` and
//! `min <= size <= max`, in ascending `pos` then ascending `size` order.
//! The enumeration is stable, so tests can assert on it:
//!
//! ```text
//! "pin", min=2, max=3:
//!   (0,2) "pi"   (0,3) "pin"   (1,2) "in"
//! ```
//!
//! All grams of one source token report the source's full byte span, so a
//! downstream highlighter maps any matched gram back to the whole original
//! token.

use crate::codepoint::CodepointIndex;
use crate::config::GramSpec;
use crate::error::Result;
use crate::token::Token;

/// Sliding-window expansion state for one source token.
///
/// Construction decides the token's fate: tokens shorter than the minimum
/// gram length produce no generator and therefore no output at all. This is
/// not the same thing as exemption: an exempt token is forwarded unchanged,
/// a sub-minimum non-exempt token vanishes from the stream.
#[derive(Debug)]
pub struct NGramGenerator {
    source: Token,
    index: CodepointIndex,
    /// Codepoint count of the source text.
    count: usize,
    min_gram: usize,
    max_gram: usize,
    /// Codepoint position of the window start.
    pos: usize,
    /// Size the next emission will have, if it fits.
    size: usize,
    /// Increment for the next emission; the source's own increment for the
    /// first gram, 0 afterwards.
    pending_increment: usize,
}

impl NGramGenerator {
    /// Begin expanding `source` under `spec`, or return `None` when the
    /// token is shorter than `min_gram` codepoints.
    pub fn begin(source: Token, spec: &GramSpec) -> Option<Self> {
        let index = CodepointIndex::new(&source.text);
        let count = index.count();
        if count < spec.min_gram {
            return None;
        }
        let pending_increment = source.position_increment;
        Some(NGramGenerator {
            source,
            index,
            count,
            min_gram: spec.min_gram,
            max_gram: spec.max_gram,
            pos: 0,
            size: spec.min_gram,
            pending_increment,
        })
    }

    /// Produce the next gram, or `Ok(None)` once every window position has
    /// been visited.
    pub fn next_gram(&mut self) -> Result<Option<Token>> {
        if self.size > self.max_gram || self.pos + self.size > self.count {
            self.pos += 1;
            self.size = self.min_gram;
        }
        if self.pos + self.size > self.count {
            return Ok(None);
        }

        let text = self
            .index
            .slice(&self.source.text, self.pos, self.size)?
            .to_string();
        let gram = Token {
            text,
            // Full mode reports the whole source span on every gram.
            start_offset: self.source.start_offset,
            end_offset: self.source.end_offset,
            position_increment: self.take_increment(),
            position_length: self.source.position_length,
            kind: self.source.kind,
        };
        self.size += 1;
        Ok(Some(gram))
    }

    fn take_increment(&mut self) -> usize {
        let increment = self.pending_increment;
        self.pending_increment = 0;
        increment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(mut generator: NGramGenerator) -> Vec<Token> {
        let mut grams = Vec::new();
        while let Some(gram) = generator.next_gram().unwrap() {
            grams.push(gram);
        }
        grams
    }

    #[test]
    fn test_pin_window() {
        let spec = GramSpec::full(2, 3).unwrap();
        let source = Token::with_offsets("pin", 10, 13);
        let grams = drain(NGramGenerator::begin(source, &spec).unwrap());

        let texts: Vec<&str> = grams.iter().map(|g| g.text.as_str()).collect();
        assert_eq!(texts, vec!["pi", "pin", "in"]);

        // Every gram reports the source's full span.
        for gram in &grams {
            assert_eq!(gram.start_offset, 10);
            assert_eq!(gram.end_offset, 13);
        }
    }

    #[test]
    fn test_increment_handoff() {
        let spec = GramSpec::full(2, 3).unwrap();
        let source = Token::new("pin").with_position_increment(5);
        let grams = drain(NGramGenerator::begin(source, &spec).unwrap());

        let increments: Vec<usize> = grams.iter().map(|g| g.position_increment).collect();
        assert_eq!(increments, vec![5, 0, 0]);
    }

    #[test]
    fn test_gram_count_formula() {
        // "nihao": 5 codepoints, window [2,3]:
        // pos 0..=3 contribute min(3, 5-pos)-2+1 grams each = 2+2+2+1.
        let spec = GramSpec::full(2, 3).unwrap();
        let grams = drain(NGramGenerator::begin(Token::new("nihao"), &spec).unwrap());
        assert_eq!(grams.len(), 7);

        let texts: Vec<&str> = grams.iter().map(|g| g.text.as_str()).collect();
        assert_eq!(texts, vec!["ni", "nih", "ih", "iha", "ha", "hao", "ao"]);
    }

    #[test]
    fn test_sub_minimum_dropped() {
        let spec = GramSpec::full(2, 20).unwrap();
        assert!(NGramGenerator::begin(Token::new("a"), &spec).is_none());
        assert!(NGramGenerator::begin(Token::new(""), &spec).is_none());
    }

    #[test]
    fn test_window_larger_than_token() {
        let spec = GramSpec::full(1, 5).unwrap();
        let grams = drain(NGramGenerator::begin(Token::new("ab"), &spec).unwrap());
        let texts: Vec<&str> = grams.iter().map(|g| g.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "ab", "b"]);
    }

    #[test]
    fn test_multibyte_boundaries() {
        // Grams are cut in codepoints, never through a multi-byte character.
        let spec = GramSpec::full(1, 2).unwrap();
        let grams = drain(NGramGenerator::begin(Token::new("中文字"), &spec).unwrap());
        let texts: Vec<&str> = grams.iter().map(|g| g.text.as_str()).collect();
        assert_eq!(texts, vec!["中", "中文", "文", "文字", "字"]);
    }

    #[test]
    fn test_metadata_inherited() {
        let spec = GramSpec::full(2, 2).unwrap();
        let source = Token::new("abc").with_position_length(3);
        let grams = drain(NGramGenerator::begin(source, &spec).unwrap());
        assert!(grams.iter().all(|g| g.position_length == 3));
    }
}
