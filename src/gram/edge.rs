//! Edge-mode gram generation: prefixes or suffixes of growing length.
//!
//! Unlike the full sliding window, edge mode anchors every gram to one side
//! of the token and grows it from `min` toward `max`:
//!
//! ```text
//! "yin", front, min=1, max=3:   "y"  "yi"  "yin"
//! "yin", back,  min=1, max=3:   "n"  "in"  "yin"
//! ```
//!
//! Edge grams report the byte span of the slice they actually cover, so a
//! prefix gram highlights just the matched prefix. Tokens shorter than the
//! minimum are not dropped here: they pass through unchanged exactly once,
//! because a too-short term is still a useful exact match for prefix search.

use crate::codepoint::CodepointIndex;
use crate::config::{GramSpec, Side};
use crate::error::Result;
use crate::token::Token;

/// What the generator will do on the next call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EdgeState {
    /// Token is shorter than `min_gram`; emit it unchanged once.
    Whole,
    /// Emit the gram of this size next.
    Growing(usize),
    Exhausted,
}

/// Growing-edge expansion state for one source token.
#[derive(Debug)]
pub struct EdgeNGramGenerator {
    source: Token,
    index: CodepointIndex,
    /// Codepoint count of the source text.
    count: usize,
    /// Largest size worth emitting: `min(max_gram, count)`.
    max_size: usize,
    side: Side,
    state: EdgeState,
    pending_increment: usize,
}

impl EdgeNGramGenerator {
    /// Begin expanding `source` from `side` under `spec`. Edge mode never
    /// refuses a token, so this always returns a generator.
    pub fn begin(source: Token, side: Side, spec: &GramSpec) -> Self {
        let index = CodepointIndex::new(&source.text);
        let count = index.count();
        let state = if count < spec.min_gram {
            EdgeState::Whole
        } else {
            EdgeState::Growing(spec.min_gram)
        };
        let pending_increment = source.position_increment;
        EdgeNGramGenerator {
            source,
            index,
            count,
            max_size: spec.max_gram.min(count),
            side,
            state,
            pending_increment,
        }
    }

    /// Produce the next gram, or `Ok(None)` once the edge has grown past
    /// `max_gram` or covered the whole token.
    pub fn next_gram(&mut self) -> Result<Option<Token>> {
        match self.state {
            EdgeState::Exhausted => Ok(None),
            EdgeState::Whole => {
                self.state = EdgeState::Exhausted;
                Ok(Some(self.source.clone()))
            }
            EdgeState::Growing(size) => {
                if size > self.max_size {
                    self.state = EdgeState::Exhausted;
                    return Ok(None);
                }
                let start = match self.side {
                    Side::Front => 0,
                    Side::Back => self.count - size,
                };
                let text = self.index.slice(&self.source.text, start, size)?.to_string();
                let start_offset = self.source.start_offset + self.index.byte_offset(start)?;
                let end_offset = self.source.start_offset + self.index.byte_offset(start + size)?;
                let gram = Token {
                    text,
                    start_offset,
                    end_offset,
                    position_increment: self.take_increment(),
                    position_length: self.source.position_length,
                    kind: self.source.kind,
                };
                // A gram covering the whole token is always the last one.
                self.state = if size == self.count {
                    EdgeState::Exhausted
                } else {
                    EdgeState::Growing(size + 1)
                };
                Ok(Some(gram))
            }
        }
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

    fn drain(mut generator: EdgeNGramGenerator) -> Vec<Token> {
        let mut grams = Vec::new();
        while let Some(gram) = generator.next_gram().unwrap() {
            grams.push(gram);
        }
        grams
    }

    #[test]
    fn test_front_growth() {
        let spec = GramSpec::edge(Side::Front, 1, 3).unwrap();
        let source = Token::with_offsets("yin", 4, 7);
        let grams = drain(EdgeNGramGenerator::begin(source, Side::Front, &spec));

        let texts: Vec<&str> = grams.iter().map(|g| g.text.as_str()).collect();
        assert_eq!(texts, vec!["y", "yi", "yin"]);

        // Edge grams report the span of the slice they cover.
        let spans: Vec<(usize, usize)> = grams
            .iter()
            .map(|g| (g.start_offset, g.end_offset))
            .collect();
        assert_eq!(spans, vec![(4, 5), (4, 6), (4, 7)]);
    }

    #[test]
    fn test_back_growth() {
        let spec = GramSpec::edge(Side::Back, 1, 3).unwrap();
        let source = Token::with_offsets("yin", 4, 7);
        let grams = drain(EdgeNGramGenerator::begin(source, Side::Back, &spec));

        let texts: Vec<&str> = grams.iter().map(|g| g.text.as_str()).collect();
        assert_eq!(texts, vec!["n", "in", "yin"]);

        let spans: Vec<(usize, usize)> = grams
            .iter()
            .map(|g| (g.start_offset, g.end_offset))
            .collect();
        assert_eq!(spans, vec![(6, 7), (5, 7), (4, 7)]);
    }

    #[test]
    fn test_max_gram_caps_growth() {
        let spec = GramSpec::edge(Side::Front, 1, 2).unwrap();
        let grams = drain(EdgeNGramGenerator::begin(
            Token::new("chang"),
            Side::Front,
            &spec,
        ));
        let texts: Vec<&str> = grams.iter().map(|g| g.text.as_str()).collect();
        assert_eq!(texts, vec!["c", "ch"]);
    }

    #[test]
    fn test_whole_token_emitted_once() {
        // max_gram beyond the token length must not duplicate the full term.
        let spec = GramSpec::edge(Side::Front, 1, 20).unwrap();
        let grams = drain(EdgeNGramGenerator::begin(
            Token::new("yi"),
            Side::Front,
            &spec,
        ));
        let texts: Vec<&str> = grams.iter().map(|g| g.text.as_str()).collect();
        assert_eq!(texts, vec!["y", "yi"]);
    }

    #[test]
    fn test_short_token_passes_through_unchanged() {
        let spec = GramSpec::edge(Side::Front, 3, 5).unwrap();
        let source = Token::with_offsets("ab", 2, 4).with_position_increment(2);
        let grams = drain(EdgeNGramGenerator::begin(source.clone(), Side::Front, &spec));
        assert_eq!(grams, vec![source]);
    }

    #[test]
    fn test_increment_handoff() {
        let spec = GramSpec::edge(Side::Front, 1, 3).unwrap();
        let source = Token::new("yin").with_position_increment(1);
        let grams = drain(EdgeNGramGenerator::begin(source, Side::Front, &spec));
        let increments: Vec<usize> = grams.iter().map(|g| g.position_increment).collect();
        assert_eq!(increments, vec![1, 0, 0]);
    }

    #[test]
    fn test_multibyte_trimmed_offsets() {
        // Each Han character is three bytes; trimmed spans count bytes.
        let spec = GramSpec::edge(Side::Front, 1, 2).unwrap();
        let source = Token::with_offsets("中文", 0, 6);
        let grams = drain(EdgeNGramGenerator::begin(source, Side::Front, &spec));

        let spans: Vec<(usize, usize)> = grams
            .iter()
            .map(|g| (g.start_offset, g.end_offset))
            .collect();
        assert_eq!(spans, vec![(0, 3), (0, 6)]);
    }

    #[test]
    fn test_back_side_multibyte() {
        let spec = GramSpec::edge(Side::Back, 1, 1).unwrap();
        let source = Token::with_offsets("中文", 10, 16);
        let grams = drain(EdgeNGramGenerator::begin(source, Side::Back, &spec));
        assert_eq!(grams.len(), 1);
        assert_eq!(grams[0].text, "文");
        assert_eq!(grams[0].start_offset, 13);
        assert_eq!(grams[0].end_offset, 16);
    }
}
