//! A replayable source over a prepared token list.

use crate::error::Result;
use crate::source::TokenSource;
use crate::token::Token;

/// Serves tokens from an owned `Vec`, cloning each on the way out so the
/// list survives for [`reset`](TokenSource::reset) replays.
#[derive(Debug, Clone, Default)]
pub struct VecSource {
    tokens: Vec<Token>,
    cursor: usize,
}

impl VecSource {
    pub fn new(tokens: Vec<Token>) -> Self {
        VecSource { tokens, cursor: 0 }
    }

    /// Number of tokens served per pass.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl From<Vec<Token>> for VecSource {
    fn from(tokens: Vec<Token>) -> Self {
        VecSource::new(tokens)
    }
}

impl FromIterator<Token> for VecSource {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        VecSource::new(iter.into_iter().collect())
    }
}

impl TokenSource for VecSource {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pull_in_order_then_exhaust() {
        let mut source = VecSource::new(vec![Token::new("ni"), Token::new("hao")]);

        assert_eq!(source.pull().unwrap().unwrap().text, "ni");
        assert_eq!(source.pull().unwrap().unwrap().text, "hao");
        assert!(source.pull().unwrap().is_none());
        // Stays exhausted.
        assert!(source.pull().unwrap().is_none());
    }

    #[test]
    fn test_reset_replays_from_start() {
        let mut source: VecSource = vec![Token::new("ni"), Token::new("hao")]
            .into_iter()
            .collect();

        while source.pull().unwrap().is_some() {}
        source.reset().unwrap();
        assert_eq!(source.pull().unwrap().unwrap().text, "ni");
    }

    #[test]
    fn test_empty() {
        let mut source = VecSource::default();
        assert!(source.is_empty());
        assert!(source.pull().unwrap().is_none());
    }
}
