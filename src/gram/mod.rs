//! Gram generators: the per-token expansion state machines.
//!
//! A generator owns one source token and walks its grams step by step; the
//! pipeline keeps at most one generator in flight and drains it before
//! pulling the next upstream token. Each call does a bounded amount of work,
//! so arbitrarily long tokens never buffer their full expansion.

pub mod edge;
pub mod full;

pub use edge::EdgeNGramGenerator;
pub use full::NGramGenerator;

use crate::config::{GramMode, GramSpec};
use crate::error::Result;
use crate::token::Token;

/// The in-flight expansion of one source token, in either mode.
#[derive(Debug)]
pub enum GramGenerator {
    Full(NGramGenerator),
    Edge(EdgeNGramGenerator),
}

impl GramGenerator {
    /// Begin expanding `source` under `spec`'s mode. Returns `None` when the
    /// token produces nothing at all (full mode drops sub-minimum tokens).
    pub fn begin(source: Token, spec: &GramSpec) -> Option<Self> {
        match spec.mode {
            GramMode::Full => NGramGenerator::begin(source, spec).map(GramGenerator::Full),
            GramMode::Edge(side) => Some(GramGenerator::Edge(EdgeNGramGenerator::begin(
                source, side, spec,
            ))),
        }
    }

    /// Produce the next gram from the expansion.
    pub fn next_gram(&mut self) -> Result<Option<Token>> {
        match self {
            GramGenerator::Full(generator) => generator.next_gram(),
            GramGenerator::Edge(generator) => generator.next_gram(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Side;

    #[test]
    fn test_mode_dispatch() {
        let full = GramSpec::full(2, 3).unwrap();
        let edge = GramSpec::edge(Side::Back, 2, 3).unwrap();

        assert!(matches!(
            GramGenerator::begin(Token::new("pin"), &full),
            Some(GramGenerator::Full(_))
        ));
        assert!(matches!(
            GramGenerator::begin(Token::new("pin"), &edge),
            Some(GramGenerator::Edge(_))
        ));
    }

    #[test]
    fn test_sub_minimum_dispatch() {
        // Full mode refuses a short token; edge mode accepts it.
        let full = GramSpec::full(2, 3).unwrap();
        let edge = GramSpec::edge(Side::Front, 2, 3).unwrap();

        assert!(GramGenerator::begin(Token::new("a"), &full).is_none());
        assert!(GramGenerator::begin(Token::new("a"), &edge).is_some());
    }
}
