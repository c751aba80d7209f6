//! Upstream token sources.
//!
//! The pipeline pulls already-classified tokens from a [`TokenSource`] and
//! expands them into grams. Two bundled sources cover the common cases:
//! [`VecSource`] replays a prepared token list (tests, adapters over other
//! analysis stages) and [`UnicodeWordSource`] segments raw text into word
//! tokens for the command-line tool.

pub mod unicode_word;
pub mod vec;

pub use unicode_word::UnicodeWordSource;
pub use vec::VecSource;

use crate::error::Result;
use crate::token::Token;

/// A pull-based producer of tokens.
///
/// `pull` yields tokens one at a time and `Ok(None)` at end of stream; once
/// exhausted, a source keeps returning `Ok(None)` until [`reset`] rewinds it
/// to its starting point. Errors are terminal for the current pass; the
/// caller decides whether to reset and retry.
///
/// [`reset`]: TokenSource::reset
pub trait TokenSource {
    /// Produce the next token, or `Ok(None)` at end of stream.
    fn pull(&mut self) -> Result<Option<Token>>;

    /// Rewind to the start of the stream so it can be pulled again.
    fn reset(&mut self) -> Result<()>;
}
