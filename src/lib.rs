//! # Phonogram
//!
//! N-gram and edge n-gram expansion for phonetic token streams, built for
//! partial, prefix, and fuzzy matching over transliterated text.
//!
//! ## Features
//!
//! - Full sliding-window and growing-edge gram generation
//! - Codepoint-aware slicing, safe on any Unicode plane
//! - Exemption rules that keep original-script and numeric terms intact
//! - Pull-based pipeline with bounded memory and replayable streams
//! - Factory-style `key=value` configuration parsing

pub mod classify;
pub mod cli;
pub mod codepoint;
pub mod config;
pub mod error;
pub mod gram;
pub mod pipeline;
pub mod source;
pub mod token;

pub mod prelude {
    pub use crate::config::{GramMode, GramSpec, Side};
    pub use crate::error::{PhonogramError, Result};
    pub use crate::pipeline::GramFilterPipeline;
    pub use crate::source::{TokenSource, UnicodeWordSource, VecSource};
    pub use crate::token::{Token, TokenKind};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
