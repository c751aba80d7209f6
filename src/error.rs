//! Error types for the phonogram library.
//!
//! All fallible operations in this crate return [`Result`], whose error type
//! is the [`PhonogramError`] enum. The taxonomy is small: every failure in
//! the core is deterministic and detected either at construction
//! (configuration) or on a violated indexing invariant; upstream token
//! sources may additionally surface their own failures, which pass through
//! the pipeline unchanged.
//!
//! # Examples
//!
//! ```
//! use phonogram::error::{PhonogramError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(PhonogramError::config("minGram must be greater than zero"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for phonogram operations.
#[derive(Error, Debug)]
pub enum PhonogramError {
    /// Invalid configuration, rejected at construction time. The pipeline
    /// never operates in a partial or degraded mode.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A codepoint index was requested past the end of a token's text. This
    /// is an invariant violation (a miscount between declared offsets and
    /// actual codepoint content), never clamped.
    #[error("Codepoint index {index} out of range (sequence has {count} codepoints)")]
    IndexOutOfRange {
        /// The requested codepoint index.
        index: usize,
        /// The codepoint count of the sequence.
        count: usize,
    },

    /// I/O errors (CLI input handling; the core itself performs no I/O).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization errors from the CLI output path.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failure raised by an upstream token source, propagated unchanged.
    #[error("Upstream error: {0}")]
    Upstream(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with [`PhonogramError`].
pub type Result<T> = std::result::Result<T, PhonogramError>;

impl PhonogramError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        PhonogramError::Config(msg.into())
    }

    /// Create a new upstream error from a plain message.
    pub fn upstream<S: Into<String>>(msg: S) -> Self {
        PhonogramError::Upstream(anyhow::anyhow!(msg.into()))
    }
}
