//! Token types for the gram expansion pipeline.
//!
//! This module defines the unit that flows through the pipeline: the
//! [`Token`] produced by an upstream segmenter and the [`TokenKind`]
//! classification it carries. Generated grams have the same shape as their
//! source token, so they are represented by [`Token`] as well; a gram is a
//! token whose text covers a codepoint sub-range of its source.
//!
//! # Position metadata
//!
//! Tokens carry `position_increment` and `position_length` rather than an
//! absolute position, enabling several tokens to share one logical slot:
//!
//! ```text
//! Source: "pin" (increment 1)
//! Grams:  "pi"  (increment 1)   ← keeps the source's increment
//!         "pin" (increment 0)   ← same logical position
//!         "in"  (increment 0)   ← same logical position
//! ```
//!
//! A phrase or proximity query then matches any of the grams at that slot
//! without the expansion fragmenting term positions.
//!
//! # Examples
//!
//! Creating a token with offsets into the source document:
//!
//! ```
//! use phonogram::token::Token;
//!
//! let token = Token::with_offsets("zhong", 0, 3);
//! assert_eq!(token.text, "zhong");
//! assert_eq!(token.start_offset, 0);
//! assert_eq!(token.end_offset, 3);
//! assert_eq!(token.position_increment, 1);
//! ```
//!
//! Carrying an upstream classification:
//!
//! ```
//! use phonogram::token::{Token, TokenKind};
//!
//! let token = Token::new("中国").with_kind(TokenKind::ChineseOriginal);
//! assert_eq!(token.kind, TokenKind::ChineseOriginal);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single unit of text flowing through the expansion pipeline.
///
/// Produced by the upstream segmenter, consumed (and multiplied) by the
/// gram pipeline. The text is an owned copy: nothing in this crate aliases
/// an upstream buffer past the pull that produced the token.
///
/// # Fields
///
/// - `text` - the token's codepoint sequence
/// - `start_offset` / `end_offset` - byte offsets in the original document
/// - `position_increment` - logical distance from the previous emitted token
/// - `position_length` - number of logical positions the token spans
/// - `kind` - coarse upstream classification, see [`TokenKind`]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token.
    pub text: String,

    /// The byte offset where this token starts in the original text.
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text.
    /// Invariant: `end_offset >= start_offset`.
    pub end_offset: usize,

    /// Position increment from the previous emitted token (default: 1).
    ///
    /// - 1: next logical position
    /// - 0: same position as the previous token (stacked grams, synonyms)
    /// - >1: skipped positions
    pub position_increment: usize,

    /// How many logical positions this token spans (default: 1).
    pub position_length: usize,

    /// Upstream classification of this token.
    pub kind: TokenKind,
}

/// Coarse token classification carried from the upstream segmenter.
///
/// The serialized names match the type strings the upstream transliteration
/// stage tags tokens with, so round-tripping a token through JSON preserves
/// the wire-visible classification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// A word the upstream already emitted in its final, atomic form.
    /// Never re-split.
    #[serde(rename = "normal_word")]
    Normal,
    /// The original form of a numeric run, kept alongside its expansion.
    #[serde(rename = "numeric_original")]
    NumericOriginal,
    /// The original form of a CJK run, kept alongside its transliteration.
    #[serde(rename = "chinese_original")]
    ChineseOriginal,
    /// Anything else; the default for untagged tokens.
    #[default]
    #[serde(rename = "word")]
    Other,
}

impl TokenKind {
    /// The wire name of this kind, as tagged by the upstream stage.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Normal => "normal_word",
            TokenKind::NumericOriginal => "numeric_original",
            TokenKind::ChineseOriginal => "chinese_original",
            TokenKind::Other => "word",
        }
    }
}

impl Token {
    /// Create a new token with the given text and default metadata
    /// (zero offsets, increment 1, length 1, kind [`TokenKind::Other`]).
    pub fn new<S: Into<String>>(text: S) -> Self {
        Token {
            text: text.into(),
            start_offset: 0,
            end_offset: 0,
            position_increment: 1,
            position_length: 1,
            kind: TokenKind::Other,
        }
    }

    /// Create a new token with text and byte offsets into the source text.
    pub fn with_offsets<S: Into<String>>(text: S, start_offset: usize, end_offset: usize) -> Self {
        Token {
            text: text.into(),
            start_offset,
            end_offset,
            position_increment: 1,
            position_length: 1,
            kind: TokenKind::Other,
        }
    }

    /// Get the byte length of the token text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Set the upstream classification.
    pub fn with_kind(mut self, kind: TokenKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the position increment.
    pub fn with_position_increment(mut self, increment: usize) -> Self {
        self.position_increment = increment;
        self
    }

    /// Set the position length.
    pub fn with_position_length(mut self, length: usize) -> Self {
        self.position_length = length;
        self
    }

    /// Clone this token with updated text, keeping all other metadata.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
