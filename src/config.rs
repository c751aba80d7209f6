//! Gram generation configuration.
//!
//! [`GramSpec`] is the immutable configuration a pipeline is built from: the
//! gram size window, the generation mode (full sliding window or edge
//! anchored) and the two content-inclusion flags. Besides direct
//! construction it can be parsed from the flat string-to-string argument
//! maps used by search-analysis plugin configuration, with the factory
//! option names `minGram`, `maxGram`, `side`, `nGramChinese`, and
//! `nGramNumber`.
//!
//! # Examples
//!
//! ```
//! use phonogram::config::{GramMode, GramSpec, Side};
//!
//! let spec = GramSpec::edge(Side::Front, 1, 4).unwrap();
//! assert_eq!(spec.mode, GramMode::Edge(Side::Front));
//!
//! // Invalid windows are rejected at construction, never reordered.
//! assert!(GramSpec::full(5, 2).is_err());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PhonogramError, Result};

/// Default minimum gram codepoint length.
pub const DEFAULT_MIN_GRAM: usize = 2;
/// Default maximum gram codepoint length.
pub const DEFAULT_MAX_GRAM: usize = 20;
/// Default anchor side for edge mode.
pub const DEFAULT_SIDE: Side = Side::Front;
/// Whether CJK-looking tokens are expanded by default.
pub const DEFAULT_NGRAM_CHINESE: bool = false;
/// Whether all-numeric tokens are expanded by default.
pub const DEFAULT_NGRAM_NUMBER: bool = false;

const OPT_MIN_GRAM: &str = "minGram";
const OPT_MAX_GRAM: &str = "maxGram";
const OPT_SIDE: &str = "side";
const OPT_NGRAM_CHINESE: &str = "nGramChinese";
const OPT_NGRAM_NUMBER: &str = "nGramNumber";

/// The anchored end of an edge gram.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Grams grow from the start of the token.
    Front,
    /// Grams grow from the end of the token.
    Back,
}

impl Side {
    /// The configuration label of this side.
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Front => "front",
            Side::Back => "back",
        }
    }
}

impl FromStr for Side {
    type Err = PhonogramError;

    /// Parse a side label, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("front") {
            Ok(Side::Front)
        } else if s.eq_ignore_ascii_case("back") {
            Ok(Side::Back)
        } else {
            Err(PhonogramError::config(format!(
                "side must be either front or back, got '{s}'"
            )))
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How grams are cut out of a source token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GramMode {
    /// Sliding window across the whole token: every codepoint sub-sequence
    /// with a length inside the configured window.
    #[default]
    Full,
    /// Growing prefix or suffix anchored to one end of the token.
    Edge(Side),
}

/// Immutable configuration for one gram pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GramSpec {
    /// Minimum gram codepoint length. Invariant: `min_gram >= 1`.
    pub min_gram: usize,
    /// Maximum gram codepoint length. Invariant: `min_gram <= max_gram`.
    pub max_gram: usize,
    /// Generation mode.
    pub mode: GramMode,
    /// Expand tokens containing CJK codepoints instead of forwarding them.
    pub include_chinese: bool,
    /// Expand all-numeric tokens instead of forwarding them.
    pub include_numeric: bool,
}

impl Default for GramSpec {
    fn default() -> Self {
        GramSpec {
            min_gram: DEFAULT_MIN_GRAM,
            max_gram: DEFAULT_MAX_GRAM,
            mode: GramMode::Full,
            include_chinese: DEFAULT_NGRAM_CHINESE,
            include_numeric: DEFAULT_NGRAM_NUMBER,
        }
    }
}

impl GramSpec {
    /// Create a validated full-mode spec with the given gram window.
    pub fn full(min_gram: usize, max_gram: usize) -> Result<Self> {
        let spec = GramSpec {
            min_gram,
            max_gram,
            mode: GramMode::Full,
            ..GramSpec::default()
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Create a validated edge-mode spec anchored at `side`.
    pub fn edge(side: Side, min_gram: usize, max_gram: usize) -> Result<Self> {
        let spec = GramSpec {
            min_gram,
            max_gram,
            mode: GramMode::Edge(side),
            ..GramSpec::default()
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Set the gram size window.
    pub fn with_gram_range(mut self, min_gram: usize, max_gram: usize) -> Self {
        self.min_gram = min_gram;
        self.max_gram = max_gram;
        self
    }

    /// Set the generation mode.
    pub fn with_mode(mut self, mode: GramMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set whether CJK-containing tokens are expanded.
    pub fn with_include_chinese(mut self, include: bool) -> Self {
        self.include_chinese = include;
        self
    }

    /// Set whether all-numeric tokens are expanded.
    pub fn with_include_numeric(mut self, include: bool) -> Self {
        self.include_numeric = include;
        self
    }

    /// Check the gram window invariants.
    ///
    /// Violations are configuration errors; the values are never reordered
    /// or clamped on the caller's behalf.
    pub fn validate(&self) -> Result<()> {
        if self.min_gram < 1 {
            return Err(PhonogramError::config("minGram must be greater than zero"));
        }
        if self.min_gram > self.max_gram {
            return Err(PhonogramError::config(
                "minGram must not be greater than maxGram",
            ));
        }
        Ok(())
    }

    /// Parse a full-mode spec from a plugin-style argument map.
    ///
    /// Recognized options: `minGram`, `maxGram`, `nGramChinese`,
    /// `nGramNumber`. Unknown options are rejected.
    pub fn full_from_args(args: &HashMap<String, String>) -> Result<Self> {
        reject_unknown(
            args,
            &[OPT_MIN_GRAM, OPT_MAX_GRAM, OPT_NGRAM_CHINESE, OPT_NGRAM_NUMBER],
        )?;
        let spec = GramSpec {
            min_gram: get_usize(args, OPT_MIN_GRAM, DEFAULT_MIN_GRAM)?,
            max_gram: get_usize(args, OPT_MAX_GRAM, DEFAULT_MAX_GRAM)?,
            mode: GramMode::Full,
            include_chinese: get_bool(args, OPT_NGRAM_CHINESE, DEFAULT_NGRAM_CHINESE)?,
            include_numeric: get_bool(args, OPT_NGRAM_NUMBER, DEFAULT_NGRAM_NUMBER)?,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Parse an edge-mode spec from a plugin-style argument map.
    ///
    /// Recognized options: `minGram`, `maxGram`, `side`, `nGramChinese`,
    /// `nGramNumber`. Unknown options are rejected.
    pub fn edge_from_args(args: &HashMap<String, String>) -> Result<Self> {
        reject_unknown(
            args,
            &[
                OPT_MIN_GRAM,
                OPT_MAX_GRAM,
                OPT_SIDE,
                OPT_NGRAM_CHINESE,
                OPT_NGRAM_NUMBER,
            ],
        )?;
        let side = match args.get(OPT_SIDE) {
            Some(raw) => raw.parse::<Side>()?,
            None => DEFAULT_SIDE,
        };
        let spec = GramSpec {
            min_gram: get_usize(args, OPT_MIN_GRAM, DEFAULT_MIN_GRAM)?,
            max_gram: get_usize(args, OPT_MAX_GRAM, DEFAULT_MAX_GRAM)?,
            mode: GramMode::Edge(side),
            include_chinese: get_bool(args, OPT_NGRAM_CHINESE, DEFAULT_NGRAM_CHINESE)?,
            include_numeric: get_bool(args, OPT_NGRAM_NUMBER, DEFAULT_NGRAM_NUMBER)?,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// The anchor side, when in edge mode.
    pub fn side(&self) -> Option<Side> {
        match self.mode {
            GramMode::Edge(side) => Some(side),
            GramMode::Full => None,
        }
    }
}

fn reject_unknown(args: &HashMap<String, String>, recognized: &[&str]) -> Result<()> {
    for key in args.keys() {
        if !recognized.contains(&key.as_str()) {
            return Err(PhonogramError::config(format!("unknown option '{key}'")));
        }
    }
    Ok(())
}

fn get_usize(args: &HashMap<String, String>, key: &str, default: usize) -> Result<usize> {
    match args.get(key) {
        Some(raw) => raw.parse().map_err(|_| {
            PhonogramError::config(format!("option {key} expects an integer, got '{raw}'"))
        }),
        None => Ok(default),
    }
}

fn get_bool(args: &HashMap<String, String>, key: &str, default: bool) -> Result<bool> {
    match args.get(key) {
        Some(raw) => raw.parse().map_err(|_| {
            PhonogramError::config(format!("option {key} expects true or false, got '{raw}'"))
        }),
        None => Ok(default),
    }
}
