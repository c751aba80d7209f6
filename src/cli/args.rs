//! Command line argument parsing for the phonogram CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_MAX_GRAM, DEFAULT_MIN_GRAM, GramMode, GramSpec, Side};

/// Phonogram - n-gram expansion for phonetic token streams
#[derive(Parser, Debug, Clone)]
#[command(name = "phonogram")]
#[command(about = "N-gram expansion for phonetic token streams")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PhonogramArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "text")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl PhonogramArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Segment text and expand it into grams
    Analyze(AnalyzeArgs),

    /// Parse factory-style key=value options into a configuration
    #[command(name = "parse-options")]
    ParseOptions(ParseOptionsArgs),
}

/// Arguments for analyzing text
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text to analyze (reads stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Gram generation mode
    #[arg(short = 'm', long, default_value = "full")]
    pub mode: ModeArg,

    /// Token side to grow edge grams from
    #[arg(long, default_value = "front")]
    pub side: SideArg,

    /// Minimum gram length in codepoints
    #[arg(long, default_value_t = DEFAULT_MIN_GRAM)]
    pub min_gram: usize,

    /// Maximum gram length in codepoints
    #[arg(long, default_value_t = DEFAULT_MAX_GRAM)]
    pub max_gram: usize,

    /// Expand tokens containing Han characters instead of forwarding them
    #[arg(long)]
    pub ngram_chinese: bool,

    /// Expand all-numeric tokens instead of forwarding them
    #[arg(long)]
    pub ngram_number: bool,
}

impl AnalyzeArgs {
    /// Build the gram configuration these flags describe.
    pub fn to_spec(&self) -> GramSpec {
        let mode = match self.mode {
            ModeArg::Full => GramMode::Full,
            ModeArg::Edge => GramMode::Edge(self.side.into()),
        };
        GramSpec::default()
            .with_gram_range(self.min_gram, self.max_gram)
            .with_mode(mode)
            .with_include_chinese(self.ngram_chinese)
            .with_include_numeric(self.ngram_number)
    }
}

/// Arguments for parsing factory options
#[derive(Parser, Debug, Clone)]
pub struct ParseOptionsArgs {
    /// Which factory surface to parse against
    #[arg(short = 'm', long, default_value = "full")]
    pub mode: ModeArg,

    /// Option pairs, e.g. minGram=2 maxGram=5
    #[arg(value_name = "KEY=VALUE")]
    pub options: Vec<String>,
}

/// Gram generation modes available in the CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeArg {
    /// Sliding window over the whole token
    Full,
    /// Growing prefix or suffix
    Edge,
}

/// Edge sides available in the CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SideArg {
    /// Grow grams from the start of the token
    Front,
    /// Grow grams from the end of the token
    Back,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Front => Side::Front,
            SideArg::Back => Side::Back,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token per line with offsets and positions
    Text,
    /// JSON output
    Json,
}
