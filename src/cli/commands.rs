//! Command implementations for the phonogram CLI.

use std::collections::HashMap;
use std::io::{self, Read};
use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::{GramMode, GramSpec};
use crate::error::{PhonogramError, Result};
use crate::pipeline::GramFilterPipeline;
use crate::source::UnicodeWordSource;
use crate::token::Token;

/// Execute a CLI command.
pub fn execute_command(args: PhonogramArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze(analyze_args.clone(), &args),
        Command::ParseOptions(options_args) => parse_options(options_args.clone(), &args),
    }
}

/// Segment input text and run it through the gram pipeline.
fn analyze(args: AnalyzeArgs, cli_args: &PhonogramArgs) -> Result<()> {
    let text = match &args.text {
        Some(text) => text.clone(),
        None => read_stdin()?,
    };

    let spec = args.to_spec();
    log::debug!("analyzing {} bytes with {spec:?}", text.len());

    if cli_args.verbosity() > 1 {
        println!("Analyzing {} bytes of input", text.len());
    }

    let start = Instant::now();
    let tokens = run_analysis(&text, spec)?;
    let duration_ms = start.elapsed().as_millis() as u64;

    log::debug!("produced {} tokens in {duration_ms}ms", tokens.len());

    let token_count = tokens.len();
    output_result(
        "Analysis complete",
        &AnalysisResult {
            tokens,
            token_count,
            duration_ms,
        },
        cli_args,
    )?;

    Ok(())
}

/// Parse factory-style option pairs and show the resulting configuration.
fn parse_options(args: ParseOptionsArgs, cli_args: &PhonogramArgs) -> Result<()> {
    let pairs = parse_option_pairs(&args.options)?;
    let spec = match args.mode {
        ModeArg::Full => GramSpec::full_from_args(&pairs)?,
        ModeArg::Edge => GramSpec::edge_from_args(&pairs)?,
    };

    let result = ParsedOptionsResult {
        mode: match spec.mode {
            GramMode::Full => "full".to_string(),
            GramMode::Edge(_) => "edge".to_string(),
        },
        min_gram: spec.min_gram,
        max_gram: spec.max_gram,
        side: spec.side().map(|side| side.to_string()),
        ngram_chinese: spec.include_chinese,
        ngram_number: spec.include_numeric,
    };

    output_result("Options parsed successfully", &result, cli_args)?;

    Ok(())
}

/// Run the full segmentation-and-expansion pass over `text`.
fn run_analysis(text: &str, spec: GramSpec) -> Result<Vec<Token>> {
    let source = UnicodeWordSource::new(text);
    let mut pipeline = GramFilterPipeline::new(source, spec)?;

    let mut tokens = Vec::new();
    while let Some(token) = pipeline.pull()? {
        tokens.push(token);
    }
    Ok(tokens)
}

/// Split `key=value` arguments into an option map.
fn parse_option_pairs(options: &[String]) -> Result<HashMap<String, String>> {
    let mut pairs = HashMap::new();
    for option in options {
        let Some((key, value)) = option.split_once('=') else {
            return Err(PhonogramError::config(format!(
                "expected KEY=VALUE, got '{option}'"
            )));
        };
        if pairs.insert(key.to_string(), value.to_string()).is_some() {
            return Err(PhonogramError::config(format!(
                "option '{key}' given more than once"
            )));
        }
    }
    Ok(pairs)
}

/// Read all of stdin as the input text.
fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}
