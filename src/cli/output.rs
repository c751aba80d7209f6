//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, PhonogramArgs};
use crate::error::Result;
use crate::token::Token;

/// Result structure for the analyze command.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub tokens: Vec<Token>,
    pub token_count: usize,
    pub duration_ms: u64,
}

/// Result structure for the parse-options command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ParsedOptionsResult {
    pub mode: String,
    pub min_gram: usize,
    pub max_gram: usize,
    pub side: Option<String>,
    pub ngram_chinese: bool,
    pub ngram_number: bool,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &PhonogramArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Text => output_text(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &PhonogramArgs) -> Result<()> {
    let output = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{output}");
    Ok(())
}

/// Output in text format, picking a renderer from the value's shape.
fn output_text<T: Serialize>(message: &str, result: &T, args: &PhonogramArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    match value.as_object() {
        Some(obj) if obj.contains_key("tokens") => output_token_list_text(&value, args),
        _ => output_generic_text(&value, args),
    }
}

/// Output an analysis result as one token per line.
fn output_token_list_text(value: &serde_json::Value, args: &PhonogramArgs) -> Result<()> {
    if let Some(obj) = value.as_object() {
        if let Some(tokens) = obj.get("tokens").and_then(|t| t.as_array()) {
            for token in tokens {
                let text = token.get("text").and_then(|v| v.as_str()).unwrap_or("");
                let start = token
                    .get("start_offset")
                    .and_then(|v| v.as_u64())
                    .unwrap_or(0);
                let end = token.get("end_offset").and_then(|v| v.as_u64()).unwrap_or(0);
                let increment = token
                    .get("position_increment")
                    .and_then(|v| v.as_u64())
                    .unwrap_or(1);
                let kind = token.get("kind").and_then(|v| v.as_str()).unwrap_or("word");
                println!("{text}\t{start}..{end}\t+{increment}\t{kind}");
            }
        }

        if args.verbosity() > 1 {
            println!();
            if let Some(count) = obj.get("token_count").and_then(|c| c.as_u64()) {
                println!("Tokens: {count}");
            }
            if let Some(duration) = obj.get("duration_ms").and_then(|d| d.as_u64()) {
                println!("Analysis time: {duration}ms");
            }
        }
    }
    Ok(())
}

/// Output any flat object as key: value lines.
fn output_generic_text(value: &serde_json::Value, _args: &PhonogramArgs) -> Result<()> {
    if let Some(obj) = value.as_object() {
        for (key, field_value) in obj {
            match field_value {
                serde_json::Value::Null => {}
                serde_json::Value::String(s) => println!("{key}: {s}"),
                other => println!("{key}: {other}"),
            }
        }
    } else {
        println!("{value}");
    }
    Ok(())
}
