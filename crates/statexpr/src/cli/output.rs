//! Output formatting utilities

use crate::StatExprError;
use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::Value;
use std::io::IsTerminal;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Set up color output based on user preference
pub fn setup_colors(mode: &str) {
    match mode.to_lowercase().as_str() {
        "always" => colored::control::set_override(true),
        "never" => colored::control::set_override(false),
        _ => colored::control::set_override(std::io::stderr().is_terminal()),
    }
}

/// Format an error for display.
///
/// Expression errors are rendered as diagnostics pointing into the text they
/// came from: the offending text of a syntax error, `source` otherwise.
pub fn format_error(error: &anyhow::Error, source: &str) -> String {
    let Some(err) = error.downcast_ref::<StatExprError>() else {
        return format!("{} {:#}", "error:".red().bold(), error);
    };

    let text = match err {
        StatExprError::Syntax { expression, .. } => expression.as_str(),
        _ => source,
    };
    let rendered = err.to_diagnostic().render(text);

    // context added on the way up, e.g. which values file entry failed
    if error.to_string() != err.to_string() {
        format!("{} {}\n{}", "error:".red().bold(), error, rendered)
    } else {
        rendered
    }
}

/// Print either the plain text or the JSON form of a result
pub fn print_output(text: &str, json: &Value, format: OutputFormat) -> Result<()> {
    let content = match format {
        OutputFormat::Text => text.to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(json).context("Failed to serialize JSON")?,
    };
    println!("{content}");
    Ok(())
}
