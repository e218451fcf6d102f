//! Substitute command implementation

use super::input;
use super::output::{self, OutputFormat};
use anyhow::Result;
use serde_json::json;
use std::path::PathBuf;

/// Configuration for substitute command
pub struct SubstituteConfig {
    pub expression: String,
    pub category: String,
    /// JSON object of `"reference": number | [numbers]`
    pub values: PathBuf,
    pub format: OutputFormat,
}

/// Print the expression with the known statistics replaced by their values
pub fn substitute(config: SubstituteConfig) -> Result<()> {
    let compiled = crate::compile(&config.expression, &config.category)?;
    let samples = input::load_samples(&config.values, &config.category)?;

    let rewritten = compiled.substitute(&samples)?;
    let json = json!({ "expression": rewritten });
    output::print_output(&rewritten, &json, config.format)
}
