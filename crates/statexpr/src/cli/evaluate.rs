//! Eval and samples command implementations

use super::input;
use super::output::{self, OutputFormat};
use crate::ast::format_number;
use crate::{CompiledExpression, StatValues};
use anyhow::Result;
use serde_json::json;
use std::path::PathBuf;

/// Configuration for eval command
pub struct EvalConfig {
    pub expression: String,
    pub category: String,
    /// JSON object of `"reference": number`
    pub values: Option<PathBuf>,
    /// `key=value` pairs; the derived statistic's own dimensions apply when empty
    pub placeholders: Vec<String>,
    pub verbose: bool,
    pub format: OutputFormat,
}

/// Configuration for samples command
pub struct SamplesConfig {
    pub expression: String,
    pub category: String,
    /// JSON object of `"reference": [numbers]`
    pub values: PathBuf,
    pub verbose: bool,
    pub format: OutputFormat,
}

/// Evaluate against single values
pub fn eval(config: EvalConfig) -> Result<()> {
    let compiled = crate::compile(&config.expression, &config.category)?;

    let values = match &config.values {
        Some(path) => input::load_values(path, &config.category)?,
        None => StatValues::new(),
    };
    if config.verbose {
        eprintln!("Loaded {} statistic values", values.len());
    }

    let value = if config.placeholders.is_empty() {
        compiled.evaluate_values(&values)?
    } else {
        let placeholders = input::parse_placeholders(&config.placeholders)?;
        compiled.evaluate(&values, &placeholders)?
    };

    print_value(&compiled, value, config.format)
}

/// Evaluate against sample lists
pub fn samples(config: SamplesConfig) -> Result<()> {
    let compiled = crate::compile(&config.expression, &config.category)?;

    let samples = input::load_samples(&config.values, &config.category)?;
    if config.verbose {
        let total: usize = samples.values().map(Vec::len).sum();
        eprintln!("Loaded {} samples for {} statistics", total, samples.len());
    }

    let value = compiled.evaluate_samples(&samples)?;
    print_value(&compiled, value, config.format)
}

fn print_value(compiled: &CompiledExpression, value: f64, format: OutputFormat) -> Result<()> {
    let derived = compiled.dependencies().derived.to_string();
    // JSON has no NaN or infinities; those travel as their text form
    let number = if value.is_finite() {
        json!(value)
    } else {
        json!(format_number(value))
    };
    let json = json!({ "derived": derived, "value": number });
    output::print_output(&format_number(value), &json, format)
}
