//! Values files and placeholder arguments

use crate::{Placeholders, SampleValues, StatValues, parse_stat_reference};
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// One entry of a values file: a number or a list of numbers
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ValueEntry {
    One(f64),
    Many(Vec<f64>),
}

impl ValueEntry {
    pub fn into_vec(self) -> Vec<f64> {
        match self {
            Self::One(value) => vec![value],
            Self::Many(values) => values,
        }
    }
}

fn read_entries(text: &str) -> Result<BTreeMap<String, ValueEntry>> {
    serde_json::from_str(text)
        .context("Values must be a JSON object mapping statistic references to numbers or arrays")
}

/// Parse a JSON object of `"reference": number`
pub fn parse_values(text: &str, category: &str) -> Result<StatValues> {
    let mut values = StatValues::new();
    for (key, entry) in read_entries(text)? {
        let reference = parse_stat_reference(&key, category)
            .with_context(|| format!("Invalid statistic reference `{key}`"))?;
        let ValueEntry::One(value) = entry else {
            bail!("`{key}` must map to a single number");
        };
        values.insert(reference, value);
    }
    Ok(values)
}

/// Parse a JSON object of `"reference": number | [numbers]`
pub fn parse_samples(text: &str, category: &str) -> Result<SampleValues> {
    let mut samples = SampleValues::new();
    for (key, entry) in read_entries(text)? {
        let reference = parse_stat_reference(&key, category)
            .with_context(|| format!("Invalid statistic reference `{key}`"))?;
        samples.insert(reference, entry.into_vec());
    }
    Ok(samples)
}

pub fn load_values(path: &Path, category: &str) -> Result<StatValues> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read values file: {}", path.display()))?;
    parse_values(&text, category)
}

pub fn load_samples(path: &Path, category: &str) -> Result<SampleValues> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read values file: {}", path.display()))?;
    parse_samples(&text, category)
}

/// Parse repeated `key=value` arguments
pub fn parse_placeholders(args: &[String]) -> Result<Placeholders> {
    let mut placeholders = Placeholders::new();
    for arg in args {
        let Some((key, value)) = arg.split_once('=') else {
            bail!("Invalid placeholder format: {arg}. Expected key=value");
        };
        let key = key.trim();
        if key.is_empty() {
            bail!("Invalid placeholder format: {arg}. Key is empty");
        }
        placeholders.insert(key.to_string(), value.trim().to_string());
    }
    Ok(placeholders)
}
