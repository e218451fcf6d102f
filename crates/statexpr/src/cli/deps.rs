//! Deps command implementation

use super::output::{self, OutputFormat};
use crate::StatDependencies;
use anyhow::{Context, Result};

/// Configuration for deps command
pub struct DepsConfig {
    pub expression: String,
    pub category: String,
    pub format: OutputFormat,
}

/// Print the derived statistic and the statistics it reads
pub fn deps(config: DepsConfig) -> Result<()> {
    let compiled = crate::compile(&config.expression, &config.category)?;
    let dependencies = compiled.dependencies();

    let json = serde_json::to_value(dependencies).context("Failed to serialize dependencies")?;
    output::print_output(&format_text(dependencies), &json, config.format)
}

fn format_text(dependencies: &StatDependencies) -> String {
    let mut out = format!("derived: {}", dependencies.derived);
    if dependencies.dependents.is_empty() {
        out.push_str("\ndependents: (none)");
    } else {
        out.push_str("\ndependents:");
        for reference in &dependencies.dependents {
            out.push_str(&format!("\n  {reference}"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_text() {
        let compiled = crate::compile("kdr = kills / MAX(deaths, 1)", "pvp").unwrap();
        assert_eq!(
            format_text(compiled.dependencies()),
            "derived: pvp.kdr\ndependents:\n  pvp.kills\n  pvp.deaths"
        );
    }

    #[test]
    fn test_format_text_without_dependents() {
        let compiled = crate::compile("answer = 6 * 7", "pvp").unwrap();
        assert_eq!(
            format_text(compiled.dependencies()),
            "derived: pvp.answer\ndependents: (none)"
        );
    }
}
