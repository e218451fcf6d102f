//! Derived statistic expressions for Rust
//!
//! A derived statistic is defined by a one-line assignment such as
//! `pvp.kdr = kills / deaths`. This crate ties the workspace together:
//! - Parsing the assignment into a syntax tree
//! - Extracting the statistic it defines and the statistics it reads
//! - Compiling once and evaluating many times against value maps
//! - Rewriting the source with known values substituted in
//!
//! # Example
//!
//! ```
//! use statexpr::{StatReference, StatValues};
//!
//! let expr = statexpr::compile("kdr = kills / deaths", "pvp")?;
//! let values = StatValues::from([
//!     (StatReference::new("pvp", "kills"), 12.0),
//!     (StatReference::new("pvp", "deaths"), 4.0),
//! ]);
//! assert_eq!(expr.evaluate_values(&values)?, 3.0);
//! # Ok::<(), statexpr::StatExprError>(())
//! ```

// Re-export all public APIs from internal crates
pub use statexpr_ast as ast;
pub use statexpr_diagnostics as diagnostics;
pub use statexpr_eval as eval;
pub use statexpr_parser as parser;
pub use statexpr_types as types;

// Convenience re-exports
pub use statexpr_diagnostics::{Result, StatExprError};
pub use statexpr_eval::{EvaluationResult, StatDependencies};
pub use statexpr_parser::parse;
pub use statexpr_types::{Dimensions, Placeholders, SampleValues, StatReference, StatValues};

mod compiled;
mod substitute;

pub use compiled::{CompiledExpression, compile};

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;

/// Build a reference from text such as `kills{map:"foo"}`; an unqualified
/// name takes `default_category`
pub fn parse_stat_reference(text: &str, default_category: &str) -> Result<StatReference> {
    let node = statexpr_parser::parse_stat_ref(text)?;
    Ok(StatReference::from_ast(&node, default_category))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stat_reference() {
        let reference = parse_stat_reference("kills{map:\"foo\"}", "pvp").unwrap();
        assert_eq!(reference.category(), "pvp");
        assert_eq!(reference.dimension("map"), Some("foo"));

        let qualified = parse_stat_reference("pve.kills", "pvp").unwrap();
        assert_eq!(qualified.category(), "pve");
    }

    #[test]
    fn test_parse_stat_reference_rejects_expression() {
        assert!(parse_stat_reference("kills + 1", "pvp").unwrap_err().is_syntax());
    }
}
