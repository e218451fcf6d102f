//! Compile-once, evaluate-many expressions

use crate::substitute;
use statexpr_ast::Assignment;
use statexpr_diagnostics::{Result, SE0100, SE0101, StatExprError};
use statexpr_eval::{EvalError, EvaluationResult, Evaluate, StatDependencies, expand_samples};
use statexpr_types::{Placeholders, SampleValues, StatValues};

/// A parsed and compiled derived statistic expression.
///
/// Immutable once built; evaluation only reads the maps handed to it, so one
/// instance can serve any number of threads.
#[derive(Debug)]
pub struct CompiledExpression {
    source: String,
    category: String,
    assignment: Assignment,
    dependencies: StatDependencies,
    root: Box<dyn Evaluate>,
}

/// Parse and compile `source`; unqualified references take `default_category`
pub fn compile(source: &str, default_category: &str) -> Result<CompiledExpression> {
    if source.trim().is_empty() {
        return Err(StatExprError::invalid_argument(SE0100, "Expression is required"));
    }
    if default_category.trim().is_empty() {
        return Err(StatExprError::invalid_argument(SE0101, "CategoryId is required"));
    }

    let assignment = statexpr_parser::parse(source)?;
    let dependencies = statexpr_eval::extract_dependencies(&assignment, default_category);
    let root = statexpr_eval::compile(&assignment.expression, default_category);

    log::debug!(
        "compiled `{}` defining {} from {} statistics",
        source,
        dependencies.derived,
        dependencies.dependents.len()
    );

    Ok(CompiledExpression {
        source: source.to_string(),
        category: default_category.to_string(),
        assignment,
        dependencies,
        root,
    })
}

impl CompiledExpression {
    /// Source text as given to [`compile`]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Category applied to unqualified references
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    pub fn dependencies(&self) -> &StatDependencies {
        &self.dependencies
    }

    /// Evaluate to a single number. Statistics absent from `values` read as `0.0`.
    pub fn evaluate(&self, values: &StatValues, placeholders: &Placeholders) -> Result<f64> {
        self.root
            .evaluate(values, placeholders)
            .and_then(EvaluationResult::scalar)
            .map_err(|e| self.error(e.or_span(self.assignment.expression.span)))
    }

    /// Evaluate with the derived statistic's own dimensions as placeholders
    /// when it is wildcarded, and with none otherwise
    pub fn evaluate_values(&self, values: &StatValues) -> Result<f64> {
        let derived = &self.dependencies.derived;
        if derived.is_wildcarded() {
            self.evaluate(values, derived.dimensions())
        } else {
            self.evaluate(values, &Placeholders::new())
        }
    }

    /// Evaluate against lists of samples per statistic.
    ///
    /// For a concrete derived statistic every sample of a wildcarded input is
    /// fed to the expression as a distinct statistic. For a wildcarded derived
    /// statistic each list must hold exactly one sample.
    pub fn evaluate_samples(&self, samples: &SampleValues) -> Result<f64> {
        let (values, placeholders) =
            expand_samples(samples, &self.dependencies.derived).map_err(|e| self.error(e))?;
        self.evaluate(&values, &placeholders)
    }

    /// Render the source with every known statistic replaced by its value(s)
    pub fn substitute(&self, values: &SampleValues) -> Result<String> {
        substitute::substitute(&self.source, &self.category, values)
    }

    fn error(&self, err: EvalError) -> StatExprError {
        err.into_error(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statexpr_diagnostics::SE0203;
    use statexpr_types::StatReference;

    #[test]
    fn test_blank_inputs_rejected() {
        let err = compile("  ", "pvp").unwrap_err();
        assert_eq!(err.code(), SE0100);
        assert_eq!(err.message(), "Expression is required");

        let err = compile("a = 1", "").unwrap_err();
        assert_eq!(err.code(), SE0101);
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_accessors() {
        let expr = compile("kdr = kills / deaths", "pvp").unwrap();
        assert_eq!(expr.source(), "kdr = kills / deaths");
        assert_eq!(expr.category(), "pvp");
        assert_eq!(expr.assignment().to_string(), "kdr = kills / deaths");
        assert_eq!(expr.dependencies().derived, StatReference::new("pvp", "kdr"));
    }

    #[test]
    fn test_top_level_sequence_is_an_error() {
        let expr = compile("total = kills{map:\"*\"}", "pvp").unwrap();
        let err = expr
            .evaluate(&StatValues::new(), &Placeholders::new())
            .unwrap_err();
        assert_eq!(err.code(), SE0203);
        assert!(err.location().is_some());
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CompiledExpression>();
    }
}
