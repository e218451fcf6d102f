//! Evaluation errors

use statexpr_diagnostics::{
    ErrorCode, SE0201, SE0202, SE0203, SourceLocation, Span, StatExprError,
};
use thiserror::Error;

/// Result type for evaluation operations
pub type EvalResult<T> = Result<T, EvalError>;

/// Structural misuse detected while evaluating or rewriting.
///
/// Missing statistics are never an error; they read as `0.0`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvalError {
    /// A multi-valued result reached an operator that needs one value
    #[error("Sequence used where a scalar was expected")]
    SequenceAsScalar { span: Option<Span> },

    /// Several substitution values for a reference outside any aggregate
    #[error("Unrecoverable error during expression evaluation. {reference} has {count} values outside an aggregate")]
    MultipleValuesOutsideAggregate {
        reference: String,
        count: usize,
        span: Option<Span>,
    },

    /// A placeholder-bound expression received other than one sample
    #[error("Placeholder value must contain exactly one element, {reference} has {count}")]
    InvalidSampleCount { reference: String, count: usize },
}

impl EvalError {
    pub fn sequence_as_scalar() -> Self {
        Self::SequenceAsScalar { span: None }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::SequenceAsScalar { .. } => SE0203,
            Self::MultipleValuesOutsideAggregate { .. } => SE0201,
            Self::InvalidSampleCount { .. } => SE0202,
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            Self::SequenceAsScalar { span } | Self::MultipleValuesOutsideAggregate { span, .. } => {
                *span
            }
            Self::InvalidSampleCount { .. } => None,
        }
    }

    /// Record where the error happened unless a more precise span is already set
    pub fn or_span(self, at: Span) -> Self {
        match self {
            Self::SequenceAsScalar { span: None } => Self::SequenceAsScalar { span: Some(at) },
            other => other,
        }
    }

    /// Convert, resolving the span against the expression source
    pub fn into_error(self, source: &str) -> StatExprError {
        let span = self.span();
        let err = StatExprError::from(self);
        match span {
            Some(span) => {
                let snippet = source.get(span.start..span.end).unwrap_or_default().to_string();
                err.at(SourceLocation::from_span(span, source))
                    .with_context(snippet)
            }
            None => err,
        }
    }
}

impl From<EvalError> for StatExprError {
    fn from(err: EvalError) -> Self {
        StatExprError::evaluation(err.code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(EvalError::sequence_as_scalar().code(), SE0203);
        let err = EvalError::InvalidSampleCount {
            reference: "kills".into(),
            count: 2,
        };
        assert_eq!(err.code(), SE0202);
    }

    #[test]
    fn test_or_span_keeps_first() {
        let err = EvalError::sequence_as_scalar()
            .or_span(Span::new(6, 9))
            .or_span(Span::new(0, 20));
        assert_eq!(err.span(), Some(Span::new(6, 9)));
    }

    #[test]
    fn test_into_error_resolves_location() {
        let err = EvalError::sequence_as_scalar()
            .or_span(Span::new(6, 9))
            .into_error("foo = a{x:\"*\"} + 1");
        assert!(err.is_evaluation());
        assert_eq!(err.code(), SE0203);
        assert_eq!(err.location().map(|l| l.column), Some(7));
    }
}
