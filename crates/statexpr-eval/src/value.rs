//! Intermediate values flowing through an evaluation

use crate::error::{EvalError, EvalResult};
use std::fmt;
use std::iter;

/// Result of evaluating one node.
///
/// Sequences only arise from wildcard references evaluated without
/// placeholders and from substituted value lists. They are lazy and borrow the
/// value map they were read from.
pub enum EvaluationResult<'a> {
    Scalar(f64),
    Sequence(Box<dyn Iterator<Item = f64> + 'a>),
}

impl<'a> EvaluationResult<'a> {
    pub fn sequence(values: impl Iterator<Item = f64> + 'a) -> Self {
        Self::Sequence(Box::new(values))
    }

    /// The single value; a sequence is an error, never silently coerced
    pub fn scalar(self) -> EvalResult<f64> {
        match self {
            Self::Scalar(value) => Ok(value),
            Self::Sequence(_) => Err(EvalError::sequence_as_scalar()),
        }
    }

    /// All values, a scalar counting as a sequence of one
    pub fn into_values(self) -> Box<dyn Iterator<Item = f64> + 'a> {
        match self {
            Self::Scalar(value) => Box::new(iter::once(value)),
            Self::Sequence(values) => values,
        }
    }
}

impl From<f64> for EvaluationResult<'_> {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl fmt::Debug for EvaluationResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(value) => f.debug_tuple("Scalar").field(value).finish(),
            Self::Sequence(_) => f.write_str("Sequence(..)"),
        }
    }
}
