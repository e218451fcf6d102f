//! Evaluation engine for derived statistic expressions
//!
//! An [`Assignment`](statexpr_ast::Assignment) is compiled once into a tree of
//! [`Evaluate`] objects. Evaluating never revisits the syntax tree; every call
//! reads only the caller's value and placeholder maps.
//!
//! # Numeric semantics
//!
//! - Arithmetic is IEEE-754 double arithmetic; `+` propagates NaN explicitly.
//! - Comparisons, `&&` and `||` yield exactly `0.0` or `1.0`, except that `==`
//!   and `!=` yield NaN when either side is NaN.
//! - A ternary condition is true when it is strictly greater than zero.
//! - Aggregates flatten their arguments; an empty input reduces to `0.0`.
//! - Statistics missing from the value map read as `0.0`.

pub mod compile;
pub mod dependencies;
pub mod error;
pub mod operators;
pub mod samples;
pub mod value;

pub use compile::{Evaluate, compile};
pub use dependencies::{StatDependencies, extract_dependencies};
pub use error::{EvalError, EvalResult};
pub use samples::{SAMPLE_MARKER_PREFIX, expand_samples};
pub use value::EvaluationResult;
