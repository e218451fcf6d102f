//! statexpr diagnostics and error handling
//!
//! Error codes, source spans and the error type shared by the parser, the
//! evaluator and the public facade.

mod error;
mod error_code;
mod span;

pub use error::*;
pub use error_code::*;
pub use span::*;

/// Result type for statexpr operations
pub type Result<T> = std::result::Result<T, StatExprError>;
