//! Parser for derived statistic expressions using Winnow
//!
//! Sources have the form `derived = expression`. Parsing runs in two passes:
//! a character-level token check that reports unrecognized input, then a
//! recursive descent parser with precedence climbing. Both stop at the first
//! error; partial trees are never returned.

mod combinators;
mod error;
mod expression;
mod lexer;

use combinators::Input;
use statexpr_ast::{Assignment, Expression, Spanned, StatRef};
use statexpr_diagnostics::Result;
use winnow::Parser;

/// Parse a complete `derived = expression` source
pub fn parse(source: &str) -> Result<Assignment> {
    lexer::check_tokens(source)?;
    expression::assignment
        .parse(Input::new(source))
        .map_err(|e| error::syntax_error(source, &e))
}

/// Parse a bare expression (no assignment target)
pub fn parse_expression(source: &str) -> Result<Spanned<Expression>> {
    lexer::check_tokens(source)?;
    expression::standalone_expression
        .parse(Input::new(source))
        .map_err(|e| error::syntax_error(source, &e))
}

/// Parse a comma-separated argument list, as found between the parentheses of
/// an aggregate call
pub fn parse_aggregate_arguments(source: &str) -> Result<Vec<Spanned<Expression>>> {
    lexer::check_tokens(source)?;
    expression::standalone_arguments
        .parse(Input::new(source))
        .map_err(|e| error::syntax_error(source, &e))
}

/// Parse a single statistic reference such as `pvp.kills{map:"foo"}`
pub fn parse_stat_ref(source: &str) -> Result<Spanned<StatRef>> {
    lexer::check_tokens(source)?;
    expression::standalone_stat_ref
        .parse(Input::new(source))
        .map_err(|e| error::syntax_error(source, &e))
}
