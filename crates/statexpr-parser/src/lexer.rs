//! Character-level token check
//!
//! Runs before the grammar so that characters no token can start with are
//! reported as recognition errors rather than as grammar mismatches.

use crate::combinators::{is_dim_value_char, is_ident_char};
use statexpr_diagnostics::{Result, SE0001, SourceLocation, Span, StatExprError};

/// Characters that form single-character tokens or begin `==`, `<=` and `>=`
const PUNCTUATION: &str = "+-*/()<>=?:,.{}";

pub(crate) fn check_tokens(source: &str) -> Result<()> {
    let mut chars = source.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        match c {
            c if is_ident_char(c) || c.is_whitespace() || PUNCTUATION.contains(c) => {}
            // only valid as the first half of `!=`, `&&` and `||`
            '!' | '&' | '|' => {
                let second = if c == '!' { '=' } else { c };
                if chars.next_if(|&(_, next)| next == second).is_none() {
                    return Err(unrecognized(source, offset, c));
                }
            }
            '"' => loop {
                match chars.next() {
                    Some((_, '"')) => break,
                    Some((_, inner)) if inner == '*' || is_dim_value_char(inner) => {}
                    Some((at, inner)) => return Err(unrecognized(source, at, inner)),
                    None => return Err(unrecognized(source, offset, c)),
                }
            },
            _ => return Err(unrecognized(source, offset, c)),
        }
    }

    Ok(())
}

fn unrecognized(source: &str, offset: usize, c: char) -> StatExprError {
    let span = Span::new(offset, offset + c.len_utf8());
    StatExprError::syntax(
        SE0001,
        format!("token recognition error at: '{c}'"),
        source,
        SourceLocation::from_span(span, source),
        Vec::new(),
    )
}
