//! Conversion of Winnow failures into syntax errors

use crate::combinators::{Input, is_ident_char};
use statexpr_diagnostics::{SE0002, SE0003, SourceLocation, Span, StatExprError};
use winnow::error::{ContextError, ParseError, StrContext};

pub(crate) fn syntax_error(source: &str, err: &ParseError<Input<'_>, ContextError>) -> StatExprError {
    let offset = err.offset();
    let context = err.inner();

    // labels are attached innermost first
    let mut rule_stack: Vec<String> = context
        .context()
        .filter_map(|c| match c {
            StrContext::Label(name) => Some((*name).to_string()),
            _ => None,
        })
        .collect();
    rule_stack.reverse();

    let mut expecting: Vec<String> = Vec::new();
    for c in context.context() {
        if let StrContext::Expected(value) = c {
            let value = value.to_string();
            if !expecting.contains(&value) {
                expecting.push(value);
            }
        }
    }

    let (code, token) = match offending_token(source, offset) {
        Some(token) => (SE0002, token),
        None => (SE0003, "<EOF>"),
    };
    let mut message = format!("mismatched input '{token}'");
    if !expecting.is_empty() {
        message.push_str(&format!(" expecting {}", expecting.join(", ")));
    }

    let span = Span::new(offset, offset + token.len().min(source.len() - offset));
    StatExprError::syntax(
        code,
        message,
        source,
        SourceLocation::from_span(span, source),
        rule_stack,
    )
}

/// The token starting at `offset`, or `None` at end of input
fn offending_token(source: &str, offset: usize) -> Option<&str> {
    let rest = source.get(offset..)?;
    let first = rest.chars().next()?;
    let len = if let Some(len) = signed_infinity_len(rest) {
        len
    } else if is_ident_char(first) {
        rest.find(|c: char| !is_ident_char(c)).unwrap_or(rest.len())
    } else {
        match rest.get(..2) {
            Some("==" | "!=" | "<=" | ">=" | "&&" | "||") => 2,
            _ => first.len_utf8(),
        }
    };
    Some(&rest[..len])
}

fn signed_infinity_len(rest: &str) -> Option<usize> {
    let word = rest.get(..4)?;
    let whole = !rest[4..].starts_with(is_ident_char);
    matches!(word, "+Inf" | "-Inf" | "+INF" | "-INF").then_some(4).filter(|_| whole)
}
