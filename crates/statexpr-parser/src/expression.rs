//! Expression parser using recursive descent with precedence climbing
//!
//! Each precedence level is one function. Binary levels are left-associative;
//! the ternary branches are full expressions.

use crate::combinators::{
    Input, PResult, aggregate_function, dimension_value, expected, expected_char, identifier,
    keyword, label, number, signed_infinity, ws,
};
use statexpr_ast::{Assignment, BinaryOp, Dimension, Expression, Literal, Spanned, StatRef, UnaryOp};
use statexpr_diagnostics::Span;
use winnow::combinator::{alt, cut_err, eof, opt, peek, preceded, separated};
use winnow::prelude::*;

type Operand = fn(&mut Input<'_>) -> PResult<Spanned<Expression>>;

const OR_OPS: &[(&str, BinaryOp)] = &[("||", BinaryOp::Or)];
const AND_OPS: &[(&str, BinaryOp)] = &[("&&", BinaryOp::And)];
const EQUALITY_OPS: &[(&str, BinaryOp)] = &[("==", BinaryOp::Equal), ("!=", BinaryOp::NotEqual)];
// two-character operators first
const RELATIONAL_OPS: &[(&str, BinaryOp)] = &[
    (">=", BinaryOp::GreaterOrEqual),
    ("<=", BinaryOp::LessOrEqual),
    (">", BinaryOp::Greater),
    ("<", BinaryOp::Less),
];
const ADDITIVE_OPS: &[(&str, BinaryOp)] = &[("+", BinaryOp::Add), ("-", BinaryOp::Subtract)];
const MULTIPLICATIVE_OPS: &[(&str, BinaryOp)] =
    &[("*", BinaryOp::Multiply), ("/", BinaryOp::Divide)];

/// `statRef '=' expression`, consuming all input
pub fn assignment(input: &mut Input<'_>) -> PResult<Assignment> {
    (
        ws,
        stat_ref,
        ws,
        '='.context(expected_char('=')),
        expression,
        ws,
        eof.context(expected("end of input")),
    )
        .map(|(_, target, _, _, expression, _, _)| Assignment::new(target, expression))
        .context(label("assignment"))
        .parse_next(input)
}

pub fn standalone_expression(input: &mut Input<'_>) -> PResult<Spanned<Expression>> {
    terminated_by_eof(expression, input)
}

pub fn standalone_arguments(input: &mut Input<'_>) -> PResult<Vec<Spanned<Expression>>> {
    terminated_by_eof(aggregate_arguments, input)
}

pub fn standalone_stat_ref(input: &mut Input<'_>) -> PResult<Spanned<StatRef>> {
    ws.parse_next(input)?;
    terminated_by_eof(stat_ref, input)
}

fn terminated_by_eof<'a, O>(
    mut parser: impl FnMut(&mut Input<'a>) -> PResult<O>,
    input: &mut Input<'a>,
) -> PResult<O> {
    let out = parser(input)?;
    ws.parse_next(input)?;
    eof.context(expected("end of input")).parse_next(input)?;
    Ok(out)
}

/// Entry point for any expression
pub fn expression(input: &mut Input<'_>) -> PResult<Spanned<Expression>> {
    ternary_expression
        .context(label("expression"))
        .parse_next(input)
}

/// `logicalOr ('?' expression ':' expression)?`
fn ternary_expression(input: &mut Input<'_>) -> PResult<Spanned<Expression>> {
    let condition = or_expression(input)?;

    ws.parse_next(input)?;
    if opt('?').parse_next(input)?.is_none() {
        return Ok(condition);
    }

    let (then_expr, _, _, else_expr) = cut_err((
        expression,
        ws,
        ':'.context(expected_char(':')),
        expression,
    ))
    .context(label("ternary"))
    .parse_next(input)?;

    let span = condition.span.merge(else_expr.span);
    Ok(Spanned::new(
        Expression::ternary(Box::new(condition), Box::new(then_expr), Box::new(else_expr)),
        span,
    ))
}

fn or_expression(input: &mut Input<'_>) -> PResult<Spanned<Expression>> {
    binary_level(input, and_expression, OR_OPS)
}

fn and_expression(input: &mut Input<'_>) -> PResult<Spanned<Expression>> {
    binary_level(input, equality_expression, AND_OPS)
}

fn equality_expression(input: &mut Input<'_>) -> PResult<Spanned<Expression>> {
    binary_level(input, relational_expression, EQUALITY_OPS)
}

fn relational_expression(input: &mut Input<'_>) -> PResult<Spanned<Expression>> {
    binary_level(input, additive_expression, RELATIONAL_OPS)
}

fn additive_expression(input: &mut Input<'_>) -> PResult<Spanned<Expression>> {
    binary_level(input, multiplicative_expression, ADDITIVE_OPS)
}

fn multiplicative_expression(input: &mut Input<'_>) -> PResult<Spanned<Expression>> {
    binary_level(input, unary_expression, MULTIPLICATIVE_OPS)
}

/// `operand (op operand)*`, folded to the left
fn binary_level(
    input: &mut Input<'_>,
    operand: Operand,
    operators: &[(&'static str, BinaryOp)],
) -> PResult<Spanned<Expression>> {
    let mut left = operand(input)?;

    loop {
        ws.parse_next(input)?;
        let Some(op) = binary_operator(input, operators)? else {
            break;
        };
        let right = operand(input)?;
        let span = left.span.merge(right.span);
        left = Spanned::new(Expression::binary(Box::new(left), op, Box::new(right)), span);
    }

    Ok(left)
}

fn binary_operator(
    input: &mut Input<'_>,
    operators: &[(&'static str, BinaryOp)],
) -> PResult<Option<BinaryOp>> {
    // `-Inf` and `+Inf` are single literal tokens, never a sign followed by a name
    if opt(peek(signed_infinity)).parse_next(input)?.is_some() {
        return Ok(None);
    }
    for (symbol, op) in operators {
        if opt(*symbol).parse_next(input)?.is_some() {
            return Ok(Some(*op));
        }
    }
    Ok(None)
}

/// `'+INF' | '-INF' | ('+' | '-') unary | primary`
fn unary_expression(input: &mut Input<'_>) -> PResult<Spanned<Expression>> {
    ws.parse_next(input)?;

    if let Some((literal, range)) = opt(signed_infinity.with_span()).parse_next(input)? {
        return Ok(Spanned::new(Expression::Literal(literal), range.into()));
    }

    let sign = opt(alt(('+'.value(UnaryOp::Plus), '-'.value(UnaryOp::Negate))).with_span())
        .parse_next(input)?;
    if let Some((op, range)) = sign {
        let operand = unary_expression(input)?;
        let span = Span::from(range).merge(operand.span);
        return Ok(Spanned::new(Expression::unary(op, Box::new(operand)), span));
    }

    primary_expression(input)
}

fn primary_expression(input: &mut Input<'_>) -> PResult<Spanned<Expression>> {
    ws.parse_next(input)?;
    alt((
        keyword("NaN")
            .span()
            .map(|range| Spanned::new(Expression::Literal(Literal::NaN), range.into())),
        number
            .with_span()
            .map(|(value, range)| Spanned::new(Expression::number(value), range.into())),
        parenthesized,
        aggregate_call,
        stat_ref.map(|r| r.map(Expression::StatRef)),
    ))
    .context(label("primary"))
    .context(expected("operand"))
    .parse_next(input)
}

/// `'(' expression ')'`; the node keeps the span of the parentheses
fn parenthesized(input: &mut Input<'_>) -> PResult<Spanned<Expression>> {
    ('(', cut_err((expression, ws, ')'.context(expected_char(')')))))
        .with_span()
        .map(|((_, (inner, _, _)), range)| Spanned::new(inner.inner, range.into()))
        .parse_next(input)
}

/// `('SUM' | 'AVG' | 'MIN' | 'MAX') '(' expression (',' expression)* ')'`
fn aggregate_call(input: &mut Input<'_>) -> PResult<Spanned<Expression>> {
    (
        aggregate_function,
        ws,
        '(',
        cut_err((aggregate_arguments, ws, ')'.context(expected_char(')')))),
    )
        .with_span()
        .map(|((function, _, _, (args, _, _)), range)| {
            Spanned::new(Expression::aggregate(function, args), range.into())
        })
        .context(label("aggregateCall"))
        .parse_next(input)
}

/// `expression (',' expression)*`
pub fn aggregate_arguments(input: &mut Input<'_>) -> PResult<Vec<Spanned<Expression>>> {
    separated(1.., expression, (ws, ','))
        .context(label("aggregateArguments"))
        .parse_next(input)
}

/// `[category '.'] name ['{' dimension (',' dimension)* '}']`
pub fn stat_ref(input: &mut Input<'_>) -> PResult<Spanned<StatRef>> {
    (qualified_name, opt(preceded(ws, dimension_clause)))
        .with_span()
        .map(|(((category, name), dimensions), range)| {
            let node = StatRef {
                category,
                name,
                dimensions: dimensions.unwrap_or_default(),
            };
            Spanned::new(node, range.into())
        })
        .context(label("statRef"))
        .parse_next(input)
}

fn qualified_name(input: &mut Input<'_>) -> PResult<(Option<String>, String)> {
    let first = identifier(input)?;
    match opt(preceded('.', identifier)).parse_next(input)? {
        Some(name) => Ok((Some(first.to_string()), name.to_string())),
        None => Ok((None, first.to_string())),
    }
}

fn dimension_clause(input: &mut Input<'_>) -> PResult<Vec<Dimension>> {
    '{'.parse_next(input)?;
    let dimensions: Vec<Dimension> =
        cut_err(separated(1.., preceded(ws, dimension), (ws, ','))).parse_next(input)?;
    cut_err((ws, '}'.context(expected_char('}')))).parse_next(input)?;
    Ok(dimensions)
}

/// `key ':' '"' value '"'`
fn dimension(input: &mut Input<'_>) -> PResult<Dimension> {
    (
        identifier.context(expected("dimension key")),
        ws,
        ':'.context(expected_char(':')),
        ws,
        '"'.context(expected_char('"')),
        dimension_value,
        '"'.context(expected_char('"')),
    )
        .map(|(key, _, _, _, _, value, _)| Dimension::new(key, value))
        .context(label("dimension"))
        .parse_next(input)
}
