//! Token-level parsers shared by the expression grammar

use statexpr_ast::{AggregateFn, Literal};
use winnow::ascii::{digit1, multispace0};
use winnow::combinator::{alt, not, opt, terminated};
use winnow::error::{ContextError, ErrMode, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::stream::LocatingSlice;
use winnow::token::{one_of, take_while};

/// Parser input, tracking byte offsets for spans
pub type Input<'a> = LocatingSlice<&'a str>;

pub type PResult<O> = winnow::ModalResult<O>;

pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

pub fn is_dim_value_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
}

pub fn label(name: &'static str) -> StrContext {
    StrContext::Label(name)
}

pub fn expected(description: &'static str) -> StrContext {
    StrContext::Expected(StrContextValue::Description(description))
}

pub fn expected_char(c: char) -> StrContext {
    StrContext::Expected(StrContextValue::CharLiteral(c))
}

/// Skip whitespace
pub fn ws(input: &mut Input<'_>) -> PResult<()> {
    multispace0.void().parse_next(input)
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn identifier<'a>(input: &mut Input<'a>) -> PResult<&'a str> {
    (one_of(is_ident_start), take_while(0.., is_ident_char))
        .take()
        .parse_next(input)
}

/// A reserved word that is not the prefix of a longer identifier
pub fn keyword<'a>(word: &'static str) -> impl Parser<Input<'a>, &'a str, ErrMode<ContextError>> {
    terminated(word, not(one_of(is_ident_char)))
}

/// `digits ['.' digits] [exponent]`
pub fn number(input: &mut Input<'_>) -> PResult<f64> {
    (
        digit1,
        opt(('.', digit1)),
        opt((one_of(['e', 'E']), opt(one_of(['+', '-'])), digit1)),
    )
        .take()
        .try_map(|text: &str| text.parse::<f64>())
        .context(expected("number"))
        .parse_next(input)
}

/// `+Inf`, `-Inf`, `+INF` or `-INF`
pub fn signed_infinity(input: &mut Input<'_>) -> PResult<Literal> {
    alt((
        alt((keyword("+Inf"), keyword("+INF"))).value(Literal::PositiveInfinity),
        alt((keyword("-Inf"), keyword("-INF"))).value(Literal::NegativeInfinity),
    ))
    .parse_next(input)
}

pub fn aggregate_function(input: &mut Input<'_>) -> PResult<AggregateFn> {
    alt((
        "SUM".value(AggregateFn::Sum),
        "AVG".value(AggregateFn::Avg),
        "MIN".value(AggregateFn::Min),
        "MAX".value(AggregateFn::Max),
    ))
    .parse_next(input)
}

/// Contents of a quoted dimension value: `*` or `[A-Za-z0-9_.-]+`
pub fn dimension_value<'a>(input: &mut Input<'a>) -> PResult<&'a str> {
    alt(("*", take_while(1.., is_dim_value_char)))
        .context(expected("dimension value"))
        .parse_next(input)
}
