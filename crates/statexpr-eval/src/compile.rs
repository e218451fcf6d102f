//! Compilation of the syntax tree into evaluation objects
//!
//! [`compile`] walks the tree once; each node becomes an [`Evaluate`]
//! implementation owning its compiled children. Nothing is evaluated while
//! compiling.

use crate::error::EvalResult;
use crate::operators::{aggregate, apply_binary, condition_holds, negate};
use crate::value::EvaluationResult;
use statexpr_ast::{AggregateFn, BinaryOp, Expression, Spanned, UnaryOp};
use statexpr_diagnostics::Span;
use statexpr_types::{Placeholders, StatReference, StatValues};
use std::fmt;

/// A compiled node: `(values, placeholders) -> result`
pub trait Evaluate: Send + Sync + fmt::Debug {
    fn evaluate<'a>(
        &'a self,
        values: &'a StatValues,
        placeholders: &Placeholders,
    ) -> EvalResult<EvaluationResult<'a>>;
}

/// Compile an expression; unqualified references take `default_category`
pub fn compile(expression: &Spanned<Expression>, default_category: &str) -> Box<dyn Evaluate> {
    log::trace!("compiling {} at {}", node_kind(&expression.inner), expression.span);

    match &expression.inner {
        Expression::Literal(literal) => Box::new(Constant(literal.value())),
        Expression::StatRef(node) => {
            let reference = StatReference::from_ast(node, default_category);
            if reference.is_wildcarded() {
                Box::new(WildcardLookup { reference })
            } else {
                Box::new(Lookup { reference })
            }
        }
        // unary plus passes its operand through untouched, sequences included
        Expression::UnaryOp(u) if u.op == UnaryOp::Plus => compile(&u.operand, default_category),
        Expression::UnaryOp(u) => Box::new(Negate {
            operand: compile(&u.operand, default_category),
            span: expression.span,
        }),
        Expression::BinaryOp(b) => Box::new(Binary {
            op: b.op,
            left: compile(&b.left, default_category),
            right: compile(&b.right, default_category),
            span: expression.span,
        }),
        Expression::Ternary(t) => Box::new(Ternary {
            condition: compile(&t.condition, default_category),
            then_branch: compile(&t.then_expr, default_category),
            else_branch: compile(&t.else_expr, default_category),
            span: t.condition.span,
        }),
        Expression::Aggregate(a) => Box::new(Aggregate {
            function: a.function,
            args: compile_all(&a.args, default_category),
        }),
        Expression::List(l) => Box::new(ValueList {
            elements: compile_all(&l.elements, default_category),
        }),
    }
}

fn compile_all(nodes: &[Spanned<Expression>], default_category: &str) -> Vec<Box<dyn Evaluate>> {
    nodes.iter().map(|n| compile(n, default_category)).collect()
}

fn node_kind(expression: &Expression) -> &'static str {
    match expression {
        Expression::Literal(_) => "literal",
        Expression::StatRef(_) => "reference",
        Expression::UnaryOp(_) => "unary",
        Expression::BinaryOp(_) => "binary",
        Expression::Ternary(_) => "ternary",
        Expression::Aggregate(_) => "aggregate",
        Expression::List(_) => "list",
    }
}

/// Evaluate each child and chain their values into one lazy sequence
fn flatten<'a>(
    children: &'a [Box<dyn Evaluate>],
    values: &'a StatValues,
    placeholders: &Placeholders,
) -> EvalResult<Box<dyn Iterator<Item = f64> + 'a>> {
    let results = children
        .iter()
        .map(|child| child.evaluate(values, placeholders))
        .collect::<EvalResult<Vec<_>>>()?;
    Ok(Box::new(
        results.into_iter().flat_map(EvaluationResult::into_values),
    ))
}

#[derive(Debug)]
struct Constant(f64);

impl Evaluate for Constant {
    fn evaluate<'a>(&'a self, _: &'a StatValues, _: &Placeholders) -> EvalResult<EvaluationResult<'a>> {
        Ok(EvaluationResult::Scalar(self.0))
    }
}

/// Exact lookup of a concrete reference
#[derive(Debug)]
struct Lookup {
    reference: StatReference,
}

impl Evaluate for Lookup {
    fn evaluate<'a>(&'a self, values: &'a StatValues, _: &Placeholders) -> EvalResult<EvaluationResult<'a>> {
        Ok(EvaluationResult::Scalar(
            values.get(&self.reference).copied().unwrap_or(0.0),
        ))
    }
}

/// Reference with at least one `*` dimension.
///
/// Without placeholders it yields every key-equal entry of the value map;
/// with placeholders it resolves to one concrete reference.
#[derive(Debug)]
struct WildcardLookup {
    reference: StatReference,
}

impl Evaluate for WildcardLookup {
    fn evaluate<'a>(
        &'a self,
        values: &'a StatValues,
        placeholders: &Placeholders,
    ) -> EvalResult<EvaluationResult<'a>> {
        if placeholders.is_empty() {
            let reference = &self.reference;
            let matching = values
                .iter()
                .filter(move |(key, _)| reference.keys_equal(key))
                .map(|(_, value)| *value);
            return Ok(EvaluationResult::sequence(matching));
        }

        let target = self.reference.resolve_placeholders(placeholders);
        Ok(EvaluationResult::Scalar(
            values.get(&target).copied().unwrap_or(0.0),
        ))
    }
}

#[derive(Debug)]
struct Negate {
    operand: Box<dyn Evaluate>,
    span: Span,
}

impl Evaluate for Negate {
    fn evaluate<'a>(
        &'a self,
        values: &'a StatValues,
        placeholders: &Placeholders,
    ) -> EvalResult<EvaluationResult<'a>> {
        let value = scalar_at(self.operand.evaluate(values, placeholders)?, self.span)?;
        Ok(EvaluationResult::Scalar(negate(value)))
    }
}

#[derive(Debug)]
struct Binary {
    op: BinaryOp,
    left: Box<dyn Evaluate>,
    right: Box<dyn Evaluate>,
    span: Span,
}

impl Evaluate for Binary {
    fn evaluate<'a>(
        &'a self,
        values: &'a StatValues,
        placeholders: &Placeholders,
    ) -> EvalResult<EvaluationResult<'a>> {
        let left = scalar_at(self.left.evaluate(values, placeholders)?, self.span)?;
        let right = scalar_at(self.right.evaluate(values, placeholders)?, self.span)?;
        Ok(EvaluationResult::Scalar(apply_binary(self.op, left, right)))
    }
}

/// Only the selected branch is evaluated
#[derive(Debug)]
struct Ternary {
    condition: Box<dyn Evaluate>,
    then_branch: Box<dyn Evaluate>,
    else_branch: Box<dyn Evaluate>,
    span: Span,
}

impl Evaluate for Ternary {
    fn evaluate<'a>(
        &'a self,
        values: &'a StatValues,
        placeholders: &Placeholders,
    ) -> EvalResult<EvaluationResult<'a>> {
        let condition = scalar_at(self.condition.evaluate(values, placeholders)?, self.span)?;
        if condition_holds(condition) {
            self.then_branch.evaluate(values, placeholders)
        } else {
            self.else_branch.evaluate(values, placeholders)
        }
    }
}

#[derive(Debug)]
struct Aggregate {
    function: AggregateFn,
    args: Vec<Box<dyn Evaluate>>,
}

impl Evaluate for Aggregate {
    fn evaluate<'a>(
        &'a self,
        values: &'a StatValues,
        placeholders: &Placeholders,
    ) -> EvalResult<EvaluationResult<'a>> {
        let flattened = flatten(&self.args, values, placeholders)?;
        Ok(EvaluationResult::Scalar(aggregate(self.function, flattened)))
    }
}

/// Substituted value list; always a sequence
#[derive(Debug)]
struct ValueList {
    elements: Vec<Box<dyn Evaluate>>,
}

impl Evaluate for ValueList {
    fn evaluate<'a>(
        &'a self,
        values: &'a StatValues,
        placeholders: &Placeholders,
    ) -> EvalResult<EvaluationResult<'a>> {
        Ok(EvaluationResult::Sequence(flatten(
            &self.elements,
            values,
            placeholders,
        )?))
    }
}

fn scalar_at(result: EvaluationResult<'_>, span: Span) -> EvalResult<f64> {
    result.scalar().map_err(|e| e.or_span(span))
}
