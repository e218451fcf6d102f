//! Tree traversal helpers

use crate::{Assignment, Expression, Spanned, StatRef};
use statexpr_diagnostics::Span;

impl Assignment {
    /// Every statistic reference in depth-first, left-to-right order, target first
    pub fn stat_refs(&self) -> Vec<(&StatRef, Span)> {
        let mut out = vec![(&self.target.inner, self.target.span)];
        collect_stat_refs(&self.expression, &mut out);
        out
    }
}

fn collect_stat_refs<'a>(expr: &'a Spanned<Expression>, out: &mut Vec<(&'a StatRef, Span)>) {
    match &expr.inner {
        Expression::Literal(_) => {}
        Expression::StatRef(r) => out.push((r, expr.span)),
        Expression::UnaryOp(u) => collect_stat_refs(&u.operand, out),
        Expression::BinaryOp(b) => {
            collect_stat_refs(&b.left, out);
            collect_stat_refs(&b.right, out);
        }
        Expression::Ternary(t) => {
            collect_stat_refs(&t.condition, out);
            collect_stat_refs(&t.then_expr, out);
            collect_stat_refs(&t.else_expr, out);
        }
        Expression::Aggregate(a) => a.args.iter().for_each(|e| collect_stat_refs(e, out)),
        Expression::List(l) => l.elements.iter().for_each(|e| collect_stat_refs(e, out)),
    }
}

/// Where a visited reference sits in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefSite {
    pub span: Span,
    /// Some ancestor is an aggregate call
    pub inside_aggregate: bool,
}

/// Offer each statistic reference on the right-hand side to `f`, replacing the
/// node whenever `f` returns a new expression. The assignment target is never visited.
pub fn rewrite_stat_refs<E>(
    expr: &mut Spanned<Expression>,
    f: &mut impl FnMut(&StatRef, RefSite) -> Result<Option<Expression>, E>,
) -> Result<(), E> {
    rewrite(expr, false, f)
}

fn rewrite<E>(
    expr: &mut Spanned<Expression>,
    inside_aggregate: bool,
    f: &mut impl FnMut(&StatRef, RefSite) -> Result<Option<Expression>, E>,
) -> Result<(), E> {
    match &mut expr.inner {
        Expression::Literal(_) => {}
        Expression::StatRef(r) => {
            let site = RefSite {
                span: expr.span,
                inside_aggregate,
            };
            if let Some(replacement) = f(r, site)? {
                expr.inner = replacement;
            }
        }
        Expression::UnaryOp(u) => rewrite(&mut u.operand, inside_aggregate, f)?,
        Expression::BinaryOp(b) => {
            rewrite(&mut b.left, inside_aggregate, f)?;
            rewrite(&mut b.right, inside_aggregate, f)?;
        }
        Expression::Ternary(t) => {
            rewrite(&mut t.condition, inside_aggregate, f)?;
            rewrite(&mut t.then_expr, inside_aggregate, f)?;
            rewrite(&mut t.else_expr, inside_aggregate, f)?;
        }
        Expression::Aggregate(a) => {
            for arg in &mut a.args {
                rewrite(arg, true, f)?;
            }
        }
        Expression::List(l) => {
            for element in &mut l.elements {
                rewrite(element, inside_aggregate, f)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AggregateFn, BinaryOp};
    use pretty_assertions::assert_eq;

    fn sp(expr: Expression) -> Spanned<Expression> {
        Spanned::new(expr, Span::default())
    }

    fn stat(name: &str) -> Spanned<Expression> {
        sp(Expression::StatRef(StatRef::new(name)))
    }

    fn sample() -> Assignment {
        let sum = sp(Expression::aggregate(AggregateFn::Sum, vec![stat("b")]));
        let rhs = sp(Expression::binary(
            Box::new(stat("a")),
            BinaryOp::Add,
            Box::new(sum),
        ));
        Assignment::new(Spanned::new(StatRef::new("d"), Span::default()), rhs)
    }

    #[test]
    fn test_stat_refs_order() {
        let binding = sample();
        let names: Vec<_> = binding
            .stat_refs()
            .into_iter()
            .map(|(r, _)| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["d", "a", "b"]);
    }

    #[test]
    fn test_rewrite_tracks_aggregate_context() {
        let mut assignment = sample();
        let mut seen = Vec::new();
        rewrite_stat_refs::<()>(&mut assignment.expression, &mut |r, site| {
            seen.push((r.name.clone(), site.inside_aggregate));
            Ok(Some(Expression::number(1.0)))
        })
        .unwrap();

        assert_eq!(
            seen,
            vec![("a".to_string(), false), ("b".to_string(), true)]
        );
        assert_eq!(assignment.stat_refs().len(), 1);
    }
}
