//! Rendering the tree back to source text
//!
//! Output always re-parses to an equivalent tree: parentheses are emitted only
//! where operator precedence requires them, and operators are left-associative.

use crate::{Assignment, Expression, Literal, Spanned, StatRef, TERNARY_PRECEDENCE, UNARY_PRECEDENCE};
use std::fmt;

/// Render a double the way the grammar reads it back
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "+Inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else {
        format!("{value}")
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_number(self.value()))
    }
}

impl fmt::Display for StatRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(category) = &self.category {
            write!(f, "{category}.")?;
        }
        f.write_str(&self.name)?;
        if !self.dimensions.is_empty() {
            f.write_str("{")?;
            for (i, dim) in self.dimensions.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{}:\"{}\"", dim.key, dim.value)?;
            }
            f.write_str("}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.target.inner, self.expression.inner)
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, expr: &Spanned<Expression>, parens: bool) -> fmt::Result {
    if parens {
        write!(f, "({})", expr.inner)
    } else {
        write!(f, "{}", expr.inner)
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Spanned<Expression>]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item.inner)?;
    }
    Ok(())
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(lit) => write!(f, "{lit}"),
            Self::StatRef(r) => write!(f, "{r}"),
            Self::UnaryOp(u) => {
                f.write_str(u.op.symbol())?;
                write_operand(f, &u.operand, u.operand.precedence() < UNARY_PRECEDENCE)
            }
            Self::BinaryOp(b) => {
                let prec = b.op.precedence();
                write_operand(f, &b.left, b.left.precedence() < prec)?;
                write!(f, " {} ", b.op.symbol())?;
                write_operand(f, &b.right, b.right.precedence() <= prec)
            }
            Self::Ternary(t) => {
                write_operand(f, &t.condition, t.condition.precedence() <= TERNARY_PRECEDENCE)?;
                write!(f, " ? {} : {}", t.then_expr.inner, t.else_expr.inner)
            }
            Self::Aggregate(a) => {
                write!(f, "{}(", a.function.name())?;
                write_joined(f, &a.args)?;
                f.write_str(")")
            }
            Self::List(l) => write_joined(f, &l.elements),
        }
    }
}
