//! Expression AST nodes

use crate::{
    AggregateFn, BinaryOp, BoxExpr, Literal, PRIMARY_PRECEDENCE, Spanned, StatRef,
    TERNARY_PRECEDENCE, UNARY_PRECEDENCE, UnaryOp,
};

/// All expression kinds
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Number or named constant
    Literal(Literal),
    /// Statistic reference
    StatRef(StatRef),
    /// Unary plus or minus
    UnaryOp(UnaryOpExpr),
    /// Arithmetic, comparison or logical operation
    BinaryOp(BinaryOpExpr),
    /// `condition ? then : else`
    Ternary(TernaryExpr),
    /// `SUM(...)`, `AVG(...)`, `MIN(...)`, `MAX(...)`
    Aggregate(AggregateExpr),
    /// Comma-separated run of expressions spliced into aggregate arguments.
    /// Only produced by substitution, never by the parser.
    List(ListExpr),
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOpExpr {
    pub op: UnaryOp,
    pub operand: BoxExpr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOpExpr {
    pub left: BoxExpr,
    pub op: BinaryOp,
    pub right: BoxExpr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TernaryExpr {
    pub condition: BoxExpr,
    pub then_expr: BoxExpr,
    pub else_expr: BoxExpr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AggregateExpr {
    pub function: AggregateFn,
    pub args: Vec<Spanned<Expression>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListExpr {
    pub elements: Vec<Spanned<Expression>>,
}

impl Expression {
    pub fn number(value: f64) -> Self {
        Self::Literal(Literal::from_f64(value))
    }

    pub fn binary(left: BoxExpr, op: BinaryOp, right: BoxExpr) -> Self {
        Self::BinaryOp(BinaryOpExpr { left, op, right })
    }

    pub fn unary(op: UnaryOp, operand: BoxExpr) -> Self {
        Self::UnaryOp(UnaryOpExpr { op, operand })
    }

    pub fn ternary(condition: BoxExpr, then_expr: BoxExpr, else_expr: BoxExpr) -> Self {
        Self::Ternary(TernaryExpr {
            condition,
            then_expr,
            else_expr,
        })
    }

    pub fn aggregate(function: AggregateFn, args: Vec<Spanned<Expression>>) -> Self {
        Self::Aggregate(AggregateExpr { function, args })
    }

    /// Binding strength used when rendering; see [`crate::operator`]
    pub fn precedence(&self) -> u8 {
        match self {
            Self::Ternary(_) => TERNARY_PRECEDENCE,
            Self::BinaryOp(b) => b.op.precedence(),
            Self::UnaryOp(_) => UNARY_PRECEDENCE,
            Self::Literal(lit) if lit.is_negative() => UNARY_PRECEDENCE,
            Self::Literal(_) | Self::StatRef(_) | Self::Aggregate(_) | Self::List(_) => {
                PRIMARY_PRECEDENCE
            }
        }
    }

}
