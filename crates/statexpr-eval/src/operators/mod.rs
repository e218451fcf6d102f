//! Operator implementations
//!
//! Organized by category:
//! - Arithmetic operators (`+ - * /`, negation)
//! - Comparison operators (`> >= < <= == !=`)
//! - Logical operators (`&& ||`, ternary truthiness)
//! - Aggregate functions (`SUM AVG MIN MAX`)

pub mod aggregate;
pub mod arithmetic;
pub mod comparison;
pub mod logical;

pub use aggregate::*;
pub use arithmetic::*;
pub use comparison::*;
pub use logical::*;

use statexpr_ast::BinaryOp;

/// Apply a binary operator to two scalars
pub fn apply_binary(op: BinaryOp, left: f64, right: f64) -> f64 {
    match op {
        BinaryOp::Add => add(left, right),
        BinaryOp::Subtract => subtract(left, right),
        BinaryOp::Multiply => multiply(left, right),
        BinaryOp::Divide => divide(left, right),
        BinaryOp::Greater => greater(left, right),
        BinaryOp::GreaterOrEqual => greater_or_equal(left, right),
        BinaryOp::Less => less(left, right),
        BinaryOp::LessOrEqual => less_or_equal(left, right),
        BinaryOp::Equal => equal(left, right),
        BinaryOp::NotEqual => not_equal(left, right),
        BinaryOp::And => and(left, right),
        BinaryOp::Or => or(left, right),
    }
}

/// `1.0` for true, `0.0` for false
#[inline]
pub(crate) fn boolean(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}
