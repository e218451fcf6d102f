//! Comparison operators
//!
//! Implements: Greater, GreaterOrEqual, Less, LessOrEqual, Equal, NotEqual
//!
//! Relational operators follow IEEE comparison, so any NaN operand compares
//! false. Equality instead reports NaN when either side is NaN.

use super::boolean;

pub fn greater(left: f64, right: f64) -> f64 {
    boolean(left > right)
}

pub fn greater_or_equal(left: f64, right: f64) -> f64 {
    boolean(left >= right)
}

pub fn less(left: f64, right: f64) -> f64 {
    boolean(left < right)
}

pub fn less_or_equal(left: f64, right: f64) -> f64 {
    boolean(left <= right)
}

pub fn equal(left: f64, right: f64) -> f64 {
    if left.is_nan() || right.is_nan() {
        f64::NAN
    } else {
        boolean(left == right)
    }
}

pub fn not_equal(left: f64, right: f64) -> f64 {
    if left.is_nan() || right.is_nan() {
        f64::NAN
    } else {
        boolean(left != right)
    }
}
