//! Logical operators
//!
//! Implements: And, Or and ternary condition truthiness. Operands are true
//! when nonzero (NaN included); results are exactly `0.0` or `1.0`.

use super::boolean;

pub fn and(left: f64, right: f64) -> f64 {
    boolean(left != 0.0 && right != 0.0)
}

pub fn or(left: f64, right: f64) -> f64 {
    boolean(left != 0.0 || right != 0.0)
}

/// A ternary condition holds only when strictly positive
pub fn condition_holds(value: f64) -> bool {
    value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_and_or() {
        assert_eq!(and(1.0, 2.0), 1.0);
        assert_eq!(and(1.0, 0.0), 0.0);
        assert_eq!(or(0.0, -3.0), 1.0);
        assert_eq!(or(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_nan_is_truthy() {
        assert_eq!(and(f64::NAN, 1.0), 1.0);
        assert_eq!(or(f64::NAN, 0.0), 1.0);
    }

    #[test]
    fn test_condition_holds() {
        assert!(condition_holds(0.5));
        assert!(!condition_holds(0.0));
        assert!(!condition_holds(-1.0));
        assert!(!condition_holds(f64::NAN));
    }
}
