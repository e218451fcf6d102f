//! Arithmetic operators
//!
//! Implements: Add, Subtract, Multiply, Divide, Negate

/// `+`; NaN on either side gives NaN
pub fn add(left: f64, right: f64) -> f64 {
    if left.is_nan() || right.is_nan() {
        f64::NAN
    } else {
        left + right
    }
}

pub fn subtract(left: f64, right: f64) -> f64 {
    left - right
}

pub fn multiply(left: f64, right: f64) -> f64 {
    left * right
}

/// Division by zero follows IEEE-754: `±Inf`, or NaN for `0 / 0`
pub fn divide(left: f64, right: f64) -> f64 {
    left / right
}

pub fn negate(value: f64) -> f64 {
    -value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_propagates_nan() {
        assert!(add(f64::NAN, 1.0).is_nan());
        assert!(add(1.0, f64::NAN).is_nan());
        assert_eq!(add(1.5, 2.0), 3.5);
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(divide(1.0, 0.0), f64::INFINITY);
        assert_eq!(divide(-1.0, 0.0), f64::NEG_INFINITY);
        assert!(divide(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_infinity_arithmetic() {
        assert!(subtract(f64::INFINITY, f64::INFINITY).is_nan());
        assert_eq!(multiply(f64::NEG_INFINITY, -2.0), f64::INFINITY);
        assert_eq!(negate(f64::INFINITY), f64::NEG_INFINITY);
    }
}
