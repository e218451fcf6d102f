//! Literal AST nodes

/// A numeric literal or one of the named IEEE constants
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    /// Decimal literal, already parsed to a double
    Number(f64),
    /// `+Inf` / `+INF`
    PositiveInfinity,
    /// `-Inf` / `-INF`
    NegativeInfinity,
    /// `NaN`
    NaN,
}

impl Literal {
    /// Literal for an arbitrary double, mapping non-finite values to the named constants
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            Self::NaN
        } else if value == f64::INFINITY {
            Self::PositiveInfinity
        } else if value == f64::NEG_INFINITY {
            Self::NegativeInfinity
        } else {
            Self::Number(value)
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::PositiveInfinity => f64::INFINITY,
            Self::NegativeInfinity => f64::NEG_INFINITY,
            Self::NaN => f64::NAN,
        }
    }

    /// Renders with a leading minus sign
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Number(n) => n.is_sign_negative(),
            Self::NegativeInfinity => true,
            Self::PositiveInfinity | Self::NaN => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_f64_specials() {
        assert_eq!(Literal::from_f64(f64::INFINITY), Literal::PositiveInfinity);
        assert_eq!(Literal::from_f64(f64::NEG_INFINITY), Literal::NegativeInfinity);
        assert_eq!(Literal::from_f64(f64::NAN), Literal::NaN);
        assert_eq!(Literal::from_f64(2.5), Literal::Number(2.5));
    }

    #[test]
    fn test_value() {
        assert!(Literal::NaN.value().is_nan());
        assert_eq!(Literal::NegativeInfinity.value(), f64::NEG_INFINITY);
        assert_eq!(Literal::Number(-3.0).value(), -3.0);
    }
}
