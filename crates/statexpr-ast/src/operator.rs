//! Operator definitions
//!
//! Precedence levels, lowest to highest:
//! 1. `? :` (ternary)
//! 2. `||`
//! 3. `&&`
//! 4. `==`, `!=`
//! 5. `>`, `>=`, `<`, `<=`
//! 6. `+`, `-`
//! 7. `*`, `/`
//! 8. unary `+`, `-`
//! 9. primaries (literals, references, calls, parentheses)

/// Ternary precedence
pub const TERNARY_PRECEDENCE: u8 = 1;
/// Unary operator precedence
pub const UNARY_PRECEDENCE: u8 = 8;
/// Precedence of atoms that never need parentheses
pub const PRIMARY_PRECEDENCE: u8 = 9;

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Or,
    And,
    Equal,
    NotEqual,
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Or => 2,
            Self::And => 3,
            Self::Equal | Self::NotEqual => 4,
            Self::Greater | Self::GreaterOrEqual | Self::Less | Self::LessOrEqual => 5,
            Self::Add | Self::Subtract => 6,
            Self::Multiply | Self::Divide => 7,
        }
    }

    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Or => "||",
            Self::And => "&&",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Greater => ">",
            Self::GreaterOrEqual => ">=",
            Self::Less => "<",
            Self::LessOrEqual => "<=",
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Plus,
    Negate,
}

impl UnaryOp {
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Negate => "-",
        }
    }
}

/// Aggregate functions over a flattened argument sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateFn {
    Sum,
    Avg,
    Min,
    Max,
}

impl AggregateFn {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sum => "SUM",
            Self::Avg => "AVG",
            Self::Min => "MIN",
            Self::Max => "MAX",
        }
    }

}
