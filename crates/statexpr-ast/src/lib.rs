//! statexpr Abstract Syntax Tree definitions
//!
//! The tree produced by the parser for `derived = expression` sources. Every
//! node carries the span it was parsed from, and the whole tree renders back
//! to parseable text through [`std::fmt::Display`].

mod display;
mod expression;
mod literal;
mod operator;
mod visit;

pub use display::format_number;
pub use expression::*;
pub use literal::*;
pub use operator::*;
pub use visit::*;

/// A node with source span information
pub type Spanned<T> = statexpr_diagnostics::Spanned<T>;

/// Type alias for boxed expressions
pub type BoxExpr = Box<Spanned<Expression>>;

/// Root of every parsed source: `target = expression`
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// The derived statistic being defined
    pub target: Spanned<StatRef>,
    /// Right-hand side
    pub expression: Spanned<Expression>,
}

impl Assignment {
    pub fn new(target: Spanned<StatRef>, expression: Spanned<Expression>) -> Self {
        Self { target, expression }
    }
}

/// A statistic reference as written: `[category.]name{key:"value",...}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatRef {
    /// Explicit category, if one was written
    pub category: Option<String>,
    pub name: String,
    /// Dimensions in source order, quotes stripped
    pub dimensions: Vec<Dimension>,
}

impl StatRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            category: None,
            name: name.into(),
            dimensions: Vec::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_dimension(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.dimensions.push(Dimension::new(key, value));
        self
    }
}

/// The wildcard dimension value
pub const WILDCARD: &str = "*";

/// One `key:"value"` pair of a statistic reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dimension {
    pub key: String,
    pub value: String,
}

impl Dimension {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
