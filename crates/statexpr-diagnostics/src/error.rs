//! statexpr error types

use crate::{ErrorCode, SourceLocation};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A reportable message with location and help text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    pub location: Option<SourceLocation>,
    pub help: Option<String>,
    /// Grammar rules active at the failure point, outermost first
    pub rule_stack: Vec<String>,
}

impl Diagnostic {
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            location: None,
            help: code.info().help.map(str::to_string),
            rule_stack: Vec::new(),
        }
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn with_rule_stack(mut self, rule_stack: Vec<String>) -> Self {
        self.rule_stack = rule_stack;
        self
    }

    /// Render the diagnostic with a caret under the offending source position
    pub fn render(&self, source: &str) -> String {
        let mut out = self.headline();
        if let Some(loc) = &self.location {
            if let Some(line) = source.lines().nth(loc.line.saturating_sub(1)) {
                let caret = format!(
                    "{}{}",
                    " ".repeat(loc.column.saturating_sub(1)),
                    "^".repeat(loc.length.max(1))
                );
                out.push_str(&format!("\n  | {line}\n  | {}", paint_caret(caret)));
            }
        }
        if !self.rule_stack.is_empty() {
            out.push_str(&format!("\n  = rules: {}", self.rule_stack.join(" > ")));
        }
        if let Some(help) = &self.help {
            out.push_str(&format!("\n  = help: {help}"));
        }
        out
    }

    #[cfg(feature = "colored")]
    fn headline(&self) -> String {
        use colored::Colorize;

        let mut out = format!("{}: {}", format!("error[{}]", self.code).red().bold(), self.message);
        if let Some(loc) = &self.location {
            out.push_str(&format!(" at {}", loc.to_string().cyan()));
        }
        out
    }

    #[cfg(not(feature = "colored"))]
    fn headline(&self) -> String {
        let mut out = format!("error[{}]: {}", self.code, self.message);
        if let Some(loc) = &self.location {
            out.push_str(&format!(" at {loc}"));
        }
        out
    }
}

#[cfg(feature = "colored")]
fn paint_caret(caret: String) -> String {
    use colored::Colorize;
    caret.red().bold().to_string()
}

#[cfg(not(feature = "colored"))]
fn paint_caret(caret: String) -> String {
    caret
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error: {} - {}", self.code, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " at {}", loc)?;
        }
        Ok(())
    }
}

/// Main statexpr error type
#[derive(Debug, Clone, Error)]
pub enum StatExprError {
    /// Empty or missing construction input
    #[error("{code}: {message}")]
    InvalidArgument { code: ErrorCode, message: String },

    /// Tokenizer or grammar failure
    #[error("{code}: line {}:{} {message}", .location.line, .location.column)]
    Syntax {
        code: ErrorCode,
        message: String,
        expression: String,
        location: SourceLocation,
        /// Rules being parsed when the error occurred, outermost first
        rule_stack: Vec<String>,
    },

    /// Structural misuse detected while evaluating or rewriting
    #[error("{code}: {message}")]
    Evaluation {
        code: ErrorCode,
        message: String,
        location: Option<SourceLocation>,
        context: Option<String>,
    },
}

impl StatExprError {
    pub fn invalid_argument(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            code,
            message: message.into(),
        }
    }

    pub fn syntax(
        code: ErrorCode,
        message: impl Into<String>,
        expression: impl Into<String>,
        location: SourceLocation,
        rule_stack: Vec<String>,
    ) -> Self {
        Self::Syntax {
            code,
            message: message.into(),
            expression: expression.into(),
            location,
            rule_stack,
        }
    }

    pub fn evaluation(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Evaluation {
            code,
            message: message.into(),
            location: None,
            context: None,
        }
    }

    /// Attach a source location to an evaluation error; other kinds are returned unchanged
    pub fn at(self, at: SourceLocation) -> Self {
        match self {
            Self::Evaluation {
                code,
                message,
                context,
                ..
            } => Self::Evaluation {
                code,
                message,
                location: Some(at),
                context,
            },
            other => other,
        }
    }

    /// Attach free-form context to an evaluation error
    pub fn with_context(self, text: impl Into<String>) -> Self {
        match self {
            Self::Evaluation {
                code,
                message,
                location,
                ..
            } => Self::Evaluation {
                code,
                message,
                location,
                context: Some(text.into()),
            },
            other => other,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidArgument { code, .. }
            | Self::Syntax { code, .. }
            | Self::Evaluation { code, .. } => *code,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument { message, .. }
            | Self::Syntax { message, .. }
            | Self::Evaluation { message, .. } => message,
        }
    }

    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            Self::Syntax { location, .. } => Some(location),
            Self::Evaluation { location, .. } => location.as_ref(),
            Self::InvalidArgument { .. } => None,
        }
    }

    /// Rule stack of a syntax error, empty for other kinds
    pub fn rule_stack(&self) -> &[String] {
        match self {
            Self::Syntax { rule_stack, .. } => rule_stack,
            _ => &[],
        }
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax { .. })
    }

    pub fn is_evaluation(&self) -> bool {
        matches!(self, Self::Evaluation { .. })
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code(), self.message());
        if let Some(loc) = self.location() {
            diag = diag.with_location(loc.clone());
        }
        match self {
            Self::Syntax { rule_stack, .. } => diag.with_rule_stack(rule_stack.clone()),
            Self::Evaluation {
                context: Some(ctx),
                ..
            } => diag.with_help(ctx.clone()),
            _ => diag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SE0001, SE0100, SE0201, Span};

    #[test]
    fn test_syntax_error_display() {
        let err = StatExprError::syntax(
            SE0001,
            "token recognition error at: '^'",
            "foo = bar ^ kat",
            SourceLocation::from_span(Span::new(10, 11), "foo = bar ^ kat"),
            vec![],
        );

        assert!(err.is_syntax());
        assert_eq!(err.to_string(), "SE0001: line 1:11 token recognition error at: '^'");
    }

    #[test]
    fn test_evaluation_error_location() {
        let err = StatExprError::evaluation(SE0201, "bar has 2 values")
            .at(SourceLocation::from_span(Span::new(6, 9), "foo = bar + 1"))
            .with_context("bar");

        assert!(err.is_evaluation());
        assert_eq!(err.location().map(|l| l.column), Some(7));
        assert_eq!(err.to_diagnostic().help.as_deref(), Some("bar"));
    }

    #[test]
    fn test_invalid_argument_has_no_location() {
        let err = StatExprError::invalid_argument(SE0100, "Expression is required");
        assert!(err.is_invalid_argument());
        assert!(err.location().is_none());
        assert!(err.rule_stack().is_empty());
    }

    #[test]
    fn test_diagnostic_render() {
        let diag = StatExprError::syntax(
            SE0001,
            "token recognition error at: '^'",
            "foo = bar ^ kat",
            SourceLocation::from_span(Span::new(10, 11), "foo = bar ^ kat"),
            vec!["assignment".into(), "expression".into()],
        )
        .to_diagnostic();

        let rendered = diag.render("foo = bar ^ kat");
        assert!(rendered.contains("SE0001"));
        assert!(rendered.contains("foo = bar ^ kat"));
        assert!(rendered.contains("assignment > expression"));
    }
}
