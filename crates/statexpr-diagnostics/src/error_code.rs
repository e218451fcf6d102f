//! Numbered error codes
//!
//! Ranges:
//! - SE0001-SE0099: syntax errors (tokenizer and grammar)
//! - SE0100-SE0199: invalid construction arguments
//! - SE0200-SE0299: evaluation errors (value-supply contract violations)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Static description for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SE{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    pub description: &'static str,
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    map.insert(1, ErrorInfo::new("Token recognition error"));
    map.insert(2, ErrorInfo::new("Mismatched input"));
    map.insert(3, ErrorInfo::new("Unexpected end of input"));

    map.insert(100, ErrorInfo::new("Missing expression"));
    map.insert(101, ErrorInfo::new("Missing category"));
    map.insert(102, ErrorInfo::new("Missing statistic name"));

    map.insert(
        201,
        ErrorInfo::new("Multiple values outside an aggregate")
            .with_help("Only references inside SUM, AVG, MIN or MAX accept several values"),
    );
    map.insert(
        202,
        ErrorInfo::new("Invalid sample count")
            .with_help("Placeholder expressions take exactly one sample per statistic"),
    );
    map.insert(203, ErrorInfo::new("Sequence used where a scalar was expected"));

    map
});

pub const SE0001: ErrorCode = ErrorCode::new(1);
pub const SE0002: ErrorCode = ErrorCode::new(2);
pub const SE0003: ErrorCode = ErrorCode::new(3);

pub const SE0100: ErrorCode = ErrorCode::new(100);
pub const SE0101: ErrorCode = ErrorCode::new(101);
pub const SE0102: ErrorCode = ErrorCode::new(102);

pub const SE0201: ErrorCode = ErrorCode::new(201);
pub const SE0202: ErrorCode = ErrorCode::new(202);
pub const SE0203: ErrorCode = ErrorCode::new(203);
