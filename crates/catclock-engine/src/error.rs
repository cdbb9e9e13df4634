//! Error types for the fallible edges of the engine.
//!
//! Geometry and rasterization cannot fail. Errors only come from validating
//! configuration and from parsing user-supplied clock times.

use std::fmt;

/// A face or ticker configuration that cannot be rendered or scheduled.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    pub field: &'static str,
    pub message: String,
}

impl ConfigError {
    pub(crate) fn new(field: &'static str, msg: impl Into<String>) -> Self {
        Self { field, message: msg.into() }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid `{}`: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// A clock time string that does not match `HH:MM[:SS[.fraction]]`.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeParseError {
    pub message: String,
    /// 1-based byte column where the problem was found.
    pub col: usize,
}

impl TimeParseError {
    pub(crate) fn new(msg: impl Into<String>, col: usize) -> Self {
        Self { message: msg.into(), col }
    }
}

impl fmt::Display for TimeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "time parse error at column {}: {}", self.col, self.message)
    }
}

impl std::error::Error for TimeParseError {}
