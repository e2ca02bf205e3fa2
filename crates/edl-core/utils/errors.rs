//! Core error type for edl-core operations
//!
//! Provides the main `CoreError` enum for failures that end a whole parse,
//! behind one crate-level `Result`.
//!
//! # Error Philosophy
//!
//! - Use `thiserror` for structured error handling (no `anyhow` bloat)
//! - Per-line problems become `ParseIssue`s; only whole-parse failures
//!   surface here

use thiserror::Error;

use crate::parser::errors::ParseError;

/// Main error type for edl-core operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Parse failure that aborted the whole parse
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Failure reading from a line source
    #[error("I/O error: {0}")]
    Io(String),

    /// Rejected parser configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CoreError {
    /// Create configuration error from message
    pub fn config<T: core::fmt::Display>(message: T) -> Self {
        Self::Config(message.to_string())
    }
}

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = core::result::Result<T, CoreError>;
