//! Parser error types for EDL parsing
//!
//! # Error Philosophy
//!
//! - Prefer recovery over failure: a bad line never aborts the parse
//! - Every problem carries the 1-based line number and the offending text
//!
//! # Module Organization
//!
//! - `parse_error` - Typed failures raised by line matchers
//! - `parse_issue` - Recoverable diagnostics collected during a parse

pub mod parse_error;
pub mod parse_issue;

pub use parse_error::ParseError;
pub use parse_issue::{IssueCategory, IssueSeverity, ParseIssue};
