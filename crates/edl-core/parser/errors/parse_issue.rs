//! Parse issue types for recoverable parsing problems
//!
//! Contains types for representing warnings, errors, and other issues that
//! can be recovered from during parsing. These allow continued parsing
//! while collecting problems for later review.

use core::fmt;

/// Parse issue severity levels for partial recovery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IssueSeverity {
    /// A line was skipped or a field could not be attached
    Warning,

    /// A continuation line failed and its data was lost
    Error,

    /// A whole event record was dropped
    Critical,
}

impl fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// Issue categories for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IssueCategory {
    /// Event record lines
    Record,

    /// Timecode values
    Timecode,

    /// `M2` speed-change lines
    Timewarp,

    /// Clip name and effect name lines
    Continuation,
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Record => write!(f, "record"),
            Self::Timecode => write!(f, "timecode"),
            Self::Timewarp => write!(f, "timewarp"),
            Self::Continuation => write!(f, "continuation"),
        }
    }
}

/// Parse issue for recoverable problems and warnings
///
/// Carries the source line number and verbatim text so a caller can point
/// at the exact input that was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseIssue {
    /// Issue severity level
    pub severity: IssueSeverity,

    /// Issue category for filtering/grouping
    pub category: IssueCategory,

    /// Human-readable message
    pub message: String,

    /// Line number where issue occurred (1-based)
    pub line: usize,

    /// Verbatim text of the offending line
    pub text: String,

    /// Suggested fix or explanation
    pub suggestion: Option<String>,
}

impl ParseIssue {
    /// Create new parse issue
    #[must_use]
    pub const fn new(
        severity: IssueSeverity,
        category: IssueCategory,
        message: String,
        line: usize,
        text: String,
    ) -> Self {
        Self {
            severity,
            category,
            message,
            line,
            text,
            suggestion: None,
        }
    }

    /// Add suggestion to existing issue
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestion = Some(suggestion);
        self
    }

    /// Format issue for display in a console or log
    #[must_use]
    pub fn format_for_display(&self) -> String {
        let mut result = format!(
            "[{}:{}] {}: {}",
            self.line, self.category, self.severity, self.message
        );

        if let Some(suggestion) = &self.suggestion {
            result.push_str("\n  Suggestion: ");
            result.push_str(suggestion);
        }

        result
    }

    /// Check if an event record was lost
    #[must_use]
    pub const fn is_blocking(&self) -> bool {
        matches!(self.severity, IssueSeverity::Critical)
    }
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_for_display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_severity_display() {
        assert_eq!(format!("{}", IssueSeverity::Warning), "warning");
        assert_eq!(format!("{}", IssueSeverity::Error), "error");
        assert_eq!(format!("{}", IssueSeverity::Critical), "critical");
    }

    #[test]
    fn test_severity_orders_by_impact() {
        assert!(IssueSeverity::Warning < IssueSeverity::Error);
        assert!(IssueSeverity::Error < IssueSeverity::Critical);
    }

    #[test]
    fn test_issue_category_display() {
        assert_eq!(format!("{}", IssueCategory::Record), "record");
        assert_eq!(format!("{}", IssueCategory::Timecode), "timecode");
        assert_eq!(format!("{}", IssueCategory::Timewarp), "timewarp");
        assert_eq!(format!("{}", IssueCategory::Continuation), "continuation");
    }

    #[test]
    fn test_format_with_suggestion() {
        let issue = ParseIssue::new(
            IssueSeverity::Warning,
            IssueCategory::Continuation,
            "no event to attach to".to_string(),
            3,
            "* FROM CLIP NAME: A.MOV".to_string(),
        )
        .with_suggestion("move the line below its event".to_string());

        let formatted = issue.format_for_display();
        assert!(formatted.starts_with("[3:continuation] warning: no event to attach to"));
        assert!(formatted.contains("Suggestion: move the line below its event"));
        assert!(!issue.is_blocking());
    }

    #[test]
    fn test_critical_issue_is_blocking() {
        let issue = ParseIssue::new(
            IssueSeverity::Critical,
            IssueCategory::Record,
            "record dropped".to_string(),
            1,
            "001 AX V".to_string(),
        );
        assert!(issue.is_blocking());
        assert_eq!(issue.to_string(), "[1:record] critical: record dropped");
    }
}
