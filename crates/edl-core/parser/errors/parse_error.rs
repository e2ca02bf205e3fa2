//! Primary parse error type for EDL lines
//!
//! Each variant identifies one failure class of the line grammar. The parser
//! turns all of them into [`ParseIssue`]s except a malformed record under
//! [`RecordPolicy::Strict`](crate::parser::RecordPolicy::Strict), which aborts.

use thiserror::Error;

use super::parse_issue::{IssueCategory, IssueSeverity, ParseIssue};

/// Failure raised while applying a line matcher
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// An event line that does not satisfy the record grammar
    #[error("malformed event record at line {line}: {reason} - offending line was '{text}'")]
    MalformedRecord {
        line: usize,
        text: String,
        reason: String,
    },

    /// A timecode on a continuation line failed to parse
    #[error("invalid timecode at line {line}: {reason} - offending line was '{text}'")]
    InvalidTimecode {
        line: usize,
        text: String,
        reason: String,
    },

    /// An `M2` line naming a reel and source timecode no prior event has
    #[error(
        "cannot find event with reel {reel} starting at {timecode} for timewarp at line {line} - offending line was '{text}'"
    )]
    UnresolvedTimewarpReference {
        line: usize,
        text: String,
        reel: String,
        timecode: String,
    },

    /// A continuation line with no event to attach to
    #[error("no event to attach line {line} to - offending line was '{text}'")]
    OrphanContinuation { line: usize, text: String },

    /// A continuation field that the current event kind does not carry
    #[error("{kind} events carry no {field} (line {line}) - offending line was '{text}'")]
    FieldNotApplicable {
        line: usize,
        text: String,
        field: &'static str,
        kind: &'static str,
    },
}

impl ParseError {
    /// Line number (1-based) of the offending line
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::MalformedRecord { line, .. }
            | Self::InvalidTimecode { line, .. }
            | Self::UnresolvedTimewarpReference { line, .. }
            | Self::OrphanContinuation { line, .. }
            | Self::FieldNotApplicable { line, .. } => *line,
        }
    }

    /// Verbatim text of the offending line
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::MalformedRecord { text, .. }
            | Self::InvalidTimecode { text, .. }
            | Self::UnresolvedTimewarpReference { text, .. }
            | Self::OrphanContinuation { text, .. }
            | Self::FieldNotApplicable { text, .. } => text,
        }
    }

    /// Whether the failure lost a whole record rather than a single line
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        matches!(self, Self::MalformedRecord { .. })
    }

    /// Convert into a recoverable diagnostic
    #[must_use]
    pub fn to_issue(&self) -> ParseIssue {
        let (severity, category) = match self {
            Self::MalformedRecord { .. } => (IssueSeverity::Critical, IssueCategory::Record),
            Self::InvalidTimecode { .. } => (IssueSeverity::Error, IssueCategory::Timecode),
            Self::UnresolvedTimewarpReference { .. } => {
                (IssueSeverity::Error, IssueCategory::Timewarp)
            }
            Self::OrphanContinuation { .. } => (IssueSeverity::Warning, IssueCategory::Continuation),
            Self::FieldNotApplicable { .. } => (IssueSeverity::Warning, IssueCategory::Continuation),
        };

        let issue = ParseIssue::new(
            severity,
            category,
            self.to_string(),
            self.line(),
            self.text().to_string(),
        );

        match self {
            Self::UnresolvedTimewarpReference { .. } => issue.with_suggestion(
                "M2 lines must follow the event whose reel and source start they name".to_string(),
            ),
            Self::FieldNotApplicable { field: "effect", .. } => issue.with_suggestion(
                "* EFFECT NAME lines belong after a D (dissolve) event".to_string(),
            ),
            _ => issue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_offending_line() {
        let err = ParseError::MalformedRecord {
            line: 4,
            text: "001 AX V".to_string(),
            reason: "expected four timecodes".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("line 4"));
        assert!(message.contains("'001 AX V'"));
        assert!(message.contains("expected four timecodes"));
    }

    #[test]
    fn test_accessors_cover_every_variant() {
        let errors = [
            ParseError::MalformedRecord {
                line: 1,
                text: "a".to_string(),
                reason: String::new(),
            },
            ParseError::InvalidTimecode {
                line: 2,
                text: "b".to_string(),
                reason: String::new(),
            },
            ParseError::UnresolvedTimewarpReference {
                line: 3,
                text: "c".to_string(),
                reel: "R".to_string(),
                timecode: "00:00:00:00".to_string(),
            },
            ParseError::OrphanContinuation {
                line: 4,
                text: "d".to_string(),
            },
            ParseError::FieldNotApplicable {
                line: 5,
                text: "e".to_string(),
                field: "effect",
                kind: "video clip",
            },
        ];

        for (index, err) in errors.iter().enumerate() {
            assert_eq!(err.line(), index + 1);
            assert_eq!(err.to_issue().line, index + 1);
        }
        assert_eq!(errors[2].text(), "c");
        assert!(errors[0].is_structural());
        assert!(!errors[1].is_structural());
    }

    #[test]
    fn test_issue_severity_follows_error_class() {
        let malformed = ParseError::MalformedRecord {
            line: 1,
            text: String::new(),
            reason: String::new(),
        };
        assert_eq!(malformed.to_issue().severity, IssueSeverity::Critical);
        assert_eq!(malformed.to_issue().category, IssueCategory::Record);

        let timewarp = ParseError::UnresolvedTimewarpReference {
            line: 9,
            text: "M2 R 050.0 00:00:00:00".to_string(),
            reel: "R".to_string(),
            timecode: "00:00:00:00".to_string(),
        };
        let issue = timewarp.to_issue();
        assert_eq!(issue.severity, IssueSeverity::Error);
        assert_eq!(issue.category, IssueCategory::Timewarp);
        assert!(issue.suggestion.is_some());
        assert_eq!(issue.text, "M2 R 050.0 00:00:00:00");
    }
}
