//! Free-form `*` comment lines

use super::{LineMatcher, LineOutcome};
use crate::parser::{errors::ParseError, state::ParserState};

/// Recognizes any `*` line not claimed by a more specific matcher and drops it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommentMatcher;

impl LineMatcher for CommentMatcher {
    fn name(&self) -> &'static str {
        "comment"
    }

    fn matches(&self, line: &str) -> bool {
        line.starts_with('*')
    }

    fn apply(
        &self,
        _state: &mut ParserState,
        line: &str,
        line_number: usize,
    ) -> Result<LineOutcome, ParseError> {
        log::debug!("line {line_number}: skipping comment '{line}'");
        Ok(LineOutcome::Skipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comments_are_skipped_without_touching_state() {
        let mut state = ParserState::new();
        assert!(CommentMatcher.matches("* SOURCE FILE: A.MOV"));
        assert!(!CommentMatcher.matches("M2 A 050.0 00:00:00:00"));
        assert_eq!(
            CommentMatcher.apply(&mut state, "* SOURCE FILE: A.MOV", 3),
            Ok(LineOutcome::Skipped)
        );
        assert!(state.is_empty());
    }
}
