//! `* FROM CLIP NAME:` continuation lines

use once_cell::sync::Lazy;
use regex::Regex;

use super::{continuation_target, LineMatcher, LineOutcome};
use crate::parser::{errors::ParseError, state::ParserState};

/// `* FROM CLIP NAME: <text>`
static CLIP_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\*\s*FROM CLIP NAME:\s+(\S.*)$").expect("clip name pattern is valid")
});

/// Sets the source clip name of the event under construction
///
/// On a transition the name belongs to the outgoing clip the record describes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NameMatcher;

impl LineMatcher for NameMatcher {
    fn name(&self) -> &'static str {
        "clip-name"
    }

    fn matches(&self, line: &str) -> bool {
        CLIP_NAME.is_match(line)
    }

    fn apply(
        &self,
        state: &mut ParserState,
        line: &str,
        line_number: usize,
    ) -> Result<LineOutcome, ParseError> {
        let clip_name = CLIP_NAME
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map_or("", |m| m.as_str().trim());

        let event = continuation_target(state, line, line_number)?;
        let kind = event.kind.name();
        let info = event
            .clip_info_mut()
            .ok_or_else(|| ParseError::FieldNotApplicable {
                line: line_number,
                text: line.to_string(),
                field: "clip name",
                kind,
            })?;
        info.clip_name = Some(clip_name.to_string());
        event.comments.push(line.to_string());
        Ok(LineOutcome::Applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::matchers::EventMatcher;

    fn state_with(line: &str) -> ParserState {
        let mut state = ParserState::new();
        state.open(EventMatcher::new(25).build_event(line, 1).unwrap());
        state
    }

    #[test]
    fn test_matches_clip_name_lines() {
        assert!(NameMatcher.matches("* FROM CLIP NAME:  TAPE_6-10.MOV"));
        assert!(!NameMatcher.matches("* TO CLIP NAME:  TAPE_6-10.MOV"));
        assert!(!NameMatcher.matches("FROM CLIP NAME: TAPE"));
    }

    #[test]
    fn test_apply_sets_clip_name() {
        let mut state = state_with(
            "001  008C     V     C        08:04:24:24 08:04:25:19 01:00:25:22 01:00:26:17",
        );
        NameMatcher
            .apply(&mut state, "* FROM CLIP NAME:  TAPE_6-10.MOV", 2)
            .unwrap();
        let event = state.current().unwrap();
        assert_eq!(event.clip_name(), Some("TAPE_6-10.MOV"));
        assert_eq!(event.comments.len(), 1);
    }

    #[test]
    fn test_apply_on_transition_names_outgoing_clip() {
        let mut state = state_with(
            "002  GEN      V     D    025 00:00:55:10 00:00:58:11 01:00:29:19 01:00:32:20",
        );
        NameMatcher
            .apply(&mut state, "* FROM CLIP NAME: SLATE", 2)
            .unwrap();
        let transition = state.current().unwrap().transition().unwrap();
        assert_eq!(transition.clip.clip_name.as_deref(), Some("SLATE"));
    }

    #[test]
    fn test_apply_on_unclassified_event_fails() {
        let mut state = state_with(
            "003  008C     V     K        08:04:24:24 08:04:25:19 01:00:25:22 01:00:26:17",
        );
        let err = NameMatcher
            .apply(&mut state, "* FROM CLIP NAME: X", 2)
            .unwrap_err();
        assert!(matches!(
            err,
            ParseError::FieldNotApplicable {
                field: "clip name",
                kind: "unclassified",
                ..
            }
        ));
    }

    #[test]
    fn test_apply_without_event_is_orphan() {
        let mut state = ParserState::new();
        let err = NameMatcher
            .apply(&mut state, "* FROM CLIP NAME: X", 1)
            .unwrap_err();
        assert!(matches!(err, ParseError::OrphanContinuation { line: 1, .. }));
    }
}
