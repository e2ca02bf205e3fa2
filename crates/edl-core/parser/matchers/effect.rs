//! `* EFFECT NAME:` continuation lines

use once_cell::sync::Lazy;
use regex::Regex;

use super::{continuation_target, LineMatcher, LineOutcome};
use crate::parser::{ast::EventKind, errors::ParseError, state::ParserState};

/// `* EFFECT NAME: <text>`
static EFFECT_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\*\s*EFFECT NAME:\s+(\S.*)$").expect("effect name pattern is valid")
});

/// Sets the effect name of the transition under construction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EffectMatcher;

impl LineMatcher for EffectMatcher {
    fn name(&self) -> &'static str {
        "effect"
    }

    fn matches(&self, line: &str) -> bool {
        EFFECT_NAME.is_match(line)
    }

    fn apply(
        &self,
        state: &mut ParserState,
        line: &str,
        line_number: usize,
    ) -> Result<LineOutcome, ParseError> {
        let effect = EFFECT_NAME
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map_or("", |m| m.as_str().trim());

        let event = continuation_target(state, line, line_number)?;
        match &mut event.kind {
            EventKind::Transition(transition) => {
                transition.effect = Some(effect.to_string());
            }
            other => {
                return Err(ParseError::FieldNotApplicable {
                    line: line_number,
                    text: line.to_string(),
                    field: "effect",
                    kind: other.name(),
                })
            }
        }
        event.comments.push(line.to_string());
        Ok(LineOutcome::Applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::matchers::EventMatcher;

    const DISSOLVE: &str =
        "002  GEN      V     D    025 00:00:55:10 00:00:58:11 01:00:29:19 01:00:32:20";
    const CUT: &str =
        "001  008C     V     C        08:04:24:24 08:04:25:19 01:00:25:22 01:00:26:17";

    fn state_with(line: &str) -> ParserState {
        let mut state = ParserState::new();
        state.open(EventMatcher::new(25).build_event(line, 1).unwrap());
        state
    }

    #[test]
    fn test_matches_effect_lines() {
        assert!(EffectMatcher.matches("* EFFECT NAME: CROSS DISSOLVE"));
        assert!(EffectMatcher.matches("*EFFECT NAME:  WIPE"));
        assert!(!EffectMatcher.matches("* EFFECT NAME:"));
        assert!(!EffectMatcher.matches("* FROM CLIP NAME: CROSS DISSOLVE"));
    }

    #[test]
    fn test_apply_sets_effect_on_transition() {
        let mut state = state_with(DISSOLVE);
        let outcome = EffectMatcher
            .apply(&mut state, "* EFFECT NAME: CROSS DISSOLVE  ", 2)
            .unwrap();
        assert_eq!(outcome, LineOutcome::Applied);

        let event = state.current().unwrap();
        assert_eq!(event.effect(), Some("CROSS DISSOLVE"));
        assert_eq!(event.comments, ["* EFFECT NAME: CROSS DISSOLVE  "]);
    }

    #[test]
    fn test_apply_on_cut_is_not_applicable() {
        let mut state = state_with(CUT);
        let err = EffectMatcher
            .apply(&mut state, "* EFFECT NAME: CROSS DISSOLVE", 2)
            .unwrap_err();
        assert!(matches!(
            err,
            ParseError::FieldNotApplicable {
                field: "effect",
                kind: "video clip",
                ..
            }
        ));
        assert!(state.current().unwrap().comments.is_empty());
    }
}
