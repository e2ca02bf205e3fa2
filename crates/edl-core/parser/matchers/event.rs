//! Event line matcher
//!
//! Claims every line that starts with an event number followed by at least
//! three more tokens, then extracts the full record:
//!
//! ```text
//! 020  008C     V     C        08:04:24:24 08:04:25:19 01:00:25:22 01:00:26:17
//! 025  GEN      V     D    025 00:00:55:10 00:00:58:11 01:00:29:19 01:00:32:20
//! ```
//!
//! Recognition is looser than extraction so that a line with missing columns
//! or a bad timecode is reported as a malformed record instead of being
//! silently ignored.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::{LineMatcher, LineOutcome, TIMECODE_PATTERN};
use crate::{
    parser::{
        ast::{ClipInfo, Event, EventKind, TransitionInfo},
        errors::ParseError,
        state::ParserState,
    },
    utils::Timecode,
};

/// Shape of anything that looks like an event line
static EVENT_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\s+\S+\s+\S+\s+\S+").expect("event shape pattern is valid"));

/// Full event record: number, reel, track, type, optional duration, four timecodes
static EVENT_RECORD: Lazy<Regex> = Lazy::new(|| {
    let tc = TIMECODE_PATTERN;
    Regex::new(&format!(
        r"^(\d+)\s+(\S+)\s+(\S+)\s+(\S+)\s+(?:(\d+)\s+)?({tc})\s+({tc})\s+({tc})\s+({tc})"
    ))
    .expect("event record pattern is valid")
});

/// Opens a new record from an event line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventMatcher {
    /// Frame rate for the record's timecodes
    fps: u32,
}

impl EventMatcher {
    #[must_use]
    pub const fn new(fps: u32) -> Self {
        Self { fps }
    }

    /// Build the event for an event line
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MalformedRecord`] when the line lacks a column,
    /// a timecode is invalid at this matcher's frame rate, or a dissolve has
    /// no duration.
    pub fn build_event(&self, line: &str, line_number: usize) -> Result<Event, ParseError> {
        let malformed = |reason: String| ParseError::MalformedRecord {
            line: line_number,
            text: line.to_string(),
            reason,
        };

        let caps = EVENT_RECORD.captures(line).ok_or_else(|| {
            malformed(
                "expected <num> <reel> <track> <type> [<duration>] followed by four timecodes"
                    .to_string(),
            )
        })?;

        let field = |caps: &Captures<'_>, index: usize| {
            caps.get(index).map_or("", |m| m.as_str()).to_string()
        };

        let timecode = |index: usize| {
            let text = caps.get(index).map_or("", |m| m.as_str());
            Timecode::parse(text, self.fps)
                .map_err(|err| malformed(format!("cannot parse timecode {text}: {err}")))
        };
        let timecodes = [timecode(6)?, timecode(7)?, timecode(8)?, timecode(9)?];

        let num = field(&caps, 1);
        let reel = field(&caps, 2);
        let track = field(&caps, 3);
        let type_code = field(&caps, 4);

        let duration = match caps.get(5) {
            Some(m) => Some(m.as_str().parse::<u32>().map_err(|err| {
                malformed(format!("invalid transition duration {}: {err}", m.as_str()))
            })?),
            None => None,
        };

        let kind = classify(&type_code, &track, &reel, duration)
            .ok_or_else(|| malformed("dissolve record without a duration".to_string()))?;

        let mut event = Event::new(num, reel, track, timecodes, kind);
        event.original_line = line.to_string();
        event.line_number = line_number;
        Ok(event)
    }
}

/// Select the event kind from type code, track and reel
///
/// Returns `None` for a dissolve without a duration.
fn classify(type_code: &str, track: &str, reel: &str, duration: Option<u32>) -> Option<EventKind> {
    let info = ClipInfo::default();
    let kind = match type_code {
        "D" => EventKind::Transition(TransitionInfo {
            effect: None,
            duration: duration?,
            clip: info,
        }),
        "C" if track.starts_with('V') => match reel {
            "BL" => EventKind::Black(info),
            _ if reel == "AX" || reel.starts_with("GEN") => EventKind::Generator(info),
            _ => EventKind::VideoClip(info),
        },
        "C" if track.starts_with('A') => EventKind::AudioClip(info),
        _ => EventKind::Other {
            type_code: type_code.to_string(),
        },
    };
    Some(kind)
}

impl LineMatcher for EventMatcher {
    fn name(&self) -> &'static str {
        "event"
    }

    fn matches(&self, line: &str) -> bool {
        EVENT_SHAPE.is_match(line)
    }

    fn signals_new_event(&self) -> bool {
        true
    }

    fn apply(
        &self,
        _state: &mut ParserState,
        line: &str,
        line_number: usize,
    ) -> Result<LineOutcome, ParseError> {
        self.build_event(line, line_number).map(LineOutcome::Opened)
    }
}
