//! `M2` speed-change lines
//!
//! ```text
//! M2   008C       050.0                08:04:24:24
//! ```
//!
//! An `M2` line names a reel, a playback rate in frames per second and the
//! source timecode where the retimed clip starts. It applies to the most
//! recent clip-carrying event (current event first, then completed events
//! newest to oldest) with that reel and source start. Unclassified records
//! carry no clip data and are passed over.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{LineMatcher, LineOutcome};
use crate::{
    parser::{errors::ParseError, state::ParserState},
    utils::Timecode,
};

/// `M2 <reel> <fps> <timecode>`; the timecode token is validated on apply
static TIMEWARP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^M2\s+(\S+)\s+(-?\d+(?:\.\d+)?)\s+(\S+)").expect("timewarp pattern is valid")
});

/// Attaches a playback speed to an earlier event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimewarpMatcher {
    /// Frame rate of the `M2` timecode
    fps: u32,
}

impl TimewarpMatcher {
    #[must_use]
    pub const fn new(fps: u32) -> Self {
        Self { fps }
    }
}

impl LineMatcher for TimewarpMatcher {
    fn name(&self) -> &'static str {
        "timewarp"
    }

    fn matches(&self, line: &str) -> bool {
        TIMEWARP.is_match(line)
    }

    fn apply(
        &self,
        state: &mut ParserState,
        line: &str,
        line_number: usize,
    ) -> Result<LineOutcome, ParseError> {
        let invalid = |reason: String| ParseError::InvalidTimecode {
            line: line_number,
            text: line.to_string(),
            reason,
        };

        let caps = TIMEWARP
            .captures(line)
            .ok_or_else(|| invalid("expected M2 <reel> <fps> <timecode>".to_string()))?;
        let reel = caps.get(1).map_or("", |m| m.as_str());
        let rate = caps.get(2).map_or("", |m| m.as_str());
        let tc_text = caps.get(3).map_or("", |m| m.as_str());

        let line_fps: f64 = rate
            .parse()
            .map_err(|err| invalid(format!("invalid timewarp rate {rate}: {err}")))?;
        let start = Timecode::parse(tc_text, self.fps)
            .map_err(|err| invalid(format!("invalid timewarp timecode {tc_text}: {err}")))?;

        let event = state
            .find_latest_mut(|event| {
                event.reel == reel && event.source_start == start && event.clip_info().is_some()
            })
            .ok_or_else(|| ParseError::UnresolvedTimewarpReference {
                line: line_number,
                text: line.to_string(),
                reel: reel.to_string(),
                timecode: start.to_string(),
            })?;

        let event_fps = f64::from(event.source_start.fps());
        if let Some(info) = event.clip_info_mut() {
            info.timewarp_speed = Some(line_fps / event_fps);
        }
        event.comments.push(line.to_string());

        log::trace!("line {line_number}: timewarp {line_fps} fps on event {}", event.num);
        Ok(LineOutcome::Applied)
    }
}
