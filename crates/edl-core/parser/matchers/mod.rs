//! Line matchers for EDL parsing
//!
//! Each matcher recognizes one line shape purely from the line's own text and
//! knows how to apply that line to the parse state. The parser keeps an
//! ordered, immutable list of matchers and dispatches every line to the first
//! one that recognizes it.
//!
//! ## Architecture
//!
//! - **EventMatcher**: opens a new record from an event line
//! - **EffectMatcher**: `* EFFECT NAME:` lines
//! - **NameMatcher**: `* FROM CLIP NAME:` lines
//! - **TimewarpMatcher**: `M2` speed-change lines, resolved against prior events
//! - **CommentMatcher**: any other `*` line, discarded
//!
//! ## Example
//!
//! ```rust
//! use edl_core::parser::matchers::{standard_matchers, LineMatcher};
//!
//! let matchers = standard_matchers(25);
//! let line = "* FROM CLIP NAME:  TAPE_6-10.MOV";
//! let matcher = matchers.iter().find(|m| m.matches(line)).unwrap();
//! assert_eq!(matcher.name(), "clip-name");
//! ```

use super::{ast::Event, errors::ParseError, state::ParserState};

pub mod comment;
pub mod effect;
pub mod event;
pub mod name;
pub mod timewarp;

pub use comment::CommentMatcher;
pub use effect::EffectMatcher;
pub use event::EventMatcher;
pub use name::NameMatcher;
pub use timewarp::TimewarpMatcher;

/// Timecode token as it appears on event and `M2` lines
pub(crate) const TIMECODE_PATTERN: &str = r"\d{1,2}:\d{1,2}:\d{1,2}:\d{1,2}";

/// What applying a line did to the parse
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// A new record was built and should become the current event
    Opened(Event),

    /// Fields were attached to an existing event
    Applied,

    /// The line was recognized and deliberately discarded
    Skipped,
}

/// Trait for classifying and applying one shape of EDL line
pub trait LineMatcher: Send + Sync {
    /// Unique name identifier for this matcher
    fn name(&self) -> &'static str;

    /// Whether the line has this matcher's shape
    fn matches(&self, line: &str) -> bool;

    /// Whether a match starts a new record
    fn signals_new_event(&self) -> bool {
        false
    }

    /// Extract the line's fields and apply them
    ///
    /// # Arguments
    /// * `state` - Accumulated events, including the one under construction
    /// * `line` - Trimmed line text
    /// * `line_number` - 1-based input line
    ///
    /// # Errors
    /// Returns the [`ParseError`] describing why the line could not be applied.
    fn apply(
        &self,
        state: &mut ParserState,
        line: &str,
        line_number: usize,
    ) -> Result<LineOutcome, ParseError>;
}

/// Create the standard matcher list in dispatch order
///
/// `fps` is the frame rate for every timecode read by the matchers.
#[must_use]
pub fn standard_matchers(fps: u32) -> Vec<Box<dyn LineMatcher>> {
    vec![
        Box::new(EventMatcher::new(fps)),
        Box::new(EffectMatcher),
        Box::new(NameMatcher),
        Box::new(TimewarpMatcher::new(fps)),
        Box::new(CommentMatcher),
    ]
}

/// Current event for a continuation line, or the error for an orphan line
pub(crate) fn continuation_target<'s>(
    state: &'s mut ParserState,
    line: &str,
    line_number: usize,
) -> Result<&'s mut Event, ParseError> {
    state
        .current_mut()
        .ok_or_else(|| ParseError::OrphanContinuation {
            line: line_number,
            text: line.to_string(),
        })
}
