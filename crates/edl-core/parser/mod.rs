//! EDL parser module
//!
//! Turns the lines of an edit decision list into an ordered [`List`] of
//! typed events. Every line is dispatched to the first matcher that
//! recognizes it; event lines open a new record and continuation lines
//! (`* FROM CLIP NAME`, `* EFFECT NAME`, `M2`) attach fields to records
//! already opened.
//!
//! A bad line never aborts the parse: its error is turned into a
//! [`ParseIssue`] and parsing resumes on the next line. The only exception is
//! a malformed event line under [`RecordPolicy::Strict`].
//!
//! # Example
//!
//! ```rust
//! use edl_core::parser::Parser;
//!
//! let edl = "\
//! TITLE: TRAILER
//! 020  008C     V     C        08:04:24:24 08:04:25:19 01:00:25:22 01:00:26:17
//! * FROM CLIP NAME:  TAPE_6-10.MOV
//! ";
//!
//! let parsed = Parser::new(25)?.parse(edl)?;
//! assert_eq!(parsed.list().len(), 1);
//! assert_eq!(parsed.list()[0].clip_name(), Some("TAPE_6-10.MOV"));
//! assert!(parsed.issues().is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use core::fmt;
use std::io::BufRead;

use crate::{
    list::List,
    utils::{normalize_input, Result},
};

pub mod ast;
pub mod config;
pub mod errors;
pub mod matchers;
pub mod state;

pub use ast::{ClipInfo, Event, EventKind, TransitionInfo};
pub use config::{ParserConfig, RecordPolicy};
pub use errors::{IssueCategory, IssueSeverity, ParseError, ParseIssue};
pub use matchers::{standard_matchers, LineMatcher, LineOutcome};
pub use state::ParserState;

/// Line-classifying EDL parser
///
/// Holds the configuration and an ordered, immutable list of matchers built
/// once at construction. A parser can be reused for any number of inputs.
pub struct Parser {
    /// Frame rate and record policy
    config: ParserConfig,
    /// Matchers in dispatch order
    matchers: Vec<Box<dyn LineMatcher>>,
}

impl Parser {
    /// Create a parser with the standard matchers at the given frame rate
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Config`](crate::CoreError::Config) when `fps` is zero.
    pub fn new(fps: u32) -> Result<Self> {
        Self::with_config(ParserConfig::new(fps))
    }

    /// Create a parser with the standard matchers
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Config`](crate::CoreError::Config) for an invalid
    /// configuration.
    pub fn with_config(config: ParserConfig) -> Result<Self> {
        Self::with_matchers(config, standard_matchers(config.fps))
    }

    /// Create a parser with a custom matcher list
    ///
    /// Matchers are consulted in the given order; the first one whose
    /// pattern recognizes a line handles it.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Config`](crate::CoreError::Config) for an invalid
    /// configuration.
    pub fn with_matchers(config: ParserConfig, matchers: Vec<Box<dyn LineMatcher>>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, matchers })
    }

    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Names of the matchers in dispatch order
    #[must_use]
    pub fn matcher_names(&self) -> Vec<&'static str> {
        self.matchers.iter().map(|m| m.name()).collect()
    }

    /// Parse a whole EDL body
    ///
    /// `\r\n` and `\r` line endings are folded to `\n` and a leading byte
    /// order mark is dropped before the text is split into lines.
    ///
    /// # Errors
    ///
    /// Only fails under [`RecordPolicy::Strict`], with the first malformed
    /// event record.
    pub fn parse(&self, text: &str) -> Result<ParsedList> {
        let text = normalize_input(text);
        self.parse_lines(text.split('\n'))
    }

    /// Parse an already-split sequence of lines
    ///
    /// Line numbers are 1-based positions in `lines`.
    ///
    /// # Errors
    ///
    /// Only fails under [`RecordPolicy::Strict`], with the first malformed
    /// event record.
    pub fn parse_lines<I, S>(&self, lines: I) -> Result<ParsedList>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut state = ParserState::new();
        let mut issues = Vec::new();

        for (index, line) in lines.into_iter().enumerate() {
            if let Some(issue) = self.step(&mut state, index + 1, line.as_ref())? {
                issues.push(issue);
            }
        }

        let list = List::new(state.finish());
        log::debug!(
            "parsed {} events at {} fps with {} issues",
            list.len(),
            self.config.fps,
            issues.len()
        );
        Ok(ParsedList { list, issues })
    }

    /// Parse from an open line source
    ///
    /// A bare `\r` inside a line read from the source also ends a line, so
    /// line numbers agree with [`Parser::parse`] on the same bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Io`](crate::CoreError::Io) when reading fails, and
    /// otherwise behaves like [`Parser::parse_lines`].
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<ParsedList> {
        let mut lines = Vec::new();
        for line in reader.lines() {
            let line = line?;
            lines.extend(line.split('\r').map(str::to_string));
        }
        self.parse_lines(lines)
    }

    /// Apply a single input line to the parse state
    ///
    /// Returns the diagnostic for a line that was recognized but could not be
    /// applied. Unrecognized lines are ignored. When an event line is
    /// malformed the current-event slot is left empty so that the following
    /// continuation lines cannot attach to the previous record.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MalformedRecord`] wrapped in
    /// [`CoreError::Parse`](crate::CoreError::Parse) under
    /// [`RecordPolicy::Strict`].
    pub fn step(
        &self,
        state: &mut ParserState,
        line_number: usize,
        raw_line: &str,
    ) -> Result<Option<ParseIssue>> {
        let line = raw_line.trim().trim_start_matches('\u{FEFF}');
        let Some(matcher) = self.matchers.iter().find(|m| m.matches(line)) else {
            return Ok(None);
        };

        log::trace!("line {line_number}: {} matcher", matcher.name());

        match matcher.apply(state, line, line_number) {
            Ok(LineOutcome::Opened(mut event)) => {
                event.line_number = line_number;
                state.open(event);
                Ok(None)
            }
            Ok(LineOutcome::Applied | LineOutcome::Skipped) => Ok(None),
            Err(err) if matcher.signals_new_event() => {
                state.close_current();
                if self.config.malformed_records == RecordPolicy::Strict {
                    return Err(err.into());
                }
                log::error!("{err}");
                Ok(Some(err.to_issue()))
            }
            Err(err) => {
                log::warn!("{err}");
                Ok(Some(err.to_issue()))
            }
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        let config = ParserConfig::default();
        Self {
            matchers: standard_matchers(config.fps),
            config,
        }
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("config", &self.config)
            .field("matchers", &self.matcher_names())
            .finish()
    }
}

/// Result of a parse: the event list plus the diagnostics collected on the way
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedList {
    /// Successfully classified events in input order
    list: List,
    /// One entry per line that was recognized but could not be applied
    issues: Vec<ParseIssue>,
}

impl ParsedList {
    #[must_use]
    pub const fn list(&self) -> &List {
        &self.list
    }

    #[must_use]
    pub fn issues(&self) -> &[ParseIssue] {
        &self.issues
    }

    /// Whether any line was lost (severity `Error` or worse)
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|issue| issue.severity >= IssueSeverity::Error)
    }

    #[must_use]
    pub fn into_list(self) -> List {
        self.list
    }
}
