//! Parser configuration
//!
//! The EDL format carries no frame-rate marker, so the rate is supplied here
//! and applies to every timecode of a parse.

use crate::utils::{CoreError, Result, DEFAULT_FPS};

/// What to do with an event line that fails the record grammar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordPolicy {
    /// Drop the record, report a critical issue and keep parsing
    #[default]
    Reject,

    /// Abort the parse with the record's error
    Strict,
}

/// Settings for one [`Parser`](super::Parser)
///
/// # Example
///
/// ```rust
/// use edl_core::parser::{ParserConfig, RecordPolicy};
///
/// let config = ParserConfig::new(30).with_policy(RecordPolicy::Strict);
/// assert!(config.validate().is_ok());
/// assert!(ParserConfig::new(0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParserConfig {
    /// Nominal frames per second for all timecodes
    pub fps: u32,

    /// Handling of malformed event lines
    pub malformed_records: RecordPolicy,
}

impl ParserConfig {
    #[must_use]
    pub const fn new(fps: u32) -> Self {
        Self {
            fps,
            malformed_records: RecordPolicy::Reject,
        }
    }

    #[must_use]
    pub const fn with_policy(mut self, policy: RecordPolicy) -> Self {
        self.malformed_records = policy;
        self
    }

    /// Check the settings before a parser is built from them
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Config`] when `fps` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.fps == 0 {
            return Err(CoreError::config("frame rate must be greater than zero"));
        }
        Ok(())
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FPS)
    }
}
