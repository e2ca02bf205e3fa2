//! Frame-accurate, non-drop-frame timecode values
//!
//! EDL timecodes are `HH:MM:SS:FF` positions counted at a nominal integer
//! frame rate. The format itself never states the rate, so every value
//! carries the rate it was parsed under and arithmetic happens on the
//! total frame count.
//!
//! # Example
//!
//! ```rust
//! use edl_core::Timecode;
//!
//! let tc = Timecode::parse("01:00:00:00", 25)?;
//! assert_eq!((tc + 43).to_string(), "01:00:01:18");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use core::{cmp::Ordering, fmt, ops::Add};

use thiserror::Error;

/// Frame rate assumed when the caller does not supply one
pub const DEFAULT_FPS: u32 = 25;

/// Errors produced while constructing or parsing a [`Timecode`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimecodeError {
    /// Text does not have the `H:M:S:F` shape
    #[error("malformed timecode '{0}'")]
    Malformed(String),

    /// One of the fields exceeds the range allowed for it
    #[error("{field} value {value} out of range (must be < {limit})")]
    FieldOutOfRange {
        field: &'static str,
        value: u32,
        limit: u32,
    },

    /// Frame rate of zero
    #[error("invalid frame rate {0}")]
    InvalidFrameRate(u32),
}

/// A position in time counted in frames at a fixed nominal rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timecode {
    /// Total frames since `00:00:00:00`
    frames: u64,
    /// Nominal frames per second
    fps: u32,
}

impl Timecode {
    /// Build a timecode from its four fields
    ///
    /// # Errors
    ///
    /// Returns [`TimecodeError::InvalidFrameRate`] for `fps == 0` and
    /// [`TimecodeError::FieldOutOfRange`] when minutes or seconds reach 60 or
    /// the frame field reaches `fps`.
    pub fn at(
        hours: u32,
        minutes: u32,
        seconds: u32,
        frame: u32,
        fps: u32,
    ) -> Result<Self, TimecodeError> {
        if fps == 0 {
            return Err(TimecodeError::InvalidFrameRate(fps));
        }
        check_range("minutes", minutes, 60)?;
        check_range("seconds", seconds, 60)?;
        check_range("frames", frame, fps)?;

        let total_seconds =
            u64::from(hours) * 3_600 + u64::from(minutes) * 60 + u64::from(seconds);
        Ok(Self {
            frames: total_seconds * u64::from(fps) + u64::from(frame),
            fps,
        })
    }

    /// Build a timecode from a raw frame count
    ///
    /// # Errors
    ///
    /// Returns [`TimecodeError::InvalidFrameRate`] for `fps == 0`.
    pub const fn from_frames(frames: u64, fps: u32) -> Result<Self, TimecodeError> {
        if fps == 0 {
            return Err(TimecodeError::InvalidFrameRate(fps));
        }
        Ok(Self { frames, fps })
    }

    /// Parse `HH:MM:SS:FF` text under the given frame rate
    ///
    /// One or two digits are accepted per field. Drop-frame notation
    /// (`;` separators) is not supported.
    ///
    /// # Errors
    ///
    /// Returns [`TimecodeError::Malformed`] when the text is not four
    /// colon-separated numbers, otherwise any error of [`Timecode::at`].
    pub fn parse(text: &str, fps: u32) -> Result<Self, TimecodeError> {
        let text = text.trim();
        let mut fields = [0_u32; 4];
        let mut count = 0;

        for part in text.split(':') {
            if count == 4
                || part.is_empty()
                || part.len() > 2
                || !part.bytes().all(|b| b.is_ascii_digit())
            {
                return Err(TimecodeError::Malformed(text.to_string()));
            }
            fields[count] = part
                .parse()
                .map_err(|_| TimecodeError::Malformed(text.to_string()))?;
            count += 1;
        }

        if count != 4 {
            return Err(TimecodeError::Malformed(text.to_string()));
        }

        Self::at(fields[0], fields[1], fields[2], fields[3], fps)
    }

    /// Total frame count
    #[must_use]
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Nominal frame rate
    #[must_use]
    pub const fn fps(&self) -> u32 {
        self.fps
    }

    #[must_use]
    pub const fn hours(&self) -> u64 {
        self.frames / (self.fps as u64 * 3_600)
    }

    #[must_use]
    pub const fn minutes(&self) -> u64 {
        (self.frames / (self.fps as u64 * 60)) % 60
    }

    #[must_use]
    pub const fn seconds(&self) -> u64 {
        (self.frames / self.fps as u64) % 60
    }

    /// Frame field (`FF`)
    #[must_use]
    pub const fn frame(&self) -> u64 {
        self.frames % self.fps as u64
    }

    /// Advance by a number of frames
    #[must_use]
    pub const fn add_frames(self, frames: u64) -> Self {
        Self {
            frames: self.frames.saturating_add(frames),
            fps: self.fps,
        }
    }
}

/// Reject a field value at or above its limit
const fn check_range(field: &'static str, value: u32, limit: u32) -> Result<(), TimecodeError> {
    if value >= limit {
        Err(TimecodeError::FieldOutOfRange {
            field,
            value,
            limit,
        })
    } else {
        Ok(())
    }
}

impl Add<u32> for Timecode {
    type Output = Self;

    fn add(self, frames: u32) -> Self {
        self.add_frames(u64::from(frames))
    }
}

impl PartialOrd for Timecode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.fps == other.fps).then(|| self.frames.cmp(&other.frames))
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.hours(),
            self.minutes(),
            self.seconds(),
            self.frame()
        )
    }
}
