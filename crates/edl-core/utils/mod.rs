//! Utility functions and shared types for edl-core
//!
//! Contains the timecode value type, the crate-level error, and the text
//! normalization applied before line dispatch.

pub mod errors;
pub mod timecode;

pub use errors::{CoreError, Result};
pub use timecode::{Timecode, TimecodeError, DEFAULT_FPS};

/// Normalize an EDL body before splitting it into lines
///
/// Strips a leading UTF-8 byte order mark and folds Windows (`\r\n`) and
/// classic Mac (`\r`) line endings to `\n`.
///
/// # Examples
///
/// ```rust
/// # use edl_core::utils::normalize_input;
/// let input = "\u{FEFF}001\r\n002\r003\n";
/// assert_eq!(normalize_input(input), "001\n002\n003\n");
/// ```
#[must_use]
pub fn normalize_input(text: &str) -> String {
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Check whether a reel name marks synthetic material
///
/// `AX` (auxiliary source), `BL` (black) and any `GEN`-prefixed reel carry
/// no footage of their own.
#[must_use]
pub fn is_generator_reel(reel: &str) -> bool {
    reel == "AX" || reel == "BL" || reel.starts_with("GEN")
}
