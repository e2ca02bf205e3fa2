//! # EDL Core
//!
//! Parser and list algebra for CMX-style edit decision lists. An EDL is a
//! line-oriented text description of how source reels map onto a program
//! timeline; this crate turns it into an ordered [`List`] of typed
//! [`Event`]s and provides the transforms editors apply before conforming.
//!
//! ## Features
//!
//! - **Line-classifying parser**: an ordered set of matchers assembles
//!   multi-line records (clip names, effect names, `M2` timewarps) onto the
//!   events they annotate
//! - **Recoverable diagnostics**: bad lines become [`ParseIssue`]s with line
//!   numbers instead of aborting the parse
//! - **Pure transforms**: dissolve expansion, generator filtering, splicing
//!   and renumbering return new lists
//! - **Thread-safe**: parsers and lists are `Send + Sync` and immutable once
//!   built
//!
//! ## Quick Start
//!
//! ```rust
//! use edl_core::Parser;
//!
//! let edl = "\
//! TITLE: TRAILER
//! FCM: NON-DROP FRAME
//!
//! 001  008C     V     C        08:04:24:24 08:04:25:19 01:00:25:22 01:00:26:17
//! 002  009      V     C        00:39:04:21 00:39:04:21 01:00:26:17 01:00:26:17
//! 002  GEN      V     D    025 00:00:55:10 00:00:58:11 01:00:26:17 01:00:29:18
//! * EFFECT NAME: CROSS DISSOLVE
//! 003  BL       V     C        00:00:00:00 00:00:01:00 01:00:29:18 01:00:30:18
//! ";
//!
//! let parsed = Parser::new(25)?.parse(edl)?;
//! assert!(parsed.issues().is_empty());
//!
//! let conformed = parsed
//!     .list()
//!     .without_dissolves()
//!     .without_generators()
//!     .renumbered();
//! assert_eq!(conformed.len(), 2);
//! assert_eq!(conformed[1].num, "002");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(clippy::all)]
#![deny(unsafe_code)]

pub mod list;
pub mod parser;
pub mod utils;

pub use list::List;
pub use parser::{
    ClipInfo, Event, EventKind, IssueCategory, IssueSeverity, ParseError, ParseIssue, ParsedList,
    Parser, ParserConfig, RecordPolicy, TransitionInfo,
};
pub use utils::{CoreError, Result, Timecode, TimecodeError, DEFAULT_FPS};

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
