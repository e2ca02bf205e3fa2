//! AST node types for parsed EDL records

pub mod event;

pub use event::{ClipInfo, Event, EventKind, TransitionInfo};
