//! Event AST node for EDL records
//!
//! An [`Event`] holds the positional fields every record line carries; its
//! [`EventKind`] holds what the record's type code and reel make it. Capability
//! questions ("is this synthetic material?", "does it carry a clip name?") are
//! answered by matching on the kind.

use core::fmt;

use crate::utils::{is_generator_reel, Timecode};

/// Data carried by every clip-like record
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClipInfo {
    /// Source clip name from a `* FROM CLIP NAME` line
    pub clip_name: Option<String>,

    /// Playback-rate multiplier from an `M2` line; `None` is normal speed
    pub timewarp_speed: Option<f64>,
}

/// Data carried by a dissolve or wipe record
///
/// The record's positional fields describe the OUTGOING clip; `clip` holds
/// that clip's name and speed.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionInfo {
    /// Effect name from a `* EFFECT NAME` line
    pub effect: Option<String>,

    /// Transition length in frames
    pub duration: u32,

    /// Outgoing clip data
    pub clip: ClipInfo,
}

/// Record kind selected from the type code, track and reel of an event line
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// Plain clip, produced by list transforms
    Clip(ClipInfo),

    /// Cut on a video track
    VideoClip(ClipInfo),

    /// Cut on an audio track
    AudioClip(ClipInfo),

    /// Cut to black (`BL` reel)
    Black(ClipInfo),

    /// Cut to generated material (`AX` or `GEN*` reel)
    Generator(ClipInfo),

    /// Dissolve or wipe (`D` type code)
    Transition(TransitionInfo),

    /// Any other type code; kept inert
    Other {
        /// Type code as written
        type_code: String,
    },
}

impl EventKind {
    /// Short human-readable name of the kind
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Clip(_) => "clip",
            Self::VideoClip(_) => "video clip",
            Self::AudioClip(_) => "audio clip",
            Self::Black(_) => "black",
            Self::Generator(_) => "generator",
            Self::Transition(_) => "transition",
            Self::Other { .. } => "unclassified",
        }
    }

    /// Type code column to write back for this kind
    #[must_use]
    pub fn type_code(&self) -> &str {
        match self {
            Self::Transition(_) => "D",
            Self::Other { type_code } => type_code,
            _ => "C",
        }
    }
}

/// A single EDL record
///
/// # Examples
///
/// ```rust
/// use edl_core::{Event, EventKind, Timecode};
///
/// let tc = Timecode::parse("01:00:00:00", 25)?;
/// let event = Event::new("001", "BL", "V", [tc; 4], EventKind::Black(Default::default()));
/// assert!(event.is_generator());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    /// Event number as written (may be padded or lettered)
    pub num: String,

    /// Source reel id or reserved `AX`/`BL`/`GEN` name
    pub reel: String,

    /// Track designator (`V`, `A`, `A2`, ...)
    pub track: String,

    pub source_start: Timecode,
    pub source_end: Timecode,
    pub record_start: Timecode,
    pub record_end: Timecode,

    /// Annotation lines attached to this record, in input order
    pub comments: Vec<String>,

    /// Verbatim event line
    pub original_line: String,

    /// 1-based input line of the event line, 0 when not parsed from text
    pub line_number: usize,

    /// Kind-specific payload
    pub kind: EventKind,
}

impl Event {
    /// Build an event from its positional fields
    ///
    /// `timecodes` are, in order: source start, source end, record start,
    /// record end.
    #[must_use]
    pub fn new(
        num: impl Into<String>,
        reel: impl Into<String>,
        track: impl Into<String>,
        timecodes: [Timecode; 4],
        kind: EventKind,
    ) -> Self {
        let [source_start, source_end, record_start, record_end] = timecodes;
        Self {
            num: num.into(),
            reel: reel.into(),
            track: track.into(),
            source_start,
            source_end,
            record_start,
            record_end,
            comments: Vec::new(),
            original_line: String::new(),
            line_number: 0,
            kind,
        }
    }

    /// Whether this is any kind of clip (everything but transitions and
    /// unclassified records)
    #[must_use]
    pub const fn is_clip(&self) -> bool {
        self.clip_info().is_some() && !self.is_transition()
    }

    #[must_use]
    pub const fn is_transition(&self) -> bool {
        matches!(self.kind, EventKind::Transition(_))
    }

    /// Whether the reel marks synthetic (non-footage) material
    #[must_use]
    pub fn is_generator(&self) -> bool {
        is_generator_reel(&self.reel)
    }

    /// Clip data of clips and of a transition's outgoing clip
    #[must_use]
    pub const fn clip_info(&self) -> Option<&ClipInfo> {
        match &self.kind {
            EventKind::Clip(info)
            | EventKind::VideoClip(info)
            | EventKind::AudioClip(info)
            | EventKind::Black(info)
            | EventKind::Generator(info) => Some(info),
            EventKind::Transition(transition) => Some(&transition.clip),
            EventKind::Other { .. } => None,
        }
    }

    /// Mutable access to the clip data
    pub fn clip_info_mut(&mut self) -> Option<&mut ClipInfo> {
        match &mut self.kind {
            EventKind::Clip(info)
            | EventKind::VideoClip(info)
            | EventKind::AudioClip(info)
            | EventKind::Black(info)
            | EventKind::Generator(info) => Some(info),
            EventKind::Transition(transition) => Some(&mut transition.clip),
            EventKind::Other { .. } => None,
        }
    }

    #[must_use]
    pub fn clip_name(&self) -> Option<&str> {
        self.clip_info()?.clip_name.as_deref()
    }

    #[must_use]
    pub fn timewarp_speed(&self) -> Option<f64> {
        self.clip_info()?.timewarp_speed
    }

    /// Transition data, if this is a transition
    #[must_use]
    pub const fn transition(&self) -> Option<&TransitionInfo> {
        match &self.kind {
            EventKind::Transition(transition) => Some(transition),
            _ => None,
        }
    }

    #[must_use]
    pub fn effect(&self) -> Option<&str> {
        self.transition()?.effect.as_deref()
    }

    /// Transition length in frames
    #[must_use]
    pub fn duration(&self) -> Option<u32> {
        self.transition().map(|transition| transition.duration)
    }

    /// Copy of this event as a plain clip
    ///
    /// Shared fields are copied as-is; clip data is kept, and a transition
    /// contributes its outgoing clip's data.
    #[must_use]
    pub fn to_clip(&self) -> Self {
        let info = self.clip_info().cloned().unwrap_or_default();
        Self {
            kind: EventKind::Clip(info),
            ..self.clone()
        }
    }

    /// Render a full event line in the EDL grammar
    ///
    /// Unlike [`Display`](fmt::Display) this includes the type code and the
    /// duration column, so the result parses back to the same fields.
    #[must_use]
    pub fn to_edl_line(&self) -> String {
        let duration = self
            .duration()
            .map_or_else(String::new, |frames| format!("{frames:03}"));
        format!(
            "{:<4} {:<8} {:<5} {:<4} {:>3} {} {} {} {}",
            self.num,
            self.reel,
            self.track,
            self.kind.type_code(),
            duration,
            self.source_start,
            self.source_end,
            self.record_start,
            self.record_end
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  {}  {}  {}  {}  {}  {}",
            self.num,
            self.reel,
            self.track,
            self.source_start,
            self.source_end,
            self.record_start,
            self.record_end
        )
    }
}
