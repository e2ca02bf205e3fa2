//! Ordered event list
//!
//! A [`List`] owns its events in record order. It is immutable once built:
//! the transforms in [`transforms`] return new lists and leave their input
//! untouched, so a chain of transforms never changes a list returned earlier.

use core::{fmt, ops::Index, slice};

use crate::{
    parser::{ast::Event, ParsedList, Parser},
    utils::Result,
};

pub mod transforms;

/// Ordered sequence of EDL events
///
/// # Examples
///
/// ```rust
/// use edl_core::List;
///
/// let edl = "\
/// 001  008C     V     C        08:04:24:24 08:04:25:19 01:00:25:22 01:00:26:17
/// 002  BL       V     C        00:00:00:00 00:00:01:00 01:00:26:17 01:00:27:17
/// ";
///
/// let list = List::parse(edl, 25)?.into_list();
/// let footage = list.without_generators().renumbered();
/// assert_eq!(footage.len(), 1);
/// assert_eq!(footage[0].num, "001");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct List {
    events: Vec<Event>,
}

impl List {
    #[must_use]
    pub const fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Parse an EDL body with the standard matchers
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Config`](crate::CoreError::Config) when `fps` is
    /// zero.
    pub fn parse(text: &str, fps: u32) -> Result<ParsedList> {
        Parser::new(fps)?.parse(text)
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Event> {
        self.events.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Event> {
        self.events.get(index)
    }

    #[must_use]
    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    /// Render every event as a full EDL event line, one per line
    ///
    /// Annotation lines are not written back.
    #[must_use]
    pub fn to_edl(&self) -> String {
        let mut out = String::new();
        for event in &self.events {
            out.push_str(&event.to_edl_line());
            out.push('\n');
        }
        out
    }
}

impl Index<usize> for List {
    type Output = Event;

    fn index(&self, index: usize) -> &Event {
        &self.events[index]
    }
}

impl IntoIterator for List {
    type Item = Event;
    type IntoIter = std::vec::IntoIter<Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Event;
    type IntoIter = slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

impl FromIterator<Event> for List {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<Event>> for List {
    fn from(events: Vec<Event>) -> Self {
        Self::new(events)
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for event in &self.events {
            writeln!(f, "{event}")?;
        }
        Ok(())
    }
}
