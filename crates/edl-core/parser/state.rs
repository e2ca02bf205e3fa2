//! Accumulation state of a running parse
//!
//! Completed events sit on the stack in input order; the event most recently
//! opened by an event line stays in `current` while continuation lines keep
//! attaching fields to it.

use super::ast::Event;

/// Stack of completed events plus the event under construction
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParserState {
    /// Completed events in input order
    stack: Vec<Event>,
    /// Event still receiving continuation lines
    current: Option<Event>,
}

impl ParserState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            stack: Vec::new(),
            current: None,
        }
    }

    /// Completed events
    #[must_use]
    pub fn stack(&self) -> &[Event] {
        &self.stack
    }

    #[must_use]
    pub const fn current(&self) -> Option<&Event> {
        self.current.as_ref()
    }

    pub fn current_mut(&mut self) -> Option<&mut Event> {
        self.current.as_mut()
    }

    /// Make `event` current, moving the previous current event to the stack
    pub fn open(&mut self, event: Event) {
        if let Some(previous) = self.current.replace(event) {
            self.stack.push(previous);
        }
    }

    /// Move the current event to the stack and leave the slot empty
    pub fn close_current(&mut self) {
        if let Some(previous) = self.current.take() {
            self.stack.push(previous);
        }
    }

    /// Find the most recent event satisfying `predicate`
    ///
    /// Scans the current event first, then the stack from newest to oldest.
    pub fn find_latest_mut<P>(&mut self, mut predicate: P) -> Option<&mut Event>
    where
        P: FnMut(&Event) -> bool,
    {
        self.current
            .iter_mut()
            .chain(self.stack.iter_mut().rev())
            .find(|event| predicate(event))
    }

    /// Number of events held, including the current one
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len() + usize::from(self.current.is_some())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Close the current event and return all events in input order
    #[must_use]
    pub fn finish(mut self) -> Vec<Event> {
        self.close_current();
        self.stack
    }
}
