//! Read-only record passed to listeners
//!
//! An [`Event`] borrows the dispatcher, the type name and the payload for the
//! duration of one dispatch.

use super::dispatcher::EventDispatcher;
use std::fmt;

/// Record handed to every listener during a dispatch.
///
/// Borrowed for the duration of the dispatch only; all fields are read-only.
pub struct Event<'a, T> {
    name: &'a str,
    target: &'a EventDispatcher<T>,
    data: &'a T,
}

impl<'a, T> Event<'a, T> {
    pub(crate) fn new(name: &'a str, target: &'a EventDispatcher<T>, data: &'a T) -> Self {
        Self { name, target, data }
    }

    /// Name the event was dispatched under
    #[inline]
    pub fn event_type(&self) -> &'a str {
        self.name
    }

    /// Dispatcher running this dispatch.
    ///
    /// Listeners may register or remove listeners through it; changes take
    /// effect from the next dispatch.
    #[inline]
    pub fn target(&self) -> &'a EventDispatcher<T> {
        self.target
    }

    /// Payload passed to `dispatch_event`
    #[inline]
    pub fn data(&self) -> &'a T {
        self.data
    }
}

impl<T: fmt::Debug> fmt::Debug for Event<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("event_type", &self.name)
            .field("data", self.data)
            .finish_non_exhaustive()
    }
}
