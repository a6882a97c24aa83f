//! Publish/subscribe dispatcher keyed by event-type name
//!
//! Listeners are reference-counted closures. Identity is the allocation:
//! registering the same [`Listener`] twice makes it fire twice, and removing
//! it drops every occurrence.
//!
//! # Dispatch semantics
//! - Listeners run synchronously in registration order.
//! - The list for a type is snapshotted when dispatch starts. A listener that
//!   adds or removes listeners through [`Event::target`] affects the next
//!   dispatch, never the one in progress.
//! - Dispatching a type nobody listens to is a no-op.
//!
//! # Usage
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use toolkit_core::events::{listener, Event, EventDispatcher};
//!
//! let hits = Rc::new(Cell::new(0));
//! let counter = {
//!     let hits = Rc::clone(&hits);
//!     listener(move |event: &Event<'_, i32>| hits.set(hits.get() + *event.data()))
//! };
//!
//! let events = EventDispatcher::new();
//! events.on("spawn despawn", &counter);
//! events.trigger("spawn despawn", &5);
//! assert_eq!(hits.get(), 10);
//!
//! events.off("spawn despawn", &counter);
//! events.trigger("spawn", &5);
//! assert_eq!(hits.get(), 10);
//! ```

use super::error::EventError;
use super::event::Event;
use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, trace};

/// Callback invoked with each dispatched [`Event`]
pub type Listener<T> = Rc<dyn Fn(&Event<'_, T>)>;

/// Wrap a closure as a [`Listener`].
///
/// Keep the returned handle to remove the listener later.
pub fn listener<T, F>(f: F) -> Listener<T>
where
    F: Fn(&Event<'_, T>) + 'static,
{
    Rc::new(f)
}

/// Splits a space-separated list of type names, skipping empty segments
fn each_type(types: &str) -> impl Iterator<Item = &str> {
    types.split(' ').filter(|t| !t.is_empty())
}

/// Maps event-type names to ordered listener lists.
///
/// All methods take `&self` so listeners can reach the dispatcher through
/// [`Event::target`] while a dispatch is running. Single-threaded: the type is
/// neither `Send` nor `Sync`.
pub struct EventDispatcher<T> {
    listeners: RefCell<FxHashMap<String, Vec<Listener<T>>>>,
}

impl<T> EventDispatcher<T> {
    /// Dispatcher with no listeners.
    pub fn new() -> Self {
        Self {
            listeners: RefCell::new(FxHashMap::default()),
        }
    }

    /// Append `callback` to the listeners for `event_type`.
    ///
    /// # Errors
    /// [`EventError::EmptyEventType`] if `event_type` is empty.
    pub fn try_add_event_listener(
        &self,
        event_type: &str,
        callback: &Listener<T>,
    ) -> Result<(), EventError> {
        if event_type.is_empty() {
            return Err(EventError::EmptyEventType);
        }
        let mut listeners = self.listeners.borrow_mut();
        let list = listeners.entry(event_type.to_owned()).or_default();
        list.push(Rc::clone(callback));
        trace!(event_type, listeners = list.len(), "Added event listener");
        Ok(())
    }

    /// Append `callback` to the listeners for `event_type`.
    ///
    /// An empty `event_type` is ignored.
    pub fn add_event_listener(&self, event_type: &str, callback: &Listener<T>) {
        if let Err(e) = self.try_add_event_listener(event_type, callback) {
            debug!("Ignoring event listener: {e}");
        }
    }

    /// Remove every registration of `callback` under `event_type`.
    pub fn remove_event_listener(&self, event_type: &str, callback: &Listener<T>) {
        let mut listeners = self.listeners.borrow_mut();
        let Some(list) = listeners.get_mut(event_type) else {
            return;
        };
        let before = list.len();
        list.retain(|l| !Rc::ptr_eq(l, callback));
        trace!(
            event_type,
            removed = before - list.len(),
            "Removed event listener"
        );
    }

    /// Invoke every listener registered for `event_type` with `data`.
    pub fn dispatch_event(&self, event_type: &str, data: &T) {
        let snapshot = self.listeners.borrow().get(event_type).cloned();
        let Some(snapshot) = snapshot else {
            trace!(event_type, "No listeners for event");
            return;
        };

        trace!(event_type, listeners = snapshot.len(), "Dispatching event");
        let event = Event::new(event_type, self, data);
        for callback in &snapshot {
            callback(&event);
        }
    }

    /// [`add_event_listener`](Self::add_event_listener) for each name in a
    /// space-separated list.
    pub fn on(&self, types: &str, callback: &Listener<T>) {
        for event_type in each_type(types) {
            self.add_event_listener(event_type, callback);
        }
    }

    /// [`remove_event_listener`](Self::remove_event_listener) for each name in
    /// a space-separated list.
    pub fn off(&self, types: &str, callback: &Listener<T>) {
        for event_type in each_type(types) {
            self.remove_event_listener(event_type, callback);
        }
    }

    /// [`dispatch_event`](Self::dispatch_event) for each name in a
    /// space-separated list, in order.
    pub fn trigger(&self, types: &str, data: &T) {
        for event_type in each_type(types) {
            self.dispatch_event(event_type, data);
        }
    }

    /// Number of registrations (duplicates included) under `event_type`
    pub fn listener_count(&self, event_type: &str) -> usize {
        self.listeners.borrow().get(event_type).map_or(0, Vec::len)
    }

    /// Whether anything is registered under `event_type`
    pub fn has_listeners(&self, event_type: &str) -> bool {
        self.listener_count(event_type) > 0
    }
}

impl<T> Default for EventDispatcher<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for EventDispatcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listeners = self.listeners.borrow();
        let mut counts: Vec<(&str, usize)> = listeners
            .iter()
            .map(|(k, v)| (k.as_str(), v.len()))
            .collect();
        counts.sort_unstable();
        f.debug_struct("EventDispatcher")
            .field("listeners", &counts)
            .finish()
    }
}
