//! Synchronous publish/subscribe event dispatch

pub mod dispatcher;
pub mod error;
pub mod event;

pub use dispatcher::{listener, EventDispatcher, Listener};
pub use error::EventError;
pub use event::Event;
