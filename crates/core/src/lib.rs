//! Toolkit Core
//!
//! Small, independent building blocks for game and simulation loops:
//!
//! - [`events`]: synchronous publish/subscribe dispatcher keyed by event-type
//!   name, with space-separated `on`/`off`/`trigger` shorthands
//! - [`core_types`]: mutable [`Vector2`] and [`Vector3`] whose length and unit
//!   components are cached behind a dirty flag
//! - [`math`]: scalar interpolation (`norm`, `lerp`, `map`), `clamp`, `snap`,
//!   and uniform random helpers with optional deterministic seeding
//!
//! The three modules do not depend on each other beyond vector arguments
//! accepting anything that implements [`VectorLike`].
//!
//! Everything here is single-threaded: vectors and the dispatcher use
//! interior mutability and are not `Sync`.

// Vector value types
pub mod core_types;

// Event dispatch
pub mod events;

// Scalar and random helpers
pub mod math;

pub use core_types::{Vector2, Vector3, VectorLike};
pub use events::{listener, Event, EventDispatcher, EventError, Listener};
pub use math::{RandomConfig, RandomSource};
