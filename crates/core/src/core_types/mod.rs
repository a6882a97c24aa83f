//! Vector value types and the structural trait they accept as arguments

pub mod components;
pub mod vector2;
pub mod vector3;

pub use components::VectorLike;
pub use vector2::Vector2;
pub use vector3::Vector3;
