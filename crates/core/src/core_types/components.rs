//! Structural access to vector coordinates.
//!
//! Vector operations accept anything that can report an `x` and `y`, and
//! optionally a `z`. This lets [`Vector2`](super::Vector2) and
//! [`Vector3`](super::Vector3) take each other, plain tuples and arrays, or
//! nalgebra vectors as arguments without conversions at the call site.
//!
//! # Usage
//! ```
//! use toolkit_core::{Vector2, Vector3};
//!
//! let mut v = Vector3::new(1.0, 2.0, 3.0);
//! v.add(&(1.0, 1.0));                 // planar input, z treated as 0
//! v.add(&Vector2::new(1.0, 1.0));     // same thing
//! assert!(v.equals(&[3.0, 4.0, 3.0]));
//! ```

/// Anything exposing numeric `x`, `y` and an optional `z` coordinate.
///
/// Planar inputs return `None` from [`VectorLike::z`]; 3D operations then
/// substitute an operation-specific default (see [`Vector3`](super::Vector3)).
pub trait VectorLike {
    /// X coordinate
    fn x(&self) -> f64;

    /// Y coordinate
    fn y(&self) -> f64;

    /// Z coordinate, if this value has one
    fn z(&self) -> Option<f64> {
        None
    }
}

impl VectorLike for (f64, f64) {
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }

    #[inline]
    fn y(&self) -> f64 {
        self.1
    }
}

impl VectorLike for (f64, f64, f64) {
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }

    #[inline]
    fn y(&self) -> f64 {
        self.1
    }

    #[inline]
    fn z(&self) -> Option<f64> {
        Some(self.2)
    }
}

impl VectorLike for [f64; 2] {
    #[inline]
    fn x(&self) -> f64 {
        self[0]
    }

    #[inline]
    fn y(&self) -> f64 {
        self[1]
    }
}

impl VectorLike for [f64; 3] {
    #[inline]
    fn x(&self) -> f64 {
        self[0]
    }

    #[inline]
    fn y(&self) -> f64 {
        self[1]
    }

    #[inline]
    fn z(&self) -> Option<f64> {
        Some(self[2])
    }
}

impl VectorLike for nalgebra::Vector2<f64> {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}

impl VectorLike for nalgebra::Vector3<f64> {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    fn z(&self) -> Option<f64> {
        Some(self.z)
    }
}

impl<T: VectorLike + ?Sized> VectorLike for &T {
    #[inline]
    fn x(&self) -> f64 {
        (**self).x()
    }

    #[inline]
    fn y(&self) -> f64 {
        (**self).y()
    }

    #[inline]
    fn z(&self) -> Option<f64> {
        (**self).z()
    }
}
