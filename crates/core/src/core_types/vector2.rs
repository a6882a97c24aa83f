//! Mutable 2D vector with lazily cached length and unit components.
//!
//! All arithmetic mutates the receiver and returns `&mut Self`, so calls
//! chain fluently. The Euclidean length and unit vector are computed on first
//! read after a mutation and reused until the next one.
//!
//! # Usage
//! ```
//! use toolkit_core::Vector2;
//!
//! let mut v = Vector2::new(3.0, 0.0);
//! v.add(&(0.0, 4.0)).scale(2.0);
//! assert_eq!(v.length(), 10.0);
//!
//! v.normalize();
//! assert!((v.magnitude() - 1.0).abs() < 1e-12);
//! ```

use super::components::VectorLike;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;

/// Derived quantities, valid only while the owning vector is clean
#[derive(Debug, Clone, Copy, Default)]
struct Derived {
    length: f64,
    ux: f64,
    uy: f64,
}

impl Derived {
    fn compute(x: f64, y: f64) -> Self {
        let length = x.hypot(y);
        if length == 0.0 {
            return Self::default();
        }
        Self {
            length,
            ux: x / length,
            uy: y / length,
        }
    }
}

/// 2D vector of `f64` coordinates with a dirty-flag cache.
///
/// Coordinates are private so every write goes through a method that raises
/// the dirty flag. Reads of [`length`](Self::length), [`ux`](Self::ux) and
/// [`uy`](Self::uy) recompute the cache when dirty.
///
/// The cache lives in a [`Cell`], so a `Vector2` is `Send` but not `Sync`.
#[derive(Serialize, Deserialize)]
#[serde(from = "Repr", into = "Repr")]
pub struct Vector2 {
    x: f64,
    y: f64,
    dirty: Cell<bool>,
    derived: Cell<Derived>,
}

#[derive(Serialize, Deserialize)]
struct Repr {
    x: f64,
    y: f64,
}

impl From<Repr> for Vector2 {
    fn from(r: Repr) -> Self {
        Vector2::new(r.x, r.y)
    }
}

impl From<Vector2> for Repr {
    fn from(v: Vector2) -> Self {
        Repr { x: v.x, y: v.y }
    }
}

// Each use of a const item is a fresh value, so the cache is never shared.
#[allow(clippy::declare_interior_mutable_const)]
impl Vector2 {
    /// (0, 0)
    pub const ZERO: Vector2 = Vector2::clean(0.0, 0.0, 0.0, 0.0, 0.0);
    /// (1, 1)
    pub const ONE: Vector2 = Vector2::clean(
        1.0,
        1.0,
        std::f64::consts::SQRT_2,
        std::f64::consts::FRAC_1_SQRT_2,
        std::f64::consts::FRAC_1_SQRT_2,
    );
    /// (0, 1)
    pub const UP: Vector2 = Vector2::clean(0.0, 1.0, 1.0, 0.0, 1.0);
    /// (0, -1)
    pub const DOWN: Vector2 = Vector2::clean(0.0, -1.0, 1.0, 0.0, -1.0);
    /// (1, 0)
    pub const RIGHT: Vector2 = Vector2::clean(1.0, 0.0, 1.0, 1.0, 0.0);
    /// (-1, 0)
    pub const LEFT: Vector2 = Vector2::clean(-1.0, 0.0, 1.0, -1.0, 0.0);
}

impl Vector2 {
    /// Create a vector; the cache starts dirty.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            dirty: Cell::new(true),
            derived: Cell::new(Derived {
                length: 0.0,
                ux: 0.0,
                uy: 0.0,
            }),
        }
    }

    /// Vector with a cache already filled in; used by the named constants.
    const fn clean(x: f64, y: f64, length: f64, ux: f64, uy: f64) -> Self {
        Self {
            x,
            y,
            dirty: Cell::new(false),
            derived: Cell::new(Derived { length, ux, uy }),
        }
    }

    /// X coordinate
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y coordinate
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Overwrite both coordinates.
    #[inline]
    pub fn set(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self.dirty.set(true);
        self
    }

    /// Overwrite the X coordinate.
    #[inline]
    pub fn set_x(&mut self, x: f64) -> &mut Self {
        self.set(x, self.y)
    }

    /// Overwrite the Y coordinate.
    #[inline]
    pub fn set_y(&mut self, y: f64) -> &mut Self {
        self.set(self.x, y)
    }

    /// Whether the next derived read will recompute.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    fn derived(&self) -> Derived {
        if self.dirty.get() {
            self.derived.set(Derived::compute(self.x, self.y));
            self.dirty.set(false);
        }
        self.derived.get()
    }

    /// Euclidean length (cached).
    #[inline]
    pub fn length(&self) -> f64 {
        self.derived().length
    }

    /// Alias of [`length`](Self::length).
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.length()
    }

    /// Squared length; never cached.
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Unit-vector x component; zero for the zero vector.
    #[inline]
    pub fn ux(&self) -> f64 {
        self.derived().ux
    }

    /// Unit-vector y component; zero for the zero vector.
    #[inline]
    pub fn uy(&self) -> f64 {
        self.derived().uy
    }

    /// Take the coordinates of `other`.
    pub fn copy(&mut self, other: &impl VectorLike) -> &mut Self {
        self.set(other.x(), other.y())
    }

    /// Exact coordinate equality, no epsilon.
    pub fn equals(&self, other: &impl VectorLike) -> bool {
        self.x == other.x() && self.y == other.y()
    }

    /// Replace the coordinates with the unit components.
    ///
    /// The zero vector is left at the origin.
    pub fn normalize(&mut self) -> &mut Self {
        let d = self.derived();
        self.set(d.ux, d.uy)
    }

    /// Component-wise sum.
    pub fn add(&mut self, other: &impl VectorLike) -> &mut Self {
        self.set(self.x + other.x(), self.y + other.y())
    }

    /// Component-wise difference.
    pub fn subtract(&mut self, other: &impl VectorLike) -> &mut Self {
        self.set(self.x - other.x(), self.y - other.y())
    }

    /// Component-wise product.
    pub fn multiply(&mut self, other: &impl VectorLike) -> &mut Self {
        self.set(self.x * other.x(), self.y * other.y())
    }

    /// Component-wise quotient.
    pub fn divide(&mut self, other: &impl VectorLike) -> &mut Self {
        self.set(self.x / other.x(), self.y / other.y())
    }

    /// Dot product.
    pub fn dot(&self, other: &impl VectorLike) -> f64 {
        self.x * other.x() + self.y * other.y()
    }

    /// Perp-dot product `x * o.y - y * o.x`; does not mutate.
    pub fn cross(&self, other: &impl VectorLike) -> f64 {
        self.x * other.y() - self.y * other.x()
    }

    /// Move toward `other` by fraction `t` (0 leaves `self` unchanged).
    pub fn lerp(&mut self, other: &impl VectorLike, t: f64) -> &mut Self {
        self.set(
            self.x + t * (other.x() - self.x),
            self.y + t * (other.y() - self.y),
        )
    }

    /// Uniform scale.
    pub fn scale(&mut self, s: f64) -> &mut Self {
        self.scale_xy(s, s)
    }

    /// Per-axis scale.
    pub fn scale_xy(&mut self, sx: f64, sy: f64) -> &mut Self {
        self.set(self.x * sx, self.y * sy)
    }

    /// Flip every coordinate.
    pub fn negate(&mut self) -> &mut Self {
        self.scale(-1.0)
    }

    /// Euclidean distance to `other`; never cached.
    pub fn distance(&self, other: &impl VectorLike) -> f64 {
        let dx = other.x() - self.x;
        let dy = other.y() - self.y;
        dx.hypot(dy)
    }

    /// New vector perpendicular to this one, `(-uy, ux)`.
    pub fn normal(&self) -> Vector2 {
        let d = self.derived();
        Vector2::new(-d.uy, d.ux)
    }

    /// `atan2(-y, x)`: angle measured with y pointing down (screen space).
    pub fn angle(&self) -> f64 {
        (-self.y).atan2(self.x)
    }

    /// Rotate in place by `radians`.
    pub fn rotate(&mut self, radians: f64) -> &mut Self {
        let (sin, cos) = radians.sin_cos();
        self.set(cos * self.x - sin * self.y, sin * self.x + cos * self.y)
    }

    /// Replace `self` with its projection onto `src`.
    ///
    /// A zero `src` yields NaN coordinates (0 / 0).
    pub fn project(&mut self, src: &impl VectorLike) -> &mut Self {
        let denom = src.x() * src.x() + src.y() * src.y();
        let scalar = self.dot(src) / denom;
        self.copy(src).scale(scalar)
    }
}

impl VectorLike for Vector2 {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}

impl Default for Vector2 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Clone for Vector2 {
    /// Fresh instance with its own (dirty) cache.
    fn clone(&self) -> Self {
        Self::new(self.x, self.y)
    }
}

impl PartialEq for Vector2 {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl fmt::Debug for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector2")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<nalgebra::Vector2<f64>> for Vector2 {
    fn from(v: nalgebra::Vector2<f64>) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl From<&Vector2> for nalgebra::Vector2<f64> {
    fn from(v: &Vector2) -> Self {
        nalgebra::Vector2::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2::new(x, y)
    }
}
