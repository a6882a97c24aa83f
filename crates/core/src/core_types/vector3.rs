//! Mutable 3D vector with lazily cached length and unit components.
//!
//! Same shape as [`Vector2`](super::Vector2) with a `z` axis. `cross` here is
//! the standard cross product and mutates the receiver.
//!
//! Operations take any [`VectorLike`]; when the argument has no `z` a
//! per-operation default stands in for it:
//!
//! | operation | missing `z` |
//! |---|---|
//! | `copy`, `equals`, `add`, `subtract`, `dot` | `0` |
//! | `multiply`, `divide` | `1` |
//! | `cross`, `lerp`, `distance` | `self.z` |
//!
//! Axis convention: z is up, y is forward.

use super::components::VectorLike;
use super::vector2::Vector2;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;

const SQRT_3: f64 = 1.732_050_807_568_877_2;
const FRAC_1_SQRT_3: f64 = 0.577_350_269_189_625_8;

#[derive(Debug, Clone, Copy, Default)]
struct Derived {
    length: f64,
    ux: f64,
    uy: f64,
    uz: f64,
}

/// Euclidean norm without overflow or underflow in the squared sum.
fn euclidean(x: f64, y: f64, z: f64) -> f64 {
    let scale = x.abs().max(y.abs()).max(z.abs());
    if scale == 0.0 || !scale.is_finite() {
        return x.hypot(y).hypot(z);
    }
    let (x, y, z) = (x / scale, y / scale, z / scale);
    scale * (x * x + y * y + z * z).sqrt()
}

impl Derived {
    fn compute(x: f64, y: f64, z: f64) -> Self {
        let length = euclidean(x, y, z);
        if length == 0.0 {
            return Self::default();
        }
        Self {
            length,
            ux: x / length,
            uy: y / length,
            uz: z / length,
        }
    }
}

/// 3D vector of `f64` coordinates with a dirty-flag cache.
///
/// # Example
/// ```
/// use toolkit_core::Vector3;
///
/// let mut v = Vector3::new(10.0, 10.0, 10.0);
/// v.normalize();
/// assert!((v.magnitude() - 1.0).abs() < 1e-12);
///
/// let mut x = Vector3::RIGHT;
/// x.cross(&Vector3::FORWARD);
/// assert!(x.equals(&Vector3::UP));
/// ```
#[derive(Serialize, Deserialize)]
#[serde(from = "Repr", into = "Repr")]
pub struct Vector3 {
    x: f64,
    y: f64,
    z: f64,
    dirty: Cell<bool>,
    derived: Cell<Derived>,
}

#[derive(Serialize, Deserialize)]
struct Repr {
    x: f64,
    y: f64,
    z: f64,
}

impl From<Repr> for Vector3 {
    fn from(r: Repr) -> Self {
        Vector3::new(r.x, r.y, r.z)
    }
}

impl From<Vector3> for Repr {
    fn from(v: Vector3) -> Self {
        Repr {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

// Each use of a const item is a fresh value, so the cache is never shared.
#[allow(clippy::declare_interior_mutable_const)]
impl Vector3 {
    /// (0, 0, 0)
    pub const ZERO: Vector3 = Vector3::clean(0.0, 0.0, 0.0, 0.0, [0.0, 0.0, 0.0]);
    /// (1, 1, 1)
    pub const ONE: Vector3 = Vector3::clean(1.0, 1.0, 1.0, SQRT_3, [FRAC_1_SQRT_3; 3]);
    /// (0, 0, 1)
    pub const UP: Vector3 = Vector3::clean(0.0, 0.0, 1.0, 1.0, [0.0, 0.0, 1.0]);
    /// (0, 0, -1)
    pub const DOWN: Vector3 = Vector3::clean(0.0, 0.0, -1.0, 1.0, [0.0, 0.0, -1.0]);
    /// (1, 0, 0)
    pub const RIGHT: Vector3 = Vector3::clean(1.0, 0.0, 0.0, 1.0, [1.0, 0.0, 0.0]);
    /// (-1, 0, 0)
    pub const LEFT: Vector3 = Vector3::clean(-1.0, 0.0, 0.0, 1.0, [-1.0, 0.0, 0.0]);
    /// (0, 1, 0)
    pub const FORWARD: Vector3 = Vector3::clean(0.0, 1.0, 0.0, 1.0, [0.0, 1.0, 0.0]);
    /// (0, -1, 0)
    pub const BACKWARD: Vector3 = Vector3::clean(0.0, -1.0, 0.0, 1.0, [0.0, -1.0, 0.0]);
}

impl Vector3 {
    /// Create a vector; the cache starts dirty.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            dirty: Cell::new(true),
            derived: Cell::new(Derived {
                length: 0.0,
                ux: 0.0,
                uy: 0.0,
                uz: 0.0,
            }),
        }
    }

    /// Vector with a cache already filled in; used by the named constants.
    const fn clean(x: f64, y: f64, z: f64, length: f64, unit: [f64; 3]) -> Self {
        Self {
            x,
            y,
            z,
            dirty: Cell::new(false),
            derived: Cell::new(Derived {
                length,
                ux: unit[0],
                uy: unit[1],
                uz: unit[2],
            }),
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

    /// Z coordinate
    #[inline]
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Overwrite all three coordinates.
    #[inline]
    pub fn set(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self.dirty.set(true);
        self
    }

    /// Overwrite the X coordinate.
    #[inline]
    pub fn set_x(&mut self, x: f64) -> &mut Self {
        self.set(x, self.y, self.z)
    }

    /// Overwrite the Y coordinate.
    #[inline]
    pub fn set_y(&mut self, y: f64) -> &mut Self {
        self.set(self.x, y, self.z)
    }

    /// Overwrite the Z coordinate.
    #[inline]
    pub fn set_z(&mut self, z: f64) -> &mut Self {
        self.set(self.x, self.y, z)
    }

    /// Whether the next derived read will recompute.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    fn derived(&self) -> Derived {
        if self.dirty.get() {
            self.derived.set(Derived::compute(self.x, self.y, self.z));
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

    /// Squared length, computed directly without touching the cache.
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// X component of the unit vector (cached); 0 for the zero vector
    #[inline]
    pub fn ux(&self) -> f64 {
        self.derived().ux
    }

    /// Y component of the unit vector (cached); 0 for the zero vector
    #[inline]
    pub fn uy(&self) -> f64 {
        self.derived().uy
    }

    /// Z component of the unit vector (cached); 0 for the zero vector
    #[inline]
    pub fn uz(&self) -> f64 {
        self.derived().uz
    }

    /// Take the coordinates of `other`; a planar `other` sets `z` to 0.
    pub fn copy(&mut self, other: &impl VectorLike) -> &mut Self {
        self.set(other.x(), other.y(), other.z().unwrap_or(0.0))
    }

    /// Exact coordinate equality; a planar `other` matches only when `z == 0`.
    pub fn equals(&self, other: &impl VectorLike) -> bool {
        self.x == other.x() && self.y == other.y() && self.z == other.z().unwrap_or(0.0)
    }

    /// Replace the coordinates with the unit components.
    ///
    /// The zero vector is left at the origin.
    pub fn normalize(&mut self) -> &mut Self {
        let d = self.derived();
        self.set(d.ux, d.uy, d.uz)
    }

    /// Component-wise sum; a planar `other` adds 0 to `z`.
    pub fn add(&mut self, other: &impl VectorLike) -> &mut Self {
        let z = other.z().unwrap_or(0.0);
        self.set(self.x + other.x(), self.y + other.y(), self.z + z)
    }

    /// Component-wise difference; a planar `other` subtracts 0 from `z`.
    pub fn subtract(&mut self, other: &impl VectorLike) -> &mut Self {
        let z = other.z().unwrap_or(0.0);
        self.set(self.x - other.x(), self.y - other.y(), self.z - z)
    }

    /// Component-wise product.
    pub fn multiply(&mut self, other: &impl VectorLike) -> &mut Self {
        let z = other.z().unwrap_or(1.0);
        self.set(self.x * other.x(), self.y * other.y(), self.z * z)
    }

    /// Component-wise quotient.
    pub fn divide(&mut self, other: &impl VectorLike) -> &mut Self {
        let z = other.z().unwrap_or(1.0);
        self.set(self.x / other.x(), self.y / other.y(), self.z / z)
    }

    /// Dot product; a planar `other` contributes no `z` term.
    pub fn dot(&self, other: &impl VectorLike) -> f64 {
        self.x * other.x() + self.y * other.y() + self.z * other.z().unwrap_or(0.0)
    }

    /// Replace `self` with `self × other`.
    pub fn cross(&mut self, other: &impl VectorLike) -> &mut Self {
        let (x, y, z) = (other.x(), other.y(), other.z().unwrap_or(self.z));
        self.set(
            self.y * z - self.z * y,
            self.z * x - self.x * z,
            self.x * y - self.y * x,
        )
    }

    /// Move toward `other` by fraction `t`.
    pub fn lerp(&mut self, other: &impl VectorLike, t: f64) -> &mut Self {
        let z = other.z().unwrap_or(self.z);
        self.set(
            self.x + t * (other.x() - self.x),
            self.y + t * (other.y() - self.y),
            self.z + t * (z - self.z),
        )
    }

    /// Uniform scale.
    pub fn scale(&mut self, s: f64) -> &mut Self {
        self.scale_xyz(s, s, s)
    }

    /// Per-axis scale.
    pub fn scale_xyz(&mut self, sx: f64, sy: f64, sz: f64) -> &mut Self {
        self.set(self.x * sx, self.y * sy, self.z * sz)
    }

    /// Flip every coordinate.
    pub fn negate(&mut self) -> &mut Self {
        self.scale(-1.0)
    }

    /// Euclidean distance to `other`; never cached.
    pub fn distance(&self, other: &impl VectorLike) -> f64 {
        let dx = other.x() - self.x;
        let dy = other.y() - self.y;
        let dz = other.z().unwrap_or(self.z) - self.z;
        euclidean(dx, dy, dz)
    }

    /// Replace `self` with its projection onto `src`.
    ///
    /// A zero `src` yields NaN coordinates (0 / 0).
    pub fn project(&mut self, src: &impl VectorLike) -> &mut Self {
        let sz = src.z().unwrap_or(0.0);
        let denom = src.x() * src.x() + src.y() * src.y() + sz * sz;
        let scalar = self.dot(src) / denom;
        self.copy(src).scale(scalar)
    }
}

impl VectorLike for Vector3 {
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

impl Default for Vector3 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Clone for Vector3 {
    fn clone(&self) -> Self {
        Self::new(self.x, self.y, self.z)
    }
}

impl PartialEq for Vector3 {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl fmt::Debug for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector3")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<&Vector2> for Vector3 {
    fn from(v: &Vector2) -> Self {
        Vector3::new(v.x(), v.y(), 0.0)
    }
}

impl From<nalgebra::Vector3<f64>> for Vector3 {
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<&Vector3> for nalgebra::Vector3<f64> {
    fn from(v: &Vector3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Vector3::new(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalize() {
        let mut v = Vector3::new(10.0, 10.0, 10.0);
        v.normalize();
        assert_relative_eq!(v.magnitude(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(v.ux(), v.uz());
    }

    #[test]
    fn test_zero_vector() {
        let mut v = Vector3::default();
        assert_eq!(v.length(), 0.0);
        assert_eq!((v.ux(), v.uy(), v.uz()), (0.0, 0.0, 0.0));
        v.normalize();
        assert!(v.equals(&[0.0, 0.0, 0.0]));
    }

    #[test]
    fn test_cache_refreshes_after_mutation() {
        let mut v = Vector3::new(0.0, 3.0, 4.0);
        assert_eq!(v.length(), 5.0);
        assert_relative_eq!(v.uz(), 0.8);

        v.set_z(0.0);
        assert_eq!(v.length(), 3.0);
        assert_eq!(v.uy(), 1.0);
        assert_eq!(v.uz(), 0.0);
    }

    #[test]
    fn test_clone_keeps_z() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let mut c = v.clone();
        assert_eq!(c.z(), 3.0);
        assert!(c.equals(&v));

        c.negate();
        assert!(v.equals(&(1.0, 2.0, 3.0)));
    }

    #[test]
    fn test_planar_argument_defaults() {
        let mut v = Vector3::new(2.0, 4.0, 6.0);
        v.add(&Vector2::new(1.0, 1.0));
        assert!(v.equals(&(3.0, 5.0, 6.0)));

        v.multiply(&(2.0, 2.0));
        assert!(v.equals(&(6.0, 10.0, 6.0)));

        v.divide(&[3.0, 5.0]);
        assert!(v.equals(&(2.0, 2.0, 6.0)));

        assert_eq!(v.dot(&(1.0, 1.0)), 4.0);
        assert_eq!(v.distance(&(2.0, 5.0)), 3.0);

        v.lerp(&(4.0, 4.0), 0.5);
        assert!(v.equals(&(3.0, 3.0, 6.0)));

        assert!(!v.equals(&(3.0, 3.0)));
        v.copy(&(3.0, 3.0));
        assert!(v.equals(&(3.0, 3.0)));
    }

    #[test]
    fn test_cross_product() {
        let mut x = Vector3::RIGHT;
        x.cross(&Vector3::FORWARD);
        assert!(x.equals(&Vector3::UP));

        let mut y = Vector3::FORWARD;
        y.cross(&Vector3::RIGHT);
        assert!(y.equals(&Vector3::DOWN));

        let mut a = Vector3::new(1.0, 2.0, 3.0);
        a.cross(&(4.0, 5.0, 6.0));
        assert!(a.equals(&(-3.0, 6.0, -3.0)));
    }

    #[test]
    fn test_cross_planar_uses_own_z() {
        let mut a = Vector3::new(1.0, 0.0, 1.0);
        a.cross(&(0.0, 1.0));
        // other treated as (0, 1, 1)
        assert!(a.equals(&(-1.0, -1.0, 1.0)));
    }

    #[test]
    fn test_project() {
        let mut v = Vector3::new(3.0, 4.0, 5.0);
        v.project(&Vector3::UP);
        assert!(v.equals(&(0.0, 0.0, 5.0)));

        let mut w = Vector3::new(1.0, 1.0, 1.0);
        w.project(&Vector3::ZERO);
        assert!(w.x().is_nan());
        assert!(w.z().is_nan());

        let mut p = Vector3::new(1.0, 1.0, 1.0);
        p.project(&(0.0, 0.0));
        assert!(p.y().is_nan());
    }

    #[test]
    fn test_length_survives_extreme_magnitudes() {
        let v = Vector3::new(3e200, 4e200, 0.0);
        assert_relative_eq!(v.length(), 5e200);
        assert_relative_eq!(v.uy(), 0.8);

        let w = Vector3::new(0.0, 1e-170, 0.0);
        assert_eq!(w.length(), 1e-170);
        assert_eq!(w.uy(), 1.0);

        let far = Vector3::new(-1e300, 0.0, 0.0);
        assert_relative_eq!(far.distance(&(1e300, 0.0, 0.0)), 2e300);
    }

    #[test]
    fn test_scale_xyz() {
        let mut v = Vector3::ONE;
        v.scale_xyz(1.0, 2.0, 3.0);
        assert!(v.equals(&(1.0, 2.0, 3.0)));
    }

    #[test]
    fn test_constants() {
        let mut up = Vector3::UP;
        up.set(9.0, 9.0, 9.0);
        assert!(Vector3::UP.equals(&(0.0, 0.0, 1.0)));

        for c in [
            Vector3::ZERO,
            Vector3::ONE,
            Vector3::UP,
            Vector3::DOWN,
            Vector3::LEFT,
            Vector3::RIGHT,
            Vector3::FORWARD,
            Vector3::BACKWARD,
        ] {
            assert!(!c.is_dirty());
            let fresh = c.clone();
            assert_relative_eq!(c.length(), fresh.length());
            assert_relative_eq!(c.ux(), fresh.ux());
            assert_relative_eq!(c.uy(), fresh.uy());
            assert_relative_eq!(c.uz(), fresh.uz());
        }
    }

    #[test]
    fn test_from_vector2() {
        let v = Vector3::from(&Vector2::new(1.0, 2.0));
        assert!(v.equals(&(1.0, 2.0, 0.0)));
    }

    #[test]
    fn test_nalgebra_round_trip() {
        let v = Vector3::from(nalgebra::Vector3::new(1.0, -2.0, 3.5));
        let n: nalgebra::Vector3<f64> = (&v).into();
        assert_eq!(n, nalgebra::Vector3::new(1.0, -2.0, 3.5));
    }
}
