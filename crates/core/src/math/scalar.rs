//! Scalar interpolation and range helpers
//!
//! `map` is `lerp(norm(..))`: normalise into the source range, then
//! interpolate into the destination range. None of these validate input;
//! NaN and degenerate ranges propagate per IEEE-754.
//!
//! # Usage
//! ```
//! use toolkit_core::math::{clamp, map, snap};
//!
//! assert_eq!(map(5.0, 0.0, 10.0, 100.0, 200.0), 150.0);
//! assert_eq!(clamp(15.0, 10.0, 0.0), 10.0);
//! assert_eq!(snap(-7.0, 5.0), -5.0);
//! ```

/// Position of `value` within `[min, max]` as a fraction (0 at `min`, 1 at `max`).
#[inline]
pub fn norm(value: f64, min: f64, max: f64) -> f64 {
    (value - min) / (max - min)
}

/// Linear interpolation: `t = 0` gives `min`, `t = 1` gives `max`.
#[inline]
pub fn lerp(t: f64, min: f64, max: f64) -> f64 {
    (max - min) * t + min
}

/// Remap `value` from `[src_min, src_max]` into `[dst_min, dst_max]`.
///
/// Pass `0.0, 1.0` as the destination for a plain normalisation.
#[inline]
pub fn map(value: f64, src_min: f64, src_max: f64, dst_min: f64, dst_max: f64) -> f64 {
    lerp(norm(value, src_min, src_max), dst_min, dst_max)
}

/// Clamp `value` into the range spanned by `a` and `b`, in either order.
#[inline]
pub fn clamp(value: f64, a: f64, b: f64) -> f64 {
    a.min(b).max(a.max(b).min(value))
}

/// Planar Euclidean distance between `(x0, y0)` and `(x1, y1)`.
#[inline]
pub fn distance(x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
    let dx = x1 - x0;
    let dy = y1 - y0;
    (dx * dx + dy * dy).sqrt()
}

/// Truncate `value` toward zero to a whole multiple of `multiplier`.
///
/// Use `1.0` to drop the fractional part.
#[inline]
pub fn snap(value: f64, multiplier: f64) -> f64 {
    (value / multiplier).trunc() * multiplier
}
