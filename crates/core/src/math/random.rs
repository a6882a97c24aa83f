//! Uniform random helpers built on a single `[0, 1)` source
//!
//! Every helper exists in two forms: a free function drawing from the
//! thread-local generator (`random`, `random_range`, ...) and a `*_with`
//! variant taking any [`rand::Rng`]. [`RandomSource`] owns a generator and
//! exposes the same helpers as methods, so a simulation can be replayed by
//! seeding it through [`RandomConfig`].
//!
//! # Usage
//! ```
//! use toolkit_core::math::{random_int, RandomConfig, RandomSource};
//!
//! let roll = random_int(1, 6);
//! assert!((1..=6).contains(&roll));
//!
//! let mut a = RandomSource::from_config(&RandomConfig { seed: Some(7) });
//! let mut b = RandomSource::seeded(7);
//! assert_eq!(a.random_range(-1.0, 1.0), b.random_range(-1.0, 1.0));
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Uniform value in `[0, 1)` from `rng`.
#[inline]
pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random::<f64>()
}

/// Uniform value in `[min, max)` from `rng`.
#[inline]
pub fn random_range_with<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    random_with(rng) * (max - min) + min
}

/// Uniform integer in `[min, max]`, both bounds inclusive.
///
/// Reversed bounds are swapped. The offset from the lower bound is floored
/// before it is added, so negative ranges stay inside their bounds.
pub fn random_int_with<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let span = (i128::from(hi) - i128::from(lo) + 1) as f64;
    let offset = (random_with(rng) * span).floor() as i128;
    (i128::from(lo) + offset).min(i128::from(hi)) as i64
}

/// Mean of `iterations` uniform samples in `[min, max)`.
///
/// More iterations concentrate the result around the midpoint, giving a
/// cheap bell-shaped distribution. Returns `0.0` when `iterations` is zero.
pub fn random_dist_with<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64, iterations: u32) -> f64 {
    if iterations == 0 {
        return 0.0;
    }
    let total: f64 = (0..iterations)
        .map(|_| random_range_with(rng, min, max))
        .sum();
    total / f64::from(iterations)
}

/// Uniform value in `[0, 1)` from the thread-local generator.
#[inline]
pub fn random() -> f64 {
    random_with(&mut rand::rng())
}

/// Uniform value in `[min, max)` from the thread-local generator.
#[inline]
pub fn random_range(min: f64, max: f64) -> f64 {
    random_range_with(&mut rand::rng(), min, max)
}

/// Uniform integer in `[min, max]` from the thread-local generator.
#[inline]
pub fn random_int(min: i64, max: i64) -> i64 {
    random_int_with(&mut rand::rng(), min, max)
}

/// Bell-shaped value in `[min, max)` from the thread-local generator.
#[inline]
pub fn random_dist(min: f64, max: f64, iterations: u32) -> f64 {
    random_dist_with(&mut rand::rng(), min, max, iterations)
}

/// How a [`RandomSource`] is seeded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    /// Fixed seed for reproducible sequences; `None` draws from OS entropy
    pub seed: Option<u64>,
}

/// Owned generator with the random helpers as methods
#[derive(Debug, Clone)]
pub struct RandomSource<R = StdRng> {
    rng: R,
}

impl RandomSource<StdRng> {
    /// Build a source as described by `config`.
    pub fn from_config(config: &RandomConfig) -> Self {
        match config.seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// Deterministic source: equal seeds produce equal sequences.
    pub fn seeded(seed: u64) -> Self {
        debug!(seed, "Seeding random source");
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Non-reproducible source seeded from the operating system.
    pub fn from_entropy() -> Self {
        debug!("Seeding random source from OS entropy");
        Self::new(StdRng::from_os_rng())
    }
}

impl Default for RandomSource<StdRng> {
    fn default() -> Self {
        Self::from_config(&RandomConfig::default())
    }
}

impl<R: Rng> RandomSource<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Underlying generator, for draws the helpers don't cover.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// See [`random_with`].
    #[inline]
    pub fn random(&mut self) -> f64 {
        random_with(&mut self.rng)
    }

    /// See [`random_range_with`].
    #[inline]
    pub fn random_range(&mut self, min: f64, max: f64) -> f64 {
        random_range_with(&mut self.rng, min, max)
    }

    /// See [`random_int_with`].
    #[inline]
    pub fn random_int(&mut self, min: i64, max: i64) -> i64 {
        random_int_with(&mut self.rng, min, max)
    }

    /// See [`random_dist_with`].
    #[inline]
    pub fn random_dist(&mut self, min: f64, max: f64, iterations: u32) -> f64 {
        random_dist_with(&mut self.rng, min, max, iterations)
    }
}
