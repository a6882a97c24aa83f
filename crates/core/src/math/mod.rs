//! Scalar math and randomisation helpers

pub mod random;
pub mod scalar;

pub use random::{
    random, random_dist, random_dist_with, random_int, random_int_with, random_range,
    random_range_with, random_with, RandomConfig, RandomSource,
};
pub use scalar::{clamp, distance, lerp, map, norm, snap};
