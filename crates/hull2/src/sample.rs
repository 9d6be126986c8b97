//! Seeded point clouds for benches, property tests and the CLI.
//!
//! Determinism uses a replay token `(seed, index)` mixed into a single RNG, so
//! the `index`-th cloud of a run can be regenerated on its own.

use nalgebra::Point2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// `n` points uniform in the square `[-half, half]²`.
///
/// # Panics
/// If `half` is NaN or infinite.
pub fn uniform_square(n: usize, half: f64, tok: ReplayToken) -> Vec<Point2<f64>> {
    assert!(half.is_finite(), "uniform_square: half-width must be finite, got {half}");
    let mut rng = tok.to_std_rng();
    let h = half.abs();
    (0..n)
        .map(|_| Point2::new(rng.gen_range(-h..=h), rng.gen_range(-h..=h)))
        .collect()
}

/// `n` points uniform in the disk of radius `radius` around the origin.
///
/// Area-uniform: radius drawn as `R·sqrt(u)`.
///
/// # Panics
/// If `radius` is NaN or infinite.
pub fn uniform_disk(n: usize, radius: f64, tok: ReplayToken) -> Vec<Point2<f64>> {
    assert!(radius.is_finite(), "uniform_disk: radius must be finite, got {radius}");
    let mut rng = tok.to_std_rng();
    let r0 = radius.abs();
    (0..n)
        .map(|_| {
            let theta = rng.gen::<f64>() * std::f64::consts::TAU;
            let r = r0 * rng.gen::<f64>().sqrt();
            Point2::new(r * theta.cos(), r * theta.sin())
        })
        .collect()
}

/// `n` integer points in `[-half, half]²`.
///
/// Small `half` forces duplicates and collinear runs, which is the point.
/// `i64::MIN` saturates to `i64::MAX`.
pub fn integer_grid(n: usize, half: i64, tok: ReplayToken) -> Vec<Point2<i64>> {
    let mut rng = tok.to_std_rng();
    let h = half.saturating_abs();
    (0..n)
        .map(|_| Point2::new(rng.gen_range(-h..=h), rng.gen_range(-h..=h)))
        .collect()
}
