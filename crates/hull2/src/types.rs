//! Coordinate types, algorithm selector and the library error.
//!
//! - `Coord`: numeric policy per coordinate type (wide type for exact products).
//! - `Algorithm`: selector used by `convex_hull` and the CLI.
//! - `HullError`: failure modes shared by both algorithms.

use nalgebra::Scalar;
use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

/// Coordinate type of a point.
///
/// `Wide` is the type orientation and squared distance are evaluated in. For
/// integers it is `i128`, which keeps `i32` inputs exact everywhere and `i64`
/// inputs exact while `|coordinate| < 2^62`.
pub trait Coord: Scalar + Copy + PartialOrd {
    type Wide: Copy
        + PartialOrd
        + fmt::Debug
        + Add<Output = Self::Wide>
        + Sub<Output = Self::Wide>
        + Mul<Output = Self::Wide>;

    const ZERO: Self::Wide;

    fn widen(self) -> Self::Wide;

    fn wide_to_f64(w: Self::Wide) -> f64;

    /// False for NaN and infinities; always true for integers.
    fn is_finite(self) -> bool;
}

macro_rules! exact_coord {
    ($($t:ty),*) => {
        $(
            impl Coord for $t {
                type Wide = i128;
                const ZERO: i128 = 0;
                #[inline]
                fn widen(self) -> i128 {
                    i128::from(self)
                }
                #[inline]
                fn wide_to_f64(w: i128) -> f64 {
                    w as f64
                }
                #[inline]
                fn is_finite(self) -> bool {
                    true
                }
            }
        )*
    };
}

macro_rules! float_coord {
    ($($t:ty),*) => {
        $(
            impl Coord for $t {
                type Wide = f64;
                const ZERO: f64 = 0.0;
                #[inline]
                fn widen(self) -> f64 {
                    f64::from(self)
                }
                #[inline]
                fn wide_to_f64(w: f64) -> f64 {
                    w
                }
                #[inline]
                fn is_finite(self) -> bool {
                    <$t>::is_finite(self)
                }
            }
        )*
    };
}

exact_coord!(i32, i64);
float_coord!(f32, f64);

/// Errors returned by the hull algorithms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HullError {
    /// No points, so there is no pivot.
    EmptyInput,
    /// A coordinate is NaN or infinite.
    NonFiniteCoordinate { index: usize },
    /// The gift wrap did not return to the pivot within `steps` steps.
    WrapDidNotClose { steps: usize },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "invalid input: point set is empty"),
            Self::NonFiniteCoordinate { index } => {
                write!(f, "invalid input: point {index} has a non-finite coordinate")
            }
            Self::WrapDidNotClose { steps } => {
                write!(f, "gift wrap did not close after {steps} steps")
            }
        }
    }
}

impl std::error::Error for HullError {}

/// Hull construction algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    JarvisMarch,
    GrahamScan,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::JarvisMarch, Algorithm::GrahamScan];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::JarvisMarch => "jarvis",
            Algorithm::GrahamScan => "graham",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseAlgorithmError {
    pub name: String,
}

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown hull algorithm {:?} (expected \"jarvis\" or \"graham\")",
            self.name
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jarvis" | "jarvis-march" | "gift-wrapping" => Ok(Algorithm::JarvisMarch),
            "graham" | "graham-scan" => Ok(Algorithm::GrahamScan),
            _ => Err(ParseAlgorithmError { name: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_names_parse_back() {
        for algo in Algorithm::ALL {
            assert_eq!(algo.to_string().parse::<Algorithm>(), Ok(algo));
        }
        assert_eq!("Gift-Wrapping".parse(), Ok(Algorithm::JarvisMarch));
        assert_eq!(" graham-scan ".parse(), Ok(Algorithm::GrahamScan));
        let err = "quickhull".parse::<Algorithm>().unwrap_err();
        assert!(err.to_string().contains("quickhull"));
    }

    #[test]
    fn integer_widening_is_exact() {
        let big = i64::MAX.widen() * 2i64.widen();
        assert_eq!(big, (i64::MAX as i128) * 2);
        assert!(!Coord::is_finite(f64::NAN));
        assert!(!Coord::is_finite(f32::INFINITY));
        assert!(Coord::is_finite(i32::MIN));
    }
}
