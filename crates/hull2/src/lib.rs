//! Planar convex hulls: gift wrapping (Jarvis march) and Graham scan.
//!
//! Both algorithms consume a borrowed point set and return a fresh, open,
//! counter-clockwise hull starting at the pivot (leftmost point, ties by lowest
//! y). They share the free-function predicates in [`predicates`] and nothing
//! else.
//!
//! Numeric policy
//! - Coordinates are generic over [`Coord`]. Integer coordinates are widened to
//!   `i128` so orientation and squared distance are exact; float coordinates
//!   work in `f64`.
//! - `slope` is the only quantity that always goes through `f64`, and it is
//!   used only as the Graham sort key.

pub mod check;
pub mod graham;
pub mod jarvis;
pub mod predicates;
pub mod sample;
mod types;
mod util;

pub use graham::graham_scan;
pub use jarvis::jarvis_march;
pub use types::{Algorithm, Coord, HullError, ParseAlgorithmError};

pub use nalgebra::Point2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::check::{closed, verify_hull, HullViolation};
    pub use crate::predicates::{compare3, orientation, slope, squared_distance, turn, Turn};
    pub use crate::{convex_hull, graham_scan, jarvis_march, Algorithm, Coord, HullError};
    pub use nalgebra::{point, Point2};
}

/// Run the selected algorithm on `points`.
///
/// Both algorithms return the same vertex set; only the traversal differs.
pub fn convex_hull<T: Coord>(
    points: &[Point2<T>],
    algorithm: Algorithm,
) -> Result<Vec<Point2<T>>, HullError> {
    match algorithm {
        Algorithm::JarvisMarch => jarvis_march(points),
        Algorithm::GrahamScan => graham_scan(points),
    }
}

#[cfg(test)]
mod tests;
