//! Hull verification and output helpers.
//!
//! Each check mirrors one property a correct hull has:
//! - subset: every vertex is copied from the input,
//! - convexity: no clockwise turn along the cyclic vertex sequence,
//! - containment: every input point is on or left of every directed edge.
//!
//! `verify_hull` runs all three and reports the first violation.

use std::fmt;

use nalgebra::Point2;

use crate::predicates::orientation;
use crate::types::Coord;

/// First property a candidate hull fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HullViolation {
    /// Hull vertex `vertex` does not occur in the input.
    NotInInput { vertex: usize },
    /// The turn at hull vertex `vertex` is clockwise.
    ClockwiseTurn { vertex: usize },
    /// Input point `point` lies strictly right of the edge starting at `edge`.
    OutsideEdge { point: usize, edge: usize },
}

impl fmt::Display for HullViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInInput { vertex } => write!(f, "hull vertex {vertex} is not an input point"),
            Self::ClockwiseTurn { vertex } => write!(f, "clockwise turn at hull vertex {vertex}"),
            Self::OutsideEdge { point, edge } => {
                write!(f, "input point {point} lies outside hull edge {edge}")
            }
        }
    }
}

impl std::error::Error for HullViolation {}

/// Index of the first hull vertex not present in `points`.
fn first_foreign_vertex<T: Coord>(points: &[Point2<T>], hull: &[Point2<T>]) -> Option<usize> {
    hull.iter().position(|v| !points.contains(v))
}

/// Index of the first vertex where the cyclic hull turns clockwise.
fn first_clockwise_turn<T: Coord>(hull: &[Point2<T>]) -> Option<usize> {
    let m = hull.len();
    if m < 3 {
        return None;
    }
    (0..m).find(|&k| {
        let a = &hull[(k + m - 1) % m];
        let b = &hull[k];
        let c = &hull[(k + 1) % m];
        orientation(a, b, c) < T::ZERO
    })
}

/// First `(point, edge)` pair with the point strictly right of the edge.
fn first_outside<T: Coord>(points: &[Point2<T>], hull: &[Point2<T>]) -> Option<(usize, usize)> {
    let m = hull.len();
    if m < 2 {
        return None;
    }
    for edge in 0..m {
        let a = &hull[edge];
        let b = &hull[(edge + 1) % m];
        if let Some(point) = points.iter().position(|p| orientation(a, b, p) < T::ZERO) {
            return Some((point, edge));
        }
    }
    None
}

#[inline]
pub fn is_subset<T: Coord>(points: &[Point2<T>], hull: &[Point2<T>]) -> bool {
    first_foreign_vertex(points, hull).is_none()
}

/// All cyclic triples `(a, b, c)` satisfy `orientation(a, b, c) >= 0`.
#[inline]
pub fn is_convex_ccw<T: Coord>(hull: &[Point2<T>]) -> bool {
    first_clockwise_turn(hull).is_none()
}

/// Every point lies on or left of every directed hull edge.
///
/// For hulls with fewer than two vertices there are no edges, so this holds
/// trivially; pair it with `is_subset` to pin such hulls down.
#[inline]
pub fn contains_all<T: Coord>(points: &[Point2<T>], hull: &[Point2<T>]) -> bool {
    first_outside(points, hull).is_none()
}

/// Same vertices, ignoring order, start and multiplicity.
pub fn same_vertex_set<T: Coord>(a: &[Point2<T>], b: &[Point2<T>]) -> bool {
    a.iter().all(|p| b.contains(p)) && b.iter().all(|p| a.contains(p))
}

/// Check subset, convexity and containment, in that order.
pub fn verify_hull<T: Coord>(points: &[Point2<T>], hull: &[Point2<T>]) -> Result<(), HullViolation> {
    if let Some(vertex) = first_foreign_vertex(points, hull) {
        return Err(HullViolation::NotInInput { vertex });
    }
    if let Some(vertex) = first_clockwise_turn(hull) {
        return Err(HullViolation::ClockwiseTurn { vertex });
    }
    if let Some((point, edge)) = first_outside(points, hull) {
        return Err(HullViolation::OutsideEdge { point, edge });
    }
    Ok(())
}

/// The hull with its first vertex appended, ready to draw as a polyline.
pub fn closed<T: Coord>(hull: &[Point2<T>]) -> Vec<Point2<T>> {
    let mut ring = hull.to_vec();
    if let Some(first) = hull.first() {
        ring.push(*first);
    }
    ring
}
