//! Gift wrapping (Jarvis march).
//!
//! Starting from the pivot, repeatedly pick the candidate that leaves every
//! other point on or to the left of the new edge, preferring the farthest one
//! among collinear candidates. Runs in O(n·h) for h hull vertices.

use nalgebra::Point2;

use crate::predicates::{squared_distance, turn, Turn};
use crate::types::{Coord, HullError};
use crate::util::checked_pivot;

/// Convex hull by gift wrapping.
///
/// Returns the open counter-clockwise hull starting at the pivot (leftmost,
/// ties by lowest y). Collinear boundary points are skipped, so one point
/// yields a one-vertex hull and an all-collinear set yields its two endpoints.
pub fn jarvis_march<T: Coord>(points: &[Point2<T>]) -> Result<Vec<Point2<T>>, HullError> {
    let (_, start) = checked_pivot(points)?;
    // h <= n, so the wrap closes within n steps under exact predicates.
    wrap(points, start, points.len())
}

/// Wrap from `start` until it comes back, giving up after `max_steps` edges.
fn wrap<T: Coord>(
    points: &[Point2<T>],
    start: Point2<T>,
    max_steps: usize,
) -> Result<Vec<Point2<T>>, HullError> {
    let mut hull = vec![start];
    let mut anchor = start;
    for _ in 0..max_steps {
        let next = next_vertex(points, &anchor);
        if next == start {
            tracing::debug!(n = points.len(), hull_len = hull.len(), "jarvis_march");
            return Ok(hull);
        }
        hull.push(next);
        anchor = next;
    }
    Err(HullError::WrapDidNotClose { steps: max_steps })
}

/// The hull vertex following `anchor` in counter-clockwise order.
fn next_vertex<T: Coord>(points: &[Point2<T>], anchor: &Point2<T>) -> Point2<T> {
    let mut best = *anchor;
    for r in points {
        let replace = match turn(anchor, &best, r) {
            Turn::Clockwise => true,
            Turn::Collinear => squared_distance(anchor, r) > squared_distance(anchor, &best),
            Turn::CounterClockwise => false,
        };
        if replace {
            best = *r;
        }
    }
    best
}
