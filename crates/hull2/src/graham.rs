//! Graham scan.
//!
//! Sort the non-pivot points by slope around the pivot, then sweep with a
//! stack that only keeps strict left turns. O(n log n), dominated by the sort.
//!
//! The slope key orders points by polar angle because the pivot is the
//! leftmost-lowest point: every other point has angle in (-π/2, π/2], where
//! slope is monotone, and vertical neighbours get `+∞` and sort last.

use nalgebra::Point2;

use crate::predicates::{compare3, orientation, slope, squared_distance};
use crate::types::{Coord, HullError};
use crate::util::checked_pivot;

/// Convex hull by Graham scan.
///
/// The caller's slice is not touched; sorting happens on a private copy.
/// Returns the open counter-clockwise hull starting at the pivot, without
/// collinear boundary points.
pub fn graham_scan<T: Coord>(points: &[Point2<T>]) -> Result<Vec<Point2<T>>, HullError> {
    let (_, start) = checked_pivot(points)?;
    let mut work: Vec<Point2<T>> = points.iter().copied().filter(|p| *p != start).collect();
    sort_by_angle(&start, &mut work);

    let mut hull: Vec<Point2<T>> = Vec::with_capacity(work.len() + 1);
    hull.push(start);
    for p in work {
        hull.push(p);
        while hull.len() >= 3 {
            let k = hull.len();
            if orientation(&hull[k - 3], &hull[k - 2], &hull[k - 1]) > T::ZERO {
                break;
            }
            hull.remove(k - 2);
        }
    }
    tracing::debug!(n = points.len(), hull_len = hull.len(), "graham_scan");
    Ok(hull)
}

/// Stable sort by ascending slope to `pivot`; collinear ties nearest first.
///
/// Nearest-first lets the sweep drop interior points of a ray as soon as a
/// farther one arrives, including on the closing ray back to the pivot.
pub(crate) fn sort_by_angle<T: Coord>(pivot: &Point2<T>, points: &mut [Point2<T>]) {
    points.sort_by(|a, b| {
        compare3(slope(a, pivot), slope(b, pivot))
            .then_with(|| compare3(squared_distance(pivot, a), squared_distance(pivot, b)))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::point;

    #[test]
    fn sample_set_scans_counter_clockwise() {
        let pts = vec![
            point![0, 3],
            point![1, 1],
            point![2, 2],
            point![4, 4],
            point![0, 0],
            point![1, 2],
            point![3, 1],
            point![3, 3],
        ];
        let before = pts.clone();
        let hull = graham_scan(&pts).unwrap();
        assert_eq!(
            hull,
            vec![point![0, 0], point![3, 1], point![4, 4], point![0, 3]]
        );
        assert_eq!(pts, before);
    }

    #[test]
    fn angular_order_is_slope_then_distance() {
        let pivot = point![0, 0];
        let mut pts = [
            point![0, 2],
            point![2, 2],
            point![3, -1],
            point![1, 1],
            point![0, 1],
            point![4, 0],
            point![2, 0],
        ];
        sort_by_angle(&pivot, &mut pts);
        assert_eq!(
            pts,
            [
                point![3, -1],
                point![2, 0],
                point![4, 0],
                point![1, 1],
                point![2, 2],
                point![0, 1],
                point![0, 2],
            ]
        );
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(graham_scan::<f64>(&[]), Err(HullError::EmptyInput));
        assert_eq!(graham_scan(&[point![-1, 7]]).unwrap(), vec![point![-1, 7]]);
        assert_eq!(
            graham_scan(&[point![5, 1], point![1, 5]]).unwrap(),
            vec![point![1, 5], point![5, 1]]
        );
        let line = [point![2, 2], point![0, 0], point![3, 3], point![1, 1]];
        assert_eq!(graham_scan(&line).unwrap(), vec![point![0, 0], point![3, 3]]);
        let vertical = [point![0, 2], point![0, 0], point![0, 5], point![0, 2]];
        assert_eq!(graham_scan(&vertical).unwrap(), vec![point![0, 0], point![0, 5]]);
    }

    #[test]
    fn drops_duplicates_and_collinear_edge_points() {
        let pts = [
            point![0.0, 0.0],
            point![2.0, 0.0],
            point![4.0, 0.0],
            point![4.0, 4.0],
            point![0.0, 4.0],
            point![0.0, 2.0],
            point![4.0, 4.0],
            point![0.0, 0.0],
            point![4.0, 2.0],
        ];
        assert_eq!(
            graham_scan(&pts).unwrap(),
            vec![
                point![0.0, 0.0],
                point![4.0, 0.0],
                point![4.0, 4.0],
                point![0.0, 4.0]
            ]
        );
    }
}
