use nalgebra::Point2;

use crate::types::{Coord, HullError};

/// Leftmost point, ties by lowest y. First occurrence wins among duplicates.
pub(crate) fn pivot<T: Coord>(points: &[Point2<T>]) -> Option<(usize, Point2<T>)> {
    let (first, rest) = points.split_first()?;
    let mut best = (0usize, *first);
    for (i, p) in rest.iter().enumerate() {
        let b = best.1;
        if p.x < b.x || (p.x == b.x && p.y < b.y) {
            best = (i + 1, *p);
        }
    }
    Some(best)
}

/// Reject empty and non-finite input, then select the pivot.
pub(crate) fn checked_pivot<T: Coord>(
    points: &[Point2<T>],
) -> Result<(usize, Point2<T>), HullError> {
    if let Some(index) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(HullError::NonFiniteCoordinate { index });
    }
    pivot(points).ok_or(HullError::EmptyInput)
}
