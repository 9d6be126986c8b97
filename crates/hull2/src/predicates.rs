//! Geometric predicates shared by both hull algorithms.
//!
//! All functions are stateless and operate on value-type points. Orientation
//! and squared distance are evaluated in `T::Wide`; only `slope` leaves the
//! coordinate domain for `f64`.

use std::cmp::Ordering;

use nalgebra::Point2;

use crate::types::Coord;

/// Turn direction of three points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    CounterClockwise,
    Collinear,
    Clockwise,
}

/// Z-component of `(q - p) × (r - p)`.
///
/// Positive when `r` is strictly counter-clockwise of the directed segment
/// `p → q`, negative when clockwise, zero when the three points are collinear.
#[inline]
pub fn orientation<T: Coord>(p: &Point2<T>, q: &Point2<T>, r: &Point2<T>) -> T::Wide {
    let (px, py) = (p.x.widen(), p.y.widen());
    (q.x.widen() - px) * (r.y.widen() - py) - (r.x.widen() - px) * (q.y.widen() - py)
}

/// Three-way comparison. `Less`, `Equal`, `Greater` stand for -1, 0, +1.
///
/// Incomparable values (NaN) classify as `Equal`.
#[inline]
pub fn compare3<N: PartialOrd>(x: N, y: N) -> Ordering {
    if x > y {
        Ordering::Greater
    } else if x < y {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

/// Classify `orientation(p, q, r)` by its sign.
#[inline]
pub fn turn<T: Coord>(p: &Point2<T>, q: &Point2<T>, r: &Point2<T>) -> Turn {
    match compare3(orientation(p, q, r), T::ZERO) {
        Ordering::Greater => Turn::CounterClockwise,
        Ordering::Equal => Turn::Collinear,
        Ordering::Less => Turn::Clockwise,
    }
}

/// `(q.x - p.x)² + (q.y - p.y)²`. Only meaningful for relative comparisons.
#[inline]
pub fn squared_distance<T: Coord>(p: &Point2<T>, q: &Point2<T>) -> T::Wide {
    let dx = q.x.widen() - p.x.widen();
    let dy = q.y.widen() - p.y.widen();
    dx * dx + dy * dy
}

/// Slope of the line through `p` and `q`; `+∞` for a vertical line.
///
/// Not a polar angle in general. Around a pivot that is the leftmost-lowest
/// point of a set it is monotone in the polar angle, since every other point
/// lies in the half-plane of angles (-π/2, π/2].
#[inline]
pub fn slope<T: Coord>(p: &Point2<T>, q: &Point2<T>) -> f64 {
    if p.x == q.x {
        return f64::INFINITY;
    }
    let dy = T::wide_to_f64(p.y.widen() - q.y.widen());
    let dx = T::wide_to_f64(p.x.widen() - q.x.widen());
    dy / dx
}
