use super::*;
use crate::check::{closed, is_convex_ccw, same_vertex_set, verify_hull};
use crate::graham::sort_by_angle;
use crate::sample::{integer_grid, uniform_disk, uniform_square, ReplayToken};
use nalgebra::point;
use proptest::prelude::*;

fn jarvis_sample() -> Vec<Point2<i32>> {
    vec![
        point![2, 2],
        point![4, 3],
        point![5, 4],
        point![0, 3],
        point![0, 2],
        point![0, 0],
        point![2, 1],
        point![2, 0],
        point![4, 0],
    ]
}

fn graham_sample() -> Vec<Point2<i32>> {
    vec![
        point![0, 3],
        point![1, 1],
        point![2, 2],
        point![4, 4],
        point![0, 0],
        point![1, 2],
        point![3, 1],
        point![3, 3],
    ]
}

#[test]
fn jarvis_sample_closes_at_pivot() {
    let hull = jarvis_march(&jarvis_sample()).unwrap();
    assert_eq!(
        closed(&hull),
        vec![
            point![0, 0],
            point![4, 0],
            point![5, 4],
            point![0, 3],
            point![0, 0]
        ]
    );
}

#[test]
fn graham_sample_closes_at_pivot() {
    let hull = graham_scan(&graham_sample()).unwrap();
    assert_eq!(
        closed(&hull),
        vec![
            point![0, 0],
            point![3, 1],
            point![4, 4],
            point![0, 3],
            point![0, 0]
        ]
    );
}

#[test]
fn both_samples_agree_across_algorithms() {
    for pts in [jarvis_sample(), graham_sample()] {
        let a = convex_hull(&pts, Algorithm::JarvisMarch).unwrap();
        let b = convex_hull(&pts, Algorithm::GrahamScan).unwrap();
        assert_eq!(a, b);
        assert_eq!(verify_hull(&pts, &a), Ok(()));
    }
}

#[test]
fn single_point_for_every_algorithm() {
    for algo in Algorithm::ALL {
        assert_eq!(
            convex_hull(&[point![0.25, -4.0]], algo).unwrap(),
            vec![point![0.25, -4.0]]
        );
        assert_eq!(
            convex_hull::<f32>(&[], algo),
            Err(HullError::EmptyInput)
        );
        assert_eq!(
            convex_hull(&[point![0.0, 0.0], point![f64::INFINITY, 1.0]], algo),
            Err(HullError::NonFiniteCoordinate { index: 1 })
        );
    }
}

#[test]
fn extreme_i32_coordinates_stay_exact() {
    let m = i32::MAX;
    let pts = [
        point![-m, -m],
        point![m, -m],
        point![m, m],
        point![-m, m],
        point![0, 0],
        point![m - 1, m - 1],
        point![0, -m],
    ];
    let expected = vec![point![-m, -m], point![m, -m], point![m, m], point![-m, m]];
    assert_eq!(jarvis_march(&pts).unwrap(), expected);
    assert_eq!(graham_scan(&pts).unwrap(), expected);
}

#[test]
fn slope_order_matches_polar_angle_in_every_quadrant() {
    // Regular 24-gon around the origin, so the set spans all four quadrants.
    let mut pts = Vec::new();
    for k in 0..24 {
        let th = k as f64 * std::f64::consts::TAU / 24.0;
        pts.push(point![10.0 * th.cos(), 10.0 * th.sin()]);
    }
    let pivot = crate::util::pivot(&pts).unwrap().1;
    let mut rest: Vec<_> = pts.iter().copied().filter(|p| *p != pivot).collect();
    sort_by_angle(&pivot, &mut rest);
    let angles: Vec<f64> = rest
        .iter()
        .map(|p| (p.y - pivot.y).atan2(p.x - pivot.x))
        .collect();
    assert!(angles.windows(2).all(|w| w[0] <= w[1] + 1e-12), "{angles:?}");
    let hull = graham_scan(&pts).unwrap();
    assert_eq!(hull.len(), 24);
    assert!(is_convex_ccw(&hull));
}

#[test]
fn seeded_float_clouds_agree() {
    for index in 0..8 {
        let tok = ReplayToken::new(42, index);
        for pts in [uniform_disk(400, 1.0, tok), uniform_square(400, 3.0, tok)] {
            let a = jarvis_march(&pts).unwrap();
            let b = graham_scan(&pts).unwrap();
            assert_eq!(verify_hull(&pts, &a), Ok(()));
            assert_eq!(verify_hull(&pts, &b), Ok(()));
            assert!(same_vertex_set(&a, &b));
        }
    }
}

#[test]
fn seeded_integer_grid_with_heavy_collinearity() {
    for index in 0..16 {
        let pts = integer_grid(60, 2, ReplayToken::new(7, index));
        let a = jarvis_march(&pts).unwrap();
        let b = graham_scan(&pts).unwrap();
        assert_eq!(a, b);
        assert_eq!(verify_hull(&pts, &a), Ok(()));
    }
}

fn int_cloud() -> impl Strategy<Value = Vec<Point2<i64>>> {
    prop::collection::vec((-25i64..=25, -25i64..=25), 1..48)
        .prop_map(|v| v.into_iter().map(|(x, y)| point![x, y]).collect())
}

proptest! {
    #[test]
    fn prop_hull_properties(pts in int_cloud()) {
        for algo in Algorithm::ALL {
            let hull = convex_hull(&pts, algo).unwrap();
            prop_assert_eq!(verify_hull(&pts, &hull), Ok(()));
            // Every vertex is strictly extreme: no flat or reflex turn.
            if hull.len() >= 3 {
                let m = hull.len();
                for k in 0..m {
                    let o = predicates::orientation(&hull[(k + m - 1) % m], &hull[k], &hull[(k + 1) % m]);
                    prop_assert!(o > 0);
                }
            }
        }
    }

    #[test]
    fn prop_algorithms_agree(pts in int_cloud()) {
        let a = jarvis_march(&pts).unwrap();
        let b = graham_scan(&pts).unwrap();
        prop_assert!(same_vertex_set(&a, &b));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_hull_is_idempotent(pts in int_cloud()) {
        for algo in Algorithm::ALL {
            let hull = convex_hull(&pts, algo).unwrap();
            let again = convex_hull(&hull, algo).unwrap();
            prop_assert!(same_vertex_set(&hull, &again));
        }
    }

    #[test]
    fn prop_hull_ignores_input_order(pts in int_cloud(), rot in 0usize..48) {
        let mut pts = pts;
        let hull = graham_scan(&pts).unwrap();
        let k = rot % pts.len();
        pts.rotate_left(k);
        prop_assert_eq!(jarvis_march(&pts).unwrap(), hull);
    }

    #[test]
    fn prop_slope_order_is_polar_order(pts in int_cloud()) {
        let pivot = crate::util::pivot(&pts).unwrap().1;
        let mut rest: Vec<_> = pts.iter().copied().filter(|p| *p != pivot).collect();
        sort_by_angle(&pivot, &mut rest);
        let angle = |p: &Point2<i64>| ((p.y - pivot.y) as f64).atan2((p.x - pivot.x) as f64);
        for w in rest.windows(2) {
            prop_assert!(angle(&w[0]) <= angle(&w[1]) + 1e-12);
        }
    }
}
