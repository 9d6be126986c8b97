//! Run both algorithms on the two classic sample sets and print the closed hulls.
//!
//! Usage:
//!   cargo run -p hull2 --example sample_hulls
//!
//! The closing vertex is appended here, as a plotting caller would do.

use hull2::check::closed;
use hull2::{graham_scan, jarvis_march};
use nalgebra::point;

fn main() {
    let jarvis_points = [
        point![2, 2],
        point![4, 3],
        point![5, 4],
        point![0, 3],
        point![0, 2],
        point![0, 0],
        point![2, 1],
        point![2, 0],
        point![4, 0],
    ];
    match jarvis_march(&jarvis_points) {
        Ok(hull) => println!("jarvis march hull: {:?}", pairs(&closed(&hull))),
        Err(e) => eprintln!("jarvis march failed: {e}"),
    }

    let graham_points = [
        point![0, 3],
        point![1, 1],
        point![2, 2],
        point![4, 4],
        point![0, 0],
        point![1, 2],
        point![3, 1],
        point![3, 3],
    ];
    match graham_scan(&graham_points) {
        Ok(hull) => println!("graham scan hull: {:?}", pairs(&closed(&hull))),
        Err(e) => eprintln!("graham scan failed: {e}"),
    }
}

fn pairs(ring: &[nalgebra::Point2<i32>]) -> Vec<(i32, i32)> {
    ring.iter().map(|p| (p.x, p.y)).collect()
}
