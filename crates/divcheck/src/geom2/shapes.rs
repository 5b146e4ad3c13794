//! Preset boundary generators (rectangle, circle, star, heart, ...).
//!
//! Purpose
//! - Pure point-sequence generators matching the canvas presets of the
//!   drawing front end. No coupling to the evaluators; any UI layer
//!   (console, web, desktop) can call them to seed a boundary.
//!
//! Conventions
//! - All generators emit a closed loop: the first vertex is repeated at the
//!   end, so the result passes closure validation unchanged.
//! - Angular sampling is exclusive of 2π (the closing vertex supplies the
//!   wrap-around), which avoids a duplicated seam vertex.

use std::f64::consts::TAU;

use nalgebra::Vector2;

use super::types::Boundary;

/// Axis-aligned rectangle spanned by two opposite corners.
pub fn rectangle(a: Vector2<f64>, b: Vector2<f64>) -> Boundary {
    Boundary::from_points(vec![
        Vector2::new(a.x, a.y),
        Vector2::new(b.x, a.y),
        Vector2::new(b.x, b.y),
        Vector2::new(a.x, b.y),
        Vector2::new(a.x, a.y),
    ])
}

/// Circle approximated by `segments` chords.
pub fn circle(center: Vector2<f64>, radius: f64, segments: usize) -> Boundary {
    ellipse(center, radius, radius, segments)
}

/// Axis-aligned ellipse approximated by `segments` chords.
pub fn ellipse(center: Vector2<f64>, rx: f64, ry: f64, segments: usize) -> Boundary {
    let n = segments.max(3);
    let mut pts = Vec::with_capacity(n + 1);
    for k in 0..n {
        let th = TAU * (k as f64) / (n as f64);
        pts.push(center + Vector2::new(rx * th.cos(), ry * th.sin()));
    }
    pts.push(pts[0]);
    Boundary::from_points(pts)
}

/// Regular polygon with `sides` vertices on a circle of `radius`.
///
/// Pentagon/hexagon/octagon presets are `sides = 5/6/8`.
pub fn regular_polygon(center: Vector2<f64>, radius: f64, sides: usize) -> Boundary {
    let n = sides.max(3);
    let mut pts = Vec::with_capacity(n + 1);
    for k in 0..n {
        let th = TAU * (k as f64) / (n as f64);
        pts.push(center + Vector2::new(radius * th.cos(), radius * th.sin()));
    }
    pts.push(pts[0]);
    Boundary::from_points(pts)
}

/// Star with `points` tips: vertices alternate between `outer_radius` and
/// half of it.
pub fn star(center: Vector2<f64>, outer_radius: f64, points: usize) -> Boundary {
    let tips = points.max(3);
    let n = 2 * tips;
    let mut pts = Vec::with_capacity(n + 1);
    for k in 0..n {
        let th = TAU * (k as f64) / (n as f64);
        let r = if k % 2 == 0 {
            outer_radius
        } else {
            outer_radius / 2.0
        };
        pts.push(center + Vector2::new(r * th.cos(), r * th.sin()));
    }
    pts.push(pts[0]);
    Boundary::from_points(pts)
}

/// Classic parametric heart: `x = 16 sin³t`, `y = 13 cos t − 5 cos 2t −
/// 2 cos 3t − cos 4t`, scaled by `scale` around `center`.
pub fn heart(center: Vector2<f64>, scale: f64, segments: usize) -> Boundary {
    let n = segments.max(3);
    let mut pts = Vec::with_capacity(n + 1);
    for k in 0..n {
        let t = TAU * (k as f64) / (n as f64);
        let x = 16.0 * t.sin().powi(3) * scale;
        let y = (13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos())
            * scale;
        pts.push(center + Vector2::new(x, y));
    }
    pts.push(pts[0]);
    Boundary::from_points(pts)
}
