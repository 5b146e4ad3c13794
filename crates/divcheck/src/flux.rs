//! Outward-flux line integral over a closed polygonal boundary.
//!
//! Purpose
//! - Approximate `∮ F·n̂ dl` by a midpoint rule per edge: evaluate the field
//!   at each edge midpoint and weight by the edge length.
//!
//! Conventions
//! - The edge normal is the 90°-rotated, length-normalized edge vector
//!   `(-dy, dx)/|edge|`. Which side that points to depends on the winding of
//!   the stroke, so the result is reported as an absolute value; freehand
//!   input carries no orientation guarantee.

use nalgebra::Vector2;

use crate::field::VectorField;
use crate::geom2::Boundary;

/// Midpoint-rule flux of `field` through `boundary`.
///
/// Pre: the boundary is closed (first vertex == last). The orchestrator
/// enforces this; the sum itself is well-defined for any edge list.
/// Zero-length edges contribute nothing.
pub fn flux_through_boundary<F: VectorField>(boundary: &Boundary, field: &F) -> f64 {
    let mut flux = 0.0;
    for (p, q) in boundary.edges() {
        let edge = q - p;
        let length = edge.norm();
        if length > 0.0 {
            let mid = (p + q) * 0.5;
            let normal = Vector2::new(-edge.y, edge.x) / length;
            flux += field.eval(mid).dot(&normal) * length;
        }
    }
    flux.abs()
}
