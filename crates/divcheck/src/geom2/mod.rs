//! 2D boundary geometry for closed drawn curves.
//!
//! Purpose
//! - Provide the vertex-sequence `Boundary` type shared by both integral
//!   evaluators, its bounding box, loop closure, and the ray-casting
//!   containment primitive.
//! - Keep the API minimal (KISS, YAGNI) and numerically explicit (eps-aware).
//!
//! Why vertex sequences
//! - Freehand input arrives as an ordered polyline; both evaluators walk it
//!   directly (edges for flux, containment for quadrature). No constraint
//!   representation or hull construction is needed.
//!
//! Code cross-refs: `Boundary`, `BBox2`, `contains_point`

pub mod shapes;
pub mod sketch;
mod types;
mod util;

pub use types::{BBox2, Boundary};
pub use util::contains_point;
