//! Numerical check of the divergence theorem on drawn 2D boundaries.
//!
//! A caller (CLI, canvas, script) supplies an ordered sequence of points
//! tracing a closed curve. The library computes the outward flux of a vector
//! field through that curve by line integration, the area integral of the
//! field's divergence by grid quadrature, and reports whether the two agree.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - Prefer clarity and better design over compatibility; breaking changes
//!   are fine when they improve quality.

pub mod divergence;
pub mod field;
pub mod flux;
pub mod geom2;
pub mod verify;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::divergence::{divergence_integral, GridCfg};
    pub use crate::field::{RadialField, VectorField};
    pub use crate::flux::flux_through_boundary;
    pub use crate::geom2::shapes;
    pub use crate::geom2::sketch::{draw_sketch, ReplayToken, SketchCfg};
    pub use crate::geom2::{contains_point, BBox2, Boundary};
    pub use crate::verify::{
        verify_divergence_theorem, ResolutionTier, VerificationReport, VerifyCfg, VerifyError,
    };
    pub use nalgebra::Vector2 as Vec2;
}
