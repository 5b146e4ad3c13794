//! Vector fields evaluated pointwise on the plane.
//!
//! The evaluators are generic over a field-evaluation capability so that
//! alternative fields can be substituted without touching the integration
//! code. The only field the tool ships is the radial one.

use nalgebra::Vector2;

/// A stateless 2D vector field with a known pointwise divergence.
pub trait VectorField {
    /// Field value at `p`.
    fn eval(&self, p: Vector2<f64>) -> Vector2<f64>;

    /// Pointwise divergence `∂Fx/∂x + ∂Fy/∂y` at `p`.
    fn divergence(&self, p: Vector2<f64>) -> f64;
}

/// The radial field `F(x, y) = (x, y)`; `div F = 2` everywhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct RadialField;

impl VectorField for RadialField {
    #[inline]
    fn eval(&self, p: Vector2<f64>) -> Vector2<f64> {
        p
    }

    #[inline]
    fn divergence(&self, _p: Vector2<f64>) -> f64 {
        2.0
    }
}
