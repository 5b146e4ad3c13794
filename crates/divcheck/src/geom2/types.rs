//! Basic boundary types.
//!
//! - `BBox2`: axis-aligned bounding box of a vertex set.
//! - `Boundary`: ordered vertices of a closed polygonal curve.
//!
//! Closure tolerances live with the orchestrator (`crate::verify::VerifyCfg`);
//! the geometry layer takes explicit eps parameters.
//!
//! Code cross-refs: `util::contains_point`, `crate::verify`

use nalgebra::Vector2;

/// Axis-aligned bounding box with `min <= max` componentwise.
///
/// Degenerate boxes (zero width or height) are legal values; callers that
/// quadrature over the box get a zero cell area and hence a zero integral.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox2 {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl BBox2 {
    /// Tight box over `pts`. `None` for an empty slice.
    pub fn from_points(pts: &[Vector2<f64>]) -> Option<Self> {
        let first = *pts.first()?;
        let mut min = first;
        let mut max = first;
        for p in &pts[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some(Self { min, max })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }
}

/// Ordered vertices of a closed polygonal curve.
///
/// Invariants (design choice):
/// - Construction performs no validation; vertex count and closure are
///   checked by the orchestrator, which owns the user-facing errors.
/// - Consecutive duplicate vertices are allowed (zero-length edges); the
///   evaluators treat them as contributing nothing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Boundary {
    verts: Vec<Vector2<f64>>,
}

impl Boundary {
    #[inline]
    pub fn from_points(verts: Vec<Vector2<f64>>) -> Self {
        Self { verts }
    }

    /// Convenience constructor from coordinate pairs.
    pub fn from_xy(pairs: &[(f64, f64)]) -> Self {
        Self {
            verts: pairs.iter().map(|&(x, y)| Vector2::new(x, y)).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[Vector2<f64>] {
        &self.verts
    }

    #[inline]
    pub fn first(&self) -> Option<Vector2<f64>> {
        self.verts.first().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<Vector2<f64>> {
        self.verts.last().copied()
    }

    /// Tight bounding box over all vertices. `None` when empty.
    pub fn bbox(&self) -> Option<BBox2> {
        BBox2::from_points(&self.verts)
    }

    /// Consecutive vertex pairs `(p, q)` in stroke order.
    pub fn edges(&self) -> impl Iterator<Item = (Vector2<f64>, Vector2<f64>)> + '_ {
        self.verts.windows(2).map(|w| (w[0], w[1]))
    }

    /// Euclidean distance between the first and last vertex. `None` when
    /// there are fewer than 2 vertices.
    pub fn endpoint_gap(&self) -> Option<f64> {
        if self.verts.len() < 2 {
            return None;
        }
        Some((self.verts[0] - self.verts[self.verts.len() - 1]).norm())
    }

    #[inline]
    pub fn is_closed(&self, eps: f64) -> bool {
        matches!(self.endpoint_gap(), Some(gap) if gap <= eps)
    }

    /// Append a copy of the first vertex unless the last already coincides
    /// within `eps`. Idempotent; no-op on boundaries with fewer than 2
    /// vertices.
    pub fn close_loop(&mut self, eps: f64) {
        if self.verts.len() < 2 {
            return;
        }
        if !self.is_closed(eps) {
            self.verts.push(self.verts[0]);
        }
    }
}
