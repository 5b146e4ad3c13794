//! Freehand-like boundaries (radial jitter + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic stand-in for mouse input. Tests and the
//!   CLI use it to exercise the loose-closure path: the stroke ends *near*
//!   its start, not exactly on it, the way a hand-drawn loop does.
//!
//! Model
//! - Walk `n` roughly equally spaced angles over slightly less than a full
//!   turn, add bounded angular and radial jitter, and leave the final vertex
//!   short of the start by a configurable gap fraction.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `Boundary`, `crate::verify` (closure tolerance)

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Boundary;

/// Jittered-stroke sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SketchCfg {
    /// Number of stroke samples. Clamped to >= 8.
    pub vertex_count: usize,
    /// Angular jitter as a fraction of the base spacing. Clamped to [0, 0.49]
    /// so sample order stays monotone (no self-crossing from reordering).
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude): radii are `base_radius * (1 + u)`
    /// with `u ∈ [-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    /// Nominal stroke radius around `center`.
    pub base_radius: f64,
    /// Fraction of the full turn left open between last and first vertex.
    /// At the default radius the resulting chord stays well inside the
    /// closure tolerance.
    pub end_gap_frac: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
    pub center: Vector2<f64>,
}

impl Default for SketchCfg {
    fn default() -> Self {
        Self {
            vertex_count: 64,
            angle_jitter_frac: 0.3,
            radial_jitter: 0.06,
            base_radius: 100.0,
            end_gap_frac: 0.01,
            random_phase: true,
            center: Vector2::new(0.0, 0.0),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a jittered, nearly closed stroke around `cfg.center`.
///
/// The output is intentionally *not* an exact loop: the endpoint gap is
/// `~ base_radius * 2π * end_gap_frac`, which the orchestrator is expected
/// to close during validation.
pub fn draw_sketch(cfg: SketchCfg, tok: ReplayToken) -> Boundary {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.max(8);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.max(0.0);
    let r0 = cfg.base_radius.max(1e-9);
    let sweep = std::f64::consts::TAU * (1.0 - cfg.end_gap_frac.clamp(0.0, 0.25));
    let delta = sweep / (n as f64 - 1.0);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let mut pts = Vec::with_capacity(n);
    for k in 0..n {
        let base = phase + (k as f64) * delta;
        // Stroke endpoints are un-jittered so the end gap is governed by
        // end_gap_frac alone and stays inside the closure tolerance.
        let (th, r) = if k == 0 || k == n - 1 {
            (base, r0)
        } else {
            let th = base + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            (th, (1.0 + u).max(1e-6) * r0)
        };
        pts.push(cfg.center + Vector2::new(th.cos() * r, th.sin() * r));
    }
    Boundary::from_points(pts)
}
