//! Verification sweep over every preset boundary.
//!
//! Purpose
//! - Provide a reproducible, code-backed data point for "how well does each
//!   preset satisfy the divergence theorem, and how long does a check take?"
//! - The star is the interesting row: its concave pockets make the grid
//!   quadrature noticeably coarser than on convex presets, so it is the
//!   preset most likely to need the refinement pass.

use std::time::Instant;

use divcheck::prelude::*;
use nalgebra::Vector2;

fn main() {
    let center = Vector2::new(250.0, 250.0);
    let presets: Vec<(&str, Boundary)> = vec![
        ("rectangle", shapes::rectangle(Vector2::new(100.0, 100.0), Vector2::new(300.0, 300.0))),
        ("circle", shapes::circle(center, 100.0, 100)),
        ("oval", shapes::ellipse(center, 130.0, 70.0, 100)),
        ("star", shapes::star(center, 100.0, 5)),
        ("pentagon", shapes::regular_polygon(center, 100.0, 5)),
        ("hexagon", shapes::regular_polygon(center, 100.0, 6)),
        ("octagon", shapes::regular_polygon(center, 100.0, 8)),
        ("heart", shapes::heart(center, 10.0, 200)),
    ];

    let cfg = VerifyCfg::default();
    for (name, boundary) in presets {
        let start = Instant::now();
        let report = verify_divergence_theorem(boundary, &RadialField, &cfg)
            .expect("presets are valid closed boundaries");
        let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;
        println!(
            "preset={name} flux={:.3} div_integral={:.3} rel_error={:.5} tier={} verified={} time_ms={elapsed_ms:.1}",
            report.flux,
            report.divergence_integral,
            report.relative_error,
            report.tier.as_str(),
            report.verified,
        );
    }
}
