use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use divcheck::prelude::*;
use polars::prelude::*;
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Divergence-theorem checks on drawn or generated boundaries")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Check the divergence theorem on a boundary and print the verdict
    Verify {
        /// CSV file with x,y columns in stroke order
        #[arg(long, conflicts_with = "shape")]
        input: Option<String>,
        /// Preset name: rectangle|circle|oval|star|pentagon|hexagon|octagon|heart
        #[arg(long)]
        shape: Option<String>,
        /// Override the first-pass grid resolution
        #[arg(long)]
        base_resolution: Option<usize>,
        /// Write the structured report as JSON (plus a provenance sidecar)
        #[arg(long)]
        out: Option<String>,
    },
    /// Write a preset boundary as CSV
    Shape {
        #[arg(long)]
        name: String,
        #[arg(long)]
        out: String,
        /// Chord count for curved presets
        #[arg(long, default_value_t = 100)]
        segments: usize,
    },
    /// Write a jittered freehand-like boundary as CSV
    Sketch {
        #[arg(long)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: String,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Verify {
            input,
            shape,
            base_resolution,
            out,
        } => verify(input, shape, base_resolution, out),
        Action::Shape {
            name,
            out,
            segments,
        } => shape_to_csv(name, out, segments),
        Action::Sketch { seed, index, out } => sketch_to_csv(seed, index, out),
    }
}

/// Structured mirror of `VerificationReport` for the JSON output file.
#[derive(Serialize)]
struct ReportDoc {
    flux: f64,
    divergence_integral: f64,
    abs_difference: f64,
    relative_error: f64,
    verified: bool,
    resolution_tier: &'static str,
}

impl From<&VerificationReport> for ReportDoc {
    fn from(r: &VerificationReport) -> Self {
        Self {
            flux: r.flux,
            divergence_integral: r.divergence_integral,
            abs_difference: r.abs_difference,
            relative_error: r.relative_error,
            verified: r.verified,
            resolution_tier: r.tier.as_str(),
        }
    }
}

fn verify(
    input: Option<String>,
    shape: Option<String>,
    base_resolution: Option<usize>,
    out: Option<String>,
) -> Result<()> {
    let (boundary, source) = match (&input, &shape) {
        (Some(path), None) => (read_boundary_csv(path)?, path.clone()),
        (None, Some(name)) => (preset(name, 100)?, format!("preset:{name}")),
        _ => bail!("provide exactly one of --input or --shape"),
    };
    tracing::info!(source, points = boundary.len(), "boundary loaded");

    let mut cfg = VerifyCfg::default();
    if let Some(res) = base_resolution {
        cfg.base_resolution = res;
    }

    let doc = match verify_divergence_theorem(boundary, &RadialField, &cfg) {
        Ok(report) => {
            println!("{report}");
            serde_json::to_value(ReportDoc::from(&report))?
        }
        Err(err) => {
            // Validation failures are user-facing outcomes, not crashes.
            println!("{err}");
            serde_json::json!({ "error": err.to_string() })
        }
    };

    if let Some(out) = out {
        write_json(&out, &doc)?;
        provenance::write_sidecar(
            &out,
            serde_json::json!({
                "source": source,
                "base_resolution": cfg.base_resolution,
            }),
        )?;
    }
    Ok(())
}

/// Preset geometry matching the original drawing canvas (500×500, shapes
/// centered at (250, 250)).
fn preset(name: &str, segments: usize) -> Result<Boundary> {
    let center = Vec2::new(250.0, 250.0);
    let b = match name {
        "rectangle" => shapes::rectangle(Vec2::new(100.0, 100.0), Vec2::new(300.0, 300.0)),
        "circle" => shapes::circle(center, 100.0, segments),
        "oval" => shapes::ellipse(center, 130.0, 70.0, segments),
        "star" => shapes::star(center, 100.0, 5),
        "pentagon" => shapes::regular_polygon(center, 100.0, 5),
        "hexagon" => shapes::regular_polygon(center, 100.0, 6),
        "octagon" => shapes::regular_polygon(center, 100.0, 8),
        "heart" => shapes::heart(center, 10.0, segments.max(200)),
        other => bail!("unknown preset {other:?}"),
    };
    Ok(b)
}

fn shape_to_csv(name: String, out: String, segments: usize) -> Result<()> {
    let boundary = preset(&name, segments)?;
    tracing::info!(name, points = boundary.len(), out, "shape");
    write_boundary_csv(&out, &boundary)
}

fn sketch_to_csv(seed: u64, index: u64, out: String) -> Result<()> {
    let boundary = draw_sketch(SketchCfg::default(), ReplayToken { seed, index });
    tracing::info!(seed, index, points = boundary.len(), out, "sketch");
    write_boundary_csv(&out, &boundary)
}

fn read_boundary_csv(path: &str) -> Result<Boundary> {
    let lf = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("reading {path}"))?;
    let df = lf.collect()?;
    let xs = df
        .column("x")
        .with_context(|| format!("{path}: missing column x"))?
        .cast(&DataType::Float64)?;
    let ys = df
        .column("y")
        .with_context(|| format!("{path}: missing column y"))?
        .cast(&DataType::Float64)?;
    let mut pts = Vec::with_capacity(df.height());
    for (x, y) in xs.f64()?.into_iter().zip(ys.f64()?.into_iter()) {
        let (Some(x), Some(y)) = (x, y) else {
            bail!("{path}: null coordinate");
        };
        pts.push(Vec2::new(x, y));
    }
    Ok(Boundary::from_points(pts))
}

fn write_boundary_csv(path: &str, boundary: &Boundary) -> Result<()> {
    let xs: Vec<f64> = boundary.points().iter().map(|p| p.x).collect();
    let ys: Vec<f64> = boundary.points().iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    ensure_parent_dir(path)?;
    let file = std::fs::File::create(path).with_context(|| format!("creating {path}"))?;
    CsvWriter::new(file).finish(&mut df)?;
    Ok(())
}

fn write_json(path: &str, doc: &serde_json::Value) -> Result<()> {
    ensure_parent_dir(path)?;
    std::fs::write(path, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {path}"))?;
    Ok(())
}

fn ensure_parent_dir(path: &str) -> Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
