// File: crates/demo/src/main.rs
// Summary: Demo loads a (date, value) CSV, runs one refresh, and dumps the scene as SVG.

use anyhow::{Context, Result};
use driftline_core::{
    Categorical, CategoryColumn, ColumnSource, DataPayload, DataView, LineChartVisual, Metadata,
    Primitive, SceneNode, Surface, TypeFlags, UpdateOptions, ValueColumn, Viewport,
};
use std::path::{Path, PathBuf};

const VIEW_W: f64 = 640.0;
const VIEW_H: f64 = 400.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_daily_values.csv".to_string());
    let path = PathBuf::from(&raw);
    if !path.exists() {
        anyhow::bail!("file not found: {}", path.display());
    }
    println!("Using input file: {}", path.display());

    let payload = load_payload_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;

    let mut visual = LineChartVisual::new();
    let opts = UpdateOptions {
        viewport: Viewport::new(VIEW_W, VIEW_H),
        ..Default::default()
    };
    visual.update(&payload, &opts);

    let surface = visual.surface();
    if surface.is_empty() {
        anyhow::bail!("nothing to draw - check the CSV headers and values.");
    }
    println!("Built {} scene nodes", surface.nodes().len());

    let out = out_name(&path);
    std::fs::write(&out, surface_to_svg(surface, VIEW_W, VIEW_H))
        .with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// Load a two-column (date, value) CSV into a host-shaped payload.
fn load_payload_csv(path: &Path) -> Result<DataPayload> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    println!("Headers: {:?}", headers);

    let idx = |names: &[&str]| -> Option<usize> {
        for (i, h) in headers.iter().enumerate() {
            for want in names {
                if h == want {
                    return Some(i);
                }
            }
        }
        None
    };

    let i_date = idx(&["date", "time", "timestamp", "datetime"])
        .context("no date column found (expected date/time/timestamp/datetime)")?;
    let i_value = idx(&["value", "close", "y", "measure"])
        .context("no value column found (expected value/close/y/measure)")?;

    let mut dates = Vec::new();
    let mut values = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let date = rec.get(i_date).map(str::trim).unwrap_or_default();
        let value = rec
            .get(i_value)
            .and_then(|s| s.trim().parse::<f64>().ok());
        // Skip incomplete rows rather than shipping undecodable cells.
        if let Some(value) = value {
            if !date.is_empty() {
                dates.push(Primitive::Text(date.to_string()));
                values.push(Primitive::Number(value));
            }
        }
    }
    println!("Loaded {} rows", dates.len());

    Ok(DataPayload::with_view(DataView {
        categorical: Some(Categorical {
            categories: vec![CategoryColumn {
                source: ColumnSource {
                    display_name: "Date".to_string(),
                    kind: TypeFlags {
                        date_time: true,
                        ..Default::default()
                    },
                },
                values: dates,
            }],
            values: vec![ValueColumn {
                source: ColumnSource {
                    display_name: "Value".to_string(),
                    kind: TypeFlags {
                        numeric: true,
                        ..Default::default()
                    },
                },
                values,
            }],
        }),
        metadata: Some(Metadata::default()),
    }))
}

/// Produce output file name like target/out/chart_<stem>.svg
fn out_name(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("chart_{}.svg", stem));
    out
}

/// Minimal SVG dump of the retained scene.
fn surface_to_svg(surface: &Surface, width: f64, height: f64) -> String {
    let (ox, oy) = surface.origin();
    let mut out = String::new();
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}">"#
    ));
    out.push('\n');
    out.push_str(&format!(r#"<g transform="translate({ox},{oy})">"#));
    out.push('\n');

    for node in surface.nodes() {
        match node {
            SceneNode::AxisLine { from, to } => {
                out.push_str(&format!(
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="black"/>"#,
                    from.0, from.1, to.0, to.1
                ));
                out.push('\n');
            }
            SceneNode::Tick {
                at,
                horizontal,
                len,
            } => {
                let (x2, y2) = if *horizontal {
                    (at.0 - len, at.1)
                } else {
                    (at.0, at.1 + len)
                };
                out.push_str(&format!(
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="black"/>"#,
                    at.0, at.1, x2, y2
                ));
                out.push('\n');
            }
            SceneNode::Polyline {
                points,
                color,
                stroke_width,
            } => {
                let mut d = String::new();
                for (i, (x, y)) in points.iter().enumerate() {
                    if i == 0 {
                        d.push_str(&format!("M{x},{y}"));
                    } else {
                        d.push_str(&format!(" L{x},{y}"));
                    }
                }
                out.push_str(&format!(
                    r#"<path d="{d}" fill="none" stroke="{color}" stroke-width="{stroke_width}"/>"#
                ));
                out.push('\n');
            }
        }
    }

    out.push_str("</g>\n</svg>\n");
    out
}
