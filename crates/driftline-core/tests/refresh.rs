// File: crates/driftline-core/tests/refresh.rs
// Purpose: End-to-end refresh behavior: clearing, scene assembly, settings plumbing.

use driftline_core::{
    Categorical, CategoryColumn, ColumnSource, DataPayload, DataView, LineChartVisual, Metadata,
    Primitive, SceneNode, TypeFlags, UpdateOptions, ValueColumn, Viewport,
};

fn daily_payload(days: &[(&str, f64)]) -> DataPayload {
    DataPayload::with_view(DataView {
        categorical: Some(Categorical {
            categories: vec![CategoryColumn {
                source: ColumnSource {
                    display_name: "Date".to_string(),
                    kind: TypeFlags {
                        date_time: true,
                        ..Default::default()
                    },
                },
                values: days
                    .iter()
                    .map(|(d, _)| Primitive::Text((*d).to_string()))
                    .collect(),
            }],
            values: vec![ValueColumn {
                source: ColumnSource::default(),
                values: days.iter().map(|(_, v)| Primitive::Number(*v)).collect(),
            }],
        }),
        metadata: Some(Metadata::default()),
    })
}

fn options() -> UpdateOptions {
    UpdateOptions {
        viewport: Viewport::new(500.0, 300.0),
        ..Default::default()
    }
}

fn polyline(visual: &LineChartVisual) -> Option<&SceneNode> {
    visual
        .surface()
        .nodes()
        .iter()
        .find(|n| matches!(n, SceneNode::Polyline { .. }))
}

#[test]
fn valid_refresh_builds_axes_and_polyline() {
    let mut visual = LineChartVisual::new();
    visual.update(
        &daily_payload(&[("2024-01-01", 10.0), ("2024-01-02", 20.0), ("2024-01-03", 15.0)]),
        &options(),
    );

    let surface = visual.surface();
    assert_eq!(surface.origin(), (60.0, 10.0));

    let axis_lines = surface
        .nodes()
        .iter()
        .filter(|n| matches!(n, SceneNode::AxisLine { .. }))
        .count();
    assert_eq!(axis_lines, 2);

    let Some(SceneNode::Polyline { points, .. }) = polyline(&visual) else {
        panic!("expected a polyline node");
    };
    assert_eq!(points.len(), 3);
    // First point: min timestamp at x=0, value 10 (domain min) at the bottom.
    assert!((points[0].0 - 0.0).abs() < 1e-9);
    assert!((points[0].1 - 260.0).abs() < 1e-9);
    // Peak value lands at the top of the plot.
    assert!((points[1].1 - 0.0).abs() < 1e-9);
}

#[test]
fn failed_refresh_clears_previous_scene() {
    let mut visual = LineChartVisual::new();
    visual.update(
        &daily_payload(&[("2024-01-01", 1.0), ("2024-01-02", 2.0)]),
        &options(),
    );
    assert!(!visual.surface().is_empty());

    // Second refresh with an undrawable payload must leave nothing behind.
    visual.update(&DataPayload::default(), &options());
    assert!(visual.surface().is_empty());
    assert_eq!(visual.surface().origin(), (0.0, 0.0));
}

#[test]
fn empty_columns_leave_surface_blank() {
    let mut visual = LineChartVisual::new();
    visual.update(&daily_payload(&[]), &options());
    assert!(visual.surface().is_empty());
}

#[test]
fn settings_blob_styles_the_polyline() {
    let mut visual = LineChartVisual::new();
    let opts = UpdateOptions {
        viewport: Viewport::new(500.0, 300.0),
        settings_json: Some(r#"{"line":{"color":"#ff0000","strokeWidth":3.0}}"#.to_string()),
        ..Default::default()
    };
    visual.update(&daily_payload(&[("2024-01-01", 1.0), ("2024-01-02", 2.0)]), &opts);

    let Some(SceneNode::Polyline {
        color,
        stroke_width,
        ..
    }) = polyline(&visual)
    else {
        panic!("expected a polyline node");
    };
    assert_eq!(color, "#ff0000");
    assert_eq!(*stroke_width, 3.0);
}

#[test]
fn malformed_settings_fall_back_to_defaults() {
    let mut visual = LineChartVisual::new();
    let opts = UpdateOptions {
        viewport: Viewport::new(500.0, 300.0),
        settings_json: Some("{not json".to_string()),
        ..Default::default()
    };
    visual.update(&daily_payload(&[("2024-01-01", 1.0), ("2024-01-02", 2.0)]), &opts);

    let Some(SceneNode::Polyline { color, .. }) = polyline(&visual) else {
        panic!("expected a polyline node");
    };
    assert_eq!(color, "#4682b4");
}

#[test]
fn enumeration_hook_reports_current_group_values() {
    let mut visual = LineChartVisual::new();
    let opts = UpdateOptions {
        viewport: Viewport::new(500.0, 300.0),
        settings_json: Some(r#"{"line":{"color":"#112233"}}"#.to_string()),
        ..Default::default()
    };
    visual.update(&daily_payload(&[("2024-01-01", 1.0)]), &opts);

    let line = visual.enumerate_properties("line").unwrap();
    assert_eq!(line["color"], "#112233");
    // Unspecified fields enumerate at their defaults.
    assert_eq!(line["strokeWidth"], 1.5);
    assert!(visual.enumerate_properties("axis").is_none());
}

#[test]
fn host_json_payload_decodes_and_draws() {
    let raw = r#"{
        "dataViews": [{
            "categorical": {
                "categories": [{
                    "source": {"displayName": "Date", "type": {"dateTime": true}},
                    "values": ["2024-03-01", "2024-03-02"]
                }],
                "values": [{
                    "source": {"displayName": "Sales", "type": {"numeric": true}},
                    "values": [12.5, 14.0]
                }]
            },
            "metadata": {"columns": []}
        }]
    }"#;
    let payload: DataPayload = serde_json::from_str(raw).unwrap();

    let mut visual = LineChartVisual::new();
    visual.update(&payload, &options());
    let Some(SceneNode::Polyline { points, .. }) = polyline(&visual) else {
        panic!("expected a polyline node");
    };
    assert_eq!(points.len(), 2);
}
