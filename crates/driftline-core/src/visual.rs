// File: crates/driftline-core/src/visual.rs
// Summary: The visual itself: one refresh = settings, gates, projection, geometry, scene.

use tracing::{debug, warn};

use crate::data::DataPayload;
use crate::frame::ChartFrame;
use crate::project::project_rows;
use crate::scale::Scales;
use crate::settings::VisualSettings;
use crate::surface::{SceneNode, Surface};
use crate::ticks::tick_positions;
use crate::types::{Insets, Viewport};

const X_TICKS: usize = 10;
const Y_TICKS: usize = 6;
const TICK_LEN: f64 = 6.0;

/// Host-supplied inputs for one refresh.
#[derive(Clone, Debug, Default)]
pub struct UpdateOptions {
    pub viewport: Viewport,
    pub insets: Insets,
    /// Serialized settings blob; understood only by the settings module.
    pub settings_json: Option<String>,
}

/// A time-series line chart visual embedded in a reporting host.
///
/// The host constructs it once, then drives it with [`update`] on every
/// refresh. The visual owns its surface; everything under it is rebuilt per
/// refresh, and a refresh that cannot draw leaves it blank.
///
/// [`update`]: LineChartVisual::update
#[derive(Clone, Debug, Default)]
pub struct LineChartVisual {
    surface: Surface,
    settings: VisualSettings,
}

impl LineChartVisual {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one refresh cycle against a host payload.
    ///
    /// The surface is always cleared first, so a validation failure leaves an
    /// empty scene rather than a stale one. Failures are logged and
    /// swallowed; nothing here panics or propagates to the host.
    pub fn update(&mut self, payload: &DataPayload, opts: &UpdateOptions) {
        self.settings = VisualSettings::parse(opts.settings_json.as_deref());
        self.surface.clear();

        let rows = match project_rows(payload) {
            Ok(rows) => rows,
            Err(failure) => {
                warn!(%failure, "refresh skipped: payload failed validation");
                return;
            }
        };

        let frame = ChartFrame::from_viewport(opts.viewport, opts.insets);
        let Some(scales) = Scales::from_rows(&rows, &frame) else {
            debug!("refresh skipped: no rows to draw");
            return;
        };

        self.surface.set_origin(frame.origin());
        self.push_axes(&frame);

        let points = rows
            .iter()
            .map(|row| (scales.time.to_px(row.timestamp), scales.value.to_px(row.value)))
            .collect();
        self.surface.push(SceneNode::Polyline {
            points,
            color: self.settings.line.color.clone(),
            stroke_width: self.settings.line.stroke_width,
        });
        debug!(rows = rows.len(), "refresh complete");
    }

    /// Property-pane hook: current (or default) values for a named group.
    /// Delegates entirely to the settings module.
    pub fn enumerate_properties(&self, group: &str) -> Option<serde_json::Value> {
        self.settings.enumerate(group)
    }

    /// The retained scene built by the last refresh.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Axis lines along the bottom and left plot edges, plus tick stubs.
    fn push_axes(&mut self, frame: &ChartFrame) {
        let w = frame.plot_width;
        let h = frame.plot_height;

        self.surface.push(SceneNode::AxisLine {
            from: (0.0, h),
            to: (w, h),
        });
        self.surface.push(SceneNode::AxisLine {
            from: (0.0, 0.0),
            to: (0.0, h),
        });

        for x in tick_positions(0.0, w, X_TICKS) {
            self.surface.push(SceneNode::Tick {
                at: (x, h),
                horizontal: false,
                len: TICK_LEN,
            });
        }
        for y in tick_positions(0.0, h, Y_TICKS) {
            self.surface.push(SceneNode::Tick {
                at: (0.0, y),
                horizontal: true,
                len: TICK_LEN,
            });
        }
    }
}
