// File: crates/driftline-core/src/scale.rs
// Summary: Time (X) and value (Y) scale transforms for one refresh.

use chrono::{DateTime, Utc};

use crate::frame::ChartFrame;
use crate::project::Row;

/// Horizontal time scale mapping [start, end] onto [0, width].
///
/// Millisecond-proportional: equal time spans cover equal pixel spans.
/// A single-instant domain maps every input to the midpoint of the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    width: f64,
}

impl TimeScale {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, width: f64) -> Self {
        Self { start, end, width }
    }

    #[inline]
    pub fn to_px(&self, t: DateTime<Utc>) -> f64 {
        let span = (self.end - self.start).num_milliseconds() as f64;
        if span == 0.0 {
            return self.width * 0.5;
        }
        (t - self.start).num_milliseconds() as f64 / span * self.width
    }

    pub fn domain(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        (self.start, self.end)
    }
}

/// Vertical value scale mapping [vmin, vmax] onto [height, 0].
///
/// Inverted: pixel coordinates grow downward while values grow upward.
/// A single-value domain maps to the midpoint of the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    vmin: f64,
    vmax: f64,
    height: f64,
}

impl ValueScale {
    pub fn new(vmin: f64, vmax: f64, height: f64) -> Self {
        Self { vmin, vmax, height }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        let span = self.vmax - self.vmin;
        if span == 0.0 {
            return self.height * 0.5;
        }
        self.height - (v - self.vmin) / span * self.height
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.vmin, self.vmax)
    }
}

/// The scale pair for one refresh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scales {
    pub time: TimeScale,
    pub value: ValueScale,
}

impl Scales {
    /// Infers both domains from the row sequence and instantiates the scales
    /// over the frame's plot area.
    ///
    /// Returns `None` for an empty sequence: no rows is not an error, just
    /// nothing to draw.
    pub fn from_rows(rows: &[Row], frame: &ChartFrame) -> Option<Self> {
        let first = rows.first()?;
        let mut t_min = first.timestamp;
        let mut t_max = first.timestamp;
        let mut v_min = first.value;
        let mut v_max = first.value;
        for row in &rows[1..] {
            t_min = t_min.min(row.timestamp);
            t_max = t_max.max(row.timestamp);
            v_min = v_min.min(row.value);
            v_max = v_max.max(row.value);
        }
        Some(Self {
            time: TimeScale::new(t_min, t_max, frame.plot_width),
            value: ValueScale::new(v_min, v_max, frame.plot_height),
        })
    }
}
