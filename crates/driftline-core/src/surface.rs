// File: crates/driftline-core/src/surface.rs
// Summary: Retained scene surface, cleared and rebuilt on every refresh.

/// A node in the rebuilt scene.
///
/// Coordinates are plot-space; the surface origin carries the margin
/// translate into viewport space.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    /// A straight axis segment.
    AxisLine { from: (f64, f64), to: (f64, f64) },
    /// A tick stub at `at`, `len` pixels long. Horizontal ticks extend left
    /// from the value axis; vertical ticks extend down from the time axis.
    Tick {
        at: (f64, f64),
        horizontal: bool,
        len: f64,
    },
    /// The data polyline, one vertex per row.
    Polyline {
        points: Vec<(f64, f64)>,
        color: String,
        stroke_width: f64,
    },
}

/// The visual's drawing surface.
///
/// The visual owns exactly one of these for its whole lifetime. Each refresh
/// discards the previous children and rebuilds from the current frame and
/// scales, so a failed refresh leaves it empty, never stale.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Surface {
    origin: (f64, f64),
    nodes: Vec<SceneNode>,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards all children and resets the origin.
    pub fn clear(&mut self) {
        self.origin = (0.0, 0.0);
        self.nodes.clear();
    }

    pub fn set_origin(&mut self, origin: (f64, f64)) {
        self.origin = origin;
    }

    pub fn push(&mut self, node: SceneNode) {
        self.nodes.push(node);
    }

    pub fn origin(&self) -> (f64, f64) {
        self.origin
    }

    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
