// File: crates/driftline-core/src/settings.rs
// Summary: Host-serialized settings: parse with defaults, enumerate for the property pane.

use serde::{Deserialize, Serialize};

/// Styling for the data line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineSettings {
    pub color: String,
    pub stroke_width: f64,
}

impl Default for LineSettings {
    fn default() -> Self {
        Self {
            color: "#4682b4".to_string(),
            stroke_width: 1.5,
        }
    }
}

/// The full settings object understood by this visual.
///
/// Parsed fresh from the host blob on every refresh and replaced wholesale;
/// never mutated in place between refreshes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VisualSettings {
    pub line: LineSettings,
}

impl VisualSettings {
    /// Parses the serialized blob, falling back to defaults when it is
    /// absent or malformed. A malformed blob is logged, not surfaced.
    pub fn parse(blob: Option<&str>) -> Self {
        match blob {
            None => Self::default(),
            Some(raw) => match serde_json::from_str(raw) {
                Ok(settings) => settings,
                Err(err) => {
                    tracing::debug!(%err, "settings blob malformed; using defaults");
                    Self::default()
                }
            },
        }
    }

    /// Enumeration hook for the host property pane: current values for a
    /// named property group, or `None` for an unknown group.
    pub fn enumerate(&self, group: &str) -> Option<serde_json::Value> {
        match group {
            "line" => serde_json::to_value(&self.line).ok(),
            _ => None,
        }
    }
}
