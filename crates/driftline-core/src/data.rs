// File: crates/driftline-core/src/data.rs
// Summary: Loosely-shaped host payload: data views, categorical columns, raw cell values.

use serde::{Deserialize, Serialize};

/// A raw cell value as shipped by the host.
///
/// The host boundary is JSON-shaped, so a cell can be null, a bool, a number,
/// or text. Nothing downstream of the validation gates ever sees this type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Primitive {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

/// Host type descriptor flags for a column. Only `date_time` is interpreted
/// by this core; the rest are carried for the property pane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypeFlags {
    pub date_time: bool,
    pub numeric: bool,
    pub text: bool,
}

/// Column metadata as declared by the host.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColumnSource {
    pub display_name: String,
    #[serde(rename = "type")]
    pub kind: TypeFlags,
}

/// An ordered category column (axis keys).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryColumn {
    pub source: ColumnSource,
    pub values: Vec<Primitive>,
}

/// An ordered value column (measures), index-aligned with the categories.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueColumn {
    pub source: ColumnSource,
    pub values: Vec<Primitive>,
}

/// The categorical shape of one data view.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Categorical {
    pub categories: Vec<CategoryColumn>,
    pub values: Vec<ValueColumn>,
}

/// Descriptive info attached to a data view. Existence-checked by the
/// presence gate but not further interpreted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub columns: Vec<ColumnSource>,
}

/// One data view. Every part may be absent; the gates decide drawability.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataView {
    pub categorical: Option<Categorical>,
    pub metadata: Option<Metadata>,
}

/// The host-shaped refresh payload. Only the first data view is consulted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DataPayload {
    pub data_views: Vec<DataView>,
}

impl DataPayload {
    /// Wrap a single data view, the shape hosts ship in practice.
    pub fn with_view(view: DataView) -> Self {
        Self {
            data_views: vec![view],
        }
    }
}
