// File: crates/driftline-core/src/lib.rs
// Summary: Core library entry point; exports the refresh pipeline and geometry API.

pub mod data;
pub mod error;
pub mod frame;
pub mod project;
pub mod scale;
pub mod settings;
pub mod surface;
pub mod ticks;
pub mod types;
pub mod visual;

pub use data::{
    Categorical, CategoryColumn, ColumnSource, DataPayload, DataView, Metadata, Primitive,
    TypeFlags, ValueColumn,
};
pub use error::ValidationFailure;
pub use frame::ChartFrame;
pub use project::{project_rows, Row};
pub use scale::{Scales, TimeScale, ValueScale};
pub use settings::{LineSettings, VisualSettings};
pub use surface::{SceneNode, Surface};
pub use types::{Insets, Viewport};
pub use visual::{LineChartVisual, UpdateOptions};
