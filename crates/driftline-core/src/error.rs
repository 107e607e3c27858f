// File: crates/driftline-core/src/error.rs
// Summary: Validation failure taxonomy for the refresh pipeline.

use thiserror::Error;

/// Everything that can stop a refresh from producing rows.
///
/// All variants are recoverable: the refresh loop logs them and leaves the
/// surface blank. Nothing here propagates to the host as a fault.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    /// The payload has no data views, no categorical columns, or no metadata.
    #[error("no data to draw: missing data views, categorical columns, or metadata")]
    MissingData,
    /// The first category column is not declared date/time, or a cell does
    /// not decode as its declared type.
    #[error("category is incorrect data type: {0}")]
    TypeMismatch(String),
    /// The first category and value columns are not index-aligned.
    #[error("category column has {categories} entries but value column has {values}")]
    LengthMismatch { categories: usize, values: usize },
}
