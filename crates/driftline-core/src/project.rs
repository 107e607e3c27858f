// File: crates/driftline-core/src/project.rs
// Summary: Validation gates and row projection from the host payload.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::data::{Categorical, DataPayload, Primitive};
use crate::error::ValidationFailure;

/// One plottable point: a timestamp paired with its measure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Row {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

/// Runs the validation gates, then projects the first category/value column
/// pair into an ordered row sequence.
///
/// Gates, each short-circuiting:
/// 1. presence: a data view with categories, values, and metadata exists;
/// 2. type: the first category column is declared date/time;
/// 3. length: the two projected columns are index-aligned.
///
/// Ordering is preserved from the input; nothing is sorted or deduplicated.
pub fn project_rows(payload: &DataPayload) -> Result<Vec<Row>, ValidationFailure> {
    let categorical = presence_gate(payload)?;
    let category = &categorical.categories[0];

    if !category.source.kind.date_time {
        return Err(ValidationFailure::TypeMismatch(format!(
            "column '{}' is not declared date/time",
            category.source.display_name
        )));
    }

    let measure = &categorical.values[0];
    if category.values.len() != measure.values.len() {
        return Err(ValidationFailure::LengthMismatch {
            categories: category.values.len(),
            values: measure.values.len(),
        });
    }

    let mut rows = Vec::with_capacity(category.values.len());
    for (idx, (cat, val)) in category.values.iter().zip(&measure.values).enumerate() {
        rows.push(Row {
            timestamp: decode_timestamp(cat, idx)?,
            value: decode_value(val, idx)?,
        });
    }
    Ok(rows)
}

/// Presence gate. Returns the first view's categorical shape when drawable.
fn presence_gate(payload: &DataPayload) -> Result<&Categorical, ValidationFailure> {
    let view = payload
        .data_views
        .first()
        .ok_or(ValidationFailure::MissingData)?;
    let categorical = view
        .categorical
        .as_ref()
        .ok_or(ValidationFailure::MissingData)?;
    if categorical.categories.is_empty()
        || categorical.values.is_empty()
        || view.metadata.is_none()
    {
        return Err(ValidationFailure::MissingData);
    }
    Ok(categorical)
}

/// Decodes a category cell into an instant. Hosts ship dates either as text
/// (RFC 3339 or plain `YYYY-MM-DD`) or as pre-serialized epoch milliseconds.
fn decode_timestamp(cell: &Primitive, row: usize) -> Result<DateTime<Utc>, ValidationFailure> {
    match cell {
        Primitive::Text(s) => parse_instant(s).ok_or_else(|| {
            ValidationFailure::TypeMismatch(format!("row {row}: '{s}' is not a date/time"))
        }),
        Primitive::Number(ms) if ms.is_finite() => {
            Utc.timestamp_millis_opt(*ms as i64).single().ok_or_else(|| {
                ValidationFailure::TypeMismatch(format!(
                    "row {row}: {ms} is out of range for an epoch timestamp"
                ))
            })
        }
        other => Err(ValidationFailure::TypeMismatch(format!(
            "row {row}: {other:?} is not a date/time"
        ))),
    }
}

fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Decodes a measure cell. The row type carries real numbers only, so
/// null and non-finite cells are rejected rather than carried as NaN.
fn decode_value(cell: &Primitive, row: usize) -> Result<f64, ValidationFailure> {
    match cell {
        Primitive::Number(v) if v.is_finite() => Ok(*v),
        other => Err(ValidationFailure::TypeMismatch(format!(
            "row {row}: {other:?} is not a finite number"
        ))),
    }
}
