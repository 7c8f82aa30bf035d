use super::model::{CellValue, Record};

// ---------------------------------------------------------------------------
// Coordinate vectorizer
// ---------------------------------------------------------------------------

/// A resolved plot axis: either a named record field or the row sequence
/// itself (the "index" pseudo-field offered alongside real columns).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Axis {
    Field(String),
    RowIndex,
}

/// Derive one 2-D coordinate per record for the two chosen axes.
///
/// Clustering needs a metric numeric space, so an axis whose value is not
/// numeric (text, date, or missing) falls back to the record's `index` —
/// the row's rank acts as a proxy coordinate. Any coordinate that is still
/// not finite is coerced to 0. Output is positionally aligned 1:1 with the
/// input records; nothing here may reorder either side.
pub fn vectorize(records: &[Record], x_axis: &Axis, y_axis: &Axis) -> Vec<[f64; 2]> {
    records
        .iter()
        .map(|rec| {
            [
                finite_or_zero(resolve(rec, x_axis)),
                finite_or_zero(resolve(rec, y_axis)),
            ]
        })
        .collect()
}

fn resolve(rec: &Record, axis: &Axis) -> f64 {
    match axis {
        Axis::RowIndex => rec.index as f64,
        Axis::Field(name) => match rec.cell(name) {
            Some(CellValue::Number(v)) => *v,
            _ => rec.index as f64,
        },
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}
