use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

// ---------------------------------------------------------------------------
// FieldDescriptor – one column as known to the data source
// ---------------------------------------------------------------------------

/// A single column of the source table. `id` is the source's opaque column
/// identity; `name` is the display name shown to the user. Names are not
/// guaranteed unique, so axis selection always goes through `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub id: String,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        FieldDescriptor {
            name: name.into(),
            id: id.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// RawRecord – one row exactly as stored
// ---------------------------------------------------------------------------

/// One visible row as fetched from the source: field name → cell text.
pub type RawRecord = BTreeMap<String, String>;

// ---------------------------------------------------------------------------
// CellValue – a single cell after type inference
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value after normalization.
///
/// Date cells keep their original ISO-8601 text so the renderer can show the
/// cell exactly as stored; the parsed instant lives on the [`Record`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Date(String),
    Text(String),
}

impl CellValue {
    /// The numeric value, if this cell was classified as a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, CellValue::Number(_))
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(v) => write!(f, "{v}"),
            CellValue::Date(s) | CellValue::Text(s) => write!(f, "{s}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the pipeline
// ---------------------------------------------------------------------------

/// One row after type inference.
///
/// `index` is the engine-assigned 1-based sequence number. It is provisional
/// until the chronological orderer runs; the orderer is the only place where
/// indices are finalized.
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    /// 1-based, dense; reassigned whenever ordering changes.
    pub index: usize,

    /// Normalized cells, keyed by field display name.
    #[serde(flatten)]
    pub cells: BTreeMap<String, CellValue>,

    /// Parsed instant of the last date-classified cell in this row, if any.
    /// The raw date text stays in `cells` untouched.
    #[serde(rename = "parsedDate", skip_serializing_if = "Option::is_none")]
    pub parsed_date: Option<NaiveDateTime>,

    /// Cluster label, set exactly once per pipeline run. `-1` marks noise
    /// under density-based clustering; `None` means clustering has not run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<i64>,
}

impl Record {
    /// Look up a cell by field display name.
    pub fn cell(&self, name: &str) -> Option<&CellValue> {
        self.cells.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_value_display_roundtrips_text() {
        assert_eq!(CellValue::Text("abc".into()).to_string(), "abc");
        assert_eq!(CellValue::Date("2024-01-05".into()).to_string(), "2024-01-05");
        assert_eq!(CellValue::Number(1.5).to_string(), "1.5");
    }

    #[test]
    fn record_serializes_flat_with_index() {
        let mut cells = BTreeMap::new();
        cells.insert("revenue".to_string(), CellValue::Number(10.0));
        cells.insert("note".to_string(), CellValue::Text("q1".into()));
        let rec = Record {
            index: 3,
            cells,
            parsed_date: None,
            cluster: Some(1),
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["index"], 3);
        assert_eq!(json["revenue"], 10.0);
        assert_eq!(json["note"], "q1");
        assert_eq!(json["cluster"], 1);
        assert!(json.get("parsedDate").is_none());
    }
}
