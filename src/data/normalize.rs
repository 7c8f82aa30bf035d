use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::model::{CellValue, RawRecord, Record};

// ---------------------------------------------------------------------------
// Type normalizer – classify one raw cell string
// ---------------------------------------------------------------------------

/// Classify one raw cell string as number, date, or residual text.
///
/// Precedence: Number first, then Date, then Text. A candidate number must
/// parse as a finite float AND contain no hyphen: dashed date components
/// such as `2024-01-05` would otherwise be misread as a numeric prefix.
/// The trade-off of the hyphen heuristic is that a bare negative number
/// degrades to text (covered as a known limitation in the tests).
///
/// Returns the classified value and, for dates, the parsed instant. The raw
/// date text is preserved in the value itself so the original cell stays
/// intact for display. Never fails: anything unrecognized is text.
pub fn normalize_cell(raw: &str) -> (CellValue, Option<NaiveDateTime>) {
    let trimmed = raw.trim();

    if !trimmed.contains('-') {
        if let Ok(n) = trimmed.parse::<f64>() {
            if n.is_finite() {
                return (CellValue::Number(n), None);
            }
        }
    }

    if let Some(instant) = parse_iso8601(trimmed) {
        return (CellValue::Date(trimmed.to_string()), Some(instant));
    }

    (CellValue::Text(raw.to_string()), None)
}

/// Parse a strict ISO-8601 date or date-time.
///
/// Accepted forms: `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM[:SS[.frac]]` (also with a
/// space instead of `T`), and full RFC 3339 timestamps with an offset.
fn parse_iso8601(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    const FORMATS: [&str; 6] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    for fmt in FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

// ---------------------------------------------------------------------------
// Record builder – one raw row → one normalized record
// ---------------------------------------------------------------------------

/// Build one [`Record`] from a raw row, normalizing every cell and stamping
/// the provisional 1-based sequence index from ingestion order.
///
/// When several cells in the row are dates, the last one (in field-name
/// order) wins the record's `parsed_date` slot.
pub fn build_record(raw: &RawRecord, index: usize) -> Record {
    let mut cells = BTreeMap::new();
    let mut parsed_date = None;

    for (name, text) in raw {
        let (value, instant) = normalize_cell(text);
        if instant.is_some() {
            parsed_date = instant;
        }
        cells.insert(name.clone(), value);
    }

    Record {
        index,
        cells,
        parsed_date,
        cluster: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(s: &str) -> CellValue {
        normalize_cell(s).0
    }

    #[test]
    fn plain_numbers_classify_as_number() {
        assert_eq!(classify("10"), CellValue::Number(10.0));
        assert_eq!(classify("3.25"), CellValue::Number(3.25));
        assert_eq!(classify(" 42 "), CellValue::Number(42.0));
        assert_eq!(classify("1e5"), CellValue::Number(1e5));
    }

    #[test]
    fn non_finite_literals_stay_text() {
        assert_eq!(classify("NaN"), CellValue::Text("NaN".into()));
        assert_eq!(classify("inf"), CellValue::Text("inf".into()));
    }

    #[test]
    fn iso_dates_classify_as_date_and_parse() {
        let (value, instant) = normalize_cell("2024-01-05");
        assert_eq!(value, CellValue::Date("2024-01-05".into()));
        let instant = instant.unwrap();
        assert_eq!(instant.date(), NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());

        let (value, instant) = normalize_cell("2024-01-05T10:30:00");
        assert_eq!(value, CellValue::Date("2024-01-05T10:30:00".into()));
        assert!(instant.is_some());

        let (_, instant) = normalize_cell("2024-01-05T10:30:00+02:00");
        assert!(instant.is_some());
    }

    #[test]
    fn malformed_dates_stay_text() {
        assert_eq!(classify("2024-13-05"), CellValue::Text("2024-13-05".into()));
        assert_eq!(classify("05/01/2024"), CellValue::Text("05/01/2024".into()));
        assert_eq!(classify("not a date"), CellValue::Text("not a date".into()));
    }

    /// Known limitation of the hyphen heuristic: a bare negative number
    /// contains a hyphen, fails the date grammar, and degrades to text.
    #[test]
    fn negative_numbers_degrade_to_text() {
        assert_eq!(classify("-5"), CellValue::Text("-5".into()));
        assert_eq!(classify("1e-5"), CellValue::Text("1e-5".into()));
    }

    #[test]
    fn normalization_is_idempotent() {
        // Re-normalizing a value's display text yields the same value.
        for s in ["10", "3.25", "2024-01-05", "hello"] {
            let first = classify(s);
            let again = classify(&first.to_string());
            assert_eq!(first, again, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn build_record_normalizes_every_cell() {
        let mut raw = RawRecord::new();
        raw.insert("amount".into(), "12.5".into());
        raw.insert("day".into(), "2024-03-01".into());
        raw.insert("label".into(), "west".into());

        let rec = build_record(&raw, 4);
        assert_eq!(rec.index, 4);
        assert_eq!(rec.cell("amount"), Some(&CellValue::Number(12.5)));
        assert_eq!(rec.cell("day"), Some(&CellValue::Date("2024-03-01".into())));
        assert_eq!(rec.cell("label"), Some(&CellValue::Text("west".into())));
        assert!(rec.parsed_date.is_some());
        assert!(rec.cluster.is_none());
    }

    #[test]
    fn build_record_without_dates_has_no_instant() {
        let mut raw = RawRecord::new();
        raw.insert("amount".into(), "1".into());
        let rec = build_record(&raw, 1);
        assert!(rec.parsed_date.is_none());
    }
}
