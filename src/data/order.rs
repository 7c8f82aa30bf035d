use std::cmp::Ordering;

use super::model::Record;

// ---------------------------------------------------------------------------
// Chronological orderer
// ---------------------------------------------------------------------------

/// Sort records by parsed date ascending and reassign indices.
///
/// The comparator treats any pair where either side lacks a parsed date as
/// equal, so rows without dates keep their relative order (the sort is
/// stable). Afterwards every `index` is overwritten with its new 1-based
/// position — this is the sole place indices are finalized, and downstream
/// stages treat `index` as authoritative.
pub fn sort_chronologically(records: &mut [Record]) {
    records.sort_by(|a, b| match (&a.parsed_date, &b.parsed_date) {
        (Some(da), Some(db)) => da.cmp(db),
        _ => Ordering::Equal,
    });

    for (pos, rec) in records.iter_mut().enumerate() {
        rec.index = pos + 1;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::data::normalize::normalize_cell;

    fn record(index: usize, date: Option<&str>, tag: &str) -> Record {
        let mut cells = BTreeMap::new();
        let mut parsed_date = None;
        if let Some(d) = date {
            let (value, instant) = normalize_cell(d);
            parsed_date = instant;
            cells.insert("day".to_string(), value);
        }
        cells.insert("tag".to_string(), crate::data::model::CellValue::Text(tag.into()));
        Record {
            index,
            cells,
            parsed_date,
            cluster: None,
        }
    }

    fn tags(records: &[Record]) -> Vec<String> {
        records.iter().map(|r| r.cell("tag").unwrap().to_string()).collect()
    }

    #[test]
    fn sorts_dated_records_ascending_and_reindexes() {
        let mut records = vec![
            record(1, Some("2024-03-01"), "c"),
            record(2, Some("2024-01-01"), "a"),
            record(3, Some("2024-02-01"), "b"),
        ];
        sort_chronologically(&mut records);
        assert_eq!(tags(&records), ["a", "b", "c"]);
        let indices: Vec<usize> = records.iter().map(|r| r.index).collect();
        assert_eq!(indices, [1, 2, 3]);
    }

    #[test]
    fn undated_records_keep_relative_order() {
        let mut records = vec![
            record(1, None, "first"),
            record(2, None, "second"),
            record(3, None, "third"),
        ];
        sort_chronologically(&mut records);
        assert_eq!(tags(&records), ["first", "second", "third"]);
    }

    #[test]
    fn indices_are_dense_from_one_after_sort() {
        let mut records = vec![
            record(7, Some("2024-06-01"), "x"),
            record(9, None, "y"),
            record(2, Some("2024-05-01"), "z"),
        ];
        sort_chronologically(&mut records);
        let mut indices: Vec<usize> = records.iter().map(|r| r.index).collect();
        indices.sort_unstable();
        assert_eq!(indices, [1, 2, 3]);
    }
}
