use anyhow::{bail, Result};

use super::TableSource;
use crate::data::model::FieldDescriptor;

// ---------------------------------------------------------------------------
// In-memory table – fixture-friendly TableSource
// ---------------------------------------------------------------------------

/// A table held entirely in memory. Used as a test fixture and as the
/// simplest possible [`TableSource`] implementation.
#[derive(Debug, Clone)]
pub struct MemoryTable {
    fields: Vec<FieldDescriptor>,
    rows: Vec<Vec<String>>,
}

impl MemoryTable {
    /// Build a table from column names and row-major cell text. Column `i`
    /// gets the synthetic field id `f{i}`.
    pub fn new<S: Into<String>>(columns: Vec<S>, rows: Vec<Vec<S>>) -> Self {
        let fields = columns
            .into_iter()
            .enumerate()
            .map(|(i, name)| FieldDescriptor::new(name, format!("f{i}")))
            .collect();
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        MemoryTable { fields, rows }
    }
}

impl TableSource for MemoryTable {
    fn fields(&self) -> Result<Vec<FieldDescriptor>> {
        Ok(self.fields.clone())
    }

    fn visible_row_ids(&self) -> Result<Vec<String>> {
        Ok((0..self.rows.len()).map(|i| i.to_string()).collect())
    }

    fn cell_text(&self, field_id: &str, row_id: &str) -> Result<String> {
        let Some(col) = self.fields.iter().position(|f| f.id == field_id) else {
            bail!("unknown field id '{field_id}'");
        };
        let row: usize = row_id.parse()?;
        let Some(cells) = self.rows.get(row) else {
            bail!("unknown row id '{row_id}'");
        };
        Ok(cells.get(col).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposes_fields_rows_and_cells() {
        let table = MemoryTable::new(
            vec!["date", "revenue"],
            vec![vec!["2024-01-01", "10"], vec!["2024-01-02", "20"]],
        );
        let fields = table.fields().unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].name, "date");
        assert_eq!(fields[0].id, "f0");

        assert_eq!(table.visible_row_ids().unwrap(), ["0", "1"]);
        assert_eq!(table.cell_text("f1", "1").unwrap(), "20");
        assert!(table.cell_text("bogus", "0").is_err());
        assert!(table.cell_text("f0", "99").is_err());
    }
}
