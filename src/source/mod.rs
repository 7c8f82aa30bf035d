/// Table sources: the narrow read interface the pipeline ingests from.
///
/// The pipeline never talks to a store directly. It sees an ordered field
/// list, an ordered list of visible row ids, and one cell's text at a time —
/// and treats that text as the sole source of truth for typing.
pub mod file;
pub mod memory;

use anyhow::Result;

use crate::data::model::FieldDescriptor;

/// Read access to a tabular store.
///
/// The pipeline calls [`cell_text`](TableSource::cell_text) once per
/// (row, field) pair in row-major order; implementations do not need to
/// cache or deduplicate.
pub trait TableSource {
    /// Ordered column descriptors, as presented to the user.
    fn fields(&self) -> Result<Vec<FieldDescriptor>>;

    /// Ids of the visible rows, in display order.
    fn visible_row_ids(&self) -> Result<Vec<String>>;

    /// The exact text stored in one cell.
    fn cell_text(&self, field_id: &str, row_id: &str) -> Result<String>;
}
