use thiserror::Error;

// ---------------------------------------------------------------------------
// Pipeline error taxonomy
// ---------------------------------------------------------------------------

/// Failures a pipeline run can abort with. All are local and synchronous;
/// nothing is retried. Cell-level type ambiguity is deliberately absent:
/// unclassifiable text degrades to a plain string and is never surfaced.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The primary axis field's sample value is not numeric. Raised before
    /// any cell is fetched, so a bad run is the cheapest possible failure.
    #[error("field '{field}' is not numeric: first value is '{sample}'")]
    Precheck { field: String, sample: String },

    /// The source reports no visible rows.
    #[error("table has no visible rows")]
    EmptyTable,

    /// An axis refers to a field id the source does not list.
    #[error("no field with id '{0}'")]
    UnknownField(String),

    /// k / max-iterations / radius / min-points outside their valid domain.
    /// Raised before any label computation runs.
    #[error("invalid clustering parameters: {0}")]
    InvalidClusteringParameters(String),

    /// Regression line width or opacity outside its valid domain. Values are
    /// rejected, never clamped.
    #[error("invalid regression parameters: {0}")]
    InvalidRegressionParameters(String),

    /// Failure reported by the table source while listing fields or rows or
    /// fetching a cell.
    #[error(transparent)]
    Source(#[from] anyhow::Error),
}
