use log::info;
use serde::Serialize;

use crate::cluster::{self, ClusteringConfig};
use crate::data::model::{FieldDescriptor, RawRecord, Record};
use crate::data::normalize::build_record;
use crate::data::order::sort_chronologically;
use crate::data::vectorize::{vectorize, Axis};
use crate::error::PipelineError;
use crate::progress::ProgressReporter;
use crate::regression::{RegressionConfig, RegressionDescriptor};
use crate::source::TableSource;

// ---------------------------------------------------------------------------
// Pipeline request / output
// ---------------------------------------------------------------------------

/// Name under which the row-sequence pseudo-axis appears in the output.
pub const ROW_INDEX_FIELD: &str = "index";

/// One plot axis as chosen by the caller: a real column (by field id, since
/// display names are not guaranteed unique) or the row sequence number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AxisChoice {
    Field(String),
    RowIndex,
}

/// Everything one pipeline run needs, passed in explicitly. The pipeline
/// reads no ambient state and keeps no state between runs.
#[derive(Debug, Clone)]
pub struct PipelineRequest {
    pub x_axis: AxisChoice,
    /// Primary axis: its first-row value must be numeric (precheck).
    pub y_axis: AxisChoice,
    pub clustering: ClusteringConfig,
    pub regression: RegressionConfig,
}

/// The pipeline's terminal output, handed to the external renderer. The
/// renderer owns all visual encoding, including color-by-cluster.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineOutput {
    pub records: Vec<Record>,
    pub x_field: String,
    pub y_field: String,
    pub regression: RegressionDescriptor,
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Run the full pipeline: precheck → ingest → normalize → order →
/// vectorize → cluster → merge.
pub fn run<S: TableSource + ?Sized>(
    source: &S,
    request: &PipelineRequest,
) -> Result<PipelineOutput, PipelineError> {
    run_with_progress(source, request, |_| {})
}

/// Like [`run`], invoking `on_progress` with the completion percentage after
/// every ingested row. Ingestion is sequential and row-major; no other stage
/// starts until it completes in full.
pub fn run_with_progress<S: TableSource + ?Sized>(
    source: &S,
    request: &PipelineRequest,
    mut on_progress: impl FnMut(f64),
) -> Result<PipelineOutput, PipelineError> {
    let fields = source.fields()?;
    let row_ids = source.visible_row_ids()?;
    if row_ids.is_empty() {
        return Err(PipelineError::EmptyTable);
    }

    let x_axis = resolve_axis(&request.x_axis, &fields)?;
    let y_axis = resolve_axis(&request.y_axis, &fields)?;

    // Cheapest failures first: configuration and the numeric precheck are
    // settled before a single data cell is fetched.
    let regression = request.regression.validate()?;
    request.clustering.validate(row_ids.len())?;
    precheck_primary_axis(source, &request.y_axis, &fields, &row_ids)?;

    // Ingest one cell_text call per (row, field), row-major, reporting
    // progress after each row.
    let mut progress = ProgressReporter::new(row_ids.len());
    let mut records = Vec::with_capacity(row_ids.len());
    for (pos, row_id) in row_ids.iter().enumerate() {
        let mut raw = RawRecord::new();
        for field in &fields {
            let text = source.cell_text(&field.id, row_id)?;
            raw.insert(field.name.clone(), text);
        }
        records.push(build_record(&raw, pos + 1));
        progress.advance();
        on_progress(progress.percent());
    }
    info!(
        "ingested {} records across {} fields",
        records.len(),
        fields.len()
    );

    sort_chronologically(&mut records);

    // The vector array is positionally aligned with the record array; the
    // label merge below relies on that and on nothing else.
    let vectors = vectorize(&records, &x_axis, &y_axis);
    if let Some(labels) = cluster::run(&request.clustering, &vectors)? {
        cluster::merge_labels(&mut records, &labels);
    }

    Ok(PipelineOutput {
        records,
        x_field: axis_name(&x_axis),
        y_field: axis_name(&y_axis),
        regression,
    })
}

// ---------------------------------------------------------------------------
// Axis resolution and precheck
// ---------------------------------------------------------------------------

fn resolve_axis(
    choice: &AxisChoice,
    fields: &[FieldDescriptor],
) -> Result<Axis, PipelineError> {
    match choice {
        AxisChoice::RowIndex => Ok(Axis::RowIndex),
        AxisChoice::Field(id) => fields
            .iter()
            .find(|f| &f.id == id)
            .map(|f| Axis::Field(f.name.clone()))
            .ok_or_else(|| PipelineError::UnknownField(id.clone())),
    }
}

fn axis_name(axis: &Axis) -> String {
    match axis {
        Axis::RowIndex => ROW_INDEX_FIELD.to_string(),
        Axis::Field(name) => name.clone(),
    }
}

/// Before ingestion starts, the primary axis field's first-row cell must
/// parse as a number; otherwise the run aborts with no cells fetched beyond
/// this single sample. The row-sequence pseudo-axis is always numeric.
fn precheck_primary_axis<S: TableSource + ?Sized>(
    source: &S,
    choice: &AxisChoice,
    fields: &[FieldDescriptor],
    row_ids: &[String],
) -> Result<(), PipelineError> {
    let AxisChoice::Field(id) = choice else {
        return Ok(());
    };
    // resolve_axis has already established the id exists
    let field = fields
        .iter()
        .find(|f| &f.id == id)
        .ok_or_else(|| PipelineError::UnknownField(id.clone()))?;

    let sample = source.cell_text(id, &row_ids[0])?;
    if sample.trim().parse::<f64>().is_ok() {
        Ok(())
    } else {
        Err(PipelineError::Precheck {
            field: field.name.clone(),
            sample,
        })
    }
}
