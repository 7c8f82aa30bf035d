//! scatter-prep – prepares tabular data for clustered scatter plots.
//!
//! The pipeline ingests raw, loosely-typed row/column data through a narrow
//! [`source::TableSource`] interface, infers the real type of every cell,
//! orders rows chronologically when a date is discoverable, derives 2-D
//! coordinate vectors, runs the selected clustering algorithm, and merges
//! the labels back onto the records. The finished record set plus a
//! validated regression descriptor are handed to an external renderer;
//! nothing here draws anything.
//!
//! ```no_run
//! use scatter_prep::cluster::ClusteringConfig;
//! use scatter_prep::pipeline::{self, AxisChoice, PipelineRequest};
//! use scatter_prep::regression::RegressionConfig;
//! use scatter_prep::source::file::load_table;
//!
//! let table = load_table("sales.csv".as_ref())?;
//! let request = PipelineRequest {
//!     x_axis: AxisChoice::RowIndex,
//!     y_axis: AxisChoice::Field("f1".into()),
//!     clustering: ClusteringConfig::DensityBased {
//!         neighborhood_radius: 5.0,
//!         min_points: 2,
//!     },
//!     regression: RegressionConfig::default(),
//! };
//! let output = pipeline::run(&table, &request)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cluster;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod progress;
pub mod regression;
pub mod source;

pub use error::PipelineError;
pub use pipeline::{run, run_with_progress, AxisChoice, PipelineOutput, PipelineRequest};
