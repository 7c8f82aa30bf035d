use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};

use scatter_prep::cluster::{ClusteringConfig, InitStrategy};
use scatter_prep::pipeline::{self, AxisChoice, PipelineRequest, ROW_INDEX_FIELD};
use scatter_prep::regression::RegressionConfig;
use scatter_prep::source::file::load_table;
use scatter_prep::source::TableSource;

/// Demo driver: load a table file, run the pipeline, print the finished
/// records as JSON. A real deployment feeds the output to a plot renderer.
///
/// Usage: scatter-prep FILE Y_FIELD [X_FIELD] [none|kmeans|dbscan]
///
/// Fields are given by display name ("index" selects the row sequence);
/// Y_FIELD is the primary axis and must hold numeric data.
fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 || args.len() > 4 {
        bail!("usage: scatter-prep FILE Y_FIELD [X_FIELD] [none|kmeans|dbscan]");
    }

    let path = PathBuf::from(&args[0]);
    let table = load_table(&path)?;

    let y_axis = axis_by_name(&table, &args[1])?;
    let x_axis = match args.get(2) {
        Some(name) => axis_by_name(&table, name)?,
        None => AxisChoice::RowIndex,
    };
    let clustering = match args.get(3).map(String::as_str) {
        None | Some("none") => ClusteringConfig::None,
        Some("kmeans") => ClusteringConfig::Partitioning {
            k: 3,
            max_iterations: 100,
            init: InitStrategy::PlusPlus,
        },
        Some("dbscan") => ClusteringConfig::DensityBased {
            neighborhood_radius: 5.0,
            min_points: 2,
        },
        Some(other) => bail!("unknown clustering algorithm '{other}'"),
    };

    let request = PipelineRequest {
        x_axis,
        y_axis,
        clustering,
        regression: RegressionConfig::default(),
    };

    let output = pipeline::run_with_progress(&table, &request, |percent| {
        eprint!("\ringesting… {percent:5.1}%");
        if percent >= 100.0 {
            eprintln!();
        }
    })?;

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Map a display name to an axis choice, resolving to the field's id.
fn axis_by_name<S: TableSource>(table: &S, name: &str) -> Result<AxisChoice> {
    if name == ROW_INDEX_FIELD {
        return Ok(AxisChoice::RowIndex);
    }
    let fields = table.fields()?;
    let field = fields
        .iter()
        .find(|f| f.name == name)
        .with_context(|| format!("no field named '{name}'"))?;
    Ok(AxisChoice::Field(field.id.clone()))
}
