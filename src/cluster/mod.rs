/// Clustering over 2-D coordinate vectors.
///
/// Two structurally different algorithms live here: partitioning (k-means)
/// always assigns every point a label in `[0, k)`, while density-based
/// clustering (DBSCAN) may leave sparse points unlabeled with the [`NOISE`]
/// sentinel. The dispatcher hides that difference behind one label vector.
pub mod dbscan;
pub mod kmeans;

use log::debug;

use crate::data::model::Record;
use crate::error::PipelineError;

/// Label for points assigned to no density-based cluster.
pub const NOISE: i64 = -1;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Centroid seeding strategy for partitioning clustering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitStrategy {
    /// Probabilistic "++"-style seeding: each next centroid is drawn with
    /// probability proportional to its squared distance from the chosen set.
    #[default]
    PlusPlus,
    /// k distinct points drawn uniformly at random.
    Random,
    /// Deterministic greedy max-min seeding (most distant points).
    FarthestPoint,
}

/// Which clustering algorithm to run, with its parameters.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ClusteringConfig {
    #[default]
    None,
    Partitioning {
        k: usize,
        max_iterations: usize,
        init: InitStrategy,
    },
    DensityBased {
        neighborhood_radius: f64,
        min_points: usize,
    },
}

impl ClusteringConfig {
    /// Reject out-of-domain parameters before any computation runs.
    pub fn validate(&self, n_points: usize) -> Result<(), PipelineError> {
        let fail = |msg: String| Err(PipelineError::InvalidClusteringParameters(msg));
        match *self {
            ClusteringConfig::None => Ok(()),
            ClusteringConfig::Partitioning {
                k, max_iterations, ..
            } => {
                if k < 1 {
                    return fail(format!("k must be at least 1, got {k}"));
                }
                if k > n_points {
                    return fail(format!("k={k} exceeds the number of points ({n_points})"));
                }
                if max_iterations < 1 {
                    return fail(format!(
                        "max iterations must be at least 1, got {max_iterations}"
                    ));
                }
                Ok(())
            }
            ClusteringConfig::DensityBased {
                neighborhood_radius,
                min_points,
            } => {
                if !neighborhood_radius.is_finite() || neighborhood_radius <= 0.0 {
                    return fail(format!(
                        "neighborhood radius must be positive, got {neighborhood_radius}"
                    ));
                }
                if min_points < 1 {
                    return fail(format!("min points must be at least 1, got {min_points}"));
                }
                Ok(())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// Run the configured algorithm over the coordinate vectors.
///
/// Returns one label per vector, positionally aligned with the input, or
/// `None` when clustering is disabled. Parameters are validated before any
/// iteration executes.
pub fn run(
    config: &ClusteringConfig,
    points: &[[f64; 2]],
) -> Result<Option<Vec<i64>>, PipelineError> {
    config.validate(points.len())?;
    match *config {
        ClusteringConfig::None => Ok(None),
        ClusteringConfig::Partitioning {
            k,
            max_iterations,
            init,
        } => {
            debug!("partitioning {} points into k={k} clusters", points.len());
            Ok(Some(kmeans::cluster(points, k, max_iterations, init)))
        }
        ClusteringConfig::DensityBased {
            neighborhood_radius,
            min_points,
        } => {
            debug!(
                "density clustering {} points (radius={neighborhood_radius}, min_points={min_points})",
                points.len()
            );
            Ok(Some(dbscan::cluster(points, neighborhood_radius, min_points)))
        }
    }
}

/// Write label *i* onto record *i*.
///
/// Coordinate vectors carry no identity back to records other than array
/// position, so the merge is purely positional; the zip pins the two sides
/// together element by element.
pub fn merge_labels(records: &mut [Record], labels: &[i64]) {
    debug_assert_eq!(records.len(), labels.len());
    for (rec, &label) in records.iter_mut().zip(labels) {
        rec.cluster = Some(label);
    }
}

pub(crate) fn squared_dist(a: [f64; 2], b: [f64; 2]) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn partitioning(k: usize, max_iterations: usize) -> ClusteringConfig {
        ClusteringConfig::Partitioning {
            k,
            max_iterations,
            init: InitStrategy::FarthestPoint,
        }
    }

    #[test]
    fn none_config_returns_no_labels() {
        let labels = run(&ClusteringConfig::None, &[[0.0, 0.0]]).unwrap();
        assert!(labels.is_none());
    }

    #[test]
    fn partitioning_rejects_bad_parameters_without_iterating() {
        let points = [[0.0, 0.0], [1.0, 1.0]];
        assert!(run(&partitioning(0, 10), &points).is_err());
        assert!(run(&partitioning(3, 10), &points).is_err());
        assert!(run(&partitioning(2, 0), &points).is_err());
    }

    #[test]
    fn density_rejects_bad_parameters() {
        let points = [[0.0, 0.0]];
        let bad_radius = ClusteringConfig::DensityBased {
            neighborhood_radius: 0.0,
            min_points: 2,
        };
        assert!(run(&bad_radius, &points).is_err());

        let nan_radius = ClusteringConfig::DensityBased {
            neighborhood_radius: f64::NAN,
            min_points: 2,
        };
        assert!(run(&nan_radius, &points).is_err());

        let bad_min = ClusteringConfig::DensityBased {
            neighborhood_radius: 1.0,
            min_points: 0,
        };
        assert!(run(&bad_min, &points).is_err());
    }

    #[test]
    fn merge_labels_is_positional() {
        let mut records: Vec<Record> = (1..=3)
            .map(|i| Record {
                index: i,
                cells: BTreeMap::new(),
                parsed_date: None,
                cluster: None,
            })
            .collect();
        merge_labels(&mut records, &[2, NOISE, 0]);
        let merged: Vec<Option<i64>> = records.iter().map(|r| r.cluster).collect();
        assert_eq!(merged, [Some(2), Some(NOISE), Some(0)]);
    }
}
