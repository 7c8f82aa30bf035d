use std::collections::VecDeque;

use super::{squared_dist, NOISE};

// Internal marker for points not yet visited; never escapes this module.
const UNVISITED: i64 = -2;

// ---------------------------------------------------------------------------
// Density-based clustering (DBSCAN)
// ---------------------------------------------------------------------------

/// Group points transitively connected within `radius`, where a point only
/// seeds a new group if it has at least `min_points` neighbors (itself
/// included) within that radius. Unreachable points get [`NOISE`].
///
/// Group labels are consecutive integers starting at 0, in order of
/// discovery. The caller has already validated `radius > 0` and
/// `min_points >= 1`.
pub fn cluster(points: &[[f64; 2]], radius: f64, min_points: usize) -> Vec<i64> {
    let n = points.len();
    let r2 = radius * radius;
    let mut labels = vec![UNVISITED; n];
    let mut next_label = 0i64;

    for i in 0..n {
        if labels[i] != UNVISITED {
            continue;
        }
        let neighbors = region_query(points, i, r2);
        if neighbors.len() < min_points {
            labels[i] = NOISE;
            continue;
        }

        let label = next_label;
        next_label += 1;
        labels[i] = label;

        // Breadth-first expansion from the seed's neighborhood. Border
        // points previously marked as noise join the group but do not
        // expand it further.
        let mut queue: VecDeque<usize> = neighbors.into();
        while let Some(j) = queue.pop_front() {
            if labels[j] == NOISE {
                labels[j] = label;
            }
            if labels[j] != UNVISITED {
                continue;
            }
            labels[j] = label;

            let expansion = region_query(points, j, r2);
            if expansion.len() >= min_points {
                queue.extend(expansion);
            }
        }
    }

    labels
}

/// Indices of all points within `sqrt(r2)` of point `i`, including `i`.
fn region_query(points: &[[f64; 2]], i: usize, r2: f64) -> Vec<usize> {
    let center = points[i];
    points
        .iter()
        .enumerate()
        .filter(|(_, p)| squared_dist(center, **p) <= r2)
        .map(|(j, _)| j)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dense_chain_groups_and_outlier_is_noise() {
        let points = [[0.0, 0.0], [0.0, 1.0], [0.0, 2.0], [50.0, 50.0]];
        let labels = cluster(&points, 5.0, 2);
        assert_eq!(labels[0], 0);
        assert_eq!(labels[1], 0);
        assert_eq!(labels[2], 0);
        assert_eq!(labels[3], NOISE);
    }

    #[test]
    fn labels_are_consecutive_from_zero() {
        let points = [
            [0.0, 0.0],
            [0.0, 1.0],
            [100.0, 0.0],
            [100.0, 1.0],
            [200.0, 0.0],
            [200.0, 1.0],
        ];
        let labels = cluster(&points, 2.0, 2);
        assert_eq!(labels, [0, 0, 1, 1, 2, 2]);
    }

    #[test]
    fn min_points_counts_the_point_itself() {
        // Two points within radius: each has 2 neighbors including itself.
        let points = [[0.0, 0.0], [0.0, 1.0]];
        assert_eq!(cluster(&points, 2.0, 2), [0, 0]);
        // Requiring 3 turns both into noise.
        assert_eq!(cluster(&points, 2.0, 3), [NOISE, NOISE]);
    }

    #[test]
    fn all_noise_when_everything_is_sparse() {
        let points = [[0.0, 0.0], [100.0, 0.0], [0.0, 100.0]];
        let labels = cluster(&points, 1.0, 2);
        assert!(labels.iter().all(|&l| l == NOISE));
    }

    #[test]
    fn border_point_joins_a_cluster_without_expanding_it() {
        // d has only one in-radius neighbor besides itself, so it is a
        // border point: reachable from the core point c, never a seed.
        let points = [[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [3.5, 0.0]];
        let labels = cluster(&points, 1.6, 3);
        assert_eq!(labels, [0, 0, 0, 0]);
    }
}
