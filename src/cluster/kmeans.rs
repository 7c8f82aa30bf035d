use rand::Rng;

use super::{squared_dist, InitStrategy};

// ---------------------------------------------------------------------------
// Partitioning clustering (k-means, Lloyd iterations)
// ---------------------------------------------------------------------------

/// Partition `points` into exactly `k` groups by iterative centroid
/// refinement, returning one label in `[0, k)` per point.
///
/// The caller has already validated `1 <= k <= points.len()` and
/// `max_iterations >= 1` (see `ClusteringConfig::validate`). Iteration stops
/// early once no assignment changes.
pub fn cluster(
    points: &[[f64; 2]],
    k: usize,
    max_iterations: usize,
    init: InitStrategy,
) -> Vec<i64> {
    let n = points.len();
    let mut centroids = seed(points, k, init);
    let mut assignments = vec![0usize; n];

    for _ in 0..max_iterations {
        // Assign each point to its nearest centroid.
        let mut changed = false;
        for (i, p) in points.iter().enumerate() {
            let nearest = nearest_centroid(*p, &centroids);
            if assignments[i] != nearest {
                assignments[i] = nearest;
                changed = true;
            }
        }
        if !changed {
            break;
        }

        // Recompute centroids as the mean of their members. An emptied
        // cluster keeps its previous centroid.
        let mut sums = vec![[0.0f64; 2]; k];
        let mut counts = vec![0usize; k];
        for (i, p) in points.iter().enumerate() {
            let c = assignments[i];
            counts[c] += 1;
            sums[c][0] += p[0];
            sums[c][1] += p[1];
        }
        for c in 0..k {
            if counts[c] > 0 {
                centroids[c] = [sums[c][0] / counts[c] as f64, sums[c][1] / counts[c] as f64];
            }
        }
    }

    assignments.into_iter().map(|a| a as i64).collect()
}

fn nearest_centroid(p: [f64; 2], centroids: &[[f64; 2]]) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (c, centroid) in centroids.iter().enumerate() {
        let d = squared_dist(p, *centroid);
        if d < best_dist {
            best_dist = d;
            best = c;
        }
    }
    best
}

// ---------------------------------------------------------------------------
// Seeding strategies
// ---------------------------------------------------------------------------

fn seed(points: &[[f64; 2]], k: usize, init: InitStrategy) -> Vec<[f64; 2]> {
    match init {
        InitStrategy::FarthestPoint => seed_farthest_point(points, k),
        InitStrategy::Random => seed_random(points, k),
        InitStrategy::PlusPlus => seed_plus_plus(points, k),
    }
}

/// Deterministic greedy max-min seeding: start from the first point, then
/// repeatedly add the point farthest from the chosen set.
fn seed_farthest_point(points: &[[f64; 2]], k: usize) -> Vec<[f64; 2]> {
    let mut centroids = Vec::with_capacity(k);
    centroids.push(points[0]);

    while centroids.len() < k {
        let farthest = points
            .iter()
            .map(|p| {
                centroids
                    .iter()
                    .map(|c| squared_dist(*p, *c))
                    .fold(f64::INFINITY, f64::min)
            })
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(i, _)| i)
            .unwrap_or(0);
        centroids.push(points[farthest]);
    }

    centroids
}

/// k distinct points drawn uniformly at random.
fn seed_random(points: &[[f64; 2]], k: usize) -> Vec<[f64; 2]> {
    let mut rng = rand::thread_rng();
    rand::seq::index::sample(&mut rng, points.len(), k)
        .iter()
        .map(|i| points[i])
        .collect()
}

/// "++"-style seeding: each next centroid is drawn with probability
/// proportional to its squared distance from the already-chosen set.
fn seed_plus_plus(points: &[[f64; 2]], k: usize) -> Vec<[f64; 2]> {
    let n = points.len();
    let mut rng = rand::thread_rng();
    let mut centroids = Vec::with_capacity(k);
    centroids.push(points[rng.gen_range(0..n)]);

    while centroids.len() < k {
        let dists: Vec<f64> = points
            .iter()
            .map(|p| {
                centroids
                    .iter()
                    .map(|c| squared_dist(*p, *c))
                    .fold(f64::INFINITY, f64::min)
            })
            .collect();

        let total: f64 = dists.iter().sum();
        if total < 1e-15 {
            // All points coincide with the chosen set; pick any.
            centroids.push(points[rng.gen_range(0..n)]);
            continue;
        }

        let threshold = rng.gen_range(0.0..total);
        let mut cumulative = 0.0;
        let mut chosen = n - 1;
        for (i, d) in dists.iter().enumerate() {
            cumulative += d;
            if cumulative >= threshold {
                chosen = i;
                break;
            }
        }
        centroids.push(points[chosen]);
    }

    centroids
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Three well-separated clumps of ten points each.
    fn three_clumps() -> Vec<[f64; 2]> {
        let mut points = Vec::new();
        for (cx, cy) in [(0.0, 0.0), (100.0, 0.0), (50.0, 100.0)] {
            for i in 0..10 {
                let jitter = i as f64 * 0.1;
                points.push([cx + jitter, cy - jitter]);
            }
        }
        points
    }

    fn dominant_share(labels: &[i64]) -> usize {
        let mut counts = std::collections::BTreeMap::new();
        for &l in labels {
            *counts.entry(l).or_insert(0usize) += 1;
        }
        counts.into_values().max().unwrap_or(0)
    }

    #[test]
    fn single_cluster_labels_everything_zero() {
        let points = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
        let labels = cluster(&points, 1, 10, InitStrategy::FarthestPoint);
        assert_eq!(labels, [0, 0, 0]);
    }

    #[test]
    fn k_equal_n_gives_each_point_its_own_cluster() {
        let points = [[0.0, 0.0], [10.0, 0.0], [0.0, 10.0]];
        let labels = cluster(&points, 3, 10, InitStrategy::FarthestPoint);
        let mut sorted = labels.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 3);
    }

    #[test]
    fn farthest_point_seeding_separates_three_clumps() {
        let points = three_clumps();
        // Deterministic seeding, but run a few times to mirror real usage.
        for _ in 0..5 {
            let labels = cluster(&points, 3, 100, InitStrategy::FarthestPoint);
            assert_eq!(labels.len(), 30);
            for clump in labels.chunks(10) {
                assert!(
                    dominant_share(clump) >= 8,
                    "clump not dominated by one label: {clump:?}"
                );
            }
        }
    }

    #[test]
    fn plus_plus_and_random_seeding_produce_valid_labels() {
        let points = three_clumps();
        for init in [InitStrategy::PlusPlus, InitStrategy::Random] {
            let labels = cluster(&points, 3, 100, init);
            assert_eq!(labels.len(), 30);
            assert!(labels.iter().all(|&l| (0..3).contains(&l)));
        }
    }
}
