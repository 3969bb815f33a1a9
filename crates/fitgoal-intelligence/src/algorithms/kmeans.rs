// ABOUTME: k-means clustering with k-means++ seeding over fixed-dimension points
// ABOUTME: Randomness comes from a caller-supplied Rng so runs are reproducible with a seed
#![allow(clippy::cast_precision_loss)] // Safe: cluster sizes are small

use fitgoal_core::errors::{AppError, AppResult};
use rand::Rng;

/// Outcome of a k-means run
#[derive(Debug, Clone)]
pub struct KMeansResult<const D: usize> {
    /// Cluster index of each input point, in input order
    pub assignments: Vec<usize>,
    /// Final centroid of each cluster
    pub centroids: Vec<[f64; D]>,
    /// Lloyd iterations performed
    pub iterations: usize,
    /// Whether centroids settled before the iteration cap
    pub converged: bool,
}

impl<const D: usize> KMeansResult<D> {
    /// Number of points assigned to each cluster
    #[must_use]
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.centroids.len()];
        for &cluster in &self.assignments {
            sizes[cluster] += 1;
        }
        sizes
    }
}

/// Partition `points` into `k` non-empty clusters
///
/// Every point is assigned to exactly one cluster and every cluster holds at
/// least one point, so with `k == points.len()` each point forms its own cluster.
///
/// # Errors
///
/// Returns `InvalidParameter` when `k` is zero or exceeds the number of points
pub fn kmeans<R: Rng + ?Sized, const D: usize>(
    points: &[[f64; D]],
    k: usize,
    max_iterations: usize,
    tolerance: f64,
    rng: &mut R,
) -> AppResult<KMeansResult<D>> {
    if k == 0 || k > points.len() {
        return Err(AppError::invalid_parameter(format!(
            "k must be between 1 and {} (number of points), got {k}",
            points.len()
        )));
    }

    let mut centroids = seed_plus_plus(points, k, rng);
    let mut assignments = vec![0; points.len()];
    let mut iterations = 0;
    let mut converged = false;

    while iterations < max_iterations {
        iterations += 1;
        for (assignment, point) in assignments.iter_mut().zip(points) {
            *assignment = nearest_centroid(point, &centroids);
        }

        let updated = recompute_centroids(points, &assignments, &centroids);
        let shift = centroids
            .iter()
            .zip(&updated)
            .map(|(old, new)| squared_distance(old, new).sqrt())
            .fold(0.0_f64, f64::max);
        centroids = updated;

        if shift <= tolerance {
            converged = true;
            break;
        }
    }

    for (assignment, point) in assignments.iter_mut().zip(points) {
        *assignment = nearest_centroid(point, &centroids);
    }
    refill_empty_clusters(points, &mut assignments, &centroids, k);
    let centroids = recompute_centroids(points, &assignments, &centroids);

    Ok(KMeansResult {
        assignments,
        centroids,
        iterations,
        converged,
    })
}

/// k-means++ seeding: each further centroid is drawn with probability
/// proportional to its squared distance from the nearest chosen centroid
fn seed_plus_plus<R: Rng + ?Sized, const D: usize>(
    points: &[[f64; D]],
    k: usize,
    rng: &mut R,
) -> Vec<[f64; D]> {
    let mut chosen = Vec::with_capacity(k);
    chosen.push(rng.gen_range(0..points.len()));

    while chosen.len() < k {
        let distances: Vec<f64> = points
            .iter()
            .map(|point| {
                chosen
                    .iter()
                    .map(|&c| squared_distance(point, &points[c]))
                    .fold(f64::INFINITY, f64::min)
            })
            .collect();
        let total: f64 = distances.iter().sum();

        let next = if total > 0.0 {
            let mut target = rng.gen::<f64>() * total;
            let mut pick = None;
            for (index, &distance) in distances.iter().enumerate() {
                if distance <= 0.0 {
                    continue;
                }
                pick = Some(index);
                if target < distance {
                    break;
                }
                target -= distance;
            }
            pick
        } else {
            None
        };

        // All remaining points coincide with a centroid: pick any unchosen one
        let next = next.unwrap_or_else(|| {
            let unchosen: Vec<usize> = (0..points.len()).filter(|i| !chosen.contains(i)).collect();
            unchosen[rng.gen_range(0..unchosen.len())]
        });
        chosen.push(next);
    }

    chosen.into_iter().map(|index| points[index]).collect()
}

fn squared_distance<const D: usize>(a: &[f64; D], b: &[f64; D]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).powi(2)).sum()
}

/// Index of the closest centroid; ties resolve to the lowest index
fn nearest_centroid<const D: usize>(point: &[f64; D], centroids: &[[f64; D]]) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (index, centroid) in centroids.iter().enumerate() {
        let distance = squared_distance(point, centroid);
        if distance < best_distance {
            best = index;
            best_distance = distance;
        }
    }
    best
}

/// Mean of each cluster's members; an empty cluster keeps its previous centroid
fn recompute_centroids<const D: usize>(
    points: &[[f64; D]],
    assignments: &[usize],
    previous: &[[f64; D]],
) -> Vec<[f64; D]> {
    let mut sums = vec![[0.0; D]; previous.len()];
    let mut counts = vec![0_usize; previous.len()];
    for (point, &cluster) in points.iter().zip(assignments) {
        counts[cluster] += 1;
        for (sum, value) in sums[cluster].iter_mut().zip(point) {
            *sum += value;
        }
    }

    sums.into_iter()
        .zip(counts)
        .zip(previous)
        .map(|((mut sum, count), old)| {
            if count == 0 {
                return *old;
            }
            for value in &mut sum {
                *value /= count as f64;
            }
            sum
        })
        .collect()
}

/// Give every empty cluster the point farthest from its own centroid,
/// taken only from clusters that can spare a member
fn refill_empty_clusters<const D: usize>(
    points: &[[f64; D]],
    assignments: &mut [usize],
    centroids: &[[f64; D]],
    k: usize,
) {
    let mut sizes = vec![0_usize; k];
    for &cluster in assignments.iter() {
        sizes[cluster] += 1;
    }

    for empty in 0..k {
        if sizes[empty] > 0 {
            continue;
        }
        let donor = assignments
            .iter()
            .enumerate()
            .filter(|&(_, &cluster)| sizes[cluster] > 1)
            .map(|(index, &cluster)| {
                (index, squared_distance(&points[index], &centroids[cluster]))
            })
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

        // k <= n guarantees some cluster has a spare member while one is empty
        if let Some((index, _)) = donor {
            sizes[assignments[index]] -= 1;
            assignments[index] = empty;
            sizes[empty] = 1;
        }
    }
}
