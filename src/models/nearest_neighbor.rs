//! Brute-force k-nearest-neighbour classifier.
//!
//! Fitting stores the training data verbatim; prediction computes Euclidean
//! distances from each query row to every training row and takes a majority
//! vote over the k closest. No index structure is built.
use std::collections::HashMap;

use ndarray::{Array1, Array2, ArrayView1};

use crate::config::NeighborsConfig;
use crate::error::{Result, TimefoldError};
use crate::metrics::accuracy;
use crate::models::classifier_trait::Classifier;
use crate::validation::{check_feature_matrix, check_feature_width, check_training_set};

#[derive(Debug, Clone)]
struct FittedNeighbors {
    x_train: Array2<f64>,
    y_train: Array1<i64>,
}

/// Majority-vote nearest-neighbour classifier.
#[derive(Debug, Clone)]
pub struct NearestNeighborClassifier {
    config: NeighborsConfig,
    fitted: Option<FittedNeighbors>,
}

impl NearestNeighborClassifier {
    pub fn new(config: NeighborsConfig) -> Self {
        Self {
            config,
            fitted: None,
        }
    }

    /// Create with the given neighbour count.
    pub fn with_k(k: usize) -> Self {
        Self::new(NeighborsConfig::new(k))
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    fn fitted(&self) -> Result<&FittedNeighbors> {
        self.fitted
            .as_ref()
            .ok_or(TimefoldError::NotFitted("NearestNeighborClassifier"))
    }
}

impl Default for NearestNeighborClassifier {
    fn default() -> Self {
        Self::new(NeighborsConfig::default())
    }
}

impl Classifier for NearestNeighborClassifier {
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<i64>) -> Result<&mut Self> {
        if self.config.n_neighbors == 0 {
            return Err(TimefoldError::Validation(
                "n_neighbors must be at least 1".to_string(),
            ));
        }
        check_training_set(x, y)?;

        log::debug!(
            "storing {} training rows with {} features",
            x.nrows(),
            x.ncols()
        );
        self.fitted = Some(FittedNeighbors {
            x_train: x.clone(),
            y_train: y.clone(),
        });
        Ok(self)
    }

    fn predict(&self, x: &Array2<f64>) -> Result<Array1<i64>> {
        let fitted = self.fitted()?;
        check_feature_matrix(x)?;
        check_feature_width(x, fitted.x_train.ncols())?;

        // A query can ask for more neighbours than there are training rows;
        // the vote then simply runs over all of them.
        let k = self.config.n_neighbors.min(fitted.x_train.nrows());

        let mut predictions = Vec::with_capacity(x.nrows());
        for query in x.rows() {
            let neighbors = k_nearest(query, &fitted.x_train, k);
            let labels: Vec<i64> = neighbors.iter().map(|&i| fitted.y_train[i]).collect();
            predictions.push(majority_vote(&labels));
        }
        Ok(Array1::from_vec(predictions))
    }

    fn score(&self, x: &Array2<f64>, y: &Array1<i64>) -> Result<f64> {
        self.fitted()?;
        check_training_set(x, y)?;
        let predictions = self.predict(x)?;
        accuracy(y, &predictions)
    }
}

/// Indices of the k training rows closest to `query`, nearest first.
///
/// The sort is stable, so training rows at equal distance keep their input
/// order.
fn k_nearest(query: ArrayView1<f64>, x_train: &Array2<f64>, k: usize) -> Vec<usize> {
    let mut order: Vec<(usize, f64)> = x_train
        .rows()
        .into_iter()
        .enumerate()
        .map(|(i, row)| (i, squared_distance(query, row)))
        .collect();
    order.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    order.truncate(k);
    order.into_iter().map(|(i, _)| i).collect()
}

/// Squared Euclidean distance; monotone in the true distance, so the
/// neighbour ranking is unchanged.
fn squared_distance(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(ai, bi)| {
            let d = ai - bi;
            d * d
        })
        .sum()
}

/// Most frequent label; ties resolve to the smallest label.
fn majority_vote(labels: &[i64]) -> i64 {
    let mut counts: HashMap<i64, usize> = HashMap::new();
    for &label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }
    let mut best: Option<(i64, usize)> = None;
    for (&label, &count) in &counts {
        best = match best {
            None => Some((label, count)),
            Some((b_label, b_count)) => {
                if count > b_count || (count == b_count && label < b_label) {
                    Some((label, count))
                } else {
                    Some((b_label, b_count))
                }
            }
        };
    }
    best.map(|(label, _)| label).unwrap_or(0)
}
