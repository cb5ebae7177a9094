use ndarray::{Array1, Array2};

use crate::error::Result;

/// The capability contract a classifier exposes to generic evaluation code.
/// Concrete models satisfy this structurally instead of inheriting from a
/// framework base class.
pub trait Classifier {
    /// Fit on a feature matrix and parallel label vector. Returns the fitted
    /// instance so calls can chain.
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<i64>) -> Result<&mut Self>;

    /// Predict one label per query row, in query order. Fails with a
    /// not-fitted error before `fit`.
    fn predict(&self, x: &Array2<f64>) -> Result<Array1<i64>>;

    /// Accuracy of `predict(x)` against `y`, in [0, 1].
    fn score(&self, x: &Array2<f64>, y: &Array1<i64>) -> Result<f64>;
}
