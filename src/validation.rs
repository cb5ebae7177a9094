//! Input validation helpers shared by the estimator implementations.
use ndarray::{Array1, Array2};

use crate::error::{Result, TimefoldError};

/// Check that a feature matrix is non-empty and contains only finite values.
pub fn check_feature_matrix(x: &Array2<f64>) -> Result<()> {
    if x.nrows() == 0 || x.ncols() == 0 {
        return Err(TimefoldError::Validation(format!(
            "feature matrix must be non-empty, got shape ({}, {})",
            x.nrows(),
            x.ncols()
        )));
    }
    if let Some(((row, col), _)) = x.indexed_iter().find(|(_, v)| !v.is_finite()) {
        return Err(TimefoldError::Validation(format!(
            "feature matrix contains a non-finite value at ({}, {})",
            row, col
        )));
    }
    Ok(())
}

/// Check a feature matrix together with its label vector.
pub fn check_training_set(x: &Array2<f64>, y: &Array1<i64>) -> Result<()> {
    check_feature_matrix(x)?;
    if y.len() != x.nrows() {
        return Err(TimefoldError::Validation(format!(
            "labels have {} entries but the feature matrix has {} rows",
            y.len(),
            x.nrows()
        )));
    }
    Ok(())
}

/// Check that a query matrix matches the feature width seen at fit time.
pub fn check_feature_width(x: &Array2<f64>, expected: usize) -> Result<()> {
    if x.ncols() != expected {
        return Err(TimefoldError::Validation(format!(
            "query matrix has {} features but the model was fitted with {}",
            x.ncols(),
            expected
        )));
    }
    Ok(())
}
