use ndarray::Array1;

use crate::error::{Result, TimefoldError};

/// Fraction of predictions that exactly match the reference labels.
///
/// Returns a value in [0, 1]. Mismatched lengths and empty inputs are
/// validation errors.
pub fn accuracy(y_true: &Array1<i64>, y_pred: &Array1<i64>) -> Result<f64> {
    if y_true.len() != y_pred.len() {
        return Err(TimefoldError::Validation(format!(
            "accuracy requires equal lengths, got {} and {}",
            y_true.len(),
            y_pred.len()
        )));
    }
    if y_true.is_empty() {
        return Err(TimefoldError::Validation(
            "accuracy is undefined for empty label vectors".to_string(),
        ));
    }
    let correct = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(a, b)| a == b)
        .count();
    Ok(correct as f64 / y_true.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_exact_matches() {
        let y_true = Array1::from_vec(vec![1, 2, 2, 1]);
        let y_pred = Array1::from_vec(vec![1, 2, 1, 1]);
        assert_eq!(accuracy(&y_true, &y_pred).unwrap(), 0.75);
    }

    #[test]
    fn mismatched_lengths_error() {
        let y_true = Array1::from_vec(vec![1, 2]);
        let y_pred = Array1::from_vec(vec![1]);
        assert!(accuracy(&y_true, &y_pred).is_err());
    }
}
