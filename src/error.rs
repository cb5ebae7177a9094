use std::error::Error;
use std::fmt;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TimefoldError>;

/// Error type shared by the classifier and the splitter.
#[derive(Debug, Clone, PartialEq)]
pub enum TimefoldError {
    /// Malformed or mismatched-shape estimator input.
    Validation(String),
    /// Predict or score called before fit; carries the estimator name.
    NotFitted(&'static str),
    /// Missing time column or time values that cannot be converted.
    Config(String),
}

impl fmt::Display for TimefoldError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TimefoldError::Validation(msg) => write!(f, "Validation error: {}", msg),
            TimefoldError::NotFitted(name) => {
                write!(f, "{} is not fitted yet; call fit before predicting", name)
            }
            TimefoldError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl Error for TimefoldError {}
