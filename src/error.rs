//! Error types for the ordeval library

use thiserror::Error;

/// Result type alias for ordeval operations
pub type Result<T> = std::result::Result<T, OrdevalError>;

/// Main error type for the ordeval library
#[derive(Error, Debug)]
pub enum OrdevalError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid parameter: {name} = {value}, {reason}")]
    InvalidParameter {
        name: String,
        value: String,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OrdevalError::ValidationError("length mismatch".to_string());
        assert_eq!(err.to_string(), "Validation error: length mismatch");
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = OrdevalError::InvalidParameter {
            name: "n_classes".to_string(),
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid parameter: n_classes = 0, must be at least 1"
        );
    }
}
