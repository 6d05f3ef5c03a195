//! Error types for BudgetBuddy
//!
//! Every failure the estimator can report is a variant here, so invalid
//! form data is surfaced to the user instead of leaking into the arithmetic.

use thiserror::Error;

/// Main error type for the budget estimator
#[derive(Error, Debug)]
pub enum EstimatorError {
    /// Required wizard fields left empty or unchecked
    #[error("Please fill in all required fields (page {page}: {})", fields.join(", "))]
    MissingRequired { page: u8, fields: Vec<String> },

    /// Numeric field that does not parse as a whole number
    #[error("Field '{field}' must be a whole number, got '{value}'")]
    InvalidNumber { field: String, value: String },

    /// Numeric field outside the configured limits
    #[error("Field '{field}' must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        value: i64,
        min: u32,
        max: u32,
    },

    /// Deployment selector value that has no rate card entry
    #[error("Unknown deployment model '{0}' (expected onshore, hybrid or offshore)")]
    UnknownDeployment(String),

    /// Form field name that the wizard does not define
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Wizard navigation errors
    #[error("Invalid page transition from {from} to {to}: {reason}")]
    InvalidTransition {
        from: String,
        to: String,
        reason: String,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Terminal input errors
    #[error("Input error: {0}")]
    InputError(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Generic errors with context
    #[error("Estimator error: {0}")]
    Generic(String),
}

impl EstimatorError {
    /// Whether this error comes from something the user typed.
    /// These are reported and the session carries on.
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            EstimatorError::MissingRequired { .. }
                | EstimatorError::InvalidNumber { .. }
                | EstimatorError::OutOfRange { .. }
                | EstimatorError::UnknownDeployment(_)
                | EstimatorError::UnknownField(_)
                | EstimatorError::InvalidTransition { .. }
                | EstimatorError::InputError(_)
        )
    }
}

/// Result type alias for estimator operations
pub type Result<T> = std::result::Result<T, EstimatorError>;

/// Convert anyhow errors to EstimatorError
impl From<anyhow::Error> for EstimatorError {
    fn from(err: anyhow::Error) -> Self {
        EstimatorError::Generic(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EstimatorError::OutOfRange {
            field: "totalPartners".to_string(),
            value: -4,
            min: 0,
            max: 100_000,
        };
        assert!(err.to_string().contains("totalPartners"));
        assert!(err.to_string().contains("-4"));
    }

    #[test]
    fn test_missing_required_lists_fields() {
        let err = EstimatorError::MissingRequired {
            page: 1,
            fields: vec!["totalPartners".to_string(), "lowComplexity".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Please fill in all required fields"));
        assert!(msg.contains("totalPartners, lowComplexity"));
    }

    #[test]
    fn test_user_input_classification() {
        assert!(EstimatorError::UnknownDeployment("moon".to_string()).is_user_input());
        assert!(EstimatorError::InputError("acknowledge expects on/off".to_string()).is_user_input());
        assert!(!EstimatorError::ConfigError("bad".to_string()).is_user_input());
        assert!(!EstimatorError::Generic("boom".to_string()).is_user_input());
    }
}
