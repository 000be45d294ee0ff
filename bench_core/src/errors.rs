//! # Error Types
//!
//! Structured error types for bench_core. Every calculator returns
//! [`CalcResult`] and propagates failures to the caller unchanged; user-facing
//! messaging (re-prompting, warnings) belongs to the CLI.
//!
//! ## Example
//!
//! ```rust
//! use bench_core::errors::{CalcError, CalcResult};
//!
//! fn validate_size(size_bp: f64) -> CalcResult<()> {
//!     if size_bp <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "size_bp",
//!             size_bp.to_string(),
//!             "DNA size must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_size(0.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for bench_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-numeric, zero where a divisor is needed, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A catalog lookup failed (unknown enzyme, unlisted enzyme pair)
    #[error("{kind} not found: {key}")]
    NotFound { kind: String, key: String },

    /// Calculation produced no meaningful value
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a NotFound error
    pub fn not_found(kind: impl Into<String>, key: impl Into<String>) -> Self {
        CalcError::NotFound {
            kind: kind.into(),
            key: key.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(calculation_type: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::NotFound { .. } => "NOT_FOUND",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

/// Reject non-finite values and values that are not strictly positive.
///
/// Used for every quantity that ends up in a denominator.
pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<f64> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be a finite number"));
    }
    if value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be positive"));
    }
    Ok(value)
}
