//! Typed validation errors with contract-level messages
//!
//! The `Display` output of [`ValidationError`] is surfaced verbatim in
//! user-facing API error responses, so the wording of each variant is part of
//! the crate's contract and must not be reworded.

use serde::Serialize;
use thiserror::Error;

/// A field validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// First name missing, not a string, or blank after trimming
    #[error("first_name is required and must be a non-empty string")]
    FirstNameRequired,

    /// Last name missing, not a string, or blank after trimming
    #[error("last_name is required and must be a non-empty string")]
    LastNameRequired,

    /// Loan amount missing, unparseable, or not strictly positive
    #[error("loan_amount must be a positive number")]
    LoanAmountNotPositive,

    /// Interest rate missing, unparseable, or negative
    #[error("interest_rate must be a non-negative number")]
    InterestRateNegative,

    /// Loan term missing, unparseable as an integer, or negative
    #[error("loan_term must be a non-negative integer")]
    LoanTermNotInteger,
}

/// Serializable validation result in the shape API clients expect
///
/// Serializes as `{"valid": true}` on success and
/// `{"valid": false, "error": "<message>"}` on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    /// Whether the validated fields were accepted
    pub valid: bool,
    /// Contract error message for the first failing field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Result<(), ValidationError>> for ValidationOutcome {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => ValidationOutcome {
                valid: true,
                error: None,
            },
            Err(e) => ValidationOutcome {
                valid: false,
                error: Some(e.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // === ValidationError messages ===

    #[test]
    fn test_first_name_message_is_exact() {
        assert_eq!(
            ValidationError::FirstNameRequired.to_string(),
            "first_name is required and must be a non-empty string"
        );
    }

    #[test]
    fn test_last_name_message_is_exact() {
        assert_eq!(
            ValidationError::LastNameRequired.to_string(),
            "last_name is required and must be a non-empty string"
        );
    }

    #[test]
    fn test_loan_amount_message_is_exact() {
        assert_eq!(
            ValidationError::LoanAmountNotPositive.to_string(),
            "loan_amount must be a positive number"
        );
    }

    #[test]
    fn test_interest_rate_message_is_exact() {
        assert_eq!(
            ValidationError::InterestRateNegative.to_string(),
            "interest_rate must be a non-negative number"
        );
    }

    #[test]
    fn test_loan_term_message_is_exact() {
        assert_eq!(
            ValidationError::LoanTermNotInteger.to_string(),
            "loan_term must be a non-negative integer"
        );
    }

    // === ValidationOutcome ===

    #[test]
    fn test_outcome_from_ok_omits_error() {
        let outcome = ValidationOutcome::from(Ok(()));
        assert!(outcome.valid);
        assert_eq!(outcome.error, None);

        let json = serde_json::to_value(&outcome).expect("serialize should succeed");
        assert_eq!(json, serde_json::json!({"valid": true}));
    }

    #[test]
    fn test_outcome_from_err_carries_message() {
        let outcome = ValidationOutcome::from(Err(ValidationError::LoanAmountNotPositive));
        assert!(!outcome.valid);

        let json = serde_json::to_value(&outcome).expect("serialize should succeed");
        assert_eq!(
            json,
            serde_json::json!({
                "valid": false,
                "error": "loan_amount must be a positive number"
            })
        );
    }
}
