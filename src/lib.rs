//! # Loan-Fields
//!
//! Field validation and naming-convention mapping helpers for customer/loan record APIs.
//!
//! ## Features
//!
//! - **Field Validators**: Pure predicates for email, phone, name, and loan-amount fields
//! - **Case Conversion**: camelCase ↔ snake_case key renaming with fixed legacy semantics
//! - **Request Mapping**: Rename request payload keys to the database convention
//! - **Response Filtering**: Strip stray non-canonical keys from outbound records
//! - **Contract Error Messages**: Validation failures carry exact, client-facing wording
//!
//! ## Quick Start
//!
//! ```rust
//! use loan_fields::prelude::*;
//! use serde_json::json;
//!
//! // Inbound request body, keys in either naming convention
//! let mut body = Record::new();
//! body.insert("firstName".to_string(), json!("Ada"));
//! body.insert("loanAmount".to_string(), json!(1000));
//! body.insert("customField".to_string(), json!("kept"));
//!
//! // Rename keys to the persistence convention
//! let row = map_request_to_db(&body);
//! assert_eq!(row.get("first_name"), Some(&json!("Ada")));
//! assert_eq!(row.get("loan_amount"), Some(&json!(1000)));
//! assert_eq!(row.get("custom_field"), Some(&json!("kept")));
//!
//! // Validate the numeric triple before persisting
//! let result = validate_loan_amounts(&json!(1000), &json!(5), &json!(30));
//! assert!(result.is_ok());
//! ```

pub mod case;
pub mod error;
pub mod mapping;
pub mod response;
pub mod validators;

/// Re-exports of commonly used types and functions
pub mod prelude {
    pub use crate::case::{camel_to_snake, snake_to_camel};
    pub use crate::error::{ValidationError, ValidationOutcome};
    pub use crate::mapping::{Record, map_request_to_db};
    pub use crate::response::format_loan_response;
    pub use crate::validators::{
        is_valid_email, is_valid_phone_format, validate_loan_amounts, validate_names,
    };
}
