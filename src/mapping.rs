//! Request payload to database field mapping
//!
//! Inbound request bodies may use either naming convention; persisted rows
//! use snake_case. Known fields go through a fixed table (which also covers
//! irregular renames like `birthDate` → `birthdate`); anything else falls
//! back to automatic conversion.

use crate::case::camel_to_snake;
use indexmap::IndexMap;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::trace;

/// An ordered JSON-object-shaped mapping, as carried by request bodies and
/// database row projections
pub type Record = IndexMap<String, Value>;

/// Fixed camelCase → snake_case renames for the known customer/loan fields
const FIELD_MAPPINGS: [(&str, &str); 16] = [
    ("firstName", "first_name"),
    ("lastName", "last_name"),
    ("homePhone", "home_phone"),
    ("mobilePhone", "mobile_phone"),
    ("birthDate", "birthdate"),
    ("identificationInfo", "identification_info"),
    ("loanAmount", "loan_amount"),
    ("interestRate", "interest_rate"),
    ("loanIssuedDate", "loan_issued_date"),
    ("loanTerm", "loan_term"),
    ("customerNumber", "customer_number"),
    ("customerName", "customer_name"),
    ("collateralDescription", "collateral_description"),
    ("customerNote", "customer_note"),
    ("transactionNumber", "transaction_number"),
    ("userId", "user_id"),
];

pub(crate) fn field_mappings() -> &'static HashMap<&'static str, &'static str> {
    static MAPPINGS: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    MAPPINGS.get_or_init(|| FIELD_MAPPINGS.into_iter().collect())
}

/// Map a request body (camelCase or snake_case keys) to database fields
///
/// Keys present in the fixed mapping table use the mapped name; all other
/// keys are converted with [`camel_to_snake`]. Values are carried over
/// unchanged. When two input keys resolve to the same output key, the later
/// one wins silently.
///
/// # Examples
///
/// ```
/// use loan_fields::mapping::{Record, map_request_to_db};
/// use serde_json::json;
///
/// let mut body = Record::new();
/// body.insert("firstName".to_string(), json!("A"));
/// body.insert("customField".to_string(), json!("B"));
///
/// let mapped = map_request_to_db(&body);
/// assert_eq!(mapped.get("first_name"), Some(&json!("A")));
/// assert_eq!(mapped.get("custom_field"), Some(&json!("B")));
/// ```
pub fn map_request_to_db(body: &Record) -> Record {
    let mut mapped = Record::with_capacity(body.len());

    for (key, value) in body {
        let snake_key = match field_mappings().get(key.as_str()) {
            Some(mapped_key) => (*mapped_key).to_string(),
            None => camel_to_snake(key),
        };
        if mapped.contains_key(&snake_key) {
            trace!(key = %key, field = %snake_key, "request key collides with an earlier field");
        }
        mapped.insert(snake_key, value.clone());
    }

    mapped
}
