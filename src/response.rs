//! Outbound loan record filtering
//!
//! Persisted rows occasionally pick up stray keys in the wrong naming
//! convention (handler-added computed fields, older writes). The response
//! filter drops those, keeping the canonical snake_case field set plus any
//! key that already contains an underscore. No renaming happens here; that
//! is [`crate::mapping::map_request_to_db`]'s job on the way in.

use crate::mapping::Record;
use std::collections::HashSet;
use std::sync::OnceLock;
use tracing::trace;

/// Canonical snake_case field names allowed in a loan response
const SNAKE_CASE_FIELDS: [&str; 22] = [
    "first_name",
    "last_name",
    "home_phone",
    "mobile_phone",
    "birthdate",
    "referral",
    "identification_info",
    "address",
    "customer_name",
    "customer_number",
    "loan_amount",
    "interest_rate",
    "interest_amount",
    "total_payable_amount",
    "loan_issued_date",
    "loan_term",
    "due_date",
    "transaction_number",
    "collateral_description",
    "customer_note",
    "remaining_balance",
    "created_by",
];

pub(crate) fn snake_case_fields() -> &'static HashSet<&'static str> {
    static FIELDS: OnceLock<HashSet<&'static str>> = OnceLock::new();
    FIELDS.get_or_init(|| SNAKE_CASE_FIELDS.into_iter().collect())
}

/// Format a loan record for the API response
///
/// Returns a copy of the record with every key removed that is neither in
/// the canonical field list nor contains an underscore. Unknown keys that do
/// contain an underscore are kept untouched, as are all values.
///
/// # Examples
///
/// ```
/// use loan_fields::mapping::Record;
/// use loan_fields::response::format_loan_response;
/// use serde_json::json;
///
/// let mut row = Record::new();
/// row.insert("first_name".to_string(), json!("A"));
/// row.insert("extraCamel".to_string(), json!("B"));
/// row.insert("custom_field".to_string(), json!("C"));
///
/// let formatted = format_loan_response(&row);
/// assert_eq!(formatted.len(), 2);
/// assert!(formatted.get("extraCamel").is_none());
/// assert_eq!(formatted.get("custom_field"), Some(&json!("C")));
/// ```
pub fn format_loan_response(loan: &Record) -> Record {
    let mut formatted = loan.clone();

    formatted.retain(|key, _| {
        let keep = snake_case_fields().contains(key.as_str()) || key.contains('_');
        if !keep {
            trace!(field = %key, "dropping non-canonical response field");
        }
        keep
    });

    formatted
}
