//! Customer and loan field validators
//!
//! All validators are pure and total: malformed input yields `false` or a
//! typed [`ValidationError`], never a panic. Email and phone are optional
//! fields, so an absent or empty value is accepted.

use crate::error::ValidationError;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

/// Validate email format
///
/// `None` and the empty string are valid (optional field). Anything else
/// must look like `local@domain.tld` with no whitespace or extra `@`.
pub fn is_valid_email(email: Option<&str>) -> bool {
    let email = match email {
        Some(e) if !e.is_empty() => e,
        _ => return true,
    };

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
    regex.is_match(email)
}

/// Validate phone format (basic - allows digits, spaces, hyphens, plus, parentheses)
///
/// `None` and the empty string are valid (optional field). Anything else
/// must be 7 to 20 characters drawn from the allowed set.
pub fn is_valid_phone_format(phone: Option<&str>) -> bool {
    let phone = match phone {
        Some(p) if !p.is_empty() => p,
        _ => return true,
    };

    static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = PHONE_REGEX.get_or_init(|| Regex::new(r"^[\d\s\-\+\(\)]{7,20}$").unwrap());
    regex.is_match(phone)
}

/// Validate that both required name fields are provided and non-blank
///
/// Checks `first_name` then `last_name`; the first failing field wins.
pub fn validate_names(
    first_name: Option<&str>,
    last_name: Option<&str>,
) -> Result<(), ValidationError> {
    match first_name {
        Some(name) if !name.trim().is_empty() => {}
        _ => return Err(ValidationError::FirstNameRequired),
    }
    match last_name {
        Some(name) if !name.trim().is_empty() => {}
        _ => return Err(ValidationError::LastNameRequired),
    }
    Ok(())
}

/// Validate the loan numeric triple: amount, interest rate, and term
///
/// Values may arrive as JSON numbers or as strings; strings are parsed with
/// leading-substring semantics (`"5abc"` reads as 5, `"3.7"` as a term reads
/// as 3). Checks run in order and the first failing field wins:
///
/// - `loan_amount` must parse and be strictly positive
/// - `interest_rate` must parse and be non-negative
/// - `loan_term` must have an integer prefix and be non-negative
///
/// A falsy value (null, `false`, numeric zero, empty string) always fails
/// its check, so an `interest_rate` of the number `0` is rejected while the
/// string `"0"` is accepted. That quirk is part of the API contract.
pub fn validate_loan_amounts(
    loan_amount: &Value,
    interest_rate: &Value,
    loan_term: &Value,
) -> Result<(), ValidationError> {
    if is_falsy(loan_amount) || !loose_f64(loan_amount).is_some_and(|n| n > 0.0) {
        return Err(ValidationError::LoanAmountNotPositive);
    }
    if is_falsy(interest_rate) || !loose_f64(interest_rate).is_some_and(|n| n >= 0.0) {
        return Err(ValidationError::InterestRateNegative);
    }
    if is_falsy(loan_term) || !loose_i64(loan_term).is_some_and(|n| n >= 0) {
        return Err(ValidationError::LoanTermNotInteger);
    }
    Ok(())
}

/// JSON falsiness: null, false, numeric zero, or the empty string
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Loose float read: numbers pass through, strings parse by longest prefix
fn loose_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_float_prefix(s),
        _ => None,
    }
}

/// Loose integer read: numbers truncate toward zero, strings parse a
/// sign-and-digits prefix
fn loose_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(i),
            None => n.as_f64().map(|f| f.trunc() as i64),
        },
        Value::String(s) => parse_int_prefix(s),
        _ => None,
    }
}

/// Parse the longest leading decimal-literal prefix of `s`
///
/// Accepts an optional sign, integer digits, a fractional part, and an
/// exponent; stops at the first character that cannot extend the literal.
/// Returns `None` when no digits are found (`"abc"`, `"-"`, `""`).
fn parse_float_prefix(s: &str) -> Option<f64> {
    let t = s.trim_start();
    let b = t.as_bytes();
    let mut i = 0;

    if matches!(b.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut has_digits = i > int_start;

    if i < b.len() && b[i] == b'.' {
        let mut j = i + 1;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        // Consume the dot only as part of a valid literal ("5." or ".5")
        if j > i + 1 || has_digits {
            has_digits = has_digits || j > i + 1;
            i = j;
        }
    }

    if !has_digits {
        return None;
    }

    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && matches!(b[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    t[..i].parse::<f64>().ok()
}

/// Parse an optional sign followed by a leading digit run
fn parse_int_prefix(s: &str) -> Option<i64> {
    let t = s.trim_start();
    let b = t.as_bytes();
    let mut i = 0;

    if matches!(b.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let digit_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    if i == digit_start {
        return None;
    }

    t[..i].parse::<i64>().ok()
}
