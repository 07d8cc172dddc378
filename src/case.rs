//! camelCase / snake_case key conversion
//!
//! These conversions reproduce the naming semantics the loan API has always
//! used, quirks included. In particular the two directions are NOT inverses:
//! a leading uppercase letter gains a leading underscore going to snake_case
//! (`"ABC"` → `"_a_b_c"`), and only an underscore immediately followed by a
//! lowercase ASCII letter is collapsed going back. Callers depend on stored
//! keys produced under these rules, so the asymmetry is load-bearing.

/// Convert a camelCase identifier to snake_case
///
/// Every ASCII uppercase letter is replaced with an underscore followed by
/// its lowercase form, including at position zero. Everything else passes
/// through unchanged.
///
/// # Examples
///
/// ```
/// use loan_fields::case::camel_to_snake;
///
/// assert_eq!(camel_to_snake("loanAmount"), "loan_amount");
/// assert_eq!(camel_to_snake("already_snake"), "already_snake");
/// assert_eq!(camel_to_snake("ABC"), "_a_b_c");
/// ```
pub fn camel_to_snake(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);

    for ch in s.chars() {
        if ch.is_ascii_uppercase() {
            result.push('_');
            result.push(ch.to_ascii_lowercase());
        } else {
            result.push(ch);
        }
    }

    result
}

/// Convert a snake_case identifier to camelCase
///
/// Every underscore immediately followed by a lowercase ASCII letter is
/// removed and that letter uppercased. Underscore runs and underscores
/// followed by anything else are left as-is.
///
/// # Examples
///
/// ```
/// use loan_fields::case::snake_to_camel;
///
/// assert_eq!(snake_to_camel("loan_amount"), "loanAmount");
/// assert_eq!(snake_to_camel("__x"), "_X");
/// assert_eq!(snake_to_camel("a_1"), "a_1");
/// ```
pub fn snake_to_camel(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '_' {
            if let Some(&next) = chars.peek() {
                if next.is_ascii_lowercase() {
                    result.push(next.to_ascii_uppercase());
                    chars.next();
                    continue;
                }
            }
        }
        result.push(ch);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    // === camel_to_snake ===

    #[test]
    fn test_camel_to_snake_simple() {
        assert_eq!(camel_to_snake("firstName"), "first_name");
        assert_eq!(camel_to_snake("loanIssuedDate"), "loan_issued_date");
        assert_eq!(camel_to_snake("userId"), "user_id");
    }

    #[test]
    fn test_camel_to_snake_no_uppercase_unchanged() {
        assert_eq!(camel_to_snake("first_name"), "first_name");
        assert_eq!(camel_to_snake("lowercase"), "lowercase");
        assert_eq!(camel_to_snake(""), "");
    }

    #[test]
    fn test_camel_to_snake_leading_uppercase_gets_underscore() {
        assert_eq!(camel_to_snake("FirstName"), "_first_name");
        assert_eq!(camel_to_snake("ABC"), "_a_b_c");
    }

    #[test]
    fn test_camel_to_snake_digits_and_symbols_pass_through() {
        assert_eq!(camel_to_snake("field1Value"), "field1_value");
        assert_eq!(camel_to_snake("a-B"), "a-_b");
    }

    #[test]
    fn test_camel_to_snake_non_ascii_uppercase_untouched() {
        // The [A-Z] character class is ASCII-only
        assert_eq!(camel_to_snake("caféÉclair"), "caféÉclair");
    }

    // === snake_to_camel ===

    #[test]
    fn test_snake_to_camel_simple() {
        assert_eq!(snake_to_camel("first_name"), "firstName");
        assert_eq!(snake_to_camel("loan_issued_date"), "loanIssuedDate");
    }

    #[test]
    fn test_snake_to_camel_no_underscore_unchanged() {
        assert_eq!(snake_to_camel("firstname"), "firstname");
        assert_eq!(snake_to_camel(""), "");
    }

    #[test]
    fn test_snake_to_camel_underscore_run() {
        // Only the underscore directly before a lowercase letter collapses
        assert_eq!(snake_to_camel("__x"), "_X");
        assert_eq!(snake_to_camel("a__b"), "a_B");
    }

    #[test]
    fn test_snake_to_camel_underscore_before_non_letter_kept() {
        assert_eq!(snake_to_camel("a_1"), "a_1");
        assert_eq!(snake_to_camel("a_B"), "a_B");
        assert_eq!(snake_to_camel("trailing_"), "trailing_");
    }

    // === round trips ===

    #[test]
    fn test_roundtrip_holds_for_plain_camel_case() {
        for key in ["loanAmount", "firstName", "collateralDescription", "x"] {
            assert_eq!(snake_to_camel(&camel_to_snake(key)), key);
        }
    }

    #[test]
    fn test_roundtrip_breaks_for_underscored_input() {
        // An existing underscore is collapsed on the way back
        assert_eq!(snake_to_camel(&camel_to_snake("first_name")), "firstName");
        assert_ne!(snake_to_camel(&camel_to_snake("first_name")), "first_name");
    }

    #[test]
    fn test_roundtrip_breaks_for_mixed_underscore_and_uppercase() {
        // "A_b" -> "_a_b" -> "AB"
        assert_eq!(snake_to_camel(&camel_to_snake("A_b")), "AB");
    }
}
