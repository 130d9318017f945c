//! Displayed-price text cleaning and parsing.

use std::sync::LazyLock;

use regex::Regex;

/// Everything that is not an ASCII digit or a decimal point.
static NON_PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\d.]").expect("valid regex"));

/// Parses a displayed price such as `"₹33,999"` into a numeric value.
///
/// Currency symbols, grouping commas, and whitespace are stripped before
/// parsing the remainder as `f64`. Grouping commas are removed blindly,
/// so text from locales that use ',' as the decimal mark is misread
/// (e.g. `"33,99"` parses as 3399). Returns `None` when the cleaned text
/// is empty or not a valid number.
#[must_use]
pub fn parse_price(text: &str) -> Option<f64> {
    let cleaned = NON_PRICE_RE.replace_all(text, "");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rupee_price_with_grouping_comma() {
        assert_eq!(parse_price("₹33,999"), Some(33999.0));
    }

    #[test]
    fn indian_grouping_with_decimal() {
        assert_eq!(parse_price("₹1,23,456.78"), Some(123_456.78));
    }

    #[test]
    fn bare_digits() {
        assert_eq!(parse_price("29999"), Some(29999.0));
    }

    #[test]
    fn surrounding_whitespace_and_noise() {
        assert_eq!(parse_price("  MRP: ₹ 499 only "), Some(499.0));
    }

    #[test]
    fn noise_interleaved_preserves_digit_order() {
        assert_eq!(parse_price("₹33,999"), parse_price("33999"));
    }

    #[test]
    fn empty_input_fails() {
        assert_eq!(parse_price(""), None);
    }

    #[test]
    fn all_noise_fails() {
        assert_eq!(parse_price("₹ coming soon"), None);
    }

    #[test]
    fn separators_only_fails() {
        assert_eq!(parse_price("..."), None);
    }

    #[test]
    fn two_decimal_points_fails() {
        assert_eq!(parse_price("1.2.3"), None);
    }
}
