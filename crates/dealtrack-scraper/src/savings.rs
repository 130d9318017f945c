//! Savings derivation from live and deal price text.

use crate::price::parse_price;

/// Integer percentage saved by the deal price relative to the live price.
///
/// The live price is the denominator: the result reads as "how much
/// cheaper is the deal versus what the retailer charges right now".
/// Unparseable input or a non-positive live price yields 0 rather than an
/// error. A deal price above the live price yields a negative percentage,
/// which is preserved.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // truncation toward zero is the rounding rule
pub fn savings_percentage(live_text: &str, deal_text: &str) -> i16 {
    match (parse_price(live_text), parse_price(deal_text)) {
        (Some(live), Some(deal)) if live > 0.0 => ((live - deal) / live * 100.0) as i16,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_toward_zero() {
        // (33999 - 29999) / 33999 * 100 = 11.76..
        assert_eq!(savings_percentage("₹33,999", "29999"), 11);
    }

    #[test]
    fn exact_percentage() {
        assert_eq!(savings_percentage("200", "150"), 25);
    }

    #[test]
    fn zero_live_price_yields_zero() {
        assert_eq!(savings_percentage("0", "29999"), 0);
    }

    #[test]
    fn unparseable_live_price_yields_zero() {
        assert_eq!(savings_percentage("not a number", "100"), 0);
    }

    #[test]
    fn unparseable_deal_price_yields_zero() {
        assert_eq!(savings_percentage("₹33,999", "call us"), 0);
    }

    #[test]
    fn empty_live_price_yields_zero() {
        assert_eq!(savings_percentage("", "100"), 0);
    }

    #[test]
    fn deal_above_live_goes_negative() {
        assert_eq!(savings_percentage("100", "150"), -50);
    }

    #[test]
    fn negative_fraction_truncates_toward_zero() {
        // (100 - 101) / 100 * 100 = -1.0; (100 - 100.5) / 100 * 100 = -0.5 -> 0
        assert_eq!(savings_percentage("100", "100.5"), 0);
        assert_eq!(savings_percentage("100", "101"), -1);
    }

    #[test]
    fn identical_prices_yield_zero() {
        assert_eq!(savings_percentage("₹29,999", "29999"), 0);
    }
}
