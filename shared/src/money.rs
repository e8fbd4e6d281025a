//! Money helpers using rust_decimal for precision
//!
//! All amounts are `Decimal`. Raw user input is parsed leniently: text that
//! is not a number counts as zero, which is how the checkout inputs have
//! always behaved. A number too large for `Decimal` saturates instead, so
//! range checks still see it as too large.

use rust_decimal::prelude::*;

/// Rounding precision for monetary values (2 decimal places, half away from zero)
const DECIMAL_PLACES: u32 = 2;

/// Currency prefix used on receipts and in tables
pub const CURRENCY_PREFIX: &str = "Rs.";

/// Parse a raw numeric input, treating non-numeric text as zero
///
/// Numbers outside the `Decimal` range saturate to `Decimal::MAX` or
/// `Decimal::MIN`; ones too small to represent become zero.
pub fn parse_amount(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .unwrap_or_else(|_| saturate(trimmed))
}

/// Out-of-range fallback for text `Decimal` could not parse
fn saturate(trimmed: &str) -> Decimal {
    // Digits, sign, point and exponent only; keeps "inf" and "NaN" at zero
    let numeric = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !numeric {
        return Decimal::ZERO;
    }
    let Ok(value) = trimmed.parse::<f64>() else {
        return Decimal::ZERO;
    };

    if value.abs() < 1.0 {
        Decimal::ZERO
    } else if value > 0.0 {
        Decimal::MAX
    } else {
        Decimal::MIN
    }
}

/// Parse a raw quantity input; fractions are truncated toward zero
///
/// Values beyond the `i64` range saturate like [`parse_amount`].
pub fn parse_quantity(raw: &str) -> i64 {
    let value = parse_amount(raw).trunc();
    value.to_i64().unwrap_or(if value.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Round a monetary value to 2 decimal places
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Format a monetary value with two decimals, e.g. `250.00`
pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", round_money(value))
}

/// Format a monetary value with the currency prefix, e.g. `Rs. 250.00`
pub fn format_money(value: Decimal) -> String {
    format!("{} {}", CURRENCY_PREFIX, format_amount(value))
}

/// Format a monetary value with thousands separators, e.g. `Rs. 12,500.00`
pub fn format_money_grouped(value: Decimal) -> String {
    let fixed = format_amount(value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value.is_sign_negative() && !value.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{} {}{}.{}", CURRENCY_PREFIX, sign, grouped, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.50"), d("12.50"));
        assert_eq!(parse_amount("  7 "), d("7"));
        assert_eq!(parse_amount("-3"), d("-3"));
        assert_eq!(parse_amount("1e2"), d("100"));
    }

    #[test]
    fn test_parse_amount_invalid_is_zero() {
        assert_eq!(parse_amount(""), Decimal::ZERO);
        assert_eq!(parse_amount("abc"), Decimal::ZERO);
        assert_eq!(parse_amount("NaN"), Decimal::ZERO);
    }

    #[test]
    fn test_parse_amount_out_of_range_saturates() {
        assert_eq!(parse_amount("1e30"), Decimal::MAX);
        assert_eq!(parse_amount("-1e30"), Decimal::MIN);
        assert_eq!(parse_amount(&"9".repeat(33)), Decimal::MAX);
        assert_eq!(parse_amount("1e-40"), Decimal::ZERO);
        assert_eq!(parse_amount("inf"), Decimal::ZERO);
        assert_eq!(parse_amount("1e30x"), Decimal::ZERO);
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3"), 3);
        assert_eq!(parse_quantity("2.9"), 2);
        assert_eq!(parse_quantity("-1"), -1);
        assert_eq!(parse_quantity("x"), 0);
        assert_eq!(parse_quantity("1e30"), i64::MAX);
        assert_eq!(parse_quantity("-1e30"), i64::MIN);
        assert_eq!(parse_quantity("99999999999999999999"), i64::MAX);
    }

    #[test]
    fn test_accumulation_precision() {
        let mut total = Decimal::ZERO;
        for _ in 0..1000 {
            total += d("0.01");
        }
        assert_eq!(total, d("10.00"));
    }

    #[test]
    fn test_round_money() {
        assert_eq!(round_money(d("1.005")), d("1.01"));
        assert_eq!(round_money(d("-1.005")), d("-1.01"));
        assert_eq!(round_money(d("2.344")), d("2.34"));
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(d("250")), "Rs. 250.00");
        assert_eq!(format_money(d("0.5")), "Rs. 0.50");
        assert_eq!(format_amount(d("99.999")), "100.00");
    }

    #[test]
    fn test_format_money_grouped() {
        assert_eq!(format_money_grouped(d("12500")), "Rs. 12,500.00");
        assert_eq!(format_money_grouped(d("999")), "Rs. 999.00");
        assert_eq!(format_money_grouped(d("1234567.891")), "Rs. 1,234,567.89");
        assert_eq!(format_money_grouped(d("-1500")), "Rs. -1,500.00");
    }
}
