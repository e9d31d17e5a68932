//! Numeric coercion for amount fields.
//!
//! Form inputs deliver amounts as text. Anything that is not a number is
//! treated as zero rather than rejected: the longest numeric prefix wins
//! (`"1500abc"` is 1500), and text without one (`""`, `"abc"`) is 0.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Largest exponent magnitude worth evaluating; beyond it the result is
/// either out of range or rounds to zero.
const MAX_EXPONENT: i64 = 60;

/// Coerce free text into an amount, falling back to zero.
pub fn coerce_amount(text: &str) -> Decimal {
    match parse_prefix(text.trim_start()) {
        Some(value) if !value.is_zero() => value,
        Some(_) => Decimal::ZERO,
        None => {
            if !text.trim().is_empty() {
                tracing::trace!(input = text, "non-numeric amount coerced to 0");
            }
            Decimal::ZERO
        }
    }
}

/// Parse the numeric prefix of `text`: `[+-]digits[.digits][(e|E)[+-]digits]`.
fn parse_prefix(text: &str) -> Option<Decimal> {
    let bytes = text.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = &text[int_start..pos];

    let mut frac_digits = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        frac_digits = &text[frac_start..end];
        pos = end;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let mut normalized = String::with_capacity(int_digits.len() + frac_digits.len() + 3);
    if negative {
        normalized.push('-');
    }
    normalized.push_str(if int_digits.is_empty() { "0" } else { int_digits });
    if !frac_digits.is_empty() {
        normalized.push('.');
        normalized.push_str(frac_digits);
    }

    let mantissa = Decimal::from_str(&normalized).ok()?;
    let exponent = parse_exponent(&text[pos..]);
    apply_exponent(mantissa, exponent)
}

/// Parse an exponent suffix such as `e5` or `E-3`. Missing or malformed
/// suffixes count as zero, matching how trailing junk is ignored.
fn parse_exponent(rest: &str) -> i64 {
    let bytes = rest.as_bytes();
    if !matches!(bytes.first(), Some(b'e') | Some(b'E')) {
        return 0;
    }

    let mut pos = 1;
    let negative = match bytes.get(pos) {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let digits_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    if pos == digits_start {
        return 0;
    }

    // Saturate long exponents; anything past MAX_EXPONENT is handled the same.
    let magnitude = rest[digits_start..pos]
        .parse::<i64>()
        .unwrap_or(i64::MAX)
        .min(MAX_EXPONENT + 1);
    if negative { -magnitude } else { magnitude }
}

fn apply_exponent(mantissa: Decimal, exponent: i64) -> Option<Decimal> {
    if mantissa.is_zero() || exponent == 0 {
        return Some(mantissa);
    }
    if exponent > MAX_EXPONENT {
        return None;
    }
    if exponent < -MAX_EXPONENT {
        return Some(Decimal::ZERO);
    }

    let mut value = mantissa;
    for _ in 0..exponent.unsigned_abs() {
        value = if exponent > 0 {
            value.checked_mul(Decimal::TEN)?
        } else {
            value.checked_div(Decimal::TEN)?
        };
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_plain_integers() {
        assert_eq!(coerce_amount("500000"), dec!(500000));
        assert_eq!(coerce_amount("-150000"), dec!(-150000));
        assert_eq!(coerce_amount("+42"), dec!(42));
    }

    #[test]
    fn test_fractions() {
        assert_eq!(coerce_amount("1500.75"), dec!(1500.75));
        assert_eq!(coerce_amount(".5"), dec!(0.5));
        assert_eq!(coerce_amount("5."), dec!(5));
        assert_eq!(coerce_amount("-.25"), dec!(-0.25));
    }

    #[test]
    fn test_non_numeric_is_zero() {
        assert_eq!(coerce_amount(""), Decimal::ZERO);
        assert_eq!(coerce_amount("   "), Decimal::ZERO);
        assert_eq!(coerce_amount("abc"), Decimal::ZERO);
        assert_eq!(coerce_amount("."), Decimal::ZERO);
        assert_eq!(coerce_amount("-"), Decimal::ZERO);
        assert_eq!(coerce_amount("Infinity"), Decimal::ZERO);
        assert_eq!(coerce_amount("NaN"), Decimal::ZERO);
    }

    #[test]
    fn test_numeric_prefix_wins() {
        assert_eq!(coerce_amount("1500abc"), dec!(1500));
        assert_eq!(coerce_amount("  12.5 rupiah"), dec!(12.5));
        assert_eq!(coerce_amount("3.14.15"), dec!(3.14));
        assert_eq!(coerce_amount("1,000"), dec!(1));
    }

    #[test]
    fn test_exponent() {
        assert_eq!(coerce_amount("1e3"), dec!(1000));
        assert_eq!(coerce_amount("2.5E2"), dec!(250));
        assert_eq!(coerce_amount("15e-1"), dec!(1.5));
        assert_eq!(coerce_amount("7e"), dec!(7));
        assert_eq!(coerce_amount("7e+"), dec!(7));
    }

    #[test]
    fn test_out_of_range_is_zero() {
        assert_eq!(coerce_amount("1e100"), Decimal::ZERO);
        assert_eq!(coerce_amount("99999999999999999999999999999999"), Decimal::ZERO);
        assert_eq!(coerce_amount("1e-100"), Decimal::ZERO);
    }

    #[test]
    fn test_negative_zero_normalized() {
        let value = coerce_amount("-0");
        assert_eq!(value, Decimal::ZERO);
        assert!(!value.is_sign_negative());
    }
}
