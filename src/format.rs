//! Currency and date display for the Indonesian locale.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// Separator between the currency symbol and the digits.
const NBSP: char = '\u{a0}';

/// Format an amount as whole rupiah, e.g. `Rp 1.250.000`.
///
/// Rounds half away from zero and groups thousands with `.`.
pub fn format_rupiah(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    out.push_str("Rp");
    out.push(NBSP);
    out.push_str(&group_thousands(&digits));
    out
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// Format a `YYYY-MM-DD` input value as `DD/MM/YYYY`.
///
/// Empty or unparseable input yields an empty string.
pub fn format_date(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        return String::new();
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(e) => {
            tracing::debug!(input = value, error = %e, "unparseable date left blank");
            String::new()
        }
    }
}
