//! Number formatting for user-facing text.
//!
//! Amounts are rendered the way the en-IN locale does it: up to three
//! fraction digits, trailing zeros dropped, and Indian digit grouping
//! (the last three digits, then groups of two: `12,34,567`).

use chrono::{DateTime, Utc};

/// Default currency symbol used in all generated text.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Format a number with en-IN grouping, e.g. `1234567.5` → `"12,34,567.5"`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let is_zero = int_part.chars().all(|c| c == '0') && frac.is_empty();
    let mut out = String::with_capacity(fixed.len() + 8);
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&group_indian(int_part));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Format an amount prefixed with a currency symbol, e.g. `"₹50,000"`.
pub fn format_currency(symbol: &str, value: f64) -> String {
    format!("{symbol}{}", format_number(value))
}

/// Format a percentage with one decimal place (no `%` sign).
pub fn format_pct(value: f64) -> String {
    format!("{value:.1}")
}

/// Format a timestamp like en-IN `toLocaleString`, e.g. `"4/2/2024, 9:30:00 am"`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%-d/%-m/%Y, %-I:%M:%S %P").to_string()
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    let mut out = groups.join(",");
    out.push(',');
    out.push_str(last_three);
    out
}
