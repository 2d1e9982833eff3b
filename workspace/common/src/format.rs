//! Number formatting for result panels.
//!
//! Rounding is done on the exact binary value of the `f64` (via
//! `Decimal::from_f64_retain`), so `1.005` shows as `1.00` the same way a
//! browser's `toFixed(2)` shows it.

use rust_decimal::{Decimal, RoundingStrategy};

fn non_finite(value: f64) -> Option<String> {
    if value.is_nan() {
        Some("NaN".to_string())
    } else if value.is_infinite() {
        Some(if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string())
    } else {
        None
    }
}

/// Shortest round-trip digits with a signed exponent, e.g. `1.5e+21`.
fn exponent_notation(value: f64) -> String {
    let text = format!("{:e}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{}e+{}", mantissa, exponent),
        _ => text,
    }
}

/// Two-decimal fixed notation.
///
/// From 1e21 up, `toFixed` gives up on fixed notation and prints the
/// exponent form instead; so does this.
pub fn fixed2(value: f64) -> String {
    if let Some(text) = non_finite(value) {
        return text;
    }
    if value.abs() >= 1e21 {
        return exponent_notation(value);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    let digits = match Decimal::from_f64_retain(magnitude) {
        Some(exact) => {
            let mut rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(2);
            rounded.to_string()
        }
        // Unreachable below 1e21, which `Decimal` always holds.
        None => format!("{:.2}", magnitude),
    };
    format!("{}{}", sign, digits)
}

/// [`fixed2`] with an explicit `+` on values that are not negative.
pub fn signed_fixed2(value: f64) -> String {
    if value >= 0.0 {
        format!("+{}", fixed2(value))
    } else {
        fixed2(value)
    }
}

/// Rounds half up to a whole number and groups thousands with commas.
pub fn grouped_integer(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    // Half up means away from zero above zero and toward zero below it.
    let strategy = if value >= 0.0 {
        RoundingStrategy::MidpointAwayFromZero
    } else {
        RoundingStrategy::MidpointTowardZero
    };
    // Past `Decimal`'s range every f64 is already whole; `Display` prints its
    // shortest digits without an exponent, as `toLocaleString` does.
    let text = match Decimal::from_f64_retain(value) {
        Some(exact) => {
            let whole = exact.round_dp_with_strategy(0, strategy);
            if whole.is_zero() {
                return "0".to_string();
            }
            whole.trunc().to_string()
        }
        None => format!("{}", value.round()),
    };
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    format!("{}{}", sign, group_thousands(digits))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
