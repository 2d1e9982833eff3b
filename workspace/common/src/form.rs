//! Turning raw form text into request bodies.
//!
//! Numbers are read the lenient way browsers read them: leading whitespace
//! is skipped and the longest numeric prefix wins, so `"4.5 kg"` is `4.5`.
//! Anything that does not come out finite is rejected before a request is
//! built.

use std::collections::{BTreeMap, HashMap};

use crate::error::ValidationError;
use crate::payload::{OptimizeRequest, PredictRequest};

/// Read access to submitted form fields by name.
pub trait FormSource {
    fn field(&self, name: &str) -> Option<String>;
}

impl FormSource for HashMap<String, String> {
    fn field(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl FormSource for BTreeMap<String, String> {
    fn field(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FormSource for [(K, V)] {
    fn field(&self, name: &str) -> Option<String> {
        self.iter()
            .find(|(key, _)| key.as_ref() == name)
            .map(|(_, value)| value.as_ref().to_string())
    }
}

/// Parses the longest numeric prefix of `raw`, or `NaN` when there is none.
pub fn parse_float(raw: &str) -> f64 {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if text[end..].starts_with("Infinity") {
        return if bytes[0] == b'-' { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse().unwrap_or(f64::NAN)
}

fn finite_field<F: FormSource + ?Sized>(form: &F, name: &'static str) -> Result<f64, ValidationError> {
    let raw = form.field(name).unwrap_or_default();
    let value = parse_float(&raw);
    if value.is_finite() {
        Ok(value)
    } else {
        tracing::debug!(field = name, raw = %raw, "rejecting non-numeric form field");
        Err(ValidationError::NotANumber { field: name, raw })
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NotANumber { field, raw: value.to_string() })
    }
}

impl PredictRequest {
    pub const FIELDS: [&'static str; 8] = [
        "maize_bran",
        "cottonseed",
        "brewers_grain",
        "grass_silage",
        "nel",
        "cp",
        "lysine",
        "days_in_milk",
    ];

    pub fn from_form<F: FormSource + ?Sized>(form: &F) -> Result<Self, ValidationError> {
        Ok(Self {
            maize_bran: finite_field(form, "maize_bran")?,
            cottonseed: finite_field(form, "cottonseed")?,
            brewers_grain: finite_field(form, "brewers_grain")?,
            grass_silage: finite_field(form, "grass_silage")?,
            nel: finite_field(form, "nel")?,
            cp: finite_field(form, "cp")?,
            lysine: finite_field(form, "lysine")?,
            days_in_milk: finite_field(form, "days_in_milk")?,
        })
    }

    /// Rejects a request built without going through a form.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_finite("maize_bran", self.maize_bran)?;
        check_finite("cottonseed", self.cottonseed)?;
        check_finite("brewers_grain", self.brewers_grain)?;
        check_finite("grass_silage", self.grass_silage)?;
        check_finite("nel", self.nel)?;
        check_finite("cp", self.cp)?;
        check_finite("lysine", self.lysine)?;
        check_finite("days_in_milk", self.days_in_milk)
    }
}

impl OptimizeRequest {
    pub const FIELDS: [&'static str; 2] = ["target_milk", "max_cost"];

    pub fn from_form<F: FormSource + ?Sized>(form: &F) -> Result<Self, ValidationError> {
        Ok(Self {
            target_milk: finite_field(form, "target_milk")?,
            max_cost: finite_field(form, "max_cost")?,
        })
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_finite("target_milk", self.target_milk)?;
        check_finite("max_cost", self.max_cost)
    }
}
