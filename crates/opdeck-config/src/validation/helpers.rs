//! Shared range-validation helpers used by all domain validators.

/// Push an error if `value` is outside `[min, max]` (integer).
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u64, min: u64, max: u64) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error unless `min < value <= max`.
pub(crate) fn validate_open_closed_f64(
    errors: &mut Vec<String>,
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) {
    if !(value > min && value <= max) {
        errors.push(format!("{name} = {value} is out of range ({min}, {max}]"));
    }
}

/// Push an error unless `value` is a finite number greater than zero.
pub(crate) fn validate_positive(errors: &mut Vec<String>, name: &str, value: f64) {
    if !(value.is_finite() && value > 0.0) {
        errors.push(format!("{name} = {value} must be a positive width"));
    }
}
