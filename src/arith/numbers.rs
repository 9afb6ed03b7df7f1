use crate::arith::constants::{DISPLAY_DECIMALS, EPSILON, INTEGER_TOLERANCE};

/// True when `value` is an integer, allowing for floating-point drift
#[inline]
pub fn is_integer(value: f64) -> bool {
    (value - value.round()).abs() < INTEGER_TOLERANCE
}

/// Comparison used for targets and zero divisors
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Render a value for display: integers without a fractional part, anything
/// else rounded to four decimals with trailing zeros stripped.
pub fn format_number(value: f64) -> String {
    if is_integer(value) {
        // adding 0.0 folds -0 into 0
        return format!("{:.0}", value.round() + 0.0);
    }

    let fixed = format!("{:.*}", DISPLAY_DECIMALS, value);
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        fixed
    }
}
