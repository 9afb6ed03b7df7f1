use log::debug;

use crate::arith::constants::MAX_FACTORIAL_INPUT;
use crate::arith::errors::ArithmeticError;
use crate::arith::numbers::is_integer;

/// Exact factorial of a small non-negative integer.
///
/// # Errors
///
/// - `NegativeFactorial` for negative (or NaN) input
/// - `FactorialOverflow` for input above 20
/// - `NotAnInteger` for input that is not within tolerance of an integer
pub fn factorial(n: f64) -> Result<f64, ArithmeticError> {
    if n.is_nan() || n < 0.0 {
        debug!("Rejecting factorial of negative value {}", n);
        return Err(ArithmeticError::NegativeFactorial(n));
    }
    if n > MAX_FACTORIAL_INPUT {
        debug!("Rejecting factorial of {} (overflow)", n);
        return Err(ArithmeticError::FactorialOverflow(n));
    }
    if !is_integer(n) {
        debug!("Rejecting factorial of non-integer {}", n);
        return Err(ArithmeticError::NotAnInteger(n));
    }

    // 20! < u64::MAX, so the product is exact before the final conversion
    let n = n.round() as u64;
    let product: u64 = (2..=n).product();
    Ok(product as f64)
}
