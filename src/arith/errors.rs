use thiserror::Error;

/// Domain faults of the arithmetic primitives
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArithmeticError {
    #[error("Factorial of a negative number: {0}")]
    NegativeFactorial(f64),
    #[error("Factorial of a non-integer: {0}")]
    NotAnInteger(f64),
    #[error("Factorial overflow: {0}! exceeds the supported range")]
    FactorialOverflow(f64),
}
