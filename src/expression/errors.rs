use thiserror::Error;

use crate::arith::ArithmeticError;

/// Shape problems reported to the player with a message
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StructuralError {
    #[error("Parentheses are not balanced")]
    UnbalancedParentheses,
    #[error("Must use exactly four numbers")]
    WrongNumberCount { found: usize },
}

/// Faults raised while converting or evaluating; never shown in detail
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalFault {
    #[error("Mismatched parentheses")]
    MismatchedParentheses,
    #[error("Missing operand for {0}")]
    MissingOperand(&'static str),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Square root of negative number: {0}")]
    NegativeSquareRoot(f64),
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
    #[error("Invalid expression: {0} values left after evaluation")]
    InvalidExpression(usize),
}
