use thiserror::Error;

/// Errors that can occur while parsing user input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Input cannot be empty")]
    EmptyInput,
    #[error("Digit string must contain only digits: {0}")]
    InvalidDigitString(String),
    #[error("Expected {expected} digits, found {found}")]
    WrongDigitCount { expected: usize, found: usize },
    #[error("Unknown symbol {symbol:?} at offset {offset}")]
    UnknownSymbol { symbol: String, offset: usize },
}
