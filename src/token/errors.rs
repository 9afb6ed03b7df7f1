use thiserror::Error;

use crate::token::types::TokenId;

/// Rejected edits to a token sequence
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SequenceError {
    #[error("Insert position {position} is outside 0..={len}")]
    PositionOutOfRange { position: usize, len: usize },
    #[error("Unknown operator symbol: {0:?}")]
    UnknownOperator(String),
    #[error("No token with id {0}")]
    TokenNotFound(TokenId),
    #[error("Token {0} is a number and cannot be removed")]
    ImmovableNumber(TokenId),
    #[error("Invalid token id: {0:?}")]
    InvalidTokenId(String),
}
