//! Player-editable token sequence with undo history

mod errors;
mod sequence;
mod types;

pub use errors::SequenceError;
pub use sequence::TokenSequence;
pub use types::{BinaryOp, Operator, Paren, Token, TokenId, TokenKind, UnaryOp};
