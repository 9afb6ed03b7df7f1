use log::debug;

use crate::PUZZLE_SIZE;
use crate::expression::errors::StructuralError;
use crate::token::{Paren, TokenKind};

/// Check parenthesis balance and the number count before evaluating.
///
/// # Errors
///
/// Returns `UnbalancedParentheses` when a `)` closes nothing or some `(`
/// stays open, and `WrongNumberCount` unless there are exactly four numbers.
pub fn validate_structure<T: AsRef<TokenKind>>(tokens: &[T]) -> Result<(), StructuralError> {
    let mut balance: i64 = 0;
    let mut numbers = 0;

    for token in tokens {
        match token.as_ref() {
            TokenKind::Paren(Paren::Open) => balance += 1,
            TokenKind::Paren(Paren::Close) => {
                balance -= 1;
                if balance < 0 {
                    debug!("Closing parenthesis before any opening one");
                    return Err(StructuralError::UnbalancedParentheses);
                }
            }
            TokenKind::Number(_) => numbers += 1,
            TokenKind::Binary(_) | TokenKind::Unary(_) => {}
        }
    }

    if balance != 0 {
        return Err(StructuralError::UnbalancedParentheses);
    }
    if numbers != PUZZLE_SIZE {
        return Err(StructuralError::WrongNumberCount { found: numbers });
    }
    Ok(())
}
