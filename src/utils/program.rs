use log::debug;

use crate::token::{Operator, TokenKind, UnaryOp};
use crate::utils::errors::UtilsError;

/// Split an expression such as `"(3-1)*5+0"` or `"sqrt 9 + 7"` into tokens.
/// Every digit is its own number.
///
/// # Errors
///
/// Returns `EmptyInput` for blank input and `UnknownSymbol` for anything that
/// is neither a digit, an operator, `sqrt`, nor a parenthesis.
pub fn parse_program(input: &str) -> Result<Vec<TokenKind>, UtilsError> {
    if input.trim().is_empty() {
        return Err(UtilsError::EmptyInput);
    }

    let mut tokens = Vec::new();
    let mut rest = input;

    while let Some(c) = rest.chars().next() {
        let offset = input.len() - rest.len();

        if let Some(after) = rest.strip_prefix("sqrt") {
            tokens.push(TokenKind::Unary(UnaryOp::Sqrt));
            rest = after;
            continue;
        }

        let (symbol, after) = rest.split_at(c.len_utf8());
        rest = after;

        if c.is_whitespace() {
            continue;
        }
        if let Some(digit) = c.to_digit(10) {
            tokens.push(TokenKind::Number(f64::from(digit)));
            continue;
        }

        let op = symbol
            .parse::<Operator>()
            .map_err(|_| UtilsError::UnknownSymbol {
                symbol: symbol.to_string(),
                offset,
            })?;
        tokens.push(op.into());
    }

    debug!("Parsed {} tokens from '{}'", tokens.len(), input);
    Ok(tokens)
}
