use serde::Serialize;

use crate::arith::format_number;
use crate::expression::{evaluate, render_tokens};
use crate::token::{Token, TokenKind, TokenSequence};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenClass {
    Number,
    BinaryOp,
    UnaryOp,
    Paren,
}

impl From<&TokenKind> for TokenClass {
    fn from(kind: &TokenKind) -> Self {
        match kind {
            TokenKind::Number(_) => TokenClass::Number,
            TokenKind::Binary(_) => TokenClass::BinaryOp,
            TokenKind::Unary(_) => TokenClass::UnaryOp,
            TokenKind::Paren(_) => TokenClass::Paren,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenView {
    pub id: String,
    pub kind: TokenClass,
    /// Numeric value, set for number tokens only
    pub value: Option<f64>,
    pub symbol: String,
    pub display_glyph: String,
}

impl From<&Token> for TokenView {
    fn from(token: &Token) -> Self {
        Self {
            id: token.id.to_string(),
            kind: TokenClass::from(&token.kind),
            value: match token.kind {
                TokenKind::Number(value) => Some(value),
                _ => None,
            },
            symbol: token.kind.symbol(),
            display_glyph: token.kind.glyph(),
        }
    }
}

/// Everything the presentation layer needs after an action
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub tokens: Vec<TokenView>,
    pub can_undo: bool,
    pub is_valid: bool,
    pub error_message: Option<String>,
    pub numeric_result: Option<f64>,
    pub display_result: Option<String>,
    pub is_win: bool,
    pub expression: String,
}

impl Snapshot {
    /// Evaluate the sequence and describe it
    pub fn capture(sequence: &TokenSequence) -> Self {
        let tokens = sequence.tokens();
        let evaluation = evaluate(tokens);
        let numeric_result = evaluation.result();

        Self {
            tokens: tokens.iter().map(TokenView::from).collect(),
            can_undo: sequence.can_undo(),
            is_valid: evaluation.is_valid(),
            error_message: evaluation.error().map(|error| error.to_string()),
            numeric_result,
            display_result: numeric_result.map(format_number),
            is_win: evaluation.is_win(),
            expression: render_tokens(tokens),
        }
    }
}
