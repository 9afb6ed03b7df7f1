use std::fmt;

use crate::expression::ast::Expression;
use crate::token::{BinaryOp, Paren, TokenKind, UnaryOp};

impl Expression {
    /// Lower the tree to infix tokens that evaluate back to the same value.
    ///
    /// Operands of a binary operator are parenthesized when they bind no
    /// tighter than the operator on the right, or looser on the left. Unary
    /// operands other than plain numbers are always parenthesized.
    pub fn to_tokens(&self) -> Vec<TokenKind> {
        let mut out = Vec::new();
        push_tokens(self, &mut out);
        out
    }
}

fn push_tokens(expr: &Expression, out: &mut Vec<TokenKind>) {
    match expr {
        Expression::Number(n) => out.push(TokenKind::Number(*n)),
        Expression::Add(l, r) => push_binary(BinaryOp::Add, l, r, out),
        Expression::Sub(l, r) => push_binary(BinaryOp::Sub, l, r, out),
        Expression::Mul(l, r) => push_binary(BinaryOp::Mul, l, r, out),
        Expression::Div(l, r) => push_binary(BinaryOp::Div, l, r, out),
        Expression::Sqrt(e) => {
            out.push(TokenKind::Unary(UnaryOp::Sqrt));
            push_operand(e, !matches!(e.as_ref(), Expression::Number(_)), out);
        }
        Expression::Factorial(e) => {
            push_operand(e, !matches!(e.as_ref(), Expression::Number(_)), out);
            out.push(TokenKind::Unary(UnaryOp::Factorial));
        }
    }
}

fn push_binary(op: BinaryOp, l: &Expression, r: &Expression, out: &mut Vec<TokenKind>) {
    push_operand(l, l.precedence() < op.precedence(), out);
    out.push(TokenKind::Binary(op));
    push_operand(r, r.precedence() <= op.precedence(), out);
}

fn push_operand(expr: &Expression, need_parens: bool, out: &mut Vec<TokenKind>) {
    if need_parens {
        out.push(TokenKind::Paren(Paren::Open));
        push_tokens(expr, out);
        out.push(TokenKind::Paren(Paren::Close));
    } else {
        push_tokens(expr, out);
    }
}

/// Human-readable rendering of a token list using display glyphs
pub fn render_tokens<T: AsRef<TokenKind>>(tokens: &[T]) -> String {
    let mut out = String::new();
    let mut glue_next = true;
    for token in tokens {
        let kind = token.as_ref();
        let glue_this = matches!(
            kind,
            TokenKind::Paren(Paren::Close) | TokenKind::Unary(UnaryOp::Factorial)
        );
        if !glue_next && !glue_this {
            out.push(' ');
        }
        out.push_str(&kind.glyph());
        glue_next = matches!(
            kind,
            TokenKind::Paren(Paren::Open) | TokenKind::Unary(UnaryOp::Sqrt)
        );
    }
    out
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", render_tokens(&self.to_tokens()))
    }
}
