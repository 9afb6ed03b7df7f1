use log::debug;

use crate::expression::errors::EvalFault;
use crate::token::{BinaryOp, Paren, TokenKind, UnaryOp};

/// One step of a postfix program
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PostfixItem {
    Number(f64),
    Binary(BinaryOp),
    Unary(UnaryOp),
}

#[derive(Debug, Clone, Copy)]
enum StackEntry {
    Open,
    Binary(BinaryOp),
    Unary(UnaryOp),
}

impl StackEntry {
    fn precedence(&self) -> u8 {
        match self {
            StackEntry::Open => 1,
            StackEntry::Binary(op) => op.precedence(),
            StackEntry::Unary(op) => op.precedence(),
        }
    }

    fn is_right_associative(&self) -> bool {
        match self {
            StackEntry::Unary(op) => op.is_right_associative(),
            _ => false,
        }
    }

    fn into_item(self) -> Option<PostfixItem> {
        match self {
            StackEntry::Open => None,
            StackEntry::Binary(op) => Some(PostfixItem::Binary(op)),
            StackEntry::Unary(op) => Some(PostfixItem::Unary(op)),
        }
    }
}

/// Shunting-yard conversion from infix tokens to postfix.
///
/// # Errors
///
/// Returns `MismatchedParentheses` for a `)` without a matching `(` or a `(`
/// left open at the end.
pub fn to_postfix<T: AsRef<TokenKind>>(tokens: &[T]) -> Result<Vec<PostfixItem>, EvalFault> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<StackEntry> = Vec::new();

    for token in tokens {
        match *token.as_ref() {
            TokenKind::Number(n) => output.push(PostfixItem::Number(n)),
            TokenKind::Paren(Paren::Open) => stack.push(StackEntry::Open),
            TokenKind::Paren(Paren::Close) => loop {
                match stack.pop() {
                    Some(StackEntry::Open) => break,
                    Some(entry) => output.extend(entry.into_item()),
                    None => return Err(EvalFault::MismatchedParentheses),
                }
            },
            TokenKind::Binary(op) => {
                pop_for(StackEntry::Binary(op), &mut stack, &mut output);
                stack.push(StackEntry::Binary(op));
            }
            TokenKind::Unary(op) => {
                pop_for(StackEntry::Unary(op), &mut stack, &mut output);
                stack.push(StackEntry::Unary(op));
            }
        }
    }

    while let Some(entry) = stack.pop() {
        match entry.into_item() {
            Some(item) => output.push(item),
            None => return Err(EvalFault::MismatchedParentheses),
        }
    }

    debug!("Postfix: {:?}", output);
    Ok(output)
}

/// Emit stacked operators that must apply before `incoming`
fn pop_for(incoming: StackEntry, stack: &mut Vec<StackEntry>, output: &mut Vec<PostfixItem>) {
    while let Some(&top) = stack.last() {
        if matches!(top, StackEntry::Open) {
            break;
        }
        let pops = top.precedence() > incoming.precedence()
            || (top.precedence() == incoming.precedence() && !incoming.is_right_associative());
        if !pops {
            break;
        }
        stack.pop();
        output.extend(top.into_item());
    }
}
