use log::debug;

use crate::token::errors::SequenceError;
use crate::token::types::{Operator, Token, TokenId, TokenKind};

/// The player's expression under construction.
///
/// Number tokens are placed by [`TokenSequence::reset`] and never move
/// relative to each other; only operators and parentheses are inserted or
/// removed. Every successful edit pushes a full copy of the previous tokens
/// onto the history, so [`TokenSequence::undo`] restores exactly what was
/// there before, ids included.
#[derive(Debug, Clone, Default)]
pub struct TokenSequence {
    tokens: Vec<Token>,
    history: Vec<Vec<Token>>,
    next_id: u32,
}

impl TokenSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_numbers(numbers: &[f64]) -> Self {
        let mut sequence = Self::new();
        sequence.reset(numbers);
        sequence
    }

    /// Replace everything with one number token per value and clear history
    pub fn reset(&mut self, numbers: &[f64]) {
        self.history.clear();
        self.next_id = 0;
        self.tokens.clear();
        for &value in numbers {
            let id = self.allocate_id();
            self.tokens.push(Token {
                id,
                kind: TokenKind::Number(value),
            });
        }
        debug!("Sequence reset with {} numbers", self.tokens.len());
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Values of the number tokens, in sequence order
    pub fn numbers(&self) -> Vec<f64> {
        self.tokens
            .iter()
            .filter_map(|token| match token.kind {
                TokenKind::Number(value) => Some(value),
                _ => None,
            })
            .collect()
    }

    pub fn get(&self, id: TokenId) -> Option<&Token> {
        self.tokens.iter().find(|token| token.id == id)
    }

    /// # Errors
    ///
    /// Returns `PositionOutOfRange` when `position > len`; nothing changes.
    pub fn insert(&mut self, position: usize, op: Operator) -> Result<TokenId, SequenceError> {
        if position > self.tokens.len() {
            return Err(SequenceError::PositionOutOfRange {
                position,
                len: self.tokens.len(),
            });
        }

        self.push_history();
        let id = self.allocate_id();
        self.tokens.insert(
            position,
            Token {
                id,
                kind: op.into(),
            },
        );
        debug!("Inserted {:?} as {} at {}", op, id, position);
        Ok(id)
    }

    /// Classify `symbol` and insert it.
    ///
    /// # Errors
    ///
    /// Returns `PositionOutOfRange` or `UnknownOperator`; nothing changes.
    pub fn insert_symbol(&mut self, position: usize, symbol: &str) -> Result<TokenId, SequenceError> {
        if position > self.tokens.len() {
            return Err(SequenceError::PositionOutOfRange {
                position,
                len: self.tokens.len(),
            });
        }
        let op = symbol.parse::<Operator>()?;
        self.insert(position, op)
    }

    /// # Errors
    ///
    /// Returns `TokenNotFound` for an unknown id and `ImmovableNumber` for a
    /// number token; nothing changes in either case.
    pub fn remove(&mut self, id: TokenId) -> Result<Token, SequenceError> {
        let index = self
            .tokens
            .iter()
            .position(|token| token.id == id)
            .ok_or(SequenceError::TokenNotFound(id))?;

        if self.tokens.get(index).is_some_and(|token| token.kind.is_number()) {
            return Err(SequenceError::ImmovableNumber(id));
        }

        self.push_history();
        let removed = self.tokens.remove(index);
        debug!("Removed {:?} ({})", removed.kind, id);
        Ok(removed)
    }

    /// Restore the previous snapshot; false when there is nothing to undo
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.tokens = previous;
                debug!("Undo, {} snapshots left", self.history.len());
                true
            }
            None => false,
        }
    }

    /// Undo until the history is empty, returning how many steps were undone
    pub fn reset_to_initial(&mut self) -> usize {
        let mut steps = 0;
        while self.undo() {
            steps += 1;
        }
        steps
    }

    fn push_history(&mut self) {
        self.history.push(self.tokens.clone());
    }

    fn allocate_id(&mut self) -> TokenId {
        let id = TokenId(self.next_id);
        self.next_id += 1;
        id
    }
}
