use log::debug;

use crate::TARGET;
use crate::arith::approx_eq;
use crate::expression::errors::{EvalFault, StructuralError};
use crate::expression::eval::evaluate_postfix;
use crate::expression::rpn::to_postfix;
use crate::expression::validate::validate_structure;
use crate::token::TokenKind;

/// Outcome of evaluating the player's tokens
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    Valid(f64),
    /// Carries a message only for structural problems
    Invalid(Option<StructuralError>),
}

impl Evaluation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Evaluation::Valid(_))
    }

    pub fn result(&self) -> Option<f64> {
        match self {
            Evaluation::Valid(value) => Some(*value),
            Evaluation::Invalid(_) => None,
        }
    }

    pub fn error(&self) -> Option<&StructuralError> {
        match self {
            Evaluation::Valid(_) => None,
            Evaluation::Invalid(error) => error.as_ref(),
        }
    }

    pub fn is_win(&self) -> bool {
        self.result().is_some_and(|value| approx_eq(value, TARGET))
    }
}

/// Validate, convert to postfix, and evaluate. Never fails: evaluation
/// faults collapse into `Invalid(None)`.
pub fn evaluate<T: AsRef<TokenKind>>(tokens: &[T]) -> Evaluation {
    if let Err(error) = validate_structure(tokens) {
        debug!("Structural check failed: {}", error);
        return Evaluation::Invalid(Some(error));
    }

    match compute(tokens) {
        Ok(value) => {
            debug!("Evaluated to {}", value);
            Evaluation::Valid(value)
        }
        Err(fault) => {
            debug!("Evaluation fault: {}", fault);
            Evaluation::Invalid(None)
        }
    }
}

fn compute<T: AsRef<TokenKind>>(tokens: &[T]) -> Result<f64, EvalFault> {
    let postfix = to_postfix(tokens)?;
    evaluate_postfix(&postfix)
}
