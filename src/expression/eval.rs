use log::debug;

use crate::arith::constants::EPSILON;
use crate::arith::factorial;
use crate::expression::ast::Expression;
use crate::expression::errors::EvalFault;
use crate::expression::rpn::PostfixItem;
use crate::token::{BinaryOp, UnaryOp};

impl BinaryOp {
    /// # Errors
    ///
    /// Returns `DivisionByZero` when dividing by a value within 1e-9 of zero.
    pub fn apply(&self, a: f64, b: f64) -> Result<f64, EvalFault> {
        match self {
            BinaryOp::Add => Ok(a + b),
            BinaryOp::Sub => Ok(a - b),
            BinaryOp::Mul => Ok(a * b),
            BinaryOp::Div => {
                if b.abs() < EPSILON {
                    Err(EvalFault::DivisionByZero)
                } else {
                    Ok(a / b)
                }
            }
        }
    }
}

impl UnaryOp {
    /// # Errors
    ///
    /// Returns `NegativeSquareRoot` for a negative radicand and the
    /// factorial's own fault for inputs it rejects.
    pub fn apply(&self, value: f64) -> Result<f64, EvalFault> {
        match self {
            UnaryOp::Sqrt => {
                if value < 0.0 {
                    Err(EvalFault::NegativeSquareRoot(value))
                } else {
                    Ok(value.sqrt())
                }
            }
            UnaryOp::Factorial => Ok(factorial(value)?),
        }
    }
}

impl Expression {
    /// # Errors
    ///
    /// Returns the first fault met while evaluating bottom-up: division by
    /// zero, square root of a negative number, or a rejected factorial.
    pub fn evaluate(&self) -> Result<f64, EvalFault> {
        let result = match self {
            Expression::Number(n) => Ok(*n),
            Expression::Add(l, r) => BinaryOp::Add.apply(l.evaluate()?, r.evaluate()?),
            Expression::Sub(l, r) => BinaryOp::Sub.apply(l.evaluate()?, r.evaluate()?),
            Expression::Mul(l, r) => BinaryOp::Mul.apply(l.evaluate()?, r.evaluate()?),
            Expression::Div(l, r) => BinaryOp::Div.apply(l.evaluate()?, r.evaluate()?),
            Expression::Sqrt(e) => UnaryOp::Sqrt.apply(e.evaluate()?),
            Expression::Factorial(e) => UnaryOp::Factorial.apply(e.evaluate()?),
        };

        if let Err(e) = &result {
            debug!("Expression {} failed: {}", self, e);
        }
        result
    }
}

/// Evaluate a postfix program on a value stack.
///
/// # Errors
///
/// Returns `MissingOperand` on stack underflow, any operator fault, and
/// `InvalidExpression` unless exactly one value remains at the end.
pub fn evaluate_postfix(items: &[PostfixItem]) -> Result<f64, EvalFault> {
    let mut stack: Vec<f64> = Vec::with_capacity(items.len());

    for item in items {
        match item {
            PostfixItem::Number(n) => stack.push(*n),
            PostfixItem::Unary(op) => {
                let value = stack.pop().ok_or(EvalFault::MissingOperand(op.symbol()))?;
                stack.push(op.apply(value)?);
            }
            PostfixItem::Binary(op) => {
                let b = stack.pop().ok_or(EvalFault::MissingOperand(op.symbol()))?;
                let a = stack.pop().ok_or(EvalFault::MissingOperand(op.symbol()))?;
                stack.push(op.apply(a, b)?);
            }
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        other => Err(EvalFault::InvalidExpression(other.len())),
    }
}
