//! Expression evaluation: structural checks, shunting-yard conversion to
//! postfix, and postfix evaluation. Also holds the expression tree the
//! solver uses to describe a solution.

mod ast;
mod display;
mod errors;
mod eval;
mod evaluator;
mod rpn;
mod validate;

pub use ast::Expression;
pub use display::render_tokens;
pub use errors::{EvalFault, StructuralError};
pub use eval::evaluate_postfix;
pub use evaluator::{Evaluation, evaluate};
pub use rpn::{PostfixItem, to_postfix};
pub use validate::validate_structure;

#[cfg(test)]
mod tests;
