//! Arithmetic primitives shared by the solver and the evaluator

pub mod constants;
mod errors;
mod factorial;
mod numbers;

pub use errors::ArithmeticError;
pub use factorial::factorial;
pub use numbers::{approx_eq, format_number, is_integer};
