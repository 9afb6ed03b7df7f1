pub mod constants;
mod core;

pub use core::{ExpressionSolver, SolverConfig};
