//! Make Ten - generate and check "make 10" arithmetic puzzles
//!
//! Four digits, kept in their given order, must be combined into 10 using
//! `+ - * /`, square root, factorial and parentheses. This library provides
//! the solver that decides whether a digit sequence can make 10, a generator
//! of solvable puzzles, and the evaluator for a player's token sequence.

pub mod arith;
pub mod expression;
pub mod game;
pub mod generator;
pub mod solver;
pub mod token;
pub mod utils;

/// Value every puzzle asks for
pub const TARGET: f64 = 10.0;

/// Numbers per puzzle
pub const PUZZLE_SIZE: usize = 4;

/// The digits of one puzzle, in play order
pub type PuzzleNumbers = [f64; PUZZLE_SIZE];

// Re-export the main public API
pub use expression::{Evaluation, Expression, evaluate};
pub use game::{Game, Snapshot};
pub use generator::PuzzleGenerator;
pub use solver::ExpressionSolver;
pub use token::{Token, TokenKind, TokenSequence};
pub use utils::{UtilsError, parse_numbers, parse_program};

/// Find a way to make 10 from a digit string such as `"1234"`
///
/// # Returns
///
/// * `Ok(Some(Expression))` - If the digits can make 10
/// * `Ok(None)` - If no expression within the search limits exists
/// * `Err(UtilsError)` - If the input is not exactly four digits
///
/// # Errors
///
/// This function will return an error if the digit string is empty, contains
/// non-digit characters, or does not contain exactly four digits.
///
/// # Examples
///
/// ```
/// use make_ten::find_solution;
///
/// match find_solution("1234") {
///     Ok(Some(expr)) => println!("Found: {}", expr),
///     Ok(None) => println!("No solution found"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn find_solution(digits: &str) -> Result<Option<Expression>, UtilsError> {
    let numbers = parse_numbers(digits)?;
    let solver = ExpressionSolver::default();
    Ok(solver.find_solution(&numbers, TARGET))
}

/// Generate a solvable puzzle with the default configuration
///
/// ```
/// let numbers = make_ten::generate_puzzle();
/// assert!(make_ten::ExpressionSolver::default().can_reach(&numbers, make_ten::TARGET));
/// ```
pub fn generate_puzzle() -> PuzzleNumbers {
    PuzzleGenerator::new().generate_solvable()
}

/// Evaluate an expression written as text, e.g. `"(3-1)*5+0"`
///
/// # Errors
///
/// Returns an error if the text contains unknown symbols.
///
/// ```
/// let evaluation = make_ten::evaluate_text("1+2+3+4").unwrap();
/// assert!(evaluation.is_win());
/// ```
pub fn evaluate_text(program: &str) -> Result<Evaluation, UtilsError> {
    let tokens = parse_program(program)?;
    Ok(evaluate(&tokens))
}
