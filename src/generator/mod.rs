//! Random solvable puzzles and exhaustive solvability surveys

pub mod constants;
mod core;
mod survey;

pub use core::{GeneratorConfig, PuzzleGenerator};
pub use survey::{SurveyReport, survey};
