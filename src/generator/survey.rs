use log::info;
use rayon::prelude::*;
use serde::Serialize;

use crate::solver::{ExpressionSolver, SolverConfig};
use crate::{PUZZLE_SIZE, PuzzleNumbers};

/// Solvability of every digit sequence over a digit range
#[derive(Debug, Clone, Serialize)]
pub struct SurveyReport {
    pub max_digit: u8,
    pub total: usize,
    /// Solvable sequences in lexicographic order
    pub solvable: Vec<PuzzleNumbers>,
}

impl SurveyReport {
    pub fn solvable_count(&self) -> usize {
        self.solvable.len()
    }

    pub fn unsolvable_count(&self) -> usize {
        self.total - self.solvable.len()
    }

    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.solvable.len() as f64 / self.total as f64
        }
    }
}

/// Check all `(max_digit + 1)^4` sequences in parallel
pub fn survey(max_digit: u8, target: f64, config: &SolverConfig) -> SurveyReport {
    let base = usize::from(max_digit) + 1;
    let total = base.pow(PUZZLE_SIZE as u32);
    let solver = ExpressionSolver::new(config.clone());

    info!("Surveying {} sequences with digits 0..={}", total, max_digit);

    let solvable: Vec<PuzzleNumbers> = (0..total)
        .into_par_iter()
        .map(|index| sequence_at(index, base))
        .filter(|numbers| solver.can_reach(numbers, target))
        .collect();

    info!("{} of {} sequences are solvable", solvable.len(), total);

    SurveyReport {
        max_digit,
        total,
        solvable,
    }
}

/// Digits of `index` written in `base`, most significant first
fn sequence_at(index: usize, base: usize) -> PuzzleNumbers {
    let mut numbers = [0.0; PUZZLE_SIZE];
    let mut rest = index;
    for slot in numbers.iter_mut().rev() {
        *slot = (rest % base) as f64;
        rest /= base;
    }
    numbers
}
