use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::generator::constants::{FALLBACK_NUMBERS, MAX_ATTEMPTS, MAX_DIGIT};
use crate::solver::{ExpressionSolver, SolverConfig};
use crate::{PuzzleNumbers, TARGET};

/// Configuration for puzzle generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub max_attempts: usize,
    pub target: f64,
    pub max_digit: u8,
    pub fallback: PuzzleNumbers,
    pub solver: SolverConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            target: TARGET,
            max_digit: MAX_DIGIT,
            fallback: FALLBACK_NUMBERS,
            solver: SolverConfig::default(),
        }
    }
}

/// Samples random digit sequences until the solver accepts one
pub struct PuzzleGenerator<R: Rng = StdRng> {
    config: GeneratorConfig,
    solver: ExpressionSolver,
    rng: R,
}

impl PuzzleGenerator<StdRng> {
    /// Generator seeded from the operating system
    pub fn new() -> Self {
        Self::with_rng(GeneratorConfig::default(), StdRng::from_os_rng())
    }

    /// Reproducible generator
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(GeneratorConfig::default(), StdRng::seed_from_u64(seed))
    }
}

impl Default for PuzzleGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PuzzleGenerator<R> {
    pub fn with_rng(config: GeneratorConfig, rng: R) -> Self {
        let solver = ExpressionSolver::new(config.solver.clone());
        Self {
            config,
            solver,
            rng,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn solver(&self) -> &ExpressionSolver {
        &self.solver
    }

    /// Four uniformly random digits in `0..=max_digit`
    pub fn sample(&mut self) -> PuzzleNumbers {
        let max_digit = self.config.max_digit;
        std::array::from_fn(|_| f64::from(self.rng.random_range(0..=max_digit)))
    }

    /// A sequence that can make the target, or the fallback after
    /// `max_attempts` misses
    pub fn generate_solvable(&mut self) -> PuzzleNumbers {
        for attempt in 1..=self.config.max_attempts {
            let numbers = self.sample();
            if self.solver.can_reach(&numbers, self.config.target) {
                info!("Generated puzzle {:?} after {} attempts", numbers, attempt);
                return numbers;
            }
            debug!("Attempt {}: {:?} is not solvable", attempt, numbers);
        }

        warn!(
            "No solvable puzzle in {} attempts, using fallback {:?}",
            self.config.max_attempts, self.config.fallback
        );
        self.config.fallback
    }
}
