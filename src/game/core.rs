use log::{info, warn};
use rand::Rng;
use rand::rngs::StdRng;

use crate::{PUZZLE_SIZE, PuzzleNumbers};
use crate::expression::Expression;
use crate::game::snapshot::Snapshot;
use crate::generator::PuzzleGenerator;
use crate::token::{TokenId, TokenSequence};

/// One ephemeral puzzle: the numbers, the player's tokens and their history.
///
/// None of the actions fail. Rejected edits are logged and leave the
/// sequence untouched; the returned snapshot reflects that.
pub struct Game<R: Rng = StdRng> {
    generator: PuzzleGenerator<R>,
    numbers: PuzzleNumbers,
    sequence: TokenSequence,
}

impl Game<StdRng> {
    pub fn new() -> Self {
        Self::with_generator(PuzzleGenerator::new())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_generator(PuzzleGenerator::with_seed(seed))
    }
}

impl Default for Game<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Game<R> {
    /// Start with a freshly generated puzzle
    pub fn with_generator(generator: PuzzleGenerator<R>) -> Self {
        let mut game = Self {
            generator,
            numbers: [0.0; PUZZLE_SIZE],
            sequence: TokenSequence::new(),
        };
        game.new_puzzle();
        game
    }

    pub fn numbers(&self) -> PuzzleNumbers {
        self.numbers
    }

    pub fn sequence(&self) -> &TokenSequence {
        &self.sequence
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.sequence)
    }

    /// Replace the puzzle with a newly generated one
    pub fn new_puzzle(&mut self) -> Snapshot {
        let numbers = self.generator.generate_solvable();
        self.load(numbers)
    }

    /// Replace the puzzle with the given numbers
    pub fn load(&mut self, numbers: PuzzleNumbers) -> Snapshot {
        info!("Starting puzzle {:?}", numbers);
        self.numbers = numbers;
        self.sequence.reset(&numbers);
        self.snapshot()
    }

    pub fn insert_token(&mut self, position: usize, symbol: &str) -> Snapshot {
        if let Err(error) = self.sequence.insert_symbol(position, symbol) {
            warn!("Insert rejected: {}", error);
        }
        self.snapshot()
    }

    pub fn remove_token(&mut self, id: &str) -> Snapshot {
        let removed = id
            .parse::<TokenId>()
            .and_then(|id| self.sequence.remove(id));
        if let Err(error) = removed {
            warn!("Remove rejected: {}", error);
        }
        self.snapshot()
    }

    pub fn undo(&mut self) -> Snapshot {
        if !self.sequence.undo() {
            warn!("Nothing to undo");
        }
        self.snapshot()
    }

    /// Undo back to the starting layout
    pub fn reset_puzzle(&mut self) -> Snapshot {
        let steps = self.sequence.reset_to_initial();
        info!("Puzzle reset, {} edits undone", steps);
        self.snapshot()
    }

    /// One way to make the target with the current numbers, rendered with glyphs
    pub fn hint(&self) -> Option<String> {
        self.hint_expression().map(|expr| expr.to_string())
    }

    /// Solver witness behind [`Game::hint`]
    pub fn hint_expression(&self) -> Option<Expression> {
        let config = self.generator.config();
        self.generator
            .solver()
            .find_solution(&self.numbers, config.target)
    }
}
