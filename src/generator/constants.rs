use crate::PuzzleNumbers;

pub const MAX_ATTEMPTS: usize = 1000;
pub const MAX_DIGIT: u8 = 9;
// 1 + 2 + 3 + 4
pub const FALLBACK_NUMBERS: PuzzleNumbers = [1.0, 2.0, 3.0, 4.0];
