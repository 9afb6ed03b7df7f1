use log::{debug, warn};

use crate::utils::errors::UtilsError;
use crate::{PUZZLE_SIZE, PuzzleNumbers};

/// Parse four digits such as `"1234"`, `"1 2 3 4"` or `"1,2,3,4"`.
///
/// # Errors
///
/// Returns an error if the input is empty, contains anything other than
/// digits, spaces and commas, or does not hold exactly four digits.
pub fn parse_numbers(input: &str) -> Result<PuzzleNumbers, UtilsError> {
    debug!("Parsing puzzle digits from '{}'", input);

    let trimmed = input.trim();
    if trimmed.is_empty() {
        warn!("Digit string is empty");
        return Err(UtilsError::EmptyInput);
    }

    let mut digits = Vec::with_capacity(PUZZLE_SIZE);
    for c in trimmed.chars() {
        if c.is_whitespace() || c == ',' {
            continue;
        }
        match c.to_digit(10) {
            Some(digit) => digits.push(f64::from(digit)),
            None => {
                warn!("Digit string contains non-digit characters: '{}'", input);
                return Err(UtilsError::InvalidDigitString(input.to_string()));
            }
        }
    }

    PuzzleNumbers::try_from(digits.as_slice()).map_err(|_| UtilsError::WrongDigitCount {
        expected: PUZZLE_SIZE,
        found: digits.len(),
    })
}
