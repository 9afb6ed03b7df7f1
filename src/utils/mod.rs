//! Parsing of user-supplied digits and expressions

mod digits;
mod errors;
mod program;

pub use digits::parse_numbers;
pub use errors::UtilsError;
pub use program::parse_program;

#[cfg(test)]
mod tests;
