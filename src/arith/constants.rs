// Tolerances and limits for arithmetic on puzzle values
pub const EPSILON: f64 = 1e-9;
pub const INTEGER_TOLERANCE: f64 = 1e-10;
pub const MAX_FACTORIAL_INPUT: f64 = 20.0;
pub const DISPLAY_DECIMALS: usize = 4;
