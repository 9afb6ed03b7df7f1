// Search limits for the solver
pub const MAX_UNARY_DEPTH: usize = 4;
pub const FACTORIAL_SEARCH_LIMIT: f64 = 5.0;
