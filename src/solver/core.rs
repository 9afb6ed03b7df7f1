use std::collections::HashMap;

use log::debug;

use crate::arith::constants::EPSILON;
use crate::arith::{factorial, is_integer};
use crate::expression::Expression;
use crate::solver::constants::{FACTORIAL_SEARCH_LIMIT, MAX_UNARY_DEPTH};
use crate::token::{BinaryOp, UnaryOp};

/// Memo key: exact bit patterns of the working values plus the unary depth
type MemoKey = (Vec<u64>, usize);

/// Outcomes of explored states, failures included
type Memo = HashMap<MemoKey, Option<Expression>>;

/// Configuration for the reachability search
#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub max_unary_depth: usize,
    pub factorial_search_limit: f64,
    pub epsilon: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_unary_depth: MAX_UNARY_DEPTH,
            factorial_search_limit: FACTORIAL_SEARCH_LIMIT,
            epsilon: EPSILON,
        }
    }
}

/// A working value together with how it was built
#[derive(Debug, Clone)]
struct Term {
    value: f64,
    expr: Expression,
}

/// Decides whether a number sequence can be combined, in order, into a target.
///
/// The search repeatedly merges adjacent values with `+ - * /` (free) or
/// replaces a single value with its factorial or integral square root (each
/// costing one level of unary depth), until one value is left. Every
/// top-level call owns a fresh memo, so calls are independent.
pub struct ExpressionSolver {
    config: SolverConfig,
}

impl ExpressionSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn can_reach(&self, numbers: &[f64], target: f64) -> bool {
        self.find_solution(numbers, target).is_some()
    }

    /// First expression found that uses `numbers` in order and equals `target`
    pub fn find_solution(&self, numbers: &[f64], target: f64) -> Option<Expression> {
        if numbers.is_empty() {
            return None;
        }

        let terms: Vec<Term> = numbers
            .iter()
            .map(|&value| Term {
                value,
                expr: Expression::Number(value),
            })
            .collect();

        let mut memo = Memo::new();
        let found = self.search(&terms, target, 0, &mut memo);
        debug!(
            "Search over {:?} for {}: {} ({} states)",
            numbers,
            target,
            if found.is_some() { "reachable" } else { "unreachable" },
            memo.len()
        );
        found
    }

    fn search(
        &self,
        terms: &[Term],
        target: f64,
        depth: usize,
        memo: &mut Memo,
    ) -> Option<Expression> {
        let key = memo_key(terms, depth);
        if let Some(cached) = memo.get(&key) {
            return cached.clone();
        }

        let found = self.explore(terms, target, depth, memo);
        memo.insert(key, found.clone());
        found
    }

    fn explore(
        &self,
        terms: &[Term],
        target: f64,
        depth: usize,
        memo: &mut Memo,
    ) -> Option<Expression> {
        if let [only] = terms {
            return ((only.value - target).abs() < self.config.epsilon).then(|| only.expr.clone());
        }

        self.try_binary(terms, target, depth, memo)
            .or_else(|| self.try_unary(terms, target, depth, memo))
    }

    /// Merge each adjacent pair with each operator; depth is unchanged
    fn try_binary(
        &self,
        terms: &[Term],
        target: f64,
        depth: usize,
        memo: &mut Memo,
    ) -> Option<Expression> {
        for (i, pair) in terms.windows(2).enumerate() {
            let [left, right] = pair else {
                continue;
            };

            for op in BinaryOp::ALL {
                let Ok(value) = op.apply(left.value, right.value) else {
                    continue;
                };
                let merged = Term {
                    value,
                    expr: Expression::binary(op, left.expr.clone(), right.expr.clone()),
                };

                let mut next = Vec::with_capacity(terms.len() - 1);
                next.extend(terms.iter().take(i).cloned());
                next.push(merged);
                next.extend(terms.iter().skip(i + 2).cloned());

                if let Some(found) = self.search(&next, target, depth, memo) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Replace one value by its factorial or integral square root
    fn try_unary(
        &self,
        terms: &[Term],
        target: f64,
        depth: usize,
        memo: &mut Memo,
    ) -> Option<Expression> {
        if depth >= self.config.max_unary_depth {
            return None;
        }

        for (i, term) in terms.iter().enumerate() {
            let candidates = [
                (UnaryOp::Factorial, self.factorial_candidate(term.value)),
                (UnaryOp::Sqrt, self.sqrt_candidate(term.value)),
            ];

            for (op, candidate) in candidates {
                let Some(value) = candidate else {
                    continue;
                };

                let mut next = terms.to_vec();
                if let Some(slot) = next.get_mut(i) {
                    *slot = Term {
                        value,
                        expr: Expression::unary(op, term.expr.clone()),
                    };
                }

                if let Some(found) = self.search(&next, target, depth + 1, memo) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Factorials of small non-negative integers that change the value
    fn factorial_candidate(&self, value: f64) -> Option<f64> {
        if value < 0.0 || !is_integer(value) || value > self.config.factorial_search_limit {
            return None;
        }
        factorial(value)
            .ok()
            .filter(|result| (result - value).abs() >= self.config.epsilon)
    }

    /// Square roots are only explored when they come out integral
    fn sqrt_candidate(&self, value: f64) -> Option<f64> {
        if value < 0.0 {
            return None;
        }
        let root = value.sqrt();
        is_integer(root).then_some(root)
    }
}

impl Default for ExpressionSolver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

fn memo_key(terms: &[Term], depth: usize) -> MemoKey {
    // adding 0.0 folds -0 into 0 so both share an entry
    let values = terms.iter().map(|term| (term.value + 0.0).to_bits()).collect();
    (values, depth)
}
