//! Iterative reference engine: k - 1 additions, no multiplication.
//!
//! Slow next to Fast Doubling, but simple enough to serve as the oracle
//! the doubling engine is checked against.

use crate::arith::add;
use crate::calculator::{CoreCalculator, FibError};
use crate::digits::DigitSeq;

/// Compute F(k) by linear iteration, least-significant digit first.
///
/// Never builds a value past F(k), so it reaches the same maximum index
/// as Fast Doubling.
pub fn iterative(k: u64) -> Result<DigitSeq, FibError> {
    if k == 0 {
        return Ok(DigitSeq::zero());
    }

    let mut prev = DigitSeq::zero();
    let mut curr = DigitSeq::one();
    for _ in 1..k {
        let next = add(&prev, &curr)?;
        prev = std::mem::replace(&mut curr, next);
    }
    Ok(curr)
}

/// Iterative calculator.
pub struct Iterative;

impl Iterative {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Iterative {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for Iterative {
    fn calculate_core(&self, k: u64) -> Result<DigitSeq, FibError> {
        iterative(k)
    }

    fn name(&self) -> &'static str {
        "Iterative"
    }
}
