//! Sequential Fibonacci generation over an index range.

use crate::arith::add;
use crate::calculator::FibError;
use crate::capacity::check_capacity;
use crate::digits::{Decimal, DigitSeq};

/// Trait for generating runs of consecutive Fibonacci numbers.
pub trait SequenceGenerator: Send + Sync {
    /// Generate F(k) for every k in `start..=end`.
    fn generate(&self, start: u64, end: u64) -> Result<Vec<(u64, Decimal)>, FibError>;

    /// Get the name of this generator.
    fn name(&self) -> &str;
}

/// Walks the sequence with one addition per index.
pub struct IterativeGenerator;

impl IterativeGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for IterativeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceGenerator for IterativeGenerator {
    #[allow(clippy::cast_possible_truncation)]
    fn generate(&self, start: u64, end: u64) -> Result<Vec<(u64, Decimal)>, FibError> {
        if start > end {
            return Err(FibError::InvalidInput(format!(
                "range start {start} is past end {end}"
            )));
        }
        check_capacity(end)?;

        let mut results = Vec::with_capacity((end - start + 1) as usize);
        // Seeded with F(-1) = 1 so the walk never computes past F(end).
        let mut prev = DigitSeq::one();
        let mut curr = DigitSeq::zero();

        for i in 0..=end {
            if i >= start {
                results.push((i, curr.clone().into_decimal()));
            }
            if i < end {
                let next = add(&prev, &curr)?;
                prev = std::mem::replace(&mut curr, next);
            }
        }

        Ok(results)
    }

    fn name(&self) -> &'static str {
        "IterativeGenerator"
    }
}
