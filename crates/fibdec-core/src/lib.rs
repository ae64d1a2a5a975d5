//! # fibdec-core
//!
//! Exact Fibonacci numbers on a fixed-capacity decimal digit kernel.
//! Implements schoolbook add, subtract and multiply over LSD-first digit
//! sequences, a Fast Doubling engine, and an iterative reference engine.

pub mod arith;
pub mod calculator;
pub mod capacity;
pub mod constants;
pub mod digits;
pub mod fastdoubling;
pub mod generator;
pub mod iterative;
pub mod registry;

// Re-exports
pub use calculator::{Calculator, CoreCalculator, FibCalculator, FibError, Strategy};
pub use constants::{exit_codes, MAX_DIGITS, MAX_FIB_U64, MAX_INDEX};
pub use digits::{Decimal, DigitSeq};
pub use generator::{IterativeGenerator, SequenceGenerator};
pub use registry::{CalculatorFactory, DefaultFactory};

/// Compute F(k) with the given strategy, most-significant digit first.
///
/// Fails with `CapacityExceeded` when F(k) needs more than `MAX_DIGITS`
/// digits. Every call owns its buffers, so this is safe to call from any
/// number of threads at once.
///
/// # Example
/// ```
/// use fibdec_core::{compute_fibonacci, Strategy};
///
/// let f92 = compute_fibonacci(92, Strategy::FastDoubling).unwrap();
/// assert_eq!(f92.to_string(), "7540113804746346429");
/// assert!(compute_fibonacci(5000, Strategy::Iterative).is_err());
/// ```
pub fn compute_fibonacci(k: u64, strategy: Strategy) -> Result<Decimal, FibError> {
    strategy.calculator().calculate(k)
}

/// Parse a user-supplied index, rejecting negative or malformed text.
///
/// # Example
/// ```
/// use fibdec_core::parse_index;
///
/// assert_eq!(parse_index(" 42 ").unwrap(), 42);
/// assert!(parse_index("-1").is_err());
/// ```
pub fn parse_index(text: &str) -> Result<u64, FibError> {
    let text = text.trim();
    let value: i128 = text
        .parse()
        .map_err(|_| FibError::InvalidInput(format!("not an integer index: {text:?}")))?;
    if value < 0 {
        return Err(FibError::InvalidInput(format!(
            "index must be non-negative, got {value}"
        )));
    }
    u64::try_from(value)
        .map_err(|_| FibError::InvalidInput(format!("index out of range: {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compute_both_strategies() {
        for strategy in Strategy::ALL {
            assert_eq!(compute_fibonacci(10, strategy).unwrap().to_string(), "55");
        }
    }

    #[test]
    fn parse_index_values() {
        assert_eq!(parse_index("0").unwrap(), 0);
        assert_eq!(parse_index("1226").unwrap(), 1226);
        assert_eq!(parse_index("18446744073709551615").unwrap(), u64::MAX);
    }

    #[test]
    fn parse_index_rejects() {
        for bad in ["", "-1", "abc", "1.5", "18446744073709551616"] {
            assert!(
                matches!(parse_index(bad), Err(FibError::InvalidInput(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
