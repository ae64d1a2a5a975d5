//! Calculator traits and the `FibCalculator` decorator.
//!
//! `Calculator` is the public trait consumed by the device layer and CLI.
//! `CoreCalculator` is the internal trait implemented by the engines.
//! `FibCalculator` adds the capacity pre-check, timing, and the final
//! conversion to most-significant-first order.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;

use crate::capacity::check_capacity;
use crate::digits::{Decimal, DigitSeq};
use crate::fastdoubling::FastDoubling;
use crate::iterative::Iterative;

/// Error type for Fibonacci calculations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// A value would need more digits than the fixed capacity.
    #[error("capacity exceeded: {digits} digits needed, at most {max} supported{}", index_suffix(.index))]
    CapacityExceeded {
        /// Requested index, when known up front.
        index: Option<u64>,
        /// Digits the value would need.
        digits: usize,
        /// Capacity limit.
        max: usize,
    },

    /// Input rejected before any computation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// `subtract` called with a minuend smaller than the subtrahend.
    #[error("subtraction underflow: minuend is smaller than subtrahend")]
    SubtractUnderflow,

    /// Strategies produced different results.
    #[error("result mismatch between strategies for F({index})")]
    Mismatch {
        /// Index being compared.
        index: u64,
    },

    /// Calculation was cancelled.
    #[error("calculation cancelled")]
    Cancelled,
}

#[allow(clippy::ref_option)]
fn index_suffix(index: &Option<u64>) -> String {
    index.map_or_else(String::new, |k| format!(" (F({k}))"))
}

/// Public trait for Fibonacci calculators.
pub trait Calculator: Send + Sync {
    /// Calculate F(k), most-significant digit first.
    fn calculate(&self, k: u64) -> Result<Decimal, FibError>;

    /// Get the name of this calculator.
    fn name(&self) -> &str;
}

/// Internal trait for engine implementations.
/// Wrapped by `FibCalculator`.
pub trait CoreCalculator: Send + Sync {
    /// Compute F(k), least-significant digit first.
    fn calculate_core(&self, k: u64) -> Result<DigitSeq, FibError>;

    /// Get the name of this algorithm.
    fn name(&self) -> &str;
}

/// Decorator that wraps a `CoreCalculator` with the capacity check and
/// output normalization.
#[derive(Clone)]
pub struct FibCalculator {
    inner: Arc<dyn CoreCalculator>,
}

impl FibCalculator {
    /// Create a new `FibCalculator` wrapping the given core calculator.
    #[must_use]
    pub fn new(inner: Arc<dyn CoreCalculator>) -> Self {
        Self { inner }
    }
}

impl Calculator for FibCalculator {
    fn calculate(&self, k: u64) -> Result<Decimal, FibError> {
        check_capacity(k)?;

        let start = Instant::now();
        let digits = self.inner.calculate_core(k)?;
        tracing::debug!(
            algorithm = self.inner.name(),
            k,
            digits = digits.digit_count(),
            elapsed = ?start.elapsed(),
            "computed"
        );

        Ok(digits.into_decimal())
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

/// Engine selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// O(log k) recursion on the doubling identities.
    #[default]
    FastDoubling,
    /// O(k) additions.
    Iterative,
}

impl Strategy {
    /// Every strategy, in comparison order.
    pub const ALL: [Strategy; 2] = [Strategy::FastDoubling, Strategy::Iterative];

    /// Short name accepted by `FromStr` and the CLI.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::FastDoubling => "fast",
            Strategy::Iterative => "iterative",
        }
    }

    /// Build the calculator for this strategy.
    #[must_use]
    pub fn calculator(self) -> FibCalculator {
        let core: Arc<dyn CoreCalculator> = match self {
            Strategy::FastDoubling => Arc::new(FastDoubling::new()),
            Strategy::Iterative => Arc::new(Iterative::new()),
        };
        FibCalculator::new(core)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = FibError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fast" | "fastdoubling" => Ok(Strategy::FastDoubling),
            "iterative" | "iter" => Ok(Strategy::Iterative),
            other => Err(FibError::InvalidInput(format!("unknown strategy: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_INDEX;

    #[test]
    fn calculate_small_values() {
        let calc = Strategy::FastDoubling.calculator();
        assert_eq!(calc.calculate(0).unwrap().to_string(), "0");
        assert_eq!(calc.calculate(1).unwrap().to_string(), "1");
        assert_eq!(calc.calculate(10).unwrap().to_string(), "55");
        assert_eq!(calc.calculate(20).unwrap().to_string(), "6765");
    }

    #[test]
    fn calculate_rejects_over_capacity_up_front() {
        for strategy in Strategy::ALL {
            let err = strategy.calculator().calculate(MAX_INDEX + 1).unwrap_err();
            assert_eq!(
                err,
                FibError::CapacityExceeded {
                    index: Some(MAX_INDEX + 1),
                    digits: 257,
                    max: 256,
                }
            );
        }
    }

    #[test]
    fn calculator_names() {
        assert_eq!(Strategy::FastDoubling.calculator().name(), "FastDoubling");
        assert_eq!(Strategy::Iterative.calculator().name(), "Iterative");
    }

    #[test]
    fn strategy_from_str() {
        assert_eq!("fast".parse::<Strategy>().unwrap(), Strategy::FastDoubling);
        assert_eq!(
            "fastdoubling".parse::<Strategy>().unwrap(),
            Strategy::FastDoubling
        );
        assert_eq!("iter".parse::<Strategy>().unwrap(), Strategy::Iterative);
        assert!(matches!(
            "matrix".parse::<Strategy>(),
            Err(FibError::InvalidInput(_))
        ));
    }

    #[test]
    fn strategy_display_round_trips() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>().unwrap(), strategy);
        }
    }

    #[test]
    fn fib_error_display() {
        let err = FibError::CapacityExceeded {
            index: Some(2000),
            digits: 418,
            max: 256,
        };
        assert_eq!(
            err.to_string(),
            "capacity exceeded: 418 digits needed, at most 256 supported (F(2000))"
        );

        let err = FibError::CapacityExceeded {
            index: None,
            digits: 257,
            max: 256,
        };
        assert_eq!(
            err.to_string(),
            "capacity exceeded: 257 digits needed, at most 256 supported"
        );

        assert_eq!(FibError::Cancelled.to_string(), "calculation cancelled");
        assert_eq!(
            FibError::Mismatch { index: 7 }.to_string(),
            "result mismatch between strategies for F(7)"
        );
    }
}
