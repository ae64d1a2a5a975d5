//! Fast Doubling over decimal digit sequences.
//!
//! Uses the doubling identities:
//!   F(2m)   = F(m) * (2*F(m+1) - F(m))
//!   F(2m+1) = F(m)^2 + F(m+1)^2
//!
//! Recursion halves the index at each level, so depth is O(log k). All
//! values stay least-significant-digit first; nothing is reversed here.

use crate::arith::{add, multiply, subtract};
use crate::calculator::{CoreCalculator, FibError};
use crate::digits::DigitSeq;

/// Compute F(k), least-significant digit first.
///
/// # Example
/// ```
/// use fibdec_core::fastdoubling::fast_doubling;
///
/// assert_eq!(fast_doubling(20).unwrap().to_string(), "6765");
/// ```
pub fn fast_doubling(k: u64) -> Result<DigitSeq, FibError> {
    match k {
        0 => return Ok(DigitSeq::zero()),
        1 | 2 => return Ok(DigitSeq::one()),
        _ => {}
    }

    let (n, n1) = fib_pair(k >> 1)?;
    if k & 1 == 1 {
        doubled_odd(&n, &n1)
    } else {
        doubled_even(&n, &n1)
    }
}

/// F(2m) from `n = F(m)` and `n1 = F(m+1)`.
///
/// The order `2*F(m+1) - F(m)` keeps the minuend at least as large as the
/// subtrahend for every m.
fn doubled_even(n: &DigitSeq, n1: &DigitSeq) -> Result<DigitSeq, FibError> {
    let two = DigitSeq::from_u64(2);
    let t = multiply(n1, &two)?;
    let t = subtract(&t, n)?;
    multiply(&t, n)
}

/// F(2m+1) from `n = F(m)` and `n1 = F(m+1)`.
fn doubled_odd(n: &DigitSeq, n1: &DigitSeq) -> Result<DigitSeq, FibError> {
    add(&multiply(n, n)?, &multiply(n1, n1)?)
}

/// Returns `(F(m), F(m+1))`.
fn fib_pair(m: u64) -> Result<(DigitSeq, DigitSeq), FibError> {
    if m == 0 {
        return Ok((DigitSeq::zero(), DigitSeq::one()));
    }

    let (n, n1) = fib_pair(m >> 1)?;
    let even = doubled_even(&n, &n1)?;
    let odd = doubled_odd(&n, &n1)?;
    tracing::trace!(m, digits = odd.digit_count(), "doubling step");

    if m & 1 == 0 {
        Ok((even, odd))
    } else {
        let next = add(&even, &odd)?;
        Ok((odd, next))
    }
}

/// Fast Doubling calculator.
///
/// # Example
/// ```
/// use fibdec_core::calculator::CoreCalculator;
/// use fibdec_core::fastdoubling::FastDoubling;
///
/// let calc = FastDoubling::new();
/// let result = calc.calculate_core(100).unwrap();
/// assert_eq!(result.to_string(), "354224848179261915075");
/// ```
pub struct FastDoubling;

impl FastDoubling {
    /// Create a new `FastDoubling` calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FastDoubling {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for FastDoubling {
    fn calculate_core(&self, k: u64) -> Result<DigitSeq, FibError> {
        fast_doubling(k)
    }

    fn name(&self) -> &'static str {
        "FastDoubling"
    }
}
