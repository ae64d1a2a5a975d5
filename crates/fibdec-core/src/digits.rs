//! Decimal digit sequences.
//!
//! `DigitSeq` keeps its digits least-significant first, which is the order
//! every kernel operation works in. `Decimal` is the most-significant-first
//! form handed to callers. `DigitSeq::into_decimal` is the only place where
//! the order flips.

use std::cmp::Ordering;
use std::fmt;

use crate::calculator::FibError;
use crate::constants::MAX_DIGITS;

/// A non-negative integer as base-10 digits, least-significant first.
///
/// Invariants: every digit is in `0..=9`, the sequence is never empty, it
/// holds at most `MAX_DIGITS` digits, and the most-significant digit is
/// nonzero unless the value is zero (which is the single digit `0`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitSeq {
    digits: Vec<u8>,
}

impl DigitSeq {
    /// The value 0.
    #[must_use]
    pub fn zero() -> Self {
        Self { digits: vec![0] }
    }

    /// The value 1.
    #[must_use]
    pub fn one() -> Self {
        Self { digits: vec![1] }
    }

    /// Build a sequence from a native integer.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_u64(mut n: u64) -> Self {
        if n == 0 {
            return Self::zero();
        }
        let mut digits = Vec::with_capacity(20);
        while n > 0 {
            digits.push((n % 10) as u8);
            n /= 10;
        }
        Self { digits }
    }

    /// Parse decimal text (most-significant digit first).
    ///
    /// Leading zeros are accepted and trimmed.
    ///
    /// # Example
    /// ```
    /// use fibdec_core::digits::DigitSeq;
    ///
    /// let seq = DigitSeq::parse("00120").unwrap();
    /// assert_eq!(seq.as_lsd_slice(), &[0, 2, 1]);
    /// assert_eq!(seq.to_string(), "120");
    /// ```
    pub fn parse(text: &str) -> Result<Self, FibError> {
        if text.is_empty() {
            return Err(FibError::InvalidInput("empty digit string".into()));
        }
        let mut digits = Vec::with_capacity(text.len());
        for c in text.bytes().rev() {
            if !c.is_ascii_digit() {
                return Err(FibError::InvalidInput(format!(
                    "invalid digit {:?} in {text:?}",
                    char::from(c)
                )));
            }
            digits.push(c - b'0');
        }
        Self::from_kernel(digits)
    }

    /// Build a sequence from raw digits given least-significant first.
    pub fn from_lsd_digits(digits: Vec<u8>) -> Result<Self, FibError> {
        if digits.is_empty() {
            return Err(FibError::InvalidInput("empty digit sequence".into()));
        }
        if let Some(bad) = digits.iter().find(|&&d| d > 9) {
            return Err(FibError::InvalidInput(format!("digit out of range: {bad}")));
        }
        Self::from_kernel(digits)
    }

    /// Trim most-significant zeros and enforce the capacity bound.
    ///
    /// Callers guarantee every digit is already in `0..=9`.
    pub(crate) fn from_kernel(mut digits: Vec<u8>) -> Result<Self, FibError> {
        trim_leading_zeros(&mut digits);
        if digits.len() > MAX_DIGITS {
            return Err(FibError::CapacityExceeded {
                index: None,
                digits: digits.len(),
                max: MAX_DIGITS,
            });
        }
        Ok(Self { digits })
    }

    /// Digits, least-significant first.
    #[must_use]
    pub fn as_lsd_slice(&self) -> &[u8] {
        &self.digits
    }

    /// Number of digits used.
    #[must_use]
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }

    /// Flip to most-significant-first order for presentation.
    #[must_use]
    pub fn into_decimal(self) -> Decimal {
        let mut digits = self.digits;
        reverse_digits(&mut digits);
        Decimal { digits }
    }
}

impl Ord for DigitSeq {
    fn cmp(&self, other: &Self) -> Ordering {
        crate::arith::compare(self, other)
    }
}

impl PartialOrd for DigitSeq {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for DigitSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &d in self.digits.iter().rev() {
            write!(f, "{}", char::from(b'0' + d))?;
        }
        Ok(())
    }
}

/// A computed value, most-significant digit first.
///
/// Displays as canonical base-10 text: no leading zeros, no separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decimal {
    digits: Vec<u8>,
}

impl Decimal {
    /// Digits, most-significant first.
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    #[must_use]
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// ASCII text of the value, without a terminator.
    #[must_use]
    pub fn to_ascii(&self) -> Vec<u8> {
        self.digits.iter().map(|&d| b'0' + d).collect()
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &d in &self.digits {
            write!(f, "{}", char::from(b'0' + d))?;
        }
        Ok(())
    }
}

/// Reverse digit order in place.
///
/// Two-pointer swap; an odd-length middle digit stays where it is.
pub fn reverse_digits(digits: &mut [u8]) {
    let n = digits.len();
    for i in 0..n / 2 {
        digits.swap(i, n - i - 1);
    }
}

/// Drop most-significant zeros, keeping a single `0` for zero.
fn trim_leading_zeros(digits: &mut Vec<u8>) {
    while digits.len() > 1 && digits.last() == Some(&0) {
        digits.pop();
    }
    if digits.is_empty() {
        digits.push(0);
    }
}
