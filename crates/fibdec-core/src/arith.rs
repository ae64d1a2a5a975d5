//! Schoolbook decimal arithmetic on least-significant-first digit sequences.
//!
//! Operands and results are all LSD-first. No operation reverses its
//! inputs or outputs; converting for display is the caller's job.

use std::cmp::Ordering;

use crate::calculator::FibError;
use crate::constants::MAX_DIGITS;
use crate::digits::DigitSeq;

/// Compare two sequences by numeric value.
#[must_use]
pub fn compare(a: &DigitSeq, b: &DigitSeq) -> Ordering {
    let (a, b) = (a.as_lsd_slice(), b.as_lsd_slice());
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

/// `a + b`.
///
/// The shorter operand is treated as zero-padded. The result has
/// `max(len a, len b)` digits, plus one when a carry remains.
///
/// # Example
/// ```
/// use fibdec_core::arith::add;
/// use fibdec_core::digits::DigitSeq;
///
/// let sum = add(&DigitSeq::from_u64(999), &DigitSeq::from_u64(1)).unwrap();
/// assert_eq!(sum.to_string(), "1000");
/// ```
pub fn add(a: &DigitSeq, b: &DigitSeq) -> Result<DigitSeq, FibError> {
    let (long, short) = if a.digit_count() >= b.digit_count() {
        (a.as_lsd_slice(), b.as_lsd_slice())
    } else {
        (b.as_lsd_slice(), a.as_lsd_slice())
    };

    let mut out = Vec::with_capacity(long.len() + 1);
    let mut carry = 0u8;
    for (i, &d) in long.iter().enumerate() {
        let sum = d + short.get(i).copied().unwrap_or(0) + carry;
        out.push(sum % 10);
        carry = sum / 10;
    }
    if carry > 0 {
        out.push(carry);
    }

    DigitSeq::from_kernel(out)
}

/// `a - b`, requiring `a >= b`.
///
/// A borrow that meets zero digits of `a` turns each into 9 until a
/// nonzero digit absorbs it. Most-significant zeros are trimmed.
pub fn subtract(a: &DigitSeq, b: &DigitSeq) -> Result<DigitSeq, FibError> {
    if compare(a, b) == Ordering::Less {
        tracing::warn!(minuend = %a, subtrahend = %b, "subtract underflow");
        return Err(FibError::SubtractUnderflow);
    }

    let (a, b) = (a.as_lsd_slice(), b.as_lsd_slice());
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = 0u8;
    for (i, &d) in a.iter().enumerate() {
        let take = b.get(i).copied().unwrap_or(0) + borrow;
        if d < take {
            out.push(d + 10 - take);
            borrow = 1;
        } else {
            out.push(d - take);
            borrow = 0;
        }
    }
    debug_assert_eq!(borrow, 0, "a >= b leaves no outstanding borrow");

    DigitSeq::from_kernel(out)
}

/// `a * b`.
///
/// Products `a[i] * b[j]` accumulate at position `i + j` of a per-call
/// accumulator, followed by a single carry pass.
#[allow(clippy::cast_possible_truncation)]
pub fn multiply(a: &DigitSeq, b: &DigitSeq) -> Result<DigitSeq, FibError> {
    if a.is_zero() || b.is_zero() {
        return Ok(DigitSeq::zero());
    }

    let (a, b) = (a.as_lsd_slice(), b.as_lsd_slice());
    // A product of nonzero values has at least len(a) + len(b) - 1 digits.
    let min_digits = a.len() + b.len() - 1;
    if min_digits > MAX_DIGITS {
        return Err(FibError::CapacityExceeded {
            index: None,
            digits: min_digits,
            max: MAX_DIGITS,
        });
    }

    // Each slot sums at most 81 * MAX_DIGITS, well inside u32.
    let mut acc = vec![0u32; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        for (j, &y) in b.iter().enumerate() {
            acc[i + j] += u32::from(x) * u32::from(y);
        }
    }

    let mut out = Vec::with_capacity(acc.len());
    let mut carry = 0u32;
    for slot in acc {
        let value = slot + carry;
        out.push((value % 10) as u8);
        carry = value / 10;
    }
    debug_assert_eq!(carry, 0);

    DigitSeq::from_kernel(out)
}
