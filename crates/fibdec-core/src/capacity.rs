//! Closed-form digit-count estimate used to reject oversized indices early.

use crate::calculator::FibError;
use crate::constants::MAX_DIGITS;

/// log10 of the golden ratio.
const LOG10_PHI: f64 = 0.208_987_640_249_978_73;

/// log10 of sqrt(5).
const LOG10_SQRT5: f64 = 0.349_485_002_168_009_4;

/// Number of decimal digits in F(k), from Binet's formula.
///
/// Exact for every index within capacity.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn estimated_digits(k: u64) -> usize {
    if k < 2 {
        return 1;
    }
    let exponent = (k as f64).mul_add(LOG10_PHI, -LOG10_SQRT5).floor();
    (exponent as usize).saturating_add(1)
}

/// Fail with `CapacityExceeded` when F(k) cannot fit in `MAX_DIGITS` digits.
pub fn check_capacity(k: u64) -> Result<(), FibError> {
    let digits = estimated_digits(k);
    if digits > MAX_DIGITS {
        tracing::debug!(k, digits, max = MAX_DIGITS, "index rejected by capacity check");
        return Err(FibError::CapacityExceeded {
            index: Some(k),
            digits,
            max: MAX_DIGITS,
        });
    }
    Ok(())
}
