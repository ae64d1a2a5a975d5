//! Capacity limits and process exit codes.

/// Maximum number of decimal digits a `DigitSeq` may hold.
pub const MAX_DIGITS: usize = 256;

/// Largest Fibonacci index whose value fits in `MAX_DIGITS` digits.
///
/// F(1226) has exactly 256 digits; F(1227) has 257.
pub const MAX_INDEX: u64 = 1226;

/// Largest Fibonacci index that fits in a u64.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: u64 = 93;

/// Exit codes for the `fibdec` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Strategy results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration or input.
    pub const ERROR_CONFIG: i32 = 4;
    /// Requested value does not fit in `MAX_DIGITS` digits.
    pub const ERROR_CAPACITY: i32 = 5;
    /// Run cancelled by user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}
