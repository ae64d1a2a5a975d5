//! Error handling and exit codes.

use fibdec_core::exit_codes;
use fibdec_core::FibError;
use fibdec_device::DeviceError;

/// Map a calculation error to its exit code.
#[must_use]
pub fn handle_error(err: &FibError) -> i32 {
    match err {
        FibError::CapacityExceeded { .. } => exit_codes::ERROR_CAPACITY,
        FibError::InvalidInput(_) => exit_codes::ERROR_CONFIG,
        FibError::SubtractUnderflow => exit_codes::ERROR_GENERIC,
        FibError::Mismatch { .. } => exit_codes::ERROR_MISMATCH,
        FibError::Cancelled => exit_codes::ERROR_CANCELED,
    }
}

/// Exit code for an application error, looking through the `anyhow` chain.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(fib) = cause.downcast_ref::<FibError>() {
            return handle_error(fib);
        }
        if let Some(DeviceError::Fib(fib)) = cause.downcast_ref::<DeviceError>() {
            return handle_error(fib);
        }
    }
    exit_codes::ERROR_GENERIC
}
