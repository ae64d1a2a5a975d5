//! Cooperative cancellation for the benchmark sweep.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use fibdec_core::FibError;

/// Shared flag tripped by Ctrl+C and polled between offsets.
///
/// ```
/// use fibdec_lib::cancel::CancellationToken;
///
/// let token = CancellationToken::new();
/// token.clone().cancel();
/// assert!(token.check_cancelled().is_err());
/// ```
#[derive(Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// `Err(FibError::Cancelled)` once cancelled.
    pub fn check_cancelled(&self) -> Result<(), FibError> {
        if self.is_cancelled() {
            Err(FibError::Cancelled)
        } else {
            Ok(())
        }
    }

    /// Trip this token on Ctrl+C.
    ///
    /// Only one handler can exist per process; a second install is logged
    /// and ignored.
    pub fn install_ctrlc_handler(&self) {
        let token = self.clone();
        if let Err(e) = ctrlc::set_handler(move || token.cancel()) {
            tracing::warn!("could not install Ctrl+C handler: {e}");
        }
    }
}
