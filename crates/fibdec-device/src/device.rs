//! The device and its exclusive sessions.
//!
//! A `FibDevice` admits one open `Session` at a time. The session position
//! is the Fibonacci index; `read` writes F(position) into the caller's
//! buffer as ASCII digits and records how long the computation took.

use std::io::SeekFrom;
use std::time::{Duration, Instant};

use parking_lot::{Mutex, MutexGuard};

use fibdec_core::calculator::{Calculator, FibCalculator};
use fibdec_core::{Decimal, FibError, Strategy, MAX_INDEX};

/// Errors raised by the device layer.
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    /// Another session is open.
    #[error("device is in use")]
    Busy,

    /// The read buffer cannot hold the value.
    #[error("buffer too small: {needed} bytes needed, {available} available")]
    BufferTooSmall {
        /// Bytes the value needs.
        needed: usize,
        /// Bytes the caller offered.
        available: usize,
    },

    /// The computation failed.
    #[error(transparent)]
    Fib(#[from] FibError),
}

/// An emulated Fibonacci device.
pub struct FibDevice {
    lock: Mutex<()>,
    max_offset: u64,
    strategy: Strategy,
}

impl FibDevice {
    /// Create a device whose seek position is clamped to `0..=max_offset`.
    #[must_use]
    pub fn new(max_offset: u64) -> Self {
        Self {
            lock: Mutex::new(()),
            max_offset,
            strategy: Strategy::default(),
        }
    }

    /// Use `strategy` for reads in sessions opened afterwards.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub fn max_offset(&self) -> u64 {
        self.max_offset
    }

    /// Open a session, failing with `Busy` while another one is alive.
    pub fn open(&self) -> Result<Session<'_>, DeviceError> {
        let Some(guard) = self.lock.try_lock() else {
            tracing::warn!("device is in use");
            return Err(DeviceError::Busy);
        };
        tracing::debug!(strategy = %self.strategy, "session opened");
        Ok(Session {
            _guard: guard,
            calculator: self.strategy.calculator(),
            max_offset: self.max_offset,
            position: 0,
            last_latency: Duration::ZERO,
        })
    }
}

impl Default for FibDevice {
    fn default() -> Self {
        Self::new(MAX_INDEX)
    }
}

/// An open session. Dropping it releases the device.
pub struct Session<'a> {
    _guard: MutexGuard<'a, ()>,
    calculator: FibCalculator,
    max_offset: u64,
    position: u64,
    last_latency: Duration,
}

impl Session<'_> {
    /// Move the position and return the new one.
    ///
    /// The result is clamped to `0..=max_offset`; seeking never fails.
    /// `SeekFrom::End(d)` lands `d` before the maximum offset.
    pub fn seek(&mut self, pos: SeekFrom) -> u64 {
        let target = match pos {
            SeekFrom::Start(n) => i128::from(n),
            SeekFrom::Current(delta) => i128::from(self.position) + i128::from(delta),
            SeekFrom::End(delta) => i128::from(self.max_offset) - i128::from(delta),
        };
        let clamped = target.clamp(0, i128::from(self.max_offset));
        self.position = u64::try_from(clamped).unwrap_or(self.max_offset);
        self.position
    }

    /// Current position.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Compute F(position) and copy its digits into `buf`.
    ///
    /// Returns the number of bytes written. Nothing is written on error.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize, DeviceError> {
        let value = self.read_value()?;
        let text = value.to_ascii();
        if text.len() > buf.len() {
            return Err(DeviceError::BufferTooSmall {
                needed: text.len(),
                available: buf.len(),
            });
        }
        buf[..text.len()].copy_from_slice(&text);
        Ok(text.len())
    }

    /// Compute F(position) and return it.
    pub fn read_value(&mut self) -> Result<Decimal, DeviceError> {
        let start = Instant::now();
        let result = self.calculator.calculate(self.position);
        self.last_latency = start.elapsed();
        tracing::trace!(
            position = self.position,
            latency_ns = self.last_latency.as_nanos(),
            ok = result.is_ok(),
            "read"
        );
        Ok(result?)
    }

    /// Time spent computing the latest read.
    #[must_use]
    pub fn last_latency(&self) -> Duration {
        self.last_latency
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        tracing::debug!(position = self.position, "session released");
    }
}
