//! Device benchmark sweep.
//!
//! Reads every offset `0..=last` through one device session, recording the
//! time the device spent computing each value next to the time observed by
//! the caller. A second pass walks the offsets back down. Every read is
//! checked against a sequence prefilled by [`IterativeGenerator`].

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, SeekFrom, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use indicatif::ProgressBar;

use fibdec_core::{FibError, IterativeGenerator, SequenceGenerator, MAX_DIGITS};
use fibdec_device::{DeviceError, FibDevice, Session};

use crate::cancel::CancellationToken;

/// Largest accepted last offset for one sweep.
pub const MAX_SWEEP_OFFSET: u64 = 1 << 16;

/// Timing of one forward read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepSample {
    /// Requested offset, before the device clamps it.
    pub offset: u64,
    /// Time the device spent computing the value.
    pub kernel: Duration,
    /// Time observed around the read call.
    pub user: Duration,
}

impl SweepSample {
    /// Time spent outside the computation.
    #[must_use]
    pub fn overhead(&self) -> Duration {
        self.user.saturating_sub(self.kernel)
    }
}

impl fmt::Display for SweepSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.offset,
            self.kernel.as_nanos(),
            self.user.as_nanos(),
            self.overhead().as_nanos()
        )
    }
}

/// Outcome of a full sweep.
#[derive(Debug, Clone, Default)]
pub struct SweepReport {
    /// Forward-pass samples in offset order.
    pub samples: Vec<SweepSample>,
    /// Reads checked across both passes.
    pub verified: u64,
}

/// Run the forward and backward passes over `0..=last`.
///
/// Fails with `InvalidInput` when `last` exceeds [`MAX_SWEEP_OFFSET`],
/// with `Mismatch` at the first read that differs from the prefilled
/// sequence, and with `Cancelled` once `cancel` trips.
pub fn run_sweep(
    device: &FibDevice,
    last: u64,
    cancel: &CancellationToken,
    progress: &ProgressBar,
) -> Result<SweepReport, DeviceError> {
    if last > MAX_SWEEP_OFFSET {
        return Err(FibError::InvalidInput(format!(
            "sweep offset {last} exceeds the limit of {MAX_SWEEP_OFFSET}"
        ))
        .into());
    }
    let expected = expected_values(last.min(device.max_offset()))?;
    let mut session = device.open()?;
    let mut buf = [0u8; MAX_DIGITS];
    let mut report = SweepReport::default();

    for offset in 0..=last {
        cancel.check_cancelled()?;
        let start = Instant::now();
        let len = read_at(&mut session, offset, &mut buf)?;
        let user = start.elapsed();
        verify(&expected, session.position(), &buf[..len])?;

        let sample = SweepSample {
            offset,
            kernel: session.last_latency(),
            user,
        };
        tracing::debug!(%sample, "forward read");
        report.samples.push(sample);
        report.verified += 1;
        progress.inc(1);
    }

    for offset in (0..=last).rev() {
        cancel.check_cancelled()?;
        let len = read_at(&mut session, offset, &mut buf)?;
        verify(&expected, session.position(), &buf[..len])?;
        report.verified += 1;
    }

    Ok(report)
}

/// Write one `"offset kernel_ns user_ns diff_ns"` line per sample.
pub fn write_report(path: impl AsRef<Path>, samples: &[SweepSample]) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for sample in samples {
        writeln!(out, "{sample}")?;
    }
    out.flush()
}

fn expected_values(last: u64) -> Result<Vec<Vec<u8>>, FibError> {
    Ok(IterativeGenerator::new()
        .generate(0, last)?
        .into_iter()
        .map(|(_, value)| value.to_ascii())
        .collect())
}

fn read_at(session: &mut Session<'_>, offset: u64, buf: &mut [u8]) -> Result<usize, DeviceError> {
    session.seek(SeekFrom::Start(offset));
    session.read(buf)
}

fn verify(expected: &[Vec<u8>], position: u64, read: &[u8]) -> Result<(), FibError> {
    let want = usize::try_from(position)
        .ok()
        .and_then(|i| expected.get(i));
    if want.is_some_and(|want| want.as_slice() == read) {
        Ok(())
    } else {
        tracing::warn!(position, "device read disagrees with the reference sequence");
        Err(FibError::Mismatch { index: position })
    }
}
