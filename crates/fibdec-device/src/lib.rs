//! # fibdec-device
//!
//! In-process emulation of a Fibonacci character device: one exclusive
//! session at a time, the seek offset selects the index, a read yields the
//! decimal digits, and the last read latency can be queried afterwards.

pub mod device;

pub use device::{DeviceError, FibDevice, Session};
