//! fibdec library: application logic for the `fibdec` binary.

pub mod app;
pub mod bench;
pub mod cancel;
pub mod config;
pub mod errors;
