//! Logging utilities.
//!
//! This module centralizes logger initialization for binaries and test
//! harnesses built on the kernel. Library code itself only uses the `log`
//! facade — degenerate-geometry fallbacks log at `debug`/`warn` and
//! otherwise stay out of the way.

mod init;

pub use init::{LoggingConfig, init_logging};
