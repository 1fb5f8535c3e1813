//! Logging utilities.
//!
//! Centralizes logger initialization for binaries embedding the engine. The
//! engine itself only speaks through the `log` facade.

mod init;

pub use init::{LoggingConfig, init_logging};
