//! Logging utilities.
//!
//! The engine logs through the `log` facade only. Binaries call
//! [`init_logging`] once to install an `env_logger` backend.

mod init;

pub use init::{LoggingConfig, init_logging};
