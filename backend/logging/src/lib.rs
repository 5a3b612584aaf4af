//! Structured logging for the rxproof binaries.
//!
//! One process-wide `tracing` subscriber, installed once at startup.

pub mod logger;

pub use logger::{init_console_logger, init_logger};
