//! Tracing and logging for gapscan.

pub mod setup;

pub use setup::init_tracing;
