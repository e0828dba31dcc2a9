//! Shared helpers
//!
//! - [`progress`] - Spinner that degrades to a no-op without the `progress` feature
//! - [`logging`] - `tracing` subscriber setup for the binary

pub mod logging;
pub mod progress;
