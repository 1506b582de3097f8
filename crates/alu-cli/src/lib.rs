//! Host-side tooling for the 32-bit ALU model: rendering and logging setup.

use tracing as _;
#[cfg(test)]
use tempfile as _;

/// Logging subscriber initialization for the `alu32` binary.
pub mod logging;
/// Text and JSON rendering of evaluation results.
pub mod render;
