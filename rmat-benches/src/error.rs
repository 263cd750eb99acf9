//! Benchmark setup error type.
//!
//! Lets setup functions propagate generator failures with `?` instead of
//! calling `.expect()`.

use rmat_core::RmatError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// The generator rejected the benchmark configuration.
    #[error("generator construction failed: {0}")]
    Rmat(#[from] RmatError),
}
