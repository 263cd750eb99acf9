//! Benchmark support crate for the R-MAT generator.
//!
//! Provides the parameter grid and setup helpers shared by the Criterion
//! benchmarks that measure edge synthesis throughput.

pub mod error;
pub mod params;
