//! Benchmark parameter types.

use std::fmt;

use rmat_core::{InvariantChecks, RmatBuilder, RmatGenerator};

use crate::error::BenchSetupError;

/// Seed shared by every benchmark so runs are comparable.
pub const BENCH_SEED: u64 = 42;

/// Parameters for one edge-generation benchmark run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationBenchParams {
    /// Number of recursion levels.
    pub vertex_scale: u32,
    /// Number of primary edges per iteration.
    pub edge_count: u64,
    /// Whether vertex ids are scrambled.
    pub scramble: bool,
    /// Whether reverse twins are emitted.
    pub undirected: bool,
}

impl GenerationBenchParams {
    /// Number of values one iteration yields, used for Criterion throughput.
    #[must_use]
    pub const fn emitted_edges(&self) -> u64 {
        if self.undirected {
            self.edge_count.saturating_mul(2)
        } else {
            self.edge_count
        }
    }

    /// Builds a generator for these parameters with invariant checks off, so
    /// timings reflect release behaviour.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::Rmat`] if the generator rejects the
    /// parameters.
    pub fn generator(&self) -> Result<RmatGenerator, BenchSetupError> {
        Ok(RmatBuilder::new()
            .with_seed(BENCH_SEED)
            .with_vertex_scale(self.vertex_scale)
            .with_edge_count(self.edge_count)
            .with_scramble(self.scramble)
            .with_undirected(self.undirected)
            .with_invariant_checks(InvariantChecks::Disabled)
            .build()?)
    }
}

impl fmt::Display for GenerationBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scale={},m={}", self.vertex_scale, self.edge_count)?;
        if self.scramble {
            f.write_str(",scrambled")?;
        }
        if self.undirected {
            f.write_str(",undirected")?;
        }
        Ok(())
    }
}
