//! Validated, immutable generator configuration.

use crate::{
    VertexId, invariants::InvariantChecks, probabilities::QuadrantProbabilities, rng,
    scramble::id_mask,
};

/// Largest supported vertex scale; ids then span the whole `u64` range.
pub const MAX_VERTEX_SCALE: u32 = u64::BITS;

/// Seed used when none is supplied, matching the classic Mersenne Twister
/// default.
pub const DEFAULT_SEED: u64 = 5489;

/// Parameters of an R-MAT generator, fixed once the generator exists.
///
/// Instances are produced by [`crate::RmatBuilder::build_config`] or read back
/// from a generator with [`crate::RmatGenerator::config`].
#[derive(Clone, Debug, PartialEq)]
pub struct RmatConfig {
    pub(crate) seed: u64,
    pub(crate) vertex_scale: u32,
    pub(crate) edge_count: u64,
    pub(crate) probabilities: QuadrantProbabilities,
    pub(crate) scramble: bool,
    pub(crate) undirected: bool,
    pub(crate) invariant_checks: InvariantChecks,
}

impl RmatConfig {
    /// Returns the RNG seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the number of recursion levels.
    #[must_use]
    pub const fn vertex_scale(&self) -> u32 {
        self.vertex_scale
    }

    /// Returns the number of primary edges requested.
    #[must_use]
    pub const fn edge_count(&self) -> u64 {
        self.edge_count
    }

    /// Returns the initial quadrant probabilities.
    #[must_use]
    pub const fn probabilities(&self) -> QuadrantProbabilities {
        self.probabilities
    }

    /// Returns whether vertex ids are scrambled.
    #[must_use]
    pub const fn scramble(&self) -> bool {
        self.scramble
    }

    /// Returns whether each edge is followed by its reverse.
    #[must_use]
    pub const fn undirected(&self) -> bool {
        self.undirected
    }

    /// Returns the invariant checking mode.
    #[must_use]
    pub const fn invariant_checks(&self) -> InvariantChecks {
        self.invariant_checks
    }

    /// Returns the largest vertex id the configuration can produce,
    /// `2^vertex_scale - 1`.
    #[must_use]
    pub const fn max_vertex_id(&self) -> VertexId {
        id_mask(self.vertex_scale)
    }

    /// Returns the number of values a full sequence yields: `edge_count`, or
    /// twice that when undirected.
    #[must_use]
    pub const fn emitted_edge_count(&self) -> u64 {
        if self.undirected {
            self.edge_count.saturating_mul(2)
        } else {
            self.edge_count
        }
    }

    /// Derives the configuration for parallel worker `worker_index`.
    ///
    /// Only the seed changes; it is salted with the worker index so that every
    /// worker owns an independent, reproducible stream.
    ///
    /// # Examples
    /// ```
    /// use rmat_core::RmatBuilder;
    ///
    /// let base = RmatBuilder::new()
    ///     .with_seed(11)
    ///     .with_vertex_scale(8)
    ///     .build_config()
    ///     .expect("configuration is valid");
    /// let worker = base.for_worker(2);
    /// assert_ne!(worker.seed(), base.seed());
    /// assert_eq!(worker.vertex_scale(), base.vertex_scale());
    /// ```
    #[must_use]
    pub fn for_worker(&self, worker_index: u64) -> Self {
        Self {
            seed: rng::mix_worker_seed(self.seed, worker_index),
            ..self.clone()
        }
    }
}
