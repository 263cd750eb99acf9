//! Builder utilities for configuring R-MAT generators.
//!
//! Collects the generator parameters and validates them before any
//! [`RmatGenerator`] is constructed.

use crate::{
    Result,
    config::{DEFAULT_SEED, MAX_VERTEX_SCALE, RmatConfig},
    error::RmatError,
    generator::RmatGenerator,
    invariants::InvariantChecks,
    probabilities::QuadrantProbabilities,
};

const DEFAULT_VERTEX_SCALE: u32 = 16;
const DEFAULT_EDGE_FACTOR: u64 = 16;

/// Configures and constructs [`RmatGenerator`] instances.
///
/// Defaults follow the Graph500 reference setup: scale 16, sixteen edges per
/// vertex and `(a, b, c, d) = (0.57, 0.19, 0.19, 0.05)`, directed and
/// unscrambled.
///
/// # Examples
/// ```
/// use rmat_core::{QuadrantProbabilities, RmatBuilder};
///
/// let mut generator = RmatBuilder::new()
///     .with_seed(7)
///     .with_vertex_scale(10)
///     .with_edge_count(100)
///     .with_probabilities(QuadrantProbabilities::GRAPH500)
///     .with_scramble(true)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(generator.edges().count(), 100);
/// ```
#[derive(Debug, Clone)]
pub struct RmatBuilder {
    seed: u64,
    vertex_scale: u32,
    edge_count: Option<u64>,
    probabilities: QuadrantProbabilities,
    scramble: bool,
    undirected: bool,
    invariant_checks: InvariantChecks,
}

impl Default for RmatBuilder {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            vertex_scale: DEFAULT_VERTEX_SCALE,
            edge_count: None,
            probabilities: QuadrantProbabilities::GRAPH500,
            scramble: false,
            undirected: false,
            invariant_checks: InvariantChecks::default(),
        }
    }
}

impl RmatBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use rmat_core::RmatBuilder;
    ///
    /// let builder = RmatBuilder::new();
    /// assert_eq!(builder.vertex_scale(), 16);
    /// assert_eq!(builder.edge_count(), 16 << 16);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the RNG seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Overrides the number of recursion levels.
    #[must_use]
    pub const fn with_vertex_scale(mut self, vertex_scale: u32) -> Self {
        self.vertex_scale = vertex_scale;
        self
    }

    /// Overrides the number of primary edges.
    ///
    /// When unset, the count is sixteen edges per vertex.
    #[must_use]
    pub const fn with_edge_count(mut self, edge_count: u64) -> Self {
        self.edge_count = Some(edge_count);
        self
    }

    /// Overrides the initial quadrant probabilities.
    #[must_use]
    pub const fn with_probabilities(mut self, probabilities: QuadrantProbabilities) -> Self {
        self.probabilities = probabilities;
        self
    }

    /// Enables or disables vertex-id scrambling.
    #[must_use]
    pub const fn with_scramble(mut self, scramble: bool) -> Self {
        self.scramble = scramble;
        self
    }

    /// Enables or disables emission of reverse twins.
    #[must_use]
    pub const fn with_undirected(mut self, undirected: bool) -> Self {
        self.undirected = undirected;
        self
    }

    /// Overrides whether invariants are verified while generating.
    #[must_use]
    pub const fn with_invariant_checks(mut self, checks: InvariantChecks) -> Self {
        self.invariant_checks = checks;
        self
    }

    /// Returns the configured vertex scale.
    #[must_use]
    pub const fn vertex_scale(&self) -> u32 {
        self.vertex_scale
    }

    /// Returns the effective primary-edge count.
    #[must_use]
    pub const fn edge_count(&self) -> u64 {
        match self.edge_count {
            Some(count) => count,
            None => default_edge_count(self.vertex_scale),
        }
    }

    /// Validates the parameters into an immutable [`RmatConfig`].
    ///
    /// # Errors
    /// Returns [`RmatError::InvalidConfiguration`] when the vertex scale
    /// exceeds [`MAX_VERTEX_SCALE`] or the probabilities are negative,
    /// non-finite, or do not sum to one.
    pub fn build_config(self) -> Result<RmatConfig> {
        if self.vertex_scale > MAX_VERTEX_SCALE {
            return Err(RmatError::invalid(format!(
                "vertex_scale must be at most {MAX_VERTEX_SCALE} (got {})",
                self.vertex_scale
            )));
        }
        self.probabilities.validate()?;

        Ok(RmatConfig {
            seed: self.seed,
            vertex_scale: self.vertex_scale,
            edge_count: self.edge_count(),
            probabilities: self.probabilities,
            scramble: self.scramble,
            undirected: self.undirected,
            invariant_checks: self.invariant_checks,
        })
    }

    /// Validates the configuration and constructs an [`RmatGenerator`].
    ///
    /// # Errors
    /// See [`RmatBuilder::build_config`].
    ///
    /// # Examples
    /// ```
    /// use rmat_core::{QuadrantProbabilities, RmatBuilder, RmatError};
    ///
    /// let err = RmatBuilder::new()
    ///     .with_probabilities(QuadrantProbabilities::new(0.9, 0.9, 0.1, 0.1))
    ///     .build()
    ///     .expect_err("probabilities above one are rejected");
    /// assert!(matches!(err, RmatError::InvalidConfiguration { .. }));
    /// ```
    pub fn build(self) -> Result<RmatGenerator> {
        self.build_config().map(RmatGenerator::from_config)
    }
}

const fn default_edge_count(vertex_scale: u32) -> u64 {
    match 1_u64.checked_shl(vertex_scale) {
        Some(vertices) => vertices.saturating_mul(DEFAULT_EDGE_FACTOR),
        None => u64::MAX,
    }
}
