//! The [`RmatGenerator`] entry point.

use tracing::debug;

use crate::{
    VertexId,
    config::RmatConfig,
    cursor::EdgeCursor,
    rng::{self, RmatRng},
};

/// R-MAT edge generator.
///
/// Owns the configuration and the random stream. Edges are pulled through an
/// [`EdgeCursor`] obtained from [`RmatGenerator::edges`]; the cursor holds the
/// generator's only mutable borrow, so two cursors can never interleave draws
/// from the same stream.
///
/// Dropping a cursor early is safe. The next cursor continues from the exact
/// RNG position the previous one stopped at, so output stays deterministic
/// and never overlaps.
///
/// # Examples
/// ```
/// use rmat_core::{Edge, RmatBuilder};
///
/// let mut generator = RmatBuilder::new()
///     .with_seed(1234)
///     .with_vertex_scale(3)
///     .with_edge_count(4)
///     .with_undirected(true)
///     .build()
///     .expect("configuration is valid");
/// let edges: Vec<Edge> = generator.edges().collect();
/// assert_eq!(edges.len(), 8);
/// assert_eq!(edges[1], edges[0].reversed());
/// ```
#[derive(Debug, Clone)]
pub struct RmatGenerator {
    pub(crate) config: RmatConfig,
    pub(crate) rng: RmatRng,
}

impl RmatGenerator {
    /// Creates a generator from a validated configuration, seeding a fresh
    /// random stream.
    #[must_use]
    pub fn from_config(config: RmatConfig) -> Self {
        let probabilities = config.probabilities();
        debug!(
            seed = config.seed(),
            vertex_scale = config.vertex_scale(),
            edge_count = config.edge_count(),
            a = probabilities.a,
            b = probabilities.b,
            c = probabilities.c,
            d = probabilities.d,
            scramble = config.scramble(),
            undirected = config.undirected(),
            invariant_checks = ?config.invariant_checks(),
            "rmat generator configured"
        );
        let rng = rng::seeded(config.seed());
        Self { config, rng }
    }

    /// Returns the immutable configuration.
    #[must_use]
    pub const fn config(&self) -> &RmatConfig {
        &self.config
    }

    /// Returns the theoretical largest vertex id, `2^vertex_scale - 1`.
    #[must_use]
    pub const fn max_vertex_id(&self) -> VertexId {
        self.config.max_vertex_id()
    }

    /// Returns the number of *primary* edges a cursor produces.
    ///
    /// With `undirected` set, a cursor yields twice this many values because
    /// every primary edge is followed by its reverse; see
    /// [`RmatGenerator::emitted_edge_count`].
    #[must_use]
    pub const fn declared_size(&self) -> u64 {
        self.config.edge_count()
    }

    /// Returns the total number of values a cursor produces.
    #[must_use]
    pub const fn emitted_edge_count(&self) -> u64 {
        self.config.emitted_edge_count()
    }

    /// Starts a new edge sequence of [`RmatGenerator::declared_size`] primary
    /// edges, continuing from the current RNG position.
    ///
    /// A twin still pending in a previously dropped undirected cursor is not
    /// carried over; the new sequence begins with a fresh primary edge.
    pub fn edges(&mut self) -> EdgeCursor<'_> {
        EdgeCursor::new(self)
    }
}

impl<'g> IntoIterator for &'g mut RmatGenerator {
    type Item = crate::Edge;
    type IntoIter = EdgeCursor<'g>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges()
    }
}
