//! Edge and vertex identifier types.

use std::fmt;

/// Vertex identifier in `[0, 2^vertex_scale - 1]`.
pub type VertexId = u64;

/// Ordered vertex pair produced by the generator.
///
/// Self-loops and repeated edges are legitimate outputs.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Edge {
    /// Source vertex (`u`).
    pub source: VertexId,
    /// Target vertex (`v`).
    pub target: VertexId,
}

impl Edge {
    /// Creates the edge `(source, target)`.
    #[must_use]
    pub const fn new(source: VertexId, target: VertexId) -> Self {
        Self { source, target }
    }

    /// Returns `(target, source)`.
    ///
    /// # Examples
    /// ```
    /// use rmat_core::Edge;
    ///
    /// assert_eq!(Edge::new(1, 4).reversed(), Edge::new(4, 1));
    /// ```
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(self.target, self.source)
    }

    /// Returns `true` when both endpoints coincide.
    #[must_use]
    pub const fn is_self_loop(self) -> bool {
        self.source == self.target
    }

    /// Returns the larger endpoint.
    #[must_use]
    pub fn max_vertex(self) -> VertexId {
        self.source.max(self.target)
    }
}

impl From<(VertexId, VertexId)> for Edge {
    fn from((source, target): (VertexId, VertexId)) -> Self {
        Self::new(source, target)
    }
}

impl From<Edge> for (VertexId, VertexId) {
    fn from(edge: Edge) -> Self {
        (edge.source, edge.target)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.source, self.target)
    }
}
