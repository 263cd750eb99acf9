//! Pull-based edge sequence over an [`RmatGenerator`].

use std::iter::FusedIterator;

use tracing::{debug, error, instrument};

use crate::{
    Edge, Result, VertexId,
    error::{InvariantViolation, RmatError},
    generator::RmatGenerator,
};

/// Lazy, finite, forward-only sequence of edges.
///
/// Produces [`RmatGenerator::declared_size`] primary edges. In undirected
/// mode every primary edge `(u, v)` is immediately followed by its twin
/// `(v, u)`, which costs no random draws, so the cursor yields twice the
/// declared size. Use [`EdgeCursor::emitted_edge_count`] for the total.
///
/// The cursor borrows its generator mutably for its whole life and cannot be
/// rewound; a fresh generator is needed to replay a sequence. Dropping an
/// undirected cursor between a primary edge and its twin discards the twin,
/// so a following cursor starts on a new primary and the combined output is
/// no longer paired at positions `2k`/`2k + 1`.
///
/// An invariant failure ends the sequence for good; reading the violation
/// with [`EdgeCursor::take_fault`] does not revive it.
#[derive(Debug)]
pub struct EdgeCursor<'g> {
    generator: &'g mut RmatGenerator,
    produced: u64,
    current: Option<Edge>,
    twin_pending: bool,
    faulted: bool,
    fault: Option<InvariantViolation>,
}

impl<'g> EdgeCursor<'g> {
    pub(crate) const fn new(generator: &'g mut RmatGenerator) -> Self {
        Self {
            generator,
            produced: 0,
            current: None,
            twin_pending: false,
            faulted: false,
            fault: None,
        }
    }

    /// Returns `true` while primary edges remain or a twin is pending.
    ///
    /// Always `false` after an invariant failure.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        if self.faulted {
            return false;
        }
        self.twin_pending || self.produced < self.generator.config.edge_count
    }

    /// Produces the next edge.
    ///
    /// A pending twin is returned without touching the random stream;
    /// otherwise a new primary edge is synthesized.
    ///
    /// # Errors
    /// Returns [`RmatError::Exhausted`] when [`EdgeCursor::has_next`] is
    /// `false`, and [`RmatError::Invariant`] when enabled invariant checks
    /// fail. An invariant failure ends the sequence.
    ///
    /// # Examples
    /// ```
    /// use rmat_core::{RmatBuilder, RmatError};
    ///
    /// let mut generator = RmatBuilder::new()
    ///     .with_edge_count(1)
    ///     .build()
    ///     .expect("configuration is valid");
    /// let mut cursor = generator.edges();
    /// assert!(cursor.advance().is_ok());
    /// assert_eq!(cursor.advance(), Err(RmatError::Exhausted));
    /// ```
    pub fn advance(&mut self) -> Result<Edge> {
        if !self.has_next() {
            return Err(RmatError::Exhausted);
        }

        if self.twin_pending
            && let Some(edge) = self.current
        {
            self.twin_pending = false;
            let twin = edge.reversed();
            self.current = Some(twin);
            return Ok(twin);
        }

        match self.generator.synthesize_one_edge() {
            Ok(edge) => {
                self.produced += 1;
                self.current = Some(edge);
                self.twin_pending = self.generator.config.undirected;
                Ok(edge)
            }
            Err(violation) => {
                self.faulted = true;
                self.twin_pending = false;
                self.fault = Some(violation.clone());
                Err(RmatError::Invariant(violation))
            }
        }
    }

    /// Returns the most recently produced edge.
    #[must_use]
    pub const fn current(&self) -> Option<Edge> {
        self.current
    }

    /// Returns the number of *primary* edges this cursor will produce.
    ///
    /// In undirected mode this is half the number of values actually yielded.
    #[must_use]
    pub const fn declared_size(&self) -> u64 {
        self.generator.config.edge_count
    }

    /// Alias for [`EdgeCursor::declared_size`].
    #[must_use]
    pub const fn primary_edge_count(&self) -> u64 {
        self.declared_size()
    }

    /// Returns the total number of values a full pass yields, twins included.
    #[must_use]
    pub const fn emitted_edge_count(&self) -> u64 {
        self.generator.config.emitted_edge_count()
    }

    /// Returns the theoretical largest vertex id of the underlying generator.
    #[must_use]
    pub const fn max_vertex_id(&self) -> VertexId {
        self.generator.config.max_vertex_id()
    }

    /// Returns the number of primary edges produced so far.
    #[must_use]
    pub const fn primary_edges_produced(&self) -> u64 {
        self.produced
    }

    /// Returns the number of values still to come.
    #[must_use]
    pub const fn remaining(&self) -> u64 {
        if self.faulted {
            return 0;
        }
        let primaries = self.generator.config.edge_count.saturating_sub(self.produced);
        let per_primary = if self.generator.config.undirected { 2 } else { 1 };
        let twin = if self.twin_pending { 1 } else { 0 };
        primaries.saturating_mul(per_primary).saturating_add(twin)
    }

    /// Takes the invariant violation that ended iteration, if any.
    ///
    /// The cursor stays exhausted afterwards.
    pub const fn take_fault(&mut self) -> Option<InvariantViolation> {
        self.fault.take()
    }

    /// Consumes the rest of the sequence and returns the largest vertex id
    /// seen, or `None` when nothing was left to produce.
    ///
    /// This is a destructive, one-shot diagnostic for comparing the output
    /// against [`RmatGenerator::max_vertex_id`].
    ///
    /// # Errors
    /// Returns [`RmatError::Invariant`] if an invariant check fails while
    /// draining.
    ///
    /// # Examples
    /// ```
    /// use rmat_core::RmatBuilder;
    ///
    /// let mut generator = RmatBuilder::new()
    ///     .with_vertex_scale(4)
    ///     .with_edge_count(2_000)
    ///     .build()
    ///     .expect("configuration is valid");
    /// let bound = generator.max_vertex_id();
    /// let observed = generator
    ///     .edges()
    ///     .max_observed_vertex_id()
    ///     .expect("invariants hold");
    /// assert!(observed.is_some_and(|max| max <= bound));
    /// ```
    #[instrument(
        name = "rmat.max_observed_vertex_id",
        skip(self),
        fields(
            vertex_scale = self.generator.config.vertex_scale,
            remaining = self.remaining(),
        ),
    )]
    pub fn max_observed_vertex_id(mut self) -> Result<Option<VertexId>> {
        let mut observed: Option<VertexId> = None;
        while self.has_next() {
            let vertex = self.advance()?.max_vertex();
            observed = Some(observed.map_or(vertex, |max| max.max(vertex)));
        }

        let bound = self.generator.max_vertex_id();
        debug!(
            observed = ?observed,
            bound,
            reached_bound = observed == Some(bound),
            "max vertex id scan completed"
        );
        Ok(observed)
    }
}

impl Iterator for EdgeCursor<'_> {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        match self.advance() {
            Ok(edge) => Some(edge),
            Err(RmatError::Invariant(violation)) => {
                error!(%violation, "edge synthesis invariant violated; ending sequence");
                None
            }
            Err(_) => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        usize::try_from(self.remaining()).map_or((usize::MAX, None), |left| (left, Some(left)))
    }
}

impl FusedIterator for EdgeCursor<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    use crate::{InvariantChecks, RmatBuilder, RmatConfig};

    fn generator(edge_count: u64, undirected: bool) -> RmatGenerator {
        RmatBuilder::new()
            .with_seed(42)
            .with_vertex_scale(6)
            .with_edge_count(edge_count)
            .with_undirected(undirected)
            .with_invariant_checks(InvariantChecks::Enabled)
            .build()
            .expect("configuration is valid")
    }

    #[rstest]
    #[case::directed(false)]
    #[case::undirected(true)]
    fn zero_edges_exhaust_immediately(#[case] undirected: bool) {
        let mut generator = generator(0, undirected);
        let mut cursor = generator.edges();
        assert!(!cursor.has_next());
        assert_eq!(cursor.remaining(), 0);
        assert_eq!(cursor.advance(), Err(RmatError::Exhausted));
        assert_eq!(cursor.next(), None);
    }

    #[rstest]
    fn twin_follows_primary_without_drawing() {
        let mut generator = generator(2, true);
        let mut cursor = generator.edges();
        let primary = cursor.advance().expect("first primary edge");
        assert_eq!(cursor.primary_edges_produced(), 1);
        assert!(cursor.has_next());
        let twin = cursor.advance().expect("twin edge");
        assert_eq!(twin, primary.reversed());
        assert_eq!(cursor.primary_edges_produced(), 1);
        assert_eq!(cursor.current(), Some(twin));
    }

    #[rstest]
    fn last_twin_is_still_emitted() {
        let mut generator = generator(1, true);
        let mut cursor = generator.edges();
        let primary = cursor.advance().expect("primary edge");
        assert_eq!(cursor.primary_edges_produced(), cursor.declared_size());
        assert!(cursor.has_next(), "pending twin keeps the cursor alive");
        assert_eq!(cursor.advance(), Ok(primary.reversed()));
        assert!(!cursor.has_next());
    }

    #[rstest]
    #[case::directed(5, false, 5)]
    #[case::undirected(5, true, 10)]
    fn size_hint_tracks_remaining_values(
        #[case] edge_count: u64,
        #[case] undirected: bool,
        #[case] emitted: usize,
    ) {
        let mut generator = generator(edge_count, undirected);
        let mut cursor = generator.edges();
        assert_eq!(cursor.size_hint(), (emitted, Some(emitted)));
        let _ = cursor.next();
        assert_eq!(cursor.size_hint(), (emitted - 1, Some(emitted - 1)));
        assert_eq!(cursor.by_ref().count(), emitted - 1);
        assert_eq!(cursor.size_hint(), (0, Some(0)));
    }

    #[rstest]
    fn accessors_distinguish_primary_and_emitted_counts() {
        let mut generator = generator(7, true);
        let cursor = generator.edges();
        assert_eq!(cursor.declared_size(), 7);
        assert_eq!(cursor.primary_edge_count(), 7);
        assert_eq!(cursor.emitted_edge_count(), 14);
    }

    #[rstest]
    fn max_observed_vertex_id_drains_the_cursor() {
        let mut generator = generator(500, false);
        let bound = generator.max_vertex_id();
        let observed = generator
            .edges()
            .max_observed_vertex_id()
            .expect("invariants hold")
            .expect("non-empty sequence");
        assert!(observed <= bound);
    }

    #[rstest]
    fn max_observed_vertex_id_of_empty_sequence_is_none() {
        let mut generator = generator(0, false);
        assert_eq!(generator.edges().max_observed_vertex_id(), Ok(None));
    }

    #[rstest]
    fn fresh_cursor_has_no_fault() {
        let mut generator = generator(3, false);
        let mut cursor = generator.edges();
        assert_eq!(cursor.by_ref().count(), 3);
        assert_eq!(cursor.take_fault(), None);
    }

    fn faulting_generator(undirected: bool) -> RmatGenerator {
        let mut config: RmatConfig = RmatBuilder::new()
            .with_vertex_scale(4)
            .with_edge_count(8)
            .with_undirected(undirected)
            .with_invariant_checks(InvariantChecks::Enabled)
            .build_config()
            .expect("configuration is valid");
        config.probabilities.a = f64::NAN;
        RmatGenerator::from_config(config)
    }

    #[rstest]
    #[case::directed(false)]
    #[case::undirected(true)]
    fn invariant_failure_ends_the_sequence_permanently(#[case] undirected: bool) {
        let mut generator = faulting_generator(undirected);
        let mut cursor = generator.edges();
        assert!(cursor.has_next());

        let err = cursor.advance().expect_err("NaN probabilities must fail the sum check");
        assert!(matches!(
            err,
            RmatError::Invariant(InvariantViolation::ProbabilitySum { level: 0, .. })
        ));
        assert!(!cursor.has_next());
        assert_eq!(cursor.remaining(), 0);
        assert_eq!(cursor.size_hint(), (0, Some(0)));
        assert_eq!(cursor.next(), None);

        let fault = cursor.take_fault();
        assert!(matches!(
            fault,
            Some(InvariantViolation::ProbabilitySum { level: 0, .. })
        ));
        assert!(!cursor.has_next(), "reading the fault must not revive the cursor");
        assert_eq!(cursor.remaining(), 0);
        assert_eq!(cursor.advance(), Err(RmatError::Exhausted));
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.take_fault(), None);
    }

    #[rstest]
    fn iterator_records_fault_when_synthesis_fails() {
        let mut generator = faulting_generator(false);
        let mut cursor = generator.edges();
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.primary_edges_produced(), 0);
        assert!(cursor.take_fault().is_some());
        assert_eq!(cursor.by_ref().count(), 0);
    }

    #[rstest]
    fn max_observed_vertex_id_propagates_invariant_failures() {
        let mut generator = faulting_generator(false);
        let err = generator
            .edges()
            .max_observed_vertex_id()
            .expect_err("scan must surface the violation");
        assert!(matches!(err, RmatError::Invariant(_)));
    }

    #[rstest]
    fn dropped_cursor_discards_pending_twin() {
        let mut resumed = generator(4, true);
        let first = {
            let mut cursor = resumed.edges();
            cursor.advance().expect("primary edge")
        };
        let mut cursor = resumed.edges();
        let next = cursor.advance().expect("new primary edge");
        let mut reference = generator(4, true);
        let reference_edges: Vec<Edge> = reference.edges().collect();
        assert_eq!(reference_edges.first(), Some(&first));
        assert_eq!(reference_edges.get(2), Some(&next));
    }
}
