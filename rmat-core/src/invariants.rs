//! Internal consistency checks for edge synthesis.
//!
//! Checks are cheap but sit on the hot path, so they are switchable through
//! [`InvariantChecks`]. Failures are reported as [`InvariantViolation`]
//! values rather than panics.

use crate::{VertexId, error::InvariantViolation, probabilities::QuadrantProbabilities};

/// Absolute tolerance applied to `a + b + c + d == 1`.
pub const PROBABILITY_SUM_TOLERANCE: f64 = 1.0e-9;

/// Selects whether the generator verifies its invariants while running.
///
/// The default follows the build profile: enabled with `debug_assertions`,
/// disabled otherwise.
///
/// # Examples
/// ```
/// use rmat_core::InvariantChecks;
///
/// let checks = InvariantChecks::default();
/// assert_eq!(checks.is_enabled(), cfg!(debug_assertions));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InvariantChecks {
    /// Verify probability sums and vertex bounds for every edge.
    Enabled,
    /// Skip verification entirely.
    Disabled,
}

impl InvariantChecks {
    /// Returns `true` when checks run.
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

impl Default for InvariantChecks {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }
}

/// Snapshot of the working probabilities after one recursion level.
///
/// Passed to level observers installed with
/// [`crate::RmatGenerator::synthesize_observed`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LevelSnapshot {
    /// Zero-based recursion level that was just completed.
    pub level: u32,
    /// Working probabilities after perturbation and renormalisation.
    pub probabilities: QuadrantProbabilities,
}

#[expect(
    clippy::float_arithmetic,
    reason = "sum tolerance comparison requires floating-point arithmetic"
)]
pub(crate) fn check_probability_sum(
    level: u32,
    probabilities: &QuadrantProbabilities,
) -> Result<(), InvariantViolation> {
    let sum = probabilities.sum();
    if (sum - 1.0).abs() <= PROBABILITY_SUM_TOLERANCE {
        Ok(())
    } else {
        Err(InvariantViolation::ProbabilitySum { level, sum })
    }
}

pub(crate) const fn check_vertex(vertex: VertexId, max: VertexId) -> Result<(), InvariantViolation> {
    if vertex <= max {
        Ok(())
    } else {
        Err(InvariantViolation::VertexOutOfRange { vertex, max })
    }
}
