//! Recursive edge synthesis.
//!
//! Each primary edge descends `vertex_scale` levels of the adjacency matrix.
//! A level consumes four uniform draws: one to pick the quadrant and three to
//! jitter `a`, `b` and `c` by up to ±10%. `d` is never drawn for; it is
//! recomputed as the remainder so the quadruple sums to one exactly. Changing
//! the draw count or order changes every sequence produced from a given seed.

use crate::{
    Edge,
    error::InvariantViolation,
    generator::RmatGenerator,
    invariants::{LevelSnapshot, check_probability_sum, check_vertex},
    probabilities::QuadrantProbabilities,
    rng::{RmatRng, unit_draw},
    scramble::scramble,
};

/// Smallest perturbation factor applied per level.
const PERTURB_FLOOR: f64 = 0.9;
/// Width of the perturbation factor range, `[0.9, 1.1)`.
const PERTURB_SPAN: f64 = 0.2;

impl RmatGenerator {
    /// Synthesizes one primary edge, advancing the random stream.
    ///
    /// This bypasses the cursor: no twin is produced and the cursor's edge
    /// counter is not involved.
    ///
    /// # Errors
    /// Returns an [`InvariantViolation`] when invariant checks are enabled
    /// and a probability sum or vertex bound check fails.
    ///
    /// # Examples
    /// ```
    /// use rmat_core::RmatBuilder;
    ///
    /// let mut generator = RmatBuilder::new()
    ///     .with_vertex_scale(5)
    ///     .build()
    ///     .expect("configuration is valid");
    /// let edge = generator.synthesize_one_edge().expect("invariants hold");
    /// assert!(edge.max_vertex() <= 31);
    /// ```
    pub fn synthesize_one_edge(&mut self) -> Result<Edge, InvariantViolation> {
        self.synthesize_observed(|_| {})
    }

    /// Synthesizes one primary edge, reporting the working probabilities to
    /// `observer` after every recursion level.
    ///
    /// The observer sees the quadruple after perturbation and
    /// renormalisation, which is what the next level selects with.
    ///
    /// # Errors
    /// See [`RmatGenerator::synthesize_one_edge`].
    ///
    /// # Examples
    /// ```
    /// use rmat_core::RmatBuilder;
    ///
    /// let mut generator = RmatBuilder::new()
    ///     .with_vertex_scale(6)
    ///     .build()
    ///     .expect("configuration is valid");
    /// let mut levels = 0;
    /// generator
    ///     .synthesize_observed(|snapshot| {
    ///         assert!((snapshot.probabilities.sum() - 1.0).abs() < 1e-9);
    ///         levels += 1;
    ///     })
    ///     .expect("invariants hold");
    /// assert_eq!(levels, 6);
    /// ```
    pub fn synthesize_observed(
        &mut self,
        mut observer: impl FnMut(LevelSnapshot),
    ) -> Result<Edge, InvariantViolation> {
        let scale = self.config.vertex_scale;
        let checks = self.config.invariant_checks.is_enabled();
        let mut probabilities = self.config.probabilities;
        let mut source = 0_u64;
        let mut target = 0_u64;
        let mut step = initial_step(scale);

        for level in 0..scale {
            let (source_bit, target_bit) = probabilities.select(unit_draw(&mut self.rng)).bits();
            if source_bit {
                source |= step;
            }
            if target_bit {
                target |= step;
            }
            step >>= 1;

            perturb(&mut probabilities, &mut self.rng);
            if checks {
                check_probability_sum(level, &probabilities)?;
            }
            observer(LevelSnapshot {
                level,
                probabilities,
            });
        }

        if self.config.scramble {
            source = scramble(source, scale);
            target = scramble(target, scale);
        }
        if checks {
            let max = self.config.max_vertex_id();
            check_vertex(source, max)?;
            check_vertex(target, max)?;
        }
        Ok(Edge::new(source, target))
    }
}

/// Returns `2^(scale - 1)`, the bit chosen at the first level.
const fn initial_step(scale: u32) -> u64 {
    match scale.checked_sub(1) {
        Some(top_bit) => 1_u64 << top_bit,
        None => 0,
    }
}

/// Jitters `a`, `b` and `c`, then renormalises against the sum that still
/// includes the previous `d`, and finally recomputes `d` as the remainder.
#[expect(
    clippy::float_arithmetic,
    reason = "probability perturbation requires floating-point arithmetic"
)]
fn perturb(probabilities: &mut QuadrantProbabilities, rng: &mut RmatRng) {
    probabilities.a *= PERTURB_FLOOR + PERTURB_SPAN * unit_draw(rng);
    probabilities.b *= PERTURB_FLOOR + PERTURB_SPAN * unit_draw(rng);
    probabilities.c *= PERTURB_FLOOR + PERTURB_SPAN * unit_draw(rng);

    let sum = probabilities.sum();
    probabilities.a /= sum;
    probabilities.b /= sum;
    probabilities.c /= sum;
    probabilities.d = 1.0 - probabilities.a - probabilities.b - probabilities.c;
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::{fixture, rstest};

    use crate::{InvariantChecks, RmatBuilder, rng::seeded};

    #[fixture]
    fn generator() -> RmatGenerator {
        RmatBuilder::new()
            .with_seed(1234)
            .with_vertex_scale(12)
            .with_edge_count(64)
            .with_invariant_checks(InvariantChecks::Enabled)
            .build()
            .expect("configuration is valid")
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(3, 4)]
    #[case(64, 1 << 63)]
    fn initial_step_is_top_bit(#[case] scale: u32, #[case] expected: u64) {
        assert_eq!(initial_step(scale), expected);
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "test compares the probability sum against one"
    )]
    fn perturb_keeps_quadruple_normalised() {
        let mut rng = seeded(99);
        let mut probabilities = QuadrantProbabilities::GRAPH500;
        for _ in 0..1_000 {
            perturb(&mut probabilities, &mut rng);
            assert!((probabilities.sum() - 1.0).abs() < 1.0e-9);
            assert!(probabilities.a > 0.0 && probabilities.b > 0.0 && probabilities.c > 0.0);
        }
    }

    #[rstest]
    fn perturb_consumes_three_draws() {
        let mut perturbed = seeded(5);
        let mut reference = seeded(5);
        let mut probabilities = QuadrantProbabilities::UNIFORM;
        perturb(&mut probabilities, &mut perturbed);
        for _ in 0..3 {
            let _ = unit_draw(&mut reference);
        }
        assert_eq!(
            unit_draw(&mut perturbed).to_bits(),
            unit_draw(&mut reference).to_bits()
        );
    }

    #[rstest]
    fn one_edge_consumes_four_draws_per_level() {
        let mut generator = RmatBuilder::new()
            .with_seed(77)
            .with_vertex_scale(5)
            .build()
            .expect("configuration is valid");
        let mut reference = seeded(77);
        generator.synthesize_one_edge().expect("invariants hold");
        for _ in 0..(4 * 5) {
            let _ = unit_draw(&mut reference);
        }
        assert_eq!(
            unit_draw(&mut generator.rng).to_bits(),
            unit_draw(&mut reference).to_bits()
        );
    }

    #[rstest]
    fn observer_sees_every_level_in_order(mut generator: RmatGenerator) {
        let mut levels = Vec::new();
        generator
            .synthesize_observed(|snapshot| levels.push(snapshot.level))
            .expect("invariants hold");
        assert_eq!(levels, (0..12).collect::<Vec<_>>());
    }

    #[rstest]
    fn zero_scale_always_yields_the_origin() {
        let mut generator = RmatBuilder::new()
            .with_vertex_scale(0)
            .build()
            .expect("configuration is valid");
        for _ in 0..8 {
            assert_eq!(generator.synthesize_one_edge(), Ok(Edge::new(0, 0)));
        }
    }

    #[rstest]
    fn degenerate_probabilities_pin_the_quadrant() {
        let mut generator = RmatBuilder::new()
            .with_vertex_scale(10)
            .with_probabilities(QuadrantProbabilities::new(0.0, 0.0, 0.0, 1.0))
            .build()
            .expect("configuration is valid");
        assert_eq!(generator.synthesize_one_edge(), Ok(Edge::new(1023, 1023)));
    }

    #[rstest]
    fn full_width_scale_stays_in_range() {
        let mut generator = RmatBuilder::new()
            .with_vertex_scale(64)
            .with_scramble(true)
            .with_invariant_checks(InvariantChecks::Enabled)
            .build()
            .expect("configuration is valid");
        for _ in 0..32 {
            generator.synthesize_one_edge().expect("invariants hold");
        }
    }
}
