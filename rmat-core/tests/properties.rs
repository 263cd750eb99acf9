//! Property-based checks over arbitrary generator configurations.

use proptest::prelude::*;
use rmat_core::{Edge, InvariantChecks, QuadrantProbabilities, RmatBuilder, RmatGenerator};

/// Normalised quadruples built from four positive weights.
#[expect(
    clippy::float_arithmetic,
    reason = "weights are normalised into probabilities"
)]
fn probabilities_strategy() -> impl Strategy<Value = QuadrantProbabilities> {
    (1_u32..=100, 1_u32..=100, 1_u32..=100, 1_u32..=100).prop_map(|(a, b, c, d)| {
        let total = f64::from(a + b + c + d);
        let a = f64::from(a) / total;
        let b = f64::from(b) / total;
        let c = f64::from(c) / total;
        QuadrantProbabilities::new(a, b, c, 1.0 - a - b - c)
    })
}

#[derive(Clone, Debug)]
struct Scenario {
    seed: u64,
    vertex_scale: u32,
    edge_count: u64,
    probabilities: QuadrantProbabilities,
    scramble: bool,
    undirected: bool,
}

impl Scenario {
    fn generator(&self) -> RmatGenerator {
        RmatBuilder::new()
            .with_seed(self.seed)
            .with_vertex_scale(self.vertex_scale)
            .with_edge_count(self.edge_count)
            .with_probabilities(self.probabilities)
            .with_scramble(self.scramble)
            .with_undirected(self.undirected)
            .with_invariant_checks(InvariantChecks::Enabled)
            .build()
            .expect("scenario configuration must be valid")
    }

    fn edges(&self) -> Vec<Edge> {
        self.generator().edges().collect()
    }
}

fn scenario_strategy() -> impl Strategy<Value = Scenario> {
    (
        any::<u64>(),
        0_u32..=64,
        0_u64..=64,
        probabilities_strategy(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(seed, vertex_scale, edge_count, probabilities, scramble, undirected)| Scenario {
                seed,
                vertex_scale,
                edge_count,
                probabilities,
                scramble,
                undirected,
            },
        )
}

proptest! {
    #[test]
    fn vertices_never_exceed_the_id_space(scenario in scenario_strategy()) {
        let mut generator = scenario.generator();
        let max = generator.max_vertex_id();
        for edge in generator.edges() {
            prop_assert!(edge.source <= max && edge.target <= max, "{edge:?} exceeds {max}");
        }
    }

    #[test]
    fn sequences_are_deterministic(scenario in scenario_strategy()) {
        prop_assert_eq!(scenario.edges(), scenario.edges());
    }

    #[test]
    fn emitted_count_follows_direction(scenario in scenario_strategy()) {
        let expected = if scenario.undirected {
            scenario.edge_count * 2
        } else {
            scenario.edge_count
        };
        let mut generator = scenario.generator();
        prop_assert_eq!(generator.declared_size(), scenario.edge_count);
        let cursor = generator.edges();
        prop_assert_eq!(cursor.emitted_edge_count(), expected);
        prop_assert_eq!(u64::try_from(cursor.count()).expect("count fits u64"), expected);
    }

    #[test]
    fn twins_follow_their_primaries(scenario in scenario_strategy()) {
        prop_assume!(scenario.undirected);
        let edges = scenario.edges();
        for pair in edges.chunks_exact(2) {
            if let [primary, twin] = pair {
                prop_assert_eq!(*twin, primary.reversed());
            }
        }
    }

    #[test]
    fn directed_sequence_is_the_undirected_primaries(scenario in scenario_strategy()) {
        let directed = Scenario { undirected: false, ..scenario.clone() }.edges();
        let primaries: Vec<Edge> = Scenario { undirected: true, ..scenario }
            .edges()
            .into_iter()
            .step_by(2)
            .collect();
        prop_assert_eq!(directed, primaries);
    }
}
