//! Recursive MATrix (R-MAT) synthetic graph edge generator.
//!
//! R-MAT places each edge by descending the adjacency matrix one bit at a
//! time: at every level it picks one of four quadrants with probabilities
//! `(a, b, c, d)`, jitters those probabilities slightly, and recurses into the
//! chosen quadrant. Skewed parameters produce the heavy-tailed degree
//! distributions seen in real networks, which makes the output useful for
//! benchmarking graph algorithms and data pipelines.
//!
//! Output is fully determined by the configuration: the same seed and
//! parameters yield the same sequence on every platform. Sequences may
//! contain duplicate edges and self-loops.
//!
//! # Examples
//! ```
//! use rmat_core::{Edge, RmatBuilder};
//!
//! let mut generator = RmatBuilder::new()
//!     .with_seed(1234)
//!     .with_vertex_scale(3)
//!     .with_edge_count(5)
//!     .build()
//!     .expect("configuration is valid");
//! let edges: Vec<Edge> = generator.edges().collect();
//! assert_eq!(edges.len(), 5);
//! assert!(edges.iter().all(|edge| edge.max_vertex() <= 7));
//! ```

mod builder;
mod config;
mod cursor;
mod edge;
mod error;
mod generator;
mod invariants;
mod probabilities;
mod rng;
mod scramble;
mod synthesizer;

pub use crate::{
    builder::RmatBuilder,
    config::{DEFAULT_SEED, MAX_VERTEX_SCALE, RmatConfig},
    cursor::EdgeCursor,
    edge::{Edge, VertexId},
    error::{InvariantViolation, Result, RmatError, RmatErrorCode},
    generator::RmatGenerator,
    invariants::{InvariantChecks, LevelSnapshot, PROBABILITY_SUM_TOLERANCE},
    probabilities::{CONFIG_SUM_TOLERANCE, Quadrant, QuadrantProbabilities},
    rng::mix_worker_seed,
    scramble::{id_mask, scramble},
};
