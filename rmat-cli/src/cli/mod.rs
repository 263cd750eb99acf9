//! Command-line interface for generating R-MAT edge lists.
//!
//! The `generate` command builds a generator from flags and writes the edge
//! sequence as whitespace-separated `source target` lines.

mod commands;

pub use commands::{
    Cli, CliError, Command, Destination, EdgeWriteError, GenerateCommand, GenerationSummary,
    run_cli, write_edges,
};
