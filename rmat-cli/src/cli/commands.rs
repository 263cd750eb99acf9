//! Command implementations and argument parsing for the `rmat` CLI.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rmat_core::{
    DEFAULT_SEED, EdgeCursor, QuadrantProbabilities, RmatBuilder, RmatError, RmatGenerator,
    VertexId,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "rmat", about = "Generate synthetic R-MAT graph edge lists.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate an edge list and write it as `source target` lines.
    Generate(GenerateCommand),
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Seed for the random stream.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of recursion levels; vertex ids lie in `[0, 2^scale)`.
    #[arg(long)]
    pub scale: u32,

    /// Number of primary edges to generate.
    #[arg(long)]
    pub edges: u64,

    /// Probability of the top-left quadrant.
    #[arg(long, default_value_t = QuadrantProbabilities::GRAPH500.a)]
    pub a: f64,

    /// Probability of the top-right quadrant.
    #[arg(long, default_value_t = QuadrantProbabilities::GRAPH500.b)]
    pub b: f64,

    /// Probability of the bottom-left quadrant.
    #[arg(long, default_value_t = QuadrantProbabilities::GRAPH500.c)]
    pub c: f64,

    /// Probability of the bottom-right quadrant.
    #[arg(long, default_value_t = QuadrantProbabilities::GRAPH500.d)]
    pub d: f64,

    /// Scramble vertex ids so hubs are not clustered at low ids.
    #[arg(long)]
    pub scramble: bool,

    /// Follow every edge with its reverse.
    #[arg(long)]
    pub undirected: bool,

    /// Salt the seed for parallel worker `N` so workers produce disjoint
    /// streams.
    #[arg(long, value_name = "N")]
    pub worker: Option<u64>,

    /// Write edges to this file instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Where generated edges are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// The process's standard output.
    Stdout,
    /// A file created (or truncated) at the given path.
    File(PathBuf),
}

impl Destination {
    fn from_output(output: Option<PathBuf>) -> Self {
        output.map_or(Self::Stdout, Self::File)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("<stdout>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Writing the edge list failed.
    #[error("failed to write edges to `{destination}`: {source}")]
    Io {
        /// Output that triggered the failure.
        destination: Destination,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Generator construction or synthesis failed.
    #[error(transparent)]
    Rmat(#[from] RmatError),
}

/// Errors raised by [`write_edges`].
#[derive(Debug, Error)]
pub enum EdgeWriteError {
    /// The writer rejected output.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The cursor reported an invariant failure.
    #[error(transparent)]
    Rmat(#[from] RmatError),
}

impl CliError {
    fn from_write(destination: Destination, err: EdgeWriteError) -> Self {
        match err {
            EdgeWriteError::Io(source) => Self::Io {
                destination,
                source,
            },
            EdgeWriteError::Rmat(rmat) => Self::Rmat(rmat),
        }
    }
}

/// Outcome of writing one edge sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Number of `source target` lines written, twins included.
    pub emitted_edges: u64,
    /// Largest vertex id written, or `None` for an empty sequence.
    pub max_observed_vertex_id: Option<VertexId>,
    /// Theoretical largest vertex id for the configured scale.
    pub max_vertex_id: VertexId,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the configuration is rejected, an invariant
/// check fails, or the output cannot be written.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use rmat_cli::cli::{Cli, Command, GenerateCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// let cli = Cli {
///     command: Command::Generate(GenerateCommand {
///         seed: 1234,
///         scale: 3,
///         edges: 5,
///         a: 0.57,
///         b: 0.19,
///         c: 0.19,
///         d: 0.05,
///         scramble: false,
///         undirected: false,
///         worker: None,
///         output: Some(file.path().to_path_buf()),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.emitted_edges, 5);
/// assert_eq!(std::fs::read_to_string(file.path())?, "1 0\n0 0\n0 4\n0 0\n1 0\n");
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<GenerationSummary, CliError> {
    match cli.command {
        Command::Generate(generate) => {
            Span::current().record("command", field::display("generate"));
            run_generate(generate)
        }
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(
        seed = command.seed,
        scale = command.scale,
        edges = command.edges,
        worker = field::Empty,
        destination = field::Empty,
    ),
)]
pub(super) fn run_generate(command: GenerateCommand) -> Result<GenerationSummary, CliError> {
    let mut generator = build_generator(&command)?;
    let destination = Destination::from_output(command.output);

    let span = Span::current();
    if let Some(worker) = command.worker {
        span.record("worker", worker);
    }
    span.record("destination", field::display(&destination));

    let summary = match &destination {
        Destination::Stdout => {
            let stdout = io::stdout();
            write_edges(generator.edges(), BufWriter::new(stdout.lock()))
        }
        Destination::File(path) => match File::create(path) {
            Ok(file) => write_edges(generator.edges(), BufWriter::new(file)),
            Err(source) => Err(EdgeWriteError::Io(source)),
        },
    }
    .map_err(|err| CliError::from_write(destination.clone(), err))?;

    info!(
        emitted_edges = summary.emitted_edges,
        max_observed_vertex_id = ?summary.max_observed_vertex_id,
        max_vertex_id = summary.max_vertex_id,
        "generation completed"
    );
    Ok(summary)
}

pub(super) fn build_generator(command: &GenerateCommand) -> Result<RmatGenerator, RmatError> {
    let base = RmatBuilder::new()
        .with_seed(command.seed)
        .with_vertex_scale(command.scale)
        .with_edge_count(command.edges)
        .with_probabilities(QuadrantProbabilities::new(
            command.a, command.b, command.c, command.d,
        ))
        .with_scramble(command.scramble)
        .with_undirected(command.undirected)
        .build_config()?;
    let config = match command.worker {
        Some(worker) => base.for_worker(worker),
        None => base,
    };
    Ok(RmatGenerator::from_config(config))
}

/// Drains `cursor` into `writer`, one `source target` line per edge, and
/// flushes the writer.
///
/// # Errors
/// Returns [`EdgeWriteError::Io`] if the writer fails and
/// [`EdgeWriteError::Rmat`] if an invariant check fails mid-sequence. Lines
/// written before the failure are left in place.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use rmat_cli::cli::write_edges;
/// # use rmat_core::RmatBuilder;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let mut generator = RmatBuilder::new()
///     .with_vertex_scale(4)
///     .with_edge_count(3)
///     .with_undirected(true)
///     .build()?;
/// let mut buffer = Vec::new();
/// let summary = write_edges(generator.edges(), &mut buffer)?;
/// assert_eq!(summary.emitted_edges, 6);
/// assert_eq!(String::from_utf8(buffer)?.lines().count(), 6);
/// # Ok(())
/// # }
/// ```
pub fn write_edges(
    mut cursor: EdgeCursor<'_>,
    mut writer: impl Write,
) -> Result<GenerationSummary, EdgeWriteError> {
    let mut summary = GenerationSummary {
        emitted_edges: 0,
        max_observed_vertex_id: None,
        max_vertex_id: cursor.max_vertex_id(),
    };
    while cursor.has_next() {
        let edge = cursor.advance()?;
        writeln!(writer, "{edge}")?;
        summary.emitted_edges += 1;
        let vertex = edge.max_vertex();
        summary.max_observed_vertex_id = Some(
            summary
                .max_observed_vertex_id
                .map_or(vertex, |max| max.max(vertex)),
        );
    }
    writer.flush()?;
    Ok(summary)
}
