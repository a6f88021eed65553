//! Algorithm visualizer CLI.
//!
//! Provides the `algoviz` binary, a thin front end over `algoviz-trace`:
//! `sort` and `traverse` print a precomputed step trace as JSON, `generate`
//! prints a random connected graph. With `--play` the trace is replayed
//! through a [`Playback`] one JSON line per tick instead of printed at once.
//!
//! Logs go to stderr (filtered by `RUST_LOG`) so that stdout carries only
//! JSON.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::thread;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use algoviz_core::{CoreError, Graph, NodeId};
use algoviz_trace::{
    generate_from_config, traverse_checked, GeneratorConfig, Playback, PlaybackConfig,
    SortAlgorithm, TickOutcome, TraceError, TraversalAlgorithm,
};

/// Step-by-step traces of sorting and graph traversal algorithms.
#[derive(Parser)]
#[command(name = "algoviz", about = "Step-by-step traces of sorting and graph algorithms")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Trace a sorting algorithm over a list of numbers.
    Sort {
        /// bubble, selection, insertion, merge or quick.
        algorithm: String,

        /// Values to sort, space or comma separated. Non-finite values are dropped.
        #[arg(required = true, value_delimiter = ',', allow_negative_numbers = true)]
        values: Vec<String>,

        #[command(flatten)]
        playback: PlaybackArgs,
    },

    /// Trace a graph traversal over a loaded or generated graph.
    Traverse {
        /// bfs or dfs.
        algorithm: String,

        /// Id of the start node.
        #[arg(short, long, default_value = "0")]
        start: String,

        /// JSON file with `nodes` and `edges` (default: generate a graph).
        #[arg(short, long, conflicts_with_all = ["nodes", "density", "seed"])]
        graph: Option<PathBuf>,

        #[command(flatten)]
        generator: GeneratorArgs,

        #[command(flatten)]
        playback: PlaybackArgs,
    },

    /// Generate a random connected graph.
    Generate {
        #[command(flatten)]
        generator: GeneratorArgs,
    },
}

/// Random graph parameters. Unset flags fall back to `GeneratorConfig::default()`.
#[derive(Args)]
struct GeneratorArgs {
    /// Number of nodes (default: 10).
    #[arg(short, long)]
    nodes: Option<usize>,

    /// Fraction of all possible edges, between 0 and 1 (default: 0.3).
    #[arg(short, long)]
    density: Option<f64>,

    /// Seed for a reproducible graph.
    #[arg(long)]
    seed: Option<u64>,
}

impl GeneratorArgs {
    fn to_config(&self) -> GeneratorConfig {
        let defaults = GeneratorConfig::default();
        GeneratorConfig {
            node_count: self.nodes.unwrap_or(defaults.node_count),
            edge_density: self.density.unwrap_or(defaults.edge_density),
            seed: self.seed,
        }
    }
}

#[derive(Args)]
struct PlaybackArgs {
    /// Replay the trace one step per tick instead of printing it at once.
    #[arg(long)]
    play: bool,

    /// Delay between ticks in milliseconds.
    #[arg(long, default_value_t = 500, requires = "play")]
    speed: u64,
}

impl PlaybackArgs {
    fn to_config(&self) -> PlaybackConfig {
        PlaybackConfig {
            speed: Duration::from_millis(self.speed),
        }
    }
}

/// One line of `--play` output.
#[derive(Serialize)]
struct Frame<'a, T> {
    index: usize,
    total: usize,
    step: &'a T,
}

/// Output of `traverse` without `--play`.
#[derive(Serialize)]
struct TraversalOutput<'a, T> {
    graph: &'a Graph,
    steps: &'a [T],
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Sort {
            algorithm,
            values,
            playback,
        } => run_sort(&algorithm, &values, &playback),
        Commands::Traverse {
            algorithm,
            start,
            graph,
            generator,
            playback,
        } => run_traverse(&algorithm, &start, graph.as_deref(), &generator, &playback),
        Commands::Generate { generator } => run_generate(&generator),
    };
    process::exit(exit_code);
}

/// Execute the sort subcommand.
///
/// Returns exit code: 0 = success, 1 = invalid arguments, 3 = I/O error.
fn run_sort(algorithm: &str, raw_values: &[String], playback: &PlaybackArgs) -> i32 {
    let algorithm: SortAlgorithm = match algorithm.parse() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let values = match parse_values(raw_values) {
        Ok(v) => v,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return 1;
        }
    };

    tracing::info!(%algorithm, len = values.len(), "tracing sort");
    let steps = algorithm.run(&values);

    if playback.play {
        replay(&steps, playback.to_config())
    } else {
        print_pretty(&steps)
    }
}

/// Execute the traverse subcommand.
///
/// Returns exit code: 0 = success, 1 = invalid arguments,
/// 2 = invalid graph, 3 = I/O error.
fn run_traverse(
    algorithm: &str,
    start: &str,
    graph_path: Option<&Path>,
    generator: &GeneratorArgs,
    playback: &PlaybackArgs,
) -> i32 {
    let algorithm: TraversalAlgorithm = match algorithm.parse() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let graph = match graph_path {
        Some(path) => match load_graph(path) {
            Ok(g) => g,
            Err(code) => return code,
        },
        None => match generate_from_config(&generator.to_config()) {
            Ok(g) => g,
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        },
    };

    let start = NodeId::new(start);
    tracing::info!(
        %algorithm,
        %start,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "tracing traversal"
    );

    let steps = match traverse_checked(algorithm, &graph, &start) {
        Ok(steps) => steps,
        Err(TraceError::Core(CoreError::NodeNotFound { id })) => {
            eprintln!("Error: start node '{}' is not in the graph", id);
            return 1;
        }
        Err(TraceError::Core(e)) => {
            eprintln!("Invalid graph: {}", e);
            return 2;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    if playback.play {
        let code = print_line(&graph);
        if code != 0 {
            return code;
        }
        replay(&steps, playback.to_config())
    } else {
        print_pretty(&TraversalOutput {
            graph: &graph,
            steps: &steps,
        })
    }
}

/// Execute the generate subcommand.
///
/// Returns exit code: 0 = success, 1 = invalid arguments, 3 = I/O error.
fn run_generate(generator: &GeneratorArgs) -> i32 {
    let config = generator.to_config();
    match generate_from_config(&config) {
        Ok(graph) => {
            tracing::info!(
                nodes = graph.node_count(),
                edges = graph.edge_count(),
                seed = ?config.seed,
                "generated graph"
            );
            print_pretty(&graph)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

/// Reads and validates a graph file. The error is the exit code to use.
fn load_graph(path: &Path) -> Result<Graph, i32> {
    let json = fs::read_to_string(path).map_err(|e| {
        eprintln!("Error: failed to read '{}': {}", path.display(), e);
        3
    })?;

    let graph = Graph::from_json(&json).map_err(|e| {
        eprintln!("Invalid graph in '{}': {}", path.display(), e);
        2
    })?;

    graph.validate().map_err(|e| {
        eprintln!("Invalid graph in '{}': {}", path.display(), e);
        2
    })?;

    Ok(graph)
}

/// Replays `steps` through a [`Playback`], printing the first step at once
/// and then one line per tick.
fn replay<T: Serialize>(steps: &[T], config: PlaybackConfig) -> i32 {
    let total = steps.len();
    let Some(first) = steps.first() else {
        return 0;
    };

    let code = print_line(&Frame {
        index: 0,
        total,
        step: first,
    });
    if code != 0 {
        return code;
    }

    let mut playback = Playback::new(total, config);
    let mut pending = playback.play();
    while let Some(token) = pending.take() {
        thread::sleep(playback.speed());

        let cursor = match playback.tick(token) {
            TickOutcome::Advanced { cursor, next } => {
                pending = Some(next);
                cursor
            }
            TickOutcome::Completed { cursor } => cursor,
            TickOutcome::Stale => continue,
        };

        let code = print_line(&Frame {
            index: cursor,
            total,
            step: &steps[cursor],
        });
        if code != 0 {
            return code;
        }
    }

    tracing::debug!(steps = total, state = ?playback.state(), "playback finished");
    0
}

fn print_pretty<T: Serialize + ?Sized>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(json) => write_stdout(&json),
        Err(e) => {
            eprintln!("Error: failed to serialize output: {}", e);
            3
        }
    }
}

fn print_line<T: Serialize + ?Sized>(value: &T) -> i32 {
    match serde_json::to_string(value) {
        Ok(json) => write_stdout(&json),
        Err(e) => {
            eprintln!("Error: failed to serialize output: {}", e);
            3
        }
    }
}

fn write_stdout(line: &str) -> i32 {
    let mut out = io::stdout().lock();
    match writeln!(out, "{}", line).and_then(|_| out.flush()) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("I/O error: {}", e);
            3
        }
    }
}

/// Parse the raw value arguments as numbers.
///
/// Empty pieces (from `1,,2` or a trailing comma) are skipped. `nan` and
/// `inf` parse and are later dropped by the engines.
fn parse_values(raw: &[String]) -> Result<Vec<f64>, String> {
    raw.iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .map_err(|_| format!("invalid value '{}', expected a number", s))
        })
        .collect()
}
