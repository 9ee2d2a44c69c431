use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::graph::MatrixFormula;

#[derive(Parser)]
#[command(name = "ranker", version, about = "PageRank power iteration over link graphs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(long, short, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Where the graph and iteration settings come from. Flags override the
/// config file.
#[derive(Args, Debug, Clone, Default)]
pub struct GraphArgs {
    /// Graph text, e.g. "A:B,C;B:A;C:A"
    #[arg(long, short)]
    pub graph: Option<String>,
    /// Config file (defaults to ./ranker.toml when present)
    #[arg(long, short, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// simple, stochastic, google (or 0, 1, 2)
    #[arg(long, short)]
    pub formula: Option<MatrixFormula>,
    /// Iterations to run (10-100)
    #[arg(long)]
    pub max_iter: Option<usize>,
    /// Playback speed in iterations per second (0.1-3.0)
    #[arg(long)]
    pub speed: Option<f64>,
    /// Damping factor for the google formula, in (0, 1)
    #[arg(long)]
    pub damping: Option<f64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run max_iter steps and print the ranking
    Rank {
        #[command(flatten)]
        graph: GraphArgs,
        #[arg(long)]
        json: bool,
    },
    /// Timed playback, one line per step
    Play {
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Print the adjacency and stochastic matrices
    Matrices {
        #[command(flatten)]
        graph: GraphArgs,
        #[arg(long)]
        json: bool,
    },
    /// Rank, parents and children of one node
    Node {
        #[arg(value_name = "NAME")]
        name: String,
        #[command(flatten)]
        graph: GraphArgs,
        #[arg(long)]
        json: bool,
    },
}
