// src/cli/dispatch.rs
//! Routes a parsed subcommand to its handler.

use super::args::Commands;
use super::handlers::{handle_matrices, handle_node, handle_play, handle_rank};
use crate::exit::RankerExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands) -> Result<RankerExit> {
    match command {
        Commands::Rank { graph, json } => handle_rank(&graph, json),
        Commands::Play { graph } => handle_play(&graph),
        Commands::Matrices { graph, json } => handle_matrices(&graph, json),
        Commands::Node { name, graph, json } => handle_node(&name, &graph, json),
    }
}
