// src/cli/handlers.rs
//! Command handlers.

use anyhow::{Context, Result};
use serde::Serialize;
use std::thread;
use std::time::Duration;

use super::args::GraphArgs;
use crate::config::{Config, GraphSettings};
use crate::exit::RankerExit;
use crate::graph::{Network, RankVector};
use crate::power::{IntervalScheduler, PowerIterator, Progress};
use crate::reporting;

/// Longest the playback loop sleeps between polls.
const POLL_CEILING: Duration = Duration::from_millis(50);

#[derive(Serialize)]
struct RankReport {
    formula: String,
    progress: Progress,
    ranks: RankVector,
}

/// Merges the config file (explicit or `./ranker.toml`) with flag overrides.
///
/// # Errors
/// Fails if the config cannot be loaded or a resulting value is out of range.
pub fn resolve_settings(args: &GraphArgs) -> Result<GraphSettings> {
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => Config::load()?,
    };

    if let Some(graph) = &args.graph {
        config.nodes.clear();
        config.graph = Some(graph.clone());
    }
    if let Some(formula) = args.formula {
        config.power.matrix_formula = formula;
    }
    if let Some(max_iter) = args.max_iter {
        config.power.max_iter = max_iter;
    }
    if let Some(speed) = args.speed {
        config.power.iter_speed = speed;
    }
    if let Some(damping) = args.damping {
        config.power.damping = damping;
    }

    Ok(config.to_settings()?)
}

fn prepare(args: &GraphArgs) -> Result<(GraphSettings, Network)> {
    let settings = resolve_settings(args)?;
    let network = settings.network();
    if network.dim() == 0 {
        log::warn!("graph is empty; nothing to rank");
    }
    Ok((settings, network))
}

/// Runs `max_iter` steps and prints the ranking.
///
/// # Errors
/// Fails on bad input or a numeric invariant violation.
pub fn handle_rank(args: &GraphArgs, json: bool) -> Result<RankerExit> {
    let (settings, mut network) = prepare(args)?;
    let mut iterator = PowerIterator::with_network(
        &mut network,
        settings.max_iter,
        settings.iter_speed,
        IntervalScheduler::default(),
    );
    iterator.iterate(settings.max_iter)?;

    let ranks = iterator.rank_vector();
    if json {
        reporting::print_json(&RankReport {
            formula: settings.matrix_formula.to_string(),
            progress: iterator.progress(),
            ranks,
        })?;
    } else {
        reporting::print_ranking(settings.matrix_formula.label(), &iterator.progress(), &ranks);
    }
    Ok(RankerExit::Success)
}

/// Plays the iteration back in real time at the configured speed.
///
/// # Errors
/// Fails on bad input or a numeric invariant violation.
pub fn handle_play(args: &GraphArgs) -> Result<RankerExit> {
    let (settings, mut network) = prepare(args)?;
    let max_iter = settings.max_iter;
    let mut iterator = PowerIterator::with_network(
        &mut network,
        max_iter,
        settings.iter_speed,
        IntervalScheduler::default(),
    );

    reporting::print_step(0, max_iter, &iterator.rank_vector());

    let mut step = 0;
    iterator.run(move |ranks| {
        step += 1;
        reporting::print_step(step, max_iter, ranks);
    });

    while !iterator.is_paused() {
        iterator.pump()?;
        let wait = iterator.next_tick_in().unwrap_or_default().min(POLL_CEILING);
        thread::sleep(wait);
    }

    reporting::print_ranking(
        settings.matrix_formula.label(),
        &iterator.progress(),
        &iterator.rank_vector(),
    );
    Ok(RankerExit::Success)
}

/// Prints every display matrix.
///
/// # Errors
/// Fails on bad input.
pub fn handle_matrices(args: &GraphArgs, json: bool) -> Result<RankerExit> {
    let (_, mut network) = prepare(args)?;
    let set = network.matrices();
    if json {
        reporting::print_json(&set)?;
    } else {
        reporting::print_matrices(&set);
    }
    Ok(RankerExit::Success)
}

/// Prints the rank after `max_iter` steps plus parents and children of `name`.
///
/// # Errors
/// Fails if `name` is not in the graph.
pub fn handle_node(name: &str, args: &GraphArgs, json: bool) -> Result<RankerExit> {
    let (settings, mut network) = prepare(args)?;
    let mut iterator = PowerIterator::with_network(
        &mut network,
        settings.max_iter,
        settings.iter_speed,
        IntervalScheduler::default(),
    );
    iterator.iterate(settings.max_iter)?;

    let info = network.node_info(name, &iterator.rank_vector())?;
    if json {
        reporting::print_json(&info)?;
    } else {
        reporting::print_node_info(&info);
    }
    Ok(RankerExit::Success)
}
