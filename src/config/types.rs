// src/config/types.rs
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::graph::{AdjacencyList, Damping, MatrixFormula, NodeEntry, DEFAULT_DAMPING};

/// Accepted `max_iter` values.
pub const MAX_ITER_RANGE: RangeInclusive<usize> = 10..=100;
/// Accepted `iter_speed` values, in iterations per second.
pub const ITER_SPEED_RANGE: RangeInclusive<f64> = 0.1..=3.0;

/// The `[power]` table of `ranker.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerConfig {
    pub matrix_formula: MatrixFormula,
    pub max_iter: usize,
    pub iter_speed: f64,
    pub damping: f64,
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self {
            matrix_formula: MatrixFormula::Simple,
            max_iter: default_max_iter(),
            iter_speed: default_iter_speed(),
            damping: DEFAULT_DAMPING,
        }
    }
}

const fn default_max_iter() -> usize {
    10
}

const fn default_iter_speed() -> f64 {
    1.0
}

/// Contents of `ranker.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub power: PowerConfig,
    /// Editor rows, `{ name, children }`.
    #[serde(default)]
    pub nodes: Vec<NodeEntry>,
    /// Graph in shared-link text form; its rows follow `nodes`.
    #[serde(default)]
    pub graph: Option<String>,
}

/// Everything needed to (re)build a network and reset the power iterator.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphSettings {
    pub graph: AdjacencyList,
    pub matrix_formula: MatrixFormula,
    pub max_iter: usize,
    pub iter_speed: f64,
    pub damping: Damping,
}

impl Default for GraphSettings {
    fn default() -> Self {
        Self {
            graph: AdjacencyList::new(),
            matrix_formula: MatrixFormula::Simple,
            max_iter: default_max_iter(),
            iter_speed: default_iter_speed(),
            damping: Damping::default(),
        }
    }
}
