// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::CONFIG_FILE;
pub use self::types::{Config, GraphSettings, PowerConfig, ITER_SPEED_RANGE, MAX_ITER_RANGE};

use std::path::Path;

use crate::error::{RankerError, Result};
use crate::graph::{compile, AdjacencyList, Damping, MatrixFormula, Network, NodeEntry};
use crate::share;

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `ranker.toml` from the current directory, or defaults.
    ///
    /// # Errors
    /// Fails when the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let dir = std::env::current_dir().unwrap_or_else(|_| ".".into());
        io::load_local(&dir)
    }

    /// # Errors
    /// Fails when the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// # Errors
    /// Fails on malformed TOML.
    pub fn parse_toml(content: &str) -> Result<Self> {
        io::parse_toml(content)
    }

    /// Editor rows from `nodes` followed by rows decoded from `graph`.
    #[must_use]
    pub fn entries(&self) -> Vec<NodeEntry> {
        let mut rows = self.nodes.clone();
        if let Some(text) = &self.graph {
            rows.extend(share::decode_graph(text));
        }
        rows
    }

    /// Compiles the graph and validates the `[power]` values.
    ///
    /// # Errors
    /// Fails if any setting is out of range.
    pub fn to_settings(&self) -> Result<GraphSettings> {
        let settings = GraphSettings {
            graph: compile(&self.entries()),
            matrix_formula: self.power.matrix_formula,
            max_iter: self.power.max_iter,
            iter_speed: self.power.iter_speed,
            damping: Damping::new(self.power.damping)?,
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl GraphSettings {
    #[must_use]
    pub fn new(graph: AdjacencyList) -> Self {
        Self {
            graph,
            ..Self::default()
        }
    }

    /// Rebuilds settings from the four flat values of a shared link: graph
    /// text, formula code, max iterations and iteration speed.
    ///
    /// # Errors
    /// Fails if a number does not parse or a value is out of range.
    pub fn from_share_params(graph: &str, mf: &str, mi: &str, is: &str) -> Result<Self> {
        let settings = Self {
            graph: compile(&share::decode_graph(graph)),
            matrix_formula: mf.parse::<MatrixFormula>()?,
            max_iter: parse_number("max_iter", mi)?,
            iter_speed: parse_number("iter_speed", is)?,
            damping: Damping::default(),
        };
        settings.validate()?;
        Ok(settings)
    }

    /// The graph in shared-link text form.
    #[must_use]
    pub fn share_graph(&self) -> String {
        share::encode_graph(&self.graph)
    }

    /// Checks `max_iter` and `iter_speed` against their accepted ranges.
    ///
    /// # Errors
    /// Returns [`RankerError::InvalidSetting`] naming the first bad value.
    pub fn validate(&self) -> Result<()> {
        if !MAX_ITER_RANGE.contains(&self.max_iter) {
            return Err(RankerError::InvalidSetting {
                name: "max_iter",
                value: self.max_iter.to_string(),
                reason: "must be between 10 and 100",
            });
        }
        if !ITER_SPEED_RANGE.contains(&self.iter_speed) {
            return Err(RankerError::InvalidSetting {
                name: "iter_speed",
                value: self.iter_speed.to_string(),
                reason: "must be between 0.1 and 3.0",
            });
        }
        Ok(())
    }

    /// A network over this graph with the configured formula and damping.
    #[must_use]
    pub fn network(&self) -> Network {
        Network::new(&self.graph, self.matrix_formula).with_damping(self.damping)
    }
}

fn parse_number<T: std::str::FromStr>(name: &'static str, raw: &str) -> Result<T> {
    raw.trim().parse().map_err(|_| RankerError::InvalidSetting {
        name,
        value: raw.to_string(),
        reason: "not a number",
    })
}
