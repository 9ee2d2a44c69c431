// src/config/io.rs
//! Reading `ranker.toml`.

use std::fs;
use std::path::Path;

use super::types::Config;
use crate::error::{RankerError, Result};

pub const CONFIG_FILE: &str = "ranker.toml";

/// Parses TOML text into a [`Config`]; missing tables take defaults.
///
/// # Errors
/// Returns [`RankerError::ConfigParse`] on malformed TOML or mistyped fields.
pub fn parse_toml(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}

/// Reads and parses the file at `path`.
///
/// # Errors
/// Returns [`RankerError::Io`] if the file cannot be read, or a parse error.
pub fn load_from(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|source| RankerError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    let config = parse_toml(&content)?;
    log::debug!(
        "loaded {} ({} node rows)",
        path.display(),
        config.nodes.len()
    );
    Ok(config)
}

/// Loads `ranker.toml` from `dir` if present, defaults otherwise.
///
/// # Errors
/// Fails only when the file exists but cannot be read or parsed.
pub fn load_local(dir: &Path) -> Result<Config> {
    let path = dir.join(CONFIG_FILE);
    if path.is_file() {
        load_from(&path)
    } else {
        Ok(Config::default())
    }
}
