// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankerError {
    /// Two operands of a vector product disagree in length. This is never
    /// produced by valid input; it means a matrix and rank vector went out of sync.
    #[error("Dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("Node index {index} out of range (dim {dim})")]
    IndexOutOfRange { index: usize, dim: usize },

    #[error("Damping factor must lie strictly between 0 and 1, got {0}")]
    InvalidDamping(f64),

    #[error("Invalid setting `{name}` = {value}: {reason}")]
    InvalidSetting {
        name: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RankerError>;
