// src/graph/formula.rs
//! Selection of the matrix the power iterator multiplies by.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{RankerError, Result};

/// Which column-stochastic formulation drives iteration.
///
/// Shared graph links carry the formula as its numeric code (`0`, `1`, `2`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatrixFormula {
    /// `r_j = Σ r_i / d_i`; dangling nodes leak probability.
    #[default]
    Simple,
    /// Dangling nodes redistribute uniformly.
    Stochastic,
    /// Stochastic plus teleportation with damping β.
    Google,
}

impl MatrixFormula {
    pub const ALL: [Self; 3] = [Self::Simple, Self::Stochastic, Self::Google];

    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Simple => 0,
            Self::Stochastic => 1,
            Self::Google => 2,
        }
    }

    /// # Errors
    /// Returns [`RankerError::InvalidSetting`] for codes other than 0, 1, 2.
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Self::Simple),
            1 => Ok(Self::Stochastic),
            2 => Ok(Self::Google),
            other => Err(RankerError::InvalidSetting {
                name: "matrix_formula",
                value: other.to_string(),
                reason: "expected 0, 1 or 2",
            }),
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Stochastic => "stochastic",
            Self::Google => "google",
        }
    }

    /// Human title of the matrix this formula selects.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Simple => "Semi Column-Stochastic",
            Self::Stochastic => "True Column-Stochastic",
            Self::Google => "Google's PageRank",
        }
    }
}

impl fmt::Display for MatrixFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MatrixFormula {
    type Err = RankerError;

    /// Accepts a formula name (case-insensitive) or its numeric code.
    fn from_str(s: &str) -> Result<Self> {
        let t = s.trim();
        if let Ok(code) = t.parse::<u8>() {
            return Self::from_code(code);
        }
        Self::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(t))
            .ok_or_else(|| RankerError::InvalidSetting {
                name: "matrix_formula",
                value: t.to_string(),
                reason: "expected simple, stochastic or google",
            })
    }
}
