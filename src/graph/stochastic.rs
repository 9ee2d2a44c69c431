// src/graph/stochastic.rs
//! Column-stochastic matrix formulations.
//!
//! All three builders address entries as `M[j][i]`: row `j` is the
//! destination, column `i` the source, so that one power-iteration step is
//! `r' = M·r`.

use serde::Serialize;

use crate::error::{RankerError, Result};
use crate::linalg::Matrix;

/// Damping factor used when none is configured.
pub const DEFAULT_DAMPING: f64 = 0.8;

/// Probability β of following a real link rather than teleporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Damping(f64);

impl Damping {
    /// Validates β against the open interval (0, 1).
    ///
    /// # Errors
    /// Returns [`RankerError::InvalidDamping`] for values outside (0, 1),
    /// including NaN.
    pub fn new(beta: f64) -> Result<Self> {
        if beta > 0.0 && beta < 1.0 {
            Ok(Self(beta))
        } else {
            Err(RankerError::InvalidDamping(beta))
        }
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Damping {
    fn default() -> Self {
        Self(DEFAULT_DAMPING)
    }
}

impl TryFrom<f64> for Damping {
    type Error = RankerError;

    fn try_from(beta: f64) -> Result<Self> {
        Self::new(beta)
    }
}

/// Semi column-stochastic matrix: `adj[i][j] / d(i)`, with dangling columns
/// left at zero.
#[must_use]
pub fn simple(adjacency: &[Vec<u8>], out_degrees: &[usize]) -> Matrix {
    build(adjacency, out_degrees, |_| 0.0)
}

/// True column-stochastic matrix: dangling columns spread `1/dim` over every
/// node, so every column sums to one.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn stochastic(adjacency: &[Vec<u8>], out_degrees: &[usize]) -> Matrix {
    build(adjacency, out_degrees, |dim| 1.0 / dim as f64)
}

/// Damped ("Google") matrix: `β·S[j][i] + (1-β)/dim` over the true
/// column-stochastic matrix `S`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn google(stochastic: &Matrix, beta: Damping) -> Matrix {
    let dim = stochastic.dim();
    let b = beta.value();
    let teleport = if dim == 0 { 0.0 } else { (1.0 - b) / dim as f64 };

    let rows = stochastic
        .rows()
        .iter()
        .map(|row| row.iter().map(|s| b * s + teleport).collect())
        .collect();

    Matrix::from_rows(rows)
}

#[allow(clippy::cast_precision_loss)]
fn build(adjacency: &[Vec<u8>], out_degrees: &[usize], dangling: impl Fn(usize) -> f64) -> Matrix {
    let dim = adjacency.len();
    let mut matrix = Matrix::zeros(dim);

    for (i, row) in adjacency.iter().enumerate() {
        let degree = out_degrees.get(i).copied().unwrap_or(0);

        for j in 0..dim {
            let value = if degree > 0 {
                f64::from(row.get(j).copied().unwrap_or(0)) / degree as f64
            } else {
                dangling(dim)
            };
            matrix.set(j, i, value);
        }
    }

    matrix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damping_rejects_bounds_and_nan() {
        assert!(Damping::new(0.0).is_err());
        assert!(Damping::new(1.0).is_err());
        assert!(Damping::new(f64::NAN).is_err());
        assert!(Damping::new(0.85).is_ok());
    }

    #[test]
    fn default_damping_is_point_eight() {
        assert!((Damping::default().value() - 0.8).abs() < f64::EPSILON);
    }
}
