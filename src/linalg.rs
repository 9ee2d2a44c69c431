// src/linalg.rs
//! Dense square matrices and the vector products power iteration needs.

use serde::Serialize;

use crate::error::{RankerError, Result};

/// A dense, row-major square matrix.
///
/// Stochastic matrices are stored with `rows[j][i]` holding the probability
/// of moving from node `i` to node `j`, so columns (not rows) sum to one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Matrix {
    rows: Vec<Vec<f64>>,
}

impl Matrix {
    #[must_use]
    pub fn zeros(dim: usize) -> Self {
        Self {
            rows: vec![vec![0.0; dim]; dim],
        }
    }

    #[must_use]
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn dim(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Entry at `(row, col)`, or 0 outside the matrix.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(0.0)
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: f64) {
        if let Some(cell) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = value;
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    #[must_use]
    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows
    }

    #[must_use]
    pub fn column_sum(&self, col: usize) -> f64 {
        self.rows.iter().filter_map(|r| r.get(col)).sum()
    }

    /// Computes `M·v`, one dot product per row.
    ///
    /// # Errors
    /// Returns [`RankerError::DimensionMismatch`] if any row's length differs
    /// from `v`'s.
    pub fn mul_vec(&self, v: &[f64]) -> Result<Vec<f64>> {
        self.rows.iter().map(|row| dot(row, v)).collect()
    }
}

/// Plain dot product of two equal-length vectors.
///
/// # Errors
/// Returns [`RankerError::DimensionMismatch`] when the lengths differ.
pub fn dot(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(RankerError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}

/// Uniform probability vector of length `dim` (empty when `dim == 0`).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn uniform(dim: usize) -> Vec<f64> {
    if dim == 0 {
        return Vec::new();
    }
    vec![1.0 / dim as f64; dim]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_rejects_mismatched_lengths() {
        let err = dot(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert!(matches!(
            err,
            RankerError::DimensionMismatch { left: 2, right: 1 }
        ));
    }

    #[test]
    fn mul_vec_is_row_by_vector() {
        let m = Matrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]]);
        assert_eq!(m.mul_vec(&[0.25, 0.75]).unwrap(), vec![0.75, 0.25]);
    }

    #[test]
    fn mul_vec_surfaces_ragged_rows() {
        let m = Matrix::from_rows(vec![vec![1.0, 0.0], vec![1.0]]);
        assert!(m.mul_vec(&[0.5, 0.5]).is_err());
    }

    #[test]
    fn empty_matrix_times_empty_vector_is_empty() {
        let m = Matrix::zeros(0);
        assert!(m.mul_vec(&[]).unwrap().is_empty());
        assert!(uniform(0).is_empty());
    }

    #[test]
    fn out_of_range_reads_are_zero() {
        let m = Matrix::zeros(2);
        assert!(m.get(5, 0).abs() < f64::EPSILON);
        assert!(m.column_sum(9).abs() < f64::EPSILON);
    }
}
