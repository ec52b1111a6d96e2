//! Row-major sample batches.
//!
//! The convention throughout the workspace is row = sample, column =
//! dimension: a batch of `n` points in `R^d` is an `n x d` matrix stored as
//! one contiguous `Vec<f64>` in row-major order. Batches are ephemeral
//! values with no identity beyond their contents.

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, LinError};

/// An `n x d` row-major matrix of `f64` samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Batch {
    /// Builds a batch from a flat row-major vector.
    ///
    /// Fails when the vector length does not equal `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, LinError> {
        if data.len() != rows * cols {
            return Err(LinError::Batch(
                ErrorInfo::new(
                    "flat-length-mismatch",
                    "flat data length does not match the requested shape",
                )
                .with_context("rows", rows.to_string())
                .with_context("cols", cols.to_string())
                .with_context("len", data.len().to_string()),
            ));
        }
        Ok(Self { rows, cols, data })
    }

    /// Builds a single-row batch from one point.
    pub fn from_row(row: &[f64]) -> Self {
        Self {
            rows: 1,
            cols: row.len(),
            data: row.to_vec(),
        }
    }

    /// Builds a batch by evaluating `fill(row, col)` at every position.
    pub fn from_fn(rows: usize, cols: usize, mut fill: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(fill(r, c));
            }
        }
        Self { rows, cols, data }
    }

    /// Builds a batch filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Number of rows (samples).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (dimensions).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the batch holds no entries.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Flat row-major view of all entries.
    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// One row as a slice.
    ///
    /// Panics when `index >= rows`.
    pub fn row(&self, index: usize) -> &[f64] {
        &self.data[index * self.cols..(index + 1) * self.cols]
    }

    /// Iterator over rows as slices.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[f64]> {
        (0..self.rows).map(move |r| self.row(r))
    }

    /// Elementwise negation.
    pub fn neg(&self) -> Batch {
        self.map(|v| -v)
    }

    /// Elementwise multiplication by a scalar.
    pub fn scale(&self, factor: f64) -> Batch {
        self.map(|v| v * factor)
    }

    /// Applies a function to every entry.
    pub fn map(&self, mut f: impl FnMut(f64) -> f64) -> Batch {
        Batch {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Elementwise sum of two batches of identical shape.
    pub fn add(&self, other: &Batch) -> Result<Batch, LinError> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Elementwise difference of two batches of identical shape.
    pub fn sub(&self, other: &Batch) -> Result<Batch, LinError> {
        self.zip_with(other, |a, b| a - b)
    }

    fn zip_with(&self, other: &Batch, combine: impl Fn(f64, f64) -> f64) -> Result<Batch, LinError> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(LinError::Batch(
                ErrorInfo::new(
                    "shape-mismatch",
                    "elementwise operation requires identical shapes",
                )
                .with_context("lhs", format!("{}x{}", self.rows, self.cols))
                .with_context("rhs", format!("{}x{}", other.rows, other.cols)),
            ));
        }
        Ok(Batch {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| combine(a, b))
                .collect(),
        })
    }
}

/// Euclidean norm of a point.
pub fn l2_norm(point: &[f64]) -> f64 {
    point.iter().map(|v| v * v).sum::<f64>().sqrt()
}
