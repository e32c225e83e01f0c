//! Dense matrix kernel for least-squares regression.
//!
//! ## Purpose
//!
//! This module provides the rectangular dense matrix type underlying every
//! regression model in the crate: multiply, transpose, row operations,
//! tolerance comparison, and Gauss-Jordan inversion.
//!
//! ## Design notes
//!
//! * **Value semantics**: Every operation returns a freshly allocated
//!   matrix; caller-owned inputs are never mutated. The only in-place state
//!   is the augmented working matrix inside `inverse`.
//! * **Naive summation**: The multiply inner product accumulates in natural
//!   left-to-right order, with no pairwise or compensated summation, so
//!   results are reproducible against the crate's numeric fixtures.
//! * **No pivoting**: Gauss-Jordan elimination uses the diagonal entries as
//!   pivots directly. A zero or near-zero pivot divides through and yields
//!   NaN/Infinity, not an error.
//!
//! ## Key concepts
//!
//! * **Row-major storage**: Entries are stored in a flat buffer, row by row.
//! * **Column vector**: A matrix with a single column; used for responses,
//!   projection residuals, and solved coefficients.
//!
//! ## Invariants
//!
//! * Every row has identical length (`data.len() == rows * cols`).
//! * Shape errors are raised before any arithmetic is performed.
//!
//! ## Non-goals
//!
//! * This module does not detect singular or ill-conditioned input.
//! * This module does not provide sparse storage or SIMD acceleration.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use core::ops::Index;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RegressionError;

/// Default absolute tolerance for [`Matrix::approx_eq`].
pub const DEFAULT_EPSILON: f64 = 1e-5;

// ============================================================================
// Matrix
// ============================================================================

/// A dense `rows x cols` matrix of floating-point values, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T: Float> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Float> Matrix<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Build a matrix from nested rows.
    ///
    /// Fails with `EmptyInput` when no rows or no columns are supplied, and
    /// with `RaggedRows` when the rows have differing lengths.
    pub fn from_rows(rows: &[&[T]]) -> Result<Self, RegressionError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(RegressionError::EmptyInput);
        }

        let cols = rows[0].len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(RegressionError::RaggedRows {
                    row: i,
                    expected: cols,
                    got: row.len(),
                });
            }
        }

        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            data.extend_from_slice(row);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Build a zero-filled matrix of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Build the `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut result = Self::zeros(n, n);
        for i in 0..n {
            result.data[i * n + i] = T::one();
        }
        result
    }

    /// Build an `n x 1` column vector from a slice.
    pub fn column(values: &[T]) -> Result<Self, RegressionError> {
        if values.is_empty() {
            return Err(RegressionError::EmptyInput);
        }
        Ok(Self {
            rows: values.len(),
            cols: 1,
            data: values.to_vec(),
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// The entry at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// The entries of one row as a slice.
    #[inline]
    pub fn row(&self, row: usize) -> &[T] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Extract column `col` as an `rows x 1` column vector.
    pub fn column_vector(&self, col: usize) -> Matrix<T> {
        let mut data = Vec::with_capacity(self.rows);
        for i in 0..self.rows {
            data.push(self.get(i, col));
        }
        Matrix {
            rows: self.rows,
            cols: 1,
            data,
        }
    }

    /// Overwrite the entry at `(row, col)`.
    ///
    /// Crate-internal: public kernel operations never mutate their inputs;
    /// this exists for populating freshly allocated working matrices.
    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.cols + col] = value;
    }

    fn check_row(&self, index: usize) -> Result<(), RegressionError> {
        if index >= self.rows {
            return Err(RegressionError::RowOutOfBounds {
                index,
                rows: self.rows,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Kernel Operations
    // ========================================================================

    /// Standard triple-loop matrix product.
    ///
    /// Requires `self.cols == other.rows`; the result has shape
    /// `self.rows x other.cols`. Each entry is the dot product of the
    /// corresponding row and column, summed left to right.
    pub fn multiply(&self, other: &Matrix<T>) -> Result<Matrix<T>, RegressionError> {
        if self.cols != other.rows {
            return Err(RegressionError::DimensionMismatch {
                operation: "multiply",
                lhs: (self.rows, self.cols),
                rhs: (other.rows, other.cols),
            });
        }

        let mut result = Matrix::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = T::zero();
                for k in 0..self.cols {
                    sum = sum + self.get(i, k) * other.get(k, j);
                }
                result.set(i, j, sum);
            }
        }

        Ok(result)
    }

    /// The transpose, with shape `cols x rows`.
    pub fn transpose(&self) -> Matrix<T> {
        let mut result = Matrix::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                result.set(j, i, self.get(i, j));
            }
        }
        result
    }

    /// Copy of `self` with `result[target] = self[target] - factor * self[source]`.
    ///
    /// All other rows are unchanged. Requires `target != source` and both
    /// indices in range.
    pub fn subtract_rows(
        &self,
        target: usize,
        source: usize,
        factor: T,
    ) -> Result<Matrix<T>, RegressionError> {
        self.check_row(target)?;
        self.check_row(source)?;
        if target == source {
            return Err(RegressionError::SameRow { index: target });
        }

        let mut result = self.clone();
        for j in 0..self.cols {
            let value = self.get(target, j) - factor * self.get(source, j);
            result.set(target, j, value);
        }
        Ok(result)
    }

    /// Copy of `self` with row `row` scaled by `factor`.
    pub fn multiply_row(&self, row: usize, factor: T) -> Result<Matrix<T>, RegressionError> {
        self.check_row(row)?;

        let mut result = self.clone();
        for j in 0..self.cols {
            result.set(row, j, factor * self.get(row, j));
        }
        Ok(result)
    }

    /// Entry-wise comparison within an absolute tolerance.
    ///
    /// Requires identical shapes. True iff every pair of entries differs by
    /// at most `epsilon` in absolute value.
    pub fn approx_eq(&self, other: &Matrix<T>, epsilon: T) -> Result<bool, RegressionError> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(RegressionError::DimensionMismatch {
                operation: "approx_eq",
                lhs: (self.rows, self.cols),
                rhs: (other.rows, other.cols),
            });
        }

        for (a, b) in self.data.iter().zip(other.data.iter()) {
            if (*a - *b).abs() > epsilon {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Gauss-Jordan inverse of a square matrix.
    ///
    /// Elimination runs on an augmented `n x 2n` working matrix `[A | I]`:
    /// forward elimination below each pivot, pivot-row normalization, then
    /// back elimination above the diagonal; the right block is the inverse.
    ///
    /// No pivoting is performed. A singular input is not detected: a zero
    /// pivot divides through and produces NaN/Infinity entries.
    pub fn inverse(&self) -> Result<Matrix<T>, RegressionError> {
        if !self.is_square() {
            return Err(RegressionError::DimensionMismatch {
                operation: "inverse",
                lhs: (self.rows, self.cols),
                rhs: (self.rows, self.rows),
            });
        }

        let n = self.rows;

        if n == 1 {
            let mut result = Matrix::zeros(1, 1);
            result.set(0, 0, T::one() / self.get(0, 0));
            return Ok(result);
        }

        // Augmented working matrix [A | I]
        let mut working = Matrix::zeros(n, 2 * n);
        for i in 0..n {
            for j in 0..n {
                working.set(i, j, self.get(i, j));
            }
            working.set(i, n + i, T::one());
        }

        // Forward elimination: clear below each pivot
        for i in 0..n {
            for j in (i + 1)..n {
                let factor = working.get(j, i) / working.get(i, i);
                working = working.subtract_rows(j, i, factor)?;
            }
        }

        // Normalize pivot rows to a unit diagonal
        for i in 0..n {
            let pivot = working.get(i, i);
            working = working.multiply_row(i, T::one() / pivot)?;
        }

        // Back elimination: clear above the diagonal
        for i in 0..n {
            for j in (i + 1)..n {
                let factor = working.get(i, j);
                working = working.subtract_rows(i, j, factor)?;
            }
        }

        // Right block of the working matrix is the inverse
        let mut result = Matrix::zeros(n, n);
        for i in 0..n {
            for j in 0..n {
                result.set(i, j, working.get(i, n + j));
            }
        }
        Ok(result)
    }
}

impl<T: Float> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row * self.cols + col]
    }
}
