//! QR decomposition via classical Gram-Schmidt orthogonalization.
//!
//! ## Purpose
//!
//! This module decomposes a full-column-rank `m x n` matrix into an
//! orthonormal-column matrix `Q` (`m x n`) and an upper-triangular matrix
//! `R` (`n x n`) such that `A ≈ Q·R`, the production solve path for the
//! least-squares regression models.
//!
//! ## Design notes
//!
//! * **Memoization**: Each unit vector `E_i` depends recursively on all
//!   `E_k` for `k < i`. Both the unit vectors and the raw projection
//!   residuals `U_i` are cached in index-keyed tables; without the caches
//!   the recomputation would be exponential in the column count. Cached
//!   vectors are returned by clone to preserve value semantics.
//! * **Full R**: `R[i][j]` is computed as the dot product `E_i · A_j` for
//!   every `(i, j)`. Below the diagonal these dots are zero up to rounding
//!   by the orthogonality of the construction; the lower triangle is not
//!   hard-zeroed.
//! * **Eager**: The decomposition is computed once in the constructor; the
//!   object is read-only afterward.
//!
//! ## Invariants
//!
//! * `Q` has orthonormal columns and `R` is upper-triangular (within
//!   rounding) whenever the input has linearly independent columns.
//! * `Q·R` reproduces the input within tolerance.
//!
//! ## Non-goals
//!
//! * Rank deficiency is a precondition violation, not a detected error: a
//!   zero-norm residual divides through and yields NaN/Infinity.
//! * No Householder or Givens variants; classical Gram-Schmidt only.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::matrix::Matrix;
use crate::primitives::errors::RegressionError;

// ============================================================================
// QrDecomposition
// ============================================================================

/// Eagerly computed Gram-Schmidt QR decomposition of a matrix.
#[derive(Debug, Clone)]
pub struct QrDecomposition<T: Float> {
    /// The decomposed input matrix.
    matrix: Matrix<T>,
    /// Orthonormal-column factor, `m x n`.
    q: Matrix<T>,
    /// Upper-triangular factor, `n x n`.
    r: Matrix<T>,
    /// Memoized unit vectors E_i, keyed by column index.
    e_cache: Vec<Option<Matrix<T>>>,
    /// Memoized raw projection residuals U_i, keyed by column index.
    u_cache: Vec<Option<Matrix<T>>>,
}

impl<T: Float> QrDecomposition<T> {
    /// Decompose `matrix` into `Q` and `R`.
    ///
    /// The input must have linearly independent columns; this precondition
    /// is not checked, and a violation surfaces as NaN/Infinity in the
    /// factors rather than as an error.
    pub fn new(matrix: Matrix<T>) -> Result<Self, RegressionError> {
        if matrix.rows() == 0 || matrix.cols() == 0 {
            return Err(RegressionError::EmptyInput);
        }

        let n = matrix.cols();
        let mut decomposition = Self {
            q: Matrix::zeros(matrix.rows(), n),
            r: Matrix::zeros(n, n),
            e_cache: vec![None; n],
            u_cache: vec![None; n],
            matrix,
        };
        decomposition.compute();
        Ok(decomposition)
    }

    /// The decomposed input matrix.
    pub fn matrix(&self) -> &Matrix<T> {
        &self.matrix
    }

    /// The orthonormal-column factor `Q`, shape `m x n`.
    pub fn q(&self) -> &Matrix<T> {
        &self.q
    }

    /// The upper-triangular factor `R`, shape `n x n`.
    pub fn r(&self) -> &Matrix<T> {
        &self.r
    }

    // ========================================================================
    // Decomposition
    // ========================================================================

    fn compute(&mut self) {
        let m = self.matrix.rows();
        let n = self.matrix.cols();

        // Q's columns are the orthonormalized unit vectors
        for i in 0..n {
            let e = self.e_vector(i);
            for row in 0..m {
                self.q.set(row, i, e.get(row, 0));
            }
        }

        // R[i][j] = E_i . A_j for every pair; below-diagonal dots are ~0
        for i in 0..n {
            let e = self.e_vector(i);
            for j in 0..n {
                let a = self.matrix.column_vector(j);
                self.r.set(i, j, dot(&e, &a));
            }
        }
    }

    /// The orthonormalized unit vector for column `index`, memoized.
    fn e_vector(&mut self, index: usize) -> Matrix<T> {
        if let Some(cached) = &self.e_cache[index] {
            return cached.clone();
        }

        let u = self.u_vector(index);
        let e = scale(&u, T::one() / norm(&u));
        self.e_cache[index] = Some(e.clone());
        e
    }

    /// The raw projection residual for column `index`, memoized.
    ///
    /// `U_i = A_i - sum_{k<i} (A_i . E_k) E_k`; `U_0` is column 0 itself.
    fn u_vector(&mut self, index: usize) -> Matrix<T> {
        if let Some(cached) = &self.u_cache[index] {
            return cached.clone();
        }

        let column = self.matrix.column_vector(index);
        if index == 0 {
            return column;
        }

        let mut residual = column.clone();
        for k in 0..index {
            let e = self.e_vector(k);
            let projection = scale(&e, dot(&column, &e));
            residual = subtract(&residual, &projection);
        }

        self.u_cache[index] = Some(residual.clone());
        residual
    }
}

// ============================================================================
// Column-Vector Helpers
// ============================================================================

/// Dot product of two equal-length column vectors.
fn dot<T: Float>(a: &Matrix<T>, b: &Matrix<T>) -> T {
    let mut sum = T::zero();
    for i in 0..a.rows() {
        sum = sum + a.get(i, 0) * b.get(i, 0);
    }
    sum
}

/// Euclidean norm of a column vector.
fn norm<T: Float>(v: &Matrix<T>) -> T {
    dot(v, v).sqrt()
}

/// A column vector scaled by a factor.
fn scale<T: Float>(v: &Matrix<T>, factor: T) -> Matrix<T> {
    let mut result = Matrix::zeros(v.rows(), 1);
    for i in 0..v.rows() {
        result.set(i, 0, v.get(i, 0) * factor);
    }
    result
}

/// Entry-wise difference of two equal-length column vectors.
fn subtract<T: Float>(a: &Matrix<T>, b: &Matrix<T>) -> Matrix<T> {
    let mut result = Matrix::zeros(a.rows(), 1);
    for i in 0..a.rows() {
        result.set(i, 0, a.get(i, 0) - b.get(i, 0));
    }
    result
}
