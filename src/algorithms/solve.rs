//! Back substitution for upper-triangular linear systems.
//!
//! ## Purpose
//!
//! This module solves `R·x = c` for upper-triangular `R`, the second half
//! of the QR-based least-squares solve (`c` is conventionally `Qᵗ·y`).
//!
//! ## Design notes
//!
//! * **Reverse order**: Unknowns are resolved from the last row upward,
//!   substituting already-known values.
//! * **No diagonal guard**: A zero diagonal entry divides through and
//!   produces NaN/Infinity, not an error. Diagonals are nonzero whenever
//!   `R` comes from a QR decomposition of a full-rank matrix.
//!
//! ## Invariants
//!
//! * For upper-triangular `R` with nonzero diagonal and `c = R·x`, the
//!   solve recovers `x` within rounding.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::matrix::Matrix;
use crate::primitives::errors::RegressionError;

// ============================================================================
// Back Substitution
// ============================================================================

/// Solve `R·x = c` for upper-triangular `n x n` `R` and `n x 1` column `c`.
///
/// Structural requirements: `r` square, `c` a column vector with matching
/// height. Entries of `r` below the diagonal are ignored.
pub fn back_substitute<T: Float>(
    r: &Matrix<T>,
    c: &Matrix<T>,
) -> Result<Matrix<T>, RegressionError> {
    if !r.is_square() {
        return Err(RegressionError::DimensionMismatch {
            operation: "back_substitute",
            lhs: (r.rows(), r.cols()),
            rhs: (r.rows(), r.rows()),
        });
    }
    if c.cols() != 1 || c.rows() != r.rows() {
        return Err(RegressionError::DimensionMismatch {
            operation: "back_substitute",
            lhs: (r.rows(), r.cols()),
            rhs: (c.rows(), c.cols()),
        });
    }

    let n = r.rows();
    let mut x = Matrix::zeros(n, 1);

    for i in (0..n).rev() {
        let mut sum = T::zero();
        for j in (i + 1)..n {
            sum = sum + r.get(i, j) * x.get(j, 0);
        }
        x.set(i, 0, (c.get(i, 0) - sum) / r.get(i, i));
    }

    Ok(x)
}
