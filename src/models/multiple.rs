//! Multiple linear regression (two or more independent variables).
//!
//! ## Purpose
//!
//! This module fits `ŷ = β₀ + β₁·x₁ + … + βₚ·xₚ` by least squares over a
//! design matrix with an intercept column of ones followed by the raw
//! independent variables.
//!
//! ## Design notes
//!
//! * **QR solve path**: Coefficients come from
//!   `β = backSubstitute(R, Qᵗ·y)` after QR-decomposing the design matrix.
//!   Forming `XᵗX` and inverting it would square the condition number; the
//!   naive inverse stays available in the matrix kernel for comparison but
//!   is not used here.
//! * **Fail before arithmetic**: Width homogeneity of the training points
//!   is checked at construction, before any matrix is built.
//! * **Eager**: Coefficients are computed once at construction and cached;
//!   repeated accessor calls return bit-identical values.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::qr::QrDecomposition;
use crate::algorithms::solve::back_substitute;
use crate::math::matrix::Matrix;
use crate::models::validate_multiple_points;
use crate::primitives::errors::RegressionError;
use crate::primitives::point::MultiplePoint;

// ============================================================================
// MultipleLinearRegression
// ============================================================================

/// Least-squares multiple linear regression over a QR-decomposed design matrix.
#[derive(Debug, Clone)]
pub struct MultipleLinearRegression<T: Float> {
    points: Vec<MultiplePoint<T>>,
    coefficients: Matrix<T>,
}

impl<T: Float> MultipleLinearRegression<T> {
    /// Fit the model to the training points.
    ///
    /// Fails with `InconsistentDimensions` when the points carry differing
    /// numbers of independent variables, before any matrix work occurs.
    pub fn new(points: Vec<MultiplePoint<T>>) -> Result<Self, RegressionError> {
        validate_multiple_points(&points)?;

        let design = Self::design_matrix(&points);
        let response = Self::response_matrix(&points);

        let decomposition = QrDecomposition::new(design)?;
        let qt_y = decomposition.q().transpose().multiply(&response)?;
        let coefficients = back_substitute(decomposition.r(), &qt_y)?;

        Ok(Self {
            points,
            coefficients,
        })
    }

    /// The fitted coefficient column vector `[β₀, β₁, …, βₚ]`.
    pub fn coefficients(&self) -> &Matrix<T> {
        &self.coefficients
    }

    /// The training points.
    pub fn points(&self) -> &[MultiplePoint<T>] {
        &self.points
    }

    /// Number of independent variables the model was trained with.
    #[inline]
    pub fn arity(&self) -> usize {
        self.points[0].arity()
    }

    /// Predicted value for the supplied independent values.
    ///
    /// Fails with `ArgumentCountMismatch` when the number of values differs
    /// from the training arity.
    pub fn predict(&self, independent_vars: &[T]) -> Result<T, RegressionError> {
        let expected = self.arity();
        if independent_vars.len() != expected {
            return Err(RegressionError::ArgumentCountMismatch {
                expected,
                got: independent_vars.len(),
            });
        }

        let mut result = self.coefficients.get(0, 0);
        for (i, &x) in independent_vars.iter().enumerate() {
            result = result + self.coefficients.get(i + 1, 0) * x;
        }
        Ok(result)
    }

    /// Root-mean-square error over the training set.
    ///
    /// Recomputed from the cached coefficients on each call.
    pub fn rmse(&self) -> T {
        let n = T::from(self.points.len()).unwrap();
        let sum = self.points.iter().fold(T::zero(), |acc, p| {
            // arity is validated at construction, predict cannot fail here
            let predicted = self.predict(p.xs()).unwrap_or_else(|_| T::nan());
            let residual = predicted - p.y();
            acc + residual * residual
        });
        (sum / n).sqrt()
    }

    // ========================================================================
    // Design and Response Matrices
    // ========================================================================

    /// Design matrix: intercept column of ones, then the raw xs per point.
    fn design_matrix(points: &[MultiplePoint<T>]) -> Matrix<T> {
        let mut design = Matrix::zeros(points.len(), points[0].arity() + 1);
        for (i, point) in points.iter().enumerate() {
            design.set(i, 0, T::one());
            for (j, &x) in point.xs().iter().enumerate() {
                design.set(i, j + 1, x);
            }
        }
        design
    }

    /// Response column vector: the y of each point.
    fn response_matrix(points: &[MultiplePoint<T>]) -> Matrix<T> {
        let mut response = Matrix::zeros(points.len(), 1);
        for (i, point) in points.iter().enumerate() {
            response.set(i, 0, point.y());
        }
        response
    }
}
