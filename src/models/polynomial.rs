//! Polynomial regression over powers of one independent variable.
//!
//! ## Purpose
//!
//! This module fits `ŷ = β₀ + β₁·x + … + β_d·x^d` by least squares over a
//! design matrix whose columns are the powers of x from 1 to the requested
//! degree, after the intercept column of ones.
//!
//! ## Design notes
//!
//! * **QR solve path**: As in the multiple model, coefficients come from
//!   `β = backSubstitute(R, Qᵗ·y)` rather than from inverting `XᵗX`.
//! * **Degree 0**: A valid model; the design matrix is the lone intercept
//!   column and the fit is the mean of y.
//! * **Eager**: Coefficients are computed once at construction and cached;
//!   repeated accessor calls return bit-identical values.
//! * **High degrees**: Vandermonde-style design matrices become
//!   ill-conditioned quickly; the resulting garbage coefficients are
//!   computed through, not reported.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::qr::QrDecomposition;
use crate::algorithms::solve::back_substitute;
use crate::math::matrix::Matrix;
use crate::models::validate_points;
use crate::primitives::errors::RegressionError;
use crate::primitives::point::Point;

// ============================================================================
// PolynomialRegression
// ============================================================================

/// Least-squares polynomial regression of a fixed degree.
#[derive(Debug, Clone)]
pub struct PolynomialRegression<T: Float> {
    points: Vec<Point<T>>,
    degree: i32,
    coefficients: Matrix<T>,
}

impl<T: Float> PolynomialRegression<T> {
    /// Fit a polynomial of the given degree to the training points.
    ///
    /// Fails with `InvalidDegree` when `degree` is negative, and on an
    /// empty point list or non-finite training values.
    pub fn new(points: Vec<Point<T>>, degree: i32) -> Result<Self, RegressionError> {
        if degree < 0 {
            return Err(RegressionError::InvalidDegree { degree });
        }
        validate_points(&points)?;

        let design = Self::design_matrix(&points, degree);
        let response = Self::response_matrix(&points);

        let decomposition = QrDecomposition::new(design)?;
        let qt_y = decomposition.q().transpose().multiply(&response)?;
        let coefficients = back_substitute(decomposition.r(), &qt_y)?;

        Ok(Self {
            points,
            degree,
            coefficients,
        })
    }

    /// The fitted coefficient column vector `[β₀, β₁, …, β_d]`.
    pub fn coefficients(&self) -> &Matrix<T> {
        &self.coefficients
    }

    /// The polynomial degree of the model.
    #[inline]
    pub fn degree(&self) -> i32 {
        self.degree
    }

    /// The training points.
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    /// Predicted value for `x`: `Σ βᵢ·xⁱ`.
    pub fn predict(&self, x: T) -> T {
        let mut result = T::zero();
        for i in 0..self.coefficients.rows() {
            result = result + self.coefficients.get(i, 0) * x.powi(i as i32);
        }
        result
    }

    /// Root-mean-square error over the training set.
    ///
    /// Recomputed from the cached coefficients on each call.
    pub fn rmse(&self) -> T {
        self.rmse_on(&self.points)
    }

    /// Root-mean-square error over held-out points.
    pub fn rmse_on(&self, data: &[Point<T>]) -> T {
        let n = T::from(data.len()).unwrap();
        let sum = data.iter().fold(T::zero(), |acc, p| {
            let residual = self.predict(p.x()) - p.y();
            acc + residual * residual
        });
        (sum / n).sqrt()
    }

    // ========================================================================
    // Design and Response Matrices
    // ========================================================================

    /// Design matrix: intercept column of ones, then `x^j` for `j = 1..=degree`.
    fn design_matrix(points: &[Point<T>], degree: i32) -> Matrix<T> {
        let mut design = Matrix::zeros(points.len(), degree as usize + 1);
        for (i, point) in points.iter().enumerate() {
            design.set(i, 0, T::one());
            for j in 1..=degree {
                design.set(i, j as usize, point.x().powi(j));
            }
        }
        design
    }

    /// Response column vector: the y of each point.
    fn response_matrix(points: &[Point<T>]) -> Matrix<T> {
        let mut response = Matrix::zeros(points.len(), 1);
        for (i, point) in points.iter().enumerate() {
            response.set(i, 0, point.y());
        }
        response
    }
}
