//! Simple linear regression (one independent variable).
//!
//! ## Purpose
//!
//! This module fits a line `y = a·x + b` to a list of points in closed
//! form: slope `a = covariance(x, y) / variance(x)` and intercept
//! `b = mean(y) − a·mean(x)`. No matrix kernel is involved.
//!
//! ## Design notes
//!
//! * **Eager**: Both coefficients are computed once at construction and
//!   cached for the model's lifetime; repeated accessor calls return
//!   bit-identical values.
//! * **RMSE on demand**: The training error is cheap and recomputed from
//!   the cached coefficients on each call, never stored.
//! * **Degenerate variance**: Identical x values give a zero variance and a
//!   NaN/Infinity slope; this is computed through, not reported.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::stats;
use crate::models::validate_points;
use crate::primitives::errors::RegressionError;
use crate::primitives::point::Point;

// ============================================================================
// SimpleLinearRegression
// ============================================================================

/// Closed-form simple linear regression `y = slope·x + intercept`.
#[derive(Debug, Clone)]
pub struct SimpleLinearRegression<T: Float> {
    points: Vec<Point<T>>,
    slope: T,
    intercept: T,
}

impl<T: Float> SimpleLinearRegression<T> {
    /// Fit a line to the training points.
    ///
    /// Fails on an empty point list or non-finite training values.
    pub fn new(points: Vec<Point<T>>) -> Result<Self, RegressionError> {
        validate_points(&points)?;

        let slope = Self::slope_of(&points);
        let intercept = Self::intercept_of(&points, slope);

        Ok(Self {
            points,
            slope,
            intercept,
        })
    }

    /// The slope coefficient `a` in `y = a·x + b`.
    #[inline]
    pub fn slope(&self) -> T {
        self.slope
    }

    /// The intercept coefficient `b` in `y = a·x + b`.
    #[inline]
    pub fn intercept(&self) -> T {
        self.intercept
    }

    /// The training points.
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    /// Predicted value for `x` under the fitted line.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        x * self.slope + self.intercept
    }

    /// Root-mean-square error over the training set.
    ///
    /// Recomputed from the cached coefficients on each call.
    pub fn rmse(&self) -> T {
        let n = T::from(self.points.len()).unwrap();
        let sum = self.points.iter().fold(T::zero(), |acc, p| {
            let residual = self.predict(p.x()) - p.y();
            acc + residual * residual
        });
        (sum / n).sqrt()
    }

    /// Closed-form slope for a point list: `covariance(x, y) / variance(x)`.
    pub fn slope_of(points: &[Point<T>]) -> T {
        stats::covariance_of_points(points) / stats::variance(&stats::xs_of(points))
    }

    /// Closed-form intercept for a point list and slope:
    /// `mean(y) − slope·mean(x)`.
    pub fn intercept_of(points: &[Point<T>], slope: T) -> T {
        stats::mean(&stats::ys_of(points)) - slope * stats::mean(&stats::xs_of(points))
    }
}
