//! Summary statistics for simple linear regression.
//!
//! ## Purpose
//!
//! This module provides the mean, variance, and covariance used by the
//! closed-form simple regression estimator, plus helpers to split a point
//! list into its x and y sequences.
//!
//! ## Design notes
//!
//! * **Unnormalized sums**: `variance` and `covariance` return the sum of
//!   (co)deviations rather than their average. The `1/n` factor cancels in
//!   the slope ratio `covariance / variance`, and the crate's fixtures
//!   (variance 10.0 for `[1..5]`, covariance 8.0) assume this convention.
//! * **No guards**: Empty input divides by zero and computes through; the
//!   model constructors validate before calling in here.
//!
//! ## Non-goals
//!
//! * This module does not provide robust (outlier-resistant) statistics.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::point::Point;

// ============================================================================
// Moments
// ============================================================================

/// Arithmetic mean of a sequence.
#[inline]
pub fn mean<T: Float>(values: &[T]) -> T {
    let sum = values.iter().fold(T::zero(), |acc, &v| acc + v);
    sum / T::from(values.len()).unwrap()
}

/// Sum of squared deviations from the mean (unnormalized variance).
pub fn variance<T: Float>(values: &[T]) -> T {
    let m = mean(values);
    values
        .iter()
        .fold(T::zero(), |acc, &v| acc + (v - m) * (v - m))
}

/// Sum of cross deviations from the means (unnormalized covariance).
pub fn covariance<T: Float>(xs: &[T], ys: &[T]) -> T {
    let mean_x = mean(xs);
    let mean_y = mean(ys);

    let mut sum = T::zero();
    for (&x, &y) in xs.iter().zip(ys.iter()) {
        sum = sum + (x - mean_x) * (y - mean_y);
    }
    sum
}

/// Unnormalized covariance of a point list's x and y values.
pub fn covariance_of_points<T: Float>(points: &[Point<T>]) -> T {
    covariance(&xs_of(points), &ys_of(points))
}

// ============================================================================
// Point Helpers
// ============================================================================

/// The x values of a point list, in order.
pub fn xs_of<T: Float>(points: &[Point<T>]) -> Vec<T> {
    points.iter().map(|p| p.x()).collect()
}

/// The y values of a point list, in order.
pub fn ys_of<T: Float>(points: &[Point<T>]) -> Vec<T> {
    points.iter().map(|p| p.y()).collect()
}
