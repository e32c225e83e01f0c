//! Brute-force polynomial degree selection against held-out data.
//!
//! ## Purpose
//!
//! This module scans candidate polynomial degrees, fits a model on the
//! training points for each, scores it on held-out test points, and
//! returns the degree with the minimum root-mean-square error.
//!
//! ## Design notes
//!
//! * **Parallelism**: With the `parallel` feature, candidates are evaluated
//!   with a rayon parallel map followed by a minimum reduction; each task
//!   is independent and no state is shared beyond the final reduction.
//!   Without the feature, a sequential scan produces identical results.
//! * **No partial results**: A construction failure for any candidate fails
//!   the whole search.
//! * **NaN ordering**: Ill-conditioned high-degree fits can score NaN; the
//!   reduction only replaces the running minimum on a strictly smaller
//!   finite comparison, so NaN candidates never displace it.
//!
//! ## Key concepts
//!
//! * **Candidate range**: Degrees `0 .. test.len() - 1`.
//! * **Min-reduction**: The `(degree, error)` pair with the smallest error
//!   wins; on ties the lowest degree is kept.
//!
//! ## Non-goals
//!
//! * This module does not perform cross-validation or data splitting; the
//!   caller supplies the train/test partition.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// Internal dependencies
use crate::models::polynomial::PolynomialRegression;
use crate::primitives::errors::RegressionError;
use crate::primitives::point::Point;

// ============================================================================
// Degree Search
// ============================================================================

/// Find the polynomial degree minimizing held-out RMSE.
///
/// Fits `PolynomialRegression` on `train` for every candidate degree in
/// `0 .. test.len() - 1` and scores each fit on `test`. Returns the best
/// `(degree, rmse)` pair.
#[cfg(feature = "parallel")]
pub fn find_best_degree<T>(
    train: &[Point<T>],
    test: &[Point<T>],
) -> Result<(i32, T), RegressionError>
where
    T: Float + Send + Sync,
{
    let candidates = candidate_range(train, test)?;

    let scored: Result<Vec<(i32, T)>, RegressionError> = candidates
        .into_par_iter()
        .map(|degree| evaluate_degree(train, test, degree))
        .collect();

    Ok(min_by_error(scored?))
}

/// Find the polynomial degree minimizing held-out RMSE (sequential).
#[cfg(not(feature = "parallel"))]
pub fn find_best_degree<T>(
    train: &[Point<T>],
    test: &[Point<T>],
) -> Result<(i32, T), RegressionError>
where
    T: Float,
{
    let candidates = candidate_range(train, test)?;

    let scored: Result<Vec<(i32, T)>, RegressionError> = candidates
        .map(|degree| evaluate_degree(train, test, degree))
        .collect();

    Ok(min_by_error(scored?))
}

// ============================================================================
// Internals
// ============================================================================

/// Candidate degrees `0 .. test.len() - 1`.
fn candidate_range<T: Float>(
    train: &[Point<T>],
    test: &[Point<T>],
) -> Result<core::ops::Range<i32>, RegressionError> {
    if train.is_empty() || test.len() < 2 {
        return Err(RegressionError::EmptyInput);
    }
    Ok(0..(test.len() - 1) as i32)
}

/// Fit one candidate degree on the training set and score it on the test set.
fn evaluate_degree<T: Float>(
    train: &[Point<T>],
    test: &[Point<T>],
    degree: i32,
) -> Result<(i32, T), RegressionError> {
    let model = PolynomialRegression::new(train.to_vec(), degree)?;
    Ok((degree, model.rmse_on(test)))
}

/// The `(degree, error)` pair with the smallest error; lowest degree on ties.
///
/// Only a strictly smaller error replaces the running minimum, which keeps
/// the first of tied candidates and ignores NaN scores.
fn min_by_error<T: Float>(scored: Vec<(i32, T)>) -> (i32, T) {
    let mut best = (0, T::nan());
    let mut have_best = false;

    for (degree, error) in scored {
        if error.is_nan() {
            continue;
        }
        if !have_best || error < best.1 {
            best = (degree, error);
            have_best = true;
        }
    }

    best
}
