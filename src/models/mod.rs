//! Layer 4: Models
//!
//! # Purpose
//!
//! This layer provides the regression estimators built on the math and
//! algorithm layers:
//! - Simple linear regression (closed-form slope/intercept)
//! - Multiple linear regression (QR-based least squares)
//! - Polynomial regression (QR-based least squares over powers of x)
//!
//! All models are constructed with their training data, compute their
//! coefficients once at construction, and are read-only afterward.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: Data
//!   ↓
//! Layer 5: Evaluation
//!   ↓
//! Layer 4: Models ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RegressionError;
use crate::primitives::point::{MultiplePoint, Point};

/// Simple linear regression.
pub mod simple;

/// Multiple linear regression.
pub mod multiple;

/// Polynomial regression.
pub mod polynomial;

// ============================================================================
// Shared Training-Data Validation
// ============================================================================

/// Validate a simple/polynomial training set: non-empty, all values finite.
///
/// Checks are ordered from cheap to expensive and fail at the first
/// violation.
pub(crate) fn validate_points<T: Float>(points: &[Point<T>]) -> Result<(), RegressionError> {
    if points.is_empty() {
        return Err(RegressionError::EmptyInput);
    }

    for (i, point) in points.iter().enumerate() {
        if !point.x().is_finite() || !point.y().is_finite() {
            return Err(RegressionError::InvalidNumericValue(format!(
                "point[{}]=({}, {})",
                i,
                point.x().to_f64().unwrap_or(f64::NAN),
                point.y().to_f64().unwrap_or(f64::NAN)
            )));
        }
    }

    Ok(())
}

/// Validate a multiple-regression training set: non-empty, homogeneous
/// widths, all values finite.
///
/// Width homogeneity is checked before the finite scan so that an
/// `InconsistentDimensions` violation is reported before any other work.
pub(crate) fn validate_multiple_points<T: Float>(
    points: &[MultiplePoint<T>],
) -> Result<(), RegressionError> {
    if points.is_empty() {
        return Err(RegressionError::EmptyInput);
    }

    let expected = points[0].arity();
    for (i, point) in points.iter().enumerate() {
        if point.arity() != expected {
            return Err(RegressionError::InconsistentDimensions {
                index: i,
                expected,
                got: point.arity(),
            });
        }
    }

    for (i, point) in points.iter().enumerate() {
        let finite = point.y().is_finite() && point.xs().iter().all(|x| x.is_finite());
        if !finite {
            return Err(RegressionError::InvalidNumericValue(format!(
                "point[{}] contains a non-finite value",
                i
            )));
        }
    }

    Ok(())
}
