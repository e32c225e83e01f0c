//! # linreg-rs — Closed-Form Least-Squares Regression for Rust
//!
//! A small, self-contained implementation of simple, multiple, and
//! polynomial regression, fitted in closed form on top of a dense
//! linear-algebra kernel: matrix multiply/transpose, Gauss-Jordan
//! inversion, Gram-Schmidt QR decomposition, and triangular back
//! substitution.
//!
//! ## How the models fit
//!
//! * **Simple** regression computes slope and intercept directly from
//!   covariance and variance; no matrices are involved.
//! * **Multiple** and **polynomial** regression build a design matrix
//!   (an intercept column of ones plus one column per independent variable
//!   or per power of x), then solve the least-squares problem `X·β ≈ y` as
//!   `β = backSubstitute(R, Qᵗ·y)` after QR-decomposing `X`. Solving
//!   through QR avoids forming `XᵗX` and squaring its condition number;
//!   the naive Gauss-Jordan inverse remains available in the matrix kernel
//!   for comparison.
//!
//! ## Quick Start
//!
//! ```rust
//! use linreg_rs::prelude::*;
//!
//! let points = vec![
//!     Point::new(1.0_f64, 1.0),
//!     Point::new(2.0, 3.0),
//!     Point::new(4.0, 3.0),
//!     Point::new(3.0, 2.0),
//!     Point::new(5.0, 5.0),
//! ];
//!
//! let model = SimpleLinearRegression::new(points)?;
//! assert!((model.slope() - 0.8).abs() < 1e-9);
//! assert!((model.intercept() - 0.4).abs() < 1e-9);
//!
//! let prediction = model.predict(6.0);
//! let training_error = model.rmse();
//! # let _ = (prediction, training_error);
//! # Result::<(), RegressionError>::Ok(())
//! ```
//!
//! Polynomial regression with the QR solve path:
//!
//! ```rust
//! use linreg_rs::prelude::*;
//!
//! // Points on y = 1 + 2x + x^2
//! let points: Vec<Point<f64>> = (0..6)
//!     .map(|i| {
//!         let x = i as f64;
//!         Point::new(x, 1.0 + 2.0 * x + x * x)
//!     })
//!     .collect();
//!
//! let model = PolynomialRegression::new(points, 2)?;
//! assert!((model.predict(7.0) - 64.0).abs() < 1e-6);
//! # Result::<(), RegressionError>::Ok(())
//! ```
//!
//! Using the kernel directly:
//!
//! ```rust
//! use linreg_rs::prelude::*;
//!
//! let a = Matrix::from_rows(&[&[1.0, 3.0], &[2.0, 7.0]])?;
//! let inverse = a.inverse()?;
//! let expected = Matrix::from_rows(&[&[7.0, -3.0], &[-2.0, 1.0]])?;
//! assert!(inverse.approx_eq(&expected, 1e-9)?);
//! # Result::<(), RegressionError>::Ok(())
//! ```
//!
//! ## Error handling
//!
//! Structural misuse — shape-incompatible matrix operations, training
//! points with differing widths, negative polynomial degrees, wrong
//! prediction arity — fails fast with
//! [`RegressionError`](prelude::RegressionError). Numerical
//! ill-conditioning (singular matrices, zero pivots, zero-norm
//! projections) is deliberately *not* detected: it propagates as
//! NaN/Infinity through coefficients and predictions.
//!
//! ## Features
//!
//! | Feature    | Default | Effect                                        |
//! |------------|---------|-----------------------------------------------|
//! | `std`      | yes     | File ingestion (`data`), `std::error::Error`  |
//! | `parallel` | yes     | rayon-parallel degree search (implies `std`)  |
//!
//! The core (kernel, QR, solver, models) is `no_std`-compatible with
//! `alloc` when default features are disabled.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - error types and observation types.
pub mod primitives;

// Layer 2: Math - the dense matrix kernel and summary statistics.
pub mod math;

// Layer 3: Algorithms - QR decomposition and back substitution.
pub mod algorithms;

// Layer 4: Models - the regression estimators.
pub mod models;

// Layer 5: Evaluation - best-degree search over held-out data.
pub mod evaluation;

// Layer 6: Data - plain-text training data ingestion.
#[cfg(feature = "std")]
pub mod data;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use linreg_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algorithms::qr::QrDecomposition;
    pub use crate::algorithms::solve::back_substitute;
    pub use crate::evaluation::degree_search::find_best_degree;
    pub use crate::math::matrix::{Matrix, DEFAULT_EPSILON};
    pub use crate::models::multiple::MultipleLinearRegression;
    pub use crate::models::polynomial::PolynomialRegression;
    pub use crate::models::simple::SimpleLinearRegression;
    pub use crate::primitives::errors::RegressionError;
    pub use crate::primitives::point::{MultiplePoint, Point};

    #[cfg(feature = "std")]
    pub use crate::data::loader::{load_multiple_points, load_points};
    #[cfg(feature = "std")]
    pub use crate::primitives::errors::DatasetError;
}
