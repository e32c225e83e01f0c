//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure mathematical building blocks of the crate:
//! - The dense matrix kernel (multiply, transpose, row operations,
//!   Gauss-Jordan inversion)
//! - Summary statistics (mean, variance, covariance)
//!
//! These are reusable functions with no model-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: Data
//!   ↓
//! Layer 5: Evaluation
//!   ↓
//! Layer 4: Models
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Dense matrix type and kernel operations.
pub mod matrix;

/// Mean, variance, and covariance helpers.
pub mod stats;
