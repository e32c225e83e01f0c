//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the decomposition and solver algorithms consumed by
//! the regression models:
//! - Gram-Schmidt QR decomposition with memoized projection vectors
//! - Upper-triangular back substitution
//!
//! Together they form the production least-squares solve path
//! `β = backSubstitute(R, Qᵗ·y)`.
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Gram-Schmidt QR decomposition.
pub mod qr;

/// Back substitution for triangular systems.
pub mod solve;
