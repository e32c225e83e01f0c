//! Layer 5: Evaluation
//!
//! # Purpose
//!
//! This layer provides model-selection tooling on top of the regression
//! models: the brute-force polynomial degree search over held-out data.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: Data
//!   ↓
//! Layer 5: Evaluation ← You are here
//!   ↓
//! Layer 4: Models
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Best-degree grid scan.
pub mod degree_search;
