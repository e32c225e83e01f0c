//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental building blocks used throughout the
//! crate: shared error types and immutable observation types. It has zero
//! internal dependencies within the crate.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
///
/// Provides:
/// - `RegressionError` for structural misuse of the kernel and models
/// - `DatasetError` for plain-text ingestion failures (std only)
pub mod errors;

/// Observation types.
///
/// Provides:
/// - `Point` for one independent variable
/// - `MultiplePoint` for several independent variables
pub mod point;
