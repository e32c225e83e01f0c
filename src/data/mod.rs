//! Layer 6: Data (std only)
//!
//! # Purpose
//!
//! This layer provides plain-text training data ingestion: reading point
//! lists from whitespace-separated files with a single header line.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: Data ← You are here
//!   ↓
//! Layer 5: Evaluation
//!   ↓
//! Layer 4: Models
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Plain-text file loaders.
pub mod loader;
