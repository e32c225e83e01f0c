//! Observation types for regression training data.
//!
//! ## Purpose
//!
//! This module defines the immutable observation types consumed by the
//! regression models: `Point` for one independent variable and
//! `MultiplePoint` for an ordered sequence of independent variables.
//!
//! ## Design notes
//!
//! * **Immutability**: Observations are plain value types, read-only once
//!   constructed.
//! * **Width checks**: `MultiplePoint` does not enforce a width by itself;
//!   homogeneity across a training set is validated by the model
//!   constructor, where the violation can be attributed to a point index.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Point
// ============================================================================

/// A single `(x, y)` observation for simple and polynomial regression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<T: Float> {
    x: T,
    y: T,
}

impl<T: Float> Point<T> {
    /// Create an observation from its independent and dependent values.
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// The independent value.
    #[inline]
    pub fn x(&self) -> T {
        self.x
    }

    /// The dependent value.
    #[inline]
    pub fn y(&self) -> T {
        self.y
    }
}

// ============================================================================
// MultiplePoint
// ============================================================================

/// One observation with several independent values and one dependent value.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiplePoint<T: Float> {
    xs: Vec<T>,
    y: T,
}

impl<T: Float> MultiplePoint<T> {
    /// Create an observation from its independent values and dependent value.
    pub fn new(xs: Vec<T>, y: T) -> Self {
        Self { xs, y }
    }

    /// The independent values, in order.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// The dependent value.
    #[inline]
    pub fn y(&self) -> T {
        self.y
    }

    /// Number of independent variables in this observation.
    #[inline]
    pub fn arity(&self) -> usize {
        self.xs.len()
    }
}
