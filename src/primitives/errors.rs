//! Shared error types for regression fitting.
//!
//! ## Purpose
//!
//! This module defines the structural error taxonomy for the crate:
//! shape-incompatible matrix operations, heterogeneous training points,
//! invalid model parameters, and prediction-call arity mismatches.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Structural misuse is reported synchronously at the point
//!   of the offending call, before any arithmetic is performed.
//! * **Silent degradation**: Numerical ill-conditioning (singular matrices,
//!   zero pivots, zero-norm projections) is intentionally *not* represented
//!   here. It propagates as NaN/Infinity through coefficients and
//!   predictions.
//! * **no_std**: `Display` is implemented via `core::fmt`;
//!   `std::error::Error` is provided behind the `std` feature.
//!
//! ## Invariants
//!
//! * Every variant corresponds to a caller mistake, never to input data that
//!   is merely numerically unfortunate.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

use core::fmt;

// ============================================================================
// RegressionError
// ============================================================================

/// Structural errors raised by the matrix kernel and regression models.
#[derive(Debug, Clone, PartialEq)]
pub enum RegressionError {
    /// Input point list or matrix row list is empty.
    EmptyInput,

    /// Matrix construction received rows of differing lengths.
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Length of row 0.
        expected: usize,
        /// Length of the offending row.
        got: usize,
    },

    /// Shapes of the operands are incompatible for the requested operation.
    DimensionMismatch {
        /// Name of the failing kernel operation.
        operation: &'static str,
        /// Shape of the left operand as (rows, cols).
        lhs: (usize, usize),
        /// Shape of the right operand, or the shape the operation required.
        rhs: (usize, usize),
    },

    /// A row index exceeds the matrix height.
    RowOutOfBounds {
        /// The offending row index.
        index: usize,
        /// Number of rows in the matrix.
        rows: usize,
    },

    /// A row operation was given identical target and source rows.
    SameRow {
        /// The duplicated row index.
        index: usize,
    },

    /// Training points carry differing numbers of independent variables.
    InconsistentDimensions {
        /// Index of the first offending point.
        index: usize,
        /// Width of point 0.
        expected: usize,
        /// Width of the offending point.
        got: usize,
    },

    /// Polynomial degree is negative.
    InvalidDegree {
        /// The rejected degree.
        degree: i32,
    },

    /// A prediction was requested with the wrong number of independent values.
    ArgumentCountMismatch {
        /// Number of independent variables the model was trained with.
        expected: usize,
        /// Number of values supplied to the prediction call.
        got: usize,
    },

    /// A training value is NaN or infinite.
    InvalidNumericValue(String),
}

impl fmt::Display for RegressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegressionError::EmptyInput => write!(f, "Input is empty"),
            RegressionError::RaggedRows { row, expected, got } => write!(
                f,
                "Ragged rows: row {} has {} entries, expected {}",
                row, got, expected
            ),
            RegressionError::DimensionMismatch {
                operation,
                lhs,
                rhs,
            } => write!(
                f,
                "Dimension mismatch in {}: {}x{} is incompatible with {}x{}",
                operation, lhs.0, lhs.1, rhs.0, rhs.1
            ),
            RegressionError::RowOutOfBounds { index, rows } => write!(
                f,
                "Row index {} out of bounds for matrix with {} rows",
                index, rows
            ),
            RegressionError::SameRow { index } => {
                write!(f, "Target and source rows must differ, both are {}", index)
            }
            RegressionError::InconsistentDimensions {
                index,
                expected,
                got,
            } => write!(
                f,
                "Inconsistent dimensions: point {} has {} independent variables, expected {}",
                index, got, expected
            ),
            RegressionError::InvalidDegree { degree } => {
                write!(f, "Invalid polynomial degree: {} (must be >= 0)", degree)
            }
            RegressionError::ArgumentCountMismatch { expected, got } => write!(
                f,
                "Argument count mismatch: prediction takes {} values, got {}",
                expected, got
            ),
            RegressionError::InvalidNumericValue(detail) => {
                write!(f, "Invalid numeric value: {}", detail)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RegressionError {}

// ============================================================================
// DatasetError
// ============================================================================

/// Errors raised while reading training data from plain-text files.
#[cfg(feature = "std")]
#[derive(Debug)]
pub enum DatasetError {
    /// Underlying I/O failure.
    Io(std::io::Error),

    /// The file contains no data rows after the header line.
    EmptyFile,

    /// A token could not be parsed as a number.
    InvalidNumber {
        /// 1-based line number of the offending token.
        line: usize,
        /// The raw token text.
        token: String,
    },

    /// A record ended before all of its values were read.
    MissingValue {
        /// 1-based line number where the record is truncated.
        line: usize,
    },
}

#[cfg(feature = "std")]
impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Io(err) => write!(f, "I/O error: {}", err),
            DatasetError::EmptyFile => write!(f, "File contains no data rows"),
            DatasetError::InvalidNumber { line, token } => {
                write!(f, "Line {}: cannot parse '{}' as a number", line, token)
            }
            DatasetError::MissingValue { line } => {
                write!(f, "Line {}: record is missing a value", line)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetError::Io(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for DatasetError {
    fn from(err: std::io::Error) -> Self {
        DatasetError::Io(err)
    }
}
