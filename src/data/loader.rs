//! Plain-text training data ingestion.
//!
//! ## Purpose
//!
//! This module reads sample data files into point lists. The expected
//! format is one header/comment line followed by whitespace-separated
//! numeric tokens: `x y` pairs for simple/polynomial data, or
//! `y x1 .. xk` records for multiple-regression data.
//!
//! ## Design notes
//!
//! * **Header line**: The first line is always skipped, regardless of
//!   content.
//! * **Token stream**: Records may span lines; tokens are consumed in
//!   order across the whole file, so line breaks inside a record are fine.
//! * **Error attribution**: Parse failures and truncated records report
//!   the 1-based line number of the offending token.
//!
//! ## Non-goals
//!
//! * This module does not validate the numeric quality of the data (the
//!   model constructors do) and does not support CSV or JSON.

use std::fs;
use std::path::Path;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::DatasetError;
use crate::primitives::point::{MultiplePoint, Point};

// ============================================================================
// Loaders
// ============================================================================

/// Load `x y` pairs from a plain-text file, skipping the header line.
pub fn load_points<T, P>(path: P) -> Result<Vec<Point<T>>, DatasetError>
where
    T: Float,
    P: AsRef<Path>,
{
    let mut tokens = read_tokens(path)?;

    let mut points = Vec::new();
    while let Some((x, line)) = tokens.next_value()? {
        let (y, _) = tokens.next_value()?.ok_or(DatasetError::MissingValue { line })?;
        points.push(Point::new(x, y));
    }

    if points.is_empty() {
        return Err(DatasetError::EmptyFile);
    }
    Ok(points)
}

/// Load `y x1 .. xk` records from a plain-text file, skipping the header line.
///
/// `independent_vars` is the number of x tokens per record (k).
pub fn load_multiple_points<T, P>(
    path: P,
    independent_vars: usize,
) -> Result<Vec<MultiplePoint<T>>, DatasetError>
where
    T: Float,
    P: AsRef<Path>,
{
    let mut tokens = read_tokens(path)?;

    let mut points = Vec::new();
    while let Some((y, line)) = tokens.next_value()? {
        let mut xs = Vec::with_capacity(independent_vars);
        for _ in 0..independent_vars {
            let (x, _) = tokens.next_value()?.ok_or(DatasetError::MissingValue { line })?;
            xs.push(x);
        }
        points.push(MultiplePoint::new(xs, y));
    }

    if points.is_empty() {
        return Err(DatasetError::EmptyFile);
    }
    Ok(points)
}

// ============================================================================
// Token Stream
// ============================================================================

/// Ordered numeric tokens with their 1-based source line numbers.
struct TokenStream {
    tokens: Vec<(String, usize)>,
    next: usize,
}

impl TokenStream {
    /// The next parsed value and its line number, or `None` at end of file.
    fn next_value<T: Float>(&mut self) -> Result<Option<(T, usize)>, DatasetError> {
        let Some((token, line)) = self.tokens.get(self.next) else {
            return Ok(None);
        };
        self.next += 1;

        let parsed: f64 = token.parse().map_err(|_| DatasetError::InvalidNumber {
            line: *line,
            token: token.clone(),
        })?;
        let value = T::from(parsed).ok_or_else(|| DatasetError::InvalidNumber {
            line: *line,
            token: token.clone(),
        })?;

        Ok(Some((value, *line)))
    }
}

/// Read a file into a token stream, skipping the header line.
fn read_tokens<P: AsRef<Path>>(path: P) -> Result<TokenStream, DatasetError> {
    let contents = fs::read_to_string(path)?;

    let mut tokens = Vec::new();
    for (index, line) in contents.lines().enumerate().skip(1) {
        for token in line.split_whitespace() {
            tokens.push((token.to_string(), index + 1));
        }
    }

    Ok(TokenStream { tokens, next: 0 })
}
