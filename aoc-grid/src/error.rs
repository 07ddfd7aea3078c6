//! Error types for the grid library

use thiserror::Error;

/// Error type for matrix construction and access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// A matrix or vector was requested with zero rows or columns
    #[error("matrix: zero length in matrix dimension")]
    ZeroLength,
    /// Backing data does not hold exactly rows * cols elements
    #[error("matrix: dimension mismatch: expected {expected} elements, got {actual}")]
    Shape { expected: usize, actual: usize },
    /// Row index outside `0..rows`
    #[error("matrix: row index {index} out of range for {rows} rows")]
    RowAccess { index: usize, rows: usize },
    /// Column index outside `0..cols`
    #[error("matrix: column index {index} out of range for {cols} columns")]
    ColAccess { index: usize, cols: usize },
    /// Element index outside a vector view
    #[error("matrix: vector index {index} out of range for {len} elements")]
    VectorAccess { index: usize, len: usize },
    /// A row does not have as many elements as the matrix has columns
    #[error("matrix: row length mismatch: expected {expected}, got {actual}")]
    RowLength { expected: usize, actual: usize },
    /// A column does not have as many elements as the matrix has rows
    #[error("matrix: column length mismatch: expected {expected}, got {actual}")]
    ColLength { expected: usize, actual: usize },
    /// Two vectors taking part in a copy differ in length
    #[error("matrix: vector length mismatch: expected {expected}, got {actual}")]
    VectorLength { expected: usize, actual: usize },
}

/// Error type for parsing a [`Direction`](crate::Direction)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid direction: {0:?}")]
pub struct ParseDirectionError(pub String);
