//! Grid and geometry utilities for Advent of Code
//!
//! # Overview
//!
//! - [`Dense`]: row-major matrix with an explicit stride, live row/column
//!   views and a zero-copy transpose
//! - [`Point2D`] / [`Point3D`]: integer points with Manhattan distance and
//!   axis-aligned neighbors
//! - [`Direction`]: the four grid headings with turning helpers
//! - [`BoundingBox2D`] / [`BoundingBox3D`]: inclusive lattice boxes with
//!   containment and intersection
//!
//! # Quick Example
//!
//! ```
//! use aoc_grid::{BoundingBox2D, Dense, Matrix};
//!
//! let grid = Dense::from_rows(["#..", ".#."].map(|row| row.chars()))?;
//! assert_eq!(grid.dims(), (2, 3));
//! assert_eq!(grid.t().at(2, 0), &'.');
//!
//! let a = BoundingBox2D::new(0, 5, 0, 5);
//! let b = BoundingBox2D::new(5, 10, 5, 10);
//! let corner = a.intersection(&b).unwrap();
//! assert!(corner.contains(5, 5));
//! assert_eq!(corner.area(), 1);
//! # Ok::<(), aoc_grid::MatrixError>(())
//! ```
//!
//! # Errors vs. panics
//!
//! Building a matrix from caller data returns [`MatrixError`] on a shape
//! mismatch. Indexing out of range is a bug in the caller and panics with
//! the same error message; the checked [`Dense::get`] and
//! [`Dense::get_mut`] report the distinct row/column kinds instead.

mod error;
mod geom;
mod matrix;

// Re-export public API
pub use error::{MatrixError, ParseDirectionError};
pub use geom::{
    BoundingBox2D, BoundingBox3D, DIRECTIONS_2D, DIRECTIONS_3D, Direction, Point2D, Point3D,
};
pub use matrix::{Dense, Matrix, MatrixMut, Transpose, VecView, VecViewMut};
