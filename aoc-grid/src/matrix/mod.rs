//! Generic dense matrix
//!
//! A row-major [`Dense`] store with an explicit stride, strided row/column
//! views ([`VecView`],
//! [`VecViewMut`]) borrowed straight from its storage, and an implicit
//! [`Transpose`] that swaps coordinates instead of copying.
//!
//! # Example
//!
//! ```
//! use aoc_grid::{Dense, Matrix, MatrixMut};
//!
//! let mut m = Dense::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6])?;
//! assert_eq!(m.col_view(1).to_vec(), vec![2, 5]);
//!
//! // Writes through the transpose land in the original matrix.
//! m.t_mut().set(2, 0, 30);
//! assert_eq!(m.at(0, 2), &30);
//! assert_eq!(m.t().dims(), (3, 2));
//! # Ok::<(), aoc_grid::MatrixError>(())
//! ```

mod dense;
mod vector;

pub use dense::Dense;
pub use vector::{VecView, VecViewMut};

/// Read access shared by [`Dense`], [`Transpose`] and references to them.
pub trait Matrix {
    type Elem;

    /// Returns `(rows, cols)`.
    fn dims(&self) -> (usize, usize);

    /// Returns the element at row `i`, column `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of bounds.
    fn at(&self, i: usize, j: usize) -> &Self::Elem;
}

/// Write access shared by [`Dense`], [`Transpose`] and mutable references.
pub trait MatrixMut: Matrix {
    /// Returns the element at row `i`, column `j` for modification.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of bounds.
    fn at_mut(&mut self, i: usize, j: usize) -> &mut Self::Elem;

    /// Sets the element at row `i`, column `j` to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of bounds.
    fn set(&mut self, i: usize, j: usize, value: Self::Elem) {
        *self.at_mut(i, j) = value;
    }
}

/// An implicit transpose of the wrapped matrix.
///
/// Row `i`, column `j` of the transpose is row `j`, column `i` of the inner
/// matrix. Nothing is copied; wrapping a `&mut` matrix lets writes through.
#[derive(Debug, Clone, Copy)]
pub struct Transpose<M> {
    inner: M,
}

impl<M> Transpose<M> {
    pub fn new(inner: M) -> Self {
        Self { inner }
    }

    /// Transposes back, returning the wrapped matrix.
    pub fn t(self) -> M {
        self.inner
    }
}

impl<M: Matrix> Matrix for Transpose<M> {
    type Elem = M::Elem;

    fn dims(&self) -> (usize, usize) {
        let (r, c) = self.inner.dims();
        (c, r)
    }

    fn at(&self, i: usize, j: usize) -> &M::Elem {
        self.inner.at(j, i)
    }
}

impl<M: MatrixMut> MatrixMut for Transpose<M> {
    fn at_mut(&mut self, i: usize, j: usize) -> &mut M::Elem {
        self.inner.at_mut(j, i)
    }
}

impl<M: Matrix + ?Sized> Matrix for &M {
    type Elem = M::Elem;

    fn dims(&self) -> (usize, usize) {
        (**self).dims()
    }

    fn at(&self, i: usize, j: usize) -> &M::Elem {
        (**self).at(i, j)
    }
}

impl<M: Matrix + ?Sized> Matrix for &mut M {
    type Elem = M::Elem;

    fn dims(&self) -> (usize, usize) {
        (**self).dims()
    }

    fn at(&self, i: usize, j: usize) -> &M::Elem {
        (**self).at(i, j)
    }
}

impl<M: MatrixMut + ?Sized> MatrixMut for &mut M {
    fn at_mut(&mut self, i: usize, j: usize) -> &mut M::Elem {
        (**self).at_mut(i, j)
    }
}
