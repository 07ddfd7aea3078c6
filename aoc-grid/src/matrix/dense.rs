//! Row-major dense matrix.

use std::fmt;
use std::ops::{Index, IndexMut, Range};

use itertools::Itertools;

use super::vector::{VecView, VecViewMut};
use super::{Matrix, MatrixMut, Transpose};
use crate::error::MatrixError;

/// A dense matrix stored row-major in a single `Vec`.
///
/// Element `(i, j)` lives at `data[i * stride + j]`. `data.len()` is always
/// `rows * stride`. A matrix with a stride of zero is *empty*: it has no
/// shape yet and the first [`Dense::append_row`] establishes its column
/// count.
///
/// # Example
///
/// ```
/// use aoc_grid::Dense;
///
/// let mut grid = Dense::default();
/// grid.append_row(&[1, 2, 3])?;
/// grid.append_row(&[4, 5, 6])?;
///
/// assert_eq!(grid.dims(), (2, 3));
/// assert_eq!(grid[(1, 0)], 4);
/// assert_eq!(grid.col_view(2).to_vec(), vec![3, 6]);
/// # Ok::<(), aoc_grid::MatrixError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dense<T> {
    rows: usize,
    cols: usize,
    /// Number of elements between the starts of successive rows.
    stride: usize,
    data: Vec<T>,
}

impl<T> Dense<T> {
    /// Creates an empty matrix with no shape. See [`Dense::is_empty`].
    pub fn new() -> Self {
        Self {
            rows: 0,
            cols: 0,
            stride: 0,
            data: Vec::new(),
        }
    }

    /// Creates a `rows x cols` matrix backed by `data`, which must be laid
    /// out row-major and hold exactly `rows * cols` elements.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, MatrixError> {
        let expected = element_count(rows, cols, data.len())?;
        if data.len() != expected {
            return Err(MatrixError::Shape {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            rows,
            cols,
            stride: cols,
            data,
        })
    }

    /// Creates a `rows x cols` matrix filled with `T::default()`.
    pub fn zeroed(rows: usize, cols: usize) -> Result<Self, MatrixError>
    where
        T: Default + Clone,
    {
        let len = element_count(rows, cols, 0)?;
        Self::from_vec(rows, cols, vec![T::default(); len])
    }

    /// Builds a matrix row by row. Every row must have the length of the
    /// first one.
    ///
    /// This is the usual way to turn puzzle input into a grid:
    ///
    /// ```
    /// use aoc_grid::Dense;
    ///
    /// let input = "123\n456";
    /// let grid = Dense::from_rows(
    ///     input.lines().map(|line| line.bytes().map(|b| b - b'0')),
    /// )?;
    /// assert_eq!(grid[(1, 2)], 6);
    /// # Ok::<(), aoc_grid::MatrixError>(())
    /// ```
    pub fn from_rows<R, I>(rows: R) -> Result<Self, MatrixError>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        let mut matrix = Self::new();
        for row in rows {
            matrix.push_row(row.into_iter().collect())?;
        }
        if matrix.is_empty() {
            return Err(MatrixError::ZeroLength);
        }
        Ok(matrix)
    }

    /// Returns `(rows, cols)`.
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The backing storage in row-major order.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Returns `true` if the matrix has no shape yet (stride of zero).
    pub fn is_empty(&self) -> bool {
        self.stride == 0
    }

    /// Checked access reporting which coordinate was out of range.
    pub fn get(&self, i: usize, j: usize) -> Result<&T, MatrixError> {
        let offset = self.offset(i, j)?;
        Ok(&self.data[offset])
    }

    /// Checked mutable access reporting which coordinate was out of range.
    pub fn get_mut(&mut self, i: usize, j: usize) -> Result<&mut T, MatrixError> {
        let offset = self.offset(i, j)?;
        Ok(&mut self.data[offset])
    }

    /// Returns the element at row `i`, column `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of bounds.
    pub fn at(&self, i: usize, j: usize) -> &T {
        match self.offset(i, j) {
            Ok(offset) => &self.data[offset],
            Err(e) => panic!("{e}"),
        }
    }

    /// # Panics
    ///
    /// Panics if `i` or `j` is out of bounds.
    pub fn at_mut(&mut self, i: usize, j: usize) -> &mut T {
        match self.offset(i, j) {
            Ok(offset) => &mut self.data[offset],
            Err(e) => panic!("{e}"),
        }
    }

    /// Sets the element at row `i`, column `j` to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of bounds.
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        *self.at_mut(i, j) = value;
    }

    /// Overwrites row `i` with `src`, which must have `cols` elements.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds. Use [`Dense::append_row`] to grow
    /// the matrix.
    pub fn set_row(&mut self, i: usize, src: &[T]) -> Result<(), MatrixError>
    where
        T: Clone,
    {
        if src.len() != self.cols {
            return Err(MatrixError::RowLength {
                expected: self.cols,
                actual: src.len(),
            });
        }
        self.raw_row_view_mut(i).clone_from_slice(src);
        Ok(())
    }

    /// Overwrites column `j` with `src`, which must have `rows` elements.
    ///
    /// # Panics
    ///
    /// Panics if `j` is out of bounds.
    pub fn set_col(&mut self, j: usize, src: &[T]) -> Result<(), MatrixError>
    where
        T: Clone,
    {
        if src.len() != self.rows {
            return Err(MatrixError::ColLength {
                expected: self.rows,
                actual: src.len(),
            });
        }
        self.col_view_mut(j).copy_from(src)
    }

    /// Appends a row at the bottom. An empty matrix takes its column count
    /// from `src`; otherwise `src` must have `cols` elements.
    pub fn append_row(&mut self, src: &[T]) -> Result<(), MatrixError>
    where
        T: Clone,
    {
        self.push_row(src.to_vec())
    }

    fn push_row(&mut self, row: Vec<T>) -> Result<(), MatrixError> {
        if self.is_empty() {
            if row.is_empty() {
                return Err(MatrixError::ZeroLength);
            }
            self.cols = row.len();
            self.stride = self.cols;
        } else if row.len() != self.cols {
            return Err(MatrixError::RowLength {
                expected: self.cols,
                actual: row.len(),
            });
        }
        self.rows += 1;
        self.data.extend(row);
        Ok(())
    }

    /// Row `i` as a slice of the backing storage.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn raw_row_view(&self, i: usize) -> &[T] {
        let start = self.row_start(i);
        &self.data[start..start + self.cols]
    }

    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn raw_row_view_mut(&mut self, i: usize) -> &mut [T] {
        let start = self.row_start(i);
        &mut self.data[start..start + self.cols]
    }

    /// Elements `range` of row `r`. `range.end` may equal `cols`.
    ///
    /// # Panics
    ///
    /// Panics if `r` is out of bounds or `range` does not fit in the row.
    pub fn slice_row(&self, r: usize, range: Range<usize>) -> &[T] {
        assert!(
            range.start <= range.end && range.end <= self.cols,
            "matrix: out of bound slice {range:?} for {} columns",
            self.cols
        );
        let start = self.row_start(r);
        &self.data[start + range.start..start + range.end]
    }

    /// Row `i` as a view backed by the matrix storage.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn row_view(&self, i: usize) -> VecView<'_, T> {
        VecView::new(self.raw_row_view(i))
    }

    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn row_view_mut(&mut self, i: usize) -> VecViewMut<'_, T> {
        VecViewMut::new(self.raw_row_view_mut(i))
    }

    /// Column `j` as a strided view backed by the matrix storage.
    ///
    /// # Panics
    ///
    /// Panics if `j` is out of bounds.
    pub fn col_view(&self, j: usize) -> VecView<'_, T> {
        let range = self.col_range(j);
        VecView::strided(&self.data[range], self.rows, self.stride)
    }

    /// # Panics
    ///
    /// Panics if `j` is out of bounds.
    pub fn col_view_mut(&mut self, j: usize) -> VecViewMut<'_, T> {
        let range = self.col_range(j);
        let (rows, stride) = (self.rows, self.stride);
        VecViewMut::strided(&mut self.data[range], rows, stride)
    }

    /// Iterates over the rows from top to bottom.
    pub fn row_iter(&self) -> impl Iterator<Item = &[T]> {
        self.data
            .chunks(self.stride.max(1))
            .map(|row| &row[..self.cols])
    }

    /// In-bounds positions one step up, right, down and left of `(i, j)`,
    /// in that order.
    pub fn cardinal_neighbors(
        &self,
        i: usize,
        j: usize,
    ) -> impl Iterator<Item = (usize, usize)> + use<T> {
        let (rows, cols) = (self.rows, self.cols);
        [
            i.checked_sub(1).map(|r| (r, j)),
            Some((i, j + 1)),
            Some((i + 1, j)),
            j.checked_sub(1).map(|c| (i, c)),
        ]
        .into_iter()
        .flatten()
        .filter(move |&(r, c)| r < rows && c < cols)
    }

    /// Implicit transpose borrowing the matrix.
    pub fn t(&self) -> Transpose<&Self> {
        Transpose::new(self)
    }

    /// Implicit transpose that writes through to the matrix.
    pub fn t_mut(&mut self) -> Transpose<&mut Self> {
        Transpose::new(self)
    }

    fn offset(&self, i: usize, j: usize) -> Result<usize, MatrixError> {
        if i >= self.rows {
            return Err(MatrixError::RowAccess {
                index: i,
                rows: self.rows,
            });
        }
        if j >= self.cols {
            return Err(MatrixError::ColAccess {
                index: j,
                cols: self.cols,
            });
        }
        Ok(i * self.stride + j)
    }

    fn row_start(&self, i: usize) -> usize {
        if i >= self.rows {
            panic!(
                "{}",
                MatrixError::RowAccess {
                    index: i,
                    rows: self.rows
                }
            );
        }
        i * self.stride
    }

    fn col_range(&self, j: usize) -> Range<usize> {
        if j >= self.cols {
            panic!(
                "{}",
                MatrixError::ColAccess {
                    index: j,
                    cols: self.cols
                }
            );
        }
        j..j + (self.rows - 1) * self.stride + 1
    }
}

/// `rows * cols`, rejecting zero dimensions and products that overflow.
/// `actual` is the length reported in the overflow error.
fn element_count(rows: usize, cols: usize, actual: usize) -> Result<usize, MatrixError> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::ZeroLength);
    }
    rows.checked_mul(cols).ok_or(MatrixError::Shape {
        expected: usize::MAX,
        actual,
    })
}

impl<T> Default for Dense<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Matrix for Dense<T> {
    type Elem = T;

    fn dims(&self) -> (usize, usize) {
        Dense::dims(self)
    }

    fn at(&self, i: usize, j: usize) -> &T {
        Dense::at(self, i, j)
    }
}

impl<T> MatrixMut for Dense<T> {
    fn at_mut(&mut self, i: usize, j: usize) -> &mut T {
        Dense::at_mut(self, i, j)
    }
}

impl<T> Index<(usize, usize)> for Dense<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        self.at(i, j)
    }
}

impl<T> IndexMut<(usize, usize)> for Dense<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        self.at_mut(i, j)
    }
}

impl<T: fmt::Display> fmt::Display for Dense<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, row) in self.row_iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row.iter().join(" "))?;
        }
        Ok(())
    }
}
