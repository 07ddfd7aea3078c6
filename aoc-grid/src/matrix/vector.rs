//! Strided vector views into matrix storage.

use std::fmt;

use itertools::Itertools;

use crate::error::MatrixError;

/// A read-only strided view of `n` elements.
///
/// Element `k` is `data[k * inc]`. Views are borrowed from a [`Dense`]
/// (see [`Dense::row_view`] and [`Dense::col_view`]) and always reflect
/// its current contents.
///
/// [`Dense`]: crate::Dense
/// [`Dense::row_view`]: crate::Dense::row_view
/// [`Dense::col_view`]: crate::Dense::col_view
#[derive(Clone, Copy)]
pub struct VecView<'a, T> {
    n: usize,
    inc: usize,
    data: &'a [T],
}

impl<'a, T> VecView<'a, T> {
    /// A contiguous view over the whole slice.
    pub fn new(data: &'a [T]) -> Self {
        Self {
            n: data.len(),
            inc: 1,
            data,
        }
    }

    pub(crate) fn strided(data: &'a [T], n: usize, inc: usize) -> Self {
        debug_assert!(n == 0 || (n - 1) * inc < data.len());
        Self { n, inc, data }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// # Panics
    ///
    /// Panics if `k` is out of bounds.
    pub fn at(&self, k: usize) -> &'a T {
        match self.get(k) {
            Some(v) => v,
            None => panic!(
                "{}",
                MatrixError::VectorAccess {
                    index: k,
                    len: self.n
                }
            ),
        }
    }

    pub fn get(&self, k: usize) -> Option<&'a T> {
        if k < self.n {
            self.data.get(k * self.inc)
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a T> + use<'a, T> {
        self.data.iter().step_by(self.inc).take(self.n)
    }

    /// Copies the viewed elements into a fresh `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for VecView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for VecView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.iter().join(" "))
    }
}

/// A mutable strided view of `n` elements. Writes land in the backing
/// matrix.
pub struct VecViewMut<'a, T> {
    n: usize,
    inc: usize,
    data: &'a mut [T],
}

impl<'a, T> VecViewMut<'a, T> {
    pub fn new(data: &'a mut [T]) -> Self {
        Self {
            n: data.len(),
            inc: 1,
            data,
        }
    }

    pub(crate) fn strided(data: &'a mut [T], n: usize, inc: usize) -> Self {
        debug_assert!(n == 0 || (n - 1) * inc < data.len());
        Self { n, inc, data }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// # Panics
    ///
    /// Panics if `k` is out of bounds.
    pub fn at(&self, k: usize) -> &T {
        let offset = self.offset(k);
        &self.data[offset]
    }

    /// # Panics
    ///
    /// Panics if `k` is out of bounds.
    pub fn at_mut(&mut self, k: usize) -> &mut T {
        let offset = self.offset(k);
        &mut self.data[offset]
    }

    /// # Panics
    ///
    /// Panics if `k` is out of bounds.
    pub fn set(&mut self, k: usize, value: T) {
        *self.at_mut(k) = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter().step_by(self.inc).take(self.n)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut().step_by(self.inc).take(self.n)
    }

    /// Overwrites every viewed element from `src`, which must have the
    /// same length as the view.
    pub fn copy_from(&mut self, src: &[T]) -> Result<(), MatrixError>
    where
        T: Clone,
    {
        if src.len() != self.n {
            return Err(MatrixError::VectorLength {
                expected: self.n,
                actual: src.len(),
            });
        }
        for (dst, value) in self.iter_mut().zip(src) {
            dst.clone_from(value);
        }
        Ok(())
    }

    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        for dst in self.iter_mut() {
            *dst = value.clone();
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    fn offset(&self, k: usize) -> usize {
        if k >= self.n {
            panic!(
                "{}",
                MatrixError::VectorAccess {
                    index: k,
                    len: self.n
                }
            );
        }
        k * self.inc
    }
}

impl<T: fmt::Debug> fmt::Debug for VecViewMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
