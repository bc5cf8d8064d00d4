//! Dynamically sized storage: one independently allocated `Vec` per row.

use alloc::vec;
use alloc::vec::Vec;
use core::iter;

use itertools::Itertools;
use rand::Rng;
use rand::distr::{Distribution, StandardUniform};

use crate::storage::check_non_zero;
use crate::{Element, Matrix, MatrixError, Storage};

/// Row-major storage as a sequence of rows.
///
/// The shape is never stored: the height is the number of rows and the width is the length
/// of the first row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowStorage<T> {
    rows: Vec<Vec<T>>,
}

impl<T> RowStorage<T> {
    /// Wrap `rows` as they are.
    ///
    /// # Panics
    /// Panics if there are no rows, if the first row is empty, or if the rows do not all
    /// have the same length.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        assert!(
            rows.first().is_some_and(|row| !row.is_empty()),
            "a matrix needs at least one row and one column"
        );
        assert!(
            rows.iter().map(Vec::len).all_equal(),
            "every row must have the same length"
        );
        Self { rows }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.rows.iter().map(Vec::as_slice)
    }

    #[must_use]
    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.rows
    }

    /// Random storage of the given shape.
    pub fn rand<R: Rng + ?Sized>(
        rng: &mut R,
        width: usize,
        height: usize,
    ) -> Result<Self, MatrixError>
    where
        StandardUniform: Distribution<T>,
    {
        check_non_zero(width, height)?;
        let rows = iter::repeat_with(|| iter::repeat_with(|| rng.random()).take(width).collect())
            .take(height)
            .collect();
        Ok(Self { rows })
    }
}

impl<T: Copy> Matrix<T> for RowStorage<T> {
    #[inline]
    fn width(&self) -> usize {
        self.rows[0].len()
    }

    #[inline]
    fn height(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    fn get(&self, r: usize, c: usize) -> T {
        self.rows[r][c]
    }
}

impl<T: Element> Storage<T> for RowStorage<T> {
    type Cells = Vec<Vec<T>>;
    type Transposed = Self;

    fn from_cells(cells: Vec<Vec<T>>) -> Self {
        Self::from_rows(cells)
    }

    fn zeroed(width: usize, height: usize) -> Result<Self, MatrixError> {
        check_non_zero(width, height)?;
        Ok(Self {
            rows: vec![vec![T::zero(); width]; height],
        })
    }

    fn zeroed_like(&self) -> Self {
        Self {
            rows: vec![vec![T::zero(); self.width()]; self.height()],
        }
    }

    fn zeroed_transposed(&self) -> Self {
        Self {
            rows: vec![vec![T::zero(); self.height()]; self.width()],
        }
    }

    #[inline]
    fn set(&mut self, r: usize, c: usize, value: T) {
        self.rows[r][c] = value;
    }
}
