//! Dense integer matrices with two arithmetic engines.
//!
//! [`mutable::MutableMatrix`] overwrites its own storage and hands back the same handle,
//! while [`immutable::ImmutableMatrix`] allocates a fresh result for every operation. Both
//! run the same algorithms from [`routines`] over any [`Storage`] layout, so a caller
//! written against [`MatrixOps`] can swap engine or layout without changing code.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::fmt::{self, Display, Formatter};

mod element;
mod error;
pub mod fixed;
pub mod immutable;
pub mod mutable;
mod ops;
pub mod routines;
pub mod rows;
mod storage;

pub use element::Element;
pub use error::MatrixError;
pub use ops::MatrixOps;
pub use storage::Storage;

/// The shape of a matrix.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    #[must_use]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// The shape of the transpose.
    #[must_use]
    pub const fn transposed(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Read access to a rectangular grid of values.
pub trait Matrix<T> {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// The value at row `r`, column `c`.
    ///
    /// Indices are not validated beyond the bounds checks of the underlying storage.
    fn get(&self, r: usize, c: usize) -> T;

    fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width(), self.height())
    }

    /// Whether `other` has the same shape and the same value in every cell.
    ///
    /// A shape mismatch is reported as `false`, never as an error.
    fn equals<M>(&self, other: &M) -> bool
    where
        M: Matrix<T> + ?Sized,
        T: PartialEq,
    {
        self.dimensions() == other.dimensions()
            && (0..self.height())
                .all(|r| (0..self.width()).all(|c| self.get(r, c) == other.get(r, c)))
    }

    /// Copy the contents out as one `Vec` per row.
    fn to_rows(&self) -> Vec<Vec<T>> {
        (0..self.height())
            .map(|r| (0..self.width()).map(|c| self.get(r, c)).collect())
            .collect()
    }
}

impl<T, M: Matrix<T> + ?Sized> Matrix<T> for &M {
    #[inline]
    fn width(&self) -> usize {
        (**self).width()
    }

    #[inline]
    fn height(&self) -> usize {
        (**self).height()
    }

    #[inline]
    fn get(&self, r: usize, c: usize) -> T {
        (**self).get(r, c)
    }
}

impl<T, M: Matrix<T> + ?Sized> Matrix<T> for &mut M {
    #[inline]
    fn width(&self) -> usize {
        (**self).width()
    }

    #[inline]
    fn height(&self) -> usize {
        (**self).height()
    }

    #[inline]
    fn get(&self, r: usize, c: usize) -> T {
        (**self).get(r, c)
    }
}
