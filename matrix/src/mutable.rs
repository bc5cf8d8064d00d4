//! The in-place engine.

use core::marker::PhantomData;

use crate::fixed::ArrayStorage;
use crate::routines;
use crate::rows::RowStorage;
use crate::{Element, Matrix, MatrixError, Storage};

/// A matrix whose arithmetic overwrites its own storage.
///
/// Every operation returns the same `&mut` handle it was called on, so calls chain and
/// the identity of the matrix survives them. Elementwise operations and scaling update
/// cells where they are; [`transpose`](Self::transpose) and
/// [`matrix_multiply`](Self::matrix_multiply) compute a new block and swap it in.
#[derive(Clone, Debug)]
pub struct MutableMatrix<T, S = RowStorage<T>> {
    storage: S,
    _phantom: PhantomData<T>,
}

pub type MutableRowMatrix<T> = MutableMatrix<T, RowStorage<T>>;

pub type MutableArrayMatrix<T, const H: usize, const W: usize> =
    MutableMatrix<T, ArrayStorage<T, H, W>>;

impl<T: Element, S: Storage<T>> MutableMatrix<T, S> {
    /// Take ownership of `cells` without copying them.
    #[must_use]
    pub fn new(cells: S::Cells) -> Self {
        Self::from_storage(S::from_cells(cells))
    }

    /// A zero-filled `width x height` matrix.
    pub fn new_empty(width: usize, height: usize) -> Result<Self, MatrixError> {
        S::zeroed(width, height).map(Self::from_storage)
    }

    #[must_use]
    pub const fn from_storage(storage: S) -> Self {
        Self {
            storage,
            _phantom: PhantomData,
        }
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Add `other` into `self`.
    pub fn add<M: Matrix<T> + ?Sized>(&mut self, other: &M) -> Result<&mut Self, MatrixError> {
        routines::add_in_place(&mut self.storage, other)?;
        Ok(self)
    }

    /// Subtract `other` from `self`.
    pub fn subtract<M: Matrix<T> + ?Sized>(
        &mut self,
        other: &M,
    ) -> Result<&mut Self, MatrixError> {
        routines::sub_in_place(&mut self.storage, other)?;
        Ok(self)
    }

    pub fn scalar_multiply(&mut self, scalar: T) -> &mut Self {
        routines::scale_in_place(&mut self.storage, scalar);
        self
    }

    /// Replace `self` with `self * other`.
    ///
    /// On failure `self` is left exactly as it was.
    pub fn matrix_multiply<M: Matrix<T> + ?Sized>(
        &mut self,
        other: &M,
    ) -> Result<&mut Self, MatrixError> {
        self.storage = routines::product(&self.storage, other)?;
        Ok(self)
    }
}

impl<T: Element, S: Storage<T, Transposed = S>> MutableMatrix<T, S> {
    /// Replace `self` with its transpose.
    ///
    /// Only layouts whose transpose has the same type qualify: any [`RowStorage`], and
    /// square [`ArrayStorage`].
    pub fn transpose(&mut self) -> &mut Self {
        self.storage = routines::transpose(&self.storage);
        self
    }
}

impl<T: Element, S: Storage<T>> Matrix<T> for MutableMatrix<T, S> {
    #[inline]
    fn width(&self) -> usize {
        self.storage.width()
    }

    #[inline]
    fn height(&self) -> usize {
        self.storage.height()
    }

    #[inline]
    fn get(&self, r: usize, c: usize) -> T {
        self.storage.get(r, c)
    }
}

impl<T: Element, S: Storage<T>> PartialEq for MutableMatrix<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: Element, S: Storage<T>> Eq for MutableMatrix<T, S> {}
