//! The copy-on-write engine.

use core::marker::PhantomData;

use crate::fixed::ArrayStorage;
use crate::routines;
use crate::rows::RowStorage;
use crate::{Element, Matrix, MatrixError, Storage};

/// A matrix whose arithmetic never touches its operands.
///
/// Every operation allocates storage sized for its result and returns it as a new
/// matrix; the receiver and the argument stay exactly as they were.
#[derive(Clone, Debug)]
pub struct ImmutableMatrix<T, S = RowStorage<T>> {
    storage: S,
    _phantom: PhantomData<T>,
}

pub type ImmutableRowMatrix<T> = ImmutableMatrix<T, RowStorage<T>>;

pub type ImmutableArrayMatrix<T, const H: usize, const W: usize> =
    ImmutableMatrix<T, ArrayStorage<T, H, W>>;

impl<T: Element, S: Storage<T>> ImmutableMatrix<T, S> {
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

    pub fn add<M: Matrix<T> + ?Sized>(&self, other: &M) -> Result<Self, MatrixError> {
        routines::add(&self.storage, other).map(Self::from_storage)
    }

    pub fn subtract<M: Matrix<T> + ?Sized>(&self, other: &M) -> Result<Self, MatrixError> {
        routines::sub(&self.storage, other).map(Self::from_storage)
    }

    #[must_use]
    pub fn scalar_multiply(&self, scalar: T) -> Self {
        Self::from_storage(routines::scale(&self.storage, scalar))
    }

    /// The transpose, in the transposed layout (a fixed `H x W` becomes a fixed `W x H`).
    #[must_use]
    pub fn transpose(&self) -> ImmutableMatrix<T, S::Transposed> {
        ImmutableMatrix::from_storage(routines::transpose(&self.storage))
    }

    pub fn matrix_multiply<M: Matrix<T> + ?Sized>(&self, other: &M) -> Result<Self, MatrixError> {
        routines::product(&self.storage, other).map(Self::from_storage)
    }
}

impl<T: Element, const H: usize, const W: usize> ImmutableMatrix<T, ArrayStorage<T, H, W>> {
    /// The product with a fixed `W x K` operand, as a fixed `H x K` matrix.
    ///
    /// [`matrix_multiply`](Self::matrix_multiply) keeps the receiver's layout and so
    /// only succeeds when the product has the receiver's shape. Here the result layout
    /// follows the operand shapes instead: every compatible pair multiplies, and an
    /// incompatible one does not compile.
    #[must_use]
    pub fn matrix_multiply_fixed<const K: usize>(
        &self,
        other: &ArrayStorage<T, W, K>,
    ) -> ImmutableArrayMatrix<T, H, K> {
        ImmutableMatrix::from_storage(routines::product_fixed(&self.storage, other))
    }
}

impl<T: Element, S: Storage<T>> Matrix<T> for ImmutableMatrix<T, S> {
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

impl<T: Element, S: Storage<T>> PartialEq for ImmutableMatrix<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: Element, S: Storage<T>> Eq for ImmutableMatrix<T, S> {}
