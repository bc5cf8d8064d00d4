//! Fixed-size storage: an `H x W` array held inline, with the shape fixed at compile time.

use core::array;

use rand::Rng;
use rand::distr::{Distribution, StandardUniform};

use crate::storage::check_non_zero;
use crate::{Dimensions, Element, Matrix, MatrixError, Storage};

/// `H` rows of `W` cells in one contiguous block.
///
/// The grid lives inside the value itself, so constructing one performs no allocation.
/// Large shapes are correspondingly large on the stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArrayStorage<T, const H: usize, const W: usize> {
    cells: [[T; W]; H],
}

impl<T, const H: usize, const W: usize> ArrayStorage<T, H, W> {
    pub const DIMENSIONS: Dimensions = Dimensions::new(W, H);

    /// Wrap `cells` as they are.
    #[must_use]
    pub const fn from_array(cells: [[T; W]; H]) -> Self {
        const { assert!(H > 0 && W > 0, "a fixed layout needs at least one row and one column") };
        Self { cells }
    }

    #[must_use]
    pub const fn as_array(&self) -> &[[T; W]; H] {
        &self.cells
    }

    #[must_use]
    pub fn into_array(self) -> [[T; W]; H] {
        self.cells
    }

    pub fn rand<R: Rng + ?Sized>(rng: &mut R) -> Self
    where
        StandardUniform: Distribution<T>,
    {
        Self::from_array(array::from_fn(|_| array::from_fn(|_| rng.random())))
    }

    fn check_shape(width: usize, height: usize) -> Result<(), MatrixError> {
        check_non_zero(width, height)?;
        let requested = Dimensions::new(width, height);
        if requested != Self::DIMENSIONS {
            return Err(MatrixError::UnrepresentableShape {
                requested,
                layout: Self::DIMENSIONS,
            });
        }
        Ok(())
    }
}

impl<T: Copy, const H: usize, const W: usize> Matrix<T> for ArrayStorage<T, H, W> {
    #[inline]
    fn width(&self) -> usize {
        W
    }

    #[inline]
    fn height(&self) -> usize {
        H
    }

    #[inline]
    fn get(&self, r: usize, c: usize) -> T {
        self.cells[r][c]
    }
}

impl<T: Element, const H: usize, const W: usize> Storage<T> for ArrayStorage<T, H, W> {
    type Cells = [[T; W]; H];
    type Transposed = ArrayStorage<T, W, H>;

    fn from_cells(cells: [[T; W]; H]) -> Self {
        Self::from_array(cells)
    }

    fn zeroed(width: usize, height: usize) -> Result<Self, MatrixError> {
        Self::check_shape(width, height)?;
        Ok(Self::from_array([[T::zero(); W]; H]))
    }

    fn zeroed_like(&self) -> Self {
        Self::from_array([[T::zero(); W]; H])
    }

    fn zeroed_transposed(&self) -> ArrayStorage<T, W, H> {
        ArrayStorage::from_array([[T::zero(); H]; W])
    }

    #[inline]
    fn set(&mut self, r: usize, c: usize, value: T) {
        self.cells[r][c] = value;
    }
}
