use crate::{Element, Matrix, MatrixError};

/// A backing layout for matrix cells.
///
/// This is the only surface the algorithms in [`routines`](crate::routines) rely on, so
/// each engine runs unchanged over every layout. Implementations must never hold a
/// ragged grid: every row has exactly `width()` cells.
pub trait Storage<T: Element>: Matrix<T> + Sized {
    /// The raw cells a caller hands over at construction.
    type Cells;

    /// The layout holding the transpose of `Self`.
    type Transposed: Storage<T>;

    /// Take ownership of `cells` without copying them.
    fn from_cells(cells: Self::Cells) -> Self;

    /// Zero-filled storage of the requested shape.
    ///
    /// Fails with [`MatrixError::InvalidDimensions`] if either dimension is zero, and with
    /// [`MatrixError::UnrepresentableShape`] if the layout cannot hold that shape.
    fn zeroed(width: usize, height: usize) -> Result<Self, MatrixError>;

    /// Zero-filled storage with the same shape as `self`.
    fn zeroed_like(&self) -> Self;

    /// Zero-filled storage with the shape of `self` transposed.
    fn zeroed_transposed(&self) -> Self::Transposed;

    fn set(&mut self, r: usize, c: usize, value: T);
}

/// Reject zero-sized shapes before any layout-specific checks.
#[inline]
pub(crate) const fn check_non_zero(width: usize, height: usize) -> Result<(), MatrixError> {
    if width == 0 || height == 0 {
        return Err(MatrixError::InvalidDimensions { width, height });
    }
    Ok(())
}
