use crate::immutable::ImmutableMatrix;
use crate::mutable::MutableMatrix;
use crate::{Element, Matrix, MatrixError, Storage};

/// The arithmetic contract shared by both engines.
///
/// It is implemented by the handle each engine hands out rather than by the matrix
/// itself: `&mut MutableMatrix` answers with the same handle after updating it, while
/// `&ImmutableMatrix` answers with a freshly allocated matrix. Code generic over
/// `MatrixOps` therefore measures whichever discipline it is given.
pub trait MatrixOps<T: Element>: Matrix<T> + Sized {
    /// What elementwise operations, scaling and products produce.
    type Output: Matrix<T>;

    /// What [`transpose`](Self::transpose) produces.
    type Transposed: Matrix<T>;

    /// Elementwise sum. Fails with [`MatrixError::DimensionMismatch`] on differing shapes.
    fn add<M: Matrix<T> + ?Sized>(self, other: &M) -> Result<Self::Output, MatrixError>;

    /// Elementwise difference. Fails with [`MatrixError::DimensionMismatch`] on differing
    /// shapes.
    fn subtract<M: Matrix<T> + ?Sized>(self, other: &M) -> Result<Self::Output, MatrixError>;

    fn scalar_multiply(self, scalar: T) -> Self::Output;

    fn transpose(self) -> Self::Transposed;

    /// Matrix product. Fails with [`MatrixError::IncompatibleDimensions`] unless
    /// `self.width() == other.height()`.
    fn matrix_multiply<M: Matrix<T> + ?Sized>(self, other: &M)
    -> Result<Self::Output, MatrixError>;
}

impl<'a, T, S> MatrixOps<T> for &'a mut MutableMatrix<T, S>
where
    T: Element,
    S: Storage<T, Transposed = S>,
{
    type Output = &'a mut MutableMatrix<T, S>;
    type Transposed = &'a mut MutableMatrix<T, S>;

    #[inline]
    fn add<M: Matrix<T> + ?Sized>(self, other: &M) -> Result<Self::Output, MatrixError> {
        MutableMatrix::add(self, other)
    }

    #[inline]
    fn subtract<M: Matrix<T> + ?Sized>(self, other: &M) -> Result<Self::Output, MatrixError> {
        MutableMatrix::subtract(self, other)
    }

    #[inline]
    fn scalar_multiply(self, scalar: T) -> Self::Output {
        MutableMatrix::scalar_multiply(self, scalar)
    }

    #[inline]
    fn transpose(self) -> Self::Transposed {
        MutableMatrix::transpose(self)
    }

    #[inline]
    fn matrix_multiply<M: Matrix<T> + ?Sized>(
        self,
        other: &M,
    ) -> Result<Self::Output, MatrixError> {
        MutableMatrix::matrix_multiply(self, other)
    }
}

impl<'a, T, S> MatrixOps<T> for &'a ImmutableMatrix<T, S>
where
    T: Element,
    S: Storage<T>,
{
    type Output = ImmutableMatrix<T, S>;
    type Transposed = ImmutableMatrix<T, S::Transposed>;

    #[inline]
    fn add<M: Matrix<T> + ?Sized>(self, other: &M) -> Result<Self::Output, MatrixError> {
        ImmutableMatrix::add(self, other)
    }

    #[inline]
    fn subtract<M: Matrix<T> + ?Sized>(self, other: &M) -> Result<Self::Output, MatrixError> {
        ImmutableMatrix::subtract(self, other)
    }

    #[inline]
    fn scalar_multiply(self, scalar: T) -> Self::Output {
        ImmutableMatrix::scalar_multiply(self, scalar)
    }

    #[inline]
    fn transpose(self) -> Self::Transposed {
        ImmutableMatrix::transpose(self)
    }

    #[inline]
    fn matrix_multiply<M: Matrix<T> + ?Sized>(
        self,
        other: &M,
    ) -> Result<Self::Output, MatrixError> {
        ImmutableMatrix::matrix_multiply(self, other)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;
    use crate::immutable::ImmutableRowMatrix;
    use crate::mutable::MutableRowMatrix;

    /// One step of a benchmark loop, written once for both engines.
    fn triple<H: MatrixOps<i64>>(handle: H) -> Vec<Vec<i64>> {
        handle.scalar_multiply(3).to_rows()
    }

    #[test]
    fn test_engines_agree_through_the_contract() {
        let cells = vec![vec![1i64, 2], vec![3, 4]];
        let mut mutable = MutableRowMatrix::new(cells.clone());
        let immutable = ImmutableRowMatrix::new(cells);

        let from_mutable = triple(&mut mutable);
        let from_immutable = triple(&immutable);
        assert_eq!(from_mutable, from_immutable);
        assert_eq!(from_mutable, vec![vec![3, 6], vec![9, 12]]);

        // Only the mutable engine kept the result.
        assert_eq!(mutable.to_rows(), vec![vec![3, 6], vec![9, 12]]);
        assert_eq!(immutable.to_rows(), vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_contract_reports_shape_errors() {
        let wide = ImmutableRowMatrix::new(vec![vec![1i64, 2, 3], vec![4, 5, 6]]);
        let tall = ImmutableRowMatrix::new(vec![vec![1i64, 2], vec![3, 4], vec![5, 6]]);
        let mut mutable = MutableRowMatrix::new(wide.to_rows());

        assert!(matches!(
            (&wide).add(&tall),
            Err(MatrixError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            (&mut mutable).subtract(&tall),
            Err(MatrixError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            (&wide).matrix_multiply(&wide),
            Err(MatrixError::IncompatibleDimensions { .. })
        ));
        assert_eq!(
            MatrixOps::transpose(&wide).to_rows(),
            vec![vec![1, 4], vec![2, 5], vec![3, 6]]
        );
    }
}
