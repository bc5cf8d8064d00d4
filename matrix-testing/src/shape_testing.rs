use ib_matrix::immutable::ImmutableMatrix;
use ib_matrix::mutable::MutableMatrix;
use ib_matrix::{Dimensions, Element, Matrix, MatrixError, Storage};
use rand::SeedableRng;
use rand::distr::{Distribution, StandardUniform};
use rand::rngs::SmallRng;

use crate::{element, random_storage, storage_from_rows};

/// Elementwise operations between a `left` and a `right` shaped operand fail with
/// [`MatrixError::DimensionMismatch`] in both engines, and nothing is written.
pub fn test_dimension_mismatch<T, L, R>(left: Dimensions, right: Dimensions)
where
    T: Element,
    L: Storage<T>,
    R: Storage<T>,
    StandardUniform: Distribution<T>,
{
    assert_ne!(left, right);
    let mut rng = SmallRng::seed_from_u64(11);
    let a = ImmutableMatrix::<T, L>::from_storage(random_storage(&mut rng, left.width, left.height));
    let b: R = random_storage(&mut rng, right.width, right.height);
    let (a_before, b_before) = (a.to_rows(), b.to_rows());
    let expected = Some(MatrixError::DimensionMismatch { left, right });

    assert_eq!(a.add(&b).err(), expected);
    assert_eq!(a.subtract(&b).err(), expected);

    let mut m = MutableMatrix::<T, L>::new_empty(left.width, left.height).unwrap();
    m.add(&a).unwrap();
    assert_eq!(m.add(&b).err(), expected);
    assert_eq!(m.subtract(&b).err(), expected);

    assert_eq!(a.to_rows(), a_before);
    assert_eq!(m.to_rows(), a_before);
    assert_eq!(b.to_rows(), b_before);
}

/// A product whose inner dimensions disagree fails with
/// [`MatrixError::IncompatibleDimensions`] in both engines, and nothing is written.
pub fn test_incompatible_product<T, L, R>(left: Dimensions, right: Dimensions)
where
    T: Element,
    L: Storage<T>,
    R: Storage<T>,
    StandardUniform: Distribution<T>,
{
    assert_ne!(left.width, right.height);
    let mut rng = SmallRng::seed_from_u64(12);
    let a = ImmutableMatrix::<T, L>::from_storage(random_storage(&mut rng, left.width, left.height));
    let b: R = random_storage(&mut rng, right.width, right.height);
    let a_before = a.to_rows();
    let expected = Some(MatrixError::IncompatibleDimensions { left, right });

    assert_eq!(a.matrix_multiply(&b).err(), expected);

    let mut m = MutableMatrix::<T, L>::new_empty(left.width, left.height).unwrap();
    m.add(&a).unwrap();
    assert_eq!(m.matrix_multiply(&b).err(), expected);

    assert_eq!(a.to_rows(), a_before);
    assert_eq!(m.to_rows(), a_before);
}

/// Zero-sized matrices are rejected by both engines with a recoverable error.
pub fn test_invalid_empty<T: Element, S: Storage<T>>() {
    for (width, height) in [(0, 5), (5, 0), (0, 0)] {
        let expected = Some(MatrixError::InvalidDimensions { width, height });
        assert_eq!(
            MutableMatrix::<T, S>::new_empty(width, height).err(),
            expected
        );
        assert_eq!(
            ImmutableMatrix::<T, S>::new_empty(width, height).err(),
            expected
        );
    }
}

/// Hand-checked `2 x 2` results, for layouts that can hold a `2 x 2` matrix.
pub fn test_square_scenarios<T: Element, S: Storage<T, Transposed = S>>() {
    let a: S = storage_from_rows(&[&[1, 2], &[3, 4]]);
    let b: S = storage_from_rows(&[&[5, 6], &[7, 8]]);
    let product: S = storage_from_rows(&[&[19, 22], &[43, 50]]);
    let tripled: S = storage_from_rows(&[&[3, 6], &[9, 12]]);
    let transposed: S = storage_from_rows(&[&[1, 3], &[2, 4]]);

    let immutable = ImmutableMatrix::<T, S>::from_storage(a);
    assert!(immutable.matrix_multiply(&b).unwrap().equals(&product));
    assert!(immutable.scalar_multiply(element(3)).equals(&tripled));
    assert!(immutable.transpose().equals(&transposed));

    let mut mutable = MutableMatrix::<T, S>::new_empty(2, 2).unwrap();
    mutable.add(&immutable).unwrap().matrix_multiply(&b).unwrap();
    assert!(mutable.equals(&product));

    mutable.subtract(&product).unwrap().add(&immutable).unwrap();
    mutable.scalar_multiply(element(3));
    assert!(mutable.equals(&tripled));

    mutable.subtract(&tripled).unwrap().add(&immutable).unwrap();
    mutable.transpose();
    assert!(mutable.equals(&transposed));
}
