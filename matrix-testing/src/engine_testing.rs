use core::ptr;

use ib_matrix::immutable::ImmutableMatrix;
use ib_matrix::mutable::MutableMatrix;
use ib_matrix::{Dimensions, Element, Matrix, Storage};
use rand::SeedableRng;
use rand::distr::{Distribution, StandardUniform};
use rand::rngs::SmallRng;

use crate::{element, random_storage};

/// Adding then subtracting the same matrix gives back the original, in both engines.
pub fn test_add_subtract_roundtrip<T, S>(width: usize, height: usize)
where
    T: Element,
    S: Storage<T>,
    StandardUniform: Distribution<T>,
{
    let mut rng = SmallRng::seed_from_u64(1);
    let a = ImmutableMatrix::<T, S>::from_storage(random_storage(&mut rng, width, height));
    let b: S = random_storage(&mut rng, width, height);

    let back = a.add(&b).unwrap().subtract(&b).unwrap();
    assert!(back.equals(&a));

    let mut m = MutableMatrix::<T, S>::new_empty(width, height).unwrap();
    m.add(&a).unwrap().add(&b).unwrap().subtract(&b).unwrap();
    assert!(m.equals(&a));
}

pub fn test_transpose_involution<T, S>(width: usize, height: usize)
where
    T: Element,
    S: Storage<T>,
    StandardUniform: Distribution<T>,
{
    let mut rng = SmallRng::seed_from_u64(2);
    let a = ImmutableMatrix::<T, S>::from_storage(random_storage(&mut rng, width, height));

    let t = a.transpose();
    assert_eq!(t.dimensions(), a.dimensions().transposed());
    for r in 0..a.height() {
        for c in 0..a.width() {
            assert_eq!(t.get(c, r), a.get(r, c));
        }
    }
    assert!(t.transpose().equals(&a));
}

pub fn test_transpose_in_place<T, S>(width: usize, height: usize)
where
    T: Element,
    S: Storage<T, Transposed = S>,
    StandardUniform: Distribution<T>,
{
    let mut rng = SmallRng::seed_from_u64(3);
    let mut m = MutableMatrix::<T, S>::from_storage(random_storage(&mut rng, width, height));
    let (before, dims) = (m.to_rows(), m.dimensions());
    let addr: *const MutableMatrix<T, S> = &m;

    let handle = m.transpose();
    assert!(ptr::eq(handle, addr));
    assert_eq!(m.dimensions(), dims.transposed());
    for (r, row) in before.iter().enumerate() {
        for (c, &value) in row.iter().enumerate() {
            assert_eq!(m.get(c, r), value);
        }
    }

    m.transpose();
    assert_eq!(m.to_rows(), before);
}

/// `(a * b) * c == a * (b * c)` in both engines, for `n x n` operands.
pub fn test_multiply_associativity<T, S>(n: usize)
where
    T: Element,
    S: Storage<T>,
    StandardUniform: Distribution<T>,
{
    test_multiply_chain_associativity::<T, S>(n, n, n, n);
}

/// `(a * b) * c == a * (b * c)` in both engines, where `a` has `height` rows and
/// `inner` columns, `b` is `inner x middle` and `c` is `middle x width` (rows first).
///
/// Only layouts that can hold every partial product qualify, which for a fixed layout
/// means a square chain.
pub fn test_multiply_chain_associativity<T, S>(
    height: usize,
    inner: usize,
    middle: usize,
    width: usize,
) where
    T: Element,
    S: Storage<T>,
    StandardUniform: Distribution<T>,
{
    let mut rng = SmallRng::seed_from_u64(4);
    let a = ImmutableMatrix::<T, S>::from_storage(random_storage(&mut rng, inner, height));
    let b: S = random_storage(&mut rng, middle, inner);
    let c: S = random_storage(&mut rng, width, middle);

    let left = a.matrix_multiply(&b).unwrap().matrix_multiply(&c).unwrap();
    assert_eq!(left.dimensions(), Dimensions::new(width, height));
    let bc = ImmutableMatrix::<T, S>::from_storage(b)
        .matrix_multiply(&c)
        .unwrap();
    let right = a.matrix_multiply(&bc).unwrap();
    assert!(left.equals(&right));

    let mut m = MutableMatrix::<T, S>::new_empty(inner, height).unwrap();
    m.add(&a).unwrap().matrix_multiply(&bc).unwrap();
    assert!(m.equals(&left));
}

/// No immutable operation, successful or not, changes either operand.
pub fn test_immutable_operands_unchanged<T, S>(width: usize, height: usize)
where
    T: Element,
    S: Storage<T>,
    StandardUniform: Distribution<T>,
{
    let mut rng = SmallRng::seed_from_u64(5);
    let a = ImmutableMatrix::<T, S>::from_storage(random_storage(&mut rng, width, height));
    let b = ImmutableMatrix::<T, S>::from_storage(random_storage(&mut rng, width, height));
    let (a_before, b_before) = (a.to_rows(), b.to_rows());

    let _ = a.add(&b).unwrap();
    let _ = a.subtract(&b).unwrap();
    let _ = a.scalar_multiply(element(3));
    let _ = a.transpose();
    // Only defined for square operands; the failure path must not write either.
    let _ = a.matrix_multiply(&b);
    let _ = a.matrix_multiply(&b.transpose());

    assert_eq!(a.to_rows(), a_before);
    assert_eq!(b.to_rows(), b_before);
}

/// A chain of in-place operations hands back the receiver and leaves the same result
/// the immutable engine computes.
pub fn test_mutable_identity_preserved<T, S>(n: usize)
where
    T: Element,
    S: Storage<T, Transposed = S>,
    StandardUniform: Distribution<T>,
{
    let mut rng = SmallRng::seed_from_u64(6);
    let start = ImmutableMatrix::<T, S>::from_storage(random_storage(&mut rng, n, n));
    let other: S = random_storage(&mut rng, n, n);
    let three = element::<T>(3);

    let expected = start
        .add(&other)
        .unwrap()
        .scalar_multiply(three)
        .transpose()
        .matrix_multiply(&other)
        .unwrap()
        .subtract(&other)
        .unwrap();

    let mut m = MutableMatrix::<T, S>::new_empty(n, n).unwrap();
    m.add(&start).unwrap();
    let addr: *const MutableMatrix<T, S> = &m;
    let handle = m
        .add(&other)
        .unwrap()
        .scalar_multiply(three)
        .transpose()
        .matrix_multiply(&other)
        .unwrap()
        .subtract(&other)
        .unwrap();
    assert!(ptr::eq(handle, addr));
    assert!(m.equals(&expected));
}

/// Every cell is multiplied by the scalar, wrapping on overflow.
pub fn test_scalar_multiply<T, S>(width: usize, height: usize)
where
    T: Element,
    S: Storage<T>,
    StandardUniform: Distribution<T>,
{
    let mut rng = SmallRng::seed_from_u64(7);
    let a = ImmutableMatrix::<T, S>::from_storage(random_storage(&mut rng, width, height));
    let three = element::<T>(3);

    let scaled = a.scalar_multiply(three);
    let mut m = MutableMatrix::<T, S>::new_empty(width, height).unwrap();
    m.add(&a).unwrap().scalar_multiply(three);

    for r in 0..height {
        for c in 0..width {
            let expected = a.get(r, c).wrapping_mul(&three);
            assert_eq!(scaled.get(r, c), expected);
            assert_eq!(m.get(r, c), expected);
        }
    }

    let zero = a.scalar_multiply(T::zero());
    assert!((0..height).all(|r| (0..width).all(|c| zero.get(r, c) == T::zero())));
}

/// A matrix copied into another layout compares equal to the original, in both directions.
pub fn test_equals_across_layouts<T, A, B>(width: usize, height: usize)
where
    T: Element,
    A: Storage<T>,
    B: Storage<T>,
    StandardUniform: Distribution<T>,
{
    let mut rng = SmallRng::seed_from_u64(8);
    let a = ImmutableMatrix::<T, A>::from_storage(random_storage(&mut rng, width, height));

    let mut copy = MutableMatrix::<T, B>::new_empty(width, height).unwrap();
    copy.add(&a).unwrap();
    assert!(a.equals(&copy));
    assert!(copy.equals(&a));

    copy.scalar_multiply(element(2));
    if a.to_rows().iter().flatten().any(|&x| x != T::zero()) {
        assert!(!a.equals(&copy));
    }
}
