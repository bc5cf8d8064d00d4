//! Utilities for testing matrix engines and storage layouts.

#![no_std]

extern crate alloc;

mod engine_testing;
mod shape_testing;

pub use engine_testing::*;
use ib_matrix::{Element, Storage};
use rand::Rng;
use rand::distr::{Distribution, StandardUniform};
pub use shape_testing::*;

/// Convert a small literal into the element type under test.
///
/// # Panics
/// Panics if `value` does not fit in `T`.
pub fn element<T: Element>(value: i64) -> T {
    num_traits::cast(value).unwrap()
}

/// Random storage of layout `S` with the given shape.
///
/// # Panics
/// Panics if `S` cannot hold a `width x height` matrix.
pub fn random_storage<T, S, R>(rng: &mut R, width: usize, height: usize) -> S
where
    T: Element,
    S: Storage<T>,
    R: Rng + ?Sized,
    StandardUniform: Distribution<T>,
{
    let mut storage = S::zeroed(width, height).unwrap();
    for r in 0..height {
        for c in 0..width {
            storage.set(r, c, rng.random());
        }
    }
    storage
}

/// Storage of layout `S` holding the given rows.
///
/// # Panics
/// Panics if `rows` is empty or if `S` cannot hold its shape.
pub fn storage_from_rows<T: Element, S: Storage<T>>(rows: &[&[i64]]) -> S {
    let mut storage = S::zeroed(rows[0].len(), rows.len()).unwrap();
    for (r, row) in rows.iter().enumerate() {
        for (c, &value) in row.iter().enumerate() {
            storage.set(r, c, element(value));
        }
    }
    storage
}

/// Instantiate the checks that hold for every shape a layout can take.
#[macro_export]
macro_rules! test_matrix_engines {
    ($mod:ident, $t:ty, $storage:ty, $width:expr, $height:expr) => {
        mod $mod {
            #[test]
            fn add_subtract_roundtrip() {
                $crate::test_add_subtract_roundtrip::<$t, $storage>($width, $height);
            }

            #[test]
            fn transpose_involution() {
                $crate::test_transpose_involution::<$t, $storage>($width, $height);
            }

            #[test]
            fn immutable_operands_unchanged() {
                $crate::test_immutable_operands_unchanged::<$t, $storage>($width, $height);
            }

            #[test]
            fn scalar_multiply_scales_every_cell() {
                $crate::test_scalar_multiply::<$t, $storage>($width, $height);
            }

            #[test]
            fn invalid_empty() {
                $crate::test_invalid_empty::<$t, $storage>();
            }
        }
    };
}

/// Instantiate the full suite for a square `n x n` layout, including the checks that
/// need products and in-place transposes to stay in the same layout.
#[macro_export]
macro_rules! test_square_matrix_engines {
    ($mod:ident, $t:ty, $storage:ty, $n:expr) => {
        mod $mod {
            #[test]
            fn add_subtract_roundtrip() {
                $crate::test_add_subtract_roundtrip::<$t, $storage>($n, $n);
            }

            #[test]
            fn transpose_involution() {
                $crate::test_transpose_involution::<$t, $storage>($n, $n);
            }

            #[test]
            fn transpose_in_place() {
                $crate::test_transpose_in_place::<$t, $storage>($n, $n);
            }

            #[test]
            fn multiply_associativity() {
                $crate::test_multiply_associativity::<$t, $storage>($n);
            }

            #[test]
            fn immutable_operands_unchanged() {
                $crate::test_immutable_operands_unchanged::<$t, $storage>($n, $n);
            }

            #[test]
            fn mutable_identity_preserved() {
                $crate::test_mutable_identity_preserved::<$t, $storage>($n);
            }

            #[test]
            fn scalar_multiply_scales_every_cell() {
                $crate::test_scalar_multiply::<$t, $storage>($n, $n);
            }

            #[test]
            fn invalid_empty() {
                $crate::test_invalid_empty::<$t, $storage>();
            }
        }
    };
}
