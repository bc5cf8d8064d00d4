use ib_matrix::fixed::ArrayStorage;
use ib_matrix::immutable::ImmutableRowMatrix;
use ib_matrix::mutable::MutableRowMatrix;
use ib_matrix::rows::RowStorage;
use ib_matrix::{Dimensions, Matrix};
use ib_matrix_testing::{
    test_dimension_mismatch, test_equals_across_layouts, test_incompatible_product,
    test_matrix_engines, test_multiply_chain_associativity, test_square_matrix_engines,
    test_square_scenarios, test_transpose_in_place,
};

test_square_matrix_engines!(square_i64, i64, ib_matrix::rows::RowStorage<i64>, 16);
test_square_matrix_engines!(square_i32, i32, ib_matrix::rows::RowStorage<i32>, 7);
test_square_matrix_engines!(square_i8, i8, ib_matrix::rows::RowStorage<i8>, 5);
test_matrix_engines!(wide_i64, i64, ib_matrix::rows::RowStorage<i64>, 9, 4);
test_matrix_engines!(tall_i16, i16, ib_matrix::rows::RowStorage<i16>, 1, 6);

#[test]
fn square_scenarios() {
    test_square_scenarios::<i64, RowStorage<i64>>();
    test_square_scenarios::<i8, RowStorage<i8>>();
}

#[test]
fn elementwise_shape_mismatch() {
    test_dimension_mismatch::<i64, RowStorage<i64>, RowStorage<i64>>(
        Dimensions::new(3, 2),
        Dimensions::new(2, 3),
    );
    test_dimension_mismatch::<i64, RowStorage<i64>, ArrayStorage<i64, 2, 2>>(
        Dimensions::new(3, 2),
        Dimensions::new(2, 2),
    );
}

#[test]
fn product_shape_mismatch() {
    test_incompatible_product::<i64, RowStorage<i64>, RowStorage<i64>>(
        Dimensions::new(3, 2),
        Dimensions::new(2, 2),
    );
    test_incompatible_product::<i32, RowStorage<i32>, RowStorage<i32>>(
        Dimensions::new(4, 1),
        Dimensions::new(1, 3),
    );
}

#[test]
fn rectangular_transpose_in_place() {
    test_transpose_in_place::<i64, RowStorage<i64>>(3, 2);
    test_transpose_in_place::<i64, RowStorage<i64>>(2, 3);
    test_transpose_in_place::<i16, RowStorage<i16>>(1, 6);
}

#[test]
fn rectangular_chain_associativity() {
    test_multiply_chain_associativity::<i64, RowStorage<i64>>(2, 3, 4, 1);
    test_multiply_chain_associativity::<i64, RowStorage<i64>>(5, 1, 3, 2);
    test_multiply_chain_associativity::<i8, RowStorage<i8>>(1, 7, 2, 6);
}

#[test]
fn equals_against_fixed_layout() {
    test_equals_across_layouts::<i64, RowStorage<i64>, ArrayStorage<i64, 3, 4>>(4, 3);
}

#[test]
fn rectangular_products() {
    let m1 = vec![vec![2i64, 3, 4], vec![1, 0, 0]];
    let m2 = vec![vec![0i64, 1000], vec![1, 100], vec![0, 10]];
    let column = vec![vec![0i64], vec![1], vec![0]];
    let row = vec![vec![2i64, 3, 4]];

    let cases = [
        (&m1, &m2, vec![vec![3i64, 2340], vec![0, 1000]]),
        (&row, &column, vec![vec![3]]),
        (&m1, &column, vec![vec![3], vec![0]]),
        (&row, &m2, vec![vec![3, 2340]]),
    ];
    for (lhs, rhs, expected) in cases {
        let rhs = ImmutableRowMatrix::new(rhs.clone());

        let product = ImmutableRowMatrix::new(lhs.clone())
            .matrix_multiply(&rhs)
            .unwrap();
        assert_eq!(product.to_rows(), expected);

        let mut receiver = MutableRowMatrix::new(lhs.clone());
        receiver.matrix_multiply(&rhs).unwrap();
        assert_eq!(receiver.to_rows(), expected);
    }
}

#[test]
fn overflow_wraps_in_both_engines() {
    let max = vec![vec![i64::MAX]];
    let one = ImmutableRowMatrix::new(vec![vec![1i64]]);

    let sum = ImmutableRowMatrix::new(max.clone()).add(&one).unwrap();
    assert_eq!(sum.to_rows(), vec![vec![i64::MIN]]);

    let mut receiver = MutableRowMatrix::new(max);
    receiver.add(&one).unwrap();
    assert_eq!(receiver.to_rows(), vec![vec![i64::MIN]]);
}
