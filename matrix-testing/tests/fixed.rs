use ib_matrix::fixed::ArrayStorage;
use ib_matrix::immutable::{ImmutableArrayMatrix, ImmutableMatrix};
use ib_matrix::mutable::MutableArrayMatrix;
use ib_matrix::rows::RowStorage;
use ib_matrix::{Dimensions, Matrix, MatrixError};
use ib_matrix_testing::{
    random_storage, test_dimension_mismatch, test_equals_across_layouts,
    test_incompatible_product, test_matrix_engines, test_square_matrix_engines,
    test_square_scenarios,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;

test_square_matrix_engines!(square_i64, i64, ib_matrix::fixed::ArrayStorage<i64, 16, 16>, 16);
test_square_matrix_engines!(square_i32, i32, ib_matrix::fixed::ArrayStorage<i32, 7, 7>, 7);
test_square_matrix_engines!(square_i8, i8, ib_matrix::fixed::ArrayStorage<i8, 5, 5>, 5);
test_matrix_engines!(wide_i64, i64, ib_matrix::fixed::ArrayStorage<i64, 4, 9>, 9, 4);
test_matrix_engines!(tall_i16, i16, ib_matrix::fixed::ArrayStorage<i16, 6, 1>, 1, 6);

#[test]
fn square_scenarios() {
    test_square_scenarios::<i64, ArrayStorage<i64, 2, 2>>();
    test_square_scenarios::<i16, ArrayStorage<i16, 2, 2>>();
}

#[test]
fn elementwise_shape_mismatch() {
    test_dimension_mismatch::<i64, ArrayStorage<i64, 2, 3>, ArrayStorage<i64, 3, 2>>(
        Dimensions::new(3, 2),
        Dimensions::new(2, 3),
    );
    test_dimension_mismatch::<i64, ArrayStorage<i64, 2, 2>, RowStorage<i64>>(
        Dimensions::new(2, 2),
        Dimensions::new(2, 3),
    );
}

#[test]
fn product_shape_mismatch() {
    test_incompatible_product::<i64, ArrayStorage<i64, 2, 2>, ArrayStorage<i64, 1, 3>>(
        Dimensions::new(2, 2),
        Dimensions::new(3, 1),
    );
}

#[test]
fn equals_against_row_layout() {
    test_equals_across_layouts::<i64, ArrayStorage<i64, 3, 4>, RowStorage<i64>>(4, 3);
}

#[test]
fn rectangular_products() {
    let m1 = ImmutableArrayMatrix::<i64, 2, 3>::new([[2, 3, 4], [1, 0, 0]]);
    let row = ImmutableArrayMatrix::<i64, 1, 3>::new([[2, 3, 4]]);
    let m2 = ArrayStorage::from_array([[0i64, 1000], [1, 100], [0, 10]]);
    let column = ArrayStorage::from_array([[0i64], [1], [0]]);

    let square: ImmutableArrayMatrix<i64, 2, 2> = m1.matrix_multiply_fixed(&m2);
    assert_eq!(square.storage().as_array(), &[[3, 2340], [0, 1000]]);
    let dot: ImmutableArrayMatrix<i64, 1, 1> = row.matrix_multiply_fixed(&column);
    assert_eq!(dot.storage().as_array(), &[[3]]);
    let narrow: ImmutableArrayMatrix<i64, 2, 1> = m1.matrix_multiply_fixed(&column);
    assert_eq!(narrow.storage().as_array(), &[[3], [0]]);
    let wide: ImmutableArrayMatrix<i64, 1, 2> = row.matrix_multiply_fixed(&m2);
    assert_eq!(wide.storage().as_array(), &[[3, 2340]]);

    // Operands are untouched and agree with the dynamic layout.
    assert_eq!(m1.storage().as_array(), &[[2, 3, 4], [1, 0, 0]]);
    let dynamic = ImmutableMatrix::<i64, RowStorage<i64>>::new(m1.to_rows());
    assert!(dynamic.matrix_multiply(&m2).unwrap().equals(&square));
}

#[test]
fn rectangular_chain_associativity() {
    let mut rng = SmallRng::seed_from_u64(21);
    let a = ImmutableArrayMatrix::<i64, 2, 3>::from_storage(random_storage(&mut rng, 3, 2));
    let b: ArrayStorage<i64, 3, 4> = random_storage(&mut rng, 4, 3);
    let c: ArrayStorage<i64, 4, 1> = random_storage(&mut rng, 1, 4);

    let left = a.matrix_multiply_fixed(&b).matrix_multiply_fixed(&c);
    let bc = ImmutableArrayMatrix::<i64, 3, 4>::from_storage(b).matrix_multiply_fixed(&c);
    let right = a.matrix_multiply_fixed(bc.storage());
    assert_eq!(left.storage(), right.storage());
}

#[test]
fn mutable_product_keeps_the_receiver_layout() {
    let mut square = MutableArrayMatrix::<i64, 2, 2>::new([[1, 2], [3, 4]]);
    let column = ArrayStorage::from_array([[1i64], [1]]);
    assert_eq!(
        square.matrix_multiply(&column).err(),
        Some(MatrixError::UnrepresentableShape {
            requested: Dimensions::new(1, 2),
            layout: Dimensions::new(2, 2),
        })
    );
    assert_eq!(square.storage().as_array(), &[[1, 2], [3, 4]]);

    let other = ArrayStorage::from_array([[5i64, 6], [7, 8]]);
    square.matrix_multiply(&other).unwrap();
    assert_eq!(square.storage().as_array(), &[[19, 22], [43, 50]]);
}

#[test]
fn transpose_moves_between_fixed_layouts() {
    let wide = ImmutableArrayMatrix::<i32, 2, 3>::new([[1, 2, 3], [4, 5, 6]]);
    let tall: ImmutableArrayMatrix<i32, 3, 2> = wide.transpose();
    assert_eq!(tall.storage().as_array(), &[[1, 4], [2, 5], [3, 6]]);
    assert!(tall.transpose().equals(&wide));
}
