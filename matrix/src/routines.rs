//! The arithmetic shared by both engines.
//!
//! Each operation comes in two flavours: an `*_in_place` routine that overwrites a
//! storage it is handed, and a routine that leaves its inputs alone and fills a freshly
//! zeroed storage instead. Shape checks always run before any cell is written.

use tracing::{debug, instrument};

use crate::fixed::ArrayStorage;
use crate::{Element, Matrix, MatrixError, Storage};

/// Check that `left` and `right` can be combined elementwise.
pub fn check_same_shape<T, L, R>(left: &L, right: &R) -> Result<(), MatrixError>
where
    L: Matrix<T> + ?Sized,
    R: Matrix<T> + ?Sized,
{
    let (left, right) = (left.dimensions(), right.dimensions());
    if left != right {
        debug!(%left, %right, "elementwise operands differ in shape");
        return Err(MatrixError::DimensionMismatch { left, right });
    }
    Ok(())
}

/// Check that `left * right` is defined.
pub fn check_product_shape<T, L, R>(left: &L, right: &R) -> Result<(), MatrixError>
where
    L: Matrix<T> + ?Sized,
    R: Matrix<T> + ?Sized,
{
    let (left, right) = (left.dimensions(), right.dimensions());
    if left.width != right.height {
        debug!(%left, %right, "product operands have mismatched inner dimensions");
        return Err(MatrixError::IncompatibleDimensions { left, right });
    }
    Ok(())
}

#[inline]
fn zip_assign<T, S, M>(dst: &mut S, rhs: &M, op: impl Fn(T, T) -> T)
where
    T: Element,
    S: Storage<T>,
    M: Matrix<T> + ?Sized,
{
    for r in 0..dst.height() {
        for c in 0..dst.width() {
            dst.set(r, c, op(dst.get(r, c), rhs.get(r, c)));
        }
    }
}

#[inline]
fn zip_into<T, S, M>(lhs: &S, rhs: &M, op: impl Fn(T, T) -> T) -> S
where
    T: Element,
    S: Storage<T>,
    M: Matrix<T> + ?Sized,
{
    let mut out = lhs.zeroed_like();
    for r in 0..lhs.height() {
        for c in 0..lhs.width() {
            out.set(r, c, op(lhs.get(r, c), rhs.get(r, c)));
        }
    }
    out
}

/// `dst += rhs`, cell by cell.
pub fn add_in_place<T, S, M>(dst: &mut S, rhs: &M) -> Result<(), MatrixError>
where
    T: Element,
    S: Storage<T>,
    M: Matrix<T> + ?Sized,
{
    check_same_shape(dst, rhs)?;
    zip_assign(dst, rhs, |a, b| a.wrapping_add(&b));
    Ok(())
}

/// `lhs + rhs` in new storage.
pub fn add<T, S, M>(lhs: &S, rhs: &M) -> Result<S, MatrixError>
where
    T: Element,
    S: Storage<T>,
    M: Matrix<T> + ?Sized,
{
    check_same_shape(lhs, rhs)?;
    Ok(zip_into(lhs, rhs, |a, b| a.wrapping_add(&b)))
}

/// `dst -= rhs`, cell by cell.
pub fn sub_in_place<T, S, M>(dst: &mut S, rhs: &M) -> Result<(), MatrixError>
where
    T: Element,
    S: Storage<T>,
    M: Matrix<T> + ?Sized,
{
    check_same_shape(dst, rhs)?;
    zip_assign(dst, rhs, |a, b| a.wrapping_sub(&b));
    Ok(())
}

/// `lhs - rhs` in new storage.
pub fn sub<T, S, M>(lhs: &S, rhs: &M) -> Result<S, MatrixError>
where
    T: Element,
    S: Storage<T>,
    M: Matrix<T> + ?Sized,
{
    check_same_shape(lhs, rhs)?;
    Ok(zip_into(lhs, rhs, |a, b| a.wrapping_sub(&b)))
}

pub fn scale_in_place<T: Element, S: Storage<T>>(dst: &mut S, scalar: T) {
    for r in 0..dst.height() {
        for c in 0..dst.width() {
            dst.set(r, c, dst.get(r, c).wrapping_mul(&scalar));
        }
    }
}

pub fn scale<T: Element, S: Storage<T>>(src: &S, scalar: T) -> S {
    let mut out = src.zeroed_like();
    for r in 0..src.height() {
        for c in 0..src.width() {
            out.set(r, c, src.get(r, c).wrapping_mul(&scalar));
        }
    }
    out
}

/// Copy `src` into new storage with rows and columns swapped.
#[instrument(level = "debug", skip_all, fields(dims = %src.dimensions()))]
pub fn transpose<T: Element, S: Storage<T>>(src: &S) -> S::Transposed {
    let mut out = src.zeroed_transposed();
    for r in 0..src.height() {
        for c in 0..src.width() {
            out.set(c, r, src.get(r, c));
        }
    }
    out
}

/// The matrix product `lhs * rhs`, computed with the schoolbook triple loop into new
/// storage of layout `S`.
///
/// Besides [`MatrixError::IncompatibleDimensions`], this fails with
/// [`MatrixError::UnrepresentableShape`] when `S` is a fixed layout that cannot hold a
/// `rhs.width() x lhs.height()` result.
#[instrument(level = "debug", skip_all, fields(lhs = %lhs.dimensions(), rhs = %rhs.dimensions()))]
pub fn product<T, S, M>(lhs: &S, rhs: &M) -> Result<S, MatrixError>
where
    T: Element,
    S: Storage<T>,
    M: Matrix<T> + ?Sized,
{
    check_product_shape(lhs, rhs)?;
    let mut out = S::zeroed(rhs.width(), lhs.height())?;
    multiply_into(lhs, rhs, &mut out);
    Ok(out)
}

/// The product of two fixed layouts, in the fixed `H x K` layout their shapes call for.
///
/// The inner dimensions agree by construction, so this cannot fail.
#[instrument(level = "debug", skip_all, fields(lhs = %lhs.dimensions(), rhs = %rhs.dimensions()))]
pub fn product_fixed<T, const H: usize, const W: usize, const K: usize>(
    lhs: &ArrayStorage<T, H, W>,
    rhs: &ArrayStorage<T, W, K>,
) -> ArrayStorage<T, H, K>
where
    T: Element,
{
    let mut out = ArrayStorage::from_array([[T::zero(); K]; H]);
    multiply_into(lhs, rhs, &mut out);
    out
}

fn multiply_into<T, L, M, O>(lhs: &L, rhs: &M, out: &mut O)
where
    T: Element,
    L: Matrix<T> + ?Sized,
    M: Matrix<T> + ?Sized,
    O: Storage<T>,
{
    for i in 0..lhs.height() {
        for j in 0..rhs.width() {
            let mut acc = T::zero();
            for k in 0..lhs.width() {
                acc = acc.wrapping_add(&lhs.get(i, k).wrapping_mul(&rhs.get(k, j)));
            }
            out.set(i, j, acc);
        }
    }
}
