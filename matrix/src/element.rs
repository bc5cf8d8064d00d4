use core::fmt::Debug;

use num_traits::{PrimInt, Signed, WrappingAdd, WrappingMul, WrappingSub};

/// A fixed-width signed integer usable as a matrix cell.
///
/// Arithmetic on cells goes through the wrapping operations, so sums and products that
/// overflow wrap around instead of being checked.
pub trait Element:
    PrimInt
    + Signed
    + WrappingAdd
    + WrappingSub
    + WrappingMul
    + Default
    + Debug
    + Send
    + Sync
    + 'static
{
}

impl<T> Element for T where
    T: PrimInt
        + Signed
        + WrappingAdd
        + WrappingSub
        + WrappingMul
        + Default
        + Debug
        + Send
        + Sync
        + 'static
{
}
