use thiserror::Error;

use crate::Dimensions;

/// Failures reported by matrix construction and arithmetic.
///
/// Every variant is a deterministic function of the operand shapes; none is transient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Elementwise operands do not have the same width and height.
    #[error("dimension mismatch: cannot combine a {left} matrix with a {right} matrix elementwise")]
    DimensionMismatch { left: Dimensions, right: Dimensions },

    /// The left operand's width differs from the right operand's height.
    #[error(
        "incompatible dimensions: cannot multiply a {left} matrix by a {right} matrix, try transposing one first"
    )]
    IncompatibleDimensions { left: Dimensions, right: Dimensions },

    /// A matrix was requested with a zero width or height.
    #[error("invalid dimensions {width}x{height}: width and height must both be non-zero")]
    InvalidDimensions { width: usize, height: usize },

    /// A fixed layout was asked to hold a shape other than its own.
    #[error("a fixed {layout} layout cannot hold a {requested} matrix")]
    UnrepresentableShape {
        requested: Dimensions,
        layout: Dimensions,
    },
}
