//! Error types.

use core::fmt::{self, Display};

/// Result type with the `pake25519` crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Curve group operation errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Affine addition was asked to divide by zero: the two input points
    /// share a `u` coordinate, i.e. they are equal or inverses of each
    /// other. The chord law supports neither case.
    DivisionByZero,

    /// Scalar multiplication returned the all-zero encoding: the base point
    /// was low-order and the product is the group's neutral element, which
    /// has no affine representation.
    LowOrderPoint,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DivisionByZero => f.write_str("point addition divides by zero"),
            Error::LowOrderPoint => f.write_str("low order point"),
        }
    }
}

impl core::error::Error for Error {}
