//! Errors reported by [`FixedCapacityVector`](crate::FixedCapacityVector) operations

use core::fmt;

/// The ways a vector operation can fail.
///
/// Both kinds are reported before the vector is touched, so a failed call leaves the contents
/// exactly as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Checked access asked for an index that is not below the current length.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The length of the vector at the time of the request.
        len: usize,
    },
    /// The operation would need to hold more than `capacity` elements at once.
    CapacityExceeded {
        /// The fixed capacity of the vector.
        capacity: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index out of range: the len is {len} but the index is {index}")
            }
            Self::CapacityExceeded { capacity } => {
                write!(f, "vector capacity exceeded: maximum {capacity} elements")
            }
        }
    }
}

impl core::error::Error for Error {}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, fmt: defmt::Formatter<'_>) {
        match self {
            Self::IndexOutOfRange { index, len } => {
                defmt::write!(fmt, "index out of range: len {=usize}, index {=usize}", len, index)
            }
            Self::CapacityExceeded { capacity } => {
                defmt::write!(fmt, "vector capacity exceeded: maximum {=usize}", capacity)
            }
        }
    }
}
