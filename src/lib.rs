//! A fixed capacity vector that never allocates
//!
//! [`FixedCapacityVector<T, N>`] reserves room for exactly `N` elements of `T` inside the value
//! itself. It can live on the stack or in a `static`, and offers the familiar resizable-array
//! API: indexing, iteration, insertion and erasure at any position.
//!
//! # Examples
//!
//! ```
//! use fixvec::{Error, FixedCapacityVector};
//!
//! let mut xs: FixedCapacityVector<u8, 4> = FixedCapacityVector::new();
//!
//! assert!(xs.push(0).is_ok());
//! assert!(xs.push(1).is_ok());
//! assert!(xs.push(2).is_ok());
//! assert!(xs.push(3).is_ok());
//! assert_eq!(xs.push(4), Err(Error::CapacityExceeded { capacity: 4 })); // full
//!
//! assert_eq!(xs.pop(), Some(3));
//! ```
//!
//! Elements can be inserted anywhere; everything after the insertion point shifts right.
//!
//! ```
//! use fixvec::FixedCapacityVector;
//!
//! let mut vec: FixedCapacityVector<i32, 10> = FixedCapacityVector::new();
//! vec.push(5).unwrap();
//! vec.insert_slice(1, &[2, 3, 5, 4, 4, 2, 5]).unwrap();
//!
//! assert_eq!(vec, [5, 2, 3, 5, 4, 4, 2, 5]);
//! assert_eq!(vec.len(), 8);
//! ```
//!
//! The [`fixvec!`] macro builds a vector from a list of values. Passing more values than the
//! capacity is rejected at compile time.
//!
//! ```
//! use fixvec::{fixvec, FixedCapacityVector};
//!
//! let v: FixedCapacityVector<u32, 4> = fixvec![1, 2, 3];
//! assert_eq!(v, [1, 2, 3]);
//! ```
//!
//! ``` compile_fail
//! use fixvec::{fixvec, FixedCapacityVector};
//!
//! let v: FixedCapacityVector<u32, 2> = fixvec![1, 2, 3];
//! ```
//!
//! # `Send`-ness
//!
//! Vectors of `Send`-able things are `Send`
//!
//! ```
//! use fixvec::FixedCapacityVector;
//!
//! struct IsSend;
//!
//! unsafe impl Send for IsSend {}
//!
//! fn is_send<T>() where T: Send {}
//!
//! is_send::<FixedCapacityVector<IsSend, 4>>();
//! ```
//!
//! Vectors of not `Send`-able things are *not* `Send`
//!
//! ``` compile_fail
//! use std::marker::PhantomData;
//! use fixvec::FixedCapacityVector;
//!
//! type NotSend = PhantomData<*const ()>;
//!
//! fn is_send<T>() where T: Send {}
//!
//! is_send::<FixedCapacityVector<NotSend, 4>>();
//! ```
//!
//! # Optional features
//!
//! - `serde`: (de)serialization as a sequence.
//! - `defmt`: `defmt::Format`, for logging vectors on embedded targets.
//! - `ufmt`: `ufmt_write::uWrite` for byte vectors.
//! - `zeroize`: `zeroize::Zeroize`.
//!
//! # Minimum Supported Rust Version (MSRV)
//!
//! This crate is guaranteed to compile on stable Rust 1.83 and up with its default set of
//! features. It *might* compile on older versions but that may change in any new patch release.

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![deny(rust_2018_compatibility)]
#![deny(rust_2018_idioms)]

pub use error::Error;
pub use vec::{FixedCapacityVector, IntoIter};

/// Creates a [`FixedCapacityVector`] containing the arguments.
///
/// The capacity comes from the surrounding type annotation. Supplying more elements than the
/// capacity is a compile-time error.
///
/// ```
/// use fixvec::{fixvec, FixedCapacityVector};
///
/// let v: FixedCapacityVector<_, 8> = fixvec!['a', 'b'];
/// assert_eq!(v.len(), 2);
/// assert_eq!(v.capacity(), 8);
///
/// let empty: FixedCapacityVector<u8, 8> = fixvec![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! fixvec {
    () => {
        $crate::FixedCapacityVector::new()
    };
    ($($x:expr),+ $(,)?) => {
        $crate::FixedCapacityVector::from_array([$($x),+])
    };
}

#[macro_use]
#[cfg(test)]
mod test_helpers;

mod error;
mod slice;
pub mod vec;

#[cfg(feature = "serde")]
mod de;
#[cfg(feature = "serde")]
mod ser;

#[cfg(feature = "defmt")]
mod defmt;

#[cfg(feature = "ufmt")]
mod ufmt;
