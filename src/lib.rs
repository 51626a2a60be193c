#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::unused_self)]
#![cfg_attr(not(feature = "std"), no_std)]

//! Fixed-capacity and dynamic sequence containers.
//!
//! [`FixedSeq`] is a block of exactly `N` slots whose length never changes; deletion and insertion are
//! simulated on top of it by shifting slots and writing the sentinel value (`T::default()`).
//! [`DynSeq`] is the growable counterpart with bounds-checked positional modifiers.

#[doc(hidden)]
pub extern crate alloc;

mod display;
mod dynamic;
mod error;
mod fixed;

pub use crate::dynamic::DynSeq;
pub use crate::error::OutOfRange;
pub use crate::fixed::FixedSeq;
