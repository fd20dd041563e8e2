//! General-purpose collection types.
//!
//! # Purpose
//! These types are written to learn about the data structures themselves, along with ownership,
//! boxing and iterators.

#[cfg(feature = "forward")]
pub mod forward;

#[cfg(feature = "forward")]
#[doc(inline)]
pub use forward::ForwardList;
