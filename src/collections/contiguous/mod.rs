//! Contiguous collection types. Currently just [`Array`], a heap allocated buffer with a size
//! fixed between explicit reallocations.
#![warn(missing_docs)]

pub mod array;

#[doc(inline)]
pub use array::Array;
