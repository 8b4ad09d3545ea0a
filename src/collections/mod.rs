//! Collection types backing the rest of the crate.
//!
//! # Purpose
//! [`contiguous::Array`] is a fixed-size heap buffer that can be reallocated in place, and
//! [`circ::RingDeque`] builds a growable circular buffer on top of it.
//!
//! # Method
//! [`Array`](contiguous::Array) implements [`Deref<Target = [T]>`](std::ops::Deref) (and
//! DerefMut), which saves me from writing some of the more repetitive functionality. The ring
//! deque can't do that because its contents aren't contiguous, so it gets its own iterators.

#[cfg(feature = "circ")]
pub mod circ;
#[cfg(feature = "contiguous")]
pub mod contiguous;
