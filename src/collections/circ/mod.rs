//! Circular collection types. Namely [`RingDeque`], a growable double-ended queue stored in a
//! wrapping buffer.
//!
//! The owned and borrowed iterators over a [`RingDeque`] live alongside it.

mod iter;
mod ring_deque;
mod tests;

pub use iter::*;
pub use ring_deque::*;
