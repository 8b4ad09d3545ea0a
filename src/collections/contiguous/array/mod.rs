//! A module containing [`Array`].
//!
//! Borrowed iteration uses [`Iter`](std::slice::Iter) and [`IterMut`](std::slice::IterMut) from
//! [`std::slice`], through [`Deref`](std::ops::Deref).
//!
//! [`Array`] is also re-exported under the parent module.

mod array;

pub use array::*;
