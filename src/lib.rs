//! This crate is a small standard-library-style toolkit built around two pieces: a lazy,
//! pull-based iterator framework with chainable combinators, and a growable double-ended queue
//! backed by a circular buffer.
//!
//! # Purpose
//! Rust's [`Iterator`] already covers most of what [`iter`] does, and
//! [`VecDeque`](std::collections::VecDeque) covers [`RingDeque`](collections::circ::RingDeque).
//! The types here exist to spell those designs out by hand: every adapter is an explicit state
//! machine that advances its upstream by exactly one step per pull, and the ring buffer does its
//! own index arithmetic and relocation on growth.
//!
//! # Method
//! The pull protocol is [`Iterator::next`], with [`None`] meaning "done", and anything
//! [`IntoIterator`] counts as an iterable. [`LazyIter`](iter::LazyIter) wraps an iterator and
//! exposes the combinators as inherent methods, so they take priority over the [`Iterator`]
//! provided methods of the same name.
//!
//! ```
//! # use lazy_std::iter::IntoLazy;
//! let evens = (1..=10).into_lazy().filter(|x| x % 2 == 0).map(|x| x * 10).collect();
//! assert_eq!(evens, [20, 40, 60, 80, 100]);
//! ```
//!
//! # Error Handling
//! Lookups that can miss return [`Option`]s. Operations that take user input which can be
//! malformed (range notation, out of bounds writes) return [`Result`]s carrying strongly typed
//! errors, each of which implements [`Error`](std::error::Error). Capacity overflow and zero-sized
//! step or window arguments panic, because no reasonable caller wants to handle them at every call
//! site.
//!
//! # Dependencies
//! The only runtime dependency is `derive_more`, for the error types' boilerplate.
//!
//! # Concurrency
//! Nothing here is thread-aware. A [`LazyIter`](iter::LazyIter) exclusively owns its upstream, so
//! two consumers pulling from the same chain will observe interleaved results; don't share one.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "iter")]
pub mod iter;

pub(crate) mod util;
