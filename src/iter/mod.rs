//! A lazy, pull-based iterator framework.
//!
//! # Purpose
//! [`LazyIter`] wraps any iterator and exposes pipeline stages (`map`, `filter`, `window`,
//! `sort`, ...) and consumers (`fold`, `find`, `sum`, ...) as chainable methods. Each stage is
//! also available on its own from [`adapters`].
//!
//! # Method
//! Every stage is an explicit state machine holding its upstream and whatever state it needs.
//! Pulling from a stage advances its upstream by as little as possible to produce one item, so
//! nothing is computed until it is asked for and infinite sources like [`range_from`] or
//! [`cycle`](LazyIter::cycle) are fine as long as something downstream stops pulling.
//!
//! The one exception to step-by-step evaluation is a stage that can't produce anything before
//! seeing the whole upstream: [`reverse`](LazyIter::reverse) and [`sort`](LazyIter::sort) collect
//! everything as soon as they are called, then yield lazily from that.
//!
//! ```
//! # use lazy_std::iter::{parse_range, IntoLazy};
//! let squares = parse_range("1..=5")?.into_lazy().map(|x| x * x).reverse().collect();
//! assert_eq!(squares, [25, 16, 9, 4, 1]);
//! # Ok::<(), lazy_std::iter::RangeError>(())
//! ```

pub mod adapters;
mod lazy;
mod nested;
mod peekable;
mod range;
mod sum;
mod tests;

pub use adapters::chain_all;
pub use lazy::*;
pub use nested::*;
pub use peekable::*;
pub use range::*;
pub use sum::*;
