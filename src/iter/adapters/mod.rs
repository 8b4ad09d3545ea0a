//! Standalone pipeline stages. Each function takes any [`IntoIterator`] plus its parameters and
//! returns a new iterator that does its work one pull at a time.
//!
//! These are what the chainable methods on [`LazyIter`](super::LazyIter) are built from, but
//! they work just as well on their own, or composed with [`Iterator`] methods.
//!
//! Most stages are fully lazy and hold nothing but their upstream and a closure or counter. The
//! exceptions own a buffer:
//! - [`window()`] and [`array_chunks()`] hold at most one window or chunk.
//! - [`cycle()`] remembers every upstream item.
//! - [`reverse()`] and [`sort()`] collect the whole upstream as soon as they are called.

mod array_chunks;
mod chain;
mod cycle;
mod enumerate;
mod filter;
mod flatten;
mod inspect;
mod map;
mod reverse;
mod scan;
mod sort;
mod step_by;
mod take;
mod window;
mod zip;

pub use array_chunks::*;
pub use chain::*;
pub use cycle::*;
pub use enumerate::*;
pub use filter::*;
pub use flatten::*;
pub use inspect::*;
pub use map::*;
pub use reverse::*;
pub use scan::*;
pub use sort::*;
pub use step_by::*;
pub use take::*;
pub use window::*;
pub use zip::*;
