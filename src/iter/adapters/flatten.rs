use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::vec;

use super::{map, Map};
use crate::iter::Nested;

/// Flattens one level of nesting. See [`flat`].
pub struct Flatten<I>
where
    I: Iterator,
    I::Item: IntoIterator,
{
    pub(crate) upstream: I,
    pub(crate) current: Option<<I::Item as IntoIterator>::IntoIter>,
}

/// Yields every element of every item of `iterable`, in order. Each inner iterable is only
/// started once the previous one is exhausted.
///
/// Strings don't implement [`IntoIterator`], so they are never split into characters.
///
/// # Examples
/// ```
/// # use lazy_std::iter::adapters::flat;
/// let flat: Vec<_> = flat([vec![1, 2], vec![3], vec![]]).collect();
/// assert_eq!(flat, [1, 2, 3]);
/// ```
pub fn flat<I>(iterable: I) -> Flatten<I::IntoIter>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    Flatten {
        upstream: iterable.into_iter(),
        current: None,
    }
}

impl<I> Iterator for Flatten<I>
where
    I: Iterator,
    I::Item: IntoIterator,
{
    type Item = <I::Item as IntoIterator>::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(current) = &mut self.current {
                match current.next() {
                    Some(item) => return Some(item),
                    None => self.current = None,
                }
            }
            self.current = Some(self.upstream.next()?.into_iter());
        }
    }
}

impl<I> FusedIterator for Flatten<I>
where
    I: FusedIterator,
    I::Item: IntoIterator,
{
}

impl<I> Debug for Flatten<I>
where
    I: Iterator + Debug,
    I::Item: IntoIterator,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flatten").field("upstream", &self.upstream).finish_non_exhaustive()
    }
}

/// Maps then flattens one level. See [`flat_map`].
pub type FlatMap<I, F> = Flatten<Map<I, F>>;

/// Equivalent to [`map()`] followed by [`flat`].
pub fn flat_map<I, F, R>(iterable: I, f: F) -> FlatMap<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> R,
    R: IntoIterator,
{
    flat(map(iterable, f))
}

/// Flattens [`Nested`] values up to a depth chosen at runtime. See [`flat_depth`].
#[derive(Debug, Clone)]
pub struct FlattenDepth<I, T> {
    pub(crate) upstream: I,
    pub(crate) depth: usize,
    /// Lists currently being expanded, each with the depth still available to its items.
    pub(crate) stack: Vec<(vec::IntoIter<Nested<T>>, usize)>,
}

/// Recursively expands [`Nested::List`] items, descending at most `depth` levels. Lists found
/// below that depth, and all [`Nested::Atom`]s, are yielded whole. A depth of 0 yields the
/// upstream unchanged.
///
/// # Examples
/// ```
/// # use lazy_std::iter::Nested::{self, Atom, List};
/// # use lazy_std::iter::adapters::flat_depth;
/// let tree = [Atom(1), List(vec![Atom(2), List(vec![Atom(3)])])];
///
/// let once: Vec<_> = flat_depth(tree.clone(), 1).collect();
/// assert_eq!(once, [Atom(1), Atom(2), List(vec![Atom(3)])]);
///
/// let all: Vec<_> = flat_depth(tree, usize::MAX).collect();
/// assert_eq!(all, [Atom(1), Atom(2), Atom(3)]);
/// ```
pub fn flat_depth<I, T>(iterable: I, depth: usize) -> FlattenDepth<I::IntoIter, T>
where
    I: IntoIterator<Item = Nested<T>>,
{
    FlattenDepth {
        upstream: iterable.into_iter(),
        depth,
        stack: Vec::new(),
    }
}

impl<I, T> Iterator for FlattenDepth<I, T>
where
    I: Iterator<Item = Nested<T>>,
{
    type Item = Nested<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (item, depth) = match self.stack.last_mut() {
                Some((top, depth)) => {
                    let depth = *depth;
                    match top.next() {
                        Some(item) => (item, depth),
                        None => {
                            self.stack.pop();
                            continue;
                        },
                    }
                },
                None => (self.upstream.next()?, self.depth),
            };

            match item {
                Nested::List(items) if depth > 0 => self.stack.push((items.into_iter(), depth - 1)),
                item => return Some(item),
            }
        }
    }
}
