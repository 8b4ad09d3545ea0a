use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::iter::FusedIterator;

use super::adapters::{self, *};
use super::{Nested, Peekable, Summable};

/// A wrapper around a single iterator, exposing lazy, chainable pipeline stages and eager
/// consumers as methods.
///
/// A LazyIter exclusively owns its upstream. Chain methods like [`map`](LazyIter::map) take the
/// LazyIter by value and wrap its upstream in the matching stage from [`adapters`], so nothing
/// is pulled until the result is consumed. Consumers like [`fold`](LazyIter::fold) pull to
/// exhaustion, and a few like [`find`](LazyIter::find) stop as soon as they have an answer.
///
/// These methods are inherent, so they take priority over the [`Iterator`] methods of the same
/// name. In particular, [`collect`](LazyIter::collect) always returns a [`Vec`]; use
/// [`collect_into`](LazyIter::collect_into) for other containers.
///
/// LazyIter also tracks an advisory done flag, see [`is_done`](LazyIter::is_done).
///
/// # Examples
/// ```
/// # use lazy_std::iter::lazy;
/// let mut seen = Vec::new();
/// let mut iter = lazy(1..)
///     .inspect(|x| seen.push(*x))
///     .filter(|x| x % 3 == 0)
///     .take(2);
///
/// assert_eq!(iter.next(), Some(3));
/// assert_eq!(iter.next(), Some(6));
/// assert_eq!(iter.next(), None);
/// drop(iter);
/// assert_eq!(seen, [1, 2, 3, 4, 5, 6]);
/// ```
#[derive(Debug, Clone)]
pub struct LazyIter<I> {
    pub(crate) upstream: I,
    pub(crate) done: bool,
}

/// The result of [`LazyIter::next_chunk`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextChunk<T> {
    /// The items pulled, in order.
    pub items: Vec<T>,
    /// Whether the upstream ran out before the chunk was filled.
    pub done: bool,
}

impl<I: Iterator> LazyIter<I> {
    /// Wraps `iterable` in a LazyIter. Nothing is pulled.
    pub fn new<T: IntoIterator<IntoIter = I>>(iterable: T) -> LazyIter<I> {
        LazyIter {
            upstream: iterable.into_iter(),
            done: false,
        }
    }

    /// Returns whether the most recent pull found the upstream exhausted.
    ///
    /// This is advisory only: it describes the last pull, not the next one. A LazyIter that
    /// hasn't been pulled yet isn't done, even if its upstream is empty.
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Adds one item of look-ahead. See [`LazyIter::peek`] and [`LazyIter::take_while_peek`].
    pub fn peekable(self) -> LazyIter<Peekable<I>> {
        LazyIter {
            upstream: Peekable::new(self.upstream),
            done: self.done,
        }
    }

    /// Pulls up to `n` items immediately. If the upstream runs out first, the chunk holds
    /// everything that was left and is marked done.
    ///
    /// # Examples
    /// ```
    /// # use lazy_std::iter::IntoLazy;
    /// let mut iter = (1..=8).into_lazy();
    /// assert_eq!(iter.next_chunk(3).items, [1, 2, 3]);
    /// let rest = iter.next_chunk(10);
    /// assert_eq!(rest.items, [4, 5, 6, 7, 8]);
    /// assert!(rest.done);
    /// ```
    pub fn next_chunk(&mut self, n: usize) -> NextChunk<I::Item> {
        let mut items = Vec::with_capacity(n.min(self.upstream.size_hint().0));
        for _ in 0..n {
            match self.next() {
                Some(item) => items.push(item),
                None => {
                    return NextChunk {
                        items,
                        done: true,
                    };
                },
            }
        }

        NextChunk {
            items,
            done: false,
        }
    }

    /// Pulls and discards up to `n` items, stopping early if the upstream runs out.
    pub fn advance_by(&mut self, n: usize) -> &mut Self {
        for _ in 0..n {
            if self.next().is_none() {
                break;
            }
        }
        self
    }

    /// Discards `n` items, then returns the one after them.
    pub fn nth(&mut self, n: usize) -> Option<I::Item> {
        self.advance_by(n).next()
    }

    /// Pulls to exhaustion, returning how many items were pulled.
    pub fn count(mut self) -> usize {
        let mut count = 0;
        while self.next().is_some() {
            count += 1;
        }
        count
    }

    /// Pulls to exhaustion, returning the final item.
    pub fn last(self) -> Option<I::Item> {
        self.fold(None, |_, item| Some(item))
    }

    /// Pulls to exhaustion, collecting every item into a [`Vec`].
    pub fn collect(self) -> Vec<I::Item> {
        self.collect_into()
    }

    /// Pulls to exhaustion, collecting every item into any [`FromIterator`] container.
    ///
    /// # Examples
    /// ```
    /// # use std::collections::BTreeSet;
    /// # use lazy_std::iter::IntoLazy;
    /// let set: BTreeSet<_> = [3, 1, 3, 2].into_lazy().collect_into();
    /// assert_eq!(set.into_iter().collect::<Vec<_>>(), [1, 2, 3]);
    /// ```
    pub fn collect_into<C: FromIterator<I::Item>>(self) -> C {
        C::from_iter(self)
    }

    /// Collects into a [`HashSet`], dropping duplicates.
    pub fn into_set(self) -> HashSet<I::Item>
    where
        I::Item: Eq + Hash,
    {
        self.collect_into()
    }

    /// Collects key-value pairs into a [`HashMap`]. Later pairs replace earlier ones with the
    /// same key.
    pub fn into_map<K, V>(self) -> HashMap<K, V>
    where
        I: Iterator<Item = (K, V)>,
        K: Eq + Hash,
    {
        self.collect_into()
    }

    /// Pulls to exhaustion, calling `f` on every item.
    pub fn for_each(mut self, mut f: impl FnMut(I::Item)) {
        while let Some(item) = self.next() {
            f(item);
        }
    }

    /// Combines every item into an accumulator, starting from `init`, and returns the final
    /// accumulator.
    pub fn fold<A>(mut self, init: A, mut f: impl FnMut(A, I::Item) -> A) -> A {
        let mut acc = init;
        while let Some(item) = self.next() {
            acc = f(acc, item);
        }
        acc
    }

    /// Like [`fold`](LazyIter::fold), but uses the first item as the initial accumulator, so `f`
    /// is first called with the first and second items. Returns `None` if there are no items.
    pub fn reduce(mut self, f: impl FnMut(I::Item, I::Item) -> I::Item) -> Option<I::Item> {
        let first = self.next()?;
        Some(self.fold(first, f))
    }

    /// Adds every item together, see [`Summable`]. Returns `None` if there are no items.
    ///
    /// # Examples
    /// ```
    /// # use lazy_std::iter::IntoLazy;
    /// assert_eq!((1..=4).into_lazy().sum(), Some(10));
    /// assert_eq!(["a", "b"].into_lazy().map(String::from).sum().as_deref(), Some("ab"));
    /// assert_eq!(Vec::<f64>::new().into_lazy().sum(), None);
    /// ```
    pub fn sum(self) -> Option<I::Item>
    where
        I::Item: Summable,
    {
        self.reduce(Summable::plus)
    }

    /// Returns true if `predicate` holds for every item, stopping at the first that fails. True
    /// for an empty iterator.
    pub fn all(&mut self, mut predicate: impl FnMut(I::Item) -> bool) -> bool {
        while let Some(item) = self.next() {
            if !predicate(item) {
                return false;
            }
        }
        true
    }

    /// Returns true if `predicate` holds for any item, stopping at the first that does. False
    /// for an empty iterator.
    pub fn any(&mut self, mut predicate: impl FnMut(I::Item) -> bool) -> bool {
        while let Some(item) = self.next() {
            if predicate(item) {
                return true;
            }
        }
        false
    }

    /// Returns the first item matching `predicate`. Items after it are left in the upstream.
    pub fn find(&mut self, mut predicate: impl FnMut(&I::Item) -> bool) -> Option<I::Item> {
        while let Some(item) = self.next() {
            if predicate(&item) {
                return Some(item);
            }
        }
        None
    }

    /// Returns the index of the first item matching `predicate`, counting from the current
    /// position. Items after it are left in the upstream.
    pub fn position(&mut self, mut predicate: impl FnMut(I::Item) -> bool) -> Option<usize> {
        let mut index = 0;
        while let Some(item) = self.next() {
            if predicate(item) {
                return Some(index);
            }
            index += 1;
        }
        None
    }

    /// An alias for [`position`](LazyIter::position).
    pub fn find_index(&mut self, predicate: impl FnMut(I::Item) -> bool) -> Option<usize> {
        self.position(predicate)
    }

    /// Returns the greatest item, or `None` if there are none. An item only replaces the
    /// current maximum if it compares strictly greater, so the first of several equal maxima
    /// wins, and incomparable items (such as `NaN`) never do.
    pub fn max(self) -> Option<I::Item>
    where
        I::Item: PartialOrd,
    {
        self.reduce(|max, item| if item > max { item } else { max })
    }

    /// Returns the least item, or `None` if there are none. As with [`max`](LazyIter::max), the
    /// first of several equal minima wins.
    pub fn min(self) -> Option<I::Item>
    where
        I::Item: PartialOrd,
    {
        self.reduce(|min, item| if item < min { item } else { min })
    }
}

impl<I: Iterator> LazyIter<I> {
    /// See [`adapters::map()`].
    pub fn map<B, F: FnMut(I::Item) -> B>(self, f: F) -> LazyIter<Map<I, F>> {
        LazyIter::new(adapters::map(self.upstream, f))
    }

    /// See [`adapters::filter()`].
    pub fn filter<P: FnMut(&I::Item) -> bool>(self, predicate: P) -> LazyIter<Filter<I, P>> {
        LazyIter::new(adapters::filter(self.upstream, predicate))
    }

    /// See [`adapters::take()`].
    pub fn take(self, n: usize) -> LazyIter<Take<I>> {
        LazyIter::new(adapters::take(self.upstream, n))
    }

    /// See [`adapters::take_while()`]. The first item to fail `predicate` is lost, see
    /// [`take_while_peek`](LazyIter::take_while_peek) to keep it.
    pub fn take_while<P>(self, predicate: P) -> LazyIter<TakeWhile<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        LazyIter::new(adapters::take_while(self.upstream, predicate))
    }

    /// See [`adapters::step_by()`].
    ///
    /// # Panics
    /// Panics if `step` is 0.
    pub fn step_by(self, step: usize) -> LazyIter<StepBy<I>> {
        LazyIter::new(adapters::step_by(self.upstream, step))
    }

    /// See [`adapters::chain()`]. To append several iterables at once, see
    /// [`chain_all`](LazyIter::chain_all).
    pub fn chain<J>(self, other: J) -> LazyIter<Chain<I, J::IntoIter>>
    where
        J: IntoIterator<Item = I::Item>,
    {
        LazyIter::new(adapters::chain(self.upstream, other))
    }

    /// Appends every iterable in `others`, left to right. See [`adapters::chain_all()`].
    ///
    /// # Examples
    /// ```
    /// # use lazy_std::iter::IntoLazy;
    /// let all = [1].into_lazy().chain_all([vec![2], vec![3, 4]]).collect();
    /// assert_eq!(all, [1, 2, 3, 4]);
    /// ```
    pub fn chain_all<J>(self, others: J) -> LazyIter<Chain<I, Flatten<J::IntoIter>>>
    where
        J: IntoIterator,
        J::Item: IntoIterator<Item = I::Item>,
    {
        LazyIter::new(adapters::chain(self.upstream, adapters::chain_all(others)))
    }

    /// See [`adapters::zip()`].
    pub fn zip<J: IntoIterator>(self, other: J) -> LazyIter<Zip<I, J::IntoIter>> {
        LazyIter::new(adapters::zip(self.upstream, other))
    }

    /// See [`adapters::enumerate()`].
    pub fn enumerate(self) -> LazyIter<Enumerate<I>> {
        LazyIter::new(adapters::enumerate(self.upstream))
    }

    /// See [`adapters::inspect()`].
    pub fn inspect<F: FnMut(&I::Item)>(self, f: F) -> LazyIter<Inspect<I, F>> {
        LazyIter::new(adapters::inspect(self.upstream, f))
    }

    /// See [`adapters::scan()`].
    pub fn scan<S, F, R>(self, initial: S, f: F) -> LazyIter<Scan<I, S, F>>
    where
        F: FnMut(&mut S, I::Item) -> R,
    {
        LazyIter::new(adapters::scan(self.upstream, initial, f))
    }

    /// See [`adapters::flat()`].
    pub fn flat(self) -> LazyIter<Flatten<I>>
    where
        I::Item: IntoIterator,
    {
        LazyIter::new(adapters::flat(self.upstream))
    }

    /// See [`adapters::flat_map()`].
    pub fn flat_map<R, F>(self, f: F) -> LazyIter<FlatMap<I, F>>
    where
        F: FnMut(I::Item) -> R,
        R: IntoIterator,
    {
        LazyIter::new(adapters::flat_map(self.upstream, f))
    }

    /// See [`adapters::flat_depth()`].
    pub fn flat_depth<T>(self, depth: usize) -> LazyIter<FlattenDepth<I, T>>
    where
        I: Iterator<Item = Nested<T>>,
    {
        LazyIter::new(adapters::flat_depth(self.upstream, depth))
    }

    /// See [`adapters::window()`].
    ///
    /// # Panics
    /// Panics if `size` is 0.
    pub fn window(self, size: usize) -> LazyIter<Window<I>>
    where
        I::Item: Clone,
    {
        LazyIter::new(adapters::window(self.upstream, size))
    }

    /// See [`adapters::array_chunks()`].
    ///
    /// # Panics
    /// Panics if `size` is 0.
    pub fn array_chunks(self, size: usize) -> LazyIter<ArrayChunks<I>> {
        LazyIter::new(adapters::array_chunks(self.upstream, size))
    }

    /// See [`adapters::cycle()`]. The result never ends unless the upstream is empty.
    pub fn cycle(self) -> LazyIter<Cycle<I>>
    where
        I::Item: Clone,
    {
        LazyIter::new(adapters::cycle(self.upstream))
    }

    /// See [`adapters::sort()`]. Collects the upstream immediately.
    #[allow(clippy::type_complexity)]
    pub fn sort(self) -> LazyIter<Sort<I::Item, fn(&I::Item, &I::Item) -> Ordering>>
    where
        I::Item: Ord,
    {
        LazyIter::new(adapters::sort(self.upstream))
    }

    /// See [`adapters::sort_by()`]. Collects the upstream immediately.
    pub fn sort_by<F>(self, compare: F) -> LazyIter<Sort<I::Item, F>>
    where
        F: FnMut(&I::Item, &I::Item) -> Ordering,
    {
        LazyIter::new(adapters::sort_by(self.upstream, compare))
    }

    /// See [`adapters::reverse()`]. Collects the upstream immediately.
    pub fn reverse(self) -> LazyIter<Reverse<I::Item>> {
        LazyIter::new(adapters::reverse(self.upstream))
    }
}

impl<I: Iterator> Iterator for LazyIter<I> {
    type Item = I::Item;

    /// Pulls exactly one item from upstream and updates the done flag.
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.upstream.next();
        self.done = item.is_none();
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.upstream.size_hint()
    }
}

impl<I: FusedIterator> FusedIterator for LazyIter<I> {}

/// Wraps any [`IntoIterator`] in a [`LazyIter`].
pub fn lazy<I: IntoIterator>(iterable: I) -> LazyIter<I::IntoIter> {
    LazyIter::new(iterable)
}

/// Adds [`into_lazy`](IntoLazy::into_lazy) to everything that implements [`IntoIterator`].
pub trait IntoLazy: IntoIterator + Sized {
    /// Wraps `self` in a [`LazyIter`]. See [`lazy`].
    fn into_lazy(self) -> LazyIter<Self::IntoIter> {
        LazyIter::new(self)
    }
}

impl<T: IntoIterator> IntoLazy for T {}
