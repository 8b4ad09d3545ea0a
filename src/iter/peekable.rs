use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;

use super::LazyIter;

/// An iterator with one item of look-ahead. See [`LazyIter::peekable`].
///
/// Peeking has to pull the item from upstream to see it, so the item is held here until the
/// next call to [`next`](Iterator::next) hands it out.
#[derive(Debug, Clone)]
pub struct Peekable<I: Iterator> {
    pub(crate) upstream: I,
    /// `Some` when an item (or the end of the upstream) has been peeked but not yet consumed.
    pub(crate) peeked: Option<Option<I::Item>>,
}

impl<I: Iterator> Peekable<I> {
    pub(crate) const fn new(upstream: I) -> Peekable<I> {
        Peekable {
            upstream,
            peeked: None,
        }
    }

    /// Returns a reference to the item the next call to `next` will return, without consuming
    /// it. Repeated calls return the same item.
    pub fn peek(&mut self) -> Option<&I::Item> {
        let upstream = &mut self.upstream;
        self.peeked.get_or_insert_with(|| upstream.next()).as_ref()
    }
}

impl<I: Iterator> Iterator for Peekable<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self.peeked.take() {
            Some(peeked) => peeked,
            None => self.upstream.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.upstream.size_hint();
        match &self.peeked {
            Some(None) => (0, Some(0)),
            Some(Some(_)) => (
                lower.saturating_add(1),
                upper.and_then(|upper| upper.checked_add(1)),
            ),
            None => (lower, upper),
        }
    }
}

/// A [`LazyIter`] with one item of look-ahead.
pub type PeekableLazyIter<I> = LazyIter<Peekable<I>>;

impl<I: Iterator> LazyIter<Peekable<I>> {
    /// Returns a reference to the next item without consuming it. This pulls from upstream if
    /// nothing has been peeked yet, and updates [`is_done`](LazyIter::is_done) accordingly.
    ///
    /// # Examples
    /// ```
    /// # use lazy_std::iter::IntoLazy;
    /// let mut iter = [1, 2].into_lazy().peekable();
    /// assert_eq!(iter.peek(), Some(&1));
    /// assert_eq!(iter.peek(), Some(&1));
    /// assert_eq!(iter.next(), Some(1));
    /// assert_eq!(iter.next(), Some(2));
    /// assert_eq!(iter.peek(), None);
    /// assert!(iter.is_done());
    /// ```
    pub fn peek(&mut self) -> Option<&I::Item> {
        let item = self.upstream.peek();
        self.done = item.is_none();
        item
    }

    /// Yields items while they match `predicate`, like [`take_while`](LazyIter::take_while),
    /// except that each item is peeked at before it is consumed. The first item that fails the
    /// predicate is left in place for the next `peek` or `next` on this iterator.
    ///
    /// # Examples
    /// ```
    /// # use lazy_std::iter::IntoLazy;
    /// let mut iter = [1, 2, 3, 4, 5].into_lazy().peekable();
    /// assert_eq!(iter.take_while_peek(|x| *x < 4).collect(), [1, 2, 3]);
    /// assert_eq!(iter.next(), Some(4));
    /// ```
    pub fn take_while_peek<P>(&mut self, predicate: P) -> LazyIter<TakeWhilePeek<'_, I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        LazyIter::new(TakeWhilePeek {
            source: self,
            predicate,
            done: false,
        })
    }
}

/// Borrows a peekable iterator and yields from it while a predicate holds. See
/// [`LazyIter::take_while_peek`].
pub struct TakeWhilePeek<'a, I: Iterator, P> {
    pub(crate) source: &'a mut LazyIter<Peekable<I>>,
    pub(crate) predicate: P,
    pub(crate) done: bool,
}

impl<I, P> Iterator for TakeWhilePeek<'_, I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let matches = match self.source.peek() {
            Some(item) => (self.predicate)(item),
            None => false,
        };
        if !matches {
            self.done = true;
            return None;
        }

        self.source.next()
    }
}

impl<I, P> FusedIterator for TakeWhilePeek<'_, I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
}

impl<I, P> Debug for TakeWhilePeek<'_, I, P>
where
    I: Iterator + Debug,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TakeWhilePeek")
            .field("source", &self.source)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}
