use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;

/// Yields at most a fixed number of items. See [`take`].
#[derive(Debug, Clone)]
pub struct Take<I> {
    pub(crate) upstream: I,
    pub(crate) remaining: usize,
}

/// Yields at most `n` items of `iterable`, then stops for good. Stops early, without complaint,
/// if `iterable` runs out first. Upstream isn't pulled again once `n` items have been yielded.
pub fn take<I: IntoIterator>(iterable: I, n: usize) -> Take<I::IntoIter> {
    Take {
        upstream: iterable.into_iter(),
        remaining: n,
    }
}

impl<I: Iterator> Iterator for Take<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        match self.upstream.next() {
            Some(item) => {
                self.remaining -= 1;
                Some(item)
            },
            None => {
                self.remaining = 0;
                None
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.upstream.size_hint();
        let upper = upper.map_or(self.remaining, |upper| upper.min(self.remaining));
        (lower.min(self.remaining), Some(upper))
    }
}

impl<I: Iterator> FusedIterator for Take<I> {}

/// Yields items while they match a predicate. See [`take_while`].
#[derive(Clone)]
pub struct TakeWhile<I, P> {
    pub(crate) upstream: I,
    pub(crate) predicate: P,
    pub(crate) done: bool,
}

/// Yields the items of `iterable` up to, but not including, the first one for which `predicate`
/// returns false. That item is pulled from upstream and dropped, so it can't be recovered
/// afterwards. See [`take_while_peek`](crate::iter::LazyIter::take_while_peek) for a version that
/// leaves it in place.
pub fn take_while<I, P>(iterable: I, predicate: P) -> TakeWhile<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    TakeWhile {
        upstream: iterable.into_iter(),
        predicate,
        done: false,
    }
}

impl<I, P> Iterator for TakeWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.upstream.next() {
            Some(item) if (self.predicate)(&item) => Some(item),
            _ => {
                self.done = true;
                None
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, self.upstream.size_hint().1)
        }
    }
}

impl<I, P> FusedIterator for TakeWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
}

impl<I: Debug, P> Debug for TakeWhile<I, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TakeWhile")
            .field("upstream", &self.upstream)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}
