use std::fmt::{self, Debug, Formatter};

/// Yields only the items of its upstream that match a predicate. See [`filter`].
#[derive(Clone)]
pub struct Filter<I, P> {
    pub(crate) upstream: I,
    pub(crate) predicate: P,
}

/// Lazily yields the items of `iterable` for which `predicate` returns true. Each pull keeps
/// pulling from upstream until it finds a match or runs out.
pub fn filter<I, P>(iterable: I, predicate: P) -> Filter<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    Filter {
        upstream: iterable.into_iter(),
        predicate,
    }
}

impl<I, P> Iterator for Filter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.upstream.next()?;
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.upstream.size_hint().1)
    }
}

impl<I: Debug, P> Debug for Filter<I, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter").field("upstream", &self.upstream).finish_non_exhaustive()
    }
}
