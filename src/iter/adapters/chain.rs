use std::iter::FusedIterator;

use super::{flat, Flatten};

/// Yields everything from one iterator, then everything from another. See [`chain`].
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    pub(crate) first: Option<A>,
    pub(crate) second: B,
}

/// Yields every item of `first` until it is exhausted, then every item of `second`.
pub fn chain<A, B>(first: A, second: B) -> Chain<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
{
    Chain {
        first: Some(first.into_iter()),
        second: second.into_iter(),
    }
}

/// Chains any number of iterables, left to right. This is the same as flattening the outer
/// iterable by one level.
///
/// # Examples
/// ```
/// # use lazy_std::iter::adapters::chain_all;
/// let joined: Vec<_> = chain_all([vec![1, 2], vec![], vec![3]]).collect();
/// assert_eq!(joined, [1, 2, 3]);
/// ```
pub fn chain_all<I>(iterables: I) -> Flatten<I::IntoIter>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    flat(iterables)
}

impl<A, B> Iterator for Chain<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(first) = &mut self.first {
            match first.next() {
                Some(item) => return Some(item),
                None => self.first = None,
            }
        }
        self.second.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.second.size_hint();
        match &self.first {
            Some(first) => {
                let (first_lower, first_upper) = first.size_hint();
                (
                    lower.saturating_add(first_lower),
                    upper.zip(first_upper).and_then(|(a, b)| a.checked_add(b)),
                )
            },
            None => (lower, upper),
        }
    }
}

impl<A, B> FusedIterator for Chain<A, B>
where
    A: Iterator,
    B: FusedIterator<Item = A::Item>,
{
}
