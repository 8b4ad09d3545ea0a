use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;

/// Lazily sorted items. See [`sort_by`].
#[derive(Clone)]
pub struct Sort<T, F> {
    pub(crate) items: Vec<T>,
    pub(crate) compare: F,
}

/// Sorts by [`Ord::cmp`]. See [`sort_by`].
pub fn sort<I>(iterable: I) -> Sort<I::Item, fn(&I::Item, &I::Item) -> Ordering>
where
    I: IntoIterator,
    I::Item: Ord,
{
    let compare: fn(&I::Item, &I::Item) -> Ordering = Ord::cmp;
    sort_by(iterable, compare)
}

/// Collects all of `iterable` immediately, then yields its items in ascending order according
/// to `compare`.
///
/// The ordering work is done one item at a time: each pull scans the remaining items for a
/// minimum and removes it. Taking the first `k` of `m` items costs `O(k * m)` comparisons and
/// nothing is compared before the first pull. A full sort is `O(m^2)`.
///
/// The scan runs from the back of the remaining items and only replaces its candidate on a
/// strictly smaller item, so the sort is not stable: equal items come out in reverse input
/// order.
///
/// # Examples
/// ```
/// # use lazy_std::iter::adapters::sort_by;
/// let mut sorted = sort_by([(1, 'a'), (0, 'b'), (1, 'c')], |a, b| a.0.cmp(&b.0));
/// assert_eq!(sorted.next(), Some((0, 'b')));
/// assert_eq!(sorted.next(), Some((1, 'c')));
/// assert_eq!(sorted.next(), Some((1, 'a')));
/// ```
pub fn sort_by<I, F>(iterable: I, compare: F) -> Sort<I::Item, F>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    Sort {
        items: iterable.into_iter().collect(),
        compare,
    }
}

impl<T, F> Iterator for Sort<T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let last = self.items.len().checked_sub(1)?;
        let mut min = last;
        for i in (0..last).rev() {
            if (self.compare)(&self.items[min], &self.items[i]) == Ordering::Greater {
                min = i;
            }
        }
        Some(self.items.remove(min))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.items.len(), Some(self.items.len()))
    }
}

impl<T, F> ExactSizeIterator for Sort<T, F> where F: FnMut(&T, &T) -> Ordering {}

impl<T, F> FusedIterator for Sort<T, F> where F: FnMut(&T, &T) -> Ordering {}

impl<T: Debug, F> Debug for Sort<T, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sort").field("items", &self.items).finish_non_exhaustive()
    }
}
