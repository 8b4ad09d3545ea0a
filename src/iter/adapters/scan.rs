use std::fmt::{self, Debug, Formatter};

/// Threads a mutable state through a mapping function. See [`scan`].
#[derive(Clone)]
pub struct Scan<I, S, F> {
    pub(crate) upstream: I,
    pub(crate) state: S,
    pub(crate) f: F,
}

/// Yields `f(&mut state, x)` for each `x` of `iterable`, with `state` starting as `initial`.
///
/// Unlike a fold, the yielded values don't have to be the state: `f` decides both what to store
/// and what to yield, and can read or replace the state however it likes.
///
/// # Examples
/// ```
/// # use lazy_std::iter::adapters::scan;
/// let powers: Vec<_> = scan([1, 2, 3], 2_i32, |acc, x| {
///     *acc = acc.pow(x);
///     *acc
/// })
/// .collect();
/// assert_eq!(powers, [2, 4, 64]);
/// ```
pub fn scan<I, S, F, R>(iterable: I, initial: S, f: F) -> Scan<I::IntoIter, S, F>
where
    I: IntoIterator,
    F: FnMut(&mut S, I::Item) -> R,
{
    Scan {
        upstream: iterable.into_iter(),
        state: initial,
        f,
    }
}

impl<I, S, F, R> Iterator for Scan<I, S, F>
where
    I: Iterator,
    F: FnMut(&mut S, I::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.upstream.next()?;
        Some((self.f)(&mut self.state, item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.upstream.size_hint()
    }
}

impl<I: Debug, S: Debug, F> Debug for Scan<I, S, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scan")
            .field("upstream", &self.upstream)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
