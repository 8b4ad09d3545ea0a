use std::fmt::{self, Debug, Formatter};

/// Applies a function to every item of its upstream. See [`map`].
#[derive(Clone)]
pub struct Map<I, F> {
    pub(crate) upstream: I,
    pub(crate) f: F,
}

/// Lazily yields `f(x)` for each `x` of `iterable`, in order. `f` isn't called until the
/// corresponding item is pulled.
pub fn map<I, F, B>(iterable: I, f: F) -> Map<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> B,
{
    Map {
        upstream: iterable.into_iter(),
        f,
    }
}

impl<I, F, B> Iterator for Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> B,
{
    type Item = B;

    fn next(&mut self) -> Option<Self::Item> {
        self.upstream.next().map(&mut self.f)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.upstream.size_hint()
    }
}

impl<I: Debug, F> Debug for Map<I, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map").field("upstream", &self.upstream).finish_non_exhaustive()
    }
}
