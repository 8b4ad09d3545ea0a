use std::fmt::{self, Debug, Formatter};

/// Calls a function on each item as it passes through. See [`inspect`].
#[derive(Clone)]
pub struct Inspect<I, F> {
    pub(crate) upstream: I,
    pub(crate) f: F,
}

/// Yields the items of `iterable` unchanged, calling `f` with a reference to each one just
/// before it is yielded. Nothing is called for items that are never pulled.
pub fn inspect<I, F>(iterable: I, f: F) -> Inspect<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(&I::Item),
{
    Inspect {
        upstream: iterable.into_iter(),
        f,
    }
}

impl<I, F> Iterator for Inspect<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item),
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.upstream.next()?;
        (self.f)(&item);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.upstream.size_hint()
    }
}

impl<I: Debug, F> Debug for Inspect<I, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inspect").field("upstream", &self.upstream).finish_non_exhaustive()
    }
}
