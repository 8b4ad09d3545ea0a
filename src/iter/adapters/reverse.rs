use std::iter::FusedIterator;

/// The items of an iterator, last to first. See [`reverse`].
#[derive(Debug, Clone)]
pub struct Reverse<T> {
    pub(crate) items: Vec<T>,
}

/// Collects all of `iterable` immediately, then yields its items from last to first. Only the
/// yielding is lazy.
pub fn reverse<I: IntoIterator>(iterable: I) -> Reverse<I::Item> {
    Reverse {
        items: iterable.into_iter().collect(),
    }
}

impl<T> Iterator for Reverse<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.items.len(), Some(self.items.len()))
    }
}

impl<T> ExactSizeIterator for Reverse<T> {}

impl<T> FusedIterator for Reverse<T> {}
