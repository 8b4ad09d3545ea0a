/// Pairs each item with its index. See [`enumerate`].
#[derive(Debug, Clone)]
pub struct Enumerate<I> {
    pub(crate) upstream: I,
    pub(crate) index: usize,
}

/// Yields `(index, item)` pairs, counting from 0.
pub fn enumerate<I: IntoIterator>(iterable: I) -> Enumerate<I::IntoIter> {
    Enumerate {
        upstream: iterable.into_iter(),
        index: 0,
    }
}

impl<I: Iterator> Iterator for Enumerate<I> {
    type Item = (usize, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.upstream.next()?;
        let index = self.index;
        self.index += 1;
        Some((index, item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.upstream.size_hint()
    }
}
