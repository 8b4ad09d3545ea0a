use std::iter::FusedIterator;
use std::mem;

/// Non-overlapping chunks of an iterator. See [`array_chunks`].
#[derive(Debug, Clone)]
pub struct ArrayChunks<I: Iterator> {
    pub(crate) upstream: I,
    pub(crate) size: usize,
    pub(crate) buffer: Vec<I::Item>,
    pub(crate) finished: bool,
}

/// Groups the items of `iterable` into [`Vec`]s of `size` items. If the upstream runs out
/// part way through a chunk, the shorter final chunk is yielded once.
///
/// # Panics
/// Panics if `size` is 0.
///
/// # Examples
/// ```
/// # use lazy_std::iter::adapters::array_chunks;
/// let chunks: Vec<_> = array_chunks([1, 2, 3, 4, 5], 2).collect();
/// assert_eq!(chunks, [vec![1, 2], vec![3, 4], vec![5]]);
/// ```
pub fn array_chunks<I: IntoIterator>(iterable: I, size: usize) -> ArrayChunks<I::IntoIter> {
    assert!(size != 0, "Chunk size must be non-zero!");
    ArrayChunks {
        upstream: iterable.into_iter(),
        size,
        buffer: Vec::with_capacity(size),
        finished: false,
    }
}

impl<I: Iterator> Iterator for ArrayChunks<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        while self.buffer.len() < self.size {
            match self.upstream.next() {
                Some(item) => self.buffer.push(item),
                None => {
                    self.finished = true;
                    return Some(mem::take(&mut self.buffer)).filter(|chunk| !chunk.is_empty());
                },
            }
        }

        Some(mem::replace(&mut self.buffer, Vec::with_capacity(self.size)))
    }
}

impl<I: Iterator> FusedIterator for ArrayChunks<I> {}
