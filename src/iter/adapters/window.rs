use crate::collections::circ::RingDeque;

/// Overlapping windows over an iterator. See [`window`].
#[derive(Debug, Clone)]
pub struct Window<I: Iterator> {
    pub(crate) upstream: I,
    pub(crate) size: usize,
    pub(crate) buffer: RingDeque<I::Item>,
}

/// Yields every run of `size` consecutive items as a [`Vec`], sliding by one item at a time.
/// Successive windows share all but one item. If the upstream has fewer than `size` items,
/// nothing is yielded.
///
/// # Panics
/// Panics if `size` is 0.
///
/// # Examples
/// ```
/// # use lazy_std::iter::adapters::window;
/// let windows: Vec<_> = window([1, 2, 3, 4, 5], 3).collect();
/// assert_eq!(windows, [[1, 2, 3], [2, 3, 4], [3, 4, 5]]);
/// ```
pub fn window<I>(iterable: I, size: usize) -> Window<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    assert!(size != 0, "Window size must be non-zero!");
    Window {
        upstream: iterable.into_iter(),
        size,
        buffer: RingDeque::with_cap(size),
    }
}

impl<I> Iterator for Window<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.upstream.next()?;
            if self.buffer.len() == self.size {
                self.buffer.shift();
            }
            self.buffer.push(item);

            if self.buffer.len() == self.size {
                return Some(self.buffer.iter().cloned().collect());
            }
        }
    }
}
