/// Repeats an iterator forever. See [`cycle`].
#[derive(Debug, Clone)]
pub struct Cycle<I: Iterator> {
    /// `None` once the upstream is exhausted and replay has started.
    pub(crate) upstream: Option<I>,
    pub(crate) seen: Vec<I::Item>,
    pub(crate) replay: usize,
}

/// Yields the items of `iterable` as they arrive while remembering them, then replays them in a
/// loop forever. Compose with [`take`](fn@super::take) or similar to bound it.
///
/// An empty upstream yields nothing at all.
///
/// # Examples
/// ```
/// # use lazy_std::iter::adapters::cycle;
/// let repeated: Vec<_> = cycle(['a', 'b']).take(5).collect();
/// assert_eq!(repeated, ['a', 'b', 'a', 'b', 'a']);
/// ```
pub fn cycle<I>(iterable: I) -> Cycle<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    Cycle {
        upstream: Some(iterable.into_iter()),
        seen: Vec::new(),
        replay: 0,
    }
}

impl<I> Iterator for Cycle<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(upstream) = &mut self.upstream {
            match upstream.next() {
                Some(item) => {
                    self.seen.push(item.clone());
                    return Some(item);
                },
                None => self.upstream = None,
            }
        }

        let item = self.seen.get(self.replay)?.clone();
        self.replay = (self.replay + 1) % self.seen.len();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (&self.upstream, self.seen.is_empty()) {
            (Some(upstream), true) => match upstream.size_hint() {
                (0, Some(0)) => (0, Some(0)),
                (0, _) => (0, None),
                _ => (usize::MAX, None),
            },
            (None, true) => (0, Some(0)),
            (_, false) => (usize::MAX, None),
        }
    }
}
