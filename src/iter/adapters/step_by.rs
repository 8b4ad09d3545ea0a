/// Yields every n-th item. See [`step_by`].
#[derive(Debug, Clone)]
pub struct StepBy<I> {
    pub(crate) upstream: I,
    pub(crate) step: usize,
    pub(crate) first: bool,
}

/// Yields the first item of `iterable`, then every `step`-th item after it. The `step - 1` items
/// in between are only pulled (and dropped) when the next item is requested.
///
/// # Panics
/// Panics if `step` is 0.
pub fn step_by<I: IntoIterator>(iterable: I, step: usize) -> StepBy<I::IntoIter> {
    assert!(step != 0, "step_by requires a step of at least 1");

    StepBy {
        upstream: iterable.into_iter(),
        step,
        first: true,
    }
}

impl<I: Iterator> Iterator for StepBy<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.first {
            self.first = false;
        } else {
            for _ in 1..self.step {
                self.upstream.next()?;
            }
        }
        self.upstream.next()
    }
}
