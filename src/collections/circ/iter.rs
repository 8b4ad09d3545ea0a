use std::iter::FusedIterator;

use super::RingDeque;

impl<T> IntoIterator for RingDeque<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            deque: self,
        }
    }
}

/// An owned iterator over the elements of a [`RingDeque`]. See [`RingDeque::into_iter`].
pub struct IntoIter<T> {
    // The deque already knows how to give up its ends one at a time.
    pub(crate) deque: RingDeque<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.deque.shift()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.deque.pop()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.deque.len()
    }
}

impl<'a, T> IntoIterator for &'a RingDeque<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A borrowed iterator over the elements of a [`RingDeque`]. See [`RingDeque::iter`].
///
/// Walks logical indices, so the physical layout of the buffer doesn't matter.
pub struct Iter<'a, T> {
    pub(crate) deque: &'a RingDeque<T>,
    pub(crate) front: usize,
    pub(crate) back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let value = self.deque.get(self.front);
            self.front += 1;
            value
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            self.deque.get(self.back)
        } else {
            None
        }
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            deque: self.deque,
            front: self.front,
            back: self.back,
        }
    }
}
