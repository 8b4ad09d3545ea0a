use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Index, IndexMut};

use super::Iter;
use crate::collections::contiguous::Array;
#[cfg(feature = "iter")]
use crate::iter::LazyIter;
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// A double-ended queue stored in a growable circular buffer, allowing insertion and removal at
/// both ends in amortized constant time.
///
/// The logical sequence starts at `head` and runs for `len` slots, wrapping from the end of the
/// buffer back to index 0. `tail` is the slot one past the last element. Slots outside of the
/// logical sequence are always empty, so removing an element never leaves a stale copy behind.
///
/// The buffer never shrinks and always has room for at least one element. When an insertion
/// finds it full, the capacity doubles and any elements that had wrapped around to the start of
/// the buffer are moved into the new space directly after the old end, which keeps `head` where
/// it is.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the RingDeque.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `first/last` | `O(1)` |
/// | `get/at/set` | `O(1)` |
/// | `push/unshift` | `O(1)`*, `O(n)` |
/// | `pop/shift` | `O(1)` |
/// | `contains` | `O(n)` |
///
/// \* If the RingDeque is full, the insertion has to grow the buffer first. Only the wrapped
/// portion of the contents is moved, but reallocation may still copy everything.
pub struct RingDeque<T> {
    pub(crate) buffer: Array<Option<T>>,
    pub(crate) head: usize,
    pub(crate) tail: usize,
    pub(crate) len: usize,
}

impl<T> RingDeque<T> {
    /// Creates a new, empty RingDeque with room for a single element.
    ///
    /// # Examples
    /// ```
    /// # use lazy_std::collections::circ::RingDeque;
    /// let deque: RingDeque<u8> = RingDeque::new();
    /// assert_eq!(deque.len(), 0);
    /// assert_eq!(deque.cap(), 1);
    /// ```
    pub fn new() -> RingDeque<T> {
        RingDeque::with_cap(1)
    }

    /// Creates a new, empty RingDeque with room for `cap` elements before it has to grow. A
    /// capacity of 0 is rounded up to 1.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> RingDeque<T> {
        RingDeque {
            buffer: Array::from_fn(cap.max(1), |_| None),
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    /// Creates a full RingDeque of length `len`, calling `f` once with each index, in order, to
    /// produce its elements.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use lazy_std::collections::circ::RingDeque;
    /// let deque = RingDeque::from_fn(4, |i| i * 10);
    /// assert_eq!(deque.get(3), Some(&30));
    /// assert_eq!(deque.cap(), 4);
    /// ```
    pub fn from_fn(len: usize, mut f: impl FnMut(usize) -> T) -> RingDeque<T> {
        RingDeque {
            buffer: Array::from_fn(len.max(1), |i| if i < len { Some(f(i)) } else { None }),
            head: 0,
            tail: 0,
            len,
        }
    }

    /// Returns the number of elements in the RingDeque.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the RingDeque contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the physical capacity of the RingDeque's buffer.
    pub const fn cap(&self) -> usize {
        self.buffer.size()
    }

    /// Appends the provided value to the back of the RingDeque, growing it if it is full.
    ///
    /// # Panics
    /// Panics if the memory layout of the grown buffer would have a size that exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use lazy_std::collections::circ::RingDeque;
    /// let mut deque = RingDeque::new();
    /// for i in 0..5 {
    ///     deque.push(i);
    /// }
    /// assert_eq!(deque.last(), Some(&4));
    /// assert_eq!(deque.len(), 5);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }

        self.buffer[self.tail] = Some(value);
        self.tail = (self.tail + 1) % self.cap();
        self.len += 1;
    }

    /// Removes the last element and returns it, or [`None`] if the RingDeque is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        self.tail = self.tail.checked_sub(1).unwrap_or(self.cap() - 1);
        self.len -= 1;
        self.buffer[self.tail].take()
    }

    /// Prepends the provided value to the front of the RingDeque, growing it if it is full.
    ///
    /// # Panics
    /// Panics if the memory layout of the grown buffer would have a size that exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use lazy_std::collections::circ::RingDeque;
    /// let mut deque = RingDeque::with_cap(3);
    /// deque.unshift(4);
    /// assert_eq!(deque.first(), Some(&4));
    /// assert_eq!(deque.last(), Some(&4));
    /// ```
    pub fn unshift(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }

        self.head = self.head.checked_sub(1).unwrap_or(self.cap() - 1);
        self.buffer[self.head] = Some(value);
        self.len += 1;
    }

    /// Removes the first element and returns it, or [`None`] if the RingDeque is empty.
    pub fn shift(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let value = self.buffer[self.head].take();
        self.head = (self.head + 1) % self.cap();
        self.len -= 1;
        value
    }

    /// Returns a reference to the first element, if there is one.
    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a mutable reference to the first element, if there is one.
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Returns a reference to the last element, if there is one.
    pub fn last(&self) -> Option<&T> {
        self.get(self.len.checked_sub(1)?)
    }

    /// Returns a mutable reference to the last element, if there is one.
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.get_mut(self.len.checked_sub(1)?)
    }

    /// Returns a reference to the element at the provided logical index, or [`None`] if
    /// `index >= len`.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.buffer[self.physical(index)].as_ref()
    }

    /// Returns a mutable reference to the element at the provided logical index, or [`None`] if
    /// `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let physical = self.physical(index);
        self.buffer[physical].as_mut()
    }

    /// Like [`get`](RingDeque::get), except that negative indices count back from the end, so
    /// `-1` is the last element.
    ///
    /// # Examples
    /// ```
    /// # use lazy_std::collections::circ::RingDeque;
    /// let deque = RingDeque::from([1, 2, 3]);
    /// assert_eq!(deque.at(-1), Some(&3));
    /// assert_eq!(deque.at(-3), Some(&1));
    /// assert_eq!(deque.at(-4), None);
    /// assert_eq!(deque.at(1), Some(&2));
    /// ```
    pub fn at(&self, index: isize) -> Option<&T> {
        let index = if index < 0 {
            self.len.checked_add_signed(index)?
        } else {
            index.unsigned_abs()
        };
        self.get(index)
    }

    /// Replaces the element at the provided logical index, returning the previous value.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`, leaving the RingDeque untouched.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        let len = self.len;
        match self.get_mut(index) {
            Some(slot) => Ok(mem::replace(slot, value)),
            None => Err(IndexOutOfBounds { index, len }),
        }
    }

    /// Returns true if the RingDeque contains an element equal to the provided value.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|item| item == value)
    }

    /// Drops all elements, keeping the current capacity.
    pub fn clear(&mut self) {
        while self.shift().is_some() {}
        self.head = 0;
        self.tail = 0;
    }

    /// Returns a borrowed iterator over the elements, from first to last.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            deque: self,
            front: 0,
            back: self.len,
        }
    }

    /// Returns a [`LazyIter`] over borrowed elements, from first to last.
    ///
    /// # Examples
    /// ```
    /// # use lazy_std::collections::circ::RingDeque;
    /// let deque = RingDeque::from([1, 2, 3]);
    /// assert_eq!(deque.lazy().map(|x| x * 2).collect(), [2, 4, 6]);
    /// ```
    #[cfg(feature = "iter")]
    pub fn lazy(&self) -> LazyIter<Iter<'_, T>> {
        LazyIter::new(self.iter())
    }

    const fn physical(&self, index: usize) -> usize {
        (self.head + index) % self.buffer.size()
    }

    /// Doubles the capacity. Only called while the RingDeque is full, at which point `tail` has
    /// caught up to `head` and every slot before `tail` holds an element that wrapped around.
    /// Those are moved into the new space straight after the old end, and `head` stays put.
    ///
    /// # Panics
    /// Panics if the new capacity overflows.
    fn grow(&mut self) {
        let old_cap = self.cap();
        let new_cap = old_cap.checked_mul(2).ok_or(CapacityOverflow).throw();

        self.buffer.realloc_with(new_cap, || None);

        for i in 0..self.tail {
            let wrapped = self.buffer[i].take();
            self.buffer[old_cap + i] = wrapped;
        }
        self.tail += old_cap;
    }
}

impl<T> Default for RingDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for RingDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        let len = items.len();
        let mut items = items.into_iter();

        RingDeque {
            buffer: Array::from_fn(len.max(1), |_| items.next()),
            head: 0,
            tail: 0,
            len,
        }
    }
}

impl<T> From<Vec<T>> for RingDeque<T> {
    fn from(value: Vec<T>) -> Self {
        value.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for RingDeque<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Extend<T> for RingDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> Index<usize> for RingDeque<T> {
    type Output = T;

    /// # Panics
    /// Panics if the provided index is out of bounds.
    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
            .ok_or(IndexOutOfBounds { index, len: self.len })
            .throw()
    }
}

impl<T> IndexMut<usize> for RingDeque<T> {
    /// # Panics
    /// Panics if the provided index is out of bounds.
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let len = self.len;
        self.get_mut(index)
            .ok_or(IndexOutOfBounds { index, len })
            .throw()
    }
}

impl<T: Clone> Clone for RingDeque<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for RingDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RingDeque<T> {}

impl<T: Hash> Hash for RingDeque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: Debug> Debug for RingDeque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingDeque")
            .field("contents", &Contents(self))
            .field("head", &self.head)
            .field("tail", &self.tail)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for RingDeque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&Contents(self), f)
    }
}

struct Contents<'a, T>(&'a RingDeque<T>);

impl<T: Debug> Debug for Contents<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}
