use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// A heap allocated buffer that is sized at runtime. Similar to a [`Box<[T]>`](Box<T>), except
/// that it can be resized in place with [`realloc_with`](Array::realloc_with), which makes it a
/// good backing store for collections that manage their own layout.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Array.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `size` | `O(1)` |
/// | `from_fn` | `O(n)` |
/// | `realloc_with` | `O(n)`*, `O(1)` |
///
/// \* The allocator may be able to extend the allocation in place, in which case only the newly
/// added elements are written.
pub struct Array<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Array<T> {
    /// Creates a new Array with size 0. Nothing is allocated.
    ///
    /// # Examples
    /// ```
    /// # use lazy_std::collections::contiguous::Array;
    /// let arr: Array<u8> = Array::new();
    /// assert_eq!(arr.size(), 0);
    /// assert_eq!(&*arr, &[]);
    /// ```
    pub const fn new() -> Array<T> {
        Array {
            ptr: NonNull::dangling(),
            size: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a new Array of the provided `size`, initializing each element with the result of
    /// calling `f` with its index.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use lazy_std::collections::contiguous::Array;
    /// let arr = Array::from_fn(4, |i| i * i);
    /// assert_eq!(&*arr, &[0, 1, 4, 9]);
    /// ```
    pub fn from_fn(size: usize, mut f: impl FnMut(usize) -> T) -> Array<T> {
        let layout = Self::make_layout(size);
        let ptr = Self::reallocate(NonNull::dangling(), Self::make_layout(0), layout);

        for i in 0..size {
            // SAFETY: The allocation is valid for size elements and i < size. If f panics, the
            // allocation and everything written so far is leaked, which is safe.
            unsafe { ptr.add(i).write(f(i)) }
        }

        Array {
            ptr,
            size,
            _phantom: PhantomData,
        }
    }

    /// Returns the size of the Array.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Reallocate the Array to have exactly `new_size` elements. When shrinking, the elements
    /// past `new_size` are dropped. When growing, the new elements are initialized by calling
    /// `fill` once per element, in order. Existing elements below the smaller of the two sizes
    /// keep their positions.
    ///
    /// If `fill` panics, the Array is left empty and its previous allocation is leaked.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`]. (`new_size * size_of::<T>() > isize::MAX`)
    ///
    /// # Examples
    /// ```
    /// # use lazy_std::collections::contiguous::Array;
    /// let mut arr = Array::from_fn(2, |i| Some(i));
    /// arr.realloc_with(4, || None);
    /// assert_eq!(&*arr, &[Some(0), Some(1), None, None]);
    ///
    /// arr.realloc_with(1, || unreachable!());
    /// assert_eq!(&*arr, &[Some(0)]);
    /// ```
    pub fn realloc_with(&mut self, new_size: usize, mut fill: impl FnMut() -> T) {
        let old_size = self.size;
        if old_size == new_size {
            return;
        }

        let old_layout = Self::make_layout(old_size);
        let new_layout = Self::make_layout(new_size);

        // The Array is empty while it is being rebuilt, so a panic from here on leaks rather
        // than freeing with the wrong layout.
        let ptr = mem::replace(&mut self.ptr, NonNull::dangling());
        self.size = 0;

        for i in new_size..old_size {
            // SAFETY: i < old_size, so the element is initialized, and it is never read again.
            unsafe { ptr::drop_in_place(ptr.add(i).as_ptr()) }
        }

        let ptr = Self::reallocate(ptr, old_layout, new_layout);

        for i in old_size..new_size {
            // SAFETY: The new allocation is valid for new_size elements and i < new_size.
            unsafe { ptr.add(i).write(fill()) }
        }

        self.ptr = ptr;
        self.size = new_size;
    }
}

impl<T> Array<T> {
    /// A helper function to create a [`Layout`] for use during allocation, containing `size` number
    /// of elements of type `T`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout(size: usize) -> Layout {
        Layout::array::<T>(size).map_err(|_| CapacityOverflow).throw()
    }

    /// Moves the allocation at `ptr` from `old` to `new`, returning the new pointer. Zero-sized
    /// layouts are never allocated, so they are represented by a dangling pointer.
    ///
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    fn reallocate(ptr: NonNull<T>, old: Layout, new: Layout) -> NonNull<T> {
        let raw_ptr: *mut T = match (old.size(), new.size()) {
            // Zero-sized types and empty Arrays don't need an allocation at all.
            (_, 0) => {
                if old.size() != 0 {
                    // SAFETY: ptr was allocated in the global allocator with the old layout.
                    unsafe { alloc::dealloc(ptr.as_ptr().cast(), old) }
                }
                return NonNull::dangling();
            },
            // SAFETY: new has a non-zero size.
            (0, _) => unsafe { alloc::alloc(new).cast() },
            // SAFETY: ptr was allocated in the global allocator with the old layout, the new size
            // is non-zero and Layout::array has already checked it against isize::MAX.
            (_, _) => unsafe { alloc::realloc(ptr.as_ptr().cast(), old, new.size()).cast() },
        };

        NonNull::new(raw_ptr).unwrap_or_else(|| alloc::handle_alloc_error(new))
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        // SAFETY: All size elements are initialized and nothing reads them after this.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.size));
        }

        let layout = Self::make_layout(self.size);
        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator with this layout when the
            // layout has a non-zero size.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The held data uses Layout::array(size) and is therefore valid and properly
        // aligned for size elements, all of which are initialized. The borrow checker prevents
        // mutation for the lifetime of the slice.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As with deref, and the mutable borrow of self guarantees unique access.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size) }
    }
}

// SAFETY: Arrays rely on unique pointers and are therefore safe for Send when T: Send.
unsafe impl<T: Send> Send for Array<T> {}
// SAFETY: Array's safe API obeys all rules of the borrow checker, so no interior mutability occurs.
unsafe impl<T: Sync> Sync for Array<T> {}

impl<T: Clone> Clone for Array<T> {
    fn clone(&self) -> Self {
        Array::from_fn(self.size, |i| self[i].clone())
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T: Hash> Hash for Array<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
