use core::{fmt, iter::FusedIterator, ptr, slice};

use super::FixedCapacityVector;

/// An iterator that moves out of a [`FixedCapacityVector`].
///
/// This struct is created by calling the `into_iter` method on [`FixedCapacityVector`].
pub struct IntoIter<T, const N: usize> {
    vec: FixedCapacityVector<T, N>,
    next: usize,
}

impl<T, const N: usize> IntoIter<T, N> {
    pub(super) fn new(vec: FixedCapacityVector<T, N>) -> Self {
        Self { vec, next: 0 }
    }

    /// Returns the elements that have not been yielded yet.
    pub fn as_slice(&self) -> &[T] {
        // NOTE(unsafe) slots `next..len` are still initialized
        unsafe {
            slice::from_raw_parts(self.vec.as_ptr().add(self.next), self.vec.len - self.next)
        }
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next < self.vec.len {
            let item = unsafe { self.vec.read_slot(self.next) };
            self.next += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.next < self.vec.len {
            // SAFETY: len must be non-zero as next is less than len.
            let item = unsafe { self.vec.pop_unchecked() };
            Some(item)
        } else {
            None
        }
    }
}

impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {
    fn len(&self) -> usize {
        self.vec.len - self.next
    }
}

impl<T, const N: usize> Clone for IntoIter<T, N>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        let mut vec = FixedCapacityVector::new();
        for elem in self.as_slice() {
            // the remaining elements never outnumber the capacity
            unsafe { vec.push_unchecked(elem.clone()) };
        }
        Self { vec, next: 0 }
    }
}

impl<T, const N: usize> fmt::Debug for IntoIter<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        let (next, len) = (self.next, self.vec.len);
        // Prevent the vector from dropping anything, moved out or not
        self.vec.len = 0;
        unsafe {
            // Drop all the elements that have not been moved out of vec
            let rest = ptr::slice_from_raw_parts_mut(self.vec.as_mut_ptr().add(next), len - next);
            ptr::drop_in_place(rest);
        }
    }
}
