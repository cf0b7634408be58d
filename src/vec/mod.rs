//! A fixed capacity vector whose elements live inline.
//!
//! Storage is an array of `N` uninitialized slots plus a length. Slots `0..len` hold live
//! elements in order; slots `len..N` hold nothing. Three private primitives are the only code
//! that writes into, reads out of, or drops slots directly; every public operation goes through
//! them or through `ptr::copy` shifts that keep `len` in step.

use core::{
    borrow,
    cmp::Ordering,
    fmt, hash, iter,
    mem::{self, ManuallyDrop, MaybeUninit},
    ops::{self, Range, RangeBounds},
    ptr, slice,
};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::Error;

mod into_iter;

pub use into_iter::IntoIter;

/// A vector with a fixed capacity of `N` elements, stored inline.
///
/// # Examples
///
/// ```
/// use fixvec::FixedCapacityVector;
///
/// // A vector with a fixed capacity of 8 elements allocated on the stack
/// let mut vec = FixedCapacityVector::<_, 8>::new();
/// vec.push(1).unwrap();
/// vec.push(2).unwrap();
///
/// assert_eq!(vec.len(), 2);
/// assert_eq!(vec[0], 1);
///
/// assert_eq!(vec.pop(), Some(2));
/// assert_eq!(vec.len(), 1);
///
/// vec[0] = 7;
/// assert_eq!(vec[0], 7);
///
/// vec.extend([1, 2, 3].iter().cloned());
///
/// for x in &vec {
///     println!("{}", x);
/// }
/// assert_eq!(*vec, [7, 1, 2, 3]);
/// ```
pub struct FixedCapacityVector<T, const N: usize> {
    len: usize,
    buffer: [MaybeUninit<T>; N],
}

impl<T, const N: usize> FixedCapacityVector<T, N> {
    const ELEM: MaybeUninit<T> = MaybeUninit::uninit();
    const INIT: [MaybeUninit<T>; N] = [Self::ELEM; N]; // important for optimization of `new`

    /// The maximum number of elements any vector of this type can hold.
    pub const CAPACITY: usize = N;

    /// Constructs a new, empty vector with a fixed capacity of `N`
    ///
    /// # Examples
    ///
    /// ```
    /// use fixvec::FixedCapacityVector;
    ///
    /// // allocate the vector on the stack
    /// let mut x: FixedCapacityVector<u8, 16> = FixedCapacityVector::new();
    ///
    /// // allocate the vector in a static variable
    /// static mut X: FixedCapacityVector<u8, 16> = FixedCapacityVector::new();
    /// ```
    pub const fn new() -> Self {
        Self {
            len: 0,
            buffer: Self::INIT,
        }
    }

    /// Constructs a new vector holding the elements of `src`, in order.
    ///
    /// The length of the array, `M`, may be equal to _or_ less than the capacity `N`. A larger
    /// array is rejected at compile time.
    ///
    /// ```
    /// use fixvec::FixedCapacityVector;
    ///
    /// let v: FixedCapacityVector<u8, 4> = FixedCapacityVector::from_array([1, 2, 3]);
    /// assert_eq!(v, [1, 2, 3]);
    /// ```
    ///
    /// ``` compile_fail
    /// use fixvec::FixedCapacityVector;
    ///
    /// let v: FixedCapacityVector<u8, 2> = FixedCapacityVector::from_array([1, 2, 3]);
    /// ```
    pub const fn from_array<const M: usize>(src: [T; M]) -> Self {
        const {
            assert!(N >= M, "too many elements for the capacity of the vector");
        }

        // The elements are moved into the buffer bit for bit; `src` must not drop them.
        let src = ManuallyDrop::new(src);

        let mut v = Self::new();

        // `ManuallyDrop` and `MaybeUninit` are both transparent over `T`.
        let src_ptr: *const T = ptr::from_ref(&src).cast();
        let dst_ptr: *mut T = v.buffer.as_mut_ptr().cast();

        unsafe { ptr::copy_nonoverlapping(src_ptr, dst_ptr, M) };
        v.len = M;

        v
    }

    /// Constructs a new vector holding clones of the elements of `other`.
    ///
    /// This is equivalent to the following code:
    ///
    /// ```
    /// use fixvec::FixedCapacityVector;
    ///
    /// let mut v: FixedCapacityVector<u8, 16> = FixedCapacityVector::new();
    /// v.extend_from_slice(&[1, 2, 3]).unwrap();
    /// ```
    pub fn from_slice(other: &[T]) -> Result<Self, Error>
    where
        T: Clone,
    {
        let mut v = Self::new();
        v.extend_from_slice(other)?;
        Ok(v)
    }

    /// Collects an iterator into a new vector, failing if it yields more than `N` elements.
    ///
    /// Unlike [`FromIterator`], overflow is reported instead of panicking.
    ///
    /// ```
    /// use fixvec::{Error, FixedCapacityVector};
    ///
    /// let v = FixedCapacityVector::<_, 4>::try_from_iter(1..=4).unwrap();
    /// assert_eq!(v, [1, 2, 3, 4]);
    ///
    /// let e = FixedCapacityVector::<_, 4>::try_from_iter(1..=5).unwrap_err();
    /// assert_eq!(e, Error::CapacityExceeded { capacity: 4 });
    /// ```
    pub fn try_from_iter<I>(iter: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
    {
        let mut v = Self::new();
        for elem in iter {
            v.push(elem)?;
        }
        Ok(v)
    }

    /// Moves every element into a new vector and leaves `self` empty.
    ///
    /// ```
    /// use fixvec::{fixvec, FixedCapacityVector};
    ///
    /// let mut a: FixedCapacityVector<_, 4> = fixvec![1, 2, 3];
    /// let b = a.take();
    /// assert!(a.is_empty());
    /// assert_eq!(b, [1, 2, 3]);
    /// ```
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Replaces the contents of `self` with the elements of `source`, leaving `source` empty.
    ///
    /// The elements previously held by `self` are dropped first.
    ///
    /// ```
    /// use fixvec::{fixvec, FixedCapacityVector};
    ///
    /// let mut dst: FixedCapacityVector<_, 4> = fixvec![9, 9];
    /// let mut src: FixedCapacityVector<_, 4> = fixvec![1, 2, 3];
    /// dst.move_from(&mut src);
    /// assert_eq!(dst, [1, 2, 3]);
    /// assert!(src.is_empty());
    /// ```
    pub fn move_from(&mut self, source: &mut Self) {
        self.clear();
        *self = source.take();
    }

    /// Returns the contents of the vector as an array of length `M` if the length
    /// of the vector is exactly `M`, otherwise returns `Err(self)`.
    ///
    /// ```
    /// use fixvec::FixedCapacityVector;
    ///
    /// let buffer: FixedCapacityVector<u8, 42> =
    ///     FixedCapacityVector::from_slice(&[1, 2, 3, 5, 8]).unwrap();
    /// let array: [u8; 5] = buffer.into_array().unwrap();
    /// assert_eq!(array, [1, 2, 3, 5, 8]);
    /// ```
    pub fn into_array<const M: usize>(self) -> Result<[T; M], Self> {
        if self.len == M {
            // This is how the unstable `MaybeUninit::array_assume_init` method does it
            let array = unsafe { ptr::from_ref(&self.buffer).cast::<[T; M]>().read() };

            // The elements now belong to `array`
            mem::forget(self);

            Ok(array)
        } else {
            Err(self)
        }
    }

    /// Returns a raw pointer to the first slot.
    ///
    /// The pointer is valid for reads of `len()` elements.
    pub fn as_ptr(&self) -> *const T {
        self.buffer.as_ptr().cast::<T>()
    }

    /// Returns a raw pointer to the first slot, which may be mutated through.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buffer.as_mut_ptr().cast::<T>()
    }

    /// Extracts a slice containing the entire vector.
    ///
    /// Equivalent to `&s[..]`.
    pub fn as_slice(&self) -> &[T] {
        // NOTE(unsafe) slots `0..len` are initialized
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    /// Extracts a mutable slice containing the entire vector.
    ///
    /// Equivalent to `&mut s[..]`.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // NOTE(unsafe) slots `0..len` are initialized
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }

    /// Returns the number of elements in the vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the vec is empty
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the vec is full
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns the maximum number of elements the vector can hold.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Same as [`capacity`](Self::capacity).
    pub const fn max_size(&self) -> usize {
        N
    }

    /// Returns how many more elements fit before the vector is full.
    pub const fn remaining_capacity(&self) -> usize {
        N - self.len
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len()`.
    ///
    /// ```
    /// use fixvec::{fixvec, Error, FixedCapacityVector};
    ///
    /// let v: FixedCapacityVector<_, 4> = fixvec![10, 20];
    /// assert_eq!(v.at(1), Ok(&20));
    /// assert_eq!(v.at(2), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Returns the first element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[track_caller]
    pub fn front(&self) -> &T {
        match self.as_slice().first() {
            Some(elem) => elem,
            None => panic!("front() called on an empty vector"),
        }
    }

    /// Returns the first element, mutably.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[track_caller]
    pub fn front_mut(&mut self) -> &mut T {
        match self.as_mut_slice().first_mut() {
            Some(elem) => elem,
            None => panic!("front_mut() called on an empty vector"),
        }
    }

    /// Returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[track_caller]
    pub fn back(&self) -> &T {
        match self.as_slice().last() {
            Some(elem) => elem,
            None => panic!("back() called on an empty vector"),
        }
    }

    /// Returns the last element, mutably.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[track_caller]
    pub fn back_mut(&mut self) -> &mut T {
        match self.as_mut_slice().last_mut() {
            Some(elem) => elem,
            None => panic!("back_mut() called on an empty vector"),
        }
    }

    /// Clears the vector, removing all values.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Builds an element with `f` and inserts it at `index`, shifting all elements after it to
    /// the right.
    ///
    /// Capacity is checked before `f` runs, so on failure `f` is never called and the vector is
    /// left untouched. Returns a reference to the new element.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityExceeded`] if the vector is full.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    ///
    /// ```
    /// use fixvec::{fixvec, FixedCapacityVector};
    ///
    /// let mut v: FixedCapacityVector<(u8, char), 4> = fixvec![(1, 'a'), (3, 'c')];
    /// let new = v.emplace(1, || (2, 'b')).unwrap();
    /// new.1 = 'B';
    /// assert_eq!(v, [(1, 'a'), (2, 'B'), (3, 'c')]);
    /// ```
    #[track_caller]
    pub fn emplace<F>(&mut self, index: usize, f: F) -> Result<&mut T, Error>
    where
        F: FnOnce() -> T,
    {
        let len = self.len;
        self.check_insert_index(index);

        // check there's space for the new element
        if self.is_full() {
            return Err(self.capacity_exceeded());
        }

        let value = f();

        unsafe {
            // Shift everything over to make space. (Duplicating the `index`th element into two
            // consecutive places.)
            let p = self.as_mut_ptr().add(index);
            ptr::copy(p, p.add(1), len - index);
            // Overwrite the first copy of the `index`th element.
            self.write_slot(index, value);
            self.len = len + 1;
            Ok(&mut *self.as_mut_ptr().add(index))
        }
    }

    /// Inserts an element at position `index` within the vector, shifting all
    /// elements after it to the right.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityExceeded`] if the vector is full; `element` is dropped.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    ///
    /// ```
    /// use fixvec::FixedCapacityVector;
    ///
    /// let mut vec: FixedCapacityVector<_, 8> = FixedCapacityVector::from_slice(&[1, 2, 3]).unwrap();
    /// vec.insert(1, 4).unwrap();
    /// assert_eq!(vec, [1, 4, 2, 3]);
    /// vec.insert(4, 5).unwrap();
    /// assert_eq!(vec, [1, 4, 2, 3, 5]);
    /// ```
    #[track_caller]
    pub fn insert(&mut self, index: usize, element: T) -> Result<&mut T, Error> {
        self.emplace(index, || element)
    }

    /// Inserts `count` clones of `value` at `index`.
    ///
    /// Returns the index range now occupied by the new elements. Nothing is inserted unless all
    /// `count` elements fit.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityExceeded`] if `len + count > N`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    ///
    /// ```
    /// use fixvec::{fixvec, FixedCapacityVector};
    ///
    /// let mut v: FixedCapacityVector<_, 8> = fixvec![1, 2];
    /// assert_eq!(v.insert_n(1, 3, &0), Ok(1..4));
    /// assert_eq!(v, [1, 0, 0, 0, 2]);
    /// ```
    #[track_caller]
    pub fn insert_n(&mut self, index: usize, count: usize, value: &T) -> Result<Range<usize>, Error>
    where
        T: Clone,
    {
        self.check_insert_index(index);
        if count > self.remaining_capacity() {
            return Err(self.capacity_exceeded());
        }
        self.insert_iter(index, iter::repeat(value).take(count).cloned())
    }

    /// Inserts clones of the elements of `other` at `index`, keeping their order.
    ///
    /// Returns the index range now occupied by the new elements. Nothing is inserted unless the
    /// whole slice fits.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityExceeded`] if `len + other.len() > N`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    ///
    /// ```
    /// use fixvec::FixedCapacityVector;
    ///
    /// let mut vec: FixedCapacityVector<i32, 10> = FixedCapacityVector::new();
    /// vec.push(5).unwrap();
    /// vec.insert_slice(1, &[2, 3, 5, 4, 4, 2, 5]).unwrap();
    /// assert_eq!(vec, [5, 2, 3, 5, 4, 4, 2, 5]);
    /// ```
    #[track_caller]
    pub fn insert_slice(&mut self, index: usize, other: &[T]) -> Result<Range<usize>, Error>
    where
        T: Clone,
    {
        self.check_insert_index(index);
        if other.len() > self.remaining_capacity() {
            return Err(self.capacity_exceeded());
        }
        self.insert_iter(index, other.iter().cloned())
    }

    /// Inserts every element yielded by `iter` at `index`, keeping their order.
    ///
    /// Returns the index range now occupied by the new elements.
    ///
    /// The insertion is all-or-nothing. Elements are staged at the end of the vector and only
    /// rotated into place once `iter` is exhausted. If the vector fills up first, every staged
    /// element (and the one that did not fit) is dropped and the vector is left exactly as it
    /// was. The same rollback happens if `iter` panics.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityExceeded`] if `iter` yields more elements than there is room for.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    ///
    /// ```
    /// use fixvec::{fixvec, Error, FixedCapacityVector};
    ///
    /// let mut v: FixedCapacityVector<_, 5> = fixvec![1, 5];
    /// assert_eq!(v.insert_iter(1, 2..5), Ok(1..4));
    /// assert_eq!(v, [1, 2, 3, 4, 5]);
    ///
    /// let mut v: FixedCapacityVector<_, 4> = fixvec![1, 5];
    /// assert_eq!(v.insert_iter(1, 2..5), Err(Error::CapacityExceeded { capacity: 4 }));
    /// assert_eq!(v, [1, 5]);
    /// ```
    #[track_caller]
    pub fn insert_iter<I>(&mut self, index: usize, iter: I) -> Result<Range<usize>, Error>
    where
        I: IntoIterator<Item = T>,
    {
        struct Rollback<'a, T, const N: usize> {
            vec: &'a mut FixedCapacityVector<T, N>,
            len: usize,
        }

        impl<T, const N: usize> Drop for Rollback<'_, T, N> {
            fn drop(&mut self) {
                self.vec.truncate(self.len);
            }
        }

        let len = self.len;
        self.check_insert_index(index);

        let mut staged = Rollback { vec: self, len };
        for elem in iter {
            staged.vec.push(elem)?;
        }

        let end = staged.vec.len;
        staged.vec.as_mut_slice()[index..].rotate_right(end - len);
        // Commit: the rollback guard now truncates to the current length, a no-op.
        staged.len = end;

        Ok(index..index + (end - len))
    }

    /// Builds an element with `f` and appends it to the back of the collection.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityExceeded`] if the vector is full; `f` is not called.
    pub fn emplace_back<F>(&mut self, f: F) -> Result<&mut T, Error>
    where
        F: FnOnce() -> T,
    {
        let len = self.len;
        self.emplace(len, f)
    }

    /// Appends an `item` to the back of the collection
    ///
    /// # Errors
    ///
    /// [`Error::CapacityExceeded`] if the vector is full; the vector is unchanged.
    pub fn push(&mut self, item: T) -> Result<&mut T, Error> {
        self.emplace_back(|| item)
    }

    /// Removes the last element from a vector and returns it, or `None` if it's empty
    ///
    /// Popping an empty vector is not an error.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            Some(unsafe { self.pop_unchecked() })
        }
    }

    /// Removes the last element from a vector and returns it
    ///
    /// # Safety
    ///
    /// This assumes the vec to have at least one element.
    pub unsafe fn pop_unchecked(&mut self) -> T {
        debug_assert!(!self.is_empty());

        self.len -= 1;
        unsafe { self.read_slot(self.len) }
    }

    /// Appends an `item` to the back of the collection
    ///
    /// # Safety
    ///
    /// This assumes the vec is not full.
    pub unsafe fn push_unchecked(&mut self, item: T) {
        debug_assert!(!self.is_full());

        unsafe { self.write_slot(self.len, item) };
        self.len += 1;
    }

    /// Removes and returns the element at position `index` within the vector,
    /// shifting all elements after it to the left.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    ///
    /// ```
    /// use fixvec::FixedCapacityVector;
    ///
    /// let mut v: FixedCapacityVector<_, 8> = FixedCapacityVector::from_slice(&[1, 2, 3]).unwrap();
    /// assert_eq!(v.remove(1), 2);
    /// assert_eq!(v, [1, 3]);
    /// ```
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len;
        if index >= len {
            panic!("removal index (is {index}) should be < len (is {len})");
        }
        unsafe {
            // copy it out, unsafely having a copy of the value on
            // the stack and in the vector at the same time.
            let ret = self.read_slot(index);

            // Shift everything down to fill in that spot.
            let p = self.as_mut_ptr().add(index);
            ptr::copy(p.add(1), p, len - index - 1);
            self.len = len - 1;
            ret
        }
    }

    /// Drops the elements in `range` and shifts the rest of the vector down to close the gap.
    ///
    /// Returns the index of the element that followed the erased run, which is the start of
    /// `range`.
    ///
    /// # Panics
    ///
    /// Panics if the range starts after it ends or ends past the length of the vector.
    ///
    /// ```
    /// use fixvec::{fixvec, FixedCapacityVector};
    ///
    /// let mut v: FixedCapacityVector<_, 8> = fixvec![1, 2, 3, 4, 5];
    /// assert_eq!(v.erase(1..3), 1);
    /// assert_eq!(v, [1, 4, 5]);
    /// ```
    #[track_caller]
    pub fn erase<R>(&mut self, range: R) -> usize
    where
        R: RangeBounds<usize>,
    {
        let len = self.len;
        let Range { start, end } = crate::slice::range(range, len);

        // Shorten first: if a destructor panics the tail leaks instead of being dropped twice.
        self.len = start;
        unsafe {
            self.drop_slots(start..end);
            let p = self.as_mut_ptr();
            ptr::copy(p.add(end), p.add(start), len - end);
        }
        self.len = start + (len - end);

        start
    }

    /// Removes an element from the vector and returns it.
    ///
    /// The removed element is replaced by the last element of the vector.
    ///
    /// This does not preserve ordering, but is *O*(1).
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    ///
    /// ```
    /// use fixvec::FixedCapacityVector;
    ///
    /// let mut v: FixedCapacityVector<_, 8> = FixedCapacityVector::new();
    /// v.push("foo").unwrap();
    /// v.push("bar").unwrap();
    /// v.push("baz").unwrap();
    /// v.push("qux").unwrap();
    ///
    /// assert_eq!(v.swap_remove(1), "bar");
    /// assert_eq!(&*v, ["foo", "qux", "baz"]);
    /// ```
    #[track_caller]
    pub fn swap_remove(&mut self, index: usize) -> T {
        let len = self.len;
        if index >= len {
            panic!("swap_remove index (is {index}) should be < len (is {len})");
        }
        self.as_mut_slice().swap(index, len - 1);
        unsafe { self.pop_unchecked() }
    }

    /// Shortens the vector, keeping the first `len` elements and dropping the rest.
    ///
    /// Has no effect if `len` is not smaller than the current length.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        let old_len = self.len;
        // the length is shrunk before dropping, so a panicking destructor can't cause a double
        // drop
        self.len = len;
        unsafe { self.drop_slots(len..old_len) };
    }

    /// Resizes the vector in-place so that len is equal to `new_len`.
    ///
    /// If `new_len` is greater than len, the vector is extended by the
    /// difference, with each additional slot filled with value. If
    /// `new_len` is less than len, the vector is simply truncated.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityExceeded`] if `new_len > N`; the vector is unchanged.
    pub fn resize(&mut self, new_len: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        if new_len > N {
            return Err(self.capacity_exceeded());
        }

        if new_len > self.len {
            while self.len < new_len {
                unsafe { self.push_unchecked(value.clone()) };
            }
        } else {
            self.truncate(new_len);
        }

        Ok(())
    }

    /// Resizes the vector in-place so that `len` is equal to `new_len`, filling new slots with
    /// `Default::default()`.
    ///
    /// See also [`resize`](Self::resize).
    pub fn resize_default(&mut self, new_len: usize) -> Result<(), Error>
    where
        T: Clone + Default,
    {
        self.resize(new_len, T::default())
    }

    /// Clones and appends all elements in a slice to the vector.
    ///
    /// Nothing is appended unless the whole slice fits.
    ///
    /// ```
    /// use fixvec::FixedCapacityVector;
    ///
    /// let mut vec = FixedCapacityVector::<u8, 8>::new();
    /// vec.push(1).unwrap();
    /// vec.extend_from_slice(&[2, 3, 4]).unwrap();
    /// assert_eq!(*vec, [1, 2, 3, 4]);
    /// ```
    pub fn extend_from_slice(&mut self, other: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        if other.len() > self.remaining_capacity() {
            // won't fit; don't modify anything and return an error
            return Err(self.capacity_exceeded());
        }
        for elem in other {
            unsafe { self.push_unchecked(elem.clone()) };
        }
        Ok(())
    }

    /// Retains only the elements specified by the predicate.
    ///
    /// In other words, remove all elements `e` for which `f(&e)` returns `false`.
    /// This method operates in place, visiting each element exactly once in the
    /// original order, and preserves the order of the retained elements.
    ///
    /// ```
    /// use fixvec::FixedCapacityVector;
    ///
    /// let mut vec: FixedCapacityVector<_, 8> = FixedCapacityVector::from_slice(&[1, 2, 3, 4]).unwrap();
    /// vec.retain(|&x| x % 2 == 0);
    /// assert_eq!(vec, [2, 4]);
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.retain_mut(|elem| f(elem));
    }

    /// Retains only the elements specified by the predicate, passing a mutable reference to it.
    ///
    /// ```
    /// use fixvec::FixedCapacityVector;
    ///
    /// let mut vec: FixedCapacityVector<_, 8> = FixedCapacityVector::from_slice(&[1, 2, 3, 4]).unwrap();
    /// vec.retain_mut(|x| {
    ///     if *x <= 3 {
    ///         *x += 1;
    ///         true
    ///     } else {
    ///         false
    ///     }
    /// });
    /// assert_eq!(vec, [2, 3, 4]);
    /// ```
    pub fn retain_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T) -> bool,
    {
        // Vec: [Kept, Kept, Hole, Hole, Unchecked, Unchecked]
        //      |<- processed ->| ^- next to check
        //
        // On unwind from `f` or a destructor, the guard shifts the unchecked tail over the holes
        // and restores a consistent length.
        struct BackshiftOnDrop<'a, T, const N: usize> {
            v: &'a mut FixedCapacityVector<T, N>,
            processed: usize,
            deleted: usize,
            original_len: usize,
        }

        impl<T, const N: usize> Drop for BackshiftOnDrop<'_, T, N> {
            fn drop(&mut self) {
                if self.deleted > 0 {
                    // SAFETY: trailing unchecked items are valid since we never touched them.
                    unsafe {
                        let p = self.v.as_mut_ptr();
                        ptr::copy(
                            p.add(self.processed),
                            p.add(self.processed - self.deleted),
                            self.original_len - self.processed,
                        );
                    }
                }
                self.v.len = self.original_len - self.deleted;
            }
        }

        let original_len = self.len;
        // Avoid double drop if the guard is leaked, since holes appear during the process.
        self.len = 0;

        let mut g = BackshiftOnDrop {
            v: self,
            processed: 0,
            deleted: 0,
            original_len,
        };

        while g.processed != original_len {
            let p = g.v.as_mut_ptr();
            // SAFETY: unchecked element must be valid.
            let cur = unsafe { &mut *p.add(g.processed) };
            if !f(cur) {
                // Advance early to avoid double drop if `drop_in_place` panics.
                g.processed += 1;
                g.deleted += 1;
                // SAFETY: never touched again after being dropped.
                unsafe { ptr::drop_in_place(cur) };
                continue;
            }
            if g.deleted > 0 {
                // SAFETY: `deleted > 0`, so the hole slot can't overlap the current element.
                unsafe {
                    let hole = p.add(g.processed - g.deleted);
                    ptr::copy_nonoverlapping(cur, hole, 1);
                }
            }
            g.processed += 1;
        }

        drop(g);
    }

    /// Forces the length of the vector to `new_len`.
    ///
    /// This is a low-level operation that maintains none of the normal
    /// invariants of the type. Normally changing the length of a vector
    /// is done using one of the safe operations instead, such as
    /// [`truncate`](Self::truncate), [`resize`](Self::resize) or [`clear`](Self::clear).
    ///
    /// # Safety
    ///
    /// - `new_len` must be less than or equal to [`capacity()`](Self::capacity).
    /// - The elements at `old_len..new_len` must be initialized.
    pub unsafe fn set_len(&mut self, new_len: usize) {
        debug_assert!(new_len <= N);

        self.len = new_len;
    }

    #[track_caller]
    fn check_insert_index(&self, index: usize) {
        let len = self.len;
        if index > len {
            panic!("insertion index (is {index}) should be <= len (is {len})");
        }
    }

    fn capacity_exceeded(&self) -> Error {
        Error::CapacityExceeded { capacity: N }
    }

    // Slot primitives. Nothing else reads, writes or drops slot memory directly.

    /// Moves `value` into slot `index` without reading or dropping what was there.
    ///
    /// # Safety
    ///
    /// `index < N`, and the slot must not hold an element that is still counted as live.
    unsafe fn write_slot(&mut self, index: usize, value: T) {
        unsafe { self.buffer.get_unchecked_mut(index) }.write(value);
    }

    /// Moves the element in slot `index` out.
    ///
    /// # Safety
    ///
    /// The slot must hold an initialized element, and the caller must make sure it is not read
    /// or dropped again.
    unsafe fn read_slot(&self, index: usize) -> T {
        unsafe { self.buffer.get_unchecked(index).assume_init_read() }
    }

    /// Drops the elements in slots `range` in place.
    ///
    /// # Safety
    ///
    /// Every slot in `range` must hold an initialized element that is no longer counted by `len`.
    unsafe fn drop_slots(&mut self, range: Range<usize>) {
        unsafe {
            let run = ptr::slice_from_raw_parts_mut(self.as_mut_ptr().add(range.start), range.len());
            ptr::drop_in_place(run);
        }
    }
}

// Trait implementations

impl<T, const N: usize> Default for FixedCapacityVector<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for FixedCapacityVector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        <[T] as fmt::Debug>::fmt(self, f)
    }
}

impl<const N: usize> fmt::Write for FixedCapacityVector<u8, N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.extend_from_slice(s.as_bytes()).map_err(|_| fmt::Error)
    }
}

impl<T, const N: usize, const M: usize> From<[T; M]> for FixedCapacityVector<T, N> {
    fn from(array: [T; M]) -> Self {
        Self::from_array(array)
    }
}

impl<T, const N: usize> Drop for FixedCapacityVector<T, N> {
    fn drop(&mut self) {
        let len = self.len;
        self.len = 0;
        // SAFETY: the buffer contains initialized data for the range 0..len
        unsafe { self.drop_slots(0..len) }
    }
}

impl<'a, T: Clone, const N: usize> TryFrom<&'a [T]> for FixedCapacityVector<T, N> {
    type Error = Error;

    fn try_from(slice: &'a [T]) -> Result<Self, Self::Error> {
        Self::from_slice(slice)
    }
}

impl<T, const N: usize> Extend<T> for FixedCapacityVector<T, N> {
    /// # Panics
    ///
    /// Panics if the vector cannot hold all elements of the iterator.
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for elem in iter {
            if self.push(elem).is_err() {
                panic!("FixedCapacityVector::extend overflow (capacity is {})", N);
            }
        }
    }
}

impl<'a, T, const N: usize> Extend<&'a T> for FixedCapacityVector<T, N>
where
    T: 'a + Copy,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = &'a T>,
    {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T, const N: usize> hash::Hash for FixedCapacityVector<T, N>
where
    T: hash::Hash,
{
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        <[T] as hash::Hash>::hash(self, state);
    }
}

impl<T, const N: usize> hash32::Hash for FixedCapacityVector<T, N>
where
    T: hash32::Hash,
{
    fn hash<H: hash32::Hasher>(&self, state: &mut H) {
        <[T] as hash32::Hash>::hash(self, state);
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedCapacityVector<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut FixedCapacityVector<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, const N: usize> IntoIterator for FixedCapacityVector<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<T, const N: usize> FromIterator<T> for FixedCapacityVector<T, N> {
    /// # Panics
    ///
    /// Panics if the iterator yields more than `N` elements. Use
    /// [`try_from_iter`](FixedCapacityVector::try_from_iter) to handle that case.
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        match Self::try_from_iter(iter) {
            Ok(vec) => vec,
            Err(_) => panic!("FixedCapacityVector::from_iter overflow (capacity is {})", N),
        }
    }
}

impl<A, B, const N: usize, const M: usize> PartialEq<FixedCapacityVector<B, M>>
    for FixedCapacityVector<A, N>
where
    A: PartialEq<B>,
{
    fn eq(&self, other: &FixedCapacityVector<B, M>) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

impl<A, B, const N: usize, const M: usize> PartialEq<FixedCapacityVector<B, N>> for [A; M]
where
    A: PartialEq<B>,
{
    fn eq(&self, other: &FixedCapacityVector<B, N>) -> bool {
        self.eq(other.as_slice())
    }
}

impl<A, B, const N: usize, const M: usize> PartialEq<FixedCapacityVector<B, N>> for &[A; M]
where
    A: PartialEq<B>,
{
    fn eq(&self, other: &FixedCapacityVector<B, N>) -> bool {
        (*self).eq(other)
    }
}

impl<A, B, const N: usize> PartialEq<FixedCapacityVector<B, N>> for [A]
where
    A: PartialEq<B>,
{
    fn eq(&self, other: &FixedCapacityVector<B, N>) -> bool {
        self.eq(other.as_slice())
    }
}

impl<A, B, const N: usize> PartialEq<FixedCapacityVector<B, N>> for &[A]
where
    A: PartialEq<B>,
{
    fn eq(&self, other: &FixedCapacityVector<B, N>) -> bool {
        (*self).eq(other)
    }
}

impl<A, B, const N: usize, const M: usize> PartialEq<[B; M]> for FixedCapacityVector<A, N>
where
    A: PartialEq<B>,
{
    #[inline]
    fn eq(&self, other: &[B; M]) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

impl<A, B, const N: usize, const M: usize> PartialEq<&[B; M]> for FixedCapacityVector<A, N>
where
    A: PartialEq<B>,
{
    #[inline]
    fn eq(&self, other: &&[B; M]) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

impl<A, B, const N: usize> PartialEq<[B]> for FixedCapacityVector<A, N>
where
    A: PartialEq<B>,
{
    #[inline]
    fn eq(&self, other: &[B]) -> bool {
        self.as_slice().eq(other)
    }
}

impl<A, B, const N: usize> PartialEq<&[B]> for FixedCapacityVector<A, N>
where
    A: PartialEq<B>,
{
    #[inline]
    fn eq(&self, other: &&[B]) -> bool {
        self.as_slice().eq(*other)
    }
}

// Implements Eq if underlying data is Eq
impl<T, const N: usize> Eq for FixedCapacityVector<T, N> where T: Eq {}

impl<T, const N: usize, const M: usize> PartialOrd<FixedCapacityVector<T, M>>
    for FixedCapacityVector<T, N>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &FixedCapacityVector<T, M>) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T, const N: usize> Ord for FixedCapacityVector<T, N>
where
    T: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T, const N: usize> ops::Deref for FixedCapacityVector<T, N> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, const N: usize> ops::DerefMut for FixedCapacityVector<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> borrow::Borrow<[T]> for FixedCapacityVector<T, N> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> borrow::BorrowMut<[T]> for FixedCapacityVector<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedCapacityVector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> AsMut<[T]> for FixedCapacityVector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T, const N: usize> Clone for FixedCapacityVector<T, N>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        let mut new = Self::new();
        // avoid `extend_from_slice` as that introduces a runtime check
        for elem in self {
            unsafe { new.push_unchecked(elem.clone()) };
        }
        new
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        for elem in source {
            unsafe { self.push_unchecked(elem.clone()) };
        }
    }
}

#[cfg(feature = "zeroize")]
impl<T, const N: usize> Zeroize for FixedCapacityVector<T, N>
where
    T: Zeroize,
{
    /// Zeroizes the live elements, drops them, then wipes every slot of the buffer.
    fn zeroize(&mut self) {
        self.iter_mut().for_each(Zeroize::zeroize);
        self.clear();
        self.buffer.zeroize();
    }
}
