use core::mem::{ManuallyDrop, MaybeUninit};
use core::ops::{Deref, DerefMut};
use core::ptr::{self, NonNull};
use core::slice;
use std::alloc::{self, Layout};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{Error, Result};

/// The smallest nonzero capacity the growth policy hands out, in elements.
///
/// An empty buffer owns no memory at all; the first allocation jumps straight
/// to this size and every later growth doubles it.
pub const MIN_CAPACITY: usize = 16;

// --- Capacity Policy ---

/// Maps a requested length to the capacity the growth policy allocates for it.
///
/// The result is the smallest value reachable from [`MIN_CAPACITY`] by
/// doubling that is at least `length`. This is the only growth rule in the
/// crate: every reallocation performed by [`Buffer`] (and therefore by
/// [`ByteString`](crate::ByteString)) lands on one of these values, which
/// makes capacities deterministic and testable.
///
/// ```
/// use growbuf::find_capacity;
///
/// assert_eq!(find_capacity(0), 16);
/// assert_eq!(find_capacity(16), 16);
/// assert_eq!(find_capacity(17), 32);
/// assert_eq!(find_capacity(1000), 1024);
/// ```
///
/// # Panics
///
/// Panics if the policy value for `length` does not fit in `usize`.
pub fn find_capacity(length: usize) -> usize {
    let mut capacity = MIN_CAPACITY;
    while capacity < length {
        capacity = capacity.checked_mul(2).expect("capacity overflow");
    }
    capacity
}

/// An owned, growable, contiguous sequence of elements.
///
/// # Behavior
/// * **Lazy allocation:** a new buffer owns no memory; the first element
///   triggers an allocation of [`MIN_CAPACITY`] slots.
/// * **Deterministic growth:** every reallocation moves to
///   [`find_capacity`] of the requested length, so capacity is always either
///   zero or a policy value.
/// * **Separate length and capacity:** shrinking operations (`truncate`,
///   `clear`, shrinking `resize`) never release memory; only [`shrink`] and
///   [`free`] reallocate downward.
/// * **Interface:** implements `Deref<Target = [T]>`, so all slice methods
///   (indexing, `iter`, `contains`, `starts_with`, …) work directly.
///
/// Zero-sized element types are rejected at compile time: capacity
/// bookkeeping is meaningless for them.
///
/// # Example
///
/// ```
/// use growbuf::Buffer;
///
/// let mut buffer: Buffer<i32> = Buffer::new();
/// assert_eq!(buffer.capacity(), 0);
///
/// buffer.push(1);
/// buffer.push(2);
/// buffer.insert(0, 0);
/// assert_eq!(buffer.as_slice(), &[0, 1, 2]);
/// assert_eq!(buffer.capacity(), 16);
/// ```
///
/// [`shrink`]: Self::shrink
/// [`free`]: Self::free
pub struct Buffer<T> {
    ptr: NonNull<T>,
    length: usize,
    capacity: usize,
}

// A Buffer is a unique owner of its elements, exactly like Vec<T>.
unsafe impl<T: Send> Send for Buffer<T> {}
unsafe impl<T: Sync> Sync for Buffer<T> {}

impl<T> Buffer<T> {
    /// Creates a new empty buffer without allocating.
    pub fn new() -> Self {
        // COMPILER GUARD
        const {
            assert!(
                std::mem::size_of::<T>() != 0,
                "Buffer does not support zero-sized element types"
            );
        }
        Self {
            ptr: NonNull::dangling(),
            length: 0,
            capacity: 0,
        }
    }

    /// Creates an empty buffer whose capacity already covers `capacity`
    /// elements, rounded up to the growth policy value.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut buffer = Self::new();
        if capacity > 0 {
            buffer.grow_to(find_capacity(capacity));
        }
        buffer
    }

    /// Creates a buffer holding `length` default-initialized elements.
    ///
    /// Capacity follows the growth policy for `length`; `with_len(0)` is the
    /// same as [`new`](Self::new) and does not allocate.
    pub fn with_len(length: usize) -> Self
    where
        T: Default,
    {
        let mut buffer = Self::new();
        buffer.resize(length);
        buffer
    }

    // --- Inspection ---

    /// Returns the number of live elements in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Extracts a slice containing the entire buffer.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: elements [0, length) are always initialized, and a
        // dangling pointer is valid for zero-length slices.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.length) }
    }

    /// Extracts a mutable slice containing the entire buffer.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as for `as_slice`, plus we hold the unique reference.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.length) }
    }

    /// Returns the unused capacity `[length, capacity)` as uninitialized
    /// slots, without changing the length.
    pub fn spare_capacity_mut(&mut self) -> &mut [MaybeUninit<T>] {
        // SAFETY: the range lies inside the allocation, and MaybeUninit
        // makes no claim about initialization.
        unsafe {
            slice::from_raw_parts_mut(
                self.ptr.as_ptr().add(self.length).cast::<MaybeUninit<T>>(),
                self.capacity - self.length,
            )
        }
    }

    // --- Modification ---

    /// Appends an element to the back of the buffer.
    ///
    /// Grows storage first when the buffer is full, so the amortized cost is
    /// O(1).
    pub fn push(&mut self, value: T) {
        self.ensure_capacity(self.length + 1);
        // SAFETY: capacity now exceeds length, so slot `length` exists.
        unsafe { ptr::write(self.item_ptr(self.length), value) };
        self.length += 1;
    }

    /// Removes the last element from the buffer and returns it, or None if
    /// it is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.length == 0 {
            return None;
        }
        self.length -= 1;
        // SAFETY: the slot was initialized and is no longer tracked by
        // `length`, so reading it out transfers ownership exactly once.
        Some(unsafe { ptr::read(self.item_ptr(self.length)) })
    }

    /// Inserts an element at position `index`, shifting everything after it
    /// one slot to the right. `index == len` appends.
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) {
        let len = self.length;
        assert!(
            index <= len,
            "insertion index (is {}) should be <= len (is {})",
            index,
            len
        );
        self.ensure_capacity(len + 1);
        unsafe {
            // One memmove opens the gap; it handles the overlap itself.
            ptr::copy(self.item_ptr(index), self.item_ptr(index + 1), len - index);
            ptr::write(self.item_ptr(index), value);
        }
        self.length += 1;
    }

    /// Removes and returns the element at position `index`, shifting
    /// everything after it one slot to the left. Preserves element order.
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.length;
        assert!(
            index < len,
            "removal index (is {}) should be < len (is {})",
            index,
            len
        );
        unsafe {
            // SAFETY: the read transfers the element out; the memmove then
            // reuses its slot, so nothing is ever dropped twice.
            let value = ptr::read(self.item_ptr(index));
            ptr::copy(
                self.item_ptr(index + 1),
                self.item_ptr(index),
                len - index - 1,
            );
            self.length -= 1;
            value
        }
    }

    /// Removes an element and returns it, filling the hole with the last
    /// element instead of shifting.
    ///
    /// This is O(1) but does **not** preserve element order; use
    /// [`remove`](Self::remove) when order matters.
    ///
    /// Panics if `index` is out of bounds.
    pub fn swap_remove(&mut self, index: usize) -> T {
        let len = self.length;
        assert!(
            index < len,
            "swap_remove index (is {}) should be < len (is {})",
            index,
            len
        );
        unsafe {
            // SAFETY: read the hole out first; if it was not the last slot,
            // relocate the (now untracked) last element into it.
            let value = ptr::read(self.item_ptr(index));
            self.length -= 1;
            if index != self.length {
                ptr::copy_nonoverlapping(self.item_ptr(self.length), self.item_ptr(index), 1);
            }
            value
        }
    }

    /// Shortens the buffer to `new_length`, dropping the tail elements in
    /// place. Does nothing when `new_length >= len`. Never releases memory.
    pub fn truncate(&mut self, new_length: usize) {
        if new_length >= self.length {
            return;
        }
        let tail_len = self.length - new_length;
        // The length drops before the tail is destroyed so a panicking
        // element Drop cannot expose the dead slots again.
        self.length = new_length;
        unsafe {
            // SAFETY: [new_length, new_length + tail_len) held initialized
            // elements that `length` no longer tracks.
            let tail = ptr::slice_from_raw_parts_mut(self.item_ptr(new_length), tail_len);
            ptr::drop_in_place(tail);
        }
    }

    /// Drops every element and sets the length to zero. Capacity is
    /// unchanged: the buffer keeps its allocation for reuse.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Ensures capacity for at least `additional` more elements, per the
    /// growth policy. The length is not changed.
    pub fn reserve(&mut self, additional: usize) {
        let needed = self
            .length
            .checked_add(additional)
            .expect("capacity overflow");
        self.ensure_capacity(needed);
    }

    /// Reallocates storage to the growth policy value for the current
    /// length, releasing slack from earlier growth.
    ///
    /// The policy never goes below [`MIN_CAPACITY`], so this allocates the
    /// minimum region even on a buffer that has never allocated.
    pub fn shrink(&mut self) {
        let target = find_capacity(self.length);
        if target != self.capacity {
            self.grow_to(target);
        }
    }

    /// Drops every element and releases the owned region, leaving the buffer
    /// in the empty, zero-capacity state.
    ///
    /// Idempotent: calling it on an already-freed buffer is a no-op. The
    /// buffer remains usable and will allocate again on the next growth.
    pub fn free(&mut self) {
        if self.capacity == 0 {
            return;
        }
        self.clear();
        // SAFETY: capacity > 0, so the region was allocated with exactly
        // this layout and is released exactly once.
        unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), Self::layout_for(self.capacity)) };
        self.ptr = NonNull::dangling();
        self.capacity = 0;
    }

    // --- Checked Variants ---

    /// Like [`insert`](Self::insert), but reports an out-of-bounds index as
    /// an [`Error`] instead of panicking.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.length {
            return Err(Error::IndexOutOfBounds {
                index,
                length: self.length,
            });
        }
        self.insert(index, value);
        Ok(())
    }

    /// Like [`remove`](Self::remove), but reports an out-of-bounds index as
    /// an [`Error`] instead of panicking.
    pub fn try_remove(&mut self, index: usize) -> Result<T> {
        if index >= self.length {
            return Err(Error::IndexOutOfBounds {
                index,
                length: self.length,
            });
        }
        Ok(self.remove(index))
    }

    // --- Interop ---

    /// Consumes the buffer and returns a standard `Vec` owning the same
    /// allocation. No elements are copied.
    pub fn into_vec(self) -> Vec<T> {
        let this = ManuallyDrop::new(self);
        if this.capacity == 0 {
            return Vec::new();
        }
        // SAFETY: the region came from the global allocator with
        // Layout::array::<T>(capacity), which is Vec's ownership contract.
        unsafe { Vec::from_raw_parts(this.ptr.as_ptr(), this.length, this.capacity) }
    }

    // --- Internal Helpers ---

    /// Pointer to the element slot at `index`.
    ///
    /// # Safety
    /// `index` must be within the allocated capacity.
    #[inline]
    unsafe fn item_ptr(&self, index: usize) -> *mut T {
        unsafe { self.ptr.as_ptr().add(index) }
    }

    /// Raw pointer to the start of the owned region, carrying provenance for
    /// the whole allocation (not just the live prefix). Dangling when the
    /// capacity is 0.
    #[inline]
    pub(crate) fn storage_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Grows storage so that `needed` elements fit, using the policy value.
    pub(crate) fn ensure_capacity(&mut self, needed: usize) {
        if needed > self.capacity {
            self.grow_to(find_capacity(needed));
        }
    }

    /// The single reallocation primitive. Growth and downward reallocation
    /// both funnel through here with a nonzero policy capacity; `free` is
    /// the only other place that touches the allocator.
    pub(crate) fn grow_to(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity > 0);
        debug_assert!(new_capacity >= self.length);
        if new_capacity == self.capacity {
            return;
        }
        let new_layout = Self::layout_for(new_capacity);
        let new_ptr = if self.capacity == 0 {
            // SAFETY: the layout has nonzero size (nonzero capacity of a
            // non-zero-sized type).
            unsafe { alloc::alloc(new_layout) }
        } else {
            let old_layout = Self::layout_for(self.capacity);
            // SAFETY: `ptr` was allocated with `old_layout`; the new size is
            // valid per Layout::array.
            unsafe { alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size()) }
        };
        let Some(ptr) = NonNull::new(new_ptr.cast::<T>()) else {
            // Allocation failure is fatal by design; no invalid buffer
            // state ever escapes.
            alloc::handle_alloc_error(new_layout);
        };
        self.ptr = ptr;
        self.capacity = new_capacity;
    }

    fn layout_for(capacity: usize) -> Layout {
        Layout::array::<T>(capacity).expect("capacity overflow")
    }
}

// --- Extended Functionality (Clone-bound operations) ---

impl<T: Clone> Buffer<T> {
    /// Overwrites every live element with clones of `value`. The length and
    /// capacity are unchanged.
    pub fn fill(&mut self, value: T) {
        self.as_mut_slice().fill(value);
    }

    /// Appends all elements of a slice to the buffer.
    ///
    /// Capacity is reserved once up front, so the whole call is O(n).
    pub fn extend_from_slice(&mut self, other: &[T]) {
        self.reserve(other.len());
        for item in other {
            self.push(item.clone());
        }
    }

    /// Inserts all elements of a slice at position `index`, shifting the
    /// tail right by `other.len()` in a single move.
    ///
    /// Panics if `index > len`.
    pub fn insert_from_slice(&mut self, index: usize, other: &[T]) {
        let len = self.length;
        assert!(
            index <= len,
            "insertion index (is {}) should be <= len (is {})",
            index,
            len
        );
        if other.is_empty() {
            return;
        }
        self.reserve(other.len());
        unsafe {
            // SAFETY: capacity covers len + other.len(); one memmove opens
            // the whole gap.
            ptr::copy(
                self.item_ptr(index),
                self.item_ptr(index + other.len()),
                len - index,
            );
            // The shifted tail is untracked while the gap is filled: a
            // panicking clone leaks the tail rather than double-dropping the
            // bitwise duplicates left behind in the gap.
            self.length = index;
            for (offset, item) in other.iter().enumerate() {
                ptr::write(self.item_ptr(index + offset), item.clone());
                self.length += 1;
            }
            self.length += len - index;
        }
    }
}

impl<T: Default> Buffer<T> {
    /// Sets the length to `new_length`. New elements are initialized to
    /// `T::default()`; when shrinking, the tail is dropped but the capacity
    /// is kept.
    pub fn resize(&mut self, new_length: usize) {
        if new_length <= self.length {
            self.truncate(new_length);
            return;
        }
        self.ensure_capacity(new_length);
        while self.length < new_length {
            // SAFETY: capacity covers new_length, so slot `length` exists.
            unsafe { ptr::write(self.item_ptr(self.length), T::default()) };
            self.length += 1;
        }
    }
}

// --- Trait Implementations ---

// 1. Deref / DerefMut (slice access)
impl<T> Deref for Buffer<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for Buffer<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

// 2. Drop
impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        self.free();
    }
}

// 3. Clone
impl<T: Clone> Clone for Buffer<T> {
    /// Deep-copies the live elements into a fresh allocation with matching
    /// capacity. Mutating the clone never affects the original.
    fn clone(&self) -> Self {
        let mut result = Self::new();
        if self.capacity > 0 {
            result.grow_to(self.capacity);
        }
        for item in self.as_slice() {
            result.push(item.clone());
        }
        result
    }
}

// 4. Debug
impl<T: fmt::Debug> fmt::Debug for Buffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

// 5. Default
impl<T> Default for Buffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

// 6. PartialEq / Eq
impl<T: PartialEq> PartialEq for Buffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self[..] == other[..]
    }
}
impl<T: Eq> Eq for Buffer<T> {}

// 7. Extend / FromIterator
impl<T> Extend<T> for Buffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(lower);
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Buffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut buffer = Buffer::new();
        buffer.extend(iter);
        buffer
    }
}

impl<T: Clone> From<&[T]> for Buffer<T> {
    fn from(slice: &[T]) -> Self {
        let mut buffer = Self::with_capacity(slice.len());
        buffer.extend_from_slice(slice);
        buffer
    }
}

// --- Iterators ---

/// A draining iterator that moves elements out of a [`Buffer`].
pub struct IntoIter<T> {
    buffer: ManuallyDrop<Buffer<T>>,
    index: usize,
}

impl<T> IntoIterator for Buffer<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            buffer: ManuallyDrop::new(self),
            index: 0,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.index == self.buffer.length {
            return None;
        }
        // SAFETY: index < length and the slot is initialized; advancing
        // `index` marks it as moved out.
        let value = unsafe { ptr::read(self.buffer.item_ptr(self.index)) };
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.buffer.length - self.index;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        unsafe {
            // SAFETY: [index, length) holds the elements that were never
            // yielded; drop them, then let the buffer (with nothing live in
            // it) release the region.
            let remaining = ptr::slice_from_raw_parts_mut(
                self.buffer.item_ptr(self.index),
                self.buffer.length - self.index,
            );
            ptr::drop_in_place(remaining);
            self.buffer.length = 0;
            ManuallyDrop::drop(&mut self.buffer);
        }
    }
}

// --- Hash ---
impl<T: Hash> Hash for Buffer<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash the slice, same as std::Vec.
        self.as_slice().hash(state);
    }
}

// --- PartialOrd / Ord ---
impl<T: PartialOrd> PartialOrd for Buffer<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for Buffer<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

// --- AsRef ---
impl<T> AsRef<[T]> for Buffer<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for Buffer<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// --- Test Suite ---


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::collection::vec;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_find_capacity_is_minimal_policy_value(length in 0usize..100_000) {
            let capacity = find_capacity(length);
            prop_assert!(capacity >= length);
            prop_assert!(capacity >= MIN_CAPACITY);
            prop_assert_eq!(capacity % MIN_CAPACITY, 0);
            prop_assert!((capacity / MIN_CAPACITY).is_power_of_two());
            // Minimality: one doubling step less would not fit.
            prop_assert!(capacity == MIN_CAPACITY || capacity / 2 < length);
        }

        #[test]
        fn prop_push_tracks_length_and_policy_capacity(
            values in vec(any::<i32>(), 0..200),
        ) {
            let mut buffer = Buffer::new();
            for (i, value) in values.iter().enumerate() {
                let before = buffer.capacity();
                buffer.push(*value);
                prop_assert_eq!(buffer.len(), i + 1);
                prop_assert_eq!(buffer[i], *value);
                prop_assert!(buffer.capacity() >= before);
                prop_assert_eq!(buffer.capacity(), find_capacity(i + 1));
            }
            prop_assert_eq!(buffer.as_slice(), values.as_slice());
        }

        #[test]
        fn prop_insert_then_remove_is_identity(
            values in vec(any::<i32>(), 0..64),
            index_seed in any::<usize>(),
            value in any::<i32>(),
        ) {
            let index = index_seed % (values.len() + 1);
            let mut buffer: Buffer<i32> = values.as_slice().into();

            buffer.insert(index, value);
            prop_assert_eq!(buffer.len(), values.len() + 1);
            prop_assert_eq!(buffer[index], value);

            let removed = buffer.remove(index);
            prop_assert_eq!(removed, value);
            prop_assert_eq!(buffer.as_slice(), values.as_slice());
        }

        #[test]
        fn prop_swap_remove_preserves_multiset(
            values in vec(any::<i32>(), 1..64),
            index_seed in any::<usize>(),
        ) {
            let index = index_seed % values.len();
            let mut buffer: Buffer<i32> = values.as_slice().into();

            let removed = buffer.swap_remove(index);
            prop_assert_eq!(removed, values[index]);

            let mut remaining = buffer.into_vec();
            remaining.push(removed);
            remaining.sort_unstable();
            let mut expected = values.clone();
            expected.sort_unstable();
            prop_assert_eq!(remaining, expected);
        }

        #[test]
        fn prop_clone_never_aliases(values in vec(any::<i32>(), 0..64)) {
            let original: Buffer<i32> = values.as_slice().into();
            let mut copy = original.clone();
            prop_assert_eq!(copy.as_slice(), original.as_slice());
            prop_assert_eq!(copy.capacity(), original.capacity());

            copy.push(i32::MIN);
            copy.fill(7);
            prop_assert_eq!(original.as_slice(), values.as_slice());
        }

        #[test]
        fn prop_insert_from_slice_equals_splice(
            values in vec(any::<i32>(), 0..32),
            insert in vec(any::<i32>(), 0..32),
            index_seed in any::<usize>(),
        ) {
            let index = index_seed % (values.len() + 1);
            let mut buffer: Buffer<i32> = values.as_slice().into();
            buffer.insert_from_slice(index, &insert);

            let mut expected = values[..index].to_vec();
            expected.extend_from_slice(&insert);
            expected.extend_from_slice(&values[index..]);
            prop_assert_eq!(buffer.as_slice(), expected.as_slice());
        }
    }
}
