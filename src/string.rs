//! An owned byte string with a hidden null terminator.
//!
//! Provides [`ByteString`] — a [`Buffer<u8>`] that keeps one extra `0` byte
//! immediately after the logical content at all times. The terminator is not
//! counted in the length, so the content can be handed to APIs expecting
//! null-terminated text without copying, while the string itself may hold
//! arbitrary bytes (including interior zeros).
//!
//! Implements `Deref<Target = View>`, so all search, trim and comparison
//! methods of [`View`] are available directly on a string.

use core::slice;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::ffi::CStr;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

use crate::buffer::{find_capacity, Buffer};
use crate::error::{Error, Result};
use crate::view::View;

/// A growable byte string whose content is always followed by a `0` byte.
///
/// # Behavior
/// * **Terminator invariant:** whenever the string owns storage, the byte at
///   physical index `len` is `0`. Every mutating operation re-establishes
///   this, so [`as_bytes_with_terminator`](Self::as_bytes_with_terminator)
///   is valid at any point.
/// * **Capacity policy:** storage always covers `len + 1` physical bytes, so
///   the capacity is the [`find_capacity`] value for `len + 1` after growth.
/// * **Arbitrary bytes:** content is not required to be UTF-8 and may
///   contain interior `0` bytes; only
///   [`to_c_str`](Self::to_c_str) cares about those.
///
/// # Example
///
/// ```
/// use growbuf::ByteString;
///
/// let mut string = ByteString::from("hello");
/// string.extend_from_slice(b" world");
///
/// assert_eq!(string, "hello world");
/// assert_eq!(string.len(), 11);
/// assert_eq!(string.as_bytes_with_terminator()[11], 0);
/// ```
pub struct ByteString {
    buffer: Buffer<u8>,
}

impl ByteString {
    /// Creates a new empty string without allocating. The terminator
    /// invariant applies as soon as storage exists.
    pub fn new() -> Self {
        ByteString {
            buffer: Buffer::new(),
        }
    }

    /// Creates an empty string with room for `capacity` content bytes (plus
    /// the terminator) before the first reallocation.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut string = Self::new();
        if capacity > 0 {
            let physical = capacity.checked_add(1).expect("capacity overflow");
            string.buffer.ensure_capacity(physical);
            string.write_terminator();
        }
        string
    }

    /// Creates a string of `length` zero bytes.
    ///
    /// Storage is allocated even for `length == 0`: the result always holds
    /// a physical terminator byte.
    pub fn with_len(length: usize) -> Self {
        let mut string = Self::new();
        string.resize(length);
        string
    }

    // --- Inspection ---

    /// Returns the content length in bytes, excluding the terminator.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Physical capacity in bytes, including the terminator slot.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// The content bytes, without the terminator.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_slice()
    }

    /// Mutable access to the content bytes. The terminator lives outside
    /// this slice and cannot be touched through it.
    #[inline]
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        self.buffer.as_mut_slice()
    }

    /// The content as a [`View`], same as the `Deref` conversion.
    #[inline]
    pub fn as_view(&self) -> &View {
        self
    }

    /// The content bytes plus the trailing `0`, `len + 1` bytes total.
    ///
    /// A string that has never allocated yields a static `b"\0"`.
    pub fn as_bytes_with_terminator(&self) -> &[u8] {
        if self.buffer.capacity() == 0 {
            return b"\0";
        }
        // SAFETY: storage exists, so capacity >= len + 1 and the terminator
        // invariant keeps the byte at `len` initialized to 0. The pointer
        // carries provenance for the whole region.
        unsafe { slice::from_raw_parts(self.buffer.storage_ptr(), self.buffer.len() + 1) }
    }

    /// Reinterprets the content plus terminator as a `CStr`, or None when
    /// the content itself contains a `0` byte.
    pub fn to_c_str(&self) -> Option<&CStr> {
        CStr::from_bytes_with_nul(self.as_bytes_with_terminator()).ok()
    }

    // --- Modification ---

    /// Appends a byte to the end of the string.
    pub fn push(&mut self, byte: u8) {
        self.buffer.ensure_capacity(self.buffer.len() + 2);
        self.buffer.push(byte);
        self.write_terminator();
    }

    /// Removes the last content byte and returns it, or None if the string
    /// is empty.
    pub fn pop(&mut self) -> Option<u8> {
        let byte = self.buffer.pop()?;
        self.write_terminator();
        Some(byte)
    }

    /// Inserts a byte at position `index`, shifting the rest right.
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, byte: u8) {
        let len = self.buffer.len();
        assert!(
            index <= len,
            "insertion index (is {}) should be <= len (is {})",
            index,
            len
        );
        self.buffer.ensure_capacity(len + 2);
        self.buffer.insert(index, byte);
        self.write_terminator();
    }

    /// Removes and returns the byte at position `index`, shifting the rest
    /// left.
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> u8 {
        let byte = self.buffer.remove(index);
        self.write_terminator();
        byte
    }

    /// Removes and returns the byte at position `index`, filling the hole
    /// with the last content byte instead of shifting. O(1), does not
    /// preserve byte order.
    ///
    /// Panics if `index` is out of bounds.
    pub fn swap_remove(&mut self, index: usize) -> u8 {
        let byte = self.buffer.swap_remove(index);
        self.write_terminator();
        byte
    }

    /// Appends all bytes of a slice in one bulk copy.
    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        self.reserve(bytes.len());
        self.buffer.extend_from_slice(bytes);
        self.write_terminator();
    }

    /// Appends the bytes of a UTF-8 string slice.
    pub fn push_str(&mut self, text: &str) {
        self.extend_from_slice(text.as_bytes());
    }

    /// Inserts all bytes of a slice at position `index` with a single shift
    /// of the tail, O(len + bytes.len()) total.
    ///
    /// Panics if `index > len`.
    pub fn insert_from_slice(&mut self, index: usize, bytes: &[u8]) {
        if !bytes.is_empty() {
            self.reserve(bytes.len());
        }
        self.buffer.insert_from_slice(index, bytes);
        self.write_terminator();
    }

    /// Sets the content length to `new_length`, zero-filling any new bytes.
    /// Shrinking keeps the capacity.
    pub fn resize(&mut self, new_length: usize) {
        let physical = new_length.checked_add(1).expect("capacity overflow");
        self.buffer.ensure_capacity(physical);
        self.buffer.resize(new_length);
        self.write_terminator();
    }

    /// Shortens the content to `new_length` bytes. Does nothing when
    /// `new_length >= len`. Capacity is kept.
    pub fn truncate(&mut self, new_length: usize) {
        if new_length >= self.buffer.len() {
            return;
        }
        self.buffer.truncate(new_length);
        self.write_terminator();
    }

    /// Empties the string. Storage (and its terminator byte) is kept for
    /// reuse.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Overwrites every content byte with `byte`. The terminator is outside
    /// the content and is unaffected.
    pub fn fill(&mut self, byte: u8) {
        self.buffer.fill(byte);
    }

    /// Ensures capacity for at least `additional` more content bytes on top
    /// of the terminator slot.
    pub fn reserve(&mut self, additional: usize) {
        let with_terminator = additional.checked_add(1).expect("capacity overflow");
        self.buffer.reserve(with_terminator);
        self.write_terminator();
    }

    /// Reallocates storage down to the policy capacity for the current
    /// content plus its terminator.
    pub fn shrink(&mut self) {
        let target = find_capacity(self.buffer.len() + 1);
        if target != self.buffer.capacity() {
            self.buffer.grow_to(target);
        }
        self.write_terminator();
    }

    /// Drops the content and releases all storage, returning the string to
    /// the unallocated state. Idempotent.
    pub fn free(&mut self) {
        self.buffer.free();
    }

    // --- Checked Variants ---

    /// Like [`insert`](Self::insert), but reports an out-of-bounds index as
    /// an [`Error`] instead of panicking.
    pub fn try_insert(&mut self, index: usize, byte: u8) -> Result<()> {
        if index > self.buffer.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                length: self.buffer.len(),
            });
        }
        self.insert(index, byte);
        Ok(())
    }

    /// Like [`remove`](Self::remove), but reports an out-of-bounds index as
    /// an [`Error`] instead of panicking.
    pub fn try_remove(&mut self, index: usize) -> Result<u8> {
        if index >= self.buffer.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                length: self.buffer.len(),
            });
        }
        Ok(self.remove(index))
    }

    // --- Interop ---

    /// Consumes the string and returns the underlying buffer. The slack
    /// terminator byte is left behind in the unused capacity.
    pub fn into_buffer(self) -> Buffer<u8> {
        self.buffer
    }

    /// Consumes the string and returns the content as a `Vec<u8>`, reusing
    /// the allocation.
    pub fn into_vec(self) -> Vec<u8> {
        self.buffer.into_vec()
    }

    // --- Internal Helpers ---

    /// Re-establishes the terminator invariant: writes a `0` into the first
    /// slack byte. No-op while the string has never allocated.
    fn write_terminator(&mut self) {
        if self.buffer.capacity() == 0 {
            debug_assert_eq!(self.buffer.len(), 0);
            return;
        }
        debug_assert!(self.buffer.capacity() > self.buffer.len());
        self.buffer.spare_capacity_mut()[0].write(0);
    }
}

// --- Trait Implementations ---

// 1. Deref (View access: find, rfind, count, trim, eq_ignore_case, and all
// [u8] slice methods through View's own Deref)
impl Deref for ByteString {
    type Target = View;
    fn deref(&self) -> &View {
        View::new(self.buffer.as_slice())
    }
}

// 2. Clone. Buffer::clone copies only the live content, so the terminator
// is rewritten into the fresh slack.
impl Clone for ByteString {
    fn clone(&self) -> Self {
        let mut result = ByteString {
            buffer: self.buffer.clone(),
        };
        result.write_terminator();
        result
    }
}

// 3. Defaults and conversions
impl Default for ByteString {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&[u8]> for ByteString {
    fn from(bytes: &[u8]) -> Self {
        let mut string = ByteString::with_capacity(bytes.len());
        string.extend_from_slice(bytes);
        string
    }
}

impl From<&str> for ByteString {
    fn from(text: &str) -> Self {
        ByteString::from(text.as_bytes())
    }
}

impl From<&View> for ByteString {
    fn from(view: &View) -> Self {
        ByteString::from(view.as_bytes())
    }
}

impl From<&CStr> for ByteString {
    /// Copies the content of a null-terminated sequence, excluding its
    /// terminator; the new string maintains its own.
    fn from(c_str: &CStr) -> Self {
        ByteString::from(c_str.to_bytes())
    }
}

impl From<Buffer<u8>> for ByteString {
    /// Adopts the buffer's allocation and establishes the terminator,
    /// growing once when the buffer is full to the brim.
    fn from(buffer: Buffer<u8>) -> Self {
        let mut string = ByteString { buffer };
        if string.buffer.capacity() > 0 {
            string.buffer.ensure_capacity(string.buffer.len() + 1);
            string.write_terminator();
        }
        string
    }
}

// 4. Borrow / ToOwned pair with View, like String/str and PathBuf/Path
impl Borrow<View> for ByteString {
    fn borrow(&self) -> &View {
        self
    }
}

impl ToOwned for View {
    type Owned = ByteString;
    fn to_owned(&self) -> ByteString {
        ByteString::from(self.as_bytes())
    }
}

impl AsRef<View> for ByteString {
    fn as_ref(&self) -> &View {
        self
    }
}

impl AsRef<[u8]> for ByteString {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

// 5. Collecting and extending
impl Extend<u8> for ByteString {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        if lower > 0 {
            self.reserve(lower);
        }
        for byte in iter {
            self.push(byte);
        }
    }
}

impl FromIterator<u8> for ByteString {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut string = ByteString::new();
        string.extend(iter);
        string
    }
}

// 6. fmt::Write, so write!/writeln! can build a string in place
impl fmt::Write for ByteString {
    fn write_str(&mut self, text: &str) -> fmt::Result {
        self.extend_from_slice(text.as_bytes());
        Ok(())
    }
}

// 7. Equality against the types a string is usually compared with
impl PartialEq for ByteString {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}
impl Eq for ByteString {}

impl PartialEq<str> for ByteString {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for ByteString {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<ByteString> for str {
    fn eq(&self, other: &ByteString) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<[u8]> for ByteString {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<ByteString> for [u8] {
    fn eq(&self, other: &ByteString) -> bool {
        self == other.as_bytes()
    }
}

impl<const N: usize> PartialEq<[u8; N]> for ByteString {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<View> for ByteString {
    fn eq(&self, other: &View) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<ByteString> for View {
    fn eq(&self, other: &ByteString) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

// 8. Ordering / hashing, byte-lexicographic and identical to View so the
// Borrow<View> contract holds in hashed and ordered collections
impl PartialOrd for ByteString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByteString {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl Hash for ByteString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

// 9. Formatting, forwarded to View
impl fmt::Debug for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

impl fmt::Display for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&**self, f)
    }
}

// --- Test Suite ---

#[cfg(test)]
mod string_basic_tests {
    use super::*;

    /// Every test can call this after a mutation: content plus exactly one
    /// trailing zero byte, whenever storage exists.
    fn assert_terminated(string: &ByteString) {
        if string.capacity() == 0 {
            assert_eq!(string.len(), 0);
            return;
        }
        assert!(string.capacity() > string.len());
        let physical = string.as_bytes_with_terminator();
        assert_eq!(physical.len(), string.len() + 1);
        assert_eq!(physical[string.len()], 0);
        assert_eq!(&physical[..string.len()], string.as_bytes());
    }

    #[test]
    fn test_string_new_is_lazy() {
        let string = ByteString::new();
        assert_eq!(string.len(), 0);
        assert_eq!(string.capacity(), 0);
        assert!(string.is_empty());
        assert_eq!(string.as_bytes_with_terminator(), b"\0");
        assert_terminated(&string);
    }

    #[test]
    fn test_string_with_len_zero_still_holds_terminator() {
        let string = ByteString::with_len(0);
        assert_eq!(string.len(), 0);
        assert_eq!(string.capacity(), 16);
        assert_eq!(string.as_bytes_with_terminator(), b"\0");
        assert_terminated(&string);

        let zeros = ByteString::with_len(5);
        assert_eq!(zeros.as_bytes(), &[0, 0, 0, 0, 0]);
        assert_eq!(zeros.capacity(), 16);
        assert_terminated(&zeros);
    }

    #[test]
    fn test_string_with_capacity_reserves_terminator_slot() {
        let string = ByteString::with_capacity(16);
        assert_eq!(string.len(), 0);
        // 16 content bytes need 17 physical bytes.
        assert_eq!(string.capacity(), 32);
        assert_terminated(&string);

        let lazy = ByteString::with_capacity(0);
        assert_eq!(lazy.capacity(), 0);
    }

    #[test]
    fn test_string_extend_builds_terminated_content() {
        let mut string = ByteString::from("hello");
        string.extend_from_slice(b" world");

        assert_eq!(string, "hello world");
        assert_eq!(string.len(), 11);
        assert_eq!(string.as_bytes_with_terminator()[11], 0);
        assert_terminated(&string);

        string.extend_from_slice(b""); // empty input never allocates or grows
        assert_eq!(string.len(), 11);
        assert_terminated(&string);
    }

    #[test]
    fn test_string_push_grows_one_byte_early() {
        // 15 content bytes fit in capacity 16 alongside the terminator, but
        // the 16th content byte forces growth.
        let mut string = ByteString::new();
        for _ in 0..15 {
            string.push(b'x');
        }
        assert_eq!(string.capacity(), 16);
        string.push(b'x');
        assert_eq!(string.len(), 16);
        assert_eq!(string.capacity(), 32);
        assert_terminated(&string);
    }

    #[test]
    fn test_string_pop_and_remove_reterminate() {
        let mut string = ByteString::from("abcd");

        assert_eq!(string.pop(), Some(b'd'));
        assert_terminated(&string);
        assert_eq!(string.remove(1), b'b');
        assert_eq!(string, "ac");
        assert_terminated(&string);

        let mut unordered = ByteString::from("abcd");
        assert_eq!(unordered.swap_remove(0), b'a');
        assert_eq!(unordered, "dbc");
        assert_terminated(&unordered);

        assert_eq!(string.pop(), Some(b'c'));
        assert_eq!(string.pop(), Some(b'a'));
        assert_eq!(string.pop(), None);
        assert_terminated(&string);
    }

    #[test]
    fn test_string_insert_single_and_bulk() {
        let mut string = ByteString::from("ad");
        string.insert(1, b'b');
        assert_eq!(string, "abd");
        assert_terminated(&string);

        string.insert_from_slice(2, b"c");
        assert_eq!(string, "abcd");
        string.insert_from_slice(4, b"-end");
        assert_eq!(string, "abcd-end");
        string.insert_from_slice(0, b"start-");
        assert_eq!(string, "start-abcd-end");
        assert_terminated(&string);
    }

    #[test]
    #[should_panic(expected = "insertion index (is 3) should be <= len (is 2)")]
    fn test_string_insert_out_of_bounds_panics() {
        let mut string = ByteString::from("ab");
        string.insert(3, b'x');
    }

    #[test]
    fn test_string_resize_zero_fills_and_reterminates() {
        let mut string = ByteString::from("hi");
        string.resize(4);
        assert_eq!(string.as_bytes(), b"hi\0\0");
        assert_terminated(&string);

        string.resize(1);
        assert_eq!(string, "h");
        assert_terminated(&string);

        // Resizing a never-allocated string to 0 still claims storage.
        let mut fresh = ByteString::new();
        fresh.resize(0);
        assert_eq!(fresh.capacity(), 16);
        assert_terminated(&fresh);
    }

    #[test]
    fn test_string_truncate_and_clear_keep_capacity() {
        let mut string = ByteString::from("some longer content here");
        let capacity = string.capacity();

        string.truncate(4);
        assert_eq!(string, "some");
        assert_eq!(string.capacity(), capacity);
        assert_terminated(&string);

        string.clear();
        assert!(string.is_empty());
        assert_eq!(string.capacity(), capacity);
        assert_terminated(&string);

        // clear on a never-allocated string stays lazy
        let mut fresh = ByteString::new();
        fresh.clear();
        assert_eq!(fresh.capacity(), 0);
    }

    #[test]
    fn test_string_reserve_accounts_for_terminator() {
        let mut string = ByteString::from("abc");
        string.reserve(13);
        // 3 + 13 content bytes + terminator = 17 physical.
        assert_eq!(string.capacity(), 32);
        assert_eq!(string.len(), 3);
        assert_terminated(&string);
    }

    #[test]
    fn test_string_shrink_keeps_room_for_terminator() {
        let mut string = ByteString::new();
        string.extend_from_slice(&[b'x'; 16]);
        string.reserve(200);
        assert_eq!(string.capacity(), 256);

        string.shrink();
        // 16 content bytes plus terminator need 17 physical bytes, so the
        // policy lands on 32, not 16.
        assert_eq!(string.capacity(), 32);
        assert_eq!(string.len(), 16);
        assert_terminated(&string);
    }

    #[test]
    fn test_string_free_releases_everything() {
        let mut string = ByteString::from("content");
        string.free();
        assert_eq!(string.len(), 0);
        assert_eq!(string.capacity(), 0);
        string.free(); // idempotent

        string.push(b'a');
        assert_eq!(string, "a");
        assert_terminated(&string);
    }

    #[test]
    fn test_string_fill_spares_terminator() {
        let mut string = ByteString::from("abc");
        string.fill(b'z');
        assert_eq!(string, "zzz");
        assert_terminated(&string);
    }

    #[test]
    fn test_string_try_variants_report_errors() {
        let mut string = ByteString::from("ab");
        assert!(string.try_insert(2, b'c').is_ok());
        assert_eq!(string, "abc");
        assert_eq!(
            string.try_insert(9, b'x'),
            Err(Error::IndexOutOfBounds {
                index: 9,
                length: 3
            })
        );
        assert_eq!(string.try_remove(0), Ok(b'a'));
        assert_eq!(
            string.try_remove(5),
            Err(Error::IndexOutOfBounds {
                index: 5,
                length: 2
            })
        );
        assert_terminated(&string);
    }

    #[test]
    fn test_string_search_and_trim_through_deref() {
        let string = ByteString::from("abcabcabc");
        assert_eq!(string.find(b"abc"), Some(0));
        assert_eq!(string.rfind(b"abc"), Some(6));
        assert_eq!(string.count(b"abc"), 3);

        let padded = ByteString::from("  hi  ");
        assert_eq!(padded.trim(), "hi");
        assert!(padded.eq_ignore_case(b"  HI  "));
        assert!(padded.starts_with(b"  h"));
    }

    #[test]
    fn test_string_to_c_str_rejects_interior_zero() {
        let plain = ByteString::from("text");
        let c_str = plain.to_c_str().unwrap();
        assert_eq!(c_str.to_bytes(), b"text");

        // A round trip through CStr drops nothing.
        let back = ByteString::from(c_str);
        assert_eq!(back, plain);

        let mut embedded = ByteString::from("te");
        embedded.push(0);
        embedded.push_str("xt");
        assert_eq!(embedded.len(), 5);
        assert_eq!(embedded.to_c_str(), None);
        assert_terminated(&embedded);
    }

    #[test]
    fn test_string_from_buffer_normalizes() {
        // A buffer filled to its exact capacity must grow once to make room
        // for the terminator.
        let mut full: Buffer<u8> = Buffer::new();
        full.extend_from_slice(&[b'a'; 16]);
        assert_eq!(full.capacity(), 16);

        let string = ByteString::from(full);
        assert_eq!(string.len(), 16);
        assert_eq!(string.capacity(), 32);
        assert_eq!(string.as_bytes_with_terminator()[16], 0);

        // An unallocated buffer stays lazy.
        let lazy = ByteString::from(Buffer::new());
        assert_eq!(lazy.capacity(), 0);
    }

    #[test]
    fn test_string_into_buffer_and_vec() {
        let string = ByteString::from("abc");
        let capacity = string.capacity();
        let buffer = string.into_buffer();
        assert_eq!(buffer.as_slice(), b"abc");
        assert_eq!(buffer.capacity(), capacity);

        let vec = ByteString::from("xyz").into_vec();
        assert_eq!(vec, b"xyz");
    }

    #[test]
    fn test_string_clone_reterminates() {
        let original = ByteString::from("clone me");
        let copy = original.clone();
        assert_eq!(copy, original);
        assert_eq!(copy.capacity(), original.capacity());
        assert_eq!(copy.as_bytes_with_terminator().last(), Some(&0));

        let mut copy = copy;
        copy.push(b'!');
        assert_eq!(original, "clone me");
    }

    #[test]
    fn test_string_collect_and_extend() {
        let collected: ByteString = (b'a'..=b'e').collect();
        assert_eq!(collected, "abcde");

        let mut string = ByteString::new();
        string.extend(b"123".iter().copied());
        assert_eq!(string, "123");
    }

    #[test]
    fn test_string_fmt_write_builds_content() {
        use std::fmt::Write;

        let mut string = ByteString::new();
        write!(string, "{}-{}", 11, "x").unwrap();
        assert_eq!(string, "11-x");
        assert_eq!(string.as_bytes_with_terminator(), b"11-x\0");
    }

    #[test]
    fn test_string_equality_and_ordering() {
        let string = ByteString::from("abc");
        assert_eq!(string, "abc");
        assert_eq!(string, *"abc");
        assert_eq!(string, *b"abc");
        assert_eq!(string, b"abc"[..]);
        assert_eq!(string, *View::new("abc"));
        assert_eq!(*View::new("abc"), string);
        assert_ne!(string, "abd");

        assert!(ByteString::from("abc") < ByteString::from("abd"));
        assert!(ByteString::from("ab") < ByteString::from("abc"));
    }

    #[test]
    fn test_string_borrow_and_to_owned_round_trip() {
        use std::collections::HashMap;

        let view = View::new("key");
        let owned: ByteString = view.to_owned();
        assert_eq!(owned, *view);

        // Borrow<View> allows HashMap lookups by view.
        let mut map: HashMap<ByteString, i32> = HashMap::new();
        map.insert(ByteString::from("key"), 7);
        assert_eq!(map.get(View::new("key")), Some(&7));
        assert_eq!(map.get(View::new("missing")), None);
    }

    #[test]
    fn test_string_formatting() {
        let string = ByteString::from("plain");
        assert_eq!(format!("{string}"), "plain");
        assert_eq!(format!("{string:?}"), "\"plain\"");

        let mut raw = ByteString::new();
        raw.push(0xff);
        assert_eq!(format!("{raw:?}"), "\"\\xff\"");
    }

    #[test]
    fn test_string_indexing_through_deref() {
        let string = ByteString::from("abcdef");
        assert_eq!(string[0], b'a');
        assert_eq!(&string[1..3], "bc");
        assert_eq!(string.get(2), Some(&b'c'));
        assert_eq!(string.get(9), None);
        assert_eq!(string.try_slice(1, 4).unwrap(), "bcd");
    }
}
