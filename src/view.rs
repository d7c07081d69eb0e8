//! A non-owning, read-only view over a contiguous byte sequence.
//!
//! [`View`] is to `[u8]` what `std::path::Path` is to `OsStr`: an unsized
//! transparent wrapper that only exists behind a reference, adding search,
//! trimming and case-insensitive comparison on top of the raw bytes. Because
//! a `&View` borrows the storage it looks into, the borrow checker statically
//! rejects any use of a view after the owning buffer is mutated or dropped.

use core::hash::{Hash, Hasher};
use core::ops::{Deref, Index, Range, RangeFrom, RangeFull, RangeTo};
use core::slice;
use std::ffi::CStr;
use std::fmt;

use crate::ascii;
use crate::error::{Error, Result};

/// A borrowed, immutable run of bytes with search and trim operations.
///
/// Views are created over anything byte-shaped: string literals, byte
/// slices, [`Buffer<u8>`](crate::Buffer) contents or a
/// [`ByteString`](crate::ByteString). They never copy and never own.
///
/// All `[u8]` slice methods are available through `Deref`, so `len`,
/// `is_empty`, `get`, `starts_with`, `ends_with` and iteration work directly.
///
/// # Example
///
/// ```
/// use growbuf::View;
///
/// let view = View::new("  hello world  ");
/// let trimmed = view.trim();
/// assert_eq!(trimmed, "hello world");
/// assert_eq!(trimmed.find(b"world"), Some(6));
/// ```
#[repr(transparent)]
pub struct View([u8]);

impl View {
    /// Wraps a byte-shaped value in a view without copying.
    #[inline]
    pub fn new<B: AsRef<[u8]> + ?Sized>(bytes: &B) -> &View {
        // SAFETY: View is repr(transparent) over [u8], so the fat-pointer
        // cast preserves layout and the lifetime carries through unchanged.
        unsafe { &*(bytes.as_ref() as *const [u8] as *const View) }
    }

    /// Wraps the content of a null-terminated byte sequence, excluding the
    /// terminator itself.
    #[inline]
    pub fn from_c_str(c_str: &CStr) -> &View {
        View::new(c_str.to_bytes())
    }

    // --- Inspection ---

    /// Returns the number of bytes the view covers.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The underlying bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Reinterprets the view as UTF-8 text, or None when it is not valid
    /// UTF-8.
    #[inline]
    pub fn to_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    // --- Sub-views ---

    /// Returns the sub-view `[start, end)`, or an [`Error::InvalidRange`]
    /// when `start > end` or `end` exceeds the length.
    pub fn try_slice(&self, start: usize, end: usize) -> Result<&View> {
        if start > end || end > self.0.len() {
            return Err(Error::InvalidRange {
                start,
                end,
                length: self.0.len(),
            });
        }
        Ok(View::new(&self.0[start..end]))
    }

    // --- Search ---

    /// Returns the index of the first occurrence of `pattern`, scanning left
    /// to right.
    ///
    /// An empty pattern, or one longer than the view, is never found.
    pub fn find(&self, pattern: &[u8]) -> Option<usize> {
        if pattern.is_empty() || pattern.len() > self.0.len() {
            return None;
        }
        let last_start = self.0.len() - pattern.len();
        (0..=last_start).find(|&start| &self.0[start..start + pattern.len()] == pattern)
    }

    /// Returns the index of the last occurrence of `pattern`, scanning right
    /// to left.
    ///
    /// An empty pattern, or one longer than the view, is never found. An
    /// empty view in particular never contains a non-empty pattern.
    pub fn rfind(&self, pattern: &[u8]) -> Option<usize> {
        if pattern.is_empty() || pattern.len() > self.0.len() {
            return None;
        }
        let last_start = self.0.len() - pattern.len();
        (0..=last_start)
            .rev()
            .find(|&start| &self.0[start..start + pattern.len()] == pattern)
    }

    /// Counts the non-overlapping occurrences of `pattern`.
    ///
    /// The scan advances past each match by the pattern's full length, so
    /// `"aaaa".count("aa")` is 2, not 3. An empty pattern, or one longer than
    /// the view, yields 0.
    pub fn count(&self, pattern: &[u8]) -> usize {
        if pattern.is_empty() || pattern.len() > self.0.len() {
            return 0;
        }
        let mut total = 0;
        let mut start = 0;
        while start + pattern.len() <= self.0.len() {
            if &self.0[start..start + pattern.len()] == pattern {
                total += 1;
                start += pattern.len();
            } else {
                start += 1;
            }
        }
        total
    }

    // --- Trimming ---

    /// Drops leading ASCII whitespace (space, tab, vertical tab, carriage
    /// return, newline, form feed).
    pub fn trim_start(&self) -> &View {
        let mut start = 0;
        while start < self.0.len() && ascii::is_whitespace(self.0[start]) {
            start += 1;
        }
        View::new(&self.0[start..])
    }

    /// Drops trailing ASCII whitespace.
    pub fn trim_end(&self) -> &View {
        let mut end = self.0.len();
        while end > 0 && ascii::is_whitespace(self.0[end - 1]) {
            end -= 1;
        }
        View::new(&self.0[..end])
    }

    /// Drops whitespace from both ends. Idempotent.
    pub fn trim(&self) -> &View {
        self.trim_start().trim_end()
    }

    // --- Comparison ---

    /// Compares byte-for-byte with ASCII case folding: only the letters
    /// `A-Z`/`a-z` are folded, every other byte must match exactly.
    pub fn eq_ignore_case(&self, other: &[u8]) -> bool {
        self.0.len() == other.len()
            && self
                .0
                .iter()
                .zip(other)
                .all(|(a, b)| ascii::to_lower(*a) == ascii::to_lower(*b))
    }
}

// --- Trait Implementations ---

// 1. Deref (slice access)
impl Deref for View {
    type Target = [u8];
    fn deref(&self) -> &[u8] {
        &self.0
    }
}

// 2. Conversions
impl AsRef<[u8]> for View {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<View> for View {
    fn as_ref(&self) -> &View {
        self
    }
}

impl<'a> From<&'a [u8]> for &'a View {
    fn from(bytes: &'a [u8]) -> Self {
        View::new(bytes)
    }
}

impl<'a> From<&'a str> for &'a View {
    fn from(text: &'a str) -> Self {
        View::new(text)
    }
}

impl<'a> From<&'a CStr> for &'a View {
    fn from(c_str: &'a CStr) -> Self {
        View::from_c_str(c_str)
    }
}

impl Default for &View {
    fn default() -> Self {
        View::new(&[])
    }
}

// 3. Indexing. Ranges yield sub-views; a plain index yields the byte. The
// byte impl must live here: once the type has any Index impl, the operator
// no longer falls through to [u8]'s indexing.
impl Index<usize> for View {
    type Output = u8;
    fn index(&self, index: usize) -> &u8 {
        &self.0[index]
    }
}

impl Index<Range<usize>> for View {
    type Output = View;
    fn index(&self, range: Range<usize>) -> &View {
        View::new(&self.0[range])
    }
}

impl Index<RangeFrom<usize>> for View {
    type Output = View;
    fn index(&self, range: RangeFrom<usize>) -> &View {
        View::new(&self.0[range])
    }
}

impl Index<RangeTo<usize>> for View {
    type Output = View;
    fn index(&self, range: RangeTo<usize>) -> &View {
        View::new(&self.0[range])
    }
}

impl Index<RangeFull> for View {
    type Output = View;
    fn index(&self, _: RangeFull) -> &View {
        self
    }
}

// 4. Equality against the types a view is usually compared with
impl PartialEq for View {
    fn eq(&self, other: &View) -> bool {
        self.0 == other.0
    }
}
impl Eq for View {}

impl PartialEq<[u8]> for View {
    fn eq(&self, other: &[u8]) -> bool {
        &self.0 == other
    }
}

impl PartialEq<View> for [u8] {
    fn eq(&self, other: &View) -> bool {
        self == &other.0
    }
}

impl PartialEq<str> for View {
    fn eq(&self, other: &str) -> bool {
        &self.0 == other.as_bytes()
    }
}

impl PartialEq<View> for str {
    fn eq(&self, other: &View) -> bool {
        self.as_bytes() == &other.0
    }
}

impl<const N: usize> PartialEq<[u8; N]> for View {
    fn eq(&self, other: &[u8; N]) -> bool {
        &self.0 == other
    }
}

// 5. Ordering / hashing, byte-lexicographic like [u8]
impl PartialOrd for View {
    fn partial_cmp(&self, other: &View) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for View {
    fn cmp(&self, other: &View) -> core::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

impl Hash for View {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

// 6. Iteration
impl<'a> IntoIterator for &'a View {
    type Item = &'a u8;
    type IntoIter = slice::Iter<'a, u8>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// 7. Formatting. Debug escapes non-printable bytes; Display decodes the
// bytes as UTF-8, replacing invalid sequences.
impl fmt::Debug for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for &byte in &self.0 {
            match byte {
                b'"' => f.write_str("\\\"")?,
                b'\\' => f.write_str("\\\\")?,
                b'\n' => f.write_str("\\n")?,
                b'\r' => f.write_str("\\r")?,
                b'\t' => f.write_str("\\t")?,
                _ if byte.is_ascii_graphic() || byte == b' ' => {
                    write!(f, "{}", byte as char)?;
                }
                _ => write!(f, "\\x{byte:02x}")?,
            }
        }
        f.write_str("\"")
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&String::from_utf8_lossy(&self.0), f)
    }
}

// --- Test Suite ---
