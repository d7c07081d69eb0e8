//! # Growbuf
//!
//! An allocation-aware growable buffer and byte-string library with a
//! non-owning view abstraction, intended as a foundation layer for other code.
//!
//! This crate provides `Buffer<T>`, `ByteString`, and `View`. The buffer is a
//! generic contiguous sequence with capacity tracked separately from length;
//! the string is a byte buffer that always keeps a hidden `0` terminator
//! after its content; the view is a borrowed byte range with search and trim
//! operations.
//!
//! ## Key Features
//!
//! * **Deterministic capacity policy:** every allocation lands on a value of
//!   [`find_capacity`] (doubling from 16), so capacities are predictable and
//!   testable, and append is amortized O(1).
//! * **Lazy allocation:** empty buffers and strings own no memory until the
//!   first element arrives.
//! * **Explicit storage control:** `reserve`, `shrink`, `clear`, and `free`
//!   give callers the full capacity lifecycle; shrinking operations never
//!   release memory behind the caller's back.
//! * **Zero-copy interop:** a `ByteString`'s content is always followed by a
//!   `0` byte not counted in its length, so it can be handed to APIs
//!   expecting null-terminated text without copying.
//! * **Statically valid views:** a `&View` borrows the storage it looks
//!   into, so using a view after the owning buffer reallocates is a compile
//!   error, not a runtime hazard.
//!
//! ## Examples
//!
//! ### Buffer
//!
//! ```rust
//! use growbuf::Buffer;
//!
//! let mut buffer: Buffer<i32> = Buffer::new();
//! assert_eq!(buffer.capacity(), 0);
//!
//! buffer.push(1);
//! buffer.push(2);
//! buffer.insert(0, 0);
//!
//! assert_eq!(buffer.as_slice(), &[0, 1, 2]);
//! assert_eq!(buffer.capacity(), 16);
//!
//! buffer.remove(1);
//! assert_eq!(buffer.as_slice(), &[0, 2]);
//! ```
//!
//! ### ByteString
//!
//! ```rust
//! use growbuf::ByteString;
//!
//! let mut s = ByteString::from("hello");
//! s.extend_from_slice(b" world");
//!
//! assert_eq!(s, "hello world");
//! assert_eq!(s.len(), 11);
//!
//! // The hidden terminator sits right after the content.
//! assert_eq!(s.as_bytes_with_terminator()[11], 0);
//! ```
//!
//! ### View
//!
//! ```rust
//! use growbuf::View;
//!
//! let view = View::new("  abcabcabc  ");
//! let trimmed = view.trim();
//!
//! assert_eq!(trimmed, "abcabcabc");
//! assert_eq!(trimmed.count(b"abc"), 3);
//! assert_eq!(trimmed.find(b"abc"), Some(0));
//! assert_eq!(trimmed.rfind(b"abc"), Some(6));
//! ```

// --- Module Declarations ---

pub mod ascii;
pub mod buffer;
pub mod error;
pub mod string;
pub mod view;

#[cfg(feature = "serde")]
mod serde_support;

// --- Re-exports ---

pub use buffer::{Buffer, IntoIter, MIN_CAPACITY, find_capacity};
pub use error::{Error, Result};
pub use string::ByteString;
pub use view::View;
