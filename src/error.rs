//! Error type for the checked (`try_`) API surface.
//!
//! The primary buffer and view operations panic on contract violations, the
//! same way the standard containers do. The `try_` variants report the same
//! violations as values instead, carrying the offending index or range so
//! callers can build their own diagnostics.

use thiserror::Error;

/// Result alias for checked buffer and view operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A contract violation reported by a checked operation.
///
/// Allocation failure is deliberately absent: running out of memory is fatal
/// by design and is surfaced through [`std::alloc::handle_alloc_error`],
/// never as a recoverable value.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An element access or mutation used an index at or past the length.
    #[error("index {index} out of bounds: the length is {length}")]
    IndexOutOfBounds { index: usize, length: usize },

    /// A view sub-range had `start > end` or reached past the source length.
    #[error("invalid range {start}..{end} for length {length}")]
    InvalidRange {
        start: usize,
        end: usize,
        length: usize,
    },
}
