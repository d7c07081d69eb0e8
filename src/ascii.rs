//! Byte-level ASCII classification and case folding.
//!
//! These helpers back the view operations (trimming, case-insensitive
//! comparison) and are exported for callers that classify bytes themselves.
//! They are deliberately ASCII-only: bytes outside the ASCII letter ranges
//! pass through case folding unchanged, and nothing here interprets UTF-8.
//!
//! Note that [`is_whitespace`] uses the classic six-byte whitespace set
//! (space, tab, vertical tab, carriage return, newline, form feed), which
//! includes vertical tab — unlike [`u8::is_ascii_whitespace`].

/// Returns `true` for `A`..=`Z`.
#[inline]
pub const fn is_upper(byte: u8) -> bool {
    matches!(byte, b'A'..=b'Z')
}

/// Returns `true` for `a`..=`z`.
#[inline]
pub const fn is_lower(byte: u8) -> bool {
    matches!(byte, b'a'..=b'z')
}

/// Returns `true` for ASCII letters.
#[inline]
pub const fn is_alphabetic(byte: u8) -> bool {
    is_upper(byte) || is_lower(byte)
}

/// Returns `true` for `0`..=`9`.
#[inline]
pub const fn is_digit(byte: u8) -> bool {
    matches!(byte, b'0'..=b'9')
}

/// Returns `true` for space, `\t`, vertical tab, `\r`, `\n`, or form feed.
#[inline]
pub const fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\x0B' | b'\r' | b'\n' | b'\x0C')
}

/// Maps `a`..=`z` to `A`..=`Z`; every other byte is returned unchanged.
#[inline]
pub const fn to_upper(byte: u8) -> u8 {
    if is_lower(byte) { byte - 32 } else { byte }
}

/// Maps `A`..=`Z` to `a`..=`z`; every other byte is returned unchanged.
#[inline]
pub const fn to_lower(byte: u8) -> u8 {
    if is_upper(byte) { byte + 32 } else { byte }
}
