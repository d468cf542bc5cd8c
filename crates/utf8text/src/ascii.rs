//! ASCII gate and byte-level sanitizers.
//!
//! Every operation in [`TextEngine`](crate::TextEngine) asks [`is_ascii`]
//! first. A pure 7-bit input has one byte per code point, so byte semantics and
//! codepoint semantics coincide and the Unicode machinery can be skipped.

use bstr::BString;

/// Returns `true` iff every byte is in `0x00..=0x7F`.
#[inline]
#[must_use]
pub fn is_ascii(bytes: &[u8]) -> bool {
    bytes.is_ascii()
}

/// ASCII control characters other than `\t`, `\n` and `\r`.
#[inline]
fn is_stripped_ctrl(b: u8) -> bool {
    matches!(b, 0x00..=0x08 | 0x0B | 0x0C | 0x0E..=0x1F | 0x7F)
}

/// Removes ASCII control characters, keeping tab, line feed and carriage
/// return.
///
/// ```rust
/// assert_eq!(utf8text::ascii::strip_ascii_ctrl(b"a\x00b\x7f\tc"), "ab\tc");
/// ```
#[must_use]
pub fn strip_ascii_ctrl(bytes: &[u8]) -> BString {
    bytes
        .iter()
        .copied()
        .filter(|&b| !is_stripped_ctrl(b))
        .collect::<Vec<u8>>()
        .into()
}

/// Removes every byte outside the 7-bit range.
#[must_use]
pub fn strip_non_ascii(bytes: &[u8]) -> BString {
    bytes
        .iter()
        .copied()
        .filter(u8::is_ascii)
        .collect::<Vec<u8>>()
        .into()
}
