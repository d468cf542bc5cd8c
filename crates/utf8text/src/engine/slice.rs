use core::ops::Range;

use bstr::{BStr, BString};

use super::TextEngine;
use crate::{ascii, backend::Backend, error::TextError, units};

/// Resolves a possibly negative `offset` and optional `length` against a
/// string of `len` code points.
///
/// - a negative `offset` counts from the end and stops at the start;
/// - an `offset` past the end yields an empty range at the end;
/// - `None` runs to the end, a negative `length` stops that many code points
///   before the end;
/// - a range whose end falls before its start is empty.
pub(crate) fn clamp_range(len: usize, offset: isize, length: Option<isize>) -> Range<usize> {
    let start = if offset < 0 {
        len.saturating_sub(offset.unsigned_abs())
    } else {
        offset.unsigned_abs().min(len)
    };
    let end = match length {
        None => len,
        Some(l) if l < 0 => len.saturating_sub(l.unsigned_abs()),
        Some(l) => start.saturating_add(l.unsigned_abs()).min(len),
    };
    start..end.max(start)
}

impl<B: Backend> TextEngine<B> {
    /// Code points `offset..offset + length` of `s`.
    ///
    /// A negative `offset` counts from the end, `None` runs to the end and a
    /// negative `length` stops that many code points before the end. Ranges
    /// that fall outside `s` are clamped, and an impossible range returns an
    /// empty string rather than an error.
    ///
    /// ```rust
    /// let text = utf8text::Engine::default();
    /// assert_eq!(text.substring("h\u{e9}llo", 1, Some(3)), "\u{e9}ll");
    /// assert_eq!(text.substring("h\u{e9}llo", -2, None), "lo");
    /// assert_eq!(text.substring("h\u{e9}llo", 9, None), "");
    /// ```
    pub fn substring<'a>(
        &self,
        s: &'a (impl AsRef<[u8]> + ?Sized),
        offset: isize,
        length: Option<isize>,
    ) -> &'a BStr {
        let s = s.as_ref();
        let range = if ascii::is_ascii(s) {
            clamp_range(s.len(), offset, length)
        } else {
            units::byte_range(s, clamp_range(units::count(s), offset, length))
        };
        BStr::new(&s[range])
    }

    /// Replaces code points `offset..offset + length` of `s` with
    /// `replacement`. Arguments resolve as in [`substring`](Self::substring);
    /// an empty range inserts without removing. Bytes outside the range,
    /// byte-order marks included, are kept as they are.
    ///
    /// # Errors
    ///
    /// Malformed UTF-8 in `s` or `replacement`.
    pub fn splice_replace(
        &self,
        s: &(impl AsRef<[u8]> + ?Sized),
        replacement: &(impl AsRef<[u8]> + ?Sized),
        offset: isize,
        length: Option<isize>,
    ) -> Result<BString, TextError> {
        let (s, replacement) = (s.as_ref(), replacement.as_ref());
        let range = if ascii::is_ascii(s) {
            clamp_range(s.len(), offset, length)
        } else {
            self.backend.decode(s)?;
            units::byte_range(s, clamp_range(units::count(s), offset, length))
        };
        if !ascii::is_ascii(replacement) {
            self.backend.decode(replacement)?;
        }

        let mut out = Vec::with_capacity(s.len() + replacement.len());
        out.extend_from_slice(&s[..range.start]);
        out.extend_from_slice(replacement);
        out.extend_from_slice(&s[range.end..]);
        Ok(out.into())
    }

    /// `s` with its code points in reverse order. Multi-byte characters move
    /// as a whole.
    ///
    /// # Errors
    ///
    /// Malformed UTF-8.
    pub fn reverse(&self, s: &(impl AsRef<[u8]> + ?Sized)) -> Result<BString, TextError> {
        let s = s.as_ref();
        if ascii::is_ascii(s) {
            return Ok(s.iter().rev().copied().collect::<Vec<u8>>().into());
        }
        self.transcode(s, |_, mut codepoints| {
            codepoints.reverse();
            codepoints
        })
    }
}
