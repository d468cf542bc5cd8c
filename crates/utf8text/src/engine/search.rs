use core::{cmp::Ordering, ops::Range};

use bstr::{BStr, BString, ByteSlice};

use super::TextEngine;
use crate::{
    ascii,
    backend::Backend,
    decode::decode_first,
    error::TextError,
    units::{self, Units},
};

/// A lowercased copy of a string, with every folded code point remembering
/// the byte span of the source character it came from. One source character
/// may fold to several code points (`İ` → `i̇` under full Unicode casing).
#[derive(Debug, Default)]
struct Folded {
    codepoints: Vec<u32>,
    spans: Vec<Range<usize>>,
}

impl Folded {
    fn find_from(&self, needle: &[u32], from: usize) -> Option<usize> {
        if needle.is_empty() {
            return Some(from);
        }
        self.codepoints
            .get(from..)?
            .windows(needle.len())
            .position(|w| w == needle)
            .map(|i| i + from)
    }
}

/// The first byte match that starts where a character starts. A malformed
/// needle can otherwise match the tail bytes of a multi-byte character.
fn first_on_boundary(s: &[u8], mut matches: impl Iterator<Item = usize>) -> Option<usize> {
    if ascii::is_ascii(s) {
        return matches.next();
    }
    let bounds = units::boundaries(s);
    matches.find(|at| bounds.binary_search(at).is_ok())
}

impl<B: Backend> TextEngine<B> {
    /// Code point index of the first occurrence of `needle` at or after code
    /// point `from`.
    ///
    /// An empty needle matches at `from`. Returns `None` when there is no
    /// match or `from` is past the end. Only matches that start on a character
    /// boundary count.
    pub fn index_of(
        &self,
        s: &(impl AsRef<[u8]> + ?Sized),
        needle: &(impl AsRef<[u8]> + ?Sized),
        from: usize,
    ) -> Option<usize> {
        let (s, needle) = (s.as_ref(), needle.as_ref());
        let start = self.search_start(s, from)?;
        let tail = &s[start..];
        let found = first_on_boundary(tail, tail.find_iter(needle))?;
        Some(from + self.length(&tail[..found]))
    }

    /// Code point index of the last occurrence of `needle` that starts at or
    /// after code point `from`.
    pub fn last_index_of(
        &self,
        s: &(impl AsRef<[u8]> + ?Sized),
        needle: &(impl AsRef<[u8]> + ?Sized),
        from: usize,
    ) -> Option<usize> {
        let (s, needle) = (s.as_ref(), needle.as_ref());
        let start = self.search_start(s, from)?;
        let tail = &s[start..];
        let found = first_on_boundary(tail, tail.rfind_iter(needle))?;
        Some(from + self.length(&tail[..found]))
    }

    /// Byte offset of code point `from`, or `None` when it lies past the end.
    fn search_start(&self, s: &[u8], from: usize) -> Option<usize> {
        if from > self.length(s) {
            return None;
        }
        Some(if ascii::is_ascii(s) {
            from
        } else {
            units::byte_offset(s, from)
        })
    }

    /// Compares `a` and `b` after lowercasing both, byte by byte.
    ///
    /// # Errors
    ///
    /// Malformed UTF-8 in either operand.
    pub fn case_insensitive_compare(
        &self,
        a: &(impl AsRef<[u8]> + ?Sized),
        b: &(impl AsRef<[u8]> + ?Sized),
    ) -> Result<Ordering, TextError> {
        let (a, b) = (a.as_ref(), b.as_ref());
        if ascii::is_ascii(a) && ascii::is_ascii(b) {
            let lower = |s: &[u8]| s.iter().map(u8::to_ascii_lowercase).collect::<Vec<_>>();
            return Ok(lower(a).cmp(&lower(b)));
        }
        Ok(self.to_lower(a)?.cmp(&self.to_lower(b)?))
    }

    /// The tail of `s` starting at the first case-insensitive occurrence of
    /// `needle`, with its original casing.
    ///
    /// An empty needle returns all of `s`.
    ///
    /// ```rust
    /// let text = utf8text::Engine::default();
    /// let tail = text.case_insensitive_find("Stadt M\u{dc}NCHEN", "m\u{fc}n").unwrap();
    /// assert_eq!(tail.unwrap(), "M\u{dc}NCHEN");
    /// ```
    ///
    /// # Errors
    ///
    /// Malformed UTF-8 in `s` or `needle`.
    pub fn case_insensitive_find<'a>(
        &self,
        s: &'a (impl AsRef<[u8]> + ?Sized),
        needle: &(impl AsRef<[u8]> + ?Sized),
    ) -> Result<Option<&'a BStr>, TextError> {
        let (s, needle) = (s.as_ref(), needle.as_ref());
        if ascii::is_ascii(s) && ascii::is_ascii(needle) {
            let found = s.to_ascii_lowercase().find(needle.to_ascii_lowercase());
            return Ok(found.map(|i| BStr::new(&s[i..])));
        }
        let haystack = self.fold(s)?;
        let needle = self.fold_needle(needle)?;
        Ok(haystack.find_from(&needle, 0).map(|i| {
            let start = haystack.spans.get(i).map_or(s.len(), |span| span.start);
            BStr::new(&s[start..])
        }))
    }

    /// Replaces every case-insensitive occurrence of `search` with
    /// `replacement`, left to right and without overlap, and returns the new
    /// string with the number of replacements. Unmatched text keeps its
    /// original bytes.
    ///
    /// An empty `search` leaves `s` unchanged.
    ///
    /// # Errors
    ///
    /// Malformed UTF-8 in any operand.
    pub fn case_insensitive_replace(
        &self,
        s: &(impl AsRef<[u8]> + ?Sized),
        search: &(impl AsRef<[u8]> + ?Sized),
        replacement: &(impl AsRef<[u8]> + ?Sized),
    ) -> Result<(BString, usize), TextError> {
        let (s, search, replacement) = (s.as_ref(), search.as_ref(), replacement.as_ref());
        if search.is_empty() {
            return Ok((s.into(), 0));
        }

        if ascii::is_ascii(s) && ascii::is_ascii(search) && ascii::is_ascii(replacement) {
            let lowered = s.to_ascii_lowercase();
            let search = search.to_ascii_lowercase();
            let mut out = Vec::with_capacity(s.len());
            let mut cursor = 0;
            let mut count = 0;
            for start in lowered.find_iter(&search) {
                out.extend_from_slice(&s[cursor..start]);
                out.extend_from_slice(replacement);
                cursor = start + search.len();
                count += 1;
            }
            out.extend_from_slice(&s[cursor..]);
            return Ok((out.into(), count));
        }

        self.backend.decode(replacement)?;
        let haystack = self.fold(s)?;
        let needle = self.fold_needle(search)?;
        if needle.is_empty() {
            return Ok((s.into(), 0));
        }

        let mut out = Vec::with_capacity(s.len());
        let mut cursor = 0;
        let mut count = 0;
        let mut i = 0;
        while let Some(pos) = haystack.find_from(&needle, i) {
            let start = haystack.spans[pos].start.max(cursor);
            let end = haystack.spans[pos + needle.len() - 1].end;
            out.extend_from_slice(&s[cursor..start]);
            out.extend_from_slice(replacement);
            cursor = end;
            count += 1;
            i = pos + needle.len();
            // Skip the rest of a character whose folded form the match ended inside.
            while haystack.spans.get(i).is_some_and(|span| span.start < cursor) {
                i += 1;
            }
        }
        out.extend_from_slice(&s[cursor..]);
        Ok((out.into(), count))
    }

    /// Lowercases `s` character by character, keeping source spans.
    fn fold(&self, s: &[u8]) -> Result<Folded, TextError> {
        // Validate as a whole so errors carry offsets into `s`.
        self.backend.decode(s)?;
        let mut folded = Folded::default();
        let mut offset = 0;
        for unit in Units::new(s) {
            let span = offset..offset + unit.len();
            offset = span.end;
            let before = folded.codepoints.len();
            self.backend.push_lower(decode_first(unit)?, &mut folded.codepoints);
            let added = folded.codepoints.len() - before;
            folded.spans.extend(core::iter::repeat_n(span, added));
        }
        Ok(folded)
    }

    fn fold_needle(&self, needle: &[u8]) -> Result<Vec<u32>, TextError> {
        let mut out = Vec::with_capacity(needle.len());
        for cp in self.backend.decode(needle)? {
            self.backend.push_lower(cp, &mut out);
        }
        Ok(out)
    }
}
