//! Structural character boundaries over raw bytes.
//!
//! A *unit* is a lead byte followed by as many continuation bytes as the lead
//! announces (or fewer, if a non-continuation byte or the end of input comes
//! first). A byte that cannot lead a sequence forms a unit on its own. For
//! valid UTF-8 every unit is exactly one encoded code point, so counting,
//! slicing and matching units is equivalent to doing the same on a decoded
//! sequence. For malformed input the scan still terminates with a best-effort
//! split instead of an error, which is what the clamping operations need.

use core::ops::Range;

/// Total sequence length announced by a lead byte.
#[inline]
pub(crate) fn announced_len(lead: u8) -> usize {
    match lead {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        0xF8..=0xFB => 5,
        0xFC..=0xFD => 6,
        _ => 1,
    }
}

#[inline]
fn is_continuation(b: u8) -> bool {
    b & 0xC0 == 0x80
}

/// Length in bytes of the unit that starts `bytes`.
fn unit_len(bytes: &[u8]) -> usize {
    let Some(&lead) = bytes.first() else {
        return 0;
    };
    let announced = announced_len(lead).min(bytes.len());
    1 + bytes[1..announced]
        .iter()
        .take_while(|&&b| is_continuation(b))
        .count()
}

/// Iterator over the units of a byte string, front to back.
#[derive(Debug, Clone)]
pub struct Units<'a> {
    rest: &'a [u8],
}

impl<'a> Units<'a> {
    /// Starts scanning `bytes`.
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { rest: bytes }
    }

    /// The part that has not been yielded yet.
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.rest
    }
}

impl<'a> Iterator for Units<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let len = unit_len(self.rest);
        if len == 0 {
            return None;
        }
        let (unit, rest) = self.rest.split_at(len);
        self.rest = rest;
        Some(unit)
    }
}

/// Number of units in `bytes`.
pub(crate) fn count(bytes: &[u8]) -> usize {
    Units::new(bytes).count()
}

/// Byte offset at which unit `n` starts, or `bytes.len()` when there are fewer
/// than `n` units.
pub(crate) fn byte_offset(bytes: &[u8], n: usize) -> usize {
    let mut units = Units::new(bytes);
    for _ in 0..n {
        if units.next().is_none() {
            break;
        }
    }
    bytes.len() - units.as_bytes().len()
}

/// Byte range covering units `range.start..range.end`.
pub(crate) fn byte_range(bytes: &[u8], range: Range<usize>) -> Range<usize> {
    let start = byte_offset(bytes, range.start);
    let end = start + byte_offset(&bytes[start..], range.end.saturating_sub(range.start));
    start..end
}

/// Start offsets of every unit, plus `bytes.len()` as a final sentinel.
pub(crate) fn boundaries(bytes: &[u8]) -> Vec<usize> {
    let mut out = Vec::with_capacity(bytes.len() + 1);
    let mut offset = 0;
    for unit in Units::new(bytes) {
        out.push(offset);
        offset += unit.len();
    }
    out.push(offset);
    out
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::ascii(b"ab", &[&b"a"[..], &b"b"[..]])]
    #[case::mixed("h\u{e9}\u{20ac}".as_bytes(), &["h".as_bytes(), "\u{e9}".as_bytes(), "\u{20ac}".as_bytes()])]
    #[case::stray_continuation(&[0x80, 0x41], &[&[0x80_u8][..], &b"A"[..]])]
    #[case::cut_short(&[0xE2, 0x82, 0x41], &[&[0xE2_u8, 0x82][..], &b"A"[..]])]
    #[case::truncated_tail(&[0x41, 0xF0, 0x9F], &[&b"A"[..], &[0xF0_u8, 0x9F][..]])]
    #[case::invalid_lead(&[0xFF, 0xFE], &[&[0xFF_u8][..], &[0xFE_u8][..]])]
    fn splits(#[case] input: &[u8], #[case] expected: &[&[u8]]) {
        let units: Vec<&[u8]> = Units::new(input).collect();
        assert_eq!(units, expected);
    }

    #[test]
    fn offsets_and_ranges() {
        let s = "h\u{e9}llo".as_bytes();
        assert_eq!(count(s), 5);
        assert_eq!(byte_offset(s, 0), 0);
        assert_eq!(byte_offset(s, 2), 3);
        assert_eq!(byte_offset(s, 99), s.len());
        assert_eq!(byte_range(s, 1..3), 1..4);
        assert_eq!(boundaries(s), [0, 1, 3, 4, 5, 6]);
    }

    #[test]
    fn counts_match_chars_on_valid_text() {
        let s = "\u{feff}Gr\u{fc}\u{df}e \u{1f600}!";
        assert_eq!(count(s.as_bytes()), s.chars().count());
    }
}
