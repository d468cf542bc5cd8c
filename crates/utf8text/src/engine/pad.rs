use bstr::{BStr, BString};

use super::TextEngine;
use crate::{
    ascii,
    backend::Backend,
    options::PadSide,
    units::{self, Units},
};

/// Characters [`TextEngine::trim`] strips when no charset is given.
const DEFAULT_TRIM: &[u8] = b" \t\n\r\0\x0B";

/// The characters of a trim charset or span mask.
///
/// ASCII sets become a 128-bit lookup; anything else keeps its units and is
/// matched one unit at a time.
enum CharSet<'a> {
    Ascii(u128),
    Units(Vec<&'a [u8]>),
}

impl<'a> CharSet<'a> {
    fn new(set: &'a [u8]) -> Self {
        if ascii::is_ascii(set) {
            Self::Ascii(set.iter().fold(0, |bits, &b| bits | (1_u128 << b)))
        } else {
            Self::Units(Units::new(set).collect())
        }
    }

    fn contains(&self, unit: &[u8]) -> bool {
        match self {
            Self::Ascii(bits) => matches!(unit, [b] if *b < 0x80 && bits & (1_u128 << b) != 0),
            Self::Units(units) => units.iter().any(|u| *u == unit),
        }
    }
}

/// Byte capacity for `len` bytes plus `missing` repetitions of a `fill_len`
/// byte unit. Falls back to `len` when the product does not fit, and lets the
/// buffer grow instead.
fn padded_capacity(len: usize, missing: usize, fill_len: usize) -> usize {
    missing
        .checked_mul(fill_len)
        .and_then(|extra| extra.checked_add(len))
        .unwrap_or(len)
}

/// Appends `count` characters taken cyclically from `fill`.
fn push_fill(out: &mut Vec<u8>, fill: &[u8], count: usize) {
    for unit in Units::new(fill).cycle().take(count) {
        out.extend_from_slice(unit);
    }
}

impl<B: Backend> TextEngine<B> {
    /// Pads `s` with repetitions of `fill` until it is `target` code points
    /// long. For [`PadSide::Both`] an odd amount puts the extra character on
    /// the right.
    ///
    /// Does nothing when `s` is already long enough or `fill` is empty. The
    /// last repetition of `fill` is cut short as needed.
    ///
    /// ```rust
    /// use utf8text::{Engine, PadSide};
    ///
    /// let text = Engine::default();
    /// assert_eq!(text.pad("5", 3, "0", PadSide::Left), "005");
    /// assert_eq!(text.pad("\u{e9}", 4, "*-", PadSide::Both), "*\u{e9}*-");
    /// ```
    pub fn pad(
        &self,
        s: &(impl AsRef<[u8]> + ?Sized),
        target: usize,
        fill: &(impl AsRef<[u8]> + ?Sized),
        side: PadSide,
    ) -> BString {
        let (s, fill) = (s.as_ref(), fill.as_ref());
        let len = self.length(s);
        if target <= len || fill.is_empty() {
            return s.into();
        }
        let missing = target - len;
        let (left, right) = match side {
            PadSide::Left => (missing, 0),
            PadSide::Right => (0, missing),
            PadSide::Both => (missing / 2, missing - missing / 2),
        };

        let mut out = Vec::with_capacity(padded_capacity(s.len(), missing, fill.len()));
        push_fill(&mut out, fill, left);
        out.extend_from_slice(s);
        push_fill(&mut out, fill, right);
        out.into()
    }

    /// Strips characters in `charset` from both ends of `s`.
    ///
    /// `None` strips space, tab, line feed, carriage return, NUL and vertical
    /// tab. Each character of `charset` stands for itself; there is no range
    /// syntax.
    ///
    /// ```rust
    /// let text = utf8text::Engine::default();
    /// assert_eq!(text.trim("  hi\n", None), "hi");
    /// assert_eq!(text.trim("\u{b7}\u{b7}hi\u{b7}", Some("\u{b7}".as_bytes())), "hi");
    /// ```
    pub fn trim<'a>(&self, s: &'a (impl AsRef<[u8]> + ?Sized), charset: Option<&[u8]>) -> &'a BStr {
        trim_ends(s.as_ref(), charset, true, true)
    }

    /// Strips characters in `charset` from the start of `s`. See
    /// [`trim`](Self::trim).
    pub fn left_trim<'a>(
        &self,
        s: &'a (impl AsRef<[u8]> + ?Sized),
        charset: Option<&[u8]>,
    ) -> &'a BStr {
        trim_ends(s.as_ref(), charset, true, false)
    }

    /// Strips characters in `charset` from the end of `s`. See
    /// [`trim`](Self::trim).
    pub fn right_trim<'a>(
        &self,
        s: &'a (impl AsRef<[u8]> + ?Sized),
        charset: Option<&[u8]>,
    ) -> &'a BStr {
        trim_ends(s.as_ref(), charset, false, true)
    }

    /// Length in code points of the leading run of `s` made only of
    /// characters in `mask`.
    ///
    /// With `offset` or `length` the run is measured on
    /// [`substring(s, offset, length)`](Self::substring) instead.
    pub fn span(
        &self,
        s: &(impl AsRef<[u8]> + ?Sized),
        mask: &(impl AsRef<[u8]> + ?Sized),
        offset: Option<isize>,
        length: Option<isize>,
    ) -> usize {
        self.leading_run(s.as_ref(), mask.as_ref(), offset, length, true)
    }

    /// Length in code points of the leading run of `s` made only of
    /// characters *not* in `mask`. See [`span`](Self::span).
    pub fn cspan(
        &self,
        s: &(impl AsRef<[u8]> + ?Sized),
        mask: &(impl AsRef<[u8]> + ?Sized),
        offset: Option<isize>,
        length: Option<isize>,
    ) -> usize {
        self.leading_run(s.as_ref(), mask.as_ref(), offset, length, false)
    }

    fn leading_run(
        &self,
        s: &[u8],
        mask: &[u8],
        offset: Option<isize>,
        length: Option<isize>,
        inside: bool,
    ) -> usize {
        if s.is_empty() || mask.is_empty() {
            return 0;
        }
        let s: &[u8] = if offset.is_some() || length.is_some() {
            self.substring(s, offset.unwrap_or(0), length)
        } else {
            s
        };
        let set = CharSet::new(mask);
        if ascii::is_ascii(s) {
            return s
                .iter()
                .take_while(|&&b| set.contains(&[b]) == inside)
                .count();
        }
        Units::new(s)
            .take_while(|unit| set.contains(unit) == inside)
            .count()
    }
}

fn trim_ends<'a>(s: &'a [u8], charset: Option<&[u8]>, left: bool, right: bool) -> &'a BStr {
    let set = CharSet::new(charset.unwrap_or(DEFAULT_TRIM));
    if ascii::is_ascii(s) {
        let mut range = 0..s.len();
        if left {
            while range.start < range.end && set.contains(&s[range.start..=range.start]) {
                range.start += 1;
            }
        }
        if right {
            while range.start < range.end && set.contains(&s[range.end - 1..range.end]) {
                range.end -= 1;
            }
        }
        return BStr::new(&s[range]);
    }

    let bounds = units::boundaries(s);
    let unit = |i: usize| &s[bounds[i]..bounds[i + 1]];
    let (mut first, mut last) = (0, bounds.len() - 1);
    if left {
        while first < last && set.contains(unit(first)) {
            first += 1;
        }
    }
    if right {
        while first < last && set.contains(unit(last - 1)) {
            last -= 1;
        }
    }
    BStr::new(&s[bounds[first]..bounds[last]])
}
