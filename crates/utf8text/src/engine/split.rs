use core::{iter::FusedIterator, num::NonZeroUsize};

use bstr::BStr;

use super::TextEngine;
use crate::{ascii, backend::Backend, units};

/// Chunks of at most `n` code points, front to back. Created by
/// [`TextEngine::split`].
///
/// Cloning restarts from the clone's current position, so a fresh clone of a
/// fresh `Split` walks the whole string again.
#[derive(Debug, Clone)]
pub struct Split<'a> {
    rest: &'a [u8],
    chunk: NonZeroUsize,
    ascii: bool,
}

impl<'a> Iterator for Split<'a> {
    type Item = &'a BStr;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let at = if self.ascii {
            self.chunk.get().min(self.rest.len())
        } else {
            units::byte_offset(self.rest, self.chunk.get())
        };
        let (chunk, rest) = self.rest.split_at(at);
        self.rest = rest;
        Some(BStr::new(chunk))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.rest.is_empty() {
            (0, Some(0))
        } else if self.ascii {
            let n = self.rest.len().div_ceil(self.chunk.get());
            (n, Some(n))
        } else {
            (1, Some(self.rest.len()))
        }
    }
}

impl FusedIterator for Split<'_> {}

impl<B: Backend> TextEngine<B> {
    /// Splits `s` into consecutive chunks of `chunk` code points; the last
    /// chunk may be shorter. An empty string yields no chunks.
    ///
    /// Never fails: malformed bytes are grouped structurally.
    ///
    /// ```rust
    /// use std::num::NonZeroUsize;
    ///
    /// let text = utf8text::Engine::default();
    /// let two = NonZeroUsize::new(2).unwrap();
    /// let chunks: Vec<_> = text.split("h\u{e9}llo", two).collect();
    /// assert_eq!(chunks, ["h\u{e9}", "ll", "o"]);
    /// ```
    pub fn split<'a>(&self, s: &'a (impl AsRef<[u8]> + ?Sized), chunk: NonZeroUsize) -> Split<'a> {
        let s = s.as_ref();
        Split {
            rest: s,
            chunk,
            ascii: ascii::is_ascii(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::Engine;

    fn chunks(s: &str, n: usize) -> Vec<&BStr> {
        let n = NonZeroUsize::new(n).unwrap();
        Engine::default().split(s, n).collect()
    }

    #[rstest]
    #[case("abcdefg", 3, &["abc", "def", "g"])]
    #[case("abcdef", 3, &["abc", "def"])]
    #[case("abc", 10, &["abc"])]
    #[case("", 2, &[])]
    #[case("\u{1f600}\u{1f601}\u{1f602}", 2, &["\u{1f600}\u{1f601}", "\u{1f602}"])]
    #[case("\u{3b1}b\u{3b3}d", 1, &["\u{3b1}", "b", "\u{3b3}", "d"])]
    fn splits(#[case] s: &str, #[case] n: usize, #[case] expected: &[&str]) {
        assert_eq!(chunks(s, n), expected);
    }

    #[test]
    fn restartable_by_clone() {
        let text = Engine::default();
        let split = text.split("\u{e9}t\u{e9}!", NonZeroUsize::MIN);
        let first: Vec<_> = split.clone().collect();
        let second: Vec<_> = split.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
    }

    #[test]
    fn fused_and_sized() {
        let text = Engine::default();
        let mut split = text.split("abcde", NonZeroUsize::new(2).unwrap());
        assert_eq!(split.size_hint(), (3, Some(3)));
        assert_eq!(split.by_ref().count(), 3);
        assert_eq!(split.next(), None);
        assert_eq!(split.next(), None);
    }

    #[test]
    fn malformed_bytes_still_split() {
        let text = Engine::default();
        let out: Vec<_> = text
            .split(&[0xE2_u8, 0x82, 0x41, 0xFF], NonZeroUsize::new(2).unwrap())
            .collect();
        assert_eq!(out, [[0xE2_u8, 0x82, 0x41].as_slice(), [0xFF_u8].as_slice()]);
    }
}
