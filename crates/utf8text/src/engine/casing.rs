use bstr::BString;

use super::TextEngine;
use crate::{ascii, backend::Backend, error::TextError, units::Units};

/// Characters after which [`TextEngine::title_case`] starts a new word.
#[inline]
fn is_word_boundary(cp: u32) -> bool {
    matches!(cp, 0x20 | 0x09 | 0x0A | 0x0D | 0x0C | 0x0B)
}

impl<B: Backend> TextEngine<B> {
    /// Uppercases every code point.
    ///
    /// # Errors
    ///
    /// Malformed UTF-8.
    pub fn to_upper(&self, s: &(impl AsRef<[u8]> + ?Sized)) -> Result<BString, TextError> {
        let s = s.as_ref();
        if ascii::is_ascii(s) {
            return Ok(s.to_ascii_uppercase().into());
        }
        self.transcode(s, |backend, codepoints| {
            let mut out = Vec::with_capacity(codepoints.len());
            for cp in codepoints {
                backend.push_upper(cp, &mut out);
            }
            out
        })
    }

    /// Lowercases every code point.
    ///
    /// # Errors
    ///
    /// Malformed UTF-8.
    pub fn to_lower(&self, s: &(impl AsRef<[u8]> + ?Sized)) -> Result<BString, TextError> {
        let s = s.as_ref();
        if ascii::is_ascii(s) {
            return Ok(s.to_ascii_lowercase().into());
        }
        self.transcode(s, |backend, codepoints| {
            let mut out = Vec::with_capacity(codepoints.len());
            for cp in codepoints {
                backend.push_lower(cp, &mut out);
            }
            out
        })
    }

    /// Uppercases the first code point and copies the rest verbatim.
    ///
    /// # Errors
    ///
    /// Malformed UTF-8 in the first character.
    pub fn upper_first(&self, s: &(impl AsRef<[u8]> + ?Sized)) -> Result<BString, TextError> {
        let s = s.as_ref();
        let mut units = Units::new(s);
        let Some(first) = units.next() else {
            return Ok(BString::default());
        };
        let mut out: Vec<u8> = if ascii::is_ascii(first) {
            first.to_ascii_uppercase()
        } else {
            self.to_upper(first)?.into()
        };
        out.extend_from_slice(units.as_bytes());
        Ok(out.into())
    }

    /// Uppercases the first code point of every word. Words are separated by
    /// space, tab, line feed, carriage return, form feed or vertical tab; all
    /// other code points are left as they are.
    ///
    /// ```rust
    /// let text = utf8text::Engine::default();
    /// assert_eq!(text.title_case("\u{e9}t\u{e9} \u{e0}\tparis").unwrap(), "\u{c9}t\u{e9} \u{c0}\tParis");
    /// ```
    ///
    /// # Errors
    ///
    /// Malformed UTF-8.
    pub fn title_case(&self, s: &(impl AsRef<[u8]> + ?Sized)) -> Result<BString, TextError> {
        let s = s.as_ref();
        if ascii::is_ascii(s) {
            let mut out = s.to_vec();
            let mut at_boundary = true;
            for b in &mut out {
                if at_boundary {
                    b.make_ascii_uppercase();
                }
                at_boundary = is_word_boundary(u32::from(*b));
            }
            return Ok(out.into());
        }
        self.transcode(s, |backend, codepoints| {
            let mut out = Vec::with_capacity(codepoints.len());
            let mut at_boundary = true;
            for cp in codepoints {
                if at_boundary {
                    backend.push_upper(cp, &mut out);
                } else {
                    out.push(cp);
                }
                at_boundary = is_word_boundary(cp);
            }
            out
        })
    }
}
