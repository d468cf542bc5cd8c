//! Codepoint-aware string operations over UTF-8 byte strings.
//!
//! Every operation first asks the [ASCII gate](crate::ascii::is_ascii). Pure
//! ASCII input takes a byte-oriented fast path whose results are identical to
//! the plain byte operation. Otherwise the operation either scans structural
//! [units](crate::units) (length, search, slicing, splicing, padding,
//! trimming, span scanning, splitting), or round-trips through the backend's
//! decoder and encoder (case mapping, reversal, case-insensitive matching).
//!
//! Offsets and lengths are always counted in code points, never bytes.
//!
//! Error policy
//! - Operations that clamp (`substring`, `pad`, `trim`, `span`, `split`,
//!   searches) never fail, whatever the input.
//! - Operations that decode propagate [`TextError`] unchanged and produce no
//!   partial result.

mod casing;
mod pad;
mod search;
mod slice;
mod split;

use bstr::BString;
#[cfg(test)]
pub(crate) use slice::clamp_range;
pub use split::Split;

use crate::{
    ascii,
    backend::{Backend, DefaultBackend},
    decode::decode_first,
    error::{DecodeError, EncodeError, TextError},
    options::TransliterationCase,
    translit, units,
};

/// String operations backed by `B`.
///
/// The engine is stateless apart from its backend; share it freely.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextEngine<B: Backend> {
    backend: B,
}

/// [`TextEngine`] over the build-time [`DefaultBackend`].
///
/// ```rust
/// use utf8text::Engine;
///
/// let text = Engine::default();
/// assert_eq!(text.length("h\u{e9}llo"), 5);
/// assert_eq!(text.substring("h\u{e9}llo", 1, Some(3)), "\u{e9}ll");
/// assert_eq!(text.reverse("caf\u{e9}").unwrap(), "\u{e9}fac");
/// ```
pub type Engine = TextEngine<DefaultBackend>;

impl<B: Backend> TextEngine<B> {
    /// Creates an engine over an explicit backend.
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    /// The backend this engine decodes and case-maps with.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Decodes `s` into code points.
    ///
    /// # Errors
    ///
    /// Malformed UTF-8.
    pub fn decode(&self, s: &(impl AsRef<[u8]> + ?Sized)) -> Result<Vec<u32>, DecodeError> {
        self.backend.decode(s.as_ref())
    }

    /// Encodes code points as UTF-8.
    ///
    /// # Errors
    ///
    /// Surrogates or values above `0x10FFFF`.
    pub fn encode(&self, codepoints: &[u32]) -> Result<BString, EncodeError> {
        self.backend.encode(codepoints).map(BString::from)
    }

    /// Whether `s` decodes without error.
    pub fn is_valid(&self, s: &(impl AsRef<[u8]> + ?Sized)) -> bool {
        let s = s.as_ref();
        ascii::is_ascii(s) || self.backend.decode(s).is_ok()
    }

    /// Number of code points in `s`.
    ///
    /// Counts structurally and never fails; a byte-order mark counts as one.
    pub fn length(&self, s: &(impl AsRef<[u8]> + ?Sized)) -> usize {
        let s = s.as_ref();
        if ascii::is_ascii(s) {
            s.len()
        } else {
            units::count(s)
        }
    }

    /// Code point of the first character of `s`.
    ///
    /// # Errors
    ///
    /// Empty input or a malformed leading sequence.
    pub fn ord(&self, s: &(impl AsRef<[u8]> + ?Sized)) -> Result<u32, DecodeError> {
        decode_first(s.as_ref())
    }

    /// Lenient sanitizer for untrusted input: removes ASCII control characters
    /// (keeping `\t`, `\n`, `\r`) and silently drops every byte sequence that
    /// is not valid UTF-8.
    ///
    /// ```rust
    /// let text = utf8text::Engine::default();
    /// assert_eq!(text.clean(b"ok\x00 \xC3\xA9 \xE2\x82 \xFF!"), "ok \u{e9}  !");
    /// ```
    pub fn clean(&self, s: &(impl AsRef<[u8]> + ?Sized)) -> BString {
        let stripped = ascii::strip_ascii_ctrl(s.as_ref());
        if ascii::is_ascii(&stripped) {
            return stripped;
        }
        let mut out = Vec::with_capacity(stripped.len());
        for chunk in stripped.utf8_chunks() {
            out.extend_from_slice(chunk.valid().as_bytes());
        }
        out.into()
    }

    /// Replaces accented Latin letters with plain ASCII, e.g. `é` → `e`,
    /// `Þ` → `Th`, `ß` → `ss`.
    pub fn transliterate_to_ascii(
        &self,
        s: &(impl AsRef<[u8]> + ?Sized),
        case: TransliterationCase,
    ) -> BString {
        let s = s.as_ref();
        if ascii::is_ascii(s) {
            return s.into();
        }
        translit::transliterate_bytes(s, case)
    }

    /// Decodes `bytes`, lets `f` rewrite the code points, and re-encodes.
    fn transcode(
        &self,
        bytes: &[u8],
        f: impl FnOnce(&B, Vec<u32>) -> Vec<u32>,
    ) -> Result<BString, TextError> {
        let codepoints = self.backend.decode(bytes)?;
        let codepoints = f(&self.backend, codepoints);
        Ok(self.backend.encode(&codepoints)?.into())
    }
}
