//! Codec and case-mapping backends.
//!
//! [`TextEngine`](crate::TextEngine) is generic over a [`Backend`] instead of
//! branching on a capability flag inside every operation. Two implementations
//! exist:
//! - [`ManualBackend`]: the hand-written decoder/encoder and the built-in case
//!   tables.
//! - [`NativeBackend`]: `core`'s UTF-8 validation and `char` case mapping.
//!
//! Both report identical [`DecodeError`]s and [`EncodeError`]s. They differ
//! only in case-mapping coverage. [`DefaultBackend`] is picked at build time
//! by the `native` cargo feature.

mod manual;
mod native;

pub use manual::ManualBackend;
pub use native::NativeBackend;

use crate::error::{DecodeError, EncodeError};

/// Strict UTF-8 codec plus per-codepoint case mapping.
pub trait Backend {
    /// Decodes `bytes`, dropping byte-order marks.
    ///
    /// # Errors
    ///
    /// Any malformed input; see [`decode`](crate::decode::decode).
    fn decode(&self, bytes: &[u8]) -> Result<Vec<u32>, DecodeError>;

    /// Encodes `codepoints`, skipping byte-order marks.
    ///
    /// # Errors
    ///
    /// Surrogates or values above `0x10FFFF`; see
    /// [`encode`](crate::encode::encode).
    fn encode(&self, codepoints: &[u32]) -> Result<Vec<u8>, EncodeError>;

    /// Appends the uppercase form of `cp`. May push more than one code point.
    fn push_upper(&self, cp: u32, out: &mut Vec<u32>);

    /// Appends the lowercase form of `cp`. May push more than one code point.
    fn push_lower(&self, cp: u32, out: &mut Vec<u32>);
}

/// Backend used by [`Engine`](crate::Engine).
#[cfg(not(feature = "native"))]
pub type DefaultBackend = ManualBackend;

/// Backend used by [`Engine`](crate::Engine).
#[cfg(feature = "native")]
pub type DefaultBackend = NativeBackend;
