//! Strict UTF-8 decoding and encoding, plus codepoint-aware string operations
//! over raw byte strings.
//!
//! The decoder rejects everything the Unicode standard calls ill-formed:
//! overlong forms, surrogates, values above `U+10FFFF`, stray continuation
//! bytes and truncated sequences. Each rejection is reported as a
//! [`DecodeError`] carrying the byte offset where it was detected.
//!
//! [`TextEngine`] builds the usual string toolbox on top of that: length,
//! search, substring, splicing, splitting, reversal, padding, trimming, span
//! scanning, case mapping and case-insensitive matching. All offsets and
//! lengths count code points. Pure ASCII input skips the Unicode path
//! entirely.
//!
//! ```rust
//! use utf8text::{DecodeError, Engine, PadSide};
//!
//! let text = Engine::default();
//! assert_eq!(text.length("na\u{ef}ve"), 5);
//! assert_eq!(text.to_upper("\u{e9}t\u{e9}").unwrap(), "\u{c9}T\u{c9}");
//! assert_eq!(text.pad("7", 3, "0", PadSide::Left), "007");
//! assert_eq!(
//!     text.decode(&[0xC0_u8, 0xAF]),
//!     Err(DecodeError::InvalidCodepoint { offset: 1, value: 0x2F })
//! );
//! ```

pub mod ascii;
mod backend;
pub mod case;
pub mod decode;
pub mod encode;
mod engine;
mod error;
mod options;
pub mod translit;
pub mod units;

#[cfg(test)]
mod tests;

pub use backend::{Backend, DefaultBackend, ManualBackend, NativeBackend};
pub use engine::{Engine, Split, TextEngine};
pub use error::{DecodeError, EncodeError, TextError};
pub use options::{PadSide, TransliterationCase};
