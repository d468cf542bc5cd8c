//! UTF-8 encoder, the inverse of [`decode`](crate::decode::decode).

use crate::{
    decode::{BOM, MAX_SCALAR, is_surrogate},
    error::EncodeError,
};

/// Encodes code points as UTF-8, in order.
///
/// `U+FEFF` is skipped. The whole call fails on the first invalid value; no
/// partial output is returned.
///
/// # Errors
///
/// [`EncodeError::IllegalSurrogate`] for `0xD800..=0xDFFF`,
/// [`EncodeError::OutOfRange`] above `0x10FFFF`.
///
/// ```rust
/// use utf8text::encode::encode;
///
/// assert_eq!(encode(&[0x63, 0xE9]).unwrap(), "c\u{e9}".as_bytes());
/// ```
pub fn encode(codepoints: &[u32]) -> Result<Vec<u8>, EncodeError> {
    let mut out = Vec::with_capacity(codepoints.len());
    for (index, &value) in codepoints.iter().enumerate() {
        push_encoded(&mut out, index, value).inspect_err(|err| {
            tracing::trace!(?err, "rejected code point");
        })?;
    }
    Ok(out)
}

#[expect(clippy::cast_possible_truncation)]
fn push_encoded(out: &mut Vec<u8>, index: usize, v: u32) -> Result<(), EncodeError> {
    match v {
        0..=0x7F => out.push(v as u8),
        0x80..=0x7FF => out.extend_from_slice(&[0xC0 | (v >> 6) as u8, 0x80 | (v & 0x3F) as u8]),
        BOM => {}
        _ if is_surrogate(v) => return Err(EncodeError::IllegalSurrogate { index, value: v }),
        0x800..=0xFFFF => out.extend_from_slice(&[
            0xE0 | (v >> 12) as u8,
            0x80 | ((v >> 6) & 0x3F) as u8,
            0x80 | (v & 0x3F) as u8,
        ]),
        0x1_0000..=MAX_SCALAR => out.extend_from_slice(&[
            0xF0 | (v >> 18) as u8,
            0x80 | ((v >> 12) & 0x3F) as u8,
            0x80 | ((v >> 6) & 0x3F) as u8,
            0x80 | (v & 0x3F) as u8,
        ]),
        _ => return Err(EncodeError::OutOfRange { index, value: v }),
    }
    Ok(())
}
