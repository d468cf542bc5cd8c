use core::str::Utf8Error;

use crate::{
    backend::Backend,
    decode::{self, BOM, is_surrogate},
    error::{DecodeError, EncodeError},
};

/// `core::str` validation and `char` case mapping.
///
/// Case mapping covers all of Unicode's simple and special casing, so results
/// can differ from [`ManualBackend`](super::ManualBackend) outside the ranges
/// its tables cover, and may change the number of code points (`ß` uppercases
/// to `SS`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NativeBackend;

/// Turns a `core` validation failure into the error the manual decoder reports
/// for the same input.
///
/// Everything before `valid_up_to` is well formed, so re-running the manual
/// decoder from there reaches the same first error.
fn diagnose(bytes: &[u8], err: Utf8Error) -> DecodeError {
    let valid = err.valid_up_to();
    match decode::decode(&bytes[valid..]) {
        Err(e) => e.shifted(valid),
        Ok(_) => match err.error_len() {
            None => DecodeError::TruncatedSequence {
                offset: bytes.len(),
            },
            Some(_) => DecodeError::IllegalLeadByte { offset: valid },
        },
    }
}

impl Backend for NativeBackend {
    fn decode(&self, bytes: &[u8]) -> Result<Vec<u32>, DecodeError> {
        let text = core::str::from_utf8(bytes).map_err(|err| diagnose(bytes, err))?;
        Ok(text
            .chars()
            .map(u32::from)
            .filter(|&cp| cp != BOM)
            .collect())
    }

    fn encode(&self, codepoints: &[u32]) -> Result<Vec<u8>, EncodeError> {
        let mut out = String::with_capacity(codepoints.len());
        for (index, &value) in codepoints.iter().enumerate() {
            if value == BOM {
                continue;
            }
            let Some(c) = char::from_u32(value) else {
                return Err(if is_surrogate(value) {
                    EncodeError::IllegalSurrogate { index, value }
                } else {
                    EncodeError::OutOfRange { index, value }
                });
            };
            out.push(c);
        }
        Ok(out.into_bytes())
    }

    fn push_upper(&self, cp: u32, out: &mut Vec<u32>) {
        match char::from_u32(cp) {
            Some(c) => out.extend(c.to_uppercase().map(u32::from)),
            None => out.push(cp),
        }
    }

    fn push_lower(&self, cp: u32, out: &mut Vec<u32>) {
        match char::from_u32(cp) {
            Some(c) => out.extend(c.to_lowercase().map(u32::from)),
            None => out.push(cp),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::backend::ManualBackend;

    #[rstest]
    #[case(&[0xC0, 0x80])]
    #[case(&[0x80])]
    #[case(&[0xE2, 0x82])]
    #[case(&[0x61, 0xE2, 0x41])]
    #[case(&[0xED, 0xA0, 0x80])]
    #[case(&[0xF4, 0x90, 0x80, 0x80])]
    #[case(&[0xF8, 0x88, 0x80, 0x80, 0x80])]
    #[case(&[0x61, 0xC3, 0xA9, 0xFE])]
    #[case("ok \u{20ac}".as_bytes())]
    #[case(&[0xEF, 0xBB, 0xBF, 0x41])]
    fn decode_agrees_with_manual(#[case] input: &[u8]) {
        assert_eq!(NativeBackend.decode(input), ManualBackend.decode(input));
    }

    #[rstest]
    #[case(&[0x41, 0xFEFF, 0xE9])]
    #[case(&[0xD800])]
    #[case(&[0x41, 0x11_0000])]
    fn encode_agrees_with_manual(#[case] input: &[u32]) {
        assert_eq!(NativeBackend.encode(input), ManualBackend.encode(input));
    }

    #[test]
    fn full_unicode_case_mapping() {
        let mut out = Vec::new();
        NativeBackend.push_upper(0xDF, &mut out);
        assert_eq!(out, [0x53, 0x53]);
        out.clear();
        ManualBackend.push_upper(0xDF, &mut out);
        assert_eq!(out, [0xDF]);
    }
}
