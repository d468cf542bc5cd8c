//! Strict UTF-8 decoder.
//!
//! A single pass over the input drives a small state machine. At a sequence
//! boundary the lead byte is classified and the number of continuation bytes
//! still owed is recorded; each continuation byte then contributes six bits
//! until the sequence closes and the assembled value is validated.
//!
//! Validity rules applied when a sequence closes, in order:
//! 1. shortest form: a 2-byte sequence must encode at least `0x80`, a 3-byte
//!    one at least `0x800`, a 4-byte one at least `0x10000`. Five- and six-byte
//!    sequences are accepted structurally so that their lead bytes are not
//!    misreported, but they never close successfully.
//! 2. no surrogates (`0xD800..=0xDFFF`).
//! 3. nothing above `0x10FFFF`.
//!
//! The byte-order mark `U+FEFF` is valid but never emitted.
//!
//! There is no lossy mode. Use [`TextEngine::clean`](crate::TextEngine::clean)
//! to sanitize untrusted input first.

use crate::error::DecodeError;

pub(crate) const BOM: u32 = 0xFEFF;
pub(crate) const MAX_SCALAR: u32 = 0x10_FFFF;

#[inline]
pub(crate) fn is_surrogate(value: u32) -> bool {
    (value & 0xFFFF_F800) == 0xD800
}

/// Cursor for one decoding run. Never outlives a call to [`decode`].
#[derive(Debug, Clone, Copy)]
struct DecoderState {
    /// Continuation bytes still owed; zero at a sequence boundary.
    continuation_bytes_expected: u32,
    accumulated_value: u32,
    /// Total length of the open sequence.
    sequence_length: u32,
}

impl DecoderState {
    const BOUNDARY: Self = Self {
        continuation_bytes_expected: 0,
        accumulated_value: 0,
        sequence_length: 1,
    };

    fn open(lead_bits: u32, sequence_length: u32) -> Self {
        let continuation_bytes_expected = sequence_length - 1;
        Self {
            continuation_bytes_expected,
            accumulated_value: lead_bits << (6 * continuation_bytes_expected),
            sequence_length,
        }
    }

    fn at_boundary(&self) -> bool {
        self.continuation_bytes_expected == 0
    }

    /// Smallest value this sequence length may encode.
    fn shortest_form_floor(&self) -> Option<u32> {
        match self.sequence_length {
            2 => Some(0x80),
            3 => Some(0x800),
            4 => Some(0x1_0000),
            _ => None,
        }
    }

    fn closes_valid(&self) -> bool {
        let value = self.accumulated_value;
        let shortest = self.shortest_form_floor().is_some_and(|floor| value >= floor);
        shortest && !is_surrogate(value) && value <= MAX_SCALAR
    }
}

/// Decodes `bytes` into Unicode scalar values.
///
/// # Errors
///
/// Returns the first [`DecodeError`] found; see the module docs for the rules.
///
/// ```rust
/// use utf8text::{DecodeError, decode::decode};
///
/// assert_eq!(decode("h\u{e9}".as_bytes()), Ok(vec![0x68, 0xE9]));
/// assert_eq!(
///     decode(&[0xC0, 0x80]),
///     Err(DecodeError::InvalidCodepoint { offset: 1, value: 0 })
/// );
/// ```
pub fn decode(bytes: &[u8]) -> Result<Vec<u32>, DecodeError> {
    decode_inner(bytes).inspect_err(|err| {
        tracing::trace!(?err, len = bytes.len(), "rejected malformed UTF-8");
    })
}

fn decode_inner(bytes: &[u8]) -> Result<Vec<u32>, DecodeError> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut state = DecoderState::BOUNDARY;

    for (offset, &byte) in bytes.iter().enumerate() {
        let b = u32::from(byte);

        if state.at_boundary() {
            match byte {
                0x00..=0x7F => out.push(b),
                0xC0..=0xDF => state = DecoderState::open(b & 0x1F, 2),
                0xE0..=0xEF => state = DecoderState::open(b & 0x0F, 3),
                0xF0..=0xF7 => state = DecoderState::open(b & 0x07, 4),
                0xF8..=0xFB => state = DecoderState::open(b & 0x03, 5),
                0xFC..=0xFD => state = DecoderState::open(b & 0x01, 6),
                _ => return Err(DecodeError::IllegalLeadByte { offset }),
            }
            continue;
        }

        if byte & 0xC0 != 0x80 {
            return Err(DecodeError::IncompleteSequence { offset });
        }

        state.continuation_bytes_expected -= 1;
        // A six-byte lead leaves its payload bit at position 30, so a u32
        // accumulator always has room.
        state.accumulated_value |= (b & 0x3F) << (6 * state.continuation_bytes_expected);

        if state.at_boundary() {
            if !state.closes_valid() {
                return Err(DecodeError::InvalidCodepoint {
                    offset,
                    value: state.accumulated_value,
                });
            }
            if state.accumulated_value != BOM {
                out.push(state.accumulated_value);
            }
            state = DecoderState::BOUNDARY;
        }
    }

    if state.at_boundary() {
        Ok(out)
    } else {
        Err(DecodeError::TruncatedSequence {
            offset: bytes.len(),
        })
    }
}

/// Decodes only the first character of `bytes`.
///
/// Trailing bytes are not inspected. Unlike [`decode`], a leading BOM is
/// returned as `0xFEFF` rather than skipped.
///
/// # Errors
///
/// Fails like [`decode`] on a malformed leading sequence, and with
/// `TruncatedSequence { offset: 0 }` on empty input.
pub fn decode_first(bytes: &[u8]) -> Result<u32, DecodeError> {
    let Some(&lead) = bytes.first() else {
        return Err(DecodeError::TruncatedSequence { offset: 0 });
    };
    let len = match lead {
        0x00..=0x7F => return Ok(u32::from(lead)),
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        0xF8..=0xFB => 5,
        0xFC..=0xFD => 6,
        _ => return Err(DecodeError::IllegalLeadByte { offset: 0 }),
    };
    let head = &bytes[..len.min(bytes.len())];
    if head == [0xEF, 0xBB, 0xBF] {
        return Ok(BOM);
    }
    match decode(head)?.as_slice() {
        [value] => Ok(*value),
        // Unreachable for a single well-formed sequence.
        _ => Err(DecodeError::IllegalLeadByte { offset: 0 }),
    }
}
