use thiserror::Error;

/// Failure to turn a byte sequence into code points.
///
/// Every variant carries the byte offset at which the problem was detected.
/// Callers must treat the whole input as not valid text; there is no partial
/// result to recover.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecodeError {
    /// A byte that cannot start a sequence appeared at a sequence boundary.
    #[error("illegal lead byte at offset {offset}")]
    IllegalLeadByte {
        /// Offset of the offending byte.
        offset: usize,
    },
    /// A non-continuation byte appeared while a multi-byte sequence was open.
    #[error("incomplete multi-byte sequence at offset {offset}")]
    IncompleteSequence {
        /// Offset of the byte that interrupted the sequence.
        offset: usize,
    },
    /// The input ended in the middle of a multi-byte sequence.
    #[error("truncated multi-byte sequence at offset {offset}")]
    TruncatedSequence {
        /// Length of the input, where decoding stopped.
        offset: usize,
    },
    /// A sequence closed on an overlong, surrogate or out-of-range value.
    #[error("invalid code point U+{value:04X} at offset {offset}")]
    InvalidCodepoint {
        /// Offset of the byte that closed the sequence.
        offset: usize,
        /// The assembled value.
        value: u32,
    },
}

impl DecodeError {
    /// Byte offset at which decoding failed.
    #[must_use]
    pub fn offset(&self) -> usize {
        match *self {
            Self::IllegalLeadByte { offset }
            | Self::IncompleteSequence { offset }
            | Self::TruncatedSequence { offset }
            | Self::InvalidCodepoint { offset, .. } => offset,
        }
    }

    /// Moves the reported offset `by` bytes forward, for errors found while
    /// decoding a suffix of a larger input.
    #[must_use]
    pub(crate) fn shifted(self, by: usize) -> Self {
        match self {
            Self::IllegalLeadByte { offset } => Self::IllegalLeadByte {
                offset: offset + by,
            },
            Self::IncompleteSequence { offset } => Self::IncompleteSequence {
                offset: offset + by,
            },
            Self::TruncatedSequence { offset } => Self::TruncatedSequence {
                offset: offset + by,
            },
            Self::InvalidCodepoint { offset, value } => Self::InvalidCodepoint {
                offset: offset + by,
                value,
            },
        }
    }
}

/// Failure to turn code points into UTF-8.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncodeError {
    /// A value in the UTF-16 surrogate band `0xD800..=0xDFFF`.
    #[error("illegal surrogate U+{value:04X} at index {index}")]
    IllegalSurrogate {
        /// Position in the code point sequence.
        index: usize,
        /// The offending value.
        value: u32,
    },
    /// A value above `0x10FFFF`.
    #[error("code point {value:#X} out of Unicode range at index {index}")]
    OutOfRange {
        /// Position in the code point sequence.
        index: usize,
        /// The offending value.
        value: u32,
    },
}

/// Any failure raised by a text operation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextError {
    /// The input was not valid UTF-8.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// A transformed code point could not be re-encoded.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}
