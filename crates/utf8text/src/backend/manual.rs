use crate::{
    backend::Backend,
    case, decode, encode,
    error::{DecodeError, EncodeError},
};

/// The engine's own decoder, encoder and case tables.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ManualBackend;

impl Backend for ManualBackend {
    fn decode(&self, bytes: &[u8]) -> Result<Vec<u32>, DecodeError> {
        decode::decode(bytes)
    }

    fn encode(&self, codepoints: &[u32]) -> Result<Vec<u8>, EncodeError> {
        encode::encode(codepoints)
    }

    fn push_upper(&self, cp: u32, out: &mut Vec<u32>) {
        out.push(case::to_upper(cp));
    }

    fn push_lower(&self, cp: u32, out: &mut Vec<u32>) {
        out.push(case::to_lower(cp));
    }
}
