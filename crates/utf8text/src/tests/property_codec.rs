use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use crate::{
    backend::{Backend, ManualBackend, NativeBackend},
    decode::{decode, decode_first},
    encode::encode,
};

fn test_count() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}

/// Property: decoding valid UTF-8 yields exactly its scalar values (minus
/// byte-order marks), and encoding them gives the text back.
#[test]
fn valid_text_round_trips() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(s: String) -> bool {
        let s: String = s.chars().filter(|&c| c != '\u{feff}').collect();
        let expected: Vec<u32> = s.chars().map(u32::from).collect();
        let Ok(codepoints) = decode(s.as_bytes()) else {
            return false;
        };
        codepoints == expected && encode(&codepoints).is_ok_and(|bytes| bytes == s.as_bytes())
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(String) -> bool);
}

/// Property: the hand-written decoder accepts exactly what `core` accepts.
#[test]
fn decoder_agrees_with_core_on_arbitrary_bytes() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>) -> bool {
        decode(&bytes).is_ok() == core::str::from_utf8(&bytes).is_ok()
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// Property: both backends report the same result, error offsets included.
#[test]
fn backends_decode_identically() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>, valid_prefix: String) -> bool {
        let mut input = valid_prefix.into_bytes();
        input.extend_from_slice(&bytes);
        ManualBackend.decode(&input) == NativeBackend.decode(&input)
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>, String) -> bool);
}

/// Property: encoding succeeds exactly for Unicode scalar values, and both
/// backends agree on the outcome.
#[test]
fn encoder_accepts_only_scalars() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(codepoints: Vec<u32>) -> bool {
        let codepoints: Vec<u32> = codepoints.into_iter().map(|v| v % 0x11_0100).collect();
        let all_scalars = codepoints.iter().all(|&v| char::from_u32(v).is_some());
        let manual = ManualBackend.encode(&codepoints);
        manual.is_ok() == all_scalars && manual == NativeBackend.encode(&codepoints)
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u32>) -> bool);
}

#[quickcheck]
fn first_character_matches_char(c: char, tail: Vec<u8>) -> bool {
    let mut bytes = c.to_string().into_bytes();
    bytes.extend_from_slice(&tail);
    decode_first(&bytes) == Ok(u32::from(c))
}
