#![no_main]
use std::num::NonZeroUsize;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use utf8text::{Backend, ManualBackend, NativeBackend, PadSide, TextEngine, TransliterationCase};

#[derive(Debug, Clone, Copy, Arbitrary)]
enum Side {
    Left,
    Right,
    Both,
}

impl From<Side> for PadSide {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => PadSide::Left,
            Side::Right => PadSide::Right,
            Side::Both => PadSide::Both,
        }
    }
}

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    text: &'a [u8],
    other: &'a [u8],
    offset: i16,
    length: Option<i16>,
    target: u8,
    chunk: u8,
    side: Side,
    native: bool,
}

/// Runs every operation. Clamping ones must never panic; decoding ones must
/// fail exactly when the input is malformed.
fn exercise<B: Backend>(text: &TextEngine<B>, input: &Input<'_>, side: PadSide) {
    let (s, other) = (input.text, input.other);
    let offset = isize::from(input.offset);
    let length = input.length.map(isize::from);
    let valid = text.is_valid(s);
    let both_valid = valid && text.is_valid(other);

    let len = text.length(s);
    let sub = text.substring(s, offset, length);
    assert!(text.length(sub) <= len);
    if let Some(l) = length.filter(|l| *l >= 0) {
        assert!(text.length(sub) <= l.unsigned_abs());
    }
    let _ = text.index_of(s, other, usize::from(input.target));
    let _ = text.last_index_of(s, other, usize::from(input.target));
    let padded = text.pad(s, usize::from(input.target), other, side);
    if both_valid && !other.is_empty() {
        assert_eq!(text.length(&padded), len.max(usize::from(input.target)));
    }
    let _ = text.trim(s, Some(other));
    let _ = text.trim(s, None);
    let _ = text.span(s, other, Some(offset), length);
    let _ = text.cspan(s, other, None, None);
    if let Some(chunk) = NonZeroUsize::new(usize::from(input.chunk)) {
        let joined: Vec<u8> = text.split(s, chunk).flat_map(|c| c.iter().copied()).collect();
        assert_eq!(joined, s);
    }
    let _ = text.clean(s);
    let _ = text.transliterate_to_ascii(s, TransliterationCase::Both);

    assert_eq!(text.to_upper(s).is_ok(), valid);
    assert_eq!(text.to_lower(s).is_ok(), valid);
    assert_eq!(text.title_case(s).is_ok(), valid);
    assert_eq!(text.reverse(s).is_ok(), valid);
    assert_eq!(text.splice_replace(s, other, offset, length).is_ok(), both_valid);
    assert_eq!(text.case_insensitive_compare(s, other).is_ok(), both_valid);
    assert_eq!(text.case_insensitive_find(s, other).is_ok(), both_valid);
    if !other.is_empty() {
        assert_eq!(text.case_insensitive_replace(s, other, s).is_ok(), both_valid);
    }
}

fuzz_target!(|input: Input<'_>| {
    let side = PadSide::from(input.side);
    if input.native {
        exercise(&TextEngine::new(NativeBackend), &input, side);
    } else {
        exercise(&TextEngine::new(ManualBackend), &input, side);
    }
});
