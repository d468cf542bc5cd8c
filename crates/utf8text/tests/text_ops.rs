#![expect(missing_docs)]

use std::{cmp::Ordering, num::NonZeroUsize};

use rstest::rstest;
use utf8text::{
    DecodeError, Engine, ManualBackend, NativeBackend, PadSide, TextEngine, TextError,
    TransliterationCase,
};

#[rstest]
#[case::overlong_nul(&[0xC0, 0x80], DecodeError::InvalidCodepoint { offset: 1, value: 0 })]
#[case::lone_continuation(&[0x80], DecodeError::IllegalLeadByte { offset: 0 })]
#[case::truncated(&[0xE2, 0x82], DecodeError::TruncatedSequence { offset: 2 })]
#[case::interrupted(&[0xE2, 0x41, 0x82], DecodeError::IncompleteSequence { offset: 1 })]
#[case::surrogate(&[0xED, 0xA0, 0x80], DecodeError::InvalidCodepoint { offset: 2, value: 0xD800 })]
#[case::above_max(&[0xF4, 0x90, 0x80, 0x80], DecodeError::InvalidCodepoint { offset: 3, value: 0x11_0000 })]
#[case::five_byte(&[0xF8, 0x88, 0x80, 0x80, 0x80], DecodeError::InvalidCodepoint { offset: 4, value: 0x20_0000 })]
#[case::invalid_lead(&[0x41, 0xFE], DecodeError::IllegalLeadByte { offset: 1 })]
fn both_backends_reject_the_same_way(#[case] bytes: &[u8], #[case] expected: DecodeError) {
    assert_eq!(TextEngine::new(ManualBackend).decode(bytes), Err(expected));
    assert_eq!(TextEngine::new(NativeBackend).decode(bytes), Err(expected));
    assert!(!Engine::default().is_valid(bytes));
}

#[test]
fn byte_order_marks_are_skipped_both_ways() {
    let text = Engine::default();
    assert_eq!(text.decode("\u{feff}A\u{feff}").unwrap(), [0x41]);
    assert_eq!(text.encode(&[0xFEFF, 0x42]).unwrap(), "B");
}

#[test]
fn codepoint_addressed_operations() {
    let text = Engine::default();
    assert_eq!(text.length("h\u{e9}llo"), 5);
    assert_eq!(text.substring("h\u{e9}llo", 1, Some(3)), "\u{e9}ll");
    assert_eq!(text.reverse("caf\u{e9}").unwrap(), "\u{e9}fac");
    assert_eq!(text.pad("5", 3, "0", PadSide::Left), "005");
    assert_eq!(text.pad("abc", 2, "-", PadSide::Right), "abc");
    assert_eq!(text.span("aabbcc", "ab", None, None), 4);
    assert_eq!(text.index_of("na\u{ef}ve na\u{ef}ve", "ve", 0), Some(3));
    assert_eq!(text.last_index_of("na\u{ef}ve na\u{ef}ve", "ve", 0), Some(9));
    assert_eq!(
        text.splice_replace("h\u{e9}llo", "EY", 1, Some(1)).unwrap(),
        "hEYllo"
    );
}

#[rstest]
#[case("stra\u{df}e", "STRA\u{df}E", "STRASSE")]
#[case("\u{3c3}\u{3bf}\u{3c6}\u{3af}\u{3b1}", "\u{3a3}\u{39f}\u{3a6}\u{38a}\u{391}", "\u{3a3}\u{39f}\u{3a6}\u{38a}\u{391}")]
#[case("\u{1f600} ok", "\u{1f600} OK", "\u{1f600} OK")]
fn backends_differ_only_in_case_coverage(
    #[case] s: &str,
    #[case] manual: &str,
    #[case] native: &str,
) {
    assert_eq!(TextEngine::new(ManualBackend).to_upper(s).unwrap(), manual);
    assert_eq!(TextEngine::new(NativeBackend).to_upper(s).unwrap(), native);
}

#[test]
fn case_insensitive_family() {
    let text = Engine::default();
    assert_eq!(
        text.case_insensitive_compare("\u{c5}ngstr\u{f6}m", "\u{e5}NGSTR\u{d6}M").unwrap(),
        Ordering::Equal
    );
    assert_eq!(
        text.case_insensitive_find("Le Caf\u{c9} du coin", "caf\u{e9}").unwrap().unwrap(),
        "Caf\u{c9} du coin"
    );
    let (out, count) = text
        .case_insensitive_replace("\u{c9}T\u{c9} et \u{e9}t\u{e9}", "\u{e9}t\u{e9}", "summer")
        .unwrap();
    assert_eq!((out.to_string().as_str(), count), ("summer et summer", 2));
}

#[test]
fn decoding_operations_fail_without_partial_output() {
    let text = Engine::default();
    let bad: &[u8] = &[0x68, 0xC3, 0xA9, 0xE2, 0x82];
    let expected = TextError::Decode(DecodeError::TruncatedSequence { offset: 5 });
    assert_eq!(text.to_upper(bad), Err(expected));
    assert_eq!(text.to_lower(bad), Err(expected));
    assert_eq!(text.reverse(bad), Err(expected));
    assert_eq!(text.title_case(bad), Err(expected));
    assert_eq!(text.splice_replace(bad, "x", 0, Some(1)), Err(expected));
    assert_eq!(text.case_insensitive_compare(bad, "x"), Err(expected));
}

#[test]
fn clamping_operations_never_fail_on_malformed_input() {
    let text = Engine::default();
    let bad: &[u8] = &[0xFF, 0x41, 0xE2, 0x82, 0x20];
    assert_eq!(text.length(bad), 4);
    assert_eq!(text.substring(bad, -2, None), [0xE2_u8, 0x82, 0x20].as_slice());
    assert_eq!(text.trim(bad, None), [0xFF_u8, 0x41, 0xE2, 0x82].as_slice());
    assert_eq!(text.span(bad, [0xFF_u8].as_slice(), None, None), 1);
    assert_eq!(text.split(bad, NonZeroUsize::new(3).unwrap()).count(), 2);
    assert_eq!(text.pad(bad, 5, "!", PadSide::Right).len(), bad.len() + 1);
}

#[test]
fn sanitizing_and_transliteration() {
    let text = Engine::default();
    assert_eq!(text.clean(b"\x1b[31mred\xC3\xA9\xC3"), "[31mred\u{e9}");
    assert_eq!(
        text.transliterate_to_ascii("\u{de}\u{f3}r \u{c6}gir \u{df}", TransliterationCase::Both),
        "Thor Aegir ss"
    );
    assert_eq!(
        text.transliterate_to_ascii("\u{c9}t\u{e9}", TransliterationCase::LowerOnly),
        "\u{c9}te"
    );
    assert_eq!(text.ord("\u{1f600}"), Ok(0x1_F600));
    assert_eq!(text.upper_first("\u{e9}cole"), Ok("\u{c9}cole".into()));
}
