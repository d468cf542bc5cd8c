//! Accented Latin letters to plain ASCII.
//!
//! Two sorted static tables, one per case, searched by binary search. Most
//! entries map to a single letter; `ß`, `þ`, `ð`, `æ` and their capitals
//! expand to two.

use bstr::BString;

use crate::{decode::decode_first, options::TransliterationCase, units::Units};

static LOWER: [(u32, &str); 105] = [
    (0x00B5, "u"), // µ
    (0x00DF, "ss"), // ß
    (0x00E0, "a"), // à
    (0x00E1, "a"), // á
    (0x00E2, "a"), // â
    (0x00E3, "a"), // ã
    (0x00E4, "a"), // ä
    (0x00E5, "a"), // å
    (0x00E6, "ae"), // æ
    (0x00E7, "c"), // ç
    (0x00E8, "e"), // è
    (0x00E9, "e"), // é
    (0x00EA, "e"), // ê
    (0x00EB, "e"), // ë
    (0x00EC, "i"), // ì
    (0x00ED, "i"), // í
    (0x00EE, "i"), // î
    (0x00EF, "i"), // ï
    (0x00F0, "dh"), // ð
    (0x00F1, "n"), // ñ
    (0x00F2, "o"), // ò
    (0x00F3, "o"), // ó
    (0x00F4, "o"), // ô
    (0x00F5, "o"), // õ
    (0x00F6, "o"), // ö
    (0x00F8, "o"), // ø
    (0x00F9, "u"), // ù
    (0x00FA, "u"), // ú
    (0x00FB, "u"), // û
    (0x00FC, "u"), // ü
    (0x00FD, "y"), // ý
    (0x00FE, "th"), // þ
    (0x00FF, "y"), // ÿ
    (0x0101, "a"), // ā
    (0x0103, "a"), // ă
    (0x0105, "a"), // ą
    (0x0107, "c"), // ć
    (0x0109, "c"), // ĉ
    (0x010B, "c"), // ċ
    (0x010D, "c"), // č
    (0x010F, "d"), // ď
    (0x0111, "d"), // đ
    (0x0113, "e"), // ē
    (0x0115, "e"), // ĕ
    (0x0117, "e"), // ė
    (0x0119, "e"), // ę
    (0x011B, "e"), // ě
    (0x011D, "g"), // ĝ
    (0x011F, "g"), // ğ
    (0x0121, "g"), // ġ
    (0x0123, "g"), // ģ
    (0x0125, "h"), // ĥ
    (0x0127, "h"), // ħ
    (0x0129, "i"), // ĩ
    (0x012B, "i"), // ī
    (0x012F, "i"), // į
    (0x0131, "i"), // ı
    (0x0135, "j"), // ĵ
    (0x0137, "k"), // ķ
    (0x013A, "l"), // ĺ
    (0x013C, "l"), // ļ
    (0x013E, "l"), // ľ
    (0x0142, "l"), // ł
    (0x0144, "n"), // ń
    (0x0146, "n"), // ņ
    (0x0148, "n"), // ň
    (0x014D, "o"), // ō
    (0x0151, "o"), // ő
    (0x0155, "r"), // ŕ
    (0x0157, "r"), // ŗ
    (0x0159, "r"), // ř
    (0x015B, "s"), // ś
    (0x015D, "s"), // ŝ
    (0x015F, "s"), // ş
    (0x0161, "s"), // š
    (0x0163, "t"), // ţ
    (0x0165, "t"), // ť
    (0x0167, "t"), // ŧ
    (0x0169, "u"), // ũ
    (0x016B, "u"), // ū
    (0x016D, "u"), // ŭ
    (0x016F, "u"), // ů
    (0x0171, "u"), // ű
    (0x0173, "u"), // ų
    (0x0175, "w"), // ŵ
    (0x0177, "y"), // ŷ
    (0x017A, "z"), // ź
    (0x017C, "z"), // ż
    (0x017E, "z"), // ž
    (0x0192, "f"), // ƒ
    (0x01A1, "o"), // ơ
    (0x01B0, "u"), // ư
    (0x0219, "s"), // ș
    (0x021B, "t"), // ț
    (0x1E03, "b"), // ḃ
    (0x1E0B, "d"), // ḋ
    (0x1E1F, "f"), // ḟ
    (0x1E41, "m"), // ṁ
    (0x1E57, "p"), // ṗ
    (0x1E61, "s"), // ṡ
    (0x1E6B, "t"), // ṫ
    (0x1E81, "w"), // ẁ
    (0x1E83, "w"), // ẃ
    (0x1E85, "w"), // ẅ
    (0x1EF3, "y"), // ỳ
];

static UPPER: [(u32, &str); 103] = [
    (0x00C0, "A"), // À
    (0x00C1, "A"), // Á
    (0x00C2, "A"), // Â
    (0x00C3, "A"), // Ã
    (0x00C4, "A"), // Ä
    (0x00C5, "A"), // Å
    (0x00C6, "Ae"), // Æ
    (0x00C7, "C"), // Ç
    (0x00C8, "E"), // È
    (0x00C9, "E"), // É
    (0x00CA, "E"), // Ê
    (0x00CB, "E"), // Ë
    (0x00CC, "I"), // Ì
    (0x00CD, "I"), // Í
    (0x00CE, "I"), // Î
    (0x00CF, "I"), // Ï
    (0x00D0, "Dh"), // Ð
    (0x00D1, "N"), // Ñ
    (0x00D2, "O"), // Ò
    (0x00D3, "O"), // Ó
    (0x00D4, "O"), // Ô
    (0x00D5, "O"), // Õ
    (0x00D6, "O"), // Ö
    (0x00D8, "O"), // Ø
    (0x00D9, "U"), // Ù
    (0x00DA, "U"), // Ú
    (0x00DB, "U"), // Û
    (0x00DC, "U"), // Ü
    (0x00DD, "Y"), // Ý
    (0x00DE, "Th"), // Þ
    (0x0100, "A"), // Ā
    (0x0102, "A"), // Ă
    (0x0104, "A"), // Ą
    (0x0106, "C"), // Ć
    (0x0108, "C"), // Ĉ
    (0x010A, "C"), // Ċ
    (0x010C, "C"), // Č
    (0x010E, "D"), // Ď
    (0x0110, "D"), // Đ
    (0x0112, "E"), // Ē
    (0x0114, "E"), // Ĕ
    (0x0116, "E"), // Ė
    (0x0118, "E"), // Ę
    (0x011A, "E"), // Ě
    (0x011C, "G"), // Ĝ
    (0x011E, "G"), // Ğ
    (0x0120, "G"), // Ġ
    (0x0122, "G"), // Ģ
    (0x0124, "H"), // Ĥ
    (0x0126, "H"), // Ħ
    (0x0128, "I"), // Ĩ
    (0x012A, "I"), // Ī
    (0x012E, "I"), // Į
    (0x0130, "I"), // İ
    (0x0134, "J"), // Ĵ
    (0x0136, "K"), // Ķ
    (0x0139, "L"), // Ĺ
    (0x013B, "L"), // Ļ
    (0x013D, "L"), // Ľ
    (0x0141, "L"), // Ł
    (0x0143, "N"), // Ń
    (0x0145, "N"), // Ņ
    (0x0147, "N"), // Ň
    (0x014C, "O"), // Ō
    (0x0150, "O"), // Ő
    (0x0154, "R"), // Ŕ
    (0x0156, "R"), // Ŗ
    (0x0158, "R"), // Ř
    (0x015A, "S"), // Ś
    (0x015C, "S"), // Ŝ
    (0x015E, "S"), // Ş
    (0x0160, "S"), // Š
    (0x0162, "T"), // Ţ
    (0x0164, "T"), // Ť
    (0x0166, "T"), // Ŧ
    (0x0168, "U"), // Ũ
    (0x016A, "U"), // Ū
    (0x016C, "U"), // Ŭ
    (0x016E, "U"), // Ů
    (0x0170, "U"), // Ű
    (0x0172, "U"), // Ų
    (0x0174, "W"), // Ŵ
    (0x0176, "Y"), // Ŷ
    (0x0178, "Y"), // Ÿ
    (0x0179, "Z"), // Ź
    (0x017B, "Z"), // Ż
    (0x017D, "Z"), // Ž
    (0x0191, "F"), // Ƒ
    (0x01A0, "O"), // Ơ
    (0x01AF, "U"), // Ư
    (0x0218, "S"), // Ș
    (0x021A, "T"), // Ț
    (0x1E02, "B"), // Ḃ
    (0x1E0A, "D"), // Ḋ
    (0x1E1E, "F"), // Ḟ
    (0x1E40, "M"), // Ṁ
    (0x1E56, "P"), // Ṗ
    (0x1E60, "S"), // Ṡ
    (0x1E6A, "T"), // Ṫ
    (0x1E80, "W"), // Ẁ
    (0x1E82, "W"), // Ẃ
    (0x1E84, "W"), // Ẅ
    (0x1EF2, "Y"), // Ỳ
];

fn lookup(table: &'static [(u32, &'static str)], cp: u32) -> Option<&'static str> {
    table
        .binary_search_by_key(&cp, |&(from, _)| from)
        .ok()
        .map(|i| table[i].1)
}

/// ASCII replacement for `cp` under `case`, or `None` when `cp` has no entry
/// and stays as it is.
#[must_use]
pub fn transliterate(cp: u32, case: TransliterationCase) -> Option<&'static str> {
    let lower = case.includes_lower().then(|| lookup(&LOWER, cp)).flatten();
    lower.or_else(|| case.includes_upper().then(|| lookup(&UPPER, cp)).flatten())
}

/// Replaces every transliterable letter in `bytes`; everything else, including
/// malformed sequences, is copied through.
pub(crate) fn transliterate_bytes(bytes: &[u8], case: TransliterationCase) -> BString {
    let mut out = Vec::with_capacity(bytes.len());
    for unit in Units::new(bytes) {
        let replacement = match unit.len() {
            2 | 3 => decode_first(unit).ok().and_then(|cp| transliterate(cp, case)),
            _ => None,
        };
        match replacement {
            Some(ascii) => out.extend_from_slice(ascii.as_bytes()),
            None => out.extend_from_slice(unit),
        }
    }
    out.into()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn tables_are_sorted_for_binary_search() {
        assert!(LOWER.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(UPPER.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[rstest]
    #[case('\u{e9}', TransliterationCase::Both, Some("e"))]
    #[case('\u{c9}', TransliterationCase::Both, Some("E"))]
    #[case('\u{e9}', TransliterationCase::UpperOnly, None)]
    #[case('\u{c9}', TransliterationCase::LowerOnly, None)]
    #[case('\u{fe}', TransliterationCase::LowerOnly, Some("th"))]
    #[case('\u{de}', TransliterationCase::UpperOnly, Some("Th"))]
    #[case('\u{d0}', TransliterationCase::Both, Some("Dh"))]
    #[case('\u{e6}', TransliterationCase::Both, Some("ae"))]
    #[case('\u{c6}', TransliterationCase::Both, Some("Ae"))]
    #[case('\u{df}', TransliterationCase::Both, Some("ss"))]
    #[case('\u{130}', TransliterationCase::UpperOnly, Some("I"))]
    #[case('\u{1ef3}', TransliterationCase::Both, Some("y"))]
    #[case('a', TransliterationCase::Both, None)]
    #[case('\u{4e2d}', TransliterationCase::Both, None)]
    fn single(#[case] c: char, #[case] case: TransliterationCase, #[case] expected: Option<&str>) {
        assert_eq!(transliterate(c.into(), case), expected);
    }

    #[test]
    fn whole_string() {
        let out = transliterate_bytes("\u{de}\u{f3}r \u{e6}gir".as_bytes(), TransliterationCase::Both);
        assert_eq!(out, "Thor aegir");
    }

    #[test]
    fn one_case_only_leaves_the_other() {
        let out = transliterate_bytes("\u{c9}t\u{e9}".as_bytes(), TransliterationCase::LowerOnly);
        assert_eq!(out, "\u{c9}te");
    }

    #[test]
    fn malformed_bytes_are_copied() {
        let out = transliterate_bytes(&[0xC3, 0xA9, 0xFF, 0xC3], TransliterationCase::Both);
        assert_eq!(out, [b'e', 0xFF, 0xC3].as_slice());
    }
}
