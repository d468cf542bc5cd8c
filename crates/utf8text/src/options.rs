/// Which end(s) of a string [`TextEngine::pad`](crate::TextEngine::pad)
/// fills.
///
/// # Default
///
/// `Right`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PadSide {
    /// Prepend padding.
    Left,
    /// Append padding.
    #[default]
    Right,
    /// Split padding between both ends. When the amount is odd the extra
    /// character goes to the right.
    Both,
}

/// Which accented letters
/// [`TextEngine::transliterate_to_ascii`](crate::TextEngine::transliterate_to_ascii)
/// replaces.
///
/// # Default
///
/// `Both`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransliterationCase {
    /// Only lowercase letters (`é`, `ß`, `þ`, ...).
    LowerOnly,
    /// Only uppercase letters (`É`, `Þ`, ...).
    UpperOnly,
    /// Both tables.
    #[default]
    Both,
}

impl TransliterationCase {
    pub(crate) fn includes_lower(self) -> bool {
        matches!(self, Self::LowerOnly | Self::Both)
    }

    pub(crate) fn includes_upper(self) -> bool {
        matches!(self, Self::UpperOnly | Self::Both)
    }
}
