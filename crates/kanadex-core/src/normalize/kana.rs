//! Katakana to hiragana folding.
//!
//! Katakana and hiragana are parallel phonetic scripts with a fixed 1:1
//! code-point correspondence: the katakana block U+30A1..=U+30F6 sits
//! exactly 0x60 above the matching hiragana block. Folding is therefore a
//! character-by-character shift; everything else passes through unchanged,
//! including the prolonged-sound mark (U+30FC).

/// First foldable katakana code point (ァ).
const KATAKANA_FIRST: u32 = 0x30A1;
/// Last foldable katakana code point (ヶ).
const KATAKANA_LAST: u32 = 0x30F6;
/// Distance between the katakana and hiragana blocks.
const KANA_GAP: u32 = 0x60;

/// Returns the hiragana equivalent of a katakana character, or the
/// character itself when it has no hiragana counterpart.
#[must_use]
pub fn fold_char(c: char) -> char {
    let code = c as u32;
    if (KATAKANA_FIRST..=KATAKANA_LAST).contains(&code) {
        // In-range shift always lands on an assigned hiragana code point.
        char::from_u32(code - KANA_GAP).unwrap_or(c)
    } else {
        c
    }
}

/// Folds every katakana character in `text` to hiragana.
#[must_use]
pub fn to_hiragana(text: &str) -> String {
    text.chars().map(fold_char).collect()
}

/// Returns `true` if `text` contains at least one foldable katakana
/// character.
#[must_use]
pub fn contains_katakana(text: &str) -> bool {
    text.chars()
        .any(|c| (KATAKANA_FIRST..=KATAKANA_LAST).contains(&(c as u32)))
}
