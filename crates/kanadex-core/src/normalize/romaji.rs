//! Romaji to hiragana transliteration.
//!
//! Greedy longest-prefix matching over a syllable table: at each position
//! the longest known syllable (up to three characters) wins, a doubled
//! consonant produces the small tsu mora, and characters with no mapping
//! are copied through unchanged. Every input therefore produces some
//! output; transliteration never fails.
//!
//! The table covers Hepburn spellings plus the kunrei and IME `x`/`l`
//! spellings users actually type. Input is expected to be lowercased;
//! unmatched case just falls through untouched.

use rustc_hash::FxHashMap;

/// Syllable table: romaji spelling to hiragana.
///
/// Keys are pure ASCII and at most [`MAX_SYLLABLE_LEN`] bytes.
const SYLLABLES: &[(&str, &str)] = &[
    // Vowels
    ("a", "あ"),
    ("i", "い"),
    ("u", "う"),
    ("e", "え"),
    ("o", "お"),
    // K / G
    ("ka", "か"),
    ("ki", "き"),
    ("ku", "く"),
    ("ke", "け"),
    ("ko", "こ"),
    ("kya", "きゃ"),
    ("kyu", "きゅ"),
    ("kyo", "きょ"),
    ("ga", "が"),
    ("gi", "ぎ"),
    ("gu", "ぐ"),
    ("ge", "げ"),
    ("go", "ご"),
    ("gya", "ぎゃ"),
    ("gyu", "ぎゅ"),
    ("gyo", "ぎょ"),
    // S / Z
    ("sa", "さ"),
    ("shi", "し"),
    ("si", "し"),
    ("su", "す"),
    ("se", "せ"),
    ("so", "そ"),
    ("sha", "しゃ"),
    ("shu", "しゅ"),
    ("sho", "しょ"),
    ("she", "しぇ"),
    ("sya", "しゃ"),
    ("syu", "しゅ"),
    ("syo", "しょ"),
    ("za", "ざ"),
    ("ji", "じ"),
    ("zi", "じ"),
    ("zu", "ず"),
    ("ze", "ぜ"),
    ("zo", "ぞ"),
    ("ja", "じゃ"),
    ("ju", "じゅ"),
    ("jo", "じょ"),
    ("je", "じぇ"),
    ("jya", "じゃ"),
    ("jyu", "じゅ"),
    ("jyo", "じょ"),
    ("zya", "じゃ"),
    ("zyu", "じゅ"),
    ("zyo", "じょ"),
    // T / D
    ("ta", "た"),
    ("chi", "ち"),
    ("ti", "ち"),
    ("tsu", "つ"),
    ("tu", "つ"),
    ("te", "て"),
    ("to", "と"),
    ("cha", "ちゃ"),
    ("chu", "ちゅ"),
    ("cho", "ちょ"),
    ("che", "ちぇ"),
    ("tya", "ちゃ"),
    ("tyu", "ちゅ"),
    ("tyo", "ちょ"),
    ("da", "だ"),
    ("di", "ぢ"),
    ("du", "づ"),
    ("de", "で"),
    ("do", "ど"),
    // N row and the syllabic n
    ("na", "な"),
    ("ni", "に"),
    ("nu", "ぬ"),
    ("ne", "ね"),
    ("no", "の"),
    ("nya", "にゃ"),
    ("nyu", "にゅ"),
    ("nyo", "にょ"),
    ("n", "ん"),
    ("n'", "ん"),
    // H / B / P / F
    ("ha", "は"),
    ("hi", "ひ"),
    ("fu", "ふ"),
    ("hu", "ふ"),
    ("he", "へ"),
    ("ho", "ほ"),
    ("hya", "ひゃ"),
    ("hyu", "ひゅ"),
    ("hyo", "ひょ"),
    ("fa", "ふぁ"),
    ("fi", "ふぃ"),
    ("fe", "ふぇ"),
    ("fo", "ふぉ"),
    ("ba", "ば"),
    ("bi", "び"),
    ("bu", "ぶ"),
    ("be", "べ"),
    ("bo", "ぼ"),
    ("bya", "びゃ"),
    ("byu", "びゅ"),
    ("byo", "びょ"),
    ("pa", "ぱ"),
    ("pi", "ぴ"),
    ("pu", "ぷ"),
    ("pe", "ぺ"),
    ("po", "ぽ"),
    ("pya", "ぴゃ"),
    ("pyu", "ぴゅ"),
    ("pyo", "ぴょ"),
    // M
    ("ma", "ま"),
    ("mi", "み"),
    ("mu", "む"),
    ("me", "め"),
    ("mo", "も"),
    ("mya", "みゃ"),
    ("myu", "みゅ"),
    ("myo", "みょ"),
    // Y / R / W / V
    ("ya", "や"),
    ("yu", "ゆ"),
    ("yo", "よ"),
    ("ra", "ら"),
    ("ri", "り"),
    ("ru", "る"),
    ("re", "れ"),
    ("ro", "ろ"),
    ("rya", "りゃ"),
    ("ryu", "りゅ"),
    ("ryo", "りょ"),
    ("wa", "わ"),
    ("wo", "を"),
    ("wi", "うぃ"),
    ("we", "うぇ"),
    ("va", "ゔぁ"),
    ("vi", "ゔぃ"),
    ("vu", "ゔ"),
    ("ve", "ゔぇ"),
    ("vo", "ゔぉ"),
    // IME small-kana spellings
    ("la", "ぁ"),
    ("li", "ぃ"),
    ("lu", "ぅ"),
    ("le", "ぇ"),
    ("lo", "ぉ"),
    ("xa", "ぁ"),
    ("xi", "ぃ"),
    ("xu", "ぅ"),
    ("xe", "ぇ"),
    ("xo", "ぉ"),
    ("xya", "ゃ"),
    ("xyu", "ゅ"),
    ("xyo", "ょ"),
    ("xtu", "っ"),
    ("ltu", "っ"),
];

/// Longest syllable spelling in [`SYLLABLES`].
const MAX_SYLLABLE_LEN: usize = 3;

/// Romaji syllable table owned by a [`super::Normalizer`] instance.
///
/// Instance-owned rather than a process-global so multiple engines in one
/// process stay fully isolated, and so the table stays pluggable.
#[derive(Debug)]
pub struct RomajiTable {
    map: FxHashMap<&'static str, &'static str>,
}

impl Default for RomajiTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RomajiTable {
    /// Builds the lookup table.
    #[must_use]
    pub fn new() -> Self {
        let map = SYLLABLES.iter().copied().collect();
        Self { map }
    }

    /// Transliterates lowercased romaji into hiragana.
    ///
    /// Greedy longest-prefix match at each position; doubled consonants
    /// (and Hepburn `tch`) emit the small tsu; anything unmapped is copied
    /// through unchanged, so the result is defined for every input.
    #[must_use]
    pub fn to_hiragana(&self, text: &str) -> String {
        let bytes = text.as_bytes();
        let mut out = String::with_capacity(text.len());
        let mut i = 0;

        while i < bytes.len() {
            let b = bytes[i];

            // Non-ASCII passes through whole characters untouched.
            if !b.is_ascii() {
                if let Some(c) = text[i..].chars().next() {
                    out.push(c);
                    i += c.len_utf8();
                } else {
                    break;
                }
                continue;
            }

            // Geminate consonant: "kk", "tt", ... and Hepburn "tch".
            if is_geminable(b)
                && (bytes.get(i + 1) == Some(&b)
                    || (b == b't' && bytes[i + 1..].starts_with(b"ch")))
            {
                out.push('っ');
                i += 1;
                continue;
            }

            // Longest syllable first.
            let max = MAX_SYLLABLE_LEN.min(bytes.len() - i);
            let mut advanced = 0;
            for len in (1..=max).rev() {
                if !bytes[i..i + len].is_ascii() {
                    continue;
                }
                if let Some(kana) = self.map.get(&text[i..i + len]) {
                    out.push_str(kana);
                    advanced = len;
                    break;
                }
            }

            if advanced == 0 {
                out.push(b as char);
                advanced = 1;
            }
            i += advanced;
        }

        out
    }
}

/// Consonants that form a small tsu when doubled. The syllabic `n` is
/// handled by the table instead ("nn" is two morae, not a geminate).
const fn is_geminable(b: u8) -> bool {
    b.is_ascii_lowercase() && !matches!(b, b'a' | b'i' | b'u' | b'e' | b'o' | b'n')
}
