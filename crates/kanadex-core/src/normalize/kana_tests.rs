//! Tests for `kana` module

use super::kana::*;

#[test]
fn test_fold_basic_katakana() {
    assert_eq!(to_hiragana("エガオ"), "えがお");
    assert_eq!(to_hiragana("スマイル"), "すまいる");
}

#[test]
fn test_fold_is_one_to_one_per_char() {
    assert_eq!(fold_char('ア'), 'あ');
    assert_eq!(fold_char('ヶ'), 'ゖ');
    assert_eq!(fold_char('ヴ'), 'ゔ');
}

#[test]
fn test_hiragana_passes_through() {
    assert_eq!(to_hiragana("えがお"), "えがお");
}

#[test]
fn test_prolonged_sound_mark_unchanged() {
    assert_eq!(to_hiragana("スマイルー"), "すまいるー");
}

#[test]
fn test_mixed_scripts() {
    assert_eq!(to_hiragana("笑顔スマイルx"), "笑顔すまいるx");
}

#[test]
fn test_contains_katakana() {
    assert!(contains_katakana("スマイル"));
    assert!(contains_katakana("smileス"));
    assert!(!contains_katakana("すまいる"));
    assert!(!contains_katakana("smile"));
    // The prolonged-sound mark alone is not foldable katakana
    assert!(!contains_katakana("ー"));
}
