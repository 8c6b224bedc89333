//! Text normalization and transliteration pipeline.
//!
//! Three transforms feed the query engine: ASCII case folding, katakana to
//! hiragana folding, and romaji to hiragana transliteration. Every
//! transform is memoized per engine instance, keyed by the source string,
//! so repeated aliases and repeated queries never recompute.
//!
//! A query expands into a small set of *candidate forms*; a document
//! matches a tier if any candidate form matches under the tier's rule.

mod kana;
mod romaji;

pub use romaji::RomajiTable;

use crate::intern::{SharedStr, StringPool};
use rustc_hash::FxHashMap;

/// Per-instance normalizer with memoized transforms.
///
/// Owned by one `Index`; two engines in the same process never share
/// cache state or leak content across unrelated indices.
#[derive(Debug)]
pub struct Normalizer {
    table: RomajiTable,
    romaji_enabled: bool,
    cache_enabled: bool,
    lowercase: FxHashMap<SharedStr, SharedStr>,
    kana_folded: FxHashMap<SharedStr, SharedStr>,
    transliterated: FxHashMap<SharedStr, SharedStr>,
}

impl Normalizer {
    /// Creates a normalizer with its own transliteration table and
    /// memoization on.
    #[must_use]
    pub fn new(romaji_enabled: bool) -> Self {
        Self::with_caching(romaji_enabled, true)
    }

    /// `new` with explicit control over memoization.
    #[must_use]
    pub fn with_caching(romaji_enabled: bool, cache_enabled: bool) -> Self {
        Self {
            table: RomajiTable::new(),
            romaji_enabled,
            cache_enabled,
            lowercase: FxHashMap::default(),
            kana_folded: FxHashMap::default(),
            transliterated: FxHashMap::default(),
        }
    }

    /// ASCII-lowercases `text`, memoized.
    pub fn lowercase(&mut self, pool: &mut StringPool, text: &SharedStr) -> SharedStr {
        if let Some(cached) = self.lowercase.get(text) {
            return cached.clone();
        }
        let lowered = pool.intern(&text.to_lowercase());
        if self.cache_enabled {
            self.lowercase.insert(text.clone(), lowered.clone());
        }
        lowered
    }

    /// Folds katakana in `text` to hiragana, memoized.
    pub fn kana_fold(&mut self, pool: &mut StringPool, text: &SharedStr) -> SharedStr {
        if let Some(cached) = self.kana_folded.get(text) {
            return cached.clone();
        }
        let folded = if kana::contains_katakana(text) {
            pool.intern(&kana::to_hiragana(text))
        } else {
            text.clone()
        };
        if self.cache_enabled {
            self.kana_folded.insert(text.clone(), folded.clone());
        }
        folded
    }

    /// Transliterates romaji in `text` to hiragana, memoized.
    ///
    /// Total: unmapped characters are copied through, so some output
    /// exists for every input.
    pub fn transliterate(&mut self, pool: &mut StringPool, text: &SharedStr) -> SharedStr {
        if let Some(cached) = self.transliterated.get(text) {
            return cached.clone();
        }
        let kana = pool.intern(&self.table.to_hiragana(text));
        if self.cache_enabled {
            self.transliterated.insert(text.clone(), kana.clone());
        }
        kana
    }

    /// Normalized forms under which a stored name or alias is indexed.
    ///
    /// Always the lowercased and kana-folded forms; ASCII-only strings
    /// additionally get their romaji reading so a romaji alias is findable
    /// from a kana query.
    pub fn doc_forms(&mut self, pool: &mut StringPool, text: &SharedStr) -> Vec<SharedStr> {
        let mut forms = Vec::with_capacity(3);
        let lowered = self.lowercase(pool, text);
        let folded = self.kana_fold(pool, &lowered);
        push_unique(&mut forms, lowered.clone());
        push_unique(&mut forms, folded);
        if self.romaji_enabled && lowered.is_ascii() {
            let kana = self.transliterate(pool, &lowered);
            push_unique(&mut forms, kana);
        }
        forms
    }

    /// Candidate forms for a query string.
    ///
    /// {lowercased, kana-folded, romaji reading of the folded form},
    /// deduplicated. Each form is matched independently by the engine.
    pub fn candidate_forms(&mut self, pool: &mut StringPool, query: &str) -> Vec<SharedStr> {
        let source = pool.intern(query);
        let mut forms = Vec::with_capacity(3);
        let lowered = self.lowercase(pool, &source);
        let folded = self.kana_fold(pool, &lowered);
        push_unique(&mut forms, lowered);
        push_unique(&mut forms, folded.clone());
        if self.romaji_enabled {
            let kana = self.transliterate(pool, &folded);
            push_unique(&mut forms, kana);
        }
        forms
    }

    /// Drops all memoized transforms.
    pub fn clear(&mut self) {
        self.lowercase.clear();
        self.kana_folded.clear();
        self.transliterated.clear();
    }

    /// Removes the cache entries keyed by `text`.
    ///
    /// Called on document removal; a shared alias still referenced by
    /// another document just gets recomputed on its next use.
    pub fn forget(&mut self, text: &SharedStr) {
        self.lowercase.remove(text);
        self.kana_folded.remove(text);
        self.transliterated.remove(text);
    }

    /// Total memoized entries across all three transforms.
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.lowercase.len() + self.kana_folded.len() + self.transliterated.len()
    }
}

fn push_unique(forms: &mut Vec<SharedStr>, form: SharedStr) {
    if !forms.iter().any(|existing| *existing == form) {
        forms.push(form);
    }
}

#[cfg(test)]
mod kana_tests;
