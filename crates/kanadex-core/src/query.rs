//! Priority-tiered query matching.
//!
//! Six tiers, highest priority first: name exact, alias exact, name
//! prefix, alias prefix, name substring, alias substring. Tiers are
//! evaluated in order and evaluation stops as soon as the requested limit
//! is satisfied by the tiers already processed, so the substring scans
//! never run for queries that resolve exactly.
//!
//! The exact tiers resolve through the reverse index; the prefix and
//! substring tiers scan stored documents in insertion order, which is the
//! required within-tier result order, so a scan can stop early at the
//! limit. A document is reported once, at its best tier.

use crate::intern::{SharedStr, StringPool};
use crate::normalize::Normalizer;
use crate::reverse::{ReverseIndex, TokenSource};
use crate::store::DocumentStore;
use rustc_hash::FxHashSet;

/// The six fixed priority levels, best (lowest number) first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    /// Document name equals a candidate form.
    NameExact = 1,
    /// Some alias equals a candidate form.
    AliasExact = 2,
    /// Document name starts with a candidate form.
    NamePrefix = 3,
    /// Some alias starts with a candidate form.
    AliasPrefix = 4,
    /// Document name contains a candidate form.
    NamePartial = 5,
    /// Some alias contains a candidate form.
    AliasPartial = 6,
}

#[derive(Debug, Clone, Copy)]
enum MatchKind {
    Prefix,
    Partial,
}

/// Borrowing view over one index instance for the duration of a query.
///
/// Holds `&mut` on the normalizer and pool because doc-side normalized
/// forms are computed (and memoized) lazily during scans.
pub struct QueryEngine<'a> {
    store: &'a DocumentStore,
    reverse: &'a ReverseIndex,
    normalizer: &'a mut Normalizer,
    pool: &'a mut StringPool,
}

impl<'a> QueryEngine<'a> {
    /// Creates an engine over the given index state.
    pub fn new(
        store: &'a DocumentStore,
        reverse: &'a ReverseIndex,
        normalizer: &'a mut Normalizer,
        pool: &'a mut StringPool,
    ) -> Self {
        Self {
            store,
            reverse,
            normalizer,
            pool,
        }
    }

    /// Runs the tiered search over the flattened candidate forms.
    ///
    /// Returns at most `limit` ids in tier order, insertion order within
    /// each tier.
    pub fn search_tiered(&mut self, forms: &[SharedStr], limit: usize) -> Vec<SharedStr> {
        let mut results = Vec::new();
        let mut seen: FxHashSet<SharedStr> = FxHashSet::default();

        if self.store.is_empty() || forms.is_empty() || limit == 0 {
            return results;
        }

        // Tiers 1-2: exact matches through the reverse index.
        for (tier, source) in [
            (MatchTier::NameExact, TokenSource::Name),
            (MatchTier::AliasExact, TokenSource::Alias),
        ] {
            self.collect_exact(forms, source, &mut seen, &mut results, limit);
            if results.len() >= limit {
                tracing::debug!(?tier, hits = results.len(), "early exit");
                return results;
            }
        }

        // Tiers 3-6: ordered scans over stored strings.
        for (tier, kind, alias_side) in [
            (MatchTier::NamePrefix, MatchKind::Prefix, false),
            (MatchTier::AliasPrefix, MatchKind::Prefix, true),
            (MatchTier::NamePartial, MatchKind::Partial, false),
            (MatchTier::AliasPartial, MatchKind::Partial, true),
        ] {
            self.collect_scan(forms, kind, alias_side, &mut seen, &mut results, limit);
            if results.len() >= limit {
                tracing::debug!(?tier, hits = results.len(), "early exit");
                return results;
            }
        }

        results
    }

    /// AND search over several keywords: every keyword must match, each
    /// through any of its own candidate forms. Documents whose *name*
    /// carries all keywords rank before documents that need aliases.
    pub fn search_and(&mut self, keywords: &[Vec<SharedStr>], limit: usize) -> Vec<SharedStr> {
        let mut results = Vec::new();
        let mut seen: FxHashSet<SharedStr> = FxHashSet::default();

        if self.store.is_empty() || keywords.is_empty() || limit == 0 {
            return results;
        }

        for aliases_allowed in [false, true] {
            let store = self.store;
            for (id, doc) in store.iter_ordered() {
                if results.len() >= limit {
                    return results;
                }
                if seen.contains(id) {
                    continue;
                }

                let all = keywords.iter().all(|forms| {
                    self.text_matches(id, forms, MatchKind::Partial)
                        || (aliases_allowed
                            && doc
                                .aliases
                                .iter()
                                .any(|alias| self.text_matches(alias, forms, MatchKind::Partial)))
                });

                if all {
                    seen.insert(id.clone());
                    results.push(id.clone());
                }
            }
        }

        results
    }

    fn collect_exact(
        &mut self,
        forms: &[SharedStr],
        source: TokenSource,
        seen: &mut FxHashSet<SharedStr>,
        results: &mut Vec<SharedStr>,
        limit: usize,
    ) {
        let mut hits: Vec<(u64, SharedStr)> = Vec::new();
        for form in forms {
            let Some(list) = self.reverse.lookup(form) else {
                continue;
            };
            for posting in list.iter().filter(|p| p.source == source) {
                if seen.contains(&posting.doc) {
                    continue;
                }
                if let Some(doc) = self.store.get(&posting.doc) {
                    hits.push((doc.seq, posting.doc.clone()));
                }
            }
        }

        // Within-tier order is insertion order; a doc hit by several
        // forms shares one seq, so duplicates are adjacent after sorting.
        hits.sort_by_key(|(seq, _)| *seq);
        hits.dedup_by(|a, b| a.1 == b.1);

        for (_, id) in hits {
            if results.len() >= limit {
                return;
            }
            seen.insert(id.clone());
            results.push(id);
        }
    }

    fn collect_scan(
        &mut self,
        forms: &[SharedStr],
        kind: MatchKind,
        alias_side: bool,
        seen: &mut FxHashSet<SharedStr>,
        results: &mut Vec<SharedStr>,
        limit: usize,
    ) {
        let store = self.store;
        for (id, doc) in store.iter_ordered() {
            if results.len() >= limit {
                return;
            }
            if seen.contains(id) {
                continue;
            }

            let matched = if alias_side {
                doc.aliases
                    .iter()
                    .any(|alias| self.text_matches(alias, forms, kind))
            } else {
                self.text_matches(id, forms, kind)
            };

            if matched {
                seen.insert(id.clone());
                results.push(id.clone());
            }
        }
    }

    /// True if any normalized form of `text` matches any candidate form
    /// under `kind`.
    fn text_matches(&mut self, text: &SharedStr, forms: &[SharedStr], kind: MatchKind) -> bool {
        let doc_forms = self.normalizer.doc_forms(self.pool, text);
        doc_forms.iter().any(|doc_form| {
            forms.iter().any(|form| match kind {
                MatchKind::Prefix => doc_form.starts_with(form.as_ref()),
                MatchKind::Partial => doc_form.contains(form.as_ref()),
            })
        })
    }
}
