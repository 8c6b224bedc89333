//! The `Index` facade: one engine instance owning all component state.
//!
//! Wires the string pool, normalizer, document store and reverse index
//! together and exposes the synchronous mutation / query / persistence
//! API. Every mutation updates the document store and the reverse index
//! before returning, so the two are never observably out of sync.
//!
//! Duplicate-id policy: **overwrite**. Adding a document whose id already
//! exists removes the old document (and its reverse-index entries) first.
//! The same policy applies to bulk loads and migration-reconstructed
//! inserts.

use crate::codec::{self, DumpDoc, Payload};
use crate::config::IndexConfig;
use crate::error::Result;
use crate::intern::StringPool;
use crate::normalize::Normalizer;
use crate::query::QueryEngine;
use crate::reverse::{ReverseIndex, TokenSource};
use crate::store::DocumentStore;
use serde::Deserialize;

/// Input document schema: the name becomes the document id.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentInput {
    /// Unique document name.
    pub name: String,
    /// Alias strings, possibly shared with other documents.
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// A short-string search index over named documents and their aliases.
///
/// Single-owner and single-threaded: operations are synchronous and run
/// to completion, there is no internal locking, and callers sharing an
/// instance across threads must serialize access externally.
#[derive(Debug)]
pub struct Index {
    config: IndexConfig,
    pool: StringPool,
    normalizer: Normalizer,
    store: DocumentStore,
    reverse: ReverseIndex,
}

impl Default for Index {
    fn default() -> Self {
        Self::new()
    }
}

impl Index {
    /// Creates an empty index with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(IndexConfig::default())
    }

    /// Creates an empty index with the given configuration.
    #[must_use]
    pub fn with_config(config: IndexConfig) -> Self {
        let normalizer =
            Normalizer::with_caching(config.normalize.romaji, config.normalize.cache);
        Self {
            config,
            pool: StringPool::new(),
            normalizer,
            store: DocumentStore::new(),
            reverse: ReverseIndex::new(),
        }
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Bulk-inserts documents parsed from a JSON array of
    /// `{"name": ..., "aliases": [...]}` objects.
    ///
    /// The whole payload is validated before any mutation, so a malformed
    /// buffer leaves existing state untouched.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MalformedInput`] on invalid JSON.
    pub fn add_documents_json(&mut self, json: &str) -> Result<usize> {
        let docs: Vec<DocumentInput> = serde_json::from_str(json)?;
        Ok(self.add_documents(docs))
    }

    /// Bulk-inserts documents, returning how many were inserted.
    ///
    /// Duplicate ids (pre-existing or repeated inside the batch) are
    /// overwritten, last occurrence winning.
    pub fn add_documents(&mut self, docs: Vec<DocumentInput>) -> usize {
        let count = docs.len();
        self.store.reserve(count);
        self.reverse.reserve(count * 2);
        for doc in docs {
            self.insert_internal(&doc.name, &doc.aliases);
        }
        tracing::debug!(inserted = count, total = self.store.len(), "documents added");
        count
    }

    /// Inserts a single document, overwriting any existing one with the
    /// same name.
    pub fn add_document(&mut self, name: &str, aliases: Vec<String>) {
        self.insert_internal(name, &aliases);
    }

    /// Replaces the alias list of an existing document.
    ///
    /// Returns `false` (a no-op) when `id` does not exist; absence is an
    /// expected outcome, not an error.
    pub fn update_document(&mut self, id: &str, aliases: Vec<String>) -> bool {
        if !self.store.contains(id) {
            return false;
        }
        self.insert_internal(id, &aliases);
        true
    }

    /// Removes a document and all its reverse-index entries.
    ///
    /// Returns `false` when `id` does not exist.
    pub fn remove_document(&mut self, id: &str) -> bool {
        let removed = self.remove_internal(id);
        if removed {
            self.pool.purge();
        }
        removed
    }

    /// Empties the document store, reverse index, normalizer cache and
    /// string pool.
    pub fn clear_index(&mut self) {
        self.store.clear();
        self.reverse.clear();
        self.normalizer.clear();
        self.pool.clear();
        tracing::debug!("index cleared");
    }

    /// Clears the index then bulk-inserts, as one logical operation.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MalformedInput`] on invalid JSON; the
    /// payload is validated before the clear, so a malformed buffer
    /// leaves existing state untouched.
    pub fn replace_all_documents_json(&mut self, json: &str) -> Result<usize> {
        let docs: Vec<DocumentInput> = serde_json::from_str(json)?;
        Ok(self.replace_all_documents(docs))
    }

    /// Clears the index then bulk-inserts the given documents.
    pub fn replace_all_documents(&mut self, docs: Vec<DocumentInput>) -> usize {
        self.clear_index();
        self.add_documents(docs)
    }

    // ========================================================================
    // Query
    // ========================================================================

    /// Searches with an optional limit (default from configuration).
    ///
    /// A query with spaces runs as an AND search over its keywords;
    /// otherwise the six-tier priority search runs. Zero matches yield an
    /// empty vec, never an error. Any limit, explicit or defaulted, is
    /// clamped to `search.max_results`.
    pub fn search(&mut self, query: &str, limit: Option<usize>) -> Vec<String> {
        let limit = limit
            .unwrap_or(self.config.search.default_limit)
            .min(self.config.search.max_results);
        self.search_many(&[query], limit)
    }

    /// Returns every match across all six tiers, uncapped.
    pub fn search_no_limit(&mut self, query: &str) -> Vec<String> {
        self.search_many(&[query], usize::MAX)
    }

    /// Searches with an explicit limit, clamped to `search.max_results`.
    ///
    /// Use [`Index::search_no_limit`] to bypass the cap entirely.
    pub fn search_with_limit(&mut self, query: &str, limit: usize) -> Vec<String> {
        self.search(query, Some(limit))
    }

    /// Searches over several query strings at once; a document matches if
    /// any query matches it, reported at its best tier.
    pub fn search_many(&mut self, queries: &[&str], limit: usize) -> Vec<String> {
        if self.store.is_empty() || queries.is_empty() {
            return Vec::new();
        }

        // A single space-separated query is an AND over its keywords.
        if let [query] = queries {
            let keywords: Vec<&str> = query.split_whitespace().collect();
            if keywords.len() > 1 {
                let keyword_forms: Vec<_> = keywords
                    .iter()
                    .map(|kw| self.normalizer.candidate_forms(&mut self.pool, kw))
                    .collect();
                let mut engine = self.engine();
                let hits = engine.search_and(&keyword_forms, limit);
                return hits.into_iter().map(|id| id.to_string()).collect();
            }
        }

        let mut forms = Vec::new();
        for query in queries {
            for form in self.normalizer.candidate_forms(&mut self.pool, query) {
                if !forms.contains(&form) {
                    forms.push(form);
                }
            }
        }

        let mut engine = self.engine();
        let hits = engine.search_tiered(&forms, limit);
        hits.into_iter().map(|id| id.to_string()).collect()
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    /// Serializes the index to a versioned binary buffer.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Serialization`] if encoding fails.
    pub fn dump(&self) -> Result<Vec<u8>> {
        let docs = self
            .store
            .iter_ordered()
            .map(|(id, doc)| DumpDoc {
                id: id.to_string(),
                aliases: doc.aliases.iter().map(ToString::to_string).collect(),
            })
            .collect();
        codec::encode(docs)
    }

    /// Rebuilds an index from a dumped buffer, migrating legacy buffers
    /// to the current format.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnsupportedVersion`] for unknown version
    /// tags and [`crate::Error::CorruptData`] for truncated or garbled
    /// payloads.
    pub fn load(bytes: &[u8]) -> Result<Self> {
        Self::load_with_config(bytes, IndexConfig::default())
    }

    /// `load` with an explicit configuration for the rebuilt index.
    ///
    /// # Errors
    ///
    /// Same as [`Index::load`].
    pub fn load_with_config(bytes: &[u8], config: IndexConfig) -> Result<Self> {
        let docs = match codec::decode(bytes)? {
            Payload::Current(docs) => docs,
            Payload::Legacy(legacy) => {
                tracing::debug!("migrating legacy bigram index");
                codec::migrate(legacy)
            }
        };

        let mut index = Self::with_config(config);
        index.store.reserve(docs.len());
        index.reverse.reserve(docs.len() * 2);
        for doc in docs {
            index.insert_internal(&doc.id, &doc.aliases);
        }
        Ok(index)
    }

    /// Format version this instance would serialize as; always the
    /// current version, including for freshly migrated engines.
    #[must_use]
    pub fn get_version(&self) -> u32 {
        codec::FORMAT_VERSION
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Number of indexed documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if the index holds no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    // ========================================================================
    // Internals
    // ========================================================================

    #[cfg(test)]
    pub(crate) fn pool_contains(&self, text: &str) -> bool {
        self.pool.contains(text)
    }

    fn engine(&mut self) -> QueryEngine<'_> {
        QueryEngine::new(
            &self.store,
            &self.reverse,
            &mut self.normalizer,
            &mut self.pool,
        )
    }

    /// Inserts one document, store and reverse index together.
    fn insert_internal(&mut self, name: &str, aliases: &[String]) {
        if self.store.contains(name) {
            self.remove_internal(name);
            self.pool.purge();
        }

        let id = self.pool.intern(name);
        let alias_handles: Vec<_> = aliases.iter().map(|a| self.pool.intern(a)).collect();

        for form in self.normalizer.doc_forms(&mut self.pool, &id) {
            self.reverse.insert(form, id.clone(), TokenSource::Name);
        }
        for alias in &alias_handles {
            for form in self.normalizer.doc_forms(&mut self.pool, alias) {
                self.reverse.insert(form, id.clone(), TokenSource::Alias);
            }
        }

        self.store.insert(id, alias_handles);
    }

    /// Removes one document, store and reverse index together.
    fn remove_internal(&mut self, id: &str) -> bool {
        let Some((key, doc)) = self.store.remove(id) else {
            return false;
        };

        for form in self.normalizer.doc_forms(&mut self.pool, &key) {
            self.reverse.remove(&form, id);
        }
        for alias in &doc.aliases {
            for form in self.normalizer.doc_forms(&mut self.pool, alias) {
                self.reverse.remove(&form, id);
            }
            self.normalizer.forget(alias);
        }
        self.normalizer.forget(&key);

        tracing::debug!(%id, total = self.store.len(), "document removed");
        true
    }
}
