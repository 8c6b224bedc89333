//! Document store: owns the (id, alias list) set keyed by unique id.
//!
//! Each document carries an insertion-order stamp; the query engine uses
//! it for deterministic within-tier ordering. The store never touches the
//! reverse index itself; the `Index` facade keeps the two consistent by
//! updating both inside every mutation.

use crate::intern::SharedStr;
use rustc_hash::FxHashMap;

/// A stored document: its alias list plus the insertion-order stamp.
#[derive(Debug, Clone)]
pub struct StoredDocument {
    /// Interned alias strings, in the order they were provided.
    pub aliases: Vec<SharedStr>,
    /// Monotonic insertion stamp; later inserts get larger stamps.
    pub seq: u64,
}

/// In-memory document set keyed by unique id.
#[derive(Debug, Default)]
pub struct DocumentStore {
    docs: FxHashMap<SharedStr, StoredDocument>,
    // Ids in insertion order; kept compact on removal so scans need no
    // tombstone handling.
    order: Vec<SharedStr>,
    next_seq: u64,
}

impl DocumentStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store sized for `capacity` documents.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            docs: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            order: Vec::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Inserts a document, stamping it with the next insertion sequence.
    ///
    /// The caller must have removed any previous document with the same id
    /// first; duplicate-id policy lives in the `Index` facade.
    pub fn insert(&mut self, id: SharedStr, aliases: Vec<SharedStr>) {
        debug_assert!(!self.docs.contains_key(&id), "duplicate id reached store");
        let seq = self.next_seq;
        self.next_seq += 1;
        self.order.push(id.clone());
        self.docs.insert(id, StoredDocument { aliases, seq });
    }

    /// Removes a document, returning it if it existed.
    pub fn remove(&mut self, id: &str) -> Option<(SharedStr, StoredDocument)> {
        let (key, doc) = self.docs.remove_entry(id)?;
        self.order.retain(|existing| existing.as_ref() != id);
        Some((key, doc))
    }

    /// Looks up a document by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&StoredDocument> {
        self.docs.get(id)
    }

    /// Returns `true` if a document with `id` exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.docs.contains_key(id)
    }

    /// Iterates documents in insertion order.
    pub fn iter_ordered(&self) -> impl Iterator<Item = (&SharedStr, &StoredDocument)> {
        self.order.iter().filter_map(|id| {
            self.docs
                .get_key_value(id.as_ref())
                .map(|(key, doc)| (key, doc))
        })
    }

    /// Number of stored documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Returns `true` if no documents are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Removes every document. The sequence counter keeps advancing so
    /// stamps stay unique across a clear.
    pub fn clear(&mut self) {
        self.docs.clear();
        self.order.clear();
    }

    /// Reserves room for `additional` more documents (bulk loads).
    pub fn reserve(&mut self, additional: usize) {
        self.docs.reserve(additional);
        self.order.reserve(additional);
    }
}
