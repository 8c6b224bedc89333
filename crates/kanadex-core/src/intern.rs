//! String pool: content-addressed interning of immutable text.
//!
//! Document ids, aliases, and cached normalized forms all pass through one
//! pool per index instance, so two equal strings share a single allocation
//! no matter how many documents or cache slots reference them.
//!
//! Entries have no eviction policy: a string lives as long as any owner
//! (a document field or a normalizer cache slot) still holds its handle.
//! [`StringPool::purge`] reclaims entries after owners have been dropped.

use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Reference-counted immutable text handle shared across the engine.
pub type SharedStr = Arc<str>;

/// Content-addressed string pool.
///
/// Not thread-safe by design: the engine is a single-owner structure and
/// the pool is owned by one `Index` instance (nothing process-global).
#[derive(Debug, Default)]
pub struct StringPool {
    // Keyed by the interned handle itself; lookup by &str goes through
    // the Borrow<str> impl on Arc<str>.
    entries: FxHashMap<SharedStr, ()>,
}

impl StringPool {
    /// Creates an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns `text`, returning an ownership-sharing handle.
    ///
    /// The second call with equal content returns a clone of the existing
    /// handle; no new copy of the byte content is made.
    pub fn intern(&mut self, text: &str) -> SharedStr {
        if let Some((existing, ())) = self.entries.get_key_value(text) {
            return Arc::clone(existing);
        }
        let handle: SharedStr = Arc::from(text);
        self.entries.insert(Arc::clone(&handle), ());
        handle
    }

    /// Interns an already-allocated handle, deduplicating against the pool.
    pub fn intern_shared(&mut self, text: SharedStr) -> SharedStr {
        if let Some((existing, ())) = self.entries.get_key_value(text.as_ref()) {
            return Arc::clone(existing);
        }
        self.entries.insert(Arc::clone(&text), ());
        text
    }

    /// Drops every entry whose only remaining owner is the pool itself.
    ///
    /// Called after document removal so freed fields actually release
    /// memory instead of lingering in the table.
    pub fn purge(&mut self) {
        self.entries.retain(|key, ()| Arc::strong_count(key) > 1);
    }

    /// Returns `true` if `text` is currently interned.
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.entries.contains_key(text)
    }

    /// Number of interned strings currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the pool holds no strings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry regardless of outstanding owners.
    ///
    /// Outstanding handles stay valid (they own their allocation); the
    /// pool just stops deduplicating against them.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
