//! Reverse index: normalized token to the documents that own it.
//!
//! Only full normalized strings are stored, so the index stays
//! O(distinct names + aliases); prefix and substring tiers scan stored
//! strings at query time instead of pre-expanding entries here.
//!
//! Invariant (kept by the `Index` facade): a document id appears under
//! token T exactly when some normalized form of its name or one of its
//! aliases equals T.

use crate::intern::SharedStr;
use rustc_hash::FxHashMap;

/// Where an indexed token came from inside its document.
///
/// The exact-match tiers rank name hits above alias hits, so a posting
/// remembers which side produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    /// Token is a normalized form of the document name.
    Name,
    /// Token is a normalized form of one of the aliases.
    Alias,
}

/// One entry in a posting list.
#[derive(Debug, Clone)]
pub struct Posting {
    /// Owning document id.
    pub doc: SharedStr,
    /// Name or alias origin of the token.
    pub source: TokenSource,
}

/// Documents owning a token, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct PostingList {
    entries: Vec<Posting>,
}

impl PostingList {
    /// Appends a posting.
    pub fn add(&mut self, doc: SharedStr, source: TokenSource) {
        self.entries.push(Posting { doc, source });
    }

    /// Removes every posting owned by `doc`, returning how many went.
    pub fn remove_doc(&mut self, doc: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|p| p.doc.as_ref() != doc);
        before - self.entries.len()
    }

    /// Iterates the postings.
    pub fn iter(&self) -> impl Iterator<Item = &Posting> {
        self.entries.iter()
    }

    /// Number of postings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no postings remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Token to posting-list map for O(1) exact lookup.
#[derive(Debug, Default)]
pub struct ReverseIndex {
    map: FxHashMap<SharedStr, PostingList>,
}

impl ReverseIndex {
    /// Creates an empty reverse index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a posting under `token`.
    ///
    /// Duplicate (token, doc, source) triples are collapsed: a name and an
    /// alias normalizing to the same token keep one posting per source.
    pub fn insert(&mut self, token: SharedStr, doc: SharedStr, source: TokenSource) {
        let list = self.map.entry(token).or_default();
        let duplicate = list
            .iter()
            .any(|p| p.source == source && p.doc == doc);
        if !duplicate {
            list.add(doc, source);
        }
    }

    /// Removes every posting of `doc` under `token`; drops the token when
    /// its list empties.
    pub fn remove(&mut self, token: &str, doc: &str) {
        if let Some(list) = self.map.get_mut(token) {
            list.remove_doc(doc);
            if list.is_empty() {
                self.map.remove(token);
            }
        }
    }

    /// Exact lookup of a normalized token.
    #[must_use]
    pub fn lookup(&self, token: &str) -> Option<&PostingList> {
        self.map.get(token)
    }

    /// Number of distinct tokens.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the index holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Removes all tokens.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Reserves room for `additional` more tokens (bulk loads).
    pub fn reserve(&mut self, additional: usize) {
        self.map.reserve(additional);
    }
}
