//! # Kanadex Core
//!
//! Compact embeddable search index for short-string lookup, tuned for
//! Japanese text.
//!
//! Documents are (name, aliases) pairs. Queries match across script
//! boundaries: lowercase folding, katakana to hiragana folding, and
//! romaji to hiragana transliteration all happen inside the engine, so
//! `egao`, `えがお` and `エガオ` resolve the same document.
//!
//! ## Features
//!
//! - **Six-tier ranking**: exact name, exact alias, name prefix, alias
//!   prefix, name substring, alias substring, with early termination
//! - **Interned strings**: every name, alias and normalized form is
//!   stored once, shared by handle
//! - **Memoized normalization**: each distinct string is normalized at
//!   most once per index lifetime
//! - **Versioned persistence**: binary dump/load with one-way migration
//!   from the legacy bigram format
//!
//! ## Quick Start
//!
//! ```rust
//! use kanadex_core::Index;
//!
//! let mut index = Index::new();
//! index
//!     .add_documents_json(r#"[{"name": "笑顔", "aliases": ["えがお", "スマイル"]}]"#)
//!     .expect("valid payload");
//!
//! let hits = index.search("egao", None);
//! assert_eq!(hits, vec!["笑顔"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]

pub mod codec;
pub mod config;
pub mod error;
pub mod index;
pub mod intern;
#[cfg(test)]
mod intern_tests;
pub mod normalize;
pub mod query;
pub mod reverse;
pub mod store;

pub use codec::{DumpDoc, FORMAT_VERSION, LEGACY_VERSION};
pub use config::{ConfigError, IndexConfig, NormalizeConfig, SearchConfig};
pub use error::{Error, Result};
pub use index::{DocumentInput, Index};
pub use intern::{SharedStr, StringPool};
pub use normalize::Normalizer;
pub use query::MatchTier;
pub use reverse::{ReverseIndex, TokenSource};
pub use store::DocumentStore;
