//! Error types for kanadex.
//!
//! This module provides a unified error type for all index operations.
//! Error codes follow the pattern `KDX-XXX` for easy debugging.

use thiserror::Error;

/// Result type alias for kanadex operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in kanadex operations.
///
/// Every failure is a deterministic function of the input: the core has no
/// I/O and no transient failure modes, so nothing here is worth retrying.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed structural input (KDX-001).
    ///
    /// The document JSON or query encoding did not match the expected
    /// schema. Existing engine state is never touched when this is raised.
    #[error("[KDX-001] Malformed input: {0}")]
    MalformedInput(String),

    /// Unsupported serialization format version (KDX-002).
    #[error("[KDX-002] Unsupported index format version {0} (supported: 1, 2)")]
    UnsupportedVersion(u32),

    /// Corrupt or truncated serialized index (KDX-003).
    #[error("[KDX-003] Corrupt index data: {0}")]
    CorruptData(String),

    /// Serialization error while dumping the index (KDX-004).
    #[error("[KDX-004] Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Returns the error code (e.g., "KDX-001").
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MalformedInput(_) => "KDX-001",
            Self::UnsupportedVersion(_) => "KDX-002",
            Self::CorruptData(_) => "KDX-003",
            Self::Serialization(_) => "KDX-004",
        }
    }

    /// Returns true if this error is recoverable.
    ///
    /// Corrupt data is the only non-recoverable condition: the blob can
    /// never load no matter what the caller does.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::CorruptData(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedInput(format!(
            "JSON parse error at line {}, column {}: {}",
            err.line(),
            err.column(),
            err
        ))
    }
}
