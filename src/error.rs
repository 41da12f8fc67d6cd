//! Store error taxonomy.
//!
//! A missing record is not an error here: `get` returns `Ok(None)` so the
//! form can fall back to defaults. Only a dead session or a broken vault
//! file surface as `Err`, and those always end the session.

use thiserror::Error;

/// Failures surfaced by a [`crate::store::VaultStore`].
///
/// Variants carry rendered strings rather than source errors so they can
/// travel inside `Clone`able messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The session has been destroyed; no record operation may proceed.
    #[error("the session is no longer valid")]
    SessionInvalid,

    /// Reading or writing the vault file failed.
    #[error("vault I/O failed: {0}")]
    Io(String),

    /// A stored record could not be encoded or decoded.
    #[error("vault record is malformed: {0}")]
    Serialization(String),

    /// Hashing or verifying the PIN failed.
    #[error("PIN hashing failed: {0}")]
    Hash(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
