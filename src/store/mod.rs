//! The vault store abstraction the settings screen talks to.
//!
//! The store is the sole source of truth: the form never assumes its
//! in-memory copy survives a restart and always re-fetches on startup.
//! Implementations live behind `Arc<dyn VaultStore>` so the UI can be
//! driven by the on-disk vault in production and by a recording stub in
//! tests.

pub mod local;
pub mod records;

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StoreError;
use self::records::{Interest, ProfileRecord};

/// Keys for the records this screen reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecordKey {
    Profile,
    Interests,
    Training,
}

impl RecordKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Interests => "interests",
            Self::Training => "training",
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persistence and authentication service backing the settings screen.
///
/// Record operations fail with [`StoreError::SessionInvalid`] once the
/// session has been destroyed. A missing record is `Ok(None)`, not an
/// error, so the form can tell "nothing saved yet" apart from "locked
/// out".
#[async_trait]
pub trait VaultStore: Send + Sync {
    /// Fetch a record, or `None` if nothing is stored under the key.
    async fn get(&self, key: RecordKey) -> Result<Option<Value>, StoreError>;

    /// Overwrite a record wholesale.
    async fn set(&self, key: RecordKey, value: Value) -> Result<(), StoreError>;

    /// Remove a record. Removing an absent record is not an error.
    async fn delete(&self, key: RecordKey) -> Result<(), StoreError>;

    /// Check a PIN against the configured one.
    async fn verify_pin(&self, pin: &str) -> Result<bool, StoreError>;

    /// Replace the PIN. Returns `false` when `current` does not match.
    async fn change_pin(&self, current: &str, new: &str) -> Result<bool, StoreError>;

    /// End the session. Subsequent record operations fail.
    async fn destroy_session(&self);
}

/// Load the profile record, decoded. `Ok(None)` means no profile yet.
pub async fn load_profile(store: &dyn VaultStore) -> Result<Option<ProfileRecord>, StoreError> {
    match store.get(RecordKey::Profile).await? {
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
        None => Ok(None),
    }
}

/// Write the full profile record.
pub async fn save_profile(
    store: &dyn VaultStore,
    profile: &ProfileRecord,
) -> Result<(), StoreError> {
    store
        .set(RecordKey::Profile, serde_json::to_value(profile)?)
        .await
}

/// Load the interests list; an absent record is an empty list.
pub async fn load_interests(store: &dyn VaultStore) -> Result<Vec<Interest>, StoreError> {
    match store.get(RecordKey::Interests).await? {
        Some(value) => Ok(serde_json::from_value(value)?),
        None => Ok(Vec::new()),
    }
}
