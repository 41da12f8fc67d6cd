//! On-disk vault backing the store.
//!
//! Records and the PIN hash live in a single JSON file under the user's
//! local data directory. The whole file is rewritten on every mutation;
//! the vault is small and a full rewrite keeps it consistent without a
//! journal. The PIN is never stored in the clear, only as an argon2
//! hash.

use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StoreError;
use crate::store::{RecordKey, VaultStore};

#[derive(Debug, Default, Serialize, Deserialize)]
struct VaultFile {
    #[serde(default)]
    records: BTreeMap<String, Value>,
    #[serde(default)]
    pin_hash: Option<String>,
}

/// JSON-file-backed [`VaultStore`].
///
/// Opening the vault starts a live session; [`VaultStore::destroy_session`]
/// ends it for the lifetime of this instance and every record operation
/// fails with [`StoreError::SessionInvalid`] afterwards.
#[derive(Debug)]
pub struct LocalVaultStore {
    path: PathBuf,
    inner: RwLock<VaultFile>,
    session_live: AtomicBool,
}

impl LocalVaultStore {
    /// Default vault location under the platform's local data directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|dir| dir.join("pinvault").join("vault.json"))
    }

    /// Open the vault at `path`, creating an empty one in memory if the
    /// file does not exist yet. The file itself is only written on the
    /// first mutation.
    pub fn open(path: PathBuf) -> Result<Self, StoreError> {
        let file = match std::fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => VaultFile::default(),
            Err(err) => return Err(err.into()),
        };

        Ok(Self {
            path,
            inner: RwLock::new(file),
            session_live: AtomicBool::new(true),
        })
    }

    fn check_session(&self) -> Result<(), StoreError> {
        if self.session_live.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::SessionInvalid)
        }
    }

    fn persist(&self, file: &VaultFile) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let bytes = serde_json::to_vec_pretty(file)?;
        std::fs::write(&self.path, bytes)?;
        Ok(())
    }

    fn pin_matches(file: &VaultFile, pin: &str) -> Result<bool, StoreError> {
        match &file.pin_hash {
            // First run: no PIN configured yet. An empty current PIN
            // verifies so the PIN form doubles as initial setup.
            None => Ok(pin.is_empty()),
            Some(hash) => {
                let parsed =
                    PasswordHash::new(hash).map_err(|err| StoreError::Hash(err.to_string()))?;
                Ok(Argon2::default()
                    .verify_password(pin.as_bytes(), &parsed)
                    .is_ok())
            }
        }
    }

    fn hash_pin(pin: &str) -> Result<String, StoreError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(pin.as_bytes(), &salt)
            .map_err(|err| StoreError::Hash(err.to_string()))?;
        Ok(hash.to_string())
    }
}

#[async_trait]
impl VaultStore for LocalVaultStore {
    async fn get(&self, key: RecordKey) -> Result<Option<Value>, StoreError> {
        self.check_session()?;
        Ok(self.inner.read().records.get(key.as_str()).cloned())
    }

    async fn set(&self, key: RecordKey, value: Value) -> Result<(), StoreError> {
        self.check_session()?;
        let mut file = self.inner.write();
        file.records.insert(key.as_str().to_string(), value);
        self.persist(&file)
    }

    async fn delete(&self, key: RecordKey) -> Result<(), StoreError> {
        self.check_session()?;
        let mut file = self.inner.write();
        if file.records.remove(key.as_str()).is_none() {
            return Ok(());
        }
        self.persist(&file)
    }

    async fn verify_pin(&self, pin: &str) -> Result<bool, StoreError> {
        self.check_session()?;
        let file = self.inner.read();
        Self::pin_matches(&file, pin)
    }

    async fn change_pin(&self, current: &str, new: &str) -> Result<bool, StoreError> {
        self.check_session()?;
        let mut file = self.inner.write();
        if !Self::pin_matches(&file, current)? {
            return Ok(false);
        }
        file.pin_hash = Some(Self::hash_pin(new)?);
        self.persist(&file)?;
        Ok(true)
    }

    async fn destroy_session(&self) {
        log::debug!("session destroyed");
        self.session_live.store(false, Ordering::SeqCst);
    }
}
