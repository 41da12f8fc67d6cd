//! A recording in-memory [`VaultStore`] stub.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StoreError;
use crate::store::{RecordKey, VaultStore};

#[derive(Debug, Default)]
struct Inner {
    records: HashMap<RecordKey, Value>,
    pin: String,
    reject_changes: bool,
    fail_with: Option<StoreError>,
    calls: Vec<String>,
    session_destroyed: bool,
}

/// In-memory store that records every call it receives.
///
/// Failure injection: [`StubVaultStore::failing`] makes every record and
/// PIN operation return the given error, which is how tests exercise the
/// sign-out paths.
#[derive(Debug, Clone, Default)]
pub struct StubVaultStore {
    inner: Arc<RwLock<Inner>>,
}

impl StubVaultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configured PIN.
    pub fn with_pin(self, pin: &str) -> Self {
        self.inner.write().unwrap().pin = pin.to_string();
        self
    }

    /// Seed a stored record.
    pub fn with_record(self, key: RecordKey, value: Value) -> Self {
        self.inner.write().unwrap().records.insert(key, value);
        self
    }

    /// Make `change_pin` return `false` even for a correct current PIN.
    pub fn rejecting_changes(self) -> Self {
        self.inner.write().unwrap().reject_changes = true;
        self
    }

    /// Make every operation fail with `err`.
    pub fn failing(self, err: StoreError) -> Self {
        self.inner.write().unwrap().fail_with = Some(err);
        self
    }

    pub fn pin(&self) -> String {
        self.inner.read().unwrap().pin.clone()
    }

    pub fn record(&self, key: RecordKey) -> Option<Value> {
        self.inner.read().unwrap().records.get(&key).cloned()
    }

    pub fn calls(&self) -> Vec<String> {
        self.inner.read().unwrap().calls.clone()
    }

    /// How many recorded calls start with `name`.
    pub fn call_count(&self, name: &str) -> usize {
        self.inner
            .read()
            .unwrap()
            .calls
            .iter()
            .filter(|call| call.starts_with(name))
            .count()
    }

    pub fn session_destroyed(&self) -> bool {
        self.inner.read().unwrap().session_destroyed
    }

    fn check(&self, call: String) -> Result<(), StoreError> {
        let mut inner = self.inner.write().unwrap();
        inner.calls.push(call);
        match &inner.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl VaultStore for StubVaultStore {
    async fn get(&self, key: RecordKey) -> Result<Option<Value>, StoreError> {
        self.check(format!("get:{key}"))?;
        Ok(self.inner.read().unwrap().records.get(&key).cloned())
    }

    async fn set(&self, key: RecordKey, value: Value) -> Result<(), StoreError> {
        self.check(format!("set:{key}"))?;
        self.inner.write().unwrap().records.insert(key, value);
        Ok(())
    }

    async fn delete(&self, key: RecordKey) -> Result<(), StoreError> {
        self.check(format!("delete:{key}"))?;
        self.inner.write().unwrap().records.remove(&key);
        Ok(())
    }

    async fn verify_pin(&self, pin: &str) -> Result<bool, StoreError> {
        self.check("verify_pin".to_string())?;
        Ok(self.inner.read().unwrap().pin == pin)
    }

    async fn change_pin(&self, current: &str, new: &str) -> Result<bool, StoreError> {
        self.check("change_pin".to_string())?;
        let mut inner = self.inner.write().unwrap();
        if inner.reject_changes || inner.pin != current {
            return Ok(false);
        }
        inner.pin = new.to_string();
        Ok(true)
    }

    async fn destroy_session(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.calls.push("destroy_session".to_string());
        inner.session_destroyed = true;
    }
}
