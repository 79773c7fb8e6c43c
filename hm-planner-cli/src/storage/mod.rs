// Snapshot persistence over a plain key-value store.
// The store is injected so plan generation never depends on I/O.

mod memory;
mod sled_store;

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::models::{PlanInputs, SavedPlanRecord, WeekPlan};

pub use memory::MemoryStore;
pub use sled_store::SledStore;

/// Key holding the JSON array of every saved snapshot key
pub const INDEX_KEY: &str = "hm-plans-keys";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage backend error: {0}")]
    Backend(#[from] sled::Error),

    #[error("Stored value for {0} is not valid UTF-8")]
    Encoding(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Minimal text key-value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// Auto-generated snapshot key for a save at `now`, e.g. `plan-2024-01-011030`.
pub fn default_key(now: NaiveDateTime) -> String {
    format!("plan-{}", now.format("%Y-%m-%d%H%M"))
}

/// Saves, loads and lists named plan snapshots.
pub struct PlanRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> PlanRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist a snapshot under `key`, or an auto-generated key when `None`
    /// or blank. Reusing a key overwrites the earlier snapshot.
    pub fn save(
        &self,
        key: Option<&str>,
        inputs: &PlanInputs,
        plan: &[WeekPlan],
    ) -> StorageResult<String> {
        let key = match key.map(str::trim).filter(|k| !k.is_empty()) {
            Some(k) => k.to_string(),
            None => default_key(chrono::Local::now().naive_local()),
        };

        let record = SavedPlanRecord {
            inputs: inputs.clone(),
            plan: plan.to_vec(),
        };
        let payload = serde_json::to_string(&record)?;
        self.store.set(&key, &payload)?;

        let mut keys = self.list_keys()?;
        if !keys.contains(&key) {
            keys.push(key.clone());
        }
        self.store.set(INDEX_KEY, &serde_json::to_string(&keys)?)?;

        tracing::debug!("Saved plan snapshot {}", key);
        Ok(key)
    }

    /// Load a snapshot. Missing keys and unreadable payloads yield `None`.
    pub fn load(&self, key: &str) -> StorageResult<Option<SavedPlanRecord>> {
        let Some(raw) = self.store.get(key)? else {
            tracing::debug!("No snapshot stored under {}", key);
            return Ok(None);
        };

        match serde_json::from_str::<SavedPlanRecord>(&raw) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                tracing::warn!("Ignoring corrupt snapshot {}: {}", key, e);
                Ok(None)
            }
        }
    }

    /// Known snapshot keys in first-saved order.
    pub fn list_keys(&self) -> StorageResult<Vec<String>> {
        let Some(raw) = self.store.get(INDEX_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(keys) => {
                let mut unique: Vec<String> = Vec::with_capacity(keys.len());
                for key in keys {
                    if !unique.contains(&key) {
                        unique.push(key);
                    }
                }
                Ok(unique)
            }
            Err(e) => {
                tracing::warn!("Ignoring corrupt snapshot index: {}", e);
                Ok(Vec::new())
            }
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
