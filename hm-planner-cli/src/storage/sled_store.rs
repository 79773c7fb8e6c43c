// Key-value store backed by the sled embedded database

use anyhow::{Context, Result};
use sled::Db;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StorageError, StorageResult};

pub struct SledStore {
    db: Db,
}

impl SledStore {
    /// Get database directory path (~/.hm-planner/plans/)
    pub fn db_path() -> Result<PathBuf> {
        // Check for test environment variable first
        if let Ok(test_path) = std::env::var("HM_PLANNER_DB_PATH") {
            return Ok(PathBuf::from(test_path));
        }

        let config_dir = crate::config::Config::config_dir()?;
        Ok(config_dir.join("plans"))
    }

    /// Open the store at the default location
    pub fn init() -> Result<Self> {
        let db_path = Self::db_path()?;
        Self::open(&db_path)
    }

    /// Open the store at an explicit path
    pub fn open(path: &Path) -> Result<Self> {
        tracing::info!("Initializing sled database at {:?}", path);

        let db = sled::open(path).context("Failed to open sled database")?;

        Ok(Self { db })
    }
}

impl KeyValueStore for SledStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        match self.db.get(key.as_bytes())? {
            Some(value) => String::from_utf8(value.to_vec())
                .map(Some)
                .map_err(|_| StorageError::Encoding(key.to_string())),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.db.insert(key.as_bytes(), value.as_bytes())?;
        self.db.flush()?;

        tracing::debug!("Stored {} ({} bytes)", key, value.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_set_and_get() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let store = SledStore::open(dir.path())?;

        store.set("plan-a", "{\"weeks\":12}")?;
        assert_eq!(store.get("plan-a")?, Some("{\"weeks\":12}".to_string()));
        assert_eq!(store.get("plan-b")?, None);

        Ok(())
    }

    #[test]
    fn test_overwrite() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let store = SledStore::open(dir.path())?;

        store.set("plan-a", "first")?;
        store.set("plan-a", "second")?;
        assert_eq!(store.get("plan-a")?, Some("second".to_string()));

        Ok(())
    }
}
