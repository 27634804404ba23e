//! Content store: the key-value seam under the repository.
//!
//! Three keys live here: the two serialized record collections and the admin
//! session flag. `SledStore` is the durable implementation; `MemoryStore` is
//! the volatile one used by tests and ephemeral sessions.

use crate::error::StoreError;
use dashmap::DashMap;
use sled::Db;
use std::path::Path;
use std::sync::Arc;

/// Key for the persisted projects collection (JSON array of records).
pub const PROJECTS_KEY: &str = "folio_projects_data";
/// Key for the persisted experience collection (JSON array of records).
pub const EXPERIENCES_KEY: &str = "folio_experience_data";
/// Key for the admin session flag. Holds the `"true"` sentinel while a
/// session is authenticated.
pub const SESSION_FLAG_KEY: &str = "folio_admin_auth";

/// Key-value access for the content keys. Writes must be immediately visible
/// to subsequent reads through any clone of the same store.
pub trait ContentStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;
    fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Durable store backed by sled. Survives restarts; scoped to one data
/// directory, so distinct deployments never see each other's writes.
#[derive(Clone)]
pub struct SledStore {
    db: Db,
}

impl SledStore {
    /// Opens or creates the sled database at `path`.
    pub fn open_path<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let db = sled::open(path)?;
        Ok(Self { db })
    }
}

impl ContentStore for SledStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.db.get(key.as_bytes())?.map(|iv| iv.to_vec()))
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.db.insert(key.as_bytes(), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.db.remove(key.as_bytes())?;
        Ok(())
    }
}

/// Volatile store over a shared DashMap. Clones share the same map.
#[derive(Clone, Default)]
pub struct MemoryStore {
    map: Arc<DashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContentStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.map.get(key).map(|v| v.clone()))
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.map.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.map.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_contract() {
        let store = MemoryStore::new();
        assert!(store.get("missing").unwrap().is_none());

        store.set("k", b"v1").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some(&b"v1"[..]));

        store.set("k", b"v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some(&b"v2"[..]));

        store.remove("k").unwrap();
        assert!(store.get("k").unwrap().is_none());
        // Removing an absent key is a no-op.
        store.remove("k").unwrap();
    }

    #[test]
    fn memory_store_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("shared", b"yes").unwrap();
        assert_eq!(other.get("shared").unwrap().as_deref(), Some(&b"yes"[..]));
    }
}
