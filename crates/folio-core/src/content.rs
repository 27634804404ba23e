//! Typed records and the CRUD repository over the content store.
//!
//! Collections are read and written whole: a mutation loads the full
//! collection, transforms it in memory, and writes it back. Last writer wins;
//! this is a single-operator model with no cross-process notification.

use crate::defaults;
use crate::error::ContentError;
use crate::store::{ContentStore, EXPERIENCES_KEY, PROJECTS_KEY};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// A showcased project. `id == 0` means "not yet assigned"; `save` allocates
/// the next identifier on append.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: u32,
    pub title: String,
    pub category: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    /// Primary image URI.
    pub image: String,
    /// Ordered gallery image URIs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<String>>,
    pub technologies: Vec<String>,
    /// Outbound link URI.
    pub link: String,
}

/// A work-history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    #[serde(default)]
    pub id: u32,
    pub role: String,
    pub company: String,
    /// Free-text range, e.g. `"2021 - Present"`. Not a structured date.
    pub period: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A record stored in one of the content collections.
pub trait ContentRecord: Serialize + DeserializeOwned + Clone {
    /// Store key holding the full serialized collection.
    const STORE_KEY: &'static str;

    fn id(&self) -> u32;
    fn set_id(&mut self, id: u32);

    /// Built-in collection used to seed an empty store.
    fn defaults() -> Vec<Self>;
}

impl ContentRecord for Project {
    const STORE_KEY: &'static str = PROJECTS_KEY;

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    fn defaults() -> Vec<Self> {
        defaults::default_projects()
    }
}

impl ContentRecord for Experience {
    const STORE_KEY: &'static str = EXPERIENCES_KEY;

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    fn defaults() -> Vec<Self> {
        defaults::default_experiences()
    }
}

/// CRUD access to the persisted collections.
pub struct ContentRepository<S: ContentStore> {
    store: S,
}

impl<S: ContentStore> ContentRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store seam.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the persisted collection, seeding the built-in defaults on
    /// first access (the seed is written back, so a second call reads the
    /// persisted copy). A malformed persisted value falls back to the
    /// defaults without overwriting the stored bytes.
    pub fn get_all<T: ContentRecord>(&self) -> Result<Vec<T>, ContentError> {
        match self.store.get(T::STORE_KEY)? {
            Some(raw) => match serde_json::from_slice(&raw) {
                Ok(records) => Ok(records),
                Err(err) => {
                    warn!(key = T::STORE_KEY, %err, "malformed collection, serving built-in defaults");
                    Ok(T::defaults())
                }
            },
            None => {
                let records = T::defaults();
                self.write_all(&records)?;
                info!(key = T::STORE_KEY, count = records.len(), "seeded collection with built-in defaults");
                Ok(records)
            }
        }
    }

    /// Inserts or replaces a record. An id matching an existing record
    /// replaces it in place (position preserved); any other id, including
    /// the unassigned `0`, is reassigned to `max(existing ids) + 1` (1 for
    /// an empty collection) and the record is appended. Returns the record
    /// as stored.
    pub fn save<T: ContentRecord>(&self, mut record: T) -> Result<T, ContentError> {
        let mut records: Vec<T> = self.get_all()?;
        if let Some(slot) = records.iter_mut().find(|r| r.id() == record.id()) {
            *slot = record.clone();
        } else {
            let next = records.iter().map(|r| r.id()).max().unwrap_or(0) + 1;
            record.set_id(next);
            records.push(record.clone());
        }
        self.write_all(&records)?;
        debug!(key = T::STORE_KEY, id = record.id(), "record saved");
        Ok(record)
    }

    /// Removes the record with `id`. A missing id is a no-op, not an error.
    pub fn delete<T: ContentRecord>(&self, id: u32) -> Result<(), ContentError> {
        let mut records: Vec<T> = self.get_all()?;
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() != before {
            self.write_all(&records)?;
            debug!(key = T::STORE_KEY, id, "record deleted");
        }
        Ok(())
    }

    fn write_all<T: ContentRecord>(&self, records: &[T]) -> Result<(), ContentError> {
        let raw = serde_json::to_vec(records).map_err(ContentError::Encode)?;
        self.store.set(T::STORE_KEY, &raw)?;
        Ok(())
    }
}
