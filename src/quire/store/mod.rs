//! # Storage Layer
//!
//! The whole diary collection is stored as one JSON document under one fixed key.
//! There is no partial save: every write replaces the collection.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: `diaries.json` in the data directory, written atomically
//! - [`memory::InMemoryStore`]: no persistence, for tests
//!
//! ## Loading never fails
//!
//! [`DiaryStore::load`] validates the stored document's shape (every diary has a
//! string `id` and `name` and a `pages` array; every page a string `id`, a string or
//! null `content` and a string `date`). A missing, unreadable or malformed document
//! yields [`seed_collection`] and a log line, not an error.
//!
//! ## Publishing
//!
//! The editor works on its own copy of one diary. When it saves, it publishes the new
//! version through [`Publish`]; [`Library`] swaps it into the collection and writes
//! the collection out.

use crate::error::{QuireError, Result};
use crate::model::{seed_collection, Diary};
use log::{debug, warn};

pub mod fs;
pub mod memory;

/// Durable storage for the diary collection.
pub trait DiaryStore {
    /// Load the collection, falling back to the seed collection on any problem.
    fn load(&self) -> Vec<Diary>;

    /// Replace the stored collection.
    fn save(&mut self, diaries: &[Diary]) -> Result<()>;
}

/// Receives new versions of a diary.
pub trait Publish {
    fn publish(&mut self, diary: &Diary) -> Result<()>;
}

/// Parses a stored collection, or explains why it cannot be trusted.
pub fn decode_collection(raw: &str) -> std::result::Result<Vec<Diary>, String> {
    serde_json::from_str::<Vec<Diary>>(raw).map_err(|e| e.to_string())
}

/// Shared fallback path for store implementations.
pub(crate) fn decode_or_seed(raw: Option<&str>) -> Vec<Diary> {
    let Some(raw) = raw else {
        debug!("no stored diaries, starting from the seed collection");
        return seed_collection();
    };
    match decode_collection(raw) {
        Ok(diaries) => diaries,
        Err(reason) => {
            warn!(
                "stored diaries have an invalid structure ({}), falling back to the seed collection",
                reason
            );
            seed_collection()
        }
    }
}

/// The in-memory diary collection together with the store that persists it.
pub struct Library<S: DiaryStore> {
    store: S,
    diaries: Vec<Diary>,
}

impl<S: DiaryStore> Library<S> {
    pub fn open(store: S) -> Self {
        let diaries = store.load();
        Self { store, diaries }
    }

    pub fn diaries(&self) -> &[Diary] {
        &self.diaries
    }

    pub fn find(&self, id: &str) -> Option<&Diary> {
        self.diaries.iter().find(|d| d.id == id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Replaces the collection and persists it. The new collection is kept in
    /// memory even when the write fails.
    pub fn replace_all(&mut self, diaries: Vec<Diary>) -> Result<()> {
        self.diaries = diaries;
        self.store.save(&self.diaries)
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

impl<S: DiaryStore> Publish for Library<S> {
    fn publish(&mut self, diary: &Diary) -> Result<()> {
        let slot = self
            .diaries
            .iter_mut()
            .find(|d| d.id == diary.id)
            .ok_or_else(|| QuireError::DiaryNotFound(diary.id.clone()))?;
        *slot = diary.clone();
        self.store.save(&self.diaries)
    }
}
