use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use leptos::logging::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("storage call failed for key `{key}`: {message}")]
    Backend { key: String, message: String },
    #[error("stored collection `{key}` is not a JSON array: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize collection `{key}`: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Synchronous string key-value store (`localStorage` and friends).
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Handle to `window.localStorage`, resolved on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebStorage;

impl WebStorage {
    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for WebStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Backend {
                key: key.to_string(),
                message: format!("{:?}", e),
            })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Backend {
                key: key.to_string(),
                message: format!("{:?}", e),
            })
    }
}

/// In-memory store for native hosts and tests. Counts writes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// One stored entry: a decoded record, or raw JSON that didn't match the
/// record type and is written back untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
enum Entry<T> {
    Record(T),
    Unreadable(serde_json::Value),
}

/// A collection loaded for read-modify-write. Entries that don't decode keep
/// their position and are saved back as they were read.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredCollection<T> {
    entries: Vec<Entry<T>>,
}

impl<T> Default for StoredCollection<T> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<T> StoredCollection<T> {
    pub fn records(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().filter_map(|e| match e {
            Entry::Record(record) => Some(record),
            Entry::Unreadable(_) => None,
        })
    }

    pub fn records_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.entries.iter_mut().filter_map(|e| match e {
            Entry::Record(record) => Some(record),
            Entry::Unreadable(_) => None,
        })
    }

    pub fn find_mut(&mut self, mut predicate: impl FnMut(&T) -> bool) -> Option<&mut T> {
        self.records_mut().find(|record| predicate(record))
    }

    pub fn push(&mut self, record: T) {
        self.entries.push(Entry::Record(record));
    }

    /// Take out the first record matching `predicate`.
    pub fn remove_first(&mut self, mut predicate: impl FnMut(&T) -> bool) -> Option<T> {
        let index = self
            .entries
            .iter()
            .position(|e| matches!(e, Entry::Record(record) if predicate(record)))?;
        match self.entries.remove(index) {
            Entry::Record(record) => Some(record),
            Entry::Unreadable(_) => None,
        }
    }

    pub fn unreadable_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, Entry::Unreadable(_)))
            .count()
    }

    pub fn into_records(self) -> Vec<T> {
        self.entries
            .into_iter()
            .filter_map(|e| match e {
                Entry::Record(record) => Some(record),
                Entry::Unreadable(_) => None,
            })
            .collect()
    }
}

/// Load a collection for rewriting. A missing key is empty; text that isn't a
/// JSON array is a `Decode` error.
pub fn load_stored<T, S>(store: &S, key: &str) -> Result<StoredCollection<T>, StorageError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get_item(key)? else {
        return Ok(StoredCollection::default());
    };

    let values: Vec<serde_json::Value> =
        serde_json::from_str(&raw).map_err(|source| StorageError::Decode {
            key: key.to_string(),
            source,
        })?;

    let entries = values
        .into_iter()
        .map(|value| match T::deserialize(&value) {
            Ok(record) => Entry::Record(record),
            Err(_) => Entry::Unreadable(value),
        })
        .collect();
    let collection = StoredCollection { entries };

    let unreadable = collection.unreadable_count();
    if unreadable > 0 {
        warn!("{} unreadable record(s) in `{}` are kept as-is", unreadable, key);
    }
    Ok(collection)
}

/// `load_stored`, treating any failure as "no data yet".
pub fn load_stored_or_empty<T, S>(store: &S, key: &str) -> StoredCollection<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match load_stored(store, key) {
        Ok(collection) => collection,
        Err(e) => {
            warn!("{}; treating it as empty", e);
            StoredCollection::default()
        }
    }
}

/// Write a collection back, unreadable entries included, in one write.
pub fn save_stored<T, S>(store: &S, key: &str, collection: &StoredCollection<T>) -> Result<(), StorageError>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    write_json(store, key, &collection.entries)
}

/// Load the readable records of a collection. A missing key is an empty
/// collection; text that isn't a JSON array is a `Decode` error.
pub fn load_collection<T, S>(store: &S, key: &str) -> Result<Vec<T>, StorageError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    load_stored(store, key).map(StoredCollection::into_records)
}

/// `load_collection`, treating any failure as "no data yet".
pub fn load_collection_or_empty<T, S>(store: &S, key: &str) -> Vec<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match load_collection(store, key) {
        Ok(records) => records,
        Err(e) => {
            warn!("{}; treating it as empty", e);
            Vec::new()
        }
    }
}

/// Overwrite a whole collection with one write.
pub fn save_collection<T, S>(store: &S, key: &str, records: &[T]) -> Result<(), StorageError>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    write_json(store, key, records)
}

fn write_json<V, S>(store: &S, key: &str, value: &V) -> Result<(), StorageError>
where
    V: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let json = serde_json::to_string(value).map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.set_item(key, &json)
}
