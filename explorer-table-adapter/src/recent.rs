use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::AdapterError;

/// Storage slot holding the recent-search array.
pub const RECENT_SEARCHES_KEY: &str = "recent_searches";

/// Number of recent searches kept.
pub const RECENT_SEARCH_LIMIT: usize = 10;

/// String slots addressed by key, like browser local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, AdapterError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), AdapterError>;

    fn remove(&mut self, key: &str) -> Result<(), AdapterError>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AdapterError> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AdapterError> {
        self.slots.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), AdapterError> {
        self.slots.remove(key);
        Ok(())
    }
}

/// A store persisted as one JSON object file (`{"key": "value", ...}`).
///
/// The file is read on every access and replaced on every change. A missing file is an empty
/// store.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, AdapterError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    fn write_all(&self, slots: &BTreeMap<String, String>) -> Result<(), AdapterError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, serde_json::to_string_pretty(slots)?)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, AdapterError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AdapterError> {
        let mut slots = self.read_all()?;
        slots.insert(key.to_owned(), value.to_owned());
        self.write_all(&slots)
    }

    fn remove(&mut self, key: &str) -> Result<(), AdapterError> {
        let mut slots = self.read_all()?;
        if slots.remove(key).is_some() {
            self.write_all(&slots)?;
        }
        Ok(())
    }
}

/// Most-recent-first search history persisted in a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct RecentSearches<S> {
    store: S,
    entries: Vec<String>,
    limit: usize,
}

impl<S: KeyValueStore> RecentSearches<S> {
    /// Loads the history from `store`.
    ///
    /// Repeated entries keep their first (newest) position. A stored value that is not a JSON
    /// array of strings is logged and treated as empty. Store failures are returned.
    pub fn load(store: S) -> Result<Self, AdapterError> {
        let entries = match store.get(RECENT_SEARCHES_KEY)? {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(mut entries) => {
                    let mut seen = HashSet::new();
                    entries.retain(|e| seen.insert(e.clone()));
                    entries.truncate(RECENT_SEARCH_LIMIT);
                    entries
                }
                Err(_err) => {
                    awarn!(error = %_err, "RecentSearches: ignoring corrupt history");
                    Vec::new()
                }
            },
        };
        adebug!(entries = entries.len(), "RecentSearches::load");
        Ok(Self {
            store,
            entries,
            limit: RECENT_SEARCH_LIMIT,
        })
    }

    /// Newest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Puts `query` (trimmed) at the front, dropping an older copy and anything past the limit.
    ///
    /// Returns `false` for blank queries, which are not recorded.
    pub fn record(&mut self, query: &str) -> Result<bool, AdapterError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(false);
        }
        let mut next = Vec::with_capacity(self.limit);
        next.push(query.to_owned());
        next.extend(self.entries.iter().filter(|e| e.as_str() != query).cloned());
        next.truncate(self.limit);
        self.persist(next)?;
        Ok(true)
    }

    pub fn remove(&mut self, query: &str) -> Result<bool, AdapterError> {
        if !self.entries.iter().any(|e| e == query) {
            return Ok(false);
        }
        let next = self.entries.iter().filter(|e| *e != query).cloned().collect();
        self.persist(next)?;
        Ok(true)
    }

    pub fn clear(&mut self) -> Result<(), AdapterError> {
        self.store.remove(RECENT_SEARCHES_KEY)?;
        self.entries.clear();
        Ok(())
    }

    fn persist(&mut self, entries: Vec<String>) -> Result<(), AdapterError> {
        self.store
            .set(RECENT_SEARCHES_KEY, &serde_json::to_string(&entries)?)?;
        self.entries = entries;
        Ok(())
    }
}
