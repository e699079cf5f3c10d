use std::collections::HashMap;

/// String key-value storage the sidebar persists its preference in.
///
/// In the browser this is `window.localStorage`; tests use [`MemoryStore`].
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("storage is not available: {0}")]
    Unavailable(String),
    #[error("failed to read '{key}': {message}")]
    Read { key: String, message: String },
    #[error("failed to write '{key}': {message}")]
    Write { key: String, message: String },
}

/// In-memory [`KeyValueStore`] with optional failure injection.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    /// Every read fails, as when storage is disabled by the browser.
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Every write fails, as when the storage quota is exhausted.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn entry(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Read {
                key: key.to_string(),
                message: "reads disabled".to_string(),
            });
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Write {
                key: key.to_string(),
                message: "writes disabled".to_string(),
            });
        }
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// The persisted collapse flag.
///
/// Stored as the raw strings `"true"` / `"false"`. Only `"true"` means
/// collapsed; absence, any other value and read failures mean expanded.
/// Write failures are logged and dropped.
#[derive(Debug)]
pub struct CollapsePreference<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> CollapsePreference<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn load(&self) -> bool {
        match self.store.get(&self.key) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(error) => {
                log::warn!("Sidebar preference unreadable, using expanded layout: {error}");
                false
            }
        }
    }

    pub fn save(&mut self, collapsed: bool) {
        let value = if collapsed { "true" } else { "false" };
        if let Err(error) = self.store.set(&self.key, value) {
            log::warn!("Sidebar preference not saved: {error}");
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
