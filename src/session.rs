//! The locale currently being translated into, kept across runs.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result, anyhow};

use crate::model::Locale;
use crate::store::LocalStore;

/// Entry under which the target selection is stored.
pub const TARGET_ENTRY: &str = "target";

/// Durable string storage, one value per key.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Stores entries in the admin home's `state.json`.
#[derive(Clone, Debug)]
pub struct FileStore {
    store: LocalStore,
}

impl FileStore {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.store.read_state()?.entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut st = self.store.read_state()?;
        st.entries.insert(key.to_string(), value.to_string());
        self.store.write_state(&st)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut st = self.store.read_state()?;
        if st.entries.remove(key).is_some() {
            self.store.write_state(&st)?;
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| anyhow!("memory store lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| anyhow!("memory store lock poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| anyhow!("memory store lock poisoned"))?;
        entries.remove(key);
        Ok(())
    }
}

/// In-memory copy of the target selection, written through on every change.
#[derive(Clone)]
pub struct SessionState {
    store: Arc<dyn KeyValueStore>,
    target: Option<Locale>,
}

impl SessionState {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            target: None,
        }
    }

    /// Reads the stored selection. Anything that does not decode as a locale
    /// (an old empty string, `null`, a hand-edited value) means no target.
    pub fn load(&mut self) -> Result<Option<&Locale>> {
        let raw = self.store.get(TARGET_ENTRY)?;
        self.target = raw
            .as_deref()
            .and_then(|s| serde_json::from_str::<Option<Locale>>(s).ok())
            .flatten()
            .filter(|l| !l.code.is_empty());
        Ok(self.target.as_ref())
    }

    pub fn target(&self) -> Option<&Locale> {
        self.target.as_ref()
    }

    pub fn set_target(&mut self, target: Option<Locale>) -> Result<()> {
        let encoded = serde_json::to_string(&target).context("serialize target locale")?;
        self.store.set(TARGET_ENTRY, &encoded)?;
        tracing::debug!(locale = ?target.as_ref().map(|l| &l.code), "target locale changed");
        self.target = target;
        Ok(())
    }

    pub fn clear_target(&mut self) -> Result<()> {
        self.set_target(None)
    }
}

impl std::fmt::Debug for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionState")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
