//! Key/value persistence for the two session flags
//!
//! `smartAgriLanguage` holds the plain language code and `smartAgriUser`
//! holds the JSON-encoded [`UserRecord`]. Both are written together and
//! cleared together.

use super::{Session, UserRecord};
use crate::i18n::Language;
use crate::{AgriError, Result};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// Key holding the selected language code
pub const LANGUAGE_KEY: &str = "smartAgriLanguage";

/// Key holding the JSON user record
pub const USER_KEY: &str = "smartAgriUser";

/// Minimal string key/value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory store; clones share the same map
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}

/// JSON file-backed store, one flat object of string values
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// File name inside the data directory
    pub const FILE_NAME: &'static str = "session.json";

    /// Open the store in `dir`, reading any existing file
    ///
    /// An unreadable or corrupt file is logged and treated as empty.
    pub fn open(dir: &Path) -> Self {
        let path = dir.join(Self::FILE_NAME);
        let entries = match read_entries(&path) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Ignoring unreadable session store {}: {}", path.display(), e);
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let dir = self
            .path
            .parent()
            .ok_or_else(|| AgriError::StorageError("store path has no parent".to_string()))?;
        fs::create_dir_all(dir)?;

        let tmp_path = self.path.with_extension("json.tmp");
        let bytes = serde_json::to_vec_pretty(&self.entries)?;
        fs::write(&tmp_path, bytes)?;
        if let Err(rename_err) = fs::rename(&tmp_path, &self.path) {
            if self.path.exists() {
                fs::remove_file(&self.path)?;
                fs::rename(&tmp_path, &self.path)?;
            } else {
                return Err(AgriError::StorageError(rename_err.to_string()));
            }
        }
        debug!("Session store written to {}", self.path.display());
        Ok(())
    }
}

fn read_entries(path: &Path) -> Result<BTreeMap<String, String>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let data = fs::read(path)?;
    Ok(serde_json::from_slice(&data)?)
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

/// Typed view over a [`KeyValueStore`] for the session flags
pub struct SessionStore {
    backend: Box<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Session restored from both flags, if both are present and valid
    pub fn restore(&self) -> Option<Session> {
        let code = self.backend.get(LANGUAGE_KEY)?;
        let raw_user = self.backend.get(USER_KEY)?;

        let Some(language) = Language::from_code(&code) else {
            warn!("Persisted language {:?} is not supported", code);
            return None;
        };
        let user: UserRecord = match serde_json::from_str(&raw_user) {
            Ok(user) => user,
            Err(e) => {
                warn!("Persisted user record is malformed: {}", e);
                return None;
            }
        };

        Some(Session {
            language: Some(language),
            user: Some(user),
        })
    }

    pub fn save_language(&mut self, language: Language) -> Result<()> {
        self.backend.set(LANGUAGE_KEY, language.code())
    }

    pub fn save_user(&mut self, user: &UserRecord) -> Result<()> {
        let json = serde_json::to_string(user)?;
        self.backend.set(USER_KEY, &json)
    }

    /// Remove both flags; both removals are attempted even if one fails
    pub fn clear(&mut self) -> Result<()> {
        let language = self.backend.remove(LANGUAGE_KEY);
        let user = self.backend.remove(USER_KEY);
        language.and(user)
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.backend.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));
        store.remove("k").unwrap();
        assert!(store.get("k").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let mut writer = store.clone();
        writer.set(LANGUAGE_KEY, "hi").unwrap();
        assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("hi"));
    }

    #[test]
    fn test_restore_requires_both_flags() {
        let memory = MemoryStore::new();
        let mut store = SessionStore::new(memory.clone());
        assert!(store.restore().is_none());

        store.save_language(Language::Hi).unwrap();
        assert!(store.restore().is_none());

        store
            .save_user(&UserRecord::from_login("farmer@demo.com", "farmer123"))
            .unwrap();
        let session = store.restore().unwrap();
        assert_eq!(session.language, Some(Language::Hi));
        assert_eq!(
            session.user.unwrap().email.as_deref(),
            Some("farmer@demo.com")
        );
    }

    #[test]
    fn test_restore_rejects_malformed_user() {
        let mut memory = MemoryStore::new();
        memory.set(LANGUAGE_KEY, "en").unwrap();
        memory.set(USER_KEY, "{not json").unwrap();
        let store = SessionStore::new(memory);
        assert!(store.restore().is_none());
    }

    #[test]
    fn test_restore_rejects_unknown_language() {
        let mut memory = MemoryStore::new();
        memory.set(LANGUAGE_KEY, "fr").unwrap();
        memory.set(USER_KEY, "{}").unwrap();
        let store = SessionStore::new(memory);
        assert!(store.restore().is_none());
    }

    #[test]
    fn test_clear_removes_both() {
        let memory = MemoryStore::new();
        let mut store = SessionStore::new(memory.clone());
        store.save_language(Language::En).unwrap();
        store.save_user(&UserRecord::default()).unwrap();
        assert_eq!(memory.len(), 2);

        store.clear().unwrap();
        assert!(memory.is_empty());
    }

    #[test]
    fn test_file_store_persists_across_open() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = SessionStore::new(FileStore::open(dir.path()));
            store.save_language(Language::Te).unwrap();
            store
                .save_user(&UserRecord::from_account("A", "a@b.com", ""))
                .unwrap();
        }

        let reopened = SessionStore::new(FileStore::open(dir.path()));
        let session = reopened.restore().unwrap();
        assert_eq!(session.language, Some(Language::Te));
        assert_eq!(session.user.unwrap().name.as_deref(), Some("A"));
    }

    #[test]
    fn test_file_store_ignores_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(FileStore::FILE_NAME), "garbage").unwrap();
        let store = FileStore::open(dir.path());
        assert!(store.get(LANGUAGE_KEY).is_none());
    }
}
