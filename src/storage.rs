//! Browser Storage
//!
//! localStorage adapter for the bookmark store, plus the session token
//! handed over by the auth provider.

use std::rc::Rc;

use voto_listing::{KeyValueStore, MemoryStore, StorageError, StorageResult};

use crate::config::SESSION_TOKEN_KEY;

/// `window.localStorage` behind the `KeyValueStore` trait
pub struct LocalStorageBackend {
    storage: web_sys::Storage,
}

impl LocalStorageBackend {
    /// Fails instead of panicking when storage is disabled or missing
    pub fn open() -> StorageResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorageBackend {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// Backend shared by the bookmark store and the session lookup
pub type SharedBackend = Rc<dyn KeyValueStore>;

/// Browser storage if available, otherwise an in-memory stand-in
pub fn open_backend() -> SharedBackend {
    match LocalStorageBackend::open() {
        Ok(backend) => Rc::new(backend),
        Err(e) => {
            log::warn!("[Storage] {}; bookmarks will not survive a reload", e);
            Rc::new(MemoryStore::new())
        }
    }
}

/// Session token, if the user signed in
pub fn session_token(backend: &dyn KeyValueStore) -> Option<String> {
    match backend.get(SESSION_TOKEN_KEY) {
        Ok(token) => token.map(|t| t.trim().to_string()).filter(|t| !t.is_empty()),
        Err(e) => {
            log::warn!("[Storage] Could not read session token: {}", e);
            None
        }
    }
}
