//! Bookmark Store
//!
//! Per-browser set of bookmarked item IDs, persisted as a JSON number
//! array under a single key. The whole set is rewritten on every toggle.
//! Nothing here coordinates between tabs: the last writer wins.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};

use crate::error::{StorageError, StorageResult};
use crate::item::ItemId;

/// Key the bookmark list lives under
pub const BOOKMARKS_KEY: &str = "bookmarkedItems";

pub type BookmarkSet = BTreeSet<ItemId>;

/// Minimal string key-value backend
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::rc::Rc<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}

/// In-memory backend, used in tests and when browser storage is missing
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Decode a persisted bookmark list; malformed input is an error here
pub fn decode(raw: &str) -> Result<BookmarkSet, serde_json::Error> {
    let ids: Vec<ItemId> = serde_json::from_str(raw)?;
    Ok(ids.into_iter().collect())
}

pub fn encode(ids: &BookmarkSet) -> String {
    let list: Vec<ItemId> = ids.iter().copied().collect();
    // a Vec<u32> always serializes
    serde_json::to_string(&list).unwrap_or_else(|_| "[]".to_string())
}

/// Bookmark set plus the backend it is mirrored to
pub struct BookmarkStore<S: KeyValueStore> {
    storage: S,
    ids: BookmarkSet,
}

impl<S: KeyValueStore> BookmarkStore<S> {
    /// Read the persisted set; missing or unreadable data yields an empty set
    pub fn load(storage: S) -> Self {
        let ids = match storage.get(BOOKMARKS_KEY) {
            Ok(Some(raw)) => decode(&raw).unwrap_or_else(|e| {
                log::warn!("[Bookmarks] Ignoring malformed bookmark data: {}", e);
                BookmarkSet::new()
            }),
            Ok(None) => BookmarkSet::new(),
            Err(e) => {
                log::warn!("[Bookmarks] Could not read bookmarks: {}", e);
                BookmarkSet::new()
            }
        };
        log::debug!("[Bookmarks] Loaded {} bookmarks", ids.len());
        Self { storage, ids }
    }

    pub fn ids(&self) -> &BookmarkSet {
        &self.ids
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.ids.contains(&id)
    }

    /// Flip `id` and persist the whole set before handing it back
    pub fn toggle(&mut self, id: ItemId) -> &BookmarkSet {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
        if let Err(e) = self.persist() {
            log::warn!("[Bookmarks] Bookmark {} toggled in memory only: {}", id, e);
        }
        &self.ids
    }

    fn persist(&self) -> StorageResult<()> {
        self.storage.set(BOOKMARKS_KEY, &encode(&self.ids))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::Unavailable("no window".into()))
        }

        fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Write("quota exceeded".into()))
        }
    }

    #[test]
    fn test_load_missing_key_is_empty() {
        let store = BookmarkStore::load(MemoryStore::new());
        assert!(store.ids().is_empty());
    }

    #[test]
    fn test_load_malformed_is_empty() {
        for raw in ["not json", "{\"a\":1}", "[1, \"two\"]", "", "[-1]"] {
            let store = BookmarkStore::load(MemoryStore::with_entry(BOOKMARKS_KEY, raw));
            assert!(store.ids().is_empty(), "raw {raw:?}");
        }
    }

    #[test]
    fn test_load_existing_list() {
        let store = BookmarkStore::load(MemoryStore::with_entry(BOOKMARKS_KEY, "[3,1,3]"));
        assert_eq!(store.ids().iter().copied().collect::<Vec<_>>(), vec![1, 3]);
        assert!(store.contains(3));
        assert!(!store.contains(2));
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut store = BookmarkStore::load(MemoryStore::with_entry(BOOKMARKS_KEY, "[5]"));
        let before = store.ids().clone();
        store.toggle(9);
        assert!(store.contains(9));
        store.toggle(9);
        assert_eq!(store.ids(), &before);
    }

    #[test]
    fn test_toggle_persists_before_returning() {
        let backend = Rc::new(MemoryStore::new());
        let mut store = BookmarkStore::load(backend.clone());
        store.toggle(4);
        assert_eq!(backend.get(BOOKMARKS_KEY).unwrap().as_deref(), Some("[4]"));
        store.toggle(2);
        assert_eq!(backend.get(BOOKMARKS_KEY).unwrap().as_deref(), Some("[2,4]"));
        store.toggle(4);
        assert_eq!(backend.get(BOOKMARKS_KEY).unwrap().as_deref(), Some("[2]"));
    }

    #[test]
    fn test_reload_sees_toggled_id() {
        let backend = Rc::new(MemoryStore::new());
        {
            let mut store = BookmarkStore::load(backend.clone());
            store.toggle(11);
        }
        let reloaded = BookmarkStore::load(backend);
        assert!(reloaded.contains(11));
    }

    #[test]
    fn test_broken_backend_degrades() {
        let mut store = BookmarkStore::load(BrokenStore);
        assert!(store.ids().is_empty());
        let ids = store.toggle(1);
        assert!(ids.contains(&1));
    }

    #[test]
    fn test_encode_decode() {
        let ids: BookmarkSet = [7, 2].into_iter().collect();
        assert_eq!(encode(&ids), "[2,7]");
        assert_eq!(decode("[]").unwrap(), BookmarkSet::new());
    }
}
