use doug_core::{KeyValueStore, MemoryStore};
use web_sys as web;

/// Preference storage for the page: `localStorage` when the browser allows
/// it, otherwise an in-memory map that lasts for the session.
pub enum PageStore {
    Local(web::Storage),
    Memory(MemoryStore),
}

impl PageStore {
    pub fn open() -> Self {
        match web::window().map(|w| w.local_storage()) {
            Some(Ok(Some(storage))) => Self::Local(storage),
            Some(Err(e)) => {
                log::warn!("[storage] localStorage unavailable: {:?}", e);
                Self::Memory(MemoryStore::new())
            }
            _ => {
                log::warn!("[storage] localStorage unavailable; preferences last for this page only");
                Self::Memory(MemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for PageStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            Self::Local(storage) => storage.get_item(key).ok().flatten(),
            Self::Memory(map) => map.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        match self {
            Self::Local(storage) => {
                if let Err(e) = storage.set_item(key, value) {
                    log::warn!("[storage] failed to save {}={}: {:?}", key, value, e);
                }
            }
            Self::Memory(map) => map.set(key, value),
        }
    }
}
