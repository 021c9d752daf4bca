//! Device key/value storage for cached filter selections.

use common::persisted_filters::{FilterStoreError, KeyValueStore};

/// Browser `localStorage`.
#[cfg(target_arch = "wasm32")]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    fn storage(&self) -> Result<web_sys::Storage, FilterStoreError> {
        let window = web_sys::window().ok_or_else(|| FilterStoreError::Backend("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| FilterStoreError::Backend(format!("{e:?}")))?
            .ok_or_else(|| FilterStoreError::Backend("local storage is disabled".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, FilterStoreError> {
        self.storage()?.get_item(key).map_err(|e| FilterStoreError::Backend(format!("{e:?}")))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), FilterStoreError> {
        self.storage()?.set_item(key, value).map_err(|e| FilterStoreError::Backend(format!("{e:?}")))
    }

    fn remove_item(&self, key: &str) -> Result<(), FilterStoreError> {
        self.storage()?.remove_item(key).map_err(|e| FilterStoreError::Backend(format!("{e:?}")))
    }
}

#[cfg(target_arch = "wasm32")]
static DEVICE_STORE: BrowserStorage = BrowserStorage;

// Native shells keep the cache for the lifetime of the process.
#[cfg(not(target_arch = "wasm32"))]
static DEVICE_STORE: std::sync::LazyLock<common::persisted_filters::MemoryStore> =
    std::sync::LazyLock::new(Default::default);

#[cfg(target_arch = "wasm32")]
pub fn device_store() -> &'static dyn KeyValueStore {
    &DEVICE_STORE
}

#[cfg(not(target_arch = "wasm32"))]
pub fn device_store() -> &'static dyn KeyValueStore {
    &*DEVICE_STORE
}
