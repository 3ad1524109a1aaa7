use contracts::projections::p001_pizza_prices::{KeyValueStore, PricingError};
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// `window.localStorage` behind [`KeyValueStore`].
///
/// When the browser gives no storage (private mode, sandboxed iframe) reads
/// come back empty and writes fail.
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let storage = get_local_storage();
        if storage.is_none() {
            log::warn!("localStorage is not available");
        }
        Self { storage }
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok()?
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PricingError> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| PricingError::Storage("localStorage is not available".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| PricingError::Storage(format!("{:?}", e)))
    }
}
