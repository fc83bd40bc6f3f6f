//! `localStorage`-backed preference storage
use portfolio_core::PreferenceStorage;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("localStorage unavailable")]
    Unavailable,
    #[error("storage error: {0}")]
    Js(String),
}

/// Browser storage for the preference store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WebPreferenceStorage;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    crate::dom::window()
        .ok_or(StorageError::Unavailable)?
        .local_storage()
        .map_err(|e| StorageError::Js(crate::dom::js_error_message(&e)))?
        .ok_or(StorageError::Unavailable)
}

// Server-side renders and native tests have no browser storage.
#[cfg(not(target_arch = "wasm32"))]
const fn local_storage() -> Result<web_sys::Storage, StorageError> {
    Err(StorageError::Unavailable)
}

impl PreferenceStorage for WebPreferenceStorage {
    type Error = StorageError;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Js(crate::dom::js_error_message(&e)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Js(crate::dom::js_error_message(&e)))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_targets_report_unavailable() {
        let storage = WebPreferenceStorage;
        assert!(matches!(
            storage.read("season"),
            Err(StorageError::Unavailable)
        ));
        assert!(storage.write("season", "winter").is_err());
    }
}
