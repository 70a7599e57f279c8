use crate::dom;
use kkomantle_game::{KeyValueStore, StorageError};

/// `localStorage`-backed store. Stateless: each call looks the handle up again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WebStore;

fn backend(err: impl std::fmt::Display) -> StorageError {
    StorageError::Backend(err.to_string())
}

impl KeyValueStore for WebStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = dom::local_storage().map_err(backend)?;
        #[cfg(target_arch = "wasm32")]
        {
            storage
                .get_item(key)
                .map_err(|e| backend(dom::js_error_message(&e)))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (storage, key);
            Ok(None)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().map_err(backend)?;
        #[cfg(target_arch = "wasm32")]
        {
            storage
                .set_item(key, value)
                .map_err(|e| backend(dom::js_error_message(&e)))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (storage, key, value);
            Ok(())
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().map_err(backend)?;
        #[cfg(target_arch = "wasm32")]
        {
            storage
                .remove_item(key)
                .map_err(|e| backend(dom::js_error_message(&e)))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (storage, key);
            Ok(())
        }
    }
}
