//! Browser Local Storage Port
//!
//! `todo_core::Storage` implemented over `window.localStorage`.

use todo_core::{Storage, STORAGE_KEY};

/// Local-storage backend for the list. Zero-sized; the browser owns the
/// actual state.
#[derive(Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn backend(&self) -> Result<web_sys::Storage, String> {
        let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
        window
            .local_storage()
            .map_err(|e| format!("local storage unavailable: {:?}", e))?
            .ok_or_else(|| "local storage disabled".to_string())
    }
}

impl Storage for LocalStorage {
    fn load(&self) -> Result<Option<String>, String> {
        self.backend()?
            .get_item(STORAGE_KEY)
            .map_err(|e| format!("failed to read {}: {:?}", STORAGE_KEY, e))
    }

    fn save(&self, data: &str) -> Result<(), String> {
        self.backend()?
            .set_item(STORAGE_KEY, data)
            .map_err(|e| format!("failed to write {}: {:?}", STORAGE_KEY, e))
    }
}
