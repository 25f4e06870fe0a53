//! Persistence Port
//!
//! Key-value storage seam between the list and its host. The UI crate
//! implements this over browser local storage; tests use the in-memory
//! variant.

use std::cell::RefCell;
use std::rc::Rc;

/// Fixed key under which the serialized list is stored.
pub const STORAGE_KEY: &str = "todolist";

/// Host-provided key-value store for the serialized list.
pub trait Storage {
    /// Read the stored value, `Ok(None)` when nothing was ever saved.
    fn load(&self) -> Result<Option<String>, String>;
    /// Overwrite the stored value.
    fn save(&self, data: &str) -> Result<(), String>;
}

/// In-memory store for tests and headless use.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    value: Rc<RefCell<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the stored value, as if a previous session had saved it.
    pub fn with_value(value: &str) -> Self {
        Self {
            value: Rc::new(RefCell::new(Some(value.to_string()))),
        }
    }

    /// Current stored value, for assertions.
    pub fn stored(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Option<String>, String> {
        Ok(self.value.borrow().clone())
    }

    fn save(&self, data: &str) -> Result<(), String> {
        *self.value.borrow_mut() = Some(data.to_string());
        Ok(())
    }
}
