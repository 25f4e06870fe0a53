//! List Controller
//!
//! Owns the ordered item sequence and re-persists it through the storage
//! port after every mutation. Insertion order is display order and
//! persistence order; nothing here ever sorts.

use crate::item::{Item, ItemId, Priority};
use crate::storage::Storage;

/// The to-do list: item sequence plus its persistence port.
#[derive(Clone)]
pub struct TodoList<S: Storage> {
    items: Vec<Item>,
    next_id: ItemId,
    storage: S,
}

impl<S: Storage> TodoList<S> {
    /// Empty list, nothing read from the store.
    pub fn new(storage: S) -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            storage,
        }
    }

    /// Load the persisted sequence, or start empty when nothing is stored.
    ///
    /// Stored items carry no ids; fresh ones are assigned in sequence
    /// order. Unreadable storage or malformed JSON is an error, left to
    /// the caller to log and recover from.
    pub fn load(storage: S) -> Result<Self, String> {
        let mut list = Self::new(storage);
        if let Some(data) = list.storage.load()? {
            list.items = serde_json::from_str(&data).map_err(|e| e.to_string())?;
            for item in &mut list.items {
                item.id = list.next_id;
                list.next_id += 1;
            }
        }
        Ok(list)
    }

    /// Items in display order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Append a new item and persist. Blank text is accepted as-is; the
    /// form does not pre-validate it either.
    pub fn add(&mut self, text: impl Into<String>, priority: Option<Priority>) -> &Item {
        let item = Item {
            id: self.next_id,
            done: false,
            text: text.into(),
            priority,
        };
        self.next_id += 1;
        self.items.push(item);
        self.persist();
        self.items.last().expect("just pushed")
    }

    /// Flip an item's done flag and persist, returning the new flag.
    /// Unknown ids leave the list and the store untouched.
    pub fn toggle(&mut self, id: ItemId) -> Option<bool> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.done = !item.done;
        let done = item.done;
        self.persist();
        Some(done)
    }

    /// Remove an item by id and persist. A strict membership check:
    /// unknown ids are a no-op returning false.
    pub fn remove(&mut self, id: ItemId) -> bool {
        match self.items.iter().position(|item| item.id == id) {
            Some(pos) => {
                self.items.remove(pos);
                self.persist();
                true
            }
            None => false,
        }
    }

    /// Serialize the whole sequence and overwrite the stored value.
    pub fn save(&self) -> Result<(), String> {
        let data = serde_json::to_string(&self.items).map_err(|e| e.to_string())?;
        self.storage.save(&data)
    }

    // Mutations never fail on a bad store; the in-memory state stands.
    fn persist(&self) {
        if let Err(err) = self.save() {
            log::warn!("failed to persist todo list: {}", err);
        }
    }
}
