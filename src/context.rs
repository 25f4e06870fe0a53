//! Application Context
//!
//! Wraps the list controller in a signal and provides it to all
//! components via the Leptos Context API.

use leptos::prelude::*;

use todo_core::{parse_input, Item, ItemId, TodoList};

use crate::storage::LocalStorage;

/// App-wide handle to the list, provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    list: RwSignal<TodoList<LocalStorage>>,
}

impl AppContext {
    pub fn new(list: TodoList<LocalStorage>) -> Self {
        Self {
            list: RwSignal::new(list),
        }
    }

    /// Snapshot of the items in display order.
    pub fn items(&self) -> Vec<Item> {
        self.list.with(|list| list.items().to_vec())
    }

    pub fn item_count(&self) -> usize {
        self.list.with(|list| list.len())
    }

    /// Reactive read of one item's done flag, so a toggle only patches
    /// its own row instead of rebuilding the table.
    pub fn is_done(&self, id: ItemId) -> bool {
        self.list
            .with(|list| list.get(id).map(|item| item.done).unwrap_or(false))
    }

    /// Parse raw form input (priority tag convention) and append.
    pub fn submit(&self, raw: &str) {
        let (text, priority) = parse_input(raw);
        self.list.update(|list| {
            list.add(text, Some(priority));
        });
    }

    pub fn toggle(&self, id: ItemId) {
        self.list.update(|list| {
            if list.toggle(id).is_none() {
                web_sys::console::warn_1(&format!("[LIST] toggle: no item {}", id).into());
            }
        });
    }

    pub fn remove(&self, id: ItemId) {
        self.list.update(|list| {
            if !list.remove(id) {
                web_sys::console::warn_1(&format!("[LIST] remove: no item {}", id).into());
            }
        });
    }
}

/// Get the app context, panicking when a component is mounted outside `App`.
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
