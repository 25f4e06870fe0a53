//! To-Do List Core
//!
//! Pure list state, tag parsing and the persistence port.
//! No WASM or DOM dependencies, so everything here tests on a native host.

mod item;
mod list;
mod parse;
mod storage;

pub use item::{Item, ItemId, Priority};
pub use list::TodoList;
pub use parse::parse_input;
pub use storage::{MemoryStorage, Storage, STORAGE_KEY};
