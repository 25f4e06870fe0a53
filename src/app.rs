//! To-Do Widget App
//!
//! Root component: loads the persisted list, provides context and lays
//! out the form and table.

use leptos::prelude::*;

use todo_core::TodoList;

use crate::components::{TodoForm, TodoTable};
use crate::context::AppContext;
use crate::storage::LocalStorage;

#[component]
pub fn App() -> impl IntoView {
    // A corrupt or unreadable store is logged and discarded rather than
    // taking the whole widget down.
    let list = match TodoList::load(LocalStorage) {
        Ok(list) => list,
        Err(e) => {
            web_sys::console::warn_1(
                &format!("[APP] discarding stored list: {}", e).into(),
            );
            TodoList::new(LocalStorage)
        }
    };

    let ctx = AppContext::new(list);
    provide_context(ctx);

    view! {
        <div class="todo-widget">
            <h1>"To-Do"</h1>

            <TodoForm />

            <TodoTable />

            <p class="item-count">{move || format!("{} items", ctx.item_count())}</p>
        </div>
    }
}
