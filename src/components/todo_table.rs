//! Task Table Component
//!
//! The table body is rebuilt from the item sequence, keyed by id, so the
//! row count always matches the list length.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::use_app_context;

#[component]
pub fn TodoTable() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <table class="todo-table">
            <tbody>
                <For
                    each=move || ctx.items()
                    key=|item| item.id
                    let:item
                >
                    <TodoRow item=item />
                </For>
            </tbody>
        </table>
    }
}
