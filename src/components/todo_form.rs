//! New Task Form Component
//!
//! Text input plus submit button. Input starting with `#1 `/`#2 `/`#3 `
//! tags the task with that priority; everything else defaults to Low.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;

/// Form for adding tasks. The raw value goes to the controller
/// unvalidated; blank submissions become blank items, as they always did.
#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_app_context();

    let (text, set_text) = signal(String::new());
    let input_ref = NodeRef::<html::Input>::new();

    // Cursor starts in the text field.
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit(&text.get());
        set_text.set(String::new());
    };

    view! {
        <form class="todo-form" on:submit=add_task>
            <input
                type="text"
                node_ref=input_ref
                placeholder="Add a task (#1/#2/#3 sets priority)..."
                prop:value=move || text.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_text.set(input.value());
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
