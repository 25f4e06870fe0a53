//! Task Row Component
//!
//! One table row per item: checkbox, text, priority label, delete.

use leptos::prelude::*;

use todo_core::{Item, Priority};

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;

/// Priority cell content, `[Low]`/`[Medium]`/`[High]` or empty when unset.
fn priority_label(priority: Option<Priority>) -> String {
    match priority {
        Some(p) => format!("[{}]", p.label()),
        None => String::new(),
    }
}

/// A single task row. Text and priority are fixed for the item's
/// lifetime; only the done flag is read reactively, so toggling patches
/// this row without rebuilding the table.
#[component]
pub fn TodoRow(item: Item) -> impl IntoView {
    let ctx = use_app_context();
    let id = item.id;
    let done = move || ctx.is_done(id);

    view! {
        <tr class:done=done>
            <td class="check-cell">
                <input
                    type="checkbox"
                    prop:checked=done
                    on:change=move |_| ctx.toggle(id)
                />
            </td>
            <td class="text-cell">{item.text.clone()}</td>
            <td class="priority-cell">{priority_label(item.priority)}</td>
            <td class="actions-cell">
                <DeleteConfirmButton
                    button_class="delete-btn"
                    on_confirm=Callback::new(move |_| ctx.remove(id))
                />
            </td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_label() {
        assert_eq!(priority_label(Some(Priority::Low)), "[Low]");
        assert_eq!(priority_label(Some(Priority::Medium)), "[Medium]");
        assert_eq!(priority_label(Some(Priority::High)), "[High]");
        assert_eq!(priority_label(None), "");
    }
}
