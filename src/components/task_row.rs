//! Task Row Component
//!
//! Individual task in the list.

use leptos::html;
use leptos::prelude::*;

use crate::models::Task;
use crate::sync::TaskActions;

/// A single task row with checkbox and delete button.
///
/// The checkbox is controlled: it shows the flag the server last confirmed,
/// so a click only changes it once the update succeeds.
#[component]
pub fn TaskRow(task: Task, actions: TaskActions) -> impl IntoView {
    let completed = actions.completed(task.id.clone());
    let checkbox = NodeRef::<html::Input>::new();
    let toggle_id = task.id.clone();
    let delete_id = task.id.clone();
    let toggle_actions = actions.clone();

    let on_toggle = move |_| {
        let confirmed = completed.get_untracked();
        // Undo the browser's own flip until the server answers
        if let Some(input) = checkbox.get_untracked() {
            input.set_checked(confirmed);
        }
        toggle_actions.toggle(toggle_id.clone(), confirmed);
    };

    view! {
        <div class=move || if completed.get() { "task-row completed" } else { "task-row" }>
            // Checkbox
            <input
                type="checkbox"
                node_ref=checkbox
                prop:checked=move || completed.get()
                on:change=on_toggle
            />

            // Title
            <span class="task-title">{task.title}</span>
            {move || completed.get().then(|| view! { <span class="task-done">"✅"</span> })}

            // Delete button
            <button class="delete-btn" on:click=move |_| actions.remove(delete_id.clone())>"🗑️"</button>
        </div>
    }
}
