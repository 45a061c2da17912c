//! New Task Form Component
//!
//! Form for creating new tasks.

use leptos::prelude::*;

use crate::sync::TaskActions;

/// Form for creating a task; the input clears once the server accepts it
#[component]
pub fn NewTaskForm(actions: TaskActions) -> impl IntoView {
    let (new_title, set_new_title) = signal(String::new());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get_untracked();
        actions.add(&title, move || set_new_title.set(String::new()));
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <input
                type="text"
                placeholder="Add a new task..."
                prop:value=move || new_title.get()
                on:input=move |ev| set_new_title.set(event_target_value(&ev))
            />
            <button type="submit" class="btn success">"Add"</button>
        </form>
    }
}
