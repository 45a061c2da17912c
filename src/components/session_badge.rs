use leptos::prelude::*;

use crate::models::Session;

/// Signed-in user shown in the task page header
#[component]
pub fn SessionBadge(session: Session) -> impl IntoView {
    view! {
        <div class="session-badge">
            <p class="session-email">{session.display_name().to_string()}</p>
            <p class="session-status">"Logged in"</p>
        </div>
    }
}
