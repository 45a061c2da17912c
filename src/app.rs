//! Tasks Frontend App
//!
//! Routes and context provisioning.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::context::AppContext;
use crate::pages::{LandingPage, LoginPage, NotFound, TasksPage};

/// Route of the task list
pub const TASKS_ROUTE: &str = "/todos";
pub const LOGIN_ROUTE: &str = "/login";

#[component]
pub fn App(ctx: AppContext) -> impl IntoView {
    // Provide context to all pages
    provide_context(ctx);

    view! {
        <Router>
            <main class="app-shell">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=LandingPage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/todos") view=TasksPage />
                </Routes>
            </main>
        </Router>
    }
}
