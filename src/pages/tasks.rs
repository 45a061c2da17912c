//! Tasks Page
//!
//! Loads the task list once on mount and keeps a local mirror of it.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use reactive_stores::Store;

use crate::app::LOGIN_ROUTE;
use crate::components::{NewTaskForm, ProgressPanel, SessionBadge, TaskRow};
use crate::context::use_app_context;
use crate::store::{TaskBoard, TaskBoardStoreFields};
use crate::sync::{TaskActions, ViewGuard};

#[component]
pub fn TasksPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let board = Store::new(TaskBoard::default());
    let guard = ViewGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.deactivate()
    });

    let session = ctx.sessions.get_session();
    let actions = TaskActions::new(ctx.api(), ctx.sessions.clone(), board, guard);
    actions.load();

    let sessions = ctx.sessions.clone();
    let logout = move |_| {
        sessions.clear_session();
        log::info!("Logged out");
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    };

    let has_tasks = move || !board.tasks().read().is_empty();
    let loading = move || board.read().is_loading();

    view! {
        <div class="tasks-page">
            <header class="tasks-header">
                <div class="tasks-title">
                    <span class="tasks-icon">"📝"</span>
                    <div>
                        <h1>"My Tasks"</h1>
                        <p>"Stay organized and productive"</p>
                    </div>
                </div>
                <div class="tasks-header-actions">
                    {session.map(|session| view! { <SessionBadge session=session /> })}
                    <button class="btn danger" on:click=logout>"Logout"</button>
                </div>
            </header>

            <Show when=has_tasks>
                <ProgressPanel progress=Signal::derive(move || board.read().progress()) />
            </Show>

            {move || board.error().get().map(|message| view! {
                <div class="error-banner">"Error: " {message}</div>
            })}

            <NewTaskForm actions=actions.clone() />

            <Show when=loading>
                <div class="loading-state">
                    <div class="spinner">"⏳"</div>
                    <p>"Loading your tasks..."</p>
                </div>
            </Show>

            <Show when=move || !loading() && !has_tasks()>
                <div class="empty-state">
                    <div class="empty-icon">"📭"</div>
                    <h2>"No tasks yet"</h2>
                    <p>"Create your first task to get started!"</p>
                </div>
            </Show>

            <Show when=move || !loading() && has_tasks()>
                <div class="task-list">
                    <For
                        each=move || board.tasks().get()
                        key=|task| task.id.clone()
                        children={
                            let actions = actions.clone();
                            move |task| view! { <TaskRow task=task actions=actions.clone() /> }
                        }
                    />
                </div>
                <p class="encouragement">"🎉 Keep going! You're doing great."</p>
            </Show>
        </div>
    }
}
