//! Task List Synchronization
//!
//! Every operation reads the session again before its request so a token
//! refreshed elsewhere is picked up. Results are applied to the board only
//! after the server answered; nothing is applied optimistically.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, ApiError};
use crate::models::{NewTask, Task, TaskId, TaskUpdate};
use crate::session::SessionContext;
use crate::store::{BoardStore, TaskBoard};

// ========================
// Operations
// ========================

/// Fetch the full task collection
pub async fn load(api: &ApiClient, sessions: &SessionContext) -> Result<Vec<Task>, ApiError> {
    let token = sessions.token();
    let tasks = api.list_tasks(token.as_deref()).await?;
    log::info!("Loaded {} tasks", tasks.len());
    Ok(tasks)
}

/// Create a task, returning the server's copy
pub async fn add(
    api: &ApiClient,
    sessions: &SessionContext,
    task: &NewTask,
) -> Result<Task, ApiError> {
    let token = sessions.token();
    api.create_task(token.as_deref(), task).await
}

/// Flip `completed` on the server. Returns the new flag.
pub async fn toggle(
    api: &ApiClient,
    sessions: &SessionContext,
    id: &TaskId,
    completed: bool,
) -> Result<bool, ApiError> {
    let token = sessions.token();
    let update = TaskUpdate { completed: !completed };
    api.update_task(token.as_deref(), id, update).await?;
    Ok(update.completed)
}

pub async fn remove(
    api: &ApiClient,
    sessions: &SessionContext,
    id: &TaskId,
) -> Result<(), ApiError> {
    let token = sessions.token();
    api.delete_task(token.as_deref(), id).await
}

// ========================
// View binding
// ========================

/// Tracks whether the view that issued a request is still mounted
#[derive(Debug, Clone)]
pub struct ViewGuard {
    active: Arc<AtomicBool>,
}

impl ViewGuard {
    pub fn new() -> Self {
        Self { active: Arc::new(AtomicBool::new(true)) }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    pub fn deactivate(&self) {
        self.active.store(false, Ordering::Release);
    }

    /// Run `f` only while the view is mounted
    pub fn run<R>(&self, f: impl FnOnce() -> R) -> Option<R> {
        if self.is_active() {
            Some(f())
        } else {
            log::debug!("Task view gone, dropping response");
            None
        }
    }
}

impl Default for ViewGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Task operations bound to one mounted task view.
///
/// Requests are never coalesced: each call issues its own request.
#[derive(Clone)]
pub struct TaskActions {
    api: ApiClient,
    sessions: SessionContext,
    board: BoardStore,
    guard: ViewGuard,
}

impl TaskActions {
    pub fn new(api: ApiClient, sessions: SessionContext, board: BoardStore, guard: ViewGuard) -> Self {
        Self { api, sessions, board, guard }
    }

    /// Apply a change to the board unless the view has been unmounted
    fn apply<R>(&self, change: impl FnOnce(&mut TaskBoard) -> R) -> Option<R> {
        self.guard.run(|| {
            let mut out = None;
            self.board.update(|board| out = Some(change(board)));
            out
        })
        .flatten()
    }

    /// Record an add result; `on_added` runs only if the task was appended
    fn settle_add(&self, result: Result<Task, ApiError>, on_added: impl FnOnce()) {
        if self.apply(|board| board.finish_add(result)) == Some(true) {
            on_added();
        }
    }

    /// Confirmed completion flag of one task, for controlled checkboxes
    pub fn completed(&self, id: TaskId) -> Signal<bool> {
        let board = self.board;
        Signal::derive(move || board.read().is_completed(&id))
    }

    pub fn load(&self) {
        let this = self.clone();
        spawn_local(async move {
            let result = load(&this.api, &this.sessions).await;
            this.apply(|board| board.finish_load(result));
        });
    }

    /// Create a task. `on_added` runs only when the task was appended.
    pub fn add(&self, title: &str, on_added: impl FnOnce() + 'static) {
        let Some(task) = NewTask::parse(title) else {
            return;
        };
        let this = self.clone();
        spawn_local(async move {
            let result = add(&this.api, &this.sessions, &task).await;
            this.settle_add(result, on_added);
        });
    }

    pub fn toggle(&self, id: TaskId, completed: bool) {
        let this = self.clone();
        spawn_local(async move {
            let result = toggle(&this.api, &this.sessions, &id, completed).await;
            this.apply(|board| board.finish_toggle(&id, result));
        });
    }

    pub fn remove(&self, id: TaskId) {
        let this = self.clone();
        spawn_local(async move {
            let result = remove(&this.api, &this.sessions, &id).await;
            this.apply(|board| board.finish_remove(&id, result));
        });
    }
}
