//! Task Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The reconcile
//! methods are plain `&mut self` code so they can be tested without a
//! reactive runtime.

use reactive_stores::Store;

use crate::api::ApiError;
use crate::models::{Task, TaskId};

/// Load phase of the task view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Loading,
    Ready,
    /// The API answered 401
    LoginRequired,
    Failed,
}

/// Local mirror of the server task list with field-level reactivity
#[derive(Debug, Clone, Default, Store)]
pub struct TaskBoard {
    pub phase: Phase,
    /// Server order, new tasks appended
    pub tasks: Vec<Task>,
    /// Message shown in the error banner
    pub error: Option<String>,
}

impl TaskBoard {
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Replace the whole list with a fetch result
    pub fn finish_load(&mut self, result: Result<Vec<Task>, ApiError>) {
        match result {
            Ok(tasks) => {
                self.tasks = tasks;
                self.phase = Phase::Ready;
            }
            Err(e) => {
                self.phase = if e.is_login_required() {
                    Phase::LoginRequired
                } else {
                    Phase::Failed
                };
                self.error = Some(e.to_string());
            }
        }
    }

    /// Append the server-returned task. Returns whether it succeeded.
    pub fn finish_add(&mut self, result: Result<Task, ApiError>) -> bool {
        match result {
            Ok(task) => {
                self.tasks.push(task);
                true
            }
            Err(e) => {
                self.error = Some(e.to_string());
                false
            }
        }
    }

    /// Set `completed` on the toggled task after the server accepted it
    pub fn finish_toggle(&mut self, id: &TaskId, result: Result<bool, ApiError>) {
        match result {
            Ok(completed) => {
                if let Some(task) = self.tasks.iter_mut().find(|t| &t.id == id) {
                    task.completed = completed;
                }
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Drop the deleted task, keeping the order of the rest
    pub fn finish_remove(&mut self, id: &TaskId, result: Result<(), ApiError>) {
        match result {
            Ok(()) => self.tasks.retain(|t| &t.id != id),
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Completion flag as the server last confirmed it (false if absent)
    pub fn is_completed(&self, id: &TaskId) -> bool {
        self.tasks.iter().any(|t| &t.id == id && t.completed)
    }

    pub fn progress(&self) -> Progress {
        Progress {
            done: self.tasks.iter().filter(|t| t.completed).count(),
            total: self.tasks.len(),
        }
    }
}

/// Type alias for the store
pub type BoardStore = Store<TaskBoard>;

/// Completed vs total tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub done: usize,
    pub total: usize,
}

impl Progress {
    /// Exact completion percentage (0 for an empty list)
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.done as f64 / self.total as f64 * 100.0
        }
    }

    pub fn rounded_percent(&self) -> u32 {
        self.percent().round() as u32
    }
}
