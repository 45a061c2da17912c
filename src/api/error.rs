//! API Errors
//!
//! Every failure a page can show, with the text it shows.

use std::fmt;

/// Shown for a 401 on the task list
pub const LOGIN_PROMPT: &str = "Please login to see your tasks";
/// Shown when a failure has no better message
pub const GENERIC_MESSAGE: &str = "An error occurred";

/// The user action a request belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Authenticate,
    FetchTasks,
    CreateTask,
    UpdateTask,
    DeleteTask,
}

impl Action {
    pub fn failure_message(&self) -> &'static str {
        match self {
            Action::Authenticate => "Authentication failed",
            Action::FetchTasks => "Failed to fetch tasks",
            Action::CreateTask => "Failed to create task",
            Action::UpdateTask => "Failed to update task",
            Action::DeleteTask => "Failed to delete task",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Auth endpoint refused the credentials
    Rejected { status: u16, detail: Option<String> },
    /// 401 on the task list
    Unauthorized,
    /// Any other non-success status
    Status { action: Action, status: u16 },
    /// Request did not complete
    Transport { action: Action, reason: String },
    /// Response body was not what the API promises
    Decode { reason: String },
}

impl ApiError {
    /// Whether the view should prompt for login instead of a plain failure
    pub fn is_login_required(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Rejected { detail: Some(detail), .. } => f.write_str(detail),
            ApiError::Rejected { detail: None, .. } => {
                f.write_str(Action::Authenticate.failure_message())
            }
            ApiError::Unauthorized => f.write_str(LOGIN_PROMPT),
            ApiError::Status { action, .. } | ApiError::Transport { action, .. } => {
                f.write_str(action.failure_message())
            }
            ApiError::Decode { .. } => f.write_str(GENERIC_MESSAGE),
        }
    }
}

impl std::error::Error for ApiError {}
