//! Frontend Models
//!
//! Data structures matching the task API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned task identifier.
///
/// The API may send ids as JSON strings or integers; both are held as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "WireId")]
pub struct TaskId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Text(String),
    Number(i64),
}

impl From<WireId> for TaskId {
    fn from(id: WireId) -> Self {
        match id {
            WireId::Text(text) => TaskId(text),
            WireId::Number(n) => TaskId(n.to_string()),
        }
    }
}

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        TaskId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Body of `POST /api/tasks`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTask {
    pub title: String,
}

impl NewTask {
    /// Blank titles are rejected before any request is made.
    /// The title is sent as typed.
    pub fn parse(title: &str) -> Option<Self> {
        if title.trim().is_empty() {
            None
        } else {
            Some(Self { title: title.to_string() })
        }
    }
}

/// Body of `PUT /api/tasks/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaskUpdate {
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub id: String,
}

/// Authenticated identity plus bearer token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl Session {
    /// Build a session from a successful auth response.
    ///
    /// Uses the identity the backend returned; falls back to the submitted
    /// email for both fields when the response carries none.
    pub fn from_auth(response: AuthResponse, submitted_email: &str) -> Self {
        let user = response.user.unwrap_or_else(|| User {
            email: submitted_email.to_string(),
            id: submitted_email.to_string(),
        });
        Self { token: response.token, user }
    }

    /// Name shown in the task page header
    pub fn display_name(&self) -> &str {
        if self.user.email.is_empty() {
            "User"
        } else {
            &self.user.email
        }
    }
}

/// Body of the sign-in / sign-up requests
#[derive(Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Success body of the auth endpoints
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
}

/// Error body returned by the API (`{"detail": ...}`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Detail text when the server sent a non-empty string
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            Some(serde_json::Value::String(text)) if !text.is_empty() => Some(text.clone()),
            _ => None,
        }
    }
}
