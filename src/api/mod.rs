//! Task API Client
//!
//! One method per backend endpoint. On wasm32 reqwest goes through `fetch`.

mod error;
#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;

pub use error::{Action, ApiError, GENERIC_MESSAGE, LOGIN_PROMPT};

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::models::{AuthResponse, Credentials, ErrorBody, NewTask, Task, TaskId, TaskUpdate};

pub const SIGN_IN_PATH: &str = "/api/auth/sign-in";
pub const SIGN_UP_PATH: &str = "/api/auth/sign-up";
pub const TASKS_PATH: &str = "/api/tasks";

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn task_url(&self, id: &TaskId) -> String {
        let segment = utf8_percent_encode(id.as_str(), NON_ALPHANUMERIC);
        format!("{}{}/{}", self.base_url, TASKS_PATH, segment)
    }

    // ========================
    // Auth
    // ========================

    pub async fn sign_in(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        self.authenticate(SIGN_IN_PATH, credentials).await
    }

    pub async fn sign_up(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        self.authenticate(SIGN_UP_PATH, credentials).await
    }

    /// POST credentials to an auth endpoint
    pub async fn authenticate(
        &self,
        path: &str,
        credentials: &Credentials,
    ) -> Result<AuthResponse, ApiError> {
        let request = self.http.post(self.url(path)).json(credentials);
        let response = send(request, Action::Authenticate).await?;

        let status = response.status();
        if !status.is_success() {
            let body: ErrorBody = response.json().await.unwrap_or_default();
            log::warn!("Auth request to {} rejected with {}", path, status);
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                detail: body.message(),
            });
        }
        decode(response).await
    }

    // ========================
    // Tasks
    // ========================

    /// GET the full collection. A non-array payload yields an empty list.
    pub async fn list_tasks(&self, token: Option<&str>) -> Result<Vec<Task>, ApiError> {
        let request = authorize(self.http.get(self.url(TASKS_PATH)), token);
        let response = send(request, Action::FetchTasks).await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        let response = ensure_success(response, Action::FetchTasks)?;

        let payload: serde_json::Value = decode(response).await?;
        if !payload.is_array() {
            log::warn!("Task list payload is not an array, treating as empty");
            return Ok(Vec::new());
        }
        serde_json::from_value(payload).map_err(|e| ApiError::Decode { reason: e.to_string() })
    }

    pub async fn create_task(&self, token: Option<&str>, task: &NewTask) -> Result<Task, ApiError> {
        let request = authorize(self.http.post(self.url(TASKS_PATH)), token).json(task);
        let response = send(request, Action::CreateTask).await?;
        let response = ensure_success(response, Action::CreateTask)?;
        decode(response).await
    }

    /// PUT the completion flag. The response body (task or empty) is ignored.
    pub async fn update_task(
        &self,
        token: Option<&str>,
        id: &TaskId,
        update: TaskUpdate,
    ) -> Result<(), ApiError> {
        let request = authorize(self.http.put(self.task_url(id)), token).json(&update);
        let response = send(request, Action::UpdateTask).await?;
        ensure_success(response, Action::UpdateTask)?;
        Ok(())
    }

    pub async fn delete_task(&self, token: Option<&str>, id: &TaskId) -> Result<(), ApiError> {
        let request = authorize(self.http.delete(self.task_url(id)), token);
        let response = send(request, Action::DeleteTask).await?;
        ensure_success(response, Action::DeleteTask)?;
        Ok(())
    }
}

// ========================
// Helpers
// ========================

fn authorize(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => request.bearer_auth(token),
        None => request,
    }
}

async fn send(request: RequestBuilder, action: Action) -> Result<Response, ApiError> {
    request.send().await.map_err(|e| {
        log::error!("{:?} request failed: {}", action, e);
        ApiError::Transport { action, reason: e.to_string() }
    })
}

fn ensure_success(response: Response, action: Action) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        log::warn!("{:?} returned {}", action, status);
        Err(ApiError::Status { action, status: status.as_u16() })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response.json().await.map_err(|e| {
        log::error!("Unexpected response body: {}", e);
        ApiError::Decode { reason: e.to_string() }
    })
}
