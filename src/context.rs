//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::session::SessionContext;

/// App-wide dependencies provided via context
#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    /// The only state shared between pages
    pub sessions: SessionContext,
}

impl AppContext {
    pub fn new(config: AppConfig, sessions: SessionContext) -> Self {
        Self { config, sessions }
    }

    /// Client for the configured API
    pub fn api(&self) -> ApiClient {
        ApiClient::new(self.config.api_base_url.clone())
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
