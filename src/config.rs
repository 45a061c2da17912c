//! Build-time Configuration
//!
//! The API base URL is baked in at compile time from `API_URL`.

/// Used when `API_URL` is unset or blank
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL without trailing slash
    pub api_base_url: String,
}

impl AppConfig {
    /// Resolve from the `API_URL` value captured at build time.
    pub fn from_env() -> Self {
        let candidate = option_env!("API_URL");
        match resolve_base_url(candidate) {
            Ok(api_base_url) => Self { api_base_url },
            Err(e) => {
                log::error!("Invalid API_URL {:?}: {}, using {}", candidate, e, DEFAULT_API_URL);
                Self { api_base_url: DEFAULT_API_URL.to_string() }
            }
        }
    }
}

/// Pick the configured URL when non-blank, else the default.
pub fn resolve_base_url(configured: Option<&str>) -> Result<String, url::ParseError> {
    let chosen = configured
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_URL);
    url::Url::parse(chosen)?;
    Ok(chosen.trim_end_matches('/').to_string())
}
