use serde::{Deserialize, Serialize};

pub const API_BASE_URL_ENV: &str = "API_BASE_URL";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Where the chat backend lives. Resolved once at start-up and shared with
/// the UI tree through Leptos context.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Unset and empty both fall back to the local development backend.
    /// Anything else is taken verbatim.
    pub fn resolve(value: Option<String>) -> Self {
        match value {
            Some(url) if !url.is_empty() => Self { base_url: url },
            _ => Self::default(),
        }
    }

    pub fn from_env() -> Self {
        let value = std::env::var(API_BASE_URL_ENV).ok();
        if value.as_deref().map_or(true, str::is_empty) {
            tracing::debug!("{API_BASE_URL_ENV} not set, using {DEFAULT_API_BASE_URL}");
        }
        Self::resolve(value)
    }

    /// Joins `path` onto the base URL with a single `/` between them.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.into(),
        }
    }
}
