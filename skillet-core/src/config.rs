//! Client configuration from environment variables.

use std::env;

/// Default backend base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// How search queries are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Delegate non-empty queries to the backend match endpoint.
    #[default]
    Remote,
    /// Filter a pre-loaded catalog on the client.
    Local,
}

impl SearchMode {
    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "remote" => Some(SearchMode::Remote),
            "local" => Some(SearchMode::Local),
            _ => None,
        }
    }
}

/// Configuration for the recipe catalog client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL, with any trailing slash stripped.
    pub base_url: String,
    /// Search strategy selection.
    pub search_mode: SearchMode,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `SKILLET_API_BASE_URL`: backend base URL (default: "http://localhost:8000")
    /// - `SKILLET_SEARCH_MODE`: "remote" (default) or "local"
    pub fn from_env() -> Self {
        let base_url =
            env::var("SKILLET_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let search_mode = env::var("SKILLET_SEARCH_MODE")
            .ok()
            .and_then(|v| SearchMode::from_label(&v))
            .unwrap_or_default();

        Self::new(base_url, search_mode)
    }

    /// Build a configuration with an explicit base URL, normalizing it by
    /// stripping trailing slashes.
    pub fn new(base_url: impl Into<String>, search_mode: SearchMode) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            search_mode,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, SearchMode::default())
    }
}
