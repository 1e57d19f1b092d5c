//! Application configuration loaded from environment variables.
//!
//! Everything is read once at startup into an immutable [`Config`] that is
//! passed explicitly to each component.

use std::env;

/// Default Todoist API origin.
pub const DEFAULT_TODOIST_API_BASE_URL: &str = "https://api.todoist.com";
/// Default GitHub REST API origin.
pub const DEFAULT_GITHUB_API_BASE_URL: &str = "https://api.github.com";

/// Application configuration, loaded once at startup.
#[derive(Clone)]
pub struct Config {
    // --- Required ---
    /// Gist to rewrite
    pub gist_id: String,
    /// GitHub token with gist scope
    pub github_token: String,

    // --- Todoist auth (validated by `AuthStrategy::from_config`) ---
    /// Long-lived access token (preferred)
    pub todoist_access_token: Option<String>,
    /// Legacy personal token (TODOIST_API_KEY, else TODOIST_PERSONAL_TOKEN)
    pub todoist_personal_token: Option<String>,
    /// OAuth client ID for personal token migration
    pub todoist_client_id: Option<String>,
    /// OAuth client secret for personal token migration
    pub todoist_client_secret: Option<String>,

    // --- API origins ---
    pub todoist_api_base_url: String,
    pub github_api_base_url: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("gist_id", &self.gist_id)
            .field("todoist_access_token", &self.todoist_access_token.is_some())
            .field("todoist_personal_token", &self.todoist_personal_token.is_some())
            .field("todoist_client_id", &self.todoist_client_id)
            .field("todoist_api_base_url", &self.todoist_api_base_url)
            .field("github_api_base_url", &self.github_api_base_url)
            .finish_non_exhaustive()
    }
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            gist_id: "test-gist-id".to_string(),
            github_token: "test-gh-token".to_string(),
            todoist_access_token: Some("test-todoist-token".to_string()),
            todoist_personal_token: None,
            todoist_client_id: None,
            todoist_client_secret: None,
            todoist_api_base_url: DEFAULT_TODOIST_API_BASE_URL.to_string(),
            github_api_base_url: DEFAULT_GITHUB_API_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honored for local runs.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset. All missing required variables are
    /// reported together.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let gist_id = get("GIST_ID");
        let github_token = get("GH_TOKEN");

        let mut missing = Vec::new();
        if gist_id.is_none() {
            missing.push("GIST_ID");
        }
        if github_token.is_none() {
            missing.push("GH_TOKEN");
        }

        let (Some(gist_id), Some(github_token)) = (gist_id, github_token) else {
            return Err(ConfigError::MissingVars(missing));
        };

        Ok(Self {
            gist_id,
            github_token,
            todoist_access_token: get("TODOIST_ACCESS_TOKEN"),
            todoist_personal_token: get("TODOIST_API_KEY").or_else(|| get("TODOIST_PERSONAL_TOKEN")),
            todoist_client_id: get("TODOIST_CLIENT_ID"),
            todoist_client_secret: get("TODOIST_CLIENT_SECRET"),
            todoist_api_base_url: get("TODOIST_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_TODOIST_API_BASE_URL.to_string()),
            github_api_base_url: get("GITHUB_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GITHUB_API_BASE_URL.to_string()),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingVars(Vec<&'static str>),

    #[error(
        "Missing TODOIST_CLIENT_ID or TODOIST_CLIENT_SECRET for legacy personal token migration."
    )]
    MigrationCredentialsMissing,

    #[error(
        "Missing Todoist auth. Set TODOIST_ACCESS_TOKEN (preferred) or provide \
         TODOIST_API_KEY/TODOIST_PERSONAL_TOKEN with TODOIST_CLIENT_ID and TODOIST_CLIENT_SECRET."
    )]
    MissingTodoistAuth,
}
