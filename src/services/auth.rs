// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Todoist credential resolution.
//!
//! The strategy is chosen once from configuration, before any network call:
//! a direct access token is used as-is, while a legacy personal token is
//! migrated to an access token through a single exchange with Todoist.

use crate::config::{Config, ConfigError};
use crate::error::Result;
use crate::services::todoist::TodoistClient;

/// Bearer token for the Todoist API.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, for building an `Authorization` header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// How to obtain a Todoist access token.
#[derive(Clone)]
pub enum AuthStrategy {
    /// Long-lived access token, used unchanged.
    Direct(AccessToken),
    /// Legacy personal token, exchanged via the migration endpoint.
    MigratePersonalToken {
        personal_token: String,
        client_id: String,
        client_secret: String,
    },
}

impl AuthStrategy {
    /// Pick the strategy from configuration.
    pub fn from_config(config: &Config) -> std::result::Result<Self, ConfigError> {
        if let Some(token) = &config.todoist_access_token {
            return Ok(Self::Direct(AccessToken::new(token.clone())));
        }

        let Some(personal_token) = &config.todoist_personal_token else {
            return Err(ConfigError::MissingTodoistAuth);
        };

        match (&config.todoist_client_id, &config.todoist_client_secret) {
            (Some(client_id), Some(client_secret)) => Ok(Self::MigratePersonalToken {
                personal_token: personal_token.clone(),
                client_id: client_id.clone(),
                client_secret: client_secret.clone(),
            }),
            _ => Err(ConfigError::MigrationCredentialsMissing),
        }
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Direct(_) => "access_token",
            Self::MigratePersonalToken { .. } => "personal_token_migration",
        }
    }

    /// Produce a bearer token, migrating a legacy token if needed.
    pub async fn resolve(&self, client: &TodoistClient) -> Result<AccessToken> {
        match self {
            Self::Direct(token) => Ok(token.clone()),
            Self::MigratePersonalToken {
                personal_token,
                client_id,
                client_secret,
            } => {
                tracing::info!(client_id = %client_id, "Migrating legacy personal token");
                let token = client
                    .migrate_personal_token(client_id, client_secret, personal_token)
                    .await?;
                tracing::info!("Personal token migrated");
                Ok(token)
            }
        }
    }
}

impl std::fmt::Debug for AuthStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AuthStrategy").field(&self.kind()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(
        access: Option<&str>,
        personal: Option<&str>,
        client_id: Option<&str>,
        client_secret: Option<&str>,
    ) -> Config {
        Config {
            todoist_access_token: access.map(String::from),
            todoist_personal_token: personal.map(String::from),
            todoist_client_id: client_id.map(String::from),
            todoist_client_secret: client_secret.map(String::from),
            ..Config::default()
        }
    }

    #[test]
    fn test_direct_token_takes_priority() {
        let config = config_with(Some("direct"), Some("legacy"), Some("id"), Some("secret"));

        let strategy = AuthStrategy::from_config(&config).unwrap();

        assert!(matches!(strategy, AuthStrategy::Direct(ref t) if t.expose() == "direct"));
    }

    #[test]
    fn test_legacy_token_with_client_credentials_migrates() {
        let config = config_with(None, Some("legacy"), Some("id"), Some("secret"));

        let strategy = AuthStrategy::from_config(&config).unwrap();

        assert_eq!(strategy.kind(), "personal_token_migration");
    }

    #[test]
    fn test_legacy_token_without_client_credentials_fails() {
        for (id, secret) in [(None, None), (Some("id"), None), (None, Some("secret"))] {
            let config = config_with(None, Some("legacy"), id, secret);
            let err = AuthStrategy::from_config(&config).unwrap_err();
            assert!(matches!(err, ConfigError::MigrationCredentialsMissing));
        }
    }

    #[test]
    fn test_no_auth_names_all_options() {
        let config = config_with(None, None, Some("id"), Some("secret"));

        let err = AuthStrategy::from_config(&config).unwrap_err();

        assert!(matches!(err, ConfigError::MissingTodoistAuth));
        let msg = err.to_string();
        for var in [
            "TODOIST_ACCESS_TOKEN",
            "TODOIST_API_KEY",
            "TODOIST_PERSONAL_TOKEN",
            "TODOIST_CLIENT_ID",
            "TODOIST_CLIENT_SECRET",
        ] {
            assert!(msg.contains(var), "message should mention {}", var);
        }
    }

    #[test]
    fn test_debug_does_not_leak_tokens() {
        let config = config_with(None, Some("legacy-secret"), Some("id"), Some("client-secret"));
        let strategy = AuthStrategy::from_config(&config).unwrap();

        let rendered = format!("{:?}", strategy);
        assert!(!rendered.contains("legacy-secret"));
        assert!(!rendered.contains("client-secret"));
        assert_eq!(format!("{:?}", AccessToken::new("abc")), "AccessToken(***)");
    }
}
