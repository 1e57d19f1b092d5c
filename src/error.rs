// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.

use crate::config::ConfigError;

/// Application error type, surfaced by `main` as a failed run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Todoist API error: {0}")]
    TodoistApi(String),

    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// True for failures talking to Todoist or GitHub (non-2xx or transport).
    pub fn is_upstream(&self) -> bool {
        matches!(self, AppError::TodoistApi(_) | AppError::GitHubApi(_))
    }
}

/// Result type alias for services
pub type Result<T> = std::result::Result<T, AppError>;
