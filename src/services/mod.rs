// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod auth;
pub mod github;
pub mod streak;
pub mod todoist;

pub use auth::{AccessToken, AuthStrategy};
pub use github::{GistClient, GistService};
pub use streak::{compute_streak, ActivityFeed, PaginationState};
pub use todoist::{TodoistClient, TodoistService};

use anyhow::Context;

use crate::error::Result;

/// User-Agent sent on every outgoing request (GitHub rejects requests without one).
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Build the shared HTTP client used by the API clients.
pub(crate) fn build_http_client() -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to build HTTP client")?;
    Ok(client)
}
