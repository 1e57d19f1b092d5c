// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Todoist-Box: Publish Todoist productivity stats to a GitHub gist
//!
//! This crate resolves Todoist credentials, collects karma, completion
//! counts and the current daily streak, and rewrites a gist with a short
//! text summary.

pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod services;
pub mod time_utils;

use chrono::NaiveDate;

use config::Config;
use error::Result;
use models::TodoistStats;
use services::{AuthStrategy, GistClient, GistService, TodoistClient, TodoistService};

/// Everything needed for one run, built from configuration.
pub struct App {
    pub config: Config,
    pub auth: AuthStrategy,
    pub todoist_client: TodoistClient,
    pub gist_service: GistService,
}

impl App {
    /// Validate auth configuration and build the API clients.
    ///
    /// Fails before any network call if Todoist auth is incomplete or an
    /// HTTP client cannot be built.
    pub fn from_config(config: Config) -> Result<Self> {
        let auth = AuthStrategy::from_config(&config)?;
        let todoist_client = TodoistClient::new(config.todoist_api_base_url.as_str())?;
        let gist_service = GistService::new(GistClient::new(
            config.github_api_base_url.as_str(),
            config.github_token.as_str(),
        )?);

        Ok(Self {
            config,
            auth,
            todoist_client,
            gist_service,
        })
    }

    /// Resolve credentials and collect stats, without publishing.
    pub async fn collect(&self, today: NaiveDate) -> Result<TodoistStats> {
        tracing::info!(auth = self.auth.kind(), "Resolving Todoist credentials");
        let access_token = self.auth.resolve(&self.todoist_client).await?;

        TodoistService::new(self.todoist_client.clone(), access_token)
            .collect_stats(today)
            .await
    }

    /// Collect stats, render them and publish to the gist.
    ///
    /// Nothing is published if any step before the gist write fails.
    pub async fn run(&self, today: NaiveDate) -> Result<Vec<String>> {
        tracing::info!(gist_id = %self.config.gist_id, "Starting Todoist stats run");

        let stats = self.collect(today).await?;
        let lines = render::render_lines(&stats);
        tracing::info!(content = %lines.join("\n"), "Rendered gist content");

        self.gist_service
            .publish(&self.config.gist_id, &lines)
            .await?;
        Ok(lines)
    }
}
