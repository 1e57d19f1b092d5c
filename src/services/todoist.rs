// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Todoist API client for productivity stats and the activity log.
//!
//! Handles:
//! - Legacy personal token migration
//! - Karma and completion totals via the sync endpoint
//! - Paginated "completed" events from the activity log

use std::future::Future;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::{ActivityPage, SyncResponse, TodoistStats};
use crate::services::auth::AccessToken;
use crate::services::streak::{compute_streak, ActivityFeed};

/// Page size requested from the activity log (the API maximum).
pub const ACTIVITY_PAGE_LIMIT: u32 = 100;

/// Scope requested when migrating a personal token.
const MIGRATION_SCOPE: &str = "data:read";

/// Todoist API client.
#[derive(Clone)]
pub struct TodoistClient {
    http: reqwest::Client,
    base_url: String,
}

impl TodoistClient {
    /// Create a new client against the given API origin.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            http: crate::services::build_http_client()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Exchange a legacy personal token for an OAuth access token.
    pub async fn migrate_personal_token(
        &self,
        client_id: &str,
        client_secret: &str,
        personal_token: &str,
    ) -> Result<AccessToken> {
        let url = format!(
            "{}/api/v1/access_tokens/migrate_personal_token",
            self.base_url
        );

        let body = serde_json::json!({
            "client_id": client_id,
            "client_secret": client_secret,
            "personal_token": personal_token,
            "scope": MIGRATION_SCOPE,
        });

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::TodoistApi(format!("Token migration request failed: {}", e)))?;

        let migrated: MigrateTokenResponse =
            check_response_json(response, "Failed to migrate token").await?;

        Ok(AccessToken::new(migrated.access_token))
    }

    /// Fetch karma and completion totals.
    pub async fn fetch_sync_stats(&self, access_token: &AccessToken) -> Result<SyncResponse> {
        let url = format!("{}/api/v1/sync", self.base_url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(access_token.expose())
            .form(&[
                ("sync_token", "*"),
                ("resource_types", r#"["user","stats"]"#),
            ])
            .send()
            .await
            .map_err(|e| AppError::TodoistApi(format!("Sync request failed: {}", e)))?;

        check_response_json(response, "Failed to fetch sync data").await
    }

    /// Fetch one page of completed-task events, newest first.
    pub async fn list_completed_activities(
        &self,
        access_token: &AccessToken,
        cursor: Option<&str>,
    ) -> Result<ActivityPage> {
        let url = format!("{}/api/v1/activities", self.base_url);

        let mut query = vec![
            ("event_type", "completed".to_string()),
            ("limit", ACTIVITY_PAGE_LIMIT.to_string()),
        ];
        if let Some(cursor) = cursor {
            query.push(("cursor", cursor.to_string()));
        }

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token.expose())
            .query(&query)
            .send()
            .await
            .map_err(|e| AppError::TodoistApi(e.to_string()))?;

        check_response_json(response, "Failed to fetch activities").await
    }
}

/// Check response status and parse the JSON body.
///
/// Non-2xx responses become `TodoistApi("<context> (<status>): <body>")`.
async fn check_response_json<T: for<'de> Deserialize<'de>>(
    response: reqwest::Response,
    context: &str,
) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::TodoistApi(format!(
            "{} ({}): {}",
            context,
            status.as_u16(),
            body
        )));
    }

    response
        .json()
        .await
        .map_err(|e| AppError::TodoistApi(format!("JSON parse error: {}", e)))
}

/// Token migration response.
#[derive(Debug, Clone, Deserialize)]
struct MigrateTokenResponse {
    access_token: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// TodoistService - Client bound to a resolved access token
// ─────────────────────────────────────────────────────────────────────────────

/// Todoist client paired with the access token for this run.
#[derive(Clone)]
pub struct TodoistService {
    client: TodoistClient,
    access_token: AccessToken,
}

impl TodoistService {
    pub fn new(client: TodoistClient, access_token: AccessToken) -> Self {
        Self {
            client,
            access_token,
        }
    }

    /// Collect all stats for the gist.
    ///
    /// The sync summary and the streak walk run concurrently. A sync failure
    /// aborts; a streak failure has already been downgraded to 0.
    pub async fn collect_stats(&self, today: NaiveDate) -> Result<TodoistStats> {
        let (sync, streak) = tokio::join!(
            self.client.fetch_sync_stats(&self.access_token),
            compute_streak(self, today),
        );
        let sync = sync?;

        let stats = TodoistStats::from_sync(&sync, streak)?;
        tracing::info!(
            karma = stats.karma,
            completed = stats.completed_count,
            today = stats.today_completed,
            week = stats.week_completed,
            streak = stats.streak,
            "Collected Todoist stats"
        );
        Ok(stats)
    }
}

impl ActivityFeed for TodoistService {
    fn fetch_page(&self, cursor: Option<&str>) -> impl Future<Output = Result<ActivityPage>> + Send {
        self.client
            .list_completed_activities(&self.access_token, cursor)
    }
}
