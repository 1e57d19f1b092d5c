// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! GitHub gist client and publisher.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::{Gist, GistFile, GistUpdate};

/// Display name given to the rewritten gist file.
pub const GIST_FILENAME: &str = "✅ Todoist Stats";

const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// GitHub REST client scoped to gist operations.
#[derive(Clone)]
pub struct GistClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl GistClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        Ok(Self {
            http: crate::services::build_http_client()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    /// Get a gist by ID.
    pub async fn get_gist(&self, gist_id: &str) -> Result<Gist> {
        let url = format!("{}/gists/{}", self.base_url, gist_id);

        let response = self
            .request(self.http.get(&url))
            .send()
            .await
            .map_err(|e| AppError::GitHubApi(e.to_string()))?;

        check_response_json(response).await
    }

    /// Rename and rewrite a single file; other files in the gist are untouched.
    pub async fn update_gist_file(
        &self,
        gist_id: &str,
        existing_filename: &str,
        new_filename: &str,
        content: &str,
    ) -> Result<Gist> {
        let url = format!("{}/gists/{}", self.base_url, gist_id);

        let body = GistUpdate {
            files: BTreeMap::from([(
                existing_filename.to_string(),
                GistFile {
                    filename: Some(new_filename.to_string()),
                    content: Some(content.to_string()),
                },
            )]),
        };

        let response = self
            .request(self.http.patch(&url))
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::GitHubApi(e.to_string()))?;

        check_response_json(response).await
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .bearer_auth(&self.token)
            .header(reqwest::header::ACCEPT, GITHUB_ACCEPT)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
    }
}

/// Check response status and parse JSON body.
async fn check_response_json<T: for<'de> Deserialize<'de>>(response: reqwest::Response) -> Result<T> {
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::GitHubApi(format!("HTTP {}: {}", status, body)));
    }

    response
        .json()
        .await
        .map_err(|e| AppError::GitHubApi(format!("JSON parse error: {}", e)))
}

// ─────────────────────────────────────────────────────────────────────────────
// GistService - Publishes rendered lines into a gist
// ─────────────────────────────────────────────────────────────────────────────

/// Publishes rendered stats into the first file of a gist.
#[derive(Clone)]
pub struct GistService {
    client: GistClient,
}

impl GistService {
    pub fn new(client: GistClient) -> Self {
        Self { client }
    }

    /// Overwrite the first file (by name) of `gist_id` with `lines`.
    ///
    /// Returns the filename that was replaced.
    pub async fn publish(&self, gist_id: &str, lines: &[String]) -> Result<String> {
        let gist = self
            .client
            .get_gist(gist_id)
            .await
            .map_err(|e| wrap_gist_error("Unable to get gist", e))?;

        let filename = gist
            .first_filename()
            .ok_or_else(|| {
                AppError::GitHubApi(format!("Unable to update gist: gist {} has no files", gist_id))
            })?
            .to_string();

        let content = lines.join("\n");

        self.client
            .update_gist_file(gist_id, &filename, GIST_FILENAME, &content)
            .await
            .map_err(|e| wrap_gist_error("Unable to update gist", e))?;

        tracing::info!(gist_id, file = %filename, "Gist updated");
        Ok(filename)
    }
}

/// Prefix a gist failure with what was being attempted.
///
/// GitHub errors keep their inner message so the variant prefix is not repeated.
fn wrap_gist_error(context: &str, err: AppError) -> AppError {
    match err {
        AppError::GitHubApi(msg) => AppError::GitHubApi(format!("{}: {}", context, msg)),
        other => AppError::GitHubApi(format!("{}: {}", context, other)),
    }
}
