// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! GitHub gist models.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A gist as returned by `GET /gists/{id}`.
///
/// Files are kept in a `BTreeMap`, so iteration order is by filename.
#[derive(Debug, Clone, Deserialize)]
pub struct Gist {
    pub id: String,
    #[serde(default)]
    pub files: BTreeMap<String, GistFile>,
}

impl Gist {
    /// Filename of the first file in key order.
    pub fn first_filename(&self) -> Option<&str> {
        self.files.keys().next().map(String::as_str)
    }
}

/// A single file inside a gist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GistFile {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Body of `PATCH /gists/{id}`.
#[derive(Debug, Serialize)]
pub struct GistUpdate {
    pub files: BTreeMap<String, GistFile>,
}
