// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Todoist activity feed models.

use serde::Deserialize;

/// A single "completed" event from the activity log.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionEvent {
    /// When the task was completed (ISO 8601)
    pub event_date: String,
}

/// One page of the activity feed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivityPage {
    #[serde(default)]
    pub results: Vec<CompletionEvent>,
    /// Cursor for the next page; absent, null or empty on the last page
    #[serde(default)]
    pub next_cursor: Option<String>,
}

impl ActivityPage {
    /// The continuation cursor, if another page exists.
    pub fn next_cursor(&self) -> Option<&str> {
        self.next_cursor.as_deref().filter(|c| !c.is_empty())
    }
}
