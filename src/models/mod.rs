// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod gist;
pub mod stats;

pub use activity::{ActivityPage, CompletionEvent};
pub use gist::{Gist, GistFile, GistUpdate};
pub use stats::{SyncResponse, TodoistStats};
