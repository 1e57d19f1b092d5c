//! Todoist productivity statistics.
//!
//! `SyncResponse` mirrors the nested `/api/v1/sync` payload; `TodoistStats`
//! is the flat record handed to the renderer.

use serde::Deserialize;

use crate::error::{AppError, Result};

/// Subset of the sync response requested with `resource_types=["user","stats"]`.
#[derive(Debug, Clone, Deserialize)]
pub struct SyncResponse {
    pub user: SyncUser,
    pub stats: SyncStats,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SyncUser {
    pub karma: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SyncStats {
    /// Total tasks ever completed
    pub completed_count: u64,
    /// Per-day totals, most recent first
    #[serde(default)]
    pub days_items: Vec<DayItems>,
    /// Per-week totals, most recent first
    #[serde(default)]
    pub week_items: Vec<WeekItems>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DayItems {
    pub total_completed: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeekItems {
    pub total_completed: u64,
}

/// Everything the gist shows, in one flat record.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoistStats {
    pub karma: f64,
    pub completed_count: u64,
    pub today_completed: u64,
    pub week_completed: u64,
    pub streak: u32,
}

impl TodoistStats {
    /// Merge the sync summary with the computed streak.
    pub fn from_sync(sync: &SyncResponse, streak: u32) -> Result<Self> {
        let today = sync
            .stats
            .days_items
            .first()
            .ok_or_else(|| AppError::TodoistApi("Sync stats missing days_items".to_string()))?;
        let week = sync
            .stats
            .week_items
            .first()
            .ok_or_else(|| AppError::TodoistApi("Sync stats missing week_items".to_string()))?;

        Ok(Self {
            karma: sync.user.karma,
            completed_count: sync.stats.completed_count,
            today_completed: today.total_completed,
            week_completed: week.total_completed,
            streak,
        })
    }
}
