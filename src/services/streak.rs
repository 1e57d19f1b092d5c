// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Current-streak calculation over the paginated activity feed.
//!
//! Pages are fetched newest first. After each page the accumulated set of
//! completion days is assessed:
//! - Most recent day older than yesterday: streak is 0, stop.
//! - A gap of more than one day anywhere: streak is fully determined, stop.
//! - Otherwise keep paging while the feed reports a next cursor.
//!
//! Failing to fetch a page is not fatal; the streak degrades to 0.

use std::collections::BTreeSet;
use std::future::Future;

use chrono::NaiveDate;

use crate::error::Result;
use crate::models::ActivityPage;
use crate::time_utils::{days_between, event_day};

/// Source of completion events, one page at a time.
pub trait ActivityFeed {
    /// Fetch the page after `cursor` (`None` for the first page).
    fn fetch_page(&self, cursor: Option<&str>) -> impl Future<Output = Result<ActivityPage>> + Send;
}

/// What to do after a page has been folded into the day set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaginationState {
    /// Streak still unbroken and more pages exist.
    Continue(String),
    /// Streak is stale or has a gap; further pages cannot change it.
    Broken,
    /// No more pages.
    Exhausted,
}

/// True if the most recent completion is neither today nor yesterday.
pub fn is_stale(days: &BTreeSet<NaiveDate>, today: NaiveDate) -> bool {
    days.last()
        .is_some_and(|&latest| days_between(latest, today) > 1)
}

/// True if any two adjacent completion days are more than one day apart.
pub fn has_break(days: &BTreeSet<NaiveDate>) -> bool {
    days.iter()
        .rev()
        .zip(days.iter().rev().skip(1))
        .any(|(&newer, &older)| days_between(older, newer) > 1)
}

/// Decide whether another page is needed.
pub fn assess(
    days: &BTreeSet<NaiveDate>,
    today: NaiveDate,
    next_cursor: Option<&str>,
) -> PaginationState {
    if is_stale(days, today) || has_break(days) {
        return PaginationState::Broken;
    }

    match next_cursor {
        Some(cursor) => PaginationState::Continue(cursor.to_string()),
        None => PaginationState::Exhausted,
    }
}

/// Count consecutive days ending at the most recent completion.
///
/// Returns 0 when there are no completions or the most recent one is stale.
pub fn count_streak(days: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    if days.is_empty() || is_stale(days, today) {
        return 0;
    }

    let consecutive = days
        .iter()
        .rev()
        .zip(days.iter().rev().skip(1))
        .take_while(|(&newer, &older)| days_between(older, newer) == 1)
        .count();

    1 + consecutive as u32
}

/// Walk the feed and return the current streak.
pub async fn compute_streak<F: ActivityFeed>(feed: &F, today: NaiveDate) -> u32 {
    let mut days = BTreeSet::new();
    let mut cursor: Option<String> = None;
    let mut page_number = 0u32;

    loop {
        page_number += 1;

        let page = match feed.fetch_page(cursor.as_deref()).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    page = page_number,
                    "Failed to fetch activity page, reporting streak as 0"
                );
                return 0;
            }
        };

        for event in &page.results {
            match event_day(&event.event_date) {
                Some(day) => {
                    days.insert(day);
                }
                None => {
                    tracing::warn!(event_date = %event.event_date, "Skipping unparseable event date");
                }
            }
        }

        let state = assess(&days, today, page.next_cursor());

        tracing::debug!(
            page = page_number,
            events = page.results.len(),
            distinct_days = days.len(),
            state = ?state,
            "Activity page processed"
        );

        match state {
            PaginationState::Continue(next) => cursor = Some(next),
            PaginationState::Broken | PaginationState::Exhausted => break,
        }
    }

    count_streak(&days, today)
}
