// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for calendar-day arithmetic.

use chrono::{NaiveDate, Utc};

/// Today's calendar date in UTC.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Extract the calendar day from an ISO 8601 timestamp.
///
/// Only the leading `YYYY-MM-DD` is considered; no time zone conversion is
/// applied.
pub fn event_day(event_date: &str) -> Option<NaiveDate> {
    let day = event_date.get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// Absolute number of calendar days between two dates.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> u64 {
    (b - a).num_days().unsigned_abs()
}
