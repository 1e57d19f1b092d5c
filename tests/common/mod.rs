// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{Duration, NaiveDate};
use serde_json::{json, Value};
use todoist_box::config::Config;
use wiremock::MockServer;

/// Fixed "today" so streak expectations do not depend on the wall clock.
#[allow(dead_code)]
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date")
}

/// Activity log page with one completion per `days_ago` entry.
#[allow(dead_code)]
pub fn activity_page(days_ago: &[i64], next_cursor: Option<&str>) -> Value {
    let results: Vec<Value> = days_ago
        .iter()
        .map(|&n| {
            let day = today() - Duration::days(n);
            json!({
                "event_type": "completed",
                "object_type": "item",
                "object_id": format!("item-{}", n),
                "event_date": format!("{}T09:15:00.000000Z", day),
            })
        })
        .collect();

    json!({ "results": results, "next_cursor": next_cursor })
}

/// Sync response with the given karma and totals.
#[allow(dead_code)]
pub fn sync_body(karma: f64, completed: u64, today_count: u64, week_count: u64) -> Value {
    json!({
        "sync_token": "token",
        "full_sync": true,
        "user": { "id": "2671355", "karma": karma, "karma_trend": "up" },
        "stats": {
            "completed_count": completed,
            "days_items": [{ "date": today().to_string(), "total_completed": today_count }],
            "week_items": [{ "from": "2026-10-13", "to": "2026-10-19", "total_completed": week_count }]
        }
    })
}

/// Gist response with the given filenames.
#[allow(dead_code)]
pub fn gist_body(id: &str, filenames: &[&str]) -> Value {
    let files: serde_json::Map<String, Value> = filenames
        .iter()
        .map(|name| {
            (
                name.to_string(),
                json!({ "filename": name, "content": format!("old {}", name) }),
            )
        })
        .collect();

    json!({ "id": id, "description": "stats", "files": files })
}

/// Config pointing both APIs at mock servers, authenticated with a direct token.
#[allow(dead_code)]
pub fn test_config(todoist: &MockServer, github: &MockServer) -> Config {
    Config {
        todoist_api_base_url: todoist.uri(),
        github_api_base_url: github.uri(),
        ..Config::default()
    }
}
