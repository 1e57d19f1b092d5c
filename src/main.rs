// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Todoist-Box runner
//!
//! Collects Todoist stats once, publishes them to the configured gist and
//! exits. Any unrecovered error produces a non-zero exit status.

use std::process::ExitCode;

use todoist_box::{config::Config, time_utils::today_utc, App};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Run failed");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> todoist_box::error::Result<()> {
    // Load configuration from environment
    let config = Config::from_env()?;
    let app = App::from_config(config)?;

    let lines = app.run(today_utc()).await?;
    tracing::info!(lines = lines.len(), "Todoist stats published");
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("todoist_box=debug,info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .init();
}
