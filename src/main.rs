//! stargaze - Reports the stars your public GitHub repositories earned this
//! calendar year.
//!
//! Configuration comes from `stargaze.json5` and the environment (see
//! `stargaze_config`). Report lines go to stdout; diagnostics go to stderr,
//! filtered by `STARGAZE_LOG` (default `warn`).

use std::process::ExitCode;

use anyhow::Context;
use stargaze_config::{Config, auth::require_token};
use stargaze_github::{
    AggregateOptions, AggregateProgress, DEFAULT_API_URL, GitHubClient, ProgressCallback,
    aggregate_window_stars, list_owned_repositories,
};
use stargaze_protocol::{DateWindow, StarSummary};
use stargaze_report::{render_header, render_progress, render_summary};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "STARGAZE_LOG";

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run() -> anyhow::Result<()> {
    let config = Config::load().await.context("failed to load configuration")?;
    // Fails before any request is made.
    let token = require_token(&config).await?;

    let api_url = config.api_url.as_deref().unwrap_or(DEFAULT_API_URL);
    let client = GitHubClient::new(api_url, &token)
        .await
        .context("failed to create GitHub client")?;

    let username = match &config.username {
        Some(username) => username.clone(),
        None => client
            .current_login()
            .await
            .context("failed to look up the authenticated user")?,
    };
    let window = match config.report.year {
        Some(year) => DateWindow::for_year(year)?,
        None => DateWindow::current()?,
    };
    debug!(%username, since = %window.start(), "starting run");

    println!("{}", render_header(&username, &window));

    let repos = list_owned_repositories(&client, &username)
        .await
        .with_context(|| format!("failed to list repositories owned by {username}"))?;

    let on_progress: ProgressCallback = Box::new(|event| {
        if let AggregateProgress::NewStars(result) = event {
            println!("{}", render_progress(&result));
        }
    });
    let options = AggregateOptions {
        concurrency: config.fetch.concurrency,
        ordering: config.fetch.ordering,
    };
    let results =
        aggregate_window_stars(&client, &repos, &window, options, Some(&on_progress)).await?;

    let summary = StarSummary::rank(results, config.report.top);
    println!();
    print!("{}", render_summary(&summary, &window));

    Ok(())
}
