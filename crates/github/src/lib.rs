//! GitHub API access for stargaze.
//!
//! This crate fetches the repositories a user owns and counts how many of
//! their stars were given inside a [`DateWindow`](stargaze_protocol::DateWindow).
//!
//! # Overview
//!
//! The crate is layered, leaves first:
//!
//! - [`Transport`] and [`GitHubClient`]: one authenticated `GET` per call,
//!   raw status and body returned, two [`HeaderProfile`]s
//! - [`Paginator`]: sequential page fetching with early termination
//! - [`list_owned_repositories`]: the user's public, owned repositories
//! - [`count_window_stars`] and [`tally_window_stars`]: in-window stars of
//!   one repository, and those given after the window ended
//! - [`aggregate_window_stars`]: the counter over many repositories with a
//!   concurrency ceiling
//! - [`Error`]: Error types for GitHub API operations
//!
//! # Failure handling
//!
//! A 404 on a repository's stargazers counts as zero for that repository.
//! Any other non-2xx status, on either endpoint, fails the whole operation
//! with an error naming the route and status.
//!
//! # Examples
//!
//! ```no_run
//! use secrecy::SecretString;
//! use stargaze_github::{
//!     AggregateOptions, DEFAULT_API_URL, GitHubClient, aggregate_window_stars,
//!     list_owned_repositories,
//! };
//! use stargaze_protocol::{DateWindow, StarSummary};
//!
//! # async fn example() -> stargaze_github::Result<()> {
//! let token = SecretString::from("ghp_your_token_here".to_string());
//! let client = GitHubClient::new(DEFAULT_API_URL, &token).await?;
//! let window = DateWindow::current().unwrap();
//!
//! let repos = list_owned_repositories(&client, "octocat").await?;
//! let results =
//!     aggregate_window_stars(&client, &repos, &window, AggregateOptions::default(), None)
//!         .await?;
//!
//! let summary = StarSummary::rank(results, 10);
//! println!("{} new stars", summary.total_window_stars);
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod client;
pub mod error;
pub mod pagination;
pub mod repo;
pub mod stargazers;
pub mod transport;

#[cfg(test)]
mod test_utils;

pub use aggregate::{
    AggregateOptions, AggregateProgress, DEFAULT_CONCURRENCY, ProgressCallback,
    aggregate_window_stars, emit,
};
pub use client::{DEFAULT_API_URL, GitHubClient};
pub use error::{Error, Result};
pub use pagination::{PAGE_SIZE, Paginated, Paginator};
pub use repo::list_owned_repositories;
pub use stargazers::{StarTally, count_window_stars, tally_window_stars};
pub use transport::{ApiResponse, HeaderProfile, Transport};
