//! Shared protocol types for the stargaze application.
//!
//! This crate defines the data that flows between the GitHub fetching layer,
//! the aggregator, and the report renderer.
//!
//! # Overview
//!
//! - [`repository`]: Repositories as listed by the API
//! - [`stargazer`]: Stargazer events and the [`EventOrdering`] policy
//! - [`window`]: The [`DateWindow`] that decides which stars are new
//! - [`result`]: Per-repository [`RepoStarResult`]s
//! - [`ranking`]: Sorting, totals, and highlights via [`StarSummary`]
//! - [`error`]: Error types for protocol operations
//!
//! # Examples
//!
//! ```
//! use chrono::Utc;
//! use stargaze_protocol::{DateWindow, RepoStarResult, Repository, StarSummary};
//!
//! let window = DateWindow::for_year_in(2026, &Utc).unwrap();
//! assert_eq!(window.year(), 2026);
//!
//! let repo = Repository::new("octocat/alpha", 5);
//! let summary = StarSummary::rank(vec![RepoStarResult::from_repository(&repo, 3)], 10);
//! assert_eq!(summary.total_window_stars, 3);
//! ```

pub mod error;
pub mod ranking;
pub mod repository;
pub mod result;
pub mod stargazer;
pub mod window;

// Re-export primary types at crate root for convenience
pub use error::{ProtocolError, Result};
pub use ranking::{ColumnWidths, DEFAULT_CONCURRENCY, DEFAULT_TOP, StarSummary};
pub use repository::Repository;
pub use result::RepoStarResult;
pub use stargazer::{EventOrdering, Stargazer, StargazerEvent, is_newest_first};
pub use window::DateWindow;
