//! Configuration management for stargaze.
//!
//! This crate builds a [`Config`] from a config file and the environment
//! and resolves the GitHub token.
//!
//! # Configuration Sources (Priority)
//!
//! 1. Environment variables (`GITHUB_TOKEN`, `GH_TOKEN`, `GITHUB_USER`,
//!    `GITHUB_API_URL`, `STARGAZE_*`)
//! 2. Local config (`./stargaze.json5` or `./stargaze.json`)
//! 3. User config (`~/.config/stargaze/config.json5` or `config.json`)
//! 4. Built-in defaults
//!
//! # File Format
//!
//! ```json5
//! {
//!   username: "octocat",
//!   // api_url: "https://ghe.example.com/api/v3",
//!   fetch: { concurrency: 5, ordering: "newest-first" },
//!   report: { top: 10, year: 2025 },
//! }
//! ```
//!
//! # Token Resolution
//!
//! 1. `github_token` from the config (set by `GITHUB_TOKEN` or `GH_TOKEN`)
//! 2. `gh auth token` command (GitHub CLI)
//!
//! If neither yields a token, [`auth::require_token`] fails with
//! [`ConfigError::MissingToken`].
//!
//! # Examples
//!
//! ```no_run
//! use stargaze_config::{Config, auth::require_token};
//!
//! # async fn example() -> stargaze_config::Result<()> {
//! let config = Config::load().await?;
//! let token = require_token(&config).await?;
//! println!("top {} repositories", config.report.top);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod fetch;
pub mod persistence;
pub mod report;

pub use config::Config;
pub use error::{ConfigError, Result};
pub use fetch::FetchConfig;
pub use report::ReportConfig;
