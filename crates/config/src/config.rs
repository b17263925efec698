//! Core configuration struct and loading logic.
//!
//! [`Config`] is built once at startup from the config file (if any) and
//! the environment, then passed down by reference. Nothing in the crate
//! reads the environment after [`Config::load`] returns.

use std::path::Path;

use serde::{Deserialize, Serialize};
use stargaze_protocol::EventOrdering;

use crate::error::{ConfigError, Result};
use crate::fetch::FetchConfig;
use crate::persistence::{find_config_file, read_config_file};
use crate::report::ReportConfig;

/// Token variable, checked first.
pub const ENV_GITHUB_TOKEN: &str = "GITHUB_TOKEN";
/// Token variable used by the GitHub CLI, checked second.
pub const ENV_GH_TOKEN: &str = "GH_TOKEN";
/// Account to report on.
pub const ENV_GITHUB_USER: &str = "GITHUB_USER";
/// REST API base URL, for GitHub Enterprise.
pub const ENV_GITHUB_API_URL: &str = "GITHUB_API_URL";
/// Number of repositories counted at once.
pub const ENV_CONCURRENCY: &str = "STARGAZE_CONCURRENCY";
/// Number of repositories in the highlights table.
pub const ENV_TOP: &str = "STARGAZE_TOP";
/// Calendar year to report on.
pub const ENV_YEAR: &str = "STARGAZE_YEAR";
/// Stargazer ordering policy (`newest-first`, `trusted`, or `full-scan`).
pub const ENV_ORDERING: &str = "STARGAZE_ORDERING";

/// The main configuration struct.
///
/// Every field is optional in the config file.
///
/// # Examples
///
/// ```
/// use stargaze_config::{Config, FetchConfig};
///
/// let config = Config::default();
/// assert!(config.github_token.is_none());
/// assert!(config.validate().is_ok());
///
/// let config = Config {
///     username: Some("octocat".to_string()),
///     fetch: FetchConfig::with_concurrency(2),
///     ..Config::default()
/// };
/// assert_eq!(config.fetch.concurrency, 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// REST API base URL. `None` means `https://api.github.com`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// GitHub token. If not set, the `gh` CLI is asked for one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_token: Option<String>,

    /// Account to report on. If not set, the token's own account is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Fetch tuning.
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

impl Config {
    /// Loads configuration from the default file locations and the process
    /// environment, then validates it.
    ///
    /// A missing config file is not an error; defaults are used instead.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file is found but cannot be read or
    /// parsed, if an environment variable holds an unusable value, or if the
    /// merged configuration fails validation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use stargaze_config::Config;
    ///
    /// # async fn example() -> stargaze_config::Result<()> {
    /// let config = Config::load().await?;
    /// println!("counting {} repositories at once", config.fetch.concurrency);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load() -> Result<Self> {
        let mut config = match find_config_file() {
            Some(path) => read_config_file(&path)?,
            None => Self::default(),
        };
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates configuration from a specific file, without
    /// consulting the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Overrides fields from the process environment.
    ///
    /// # Errors
    ///
    /// See [`Config::apply_env_with`].
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_with(|name| std::env::var(name).ok())
    }

    /// Overrides fields from variables returned by `lookup`.
    ///
    /// Blank values are ignored. `GITHUB_TOKEN` takes precedence over
    /// `GH_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnv`] if a numeric or ordering variable
    /// cannot be parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use stargaze_config::Config;
    ///
    /// let mut config = Config::default();
    /// config
    ///     .apply_env_with(|name| match name {
    ///         "GITHUB_USER" => Some("octocat".to_string()),
    ///         "STARGAZE_TOP" => Some("3".to_string()),
    ///         _ => None,
    ///     })
    ///     .unwrap();
    ///
    /// assert_eq!(config.username.as_deref(), Some("octocat"));
    /// assert_eq!(config.report.top, 3);
    /// ```
    pub fn apply_env_with(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(token) = var(ENV_GITHUB_TOKEN).or_else(|| var(ENV_GH_TOKEN)) {
            self.github_token = Some(token);
        }
        if let Some(user) = var(ENV_GITHUB_USER) {
            self.username = Some(user);
        }
        if let Some(url) = var(ENV_GITHUB_API_URL) {
            self.api_url = Some(url);
        }
        if let Some(value) = var(ENV_CONCURRENCY) {
            self.fetch.concurrency = parse_env(ENV_CONCURRENCY, value)?;
        }
        if let Some(value) = var(ENV_ORDERING) {
            self.fetch.ordering = parse_env::<EventOrdering>(ENV_ORDERING, value)?;
        }
        if let Some(value) = var(ENV_TOP) {
            self.report.top = parse_env(ENV_TOP, value)?;
        }
        if let Some(value) = var(ENV_YEAR) {
            self.report.year = Some(parse_env(ENV_YEAR, value)?);
        }

        Ok(())
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the API URL is blank or a nested section is out
    /// of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use stargaze_config::{Config, FetchConfig};
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.fetch = FetchConfig::with_concurrency(0);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self
            .api_url
            .as_deref()
            .is_some_and(|url| url.trim().is_empty())
        {
            return Err(ConfigError::EmptyApiUrl);
        }
        self.fetch.validate()?;
        self.report.validate()?;
        Ok(())
    }
}

fn parse_env<T>(var: &'static str, value: String) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| ConfigError::InvalidEnv {
        var,
        reason: e.to_string(),
        value,
    })
}
