//! Error types for configuration operations.
//!
//! This module defines the error types that can occur during configuration
//! loading, parsing, validation, and credential resolution.

use std::path::PathBuf;

/// Errors that can occur during configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file at {path}: {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse JSON5 configuration.
    #[error("failed to parse config: {0}")]
    ParseJson5(#[from] serde_json5::Error),

    /// An environment variable held a value that could not be used.
    #[error("invalid value {value:?} for {var}: {reason}")]
    InvalidEnv {
        /// The variable name.
        var: &'static str,
        /// The offending value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Invalid concurrency limit.
    #[error("invalid concurrency: {reason}")]
    InvalidConcurrency {
        /// The reason the limit is invalid.
        reason: String,
    },

    /// Invalid report settings.
    #[error("invalid report settings: {reason}")]
    InvalidReport {
        /// The reason the settings are invalid.
        reason: String,
    },

    /// Could not determine the user's config directory.
    #[error("could not determine the user config directory")]
    NoHomeDirectory,

    /// The API base URL is empty.
    #[error("api_url must not be empty")]
    EmptyApiUrl,

    /// No GitHub token could be found.
    #[error(
        "no GitHub token found: set GITHUB_TOKEN (or GH_TOKEN), add github_token to stargaze.json5, or run `gh auth login`"
    )]
    MissingToken,

    /// Failed to execute `gh auth token` command.
    #[error("failed to get GitHub token from gh CLI: {0}")]
    GhAuthFailed(#[source] std::io::Error),

    /// The `gh auth token` command returned an error.
    #[error("gh auth token failed with exit code {code:?}: {stderr}")]
    GhAuthError {
        /// The exit code, if available.
        code: Option<i32>,
        /// The stderr output.
        stderr: String,
    },
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_token_explains_remediation() {
        let message = ConfigError::MissingToken.to_string();
        assert!(message.contains("GITHUB_TOKEN"));
        assert!(message.contains("gh auth login"));
    }

    #[test]
    fn invalid_env_quotes_value() {
        let err = ConfigError::InvalidEnv {
            var: "STARGAZE_TOP",
            value: "ten".to_string(),
            reason: "invalid digit found in string".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value \"ten\" for STARGAZE_TOP: invalid digit found in string"
        );
    }
}
