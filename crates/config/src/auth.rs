//! GitHub token resolution.
//!
//! Tokens are resolved in this order:
//!
//! 1. `github_token` from [`Config`] (environment or config file)
//! 2. `gh auth token` (GitHub CLI)
//!
//! Listing a user's public repositories and their stargazers works
//! unauthenticated, but the 60 requests/hour limit is exhausted by any
//! account with a few popular repositories, so a missing token is an error.

use secrecy::SecretString;
use tracing::debug;

use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Resolves a token from `configured`, falling back to the `gh` CLI.
///
/// Returns `None` when neither source has a token. A `gh` binary that exists
/// but fails unexpectedly is treated as "no token" after logging it.
///
/// # Examples
///
/// ```no_run
/// use stargaze_config::auth::resolve_token;
///
/// # async fn example() {
/// let token = resolve_token(Some("ghp_configured")).await;
/// assert!(token.is_some());
/// # }
/// ```
pub async fn resolve_token(configured: Option<&str>) -> Option<SecretString> {
    if let Some(token) = configured.map(str::trim).filter(|t| !t.is_empty()) {
        return Some(SecretString::from(token));
    }

    match get_gh_token().await {
        Ok(token) => token.map(SecretString::from),
        Err(e) => {
            debug!(error = %e, "gh CLI did not provide a token");
            None
        }
    }
}

/// Resolves the token for `config` or fails with remediation advice.
///
/// # Errors
///
/// Returns [`ConfigError::MissingToken`] if no source yields a token.
///
/// # Examples
///
/// ```no_run
/// use stargaze_config::{Config, auth::require_token};
///
/// # async fn example() -> stargaze_config::Result<()> {
/// let config = Config::load().await?;
/// let token = require_token(&config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn require_token(config: &Config) -> Result<SecretString> {
    resolve_token(config.github_token.as_deref())
        .await
        .ok_or(ConfigError::MissingToken)
}

/// Gets a GitHub token from the `gh` CLI.
///
/// Runs `gh auth token` and returns:
///
/// - `Ok(Some(token))` if the command succeeds and prints a token
/// - `Ok(None)` if `gh` is not installed or not logged in
/// - `Err(...)` if the command exists but fails otherwise
///
/// # Errors
///
/// Returns [`ConfigError::GhAuthFailed`] if `gh` cannot be spawned, and
/// [`ConfigError::GhAuthError`] if it exits unsuccessfully for a reason
/// other than being logged out.
pub async fn get_gh_token() -> Result<Option<String>> {
    use tokio::process::Command;

    let output = match Command::new("gh").args(["auth", "token"]).output().await {
        Ok(output) => output,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(None);
        }
        Err(e) => {
            return Err(ConfigError::GhAuthFailed(e));
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        if stderr.contains("not logged in") || stderr.contains("no oauth token") {
            return Ok(None);
        }
        return Err(ConfigError::GhAuthError {
            code: output.status.code(),
            stderr,
        });
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() {
        return Ok(None);
    }

    Ok(Some(token))
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[tokio::test]
    async fn configured_token_wins() {
        let token = resolve_token(Some("ghp_configured")).await.unwrap();
        assert_eq!(token.expose_secret(), "ghp_configured");
    }

    #[tokio::test]
    async fn configured_token_is_trimmed() {
        let token = resolve_token(Some("  ghp_padded\n")).await.unwrap();
        assert_eq!(token.expose_secret(), "ghp_padded");
    }

    #[tokio::test]
    async fn require_token_uses_config() {
        let config = Config {
            github_token: Some("ghp_from_config".to_string()),
            ..Config::default()
        };
        let token = require_token(&config).await.unwrap();
        assert_eq!(token.expose_secret(), "ghp_from_config");
    }

    #[tokio::test]
    async fn gh_cli_fallback_does_not_panic() {
        // Whether gh is installed or logged in depends on the machine.
        let _result = resolve_token(None).await;
        let _result = resolve_token(Some("   ")).await;
    }
}
