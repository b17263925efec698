//! GitHub API client implementation.
//!
//! This module provides the [`GitHubClient`] struct, the production
//! [`Transport`] backed by octocrab.

use http::header::{HeaderMap, HeaderName, HeaderValue};
use octocrab::Octocrab;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument, warn};

use crate::error::{Error, Result};
use crate::transport::{ApiResponse, HeaderProfile, Transport};

/// Default GitHub REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Authenticated GitHub API client.
///
/// # Security
///
/// Tokens are passed in as [`SecretString`] and handed straight to octocrab,
/// so they never show up in debug output or logs.
///
/// # Examples
///
/// ```no_run
/// use secrecy::SecretString;
/// use stargaze_github::{DEFAULT_API_URL, GitHubClient};
///
/// # async fn example() -> stargaze_github::Result<()> {
/// let token = SecretString::from("ghp_your_token".to_string());
/// let client = GitHubClient::new(DEFAULT_API_URL, &token).await?;
///
/// let login = client.current_login().await?;
/// println!("Authenticated as {login}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct GitHubClient {
    /// The underlying octocrab client.
    inner: Octocrab,
}

impl GitHubClient {
    /// Creates a client for `base_url` that authenticates with `token`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid URI or the octocrab
    /// client fails to initialize.
    #[instrument(skip(token))]
    pub async fn new(base_url: &str, token: &SecretString) -> Result<Self> {
        debug!("creating authenticated GitHub client");
        let inner = Octocrab::builder()
            .base_uri(base_url)
            .map_err(Error::Api)?
            .personal_token(token.expose_secret())
            .build()
            .map_err(Error::Api)?;

        Ok(Self { inner })
    }

    /// Returns the login of the user the token belongs to.
    ///
    /// Calls the `/user` endpoint, so it also proves the token is valid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] if the token is rejected or the call fails.
    #[instrument(skip(self))]
    pub async fn current_login(&self) -> Result<String> {
        debug!("resolving login via /user endpoint");
        match self.inner.current().user().await {
            Ok(user) => {
                debug!(login = %user.login, "token belongs to user");
                Ok(user.login)
            }
            Err(e) => {
                warn!(error = %e, "could not resolve the authenticated user");
                Err(Error::Api(e))
            }
        }
    }
}

impl Transport for GitHubClient {
    #[instrument(skip(self), level = "debug")]
    async fn get(&self, route: &str, profile: HeaderProfile) -> Result<ApiResponse> {
        let mut headers = HeaderMap::new();
        for (name, value) in profile.headers() {
            headers.insert(
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            );
        }

        let response = self
            .inner
            ._get_with_headers(route, Some(headers))
            .await
            .map_err(Error::Api)?;
        let status = response.status();
        let body = self
            .inner
            .body_to_string(response)
            .await
            .map_err(Error::Api)?;
        debug!(status = status.as_u16(), bytes = body.len(), "response received");

        Ok(ApiResponse::new(
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown Status"),
            body,
        ))
    }
}
