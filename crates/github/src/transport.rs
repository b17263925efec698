//! The HTTP boundary between stargaze and the GitHub API.
//!
//! Everything above this module talks to GitHub through the [`Transport`]
//! trait: one `GET` per call, selected [`HeaderProfile`], raw status and
//! body handed back. A transport never fails because of the status code;
//! callers inspect [`ApiResponse::is_success`] themselves.

use std::future::Future;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Value of the `X-GitHub-Api-Version` header sent with every request.
pub const API_VERSION: &str = "2022-11-28";

/// Media type for regular JSON responses.
pub const JSON_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Media type that makes the stargazers endpoint include `starred_at`.
pub const STAR_MEDIA_TYPE: &str = "application/vnd.github.star+json";

/// The set of request headers to send, chosen per call site.
///
/// Authorization is not part of the profile: the client attaches the
/// bearer token to every request on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HeaderProfile {
    /// Plain JSON.
    #[default]
    Json,
    /// Timestamped stargazer events.
    StarEvents,
}

impl HeaderProfile {
    /// The `Accept` media type for this profile.
    #[must_use]
    pub const fn accept(self) -> &'static str {
        match self {
            Self::Json => JSON_MEDIA_TYPE,
            Self::StarEvents => STAR_MEDIA_TYPE,
        }
    }

    /// Lower-case header name and value pairs for this profile.
    #[must_use]
    pub const fn headers(self) -> [(&'static str, &'static str); 2] {
        [
            ("accept", self.accept()),
            ("x-github-api-version", API_VERSION),
        ]
    }
}

/// A raw API response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    status: u16,
    status_text: String,
    body: Vec<u8>,
}

impl ApiResponse {
    /// Creates a response from its parts.
    #[must_use]
    pub fn new(status: u16, status_text: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: body.into(),
        }
    }

    /// The HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// The reason phrase for the status code.
    #[must_use]
    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// Returns `true` for any 2xx status.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Returns `true` for 404.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Decodes the body as JSON.
    ///
    /// `endpoint` is only used to label a decoding error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|source| Error::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }

    /// Turns a non-2xx response into [`Error::Status`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Status`] naming `endpoint` when the status is not 2xx.
    pub fn error_for_status(self, endpoint: &str) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::Status {
                endpoint: endpoint.to_string(),
                status: self.status,
                status_text: self.status_text,
            })
        }
    }
}

/// Issues authenticated `GET` requests against the GitHub API.
///
/// `route` is a path plus query string relative to the API base URL, for
/// example `/users/octocat/repos?type=owner&per_page=100&page=1`.
pub trait Transport: Sync {
    /// Performs one request and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns an error only when no response could be obtained; non-2xx
    /// statuses are returned as regular responses.
    fn get(
        &self,
        route: &str,
        profile: HeaderProfile,
    ) -> impl Future<Output = Result<ApiResponse>> + Send;
}
