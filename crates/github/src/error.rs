//! Error types for GitHub API operations.
//!
//! A non-2xx response is reported as [`Error::Status`] and names the route
//! that failed. Whether a status is fatal is decided by the caller: the
//! stargazer counter treats 404 as "no stars", everything else is hard.

/// Errors that can occur during GitHub API operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request could not be sent or its body could not be read.
    #[error("GitHub API error: {0}")]
    Api(#[from] octocrab::Error),

    /// The API answered with a non-success status.
    #[error("GET {endpoint} failed: {status} {status_text}")]
    Status {
        /// The route that was requested.
        endpoint: String,
        /// The HTTP status code.
        status: u16,
        /// The canonical reason phrase for `status`.
        status_text: String,
    },

    /// The response body was not the JSON we expected.
    #[error("failed to decode response from {endpoint}: {source}")]
    Decode {
        /// The route that was requested.
        endpoint: String,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Counting stargazers for a repository failed.
    #[error("failed to count stargazers for {full_name}")]
    Stargazers {
        /// The `owner/repo` pair.
        full_name: String,
        /// What went wrong.
        #[source]
        source: Box<Error>,
    },

    /// A repository name was not of the form `owner/repo`.
    #[error("invalid repository name `{0}`, expected owner/repo")]
    InvalidRepository(String),
}

impl Error {
    /// Returns `true` if this is a 404 response.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

/// A specialized Result type for GitHub API operations.
pub type Result<T> = std::result::Result<T, Error>;
