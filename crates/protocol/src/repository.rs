//! Repositories as returned by the GitHub API.

use serde::{Deserialize, Serialize};

/// A repository owned by the authenticated user.
///
/// Field names follow the `GET /users/{username}/repos` payload so the type
/// deserializes straight from the API response.
///
/// # Examples
///
/// ```
/// use stargaze_protocol::Repository;
///
/// let repo = Repository::new("octocat/hello-world", 42);
/// assert_eq!(repo.name, "hello-world");
/// assert_eq!(repo.owner_and_name(), Some(("octocat", "hello-world")));
/// assert!(repo.has_stars());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Short repository name (`hello-world`).
    pub name: String,
    /// Qualified name (`octocat/hello-world`).
    pub full_name: String,
    /// Lifetime star count.
    pub stargazers_count: u64,
    /// Browser URL of the repository.
    pub html_url: String,
    /// Whether the repository is private.
    #[serde(default)]
    pub private: bool,
}

impl Repository {
    /// Creates a public repository from its qualified name and star count.
    ///
    /// The short name and URL are derived from `full_name`.
    #[must_use]
    pub fn new(full_name: impl Into<String>, stargazers_count: u64) -> Self {
        let full_name = full_name.into();
        let name = full_name
            .rsplit_once('/')
            .map_or(full_name.as_str(), |(_, name)| name)
            .to_string();
        Self {
            html_url: format!("https://github.com/{full_name}"),
            name,
            full_name,
            stargazers_count,
            private: false,
        }
    }

    /// Splits `full_name` into owner and repository name.
    #[must_use]
    pub fn owner_and_name(&self) -> Option<(&str, &str)> {
        self.full_name.split_once('/')
    }

    /// Returns `true` if the repository has ever been starred.
    #[must_use]
    pub const fn has_stars(&self) -> bool {
        self.stargazers_count > 0
    }
}
