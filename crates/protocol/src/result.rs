//! Per-repository star counts produced by the aggregator.

use serde::{Deserialize, Serialize};

use crate::repository::Repository;

/// Lifetime and in-window star counts for one repository.
///
/// # Examples
///
/// ```
/// use stargaze_protocol::{RepoStarResult, Repository};
///
/// let repo = Repository::new("octocat/alpha", 5);
/// let result = RepoStarResult::from_repository(&repo, 3);
///
/// assert!(result.has_new_stars());
/// assert_eq!(result.stars_before_window(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoStarResult {
    /// Short repository name.
    pub name: String,
    /// Qualified repository name.
    pub full_name: String,
    /// Browser URL of the repository.
    pub html_url: String,
    /// Lifetime star count as reported on the repository.
    pub lifetime_stars: u64,
    /// Stars given inside the window.
    pub window_stars: u64,
    /// Stars given after the window ended. Always zero for the current year.
    #[serde(default)]
    pub later_stars: u64,
}

impl RepoStarResult {
    /// Pairs a repository with its in-window star count.
    #[must_use]
    pub fn from_repository(repo: &Repository, window_stars: u64) -> Self {
        Self {
            name: repo.name.clone(),
            full_name: repo.full_name.clone(),
            html_url: repo.html_url.clone(),
            lifetime_stars: repo.stargazers_count,
            window_stars,
            later_stars: 0,
        }
    }

    /// Records the stars given after the window ended.
    #[must_use]
    pub fn with_later_stars(mut self, later_stars: u64) -> Self {
        self.later_stars = later_stars;
        self
    }

    /// Returns `true` if at least one star fell inside the window.
    #[must_use]
    pub const fn has_new_stars(&self) -> bool {
        self.window_stars > 0
    }

    /// Stars the repository had when the window ended.
    ///
    /// Saturates at zero: the lifetime count and the event stream are read at
    /// different moments and unstars can make them disagree.
    #[must_use]
    pub const fn stars_at_window_end(&self) -> u64 {
        self.lifetime_stars.saturating_sub(self.later_stars)
    }

    /// Stars the repository had when the window started.
    #[must_use]
    pub const fn stars_before_window(&self) -> u64 {
        self.stars_at_window_end().saturating_sub(self.window_stars)
    }
}
