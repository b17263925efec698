//! Ranking and totals over a set of per-repository results.
//!
//! [`StarSummary::rank`] turns the unordered output of the aggregator into a
//! deterministic ranking:
//!
//! 1. Sort by in-window stars (descending), then lifetime stars
//!    (descending), then full name (ascending).
//! 2. Sum in-window and lifetime stars across every result.
//! 3. Keep the first `top` results that gained stars as highlights, and
//!    size the table columns from those highlights only.

use serde::{Deserialize, Serialize};

use crate::result::RepoStarResult;

/// Number of highlighted repositories when nothing else is configured.
pub const DEFAULT_TOP: usize = 10;

/// Number of repositories counted at once when nothing else is configured.
pub const DEFAULT_CONCURRENCY: usize = 5;

/// Column widths for the highlights table, in characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnWidths {
    /// Width of the rank number.
    pub rank: usize,
    /// Width of the repository full name.
    pub name: usize,
    /// Width of the `+N` delta.
    pub delta: usize,
    /// Width of the star count before the window.
    pub before: usize,
    /// Width of the lifetime star count.
    pub after: usize,
}

impl ColumnWidths {
    /// Computes widths wide enough for every row in `rows`.
    #[must_use]
    pub fn measure(rows: &[RepoStarResult]) -> Self {
        rows.iter().fold(
            Self {
                rank: digits(rows.len() as u64),
                ..Self::default()
            },
            |widths, row| Self {
                rank: widths.rank,
                name: widths.name.max(row.full_name.chars().count()),
                delta: widths.delta.max(digits(row.window_stars) + 1),
                before: widths.before.max(digits(row.stars_before_window())),
                after: widths.after.max(digits(row.stars_at_window_end())),
            },
        )
    }
}

/// The ranked, totalled view of one run.
///
/// # Examples
///
/// ```
/// use stargaze_protocol::{RepoStarResult, Repository, StarSummary};
///
/// let results = vec![
///     RepoStarResult::from_repository(&Repository::new("octocat/a", 5), 3),
///     RepoStarResult::from_repository(&Repository::new("octocat/b", 10), 0),
/// ];
///
/// let summary = StarSummary::rank(results, 10);
/// assert_eq!(summary.total_window_stars, 3);
/// assert_eq!(summary.total_lifetime_stars, 15);
/// assert_eq!(summary.highlights.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarSummary {
    /// Every result, best first.
    pub ranked: Vec<RepoStarResult>,
    /// Sum of in-window stars.
    pub total_window_stars: u64,
    /// Sum of lifetime stars.
    pub total_lifetime_stars: u64,
    /// How many repositories gained at least one star.
    pub repositories_with_new_stars: usize,
    /// The leading repositories that gained stars, at most `top` of them.
    pub highlights: Vec<RepoStarResult>,
    /// Column widths sized for `highlights`.
    pub widths: ColumnWidths,
}

impl StarSummary {
    /// Ranks `results` and keeps up to `top` highlights.
    #[must_use]
    pub fn rank(mut results: Vec<RepoStarResult>, top: usize) -> Self {
        results.sort_by(|a, b| {
            b.window_stars
                .cmp(&a.window_stars)
                .then_with(|| b.lifetime_stars.cmp(&a.lifetime_stars))
                .then_with(|| a.full_name.cmp(&b.full_name))
        });

        let total_window_stars = results.iter().map(|r| r.window_stars).sum();
        let total_lifetime_stars = results.iter().map(|r| r.lifetime_stars).sum();

        let gained: Vec<&RepoStarResult> = results.iter().filter(|r| r.has_new_stars()).collect();
        let highlights: Vec<RepoStarResult> =
            gained.iter().take(top).map(|r| (*r).clone()).collect();
        let widths = ColumnWidths::measure(&highlights);

        Self {
            repositories_with_new_stars: gained.len(),
            ranked: results,
            total_window_stars,
            total_lifetime_stars,
            highlights,
            widths,
        }
    }

    /// Returns `true` if no repository gained stars in the window.
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.highlights.is_empty()
    }
}

fn digits(mut n: u64) -> usize {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
