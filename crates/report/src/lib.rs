//! Plain-text rendering of a stargaze run.
//!
//! The binary prints, in order:
//!
//! 1. [`render_header`] once, before any network traffic for stars,
//! 2. [`render_progress`] for every repository that gained stars, as the
//!    results arrive,
//! 3. [`render_summary`] once all repositories were counted.
//!
//! Every function returns a `String` and never writes to the terminal itself.
//!
//! # Examples
//!
//! ```
//! use chrono::Utc;
//! use stargaze_protocol::{DateWindow, RepoStarResult, Repository, StarSummary};
//! use stargaze_report::{render_header, render_summary};
//!
//! let window = DateWindow::for_year_in(2026, &Utc).unwrap();
//! assert_eq!(
//!     render_header("octocat", &window),
//!     "Stars earned by octocat's public repositories in 2026"
//! );
//!
//! let repo = Repository::new("octocat/alpha", 5);
//! let summary = StarSummary::rank(vec![RepoStarResult::from_repository(&repo, 3)], 10);
//! assert!(render_summary(&summary, &window).contains("octocat/alpha"));
//! ```

use stargaze_protocol::{DateWindow, RepoStarResult, StarSummary};

/// The line printed before counting starts.
#[must_use]
pub fn render_header(username: &str, window: &DateWindow) -> String {
    format!(
        "Stars earned by {username}'s public repositories in {}",
        window.year()
    )
}

/// The line printed when a repository turns out to have new stars.
#[must_use]
pub fn render_progress(result: &RepoStarResult) -> String {
    format!("  +{} {}", result.window_stars, result.full_name)
}

/// The closing summary: totals followed by the highlights table.
///
/// The output ends with a newline.
#[must_use]
pub fn render_summary(summary: &StarSummary, window: &DateWindow) -> String {
    let year = window.year();

    let labels = [
        (format!("New stars in {year}:"), summary.total_window_stars),
        ("Lifetime stars:".to_string(), summary.total_lifetime_stars),
    ];
    let label_width = labels
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or_default();

    let mut lines = vec!["Summary".to_string()];
    lines.extend(
        labels
            .iter()
            .map(|(label, value)| format!("  {label:<label_width$} {value}")),
    );
    lines.push(String::new());

    if summary.is_quiet() {
        lines.push(format!("No repositories gained stars in {year}."));
    } else {
        lines.push(format!(
            "Repositories with new stars in {year} (top {} of {}):",
            summary.highlights.len(),
            summary.repositories_with_new_stars
        ));
        lines.extend(
            summary
                .highlights
                .iter()
                .enumerate()
                .map(|(index, result)| render_row(summary, index + 1, result)),
        );
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_row(summary: &StarSummary, rank: usize, result: &RepoStarResult) -> String {
    let widths = summary.widths;
    let delta = format!("+{}", result.window_stars);
    format!(
        "  {rank:>rank_width$}. {name:<name_width$}  {delta:>delta_width$}  {before:>before_width$} → {after:>after_width$}",
        name = result.full_name,
        before = result.stars_before_window(),
        after = result.stars_at_window_end(),
        rank_width = widths.rank,
        name_width = widths.name,
        delta_width = widths.delta,
        before_width = widths.before,
        after_width = widths.after,
    )
}
