//! Counting the stars a repository earned inside a [`DateWindow`].
//!
//! Stargazer events are paged with the star media type so each one carries
//! `starred_at`. Events inside the window are counted as they stream past
//! and never collected. The scan stops early once a page ends with an event
//! that predates the window, subject to the [`EventOrdering`] policy.

use stargaze_protocol::{DateWindow, EventOrdering, StargazerEvent, is_newest_first};
use tracing::{debug, instrument, warn};

use crate::error::{Error, Result};
use crate::pagination::{PAGE_SIZE, Paginator};
use crate::repo::encode_segment;
use crate::transport::{HeaderProfile, Transport};

/// Stars of one repository, split around a [`DateWindow`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StarTally {
    /// Stars given inside the window.
    pub in_window: u64,
    /// Stars given after the window ended.
    pub after_window: u64,
}

/// Counts stars given to `full_name` inside the window.
///
/// A 404 from the stargazers endpoint counts as zero stars: the repository
/// was renamed or deleted since it was listed, and one missing repository
/// must not sink the whole run.
///
/// # Errors
///
/// Returns [`Error::InvalidRepository`] if `full_name` is not `owner/repo`,
/// and [`Error::Stargazers`] wrapping the cause for any other failure.
///
/// # Examples
///
/// ```no_run
/// use stargaze_github::{GitHubClient, count_window_stars};
/// use stargaze_protocol::{DateWindow, EventOrdering};
///
/// # async fn example(client: &GitHubClient) -> stargaze_github::Result<()> {
/// let window = DateWindow::current().unwrap();
/// let stars = count_window_stars(client, "octocat/hello-world", &window, EventOrdering::default()).await?;
/// println!("{stars} new stars in {}", window.year());
/// # Ok(())
/// # }
/// ```
pub async fn count_window_stars<C: Transport>(
    transport: &C,
    full_name: &str,
    window: &DateWindow,
    ordering: EventOrdering,
) -> Result<u64> {
    Ok(tally_window_stars(transport, full_name, window, ordering)
        .await?
        .in_window)
}

/// Like [`count_window_stars`], but also counts the stars given after the
/// window ended.
///
/// Newest-first pages put those events ahead of the window, so counting
/// them costs no extra requests.
///
/// # Errors
///
/// Same as [`count_window_stars`].
#[instrument(skip(transport, window), fields(since = %window.start(), until = %window.end()))]
pub async fn tally_window_stars<C: Transport>(
    transport: &C,
    full_name: &str,
    window: &DateWindow,
    ordering: EventOrdering,
) -> Result<StarTally> {
    let (owner, repo) = full_name
        .split_once('/')
        .ok_or_else(|| Error::InvalidRepository(full_name.to_string()))?;
    let base = format!(
        "/repos/{}/{}/stargazers",
        encode_segment(owner),
        encode_segment(repo)
    );
    let window = *window;
    let mut tally = StarTally::default();

    let scan = Paginator::new(move |page| format!("{base}?per_page={PAGE_SIZE}&page={page}"))
        .profile(HeaderProfile::StarEvents)
        .keep(|event: &StargazerEvent| {
            if window.contains(event.starred_at) {
                tally.in_window += 1;
            } else if window.is_after(event.starred_at) {
                tally.after_window += 1;
            }
            false
        })
        .stop_when(early_stop(window, ordering))
        .fetch_all(transport)
        .await;

    match scan {
        Ok(scan) => {
            debug!(
                count = tally.in_window,
                later = tally.after_window,
                pages = scan.pages_fetched,
                "counted stars in window"
            );
            Ok(tally)
        }
        Err(e) if e.is_not_found() => {
            debug!("stargazers endpoint returned 404, counting zero");
            Ok(StarTally::default())
        }
        Err(e) => Err(Error::Stargazers {
            full_name: full_name.to_string(),
            source: Box::new(e),
        }),
    }
}

/// Builds the early-stop predicate for `ordering`.
///
/// The predicate is stateful: under [`EventOrdering::NewestFirst`] the first
/// page found out of order switches early termination off for good.
fn early_stop(
    window: DateWindow,
    ordering: EventOrdering,
) -> impl FnMut(&[StargazerEvent]) -> bool + Send {
    let mut enabled = ordering != EventOrdering::FullScan;
    move |page: &[StargazerEvent]| {
        if !enabled {
            return false;
        }
        if ordering == EventOrdering::NewestFirst && !is_newest_first(page) {
            warn!("stargazer page is not newest first, scanning every page");
            enabled = false;
            return false;
        }
        page.last()
            .is_some_and(|oldest| window.is_before(oldest.starred_at))
    }
}
