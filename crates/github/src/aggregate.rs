//! Counting window stars across many repositories with bounded concurrency.
//!
//! Every repository with at least one lifetime star is counted exactly once.
//! At most [`AggregateOptions::concurrency`] repositories are being paged at
//! any moment; their request futures are multiplexed on the calling task, so
//! nothing runs in parallel and the results vector needs no locking. The
//! first hard error drops all in-flight work and is returned as is.

use futures_util::{StreamExt, stream};
pub use stargaze_protocol::DEFAULT_CONCURRENCY;
use stargaze_protocol::{DateWindow, EventOrdering, RepoStarResult, Repository};
use tracing::{debug, instrument};

use crate::error::Result;
use crate::stargazers::tally_window_stars;
use crate::transport::Transport;

/// Tuning for [`aggregate_window_stars`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateOptions {
    /// Maximum number of repositories being paged at the same time.
    pub concurrency: usize,
    /// Early-termination policy for stargazer paging.
    pub ordering: EventOrdering,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            ordering: EventOrdering::default(),
        }
    }
}

/// Progress events emitted while aggregating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AggregateProgress {
    /// Counting is about to start.
    Started {
        /// Number of repositories handed in.
        total: usize,
        /// Number of repositories that will be counted.
        eligible: usize,
    },
    /// A repository gained stars inside the window.
    NewStars(RepoStarResult),
    /// Every eligible repository was counted.
    Finished {
        /// Number of results produced.
        counted: usize,
    },
}

/// Callback receiving [`AggregateProgress`] events.
pub type ProgressCallback = Box<dyn Fn(AggregateProgress) + Send + Sync>;

/// Sends `event` to `on_progress`, if any.
pub fn emit(on_progress: Option<&ProgressCallback>, event: AggregateProgress) {
    if let Some(callback) = on_progress {
        callback(event);
    }
}

/// Counts in-window stars for every starred repository in `repos`.
///
/// Repositories with zero lifetime stars are skipped without a request. The
/// returned results are in completion order, not input order.
///
/// # Errors
///
/// Returns the first non-404 failure from any repository; no partial result
/// set is returned.
///
/// # Examples
///
/// ```no_run
/// use stargaze_github::{
///     AggregateOptions, AggregateProgress, GitHubClient, ProgressCallback,
///     aggregate_window_stars, list_owned_repositories,
/// };
/// use stargaze_protocol::DateWindow;
///
/// # async fn example(client: &GitHubClient) -> stargaze_github::Result<()> {
/// let window = DateWindow::current().unwrap();
/// let repos = list_owned_repositories(client, "octocat").await?;
///
/// let on_progress: ProgressCallback = Box::new(|event| {
///     if let AggregateProgress::NewStars(result) = event {
///         println!("+{} {}", result.window_stars, result.full_name);
///     }
/// });
///
/// let results = aggregate_window_stars(
///     client,
///     &repos,
///     &window,
///     AggregateOptions::default(),
///     Some(&on_progress),
/// )
/// .await?;
/// println!("counted {} repositories", results.len());
/// # Ok(())
/// # }
/// ```
#[instrument(skip_all, fields(repos = repos.len(), concurrency = options.concurrency))]
pub async fn aggregate_window_stars<C: Transport>(
    transport: &C,
    repos: &[Repository],
    window: &DateWindow,
    options: AggregateOptions,
    on_progress: Option<&ProgressCallback>,
) -> Result<Vec<RepoStarResult>> {
    let eligible: Vec<&Repository> = repos.iter().filter(|repo| repo.has_stars()).collect();
    debug!(eligible = eligible.len(), "aggregating window stars");
    emit(
        on_progress,
        AggregateProgress::Started {
            total: repos.len(),
            eligible: eligible.len(),
        },
    );

    let mut results = Vec::with_capacity(eligible.len());
    let mut counts = stream::iter(eligible)
        .map(move |repo| async move {
            let tally =
                tally_window_stars(transport, &repo.full_name, window, options.ordering).await?;
            Ok::<_, crate::Error>(
                RepoStarResult::from_repository(repo, tally.in_window)
                    .with_later_stars(tally.after_window),
            )
        })
        .buffer_unordered(options.concurrency.max(1));

    while let Some(result) = counts.next().await {
        let result = result?;
        if result.has_new_stars() {
            emit(on_progress, AggregateProgress::NewStars(result.clone()));
        }
        results.push(result);
    }

    emit(
        on_progress,
        AggregateProgress::Finished {
            counted: results.len(),
        },
    );
    Ok(results)
}
