//! Page-by-page fetching of list endpoints.
//!
//! [`Paginator`] requests `page=1, 2, ...` of an endpoint, strictly one after
//! another, and stops on the first of:
//!
//! 1. an empty page,
//! 2. the early-stop predicate returning `true` for the page just read
//!    (its kept items are not discarded),
//! 3. a page shorter than [`PAGE_SIZE`].
//!
//! Any non-2xx response ends the loop with [`Error::Status`](crate::Error::Status).

use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::transport::{HeaderProfile, Transport};

/// Items requested per page.
pub const PAGE_SIZE: usize = 100;

type RouteFn<'a> = Box<dyn Fn(u32) -> String + Send + Sync + 'a>;
type KeepFn<'a, T> = Box<dyn FnMut(&T) -> bool + Send + 'a>;
type StopFn<'a, T> = Box<dyn FnMut(&[T]) -> bool + Send + 'a>;

/// Items collected by a [`Paginator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginated<T> {
    /// Kept items in the order they were returned.
    pub items: Vec<T>,
    /// Number of pages requested.
    pub pages_fetched: u32,
}

/// Configuration for one paginated fetch.
///
/// # Examples
///
/// ```no_run
/// use stargaze_github::{GitHubClient, PAGE_SIZE, Paginator};
/// use stargaze_protocol::Repository;
///
/// # async fn example(client: &GitHubClient) -> stargaze_github::Result<()> {
/// let public = Paginator::new(|page| {
///     format!("/users/octocat/repos?type=owner&per_page={PAGE_SIZE}&page={page}")
/// })
/// .keep(|repo: &Repository| !repo.private)
/// .fetch_all(client)
/// .await?;
///
/// println!("{} public repositories", public.items.len());
/// # Ok(())
/// # }
/// ```
pub struct Paginator<'a, T> {
    route_fn: RouteFn<'a>,
    profile: HeaderProfile,
    keep: KeepFn<'a, T>,
    stop_when: Option<StopFn<'a, T>>,
}

impl<'a, T: DeserializeOwned> Paginator<'a, T> {
    /// Creates a paginator that builds the route for each page with `route_fn`.
    ///
    /// Defaults to the JSON header profile, keeping every item, and no early
    /// stop.
    pub fn new(route_fn: impl Fn(u32) -> String + Send + Sync + 'a) -> Self {
        Self {
            route_fn: Box::new(route_fn),
            profile: HeaderProfile::Json,
            keep: Box::new(|_| true),
            stop_when: None,
        }
    }

    /// Sets the header profile used for every page.
    #[must_use]
    pub fn profile(mut self, profile: HeaderProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Keeps only items for which `keep` returns `true`.
    #[must_use]
    pub fn keep(mut self, keep: impl FnMut(&T) -> bool + Send + 'a) -> Self {
        self.keep = Box::new(keep);
        self
    }

    /// Stops after the current page once `stop` returns `true` for it.
    ///
    /// The predicate sees the whole page as returned by the API; it is
    /// evaluated after the page's items were filtered.
    #[must_use]
    pub fn stop_when(mut self, stop: impl FnMut(&[T]) -> bool + Send + 'a) -> Self {
        self.stop_when = Some(Box::new(stop));
        self
    }

    /// Fetches pages until one of the stop conditions holds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Status`](crate::Error::Status) for the first non-2xx
    /// page, or any transport and decoding error.
    #[instrument(skip_all, fields(profile = ?self.profile))]
    pub async fn fetch_all<C: Transport>(mut self, transport: &C) -> Result<Paginated<T>> {
        let mut items = Vec::new();
        let mut page = 1u32;

        loop {
            let route = (self.route_fn)(page);
            let batch: Vec<T> = transport
                .get(&route, self.profile)
                .await?
                .error_for_status(&route)?
                .json(&route)?;
            let page_len = batch.len();
            debug!(%route, page, count = page_len, "fetched page");

            if page_len == 0 {
                break;
            }

            let kept: Vec<bool> = batch.iter().map(|item| (self.keep)(item)).collect();
            let stop_early = match &mut self.stop_when {
                Some(stop) => stop(batch.as_slice()),
                None => false,
            };
            items.extend(
                batch
                    .into_iter()
                    .zip(kept)
                    .filter_map(|(item, keep)| keep.then_some(item)),
            );

            if stop_early {
                debug!(page, "early stop");
                break;
            }
            if page_len < PAGE_SIZE {
                break;
            }
            page += 1;
        }

        Ok(Paginated {
            items,
            pages_fetched: page,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::test_utils::MockTransport;

    fn numbers(range: std::ops::Range<u32>) -> serde_json::Value {
        json!(range.collect::<Vec<_>>())
    }

    fn route(page: u32) -> String {
        format!("/numbers?per_page={PAGE_SIZE}&page={page}")
    }

    #[tokio::test]
    async fn short_page_is_the_last_page() {
        let transport = MockTransport::new().with_json(&route(1), numbers(0..42));

        let result = Paginator::<u32>::new(route).fetch_all(&transport).await.unwrap();

        assert_eq!(result.items.len(), 42);
        assert_eq!(result.pages_fetched, 1);
        assert_eq!(transport.requested_routes(), [route(1)]);
    }

    #[tokio::test]
    async fn full_page_then_empty_page_costs_one_extra_fetch() {
        let transport = MockTransport::new()
            .with_json(&route(1), numbers(0..100))
            .with_json(&route(2), json!([]));

        let result = Paginator::<u32>::new(route).fetch_all(&transport).await.unwrap();

        assert_eq!(result.items.len(), 100);
        assert_eq!(transport.requested_routes(), [route(1), route(2)]);
    }

    #[tokio::test]
    async fn empty_first_page_yields_nothing() {
        let transport = MockTransport::new().with_json(&route(1), json!([]));

        let result = Paginator::<u32>::new(route).fetch_all(&transport).await.unwrap();

        assert!(result.items.is_empty());
        assert_eq!(result.pages_fetched, 1);
    }

    #[tokio::test]
    async fn pages_are_fetched_in_order_and_accumulated() {
        let transport = MockTransport::new()
            .with_json(&route(1), numbers(0..100))
            .with_json(&route(2), numbers(100..200))
            .with_json(&route(3), numbers(200..250));

        let result = Paginator::<u32>::new(route).fetch_all(&transport).await.unwrap();

        assert_eq!(result.items, (0..250).collect::<Vec<_>>());
        assert_eq!(result.pages_fetched, 3);
        assert_eq!(transport.requested_routes(), [route(1), route(2), route(3)]);
    }

    #[tokio::test]
    async fn early_stop_keeps_items_from_the_stopping_page() {
        let transport = MockTransport::new()
            .with_json(&route(1), numbers(0..100))
            .with_json(&route(2), numbers(100..200));

        let result = Paginator::<u32>::new(route)
            .keep(|n| n % 2 == 0)
            .stop_when(|page| page.last().is_some_and(|n| *n >= 99))
            .fetch_all(&transport)
            .await
            .unwrap();

        assert_eq!(result.items.len(), 50);
        assert_eq!(result.items.last(), Some(&98));
        assert_eq!(transport.requested_routes(), [route(1)]);
    }

    #[tokio::test]
    async fn keep_runs_before_stop_predicate() {
        use std::sync::{Arc, Mutex};

        let transport = MockTransport::new().with_json(&route(1), numbers(0..3));
        let calls = Arc::new(Mutex::new(Vec::new()));

        let keep_calls = Arc::clone(&calls);
        let stop_calls = Arc::clone(&calls);
        Paginator::<u32>::new(route)
            .keep(move |n| {
                keep_calls.lock().unwrap().push(format!("keep {n}"));
                true
            })
            .stop_when(move |_| {
                stop_calls.lock().unwrap().push("stop".to_string());
                false
            })
            .fetch_all(&transport)
            .await
            .unwrap();

        assert_eq!(*calls.lock().unwrap(), ["keep 0", "keep 1", "keep 2", "stop"]);
    }

    #[tokio::test]
    async fn non_success_status_aborts_with_endpoint() {
        let transport = MockTransport::new()
            .with_json(&route(1), numbers(0..100))
            .with_status(&route(2), 500, "Internal Server Error");

        let err = Paginator::<u32>::new(route).fetch_all(&transport).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "GET /numbers?per_page=100&page=2 failed: 500 Internal Server Error"
        );
    }

    #[tokio::test]
    async fn not_found_is_reported_to_the_caller() {
        let transport = MockTransport::new().with_status(&route(1), 404, "Not Found");

        let err = Paginator::<u32>::new(route).fetch_all(&transport).await.unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn profile_is_sent_with_every_page() {
        let transport = MockTransport::new()
            .with_json(&route(1), numbers(0..100))
            .with_json(&route(2), numbers(0..1));

        Paginator::<u32>::new(route)
            .profile(HeaderProfile::StarEvents)
            .fetch_all(&transport)
            .await
            .unwrap();

        assert_eq!(
            transport.requested_profiles(),
            [HeaderProfile::StarEvents, HeaderProfile::StarEvents]
        );
    }
}
