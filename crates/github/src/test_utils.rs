//! Test utilities for exercising the fetch pipeline without a network.
//!
//! [`MockTransport`] answers routes from a fixed table, records every
//! request, and tracks how many requests were awaiting a response at once.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::{Value, json};

use crate::error::Result;
use crate::pagination::PAGE_SIZE;
use crate::transport::{ApiResponse, HeaderProfile, Transport};

/// How many times a mocked request yields before answering.
const YIELDS_PER_REQUEST: usize = 3;

/// A scripted [`Transport`].
///
/// Unknown routes answer `501 Not Implemented` so an unexpected request
/// fails the test loudly.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: HashMap<String, ApiResponse>,
    requests: Mutex<Vec<(String, HeaderProfile)>>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `route` with `200 OK` and `body`.
    pub fn with_json(mut self, route: &str, body: Value) -> Self {
        self.responses.insert(
            route.to_string(),
            ApiResponse::new(200, "OK", body.to_string()),
        );
        self
    }

    /// Answers `route` with an empty body and the given status.
    pub fn with_status(mut self, route: &str, status: u16, status_text: &str) -> Self {
        self.responses
            .insert(route.to_string(), ApiResponse::new(status, status_text, ""));
        self
    }

    /// Routes requested so far, in order.
    pub fn requested_routes(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(route, _)| route.clone())
            .collect()
    }

    /// Header profiles requested so far, in order.
    pub fn requested_profiles(&self) -> Vec<HeaderProfile> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(_, profile)| *profile)
            .collect()
    }

    /// The largest number of requests that were outstanding at once.
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }
}

impl Transport for MockTransport {
    async fn get(&self, route: &str, profile: HeaderProfile) -> Result<ApiResponse> {
        self.requests
            .lock()
            .unwrap()
            .push((route.to_string(), profile));

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);
        for _ in 0..YIELDS_PER_REQUEST {
            tokio::task::yield_now().await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        Ok(self
            .responses
            .get(route)
            .cloned()
            .unwrap_or_else(|| ApiResponse::new(501, "Not Implemented", "")))
    }
}

/// Route of page `page` of the owned-repositories listing.
pub fn repos_route(username: &str, page: u32) -> String {
    format!("/users/{username}/repos?type=owner&per_page={PAGE_SIZE}&page={page}")
}

/// Route of page `page` of a repository's stargazers.
pub fn stargazers_route(full_name: &str, page: u32) -> String {
    format!("/repos/{full_name}/stargazers?per_page={PAGE_SIZE}&page={page}")
}

/// A repository object as the listing endpoint returns it.
pub fn repo_json(full_name: &str, stars: u64, private: bool) -> Value {
    let name = full_name.rsplit_once('/').map_or(full_name, |(_, name)| name);
    json!({
        "name": name,
        "full_name": full_name,
        "stargazers_count": stars,
        "html_url": format!("https://github.com/{full_name}"),
        "private": private,
    })
}

/// Noon UTC on the given day.
pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

/// A stargazer page with the given timestamps, in the given order.
pub fn stargazer_page(times: &[DateTime<Utc>]) -> Value {
    Value::Array(
        times
            .iter()
            .enumerate()
            .map(|(i, starred_at)| {
                json!({
                    "starred_at": starred_at.to_rfc3339(),
                    "user": { "login": format!("user-{i}") },
                })
            })
            .collect(),
    )
}

/// `count` timestamps one hour apart, newest first, the last one at `oldest`.
pub fn newest_first(oldest: DateTime<Utc>, count: usize) -> Vec<DateTime<Utc>> {
    (0..count)
        .rev()
        .map(|offset| oldest + Duration::hours(offset as i64))
        .collect()
}
