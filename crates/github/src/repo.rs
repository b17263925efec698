//! Listing the repositories a user owns.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use stargaze_protocol::Repository;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::pagination::{PAGE_SIZE, Paginator};
use crate::transport::Transport;

/// Characters escaped in a URL path segment.
///
/// Everything but ASCII alphanumerics and the punctuation GitHub allows in
/// user and repository names.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_');

/// Percent-encodes `segment` for use as a single path segment.
pub(crate) fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// Lists the public repositories owned by `username`.
///
/// Pages through `GET /users/{username}/repos?type=owner` until a short or
/// empty page and drops private repositories. An account with no public
/// repositories yields an empty list.
///
/// # Errors
///
/// Returns [`Error::Status`](crate::Error::Status) if any page answers with
/// a non-2xx status, including 404 for an unknown user.
///
/// # Examples
///
/// ```no_run
/// use stargaze_github::{GitHubClient, list_owned_repositories};
///
/// # async fn example(client: &GitHubClient) -> stargaze_github::Result<()> {
/// let repos = list_owned_repositories(client, "octocat").await?;
/// for repo in &repos {
///     println!("{} ({} stars)", repo.full_name, repo.stargazers_count);
/// }
/// # Ok(())
/// # }
/// ```
#[instrument(skip(transport))]
pub async fn list_owned_repositories<C: Transport>(
    transport: &C,
    username: &str,
) -> Result<Vec<Repository>> {
    let user = encode_segment(username);
    let listing = Paginator::new(move |page| {
        format!("/users/{user}/repos?type=owner&per_page={PAGE_SIZE}&page={page}")
    })
    .keep(|repo: &Repository| !repo.private)
    .fetch_all(transport)
    .await?;

    debug!(
        count = listing.items.len(),
        pages = listing.pages_fetched,
        "listed public repositories"
    );
    Ok(listing.items)
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::error::Error;
    use crate::test_utils::{MockTransport, repo_json, repos_route};
    use crate::transport::HeaderProfile;

    fn full_page(offset: usize) -> Value {
        Value::Array(
            (offset..offset + PAGE_SIZE)
                .map(|i| repo_json(&format!("octocat/repo-{i}"), i as u64, false))
                .collect(),
        )
    }

    #[tokio::test]
    async fn lists_single_short_page() {
        let transport = MockTransport::new().with_json(
            &repos_route("octocat", 1),
            json!([
                repo_json("octocat/alpha", 5, false),
                repo_json("octocat/beta", 0, false),
            ]),
        );

        let repos = list_owned_repositories(&transport, "octocat").await.unwrap();

        let names: Vec<&str> = repos.iter().map(|r| r.full_name.as_str()).collect();
        assert_eq!(names, ["octocat/alpha", "octocat/beta"]);
        assert_eq!(transport.requested_routes(), [repos_route("octocat", 1)]);
        assert_eq!(transport.requested_profiles(), [HeaderProfile::Json]);
    }

    #[tokio::test]
    async fn drops_private_repositories() {
        let transport = MockTransport::new().with_json(
            &repos_route("octocat", 1),
            json!([
                repo_json("octocat/public", 1, false),
                repo_json("octocat/secret", 9, true),
            ]),
        );

        let repos = list_owned_repositories(&transport, "octocat").await.unwrap();

        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].full_name, "octocat/public");
    }

    #[tokio::test]
    async fn follows_full_pages_until_empty() {
        let transport = MockTransport::new()
            .with_json(&repos_route("octocat", 1), full_page(0))
            .with_json(&repos_route("octocat", 2), json!([]));

        let repos = list_owned_repositories(&transport, "octocat").await.unwrap();

        assert_eq!(repos.len(), PAGE_SIZE);
        assert_eq!(
            transport.requested_routes(),
            [repos_route("octocat", 1), repos_route("octocat", 2)]
        );
    }

    #[tokio::test]
    async fn keeps_api_order_across_pages() {
        let transport = MockTransport::new()
            .with_json(&repos_route("octocat", 1), full_page(0))
            .with_json(
                &repos_route("octocat", 2),
                json!([repo_json("octocat/last", 1, false)]),
            );

        let repos = list_owned_repositories(&transport, "octocat").await.unwrap();

        assert_eq!(repos.len(), PAGE_SIZE + 1);
        assert_eq!(repos[0].full_name, "octocat/repo-0");
        assert_eq!(repos[PAGE_SIZE].full_name, "octocat/last");
    }

    #[tokio::test]
    async fn empty_account_is_not_an_error() {
        let transport = MockTransport::new().with_json(&repos_route("newbie", 1), json!([]));

        let repos = list_owned_repositories(&transport, "newbie").await.unwrap();

        assert!(repos.is_empty());
    }

    #[tokio::test]
    async fn listing_failure_is_hard() {
        let transport =
            MockTransport::new().with_status(&repos_route("octocat", 1), 401, "Unauthorized");

        let err = list_owned_repositories(&transport, "octocat")
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Status { status: 401, .. }));
        assert!(err.to_string().contains("/users/octocat/repos"));
    }

    #[test]
    fn encode_segment_escapes_reserved_characters() {
        assert_eq!(encode_segment("octo-cat_1.0"), "octo-cat_1.0");
        assert_eq!(encode_segment("a/b?c"), "a%2Fb%3Fc");
    }
}
