//! Stargazer events and the ordering policy used when paging through them.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// A single "user starred repository" event.
///
/// Returned by the stargazers endpoint when requested with the
/// `application/vnd.github.star+json` media type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StargazerEvent {
    /// When the star was given.
    pub starred_at: DateTime<Utc>,
    /// The user who starred; `null` for deleted accounts.
    #[serde(default)]
    pub user: Option<Stargazer>,
}

/// The acting user of a [`StargazerEvent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stargazer {
    /// GitHub handle.
    pub login: String,
}

impl StargazerEvent {
    /// The stargazer's handle, if the account still exists.
    #[must_use]
    pub fn login(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.login.as_str())
    }
}

/// Returns `true` if `events` never get newer from one item to the next.
///
/// Empty and single-item pages are trivially ordered.
#[must_use]
pub fn is_newest_first(events: &[StargazerEvent]) -> bool {
    events
        .windows(2)
        .all(|pair| pair[0].starred_at >= pair[1].starred_at)
}

/// How far the stargazer order can be relied upon to stop paging early.
///
/// Early termination looks at the last event of a page and stops once it
/// predates the window. That is only sound when events arrive newest first.
///
/// # Examples
///
/// ```
/// use stargaze_protocol::EventOrdering;
///
/// let ordering: EventOrdering = "full-scan".parse().unwrap();
/// assert_eq!(ordering, EventOrdering::FullScan);
/// assert_eq!(EventOrdering::default(), EventOrdering::NewestFirst);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventOrdering {
    /// Stop early only on pages verified to be newest first; an out-of-order
    /// page disables early termination for the rest of that repository.
    #[default]
    NewestFirst,
    /// Stop early without checking page order.
    Trusted,
    /// Never stop early.
    FullScan,
}

impl EventOrdering {
    /// The kebab-case name used in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NewestFirst => "newest-first",
            Self::Trusted => "trusted",
            Self::FullScan => "full-scan",
        }
    }
}

impl fmt::Display for EventOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventOrdering {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest-first" => Ok(Self::NewestFirst),
            "trusted" => Ok(Self::Trusted),
            "full-scan" => Ok(Self::FullScan),
            other => Err(ProtocolError::UnknownOrdering(other.to_string())),
        }
    }
}
