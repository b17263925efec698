//! Fetch tuning: how many repositories are counted at once and how far each
//! stargazer scan may trust the API's ordering.

use serde::{Deserialize, Serialize};
pub use stargaze_protocol::DEFAULT_CONCURRENCY;
use stargaze_protocol::EventOrdering;

use crate::error::{ConfigError, Result};

/// Minimum allowed concurrency.
pub const MIN_CONCURRENCY: usize = 1;

/// Maximum allowed concurrency.
///
/// GitHub's secondary rate limits start to bite well before this.
pub const MAX_CONCURRENCY: usize = 20;

/// Configuration for the stargazer fetch phase.
///
/// # Examples
///
/// ```
/// use stargaze_config::FetchConfig;
/// use stargaze_protocol::EventOrdering;
///
/// let config = FetchConfig::default();
/// assert_eq!(config.concurrency, 5);
/// assert_eq!(config.ordering, EventOrdering::NewestFirst);
///
/// let config = FetchConfig::with_concurrency(2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Number of repositories whose stargazers are paged at the same time.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Early-termination policy for stargazer pages.
    #[serde(default)]
    pub ordering: EventOrdering,
}

fn default_concurrency() -> usize {
    DEFAULT_CONCURRENCY
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            ordering: EventOrdering::default(),
        }
    }
}

impl FetchConfig {
    /// Creates a fetch configuration with the given concurrency.
    #[must_use]
    pub fn with_concurrency(concurrency: usize) -> Self {
        Self {
            concurrency,
            ..Self::default()
        }
    }

    /// Validates the fetch configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConcurrency`] if the concurrency is
    /// outside `1..=20`.
    pub fn validate(&self) -> Result<()> {
        if self.concurrency < MIN_CONCURRENCY {
            return Err(ConfigError::InvalidConcurrency {
                reason: format!(
                    "concurrency {} is below minimum of {}",
                    self.concurrency, MIN_CONCURRENCY
                ),
            });
        }

        if self.concurrency > MAX_CONCURRENCY {
            return Err(ConfigError::InvalidConcurrency {
                reason: format!(
                    "concurrency {} exceeds maximum of {}",
                    self.concurrency, MAX_CONCURRENCY
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = FetchConfig::default();
        assert_eq!(config.concurrency, DEFAULT_CONCURRENCY);
        assert_eq!(config.ordering, EventOrdering::NewestFirst);
    }

    #[test]
    fn validate_at_boundaries() {
        assert!(FetchConfig::with_concurrency(MIN_CONCURRENCY).validate().is_ok());
        assert!(FetchConfig::with_concurrency(MAX_CONCURRENCY).validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero() {
        let err = FetchConfig::with_concurrency(0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConcurrency { .. }));
    }

    #[test]
    fn validate_rejects_above_maximum() {
        let err = FetchConfig::with_concurrency(21).validate().unwrap_err();
        assert!(err.to_string().contains("exceeds maximum of 20"));
    }

    #[test]
    fn deserialize_partial() {
        let config: FetchConfig = serde_json::from_str(r#"{"ordering": "full-scan"}"#).unwrap();
        assert_eq!(config.concurrency, DEFAULT_CONCURRENCY);
        assert_eq!(config.ordering, EventOrdering::FullScan);
    }
}
