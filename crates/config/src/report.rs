//! Report settings.

use serde::{Deserialize, Serialize};
use stargaze_protocol::DEFAULT_TOP;

use crate::error::{ConfigError, Result};

/// Earliest year accepted as a report year.
pub const MIN_YEAR: i32 = 2008;

/// Latest year accepted as a report year.
pub const MAX_YEAR: i32 = 9999;

/// What the final summary covers.
///
/// # Examples
///
/// ```
/// use stargaze_config::ReportConfig;
///
/// let config = ReportConfig::default();
/// assert_eq!(config.top, 10);
/// assert_eq!(config.year, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Number of repositories listed in the highlights table.
    #[serde(default = "default_top")]
    pub top: usize,

    /// Calendar year to report on. `None` means the current local year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

fn default_top() -> usize {
    DEFAULT_TOP
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top: DEFAULT_TOP,
            year: None,
        }
    }
}

impl ReportConfig {
    /// Validates the report configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidReport`] if `top` is zero or `year` is
    /// outside `2008..=9999`.
    pub fn validate(&self) -> Result<()> {
        if self.top == 0 {
            return Err(ConfigError::InvalidReport {
                reason: "top must be at least 1".to_string(),
            });
        }

        if let Some(year) = self.year
            && !(MIN_YEAR..=MAX_YEAR).contains(&year)
        {
            return Err(ConfigError::InvalidReport {
                reason: format!("year {year} is outside {MIN_YEAR}..={MAX_YEAR}"),
            });
        }

        Ok(())
    }
}
