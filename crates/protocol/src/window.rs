//! The date window used to decide which stars count as "new".
//!
//! A [`DateWindow`] is one calendar year: from local midnight on 1 January
//! (inclusive) to local midnight on 1 January of the following year
//! (exclusive). It is computed once at the start of a run and every
//! comparison uses those same instants, so a run that straddles New Year's
//! Eve still counts against one year.

use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone, Utc};

use crate::error::{ProtocolError, Result};

/// One calendar year, used to decide which stars to count.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use stargaze_protocol::DateWindow;
///
/// let window = DateWindow::for_year_in(2026, &Utc).unwrap();
/// let boundary = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
///
/// assert!(window.contains(boundary));
/// assert!(window.is_before(boundary - chrono::Duration::seconds(1)));
/// assert!(!window.contains(Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateWindow {
    year: i32,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DateWindow {
    /// Creates the window for the current year on the local clock.
    ///
    /// # Errors
    ///
    /// Returns an error only if the local calendar yields a year chrono
    /// cannot represent.
    pub fn current() -> Result<Self> {
        Self::for_year(Local::now().year())
    }

    /// Creates the window starting at local midnight on 1 January of `year`.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::InvalidYear`] if the year is out of range.
    pub fn for_year(year: i32) -> Result<Self> {
        Self::for_year_in(year, &Local)
    }

    /// Creates the window covering `year` in `tz`, from midnight on 1 January
    /// up to midnight on 1 January of the next year.
    ///
    /// When midnight is ambiguous in `tz` the earlier instant is used.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::InvalidYear`] if either boundary is out of
    /// range or midnight does not exist in `tz`.
    pub fn for_year_in<Tz: TimeZone>(year: i32, tz: &Tz) -> Result<Self> {
        let start = new_year_midnight(year, tz).ok_or(ProtocolError::InvalidYear(year))?;
        let end = year
            .checked_add(1)
            .and_then(|next| new_year_midnight(next, tz))
            .ok_or(ProtocolError::InvalidYear(year))?;

        Ok(Self { year, start, end })
    }

    /// The calendar year this window covers.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// The inclusive lower boundary.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// The exclusive upper boundary.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Returns `true` if `instant` falls inside the year.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }

    /// Returns `true` if `instant` is at or after the upper boundary.
    #[must_use]
    pub fn is_after(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.end
    }

    /// Returns `true` if `instant` is strictly before the lower boundary.
    #[must_use]
    pub fn is_before(&self, instant: DateTime<Utc>) -> bool {
        instant < self.start
    }
}

fn new_year_midnight<Tz: TimeZone>(year: i32, tz: &Tz) -> Option<DateTime<Utc>> {
    let midnight = NaiveDate::from_ymd_opt(year, 1, 1)?.and_hms_opt(0, 0, 0)?;
    let local = tz.from_local_datetime(&midnight).earliest()?;
    Some(local.with_timezone(&Utc))
}
