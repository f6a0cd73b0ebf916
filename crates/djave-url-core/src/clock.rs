//! Injectable source of "today".
//!
//! Helpers that default to the current date take a [`Clock`] (or a date
//! obtained from one) instead of reading the system time themselves.

use chrono::{FixedOffset, NaiveDate, Offset, Utc};

use crate::settings::Settings;

/// Something that knows what day it is.
pub trait Clock {
    /// Returns the current calendar date.
    fn today(&self) -> NaiveDate;
}

/// The system clock, read at a fixed offset from UTC.
///
/// # Examples
///
/// ```
/// use djave_url_core::clock::{Clock, SystemClock};
///
/// let clock = SystemClock::utc();
/// let _today = clock.today();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    /// A clock reporting the UTC date.
    pub fn utc() -> Self {
        Self {
            offset: Utc.fix(),
        }
    }

    /// A clock reporting the date at `offset_seconds` east of UTC.
    ///
    /// Offsets outside ±24h fall back to UTC.
    pub fn with_offset(offset_seconds: i32) -> Self {
        FixedOffset::east_opt(offset_seconds).map_or_else(Self::utc, |offset| Self { offset })
    }

    /// A clock using `settings.utc_offset_seconds`.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_offset(settings.utc_offset_seconds)
    }

    /// Returns the configured offset.
    pub const fn offset(&self) -> FixedOffset {
        self.offset
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::utc()
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.offset).date_naive()
    }
}

/// A clock frozen on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn test_fixed_clock() {
        let day = NaiveDate::from_ymd_opt(2018, 2, 15).unwrap();
        assert_eq!(FixedClock(day).today(), day);
    }

    #[test]
    fn test_system_clock_within_a_day_of_utc() {
        let utc = Utc::now().date_naive();
        let east = SystemClock::with_offset(14 * 3600).today();
        let west = SystemClock::with_offset(-12 * 3600).today();
        assert!(east - utc <= Duration::days(1));
        assert!(utc - west <= Duration::days(1));
    }

    #[test]
    fn test_invalid_offset_falls_back_to_utc() {
        let clock = SystemClock::with_offset(100 * 3600);
        assert_eq!(clock.offset().local_minus_utc(), 0);
    }

    #[test]
    fn test_from_settings() {
        let settings = Settings {
            utc_offset_seconds: 3600,
            ..Settings::default()
        };
        assert_eq!(
            SystemClock::from_settings(&settings).offset().local_minus_utc(),
            3600
        );
    }

    #[test]
    fn test_clock_by_reference() {
        let day = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let clock = FixedClock(day);
        let by_ref: &dyn Clock = &clock;
        assert_eq!(by_ref.today(), day);
    }
}
