//! Conversions between six calendars through serial day numbers (SDN).
//!
//! An SDN counts days from 1 January 4713 BC in the proleptic Julian
//! calendar, so every date in every calendar maps to one integer that can be
//! compared, subtracted and converted back.
//!
//! The per-calendar modules expose the raw `to_sdn`/`from_sdn` kernels, which
//! do not validate. [`CalendarDate`] is the validated value built on top.
//!
//! ```
//! use sdn_calendar::{Calendar, CalendarDate};
//!
//! let date = CalendarDate::new(Calendar::Gregorian, 1970, 1, 1).unwrap();
//! assert_eq!(date.to_sdn().get(), 2_440_588);
//!
//! let hebrew = date.to_calendar(Calendar::Hebrew);
//! assert_eq!((hebrew.year(), hebrew.month(), hebrew.day()), (5730, 4, 23));
//! ```

pub mod arith;
mod consts;
pub mod french;
pub mod gregorian;
pub mod hebrew;
pub mod islamic;
pub mod julian;
pub mod persian;
mod prelude;
mod types;

pub use consts::*;
pub use french::{from_sdn as french_from_sdn, to_sdn as french_to_sdn};
pub use gregorian::{from_sdn as gregorian_from_sdn, to_sdn as gregorian_to_sdn};
pub use hebrew::{from_sdn as hebrew_from_sdn, to_sdn as hebrew_to_sdn};
pub use islamic::{from_sdn as islamic_from_sdn, to_sdn as islamic_to_sdn};
pub use julian::{from_sdn as julian_from_sdn, to_sdn as julian_to_sdn};
pub use persian::{from_sdn as persian_from_sdn, to_sdn as persian_to_sdn};
pub use types::{Calendar, Sdn, Weekday, Ymd};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Error type for building and parsing calendar dates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Year 0 in a calendar that goes from -1 to 1.
    #[error("Invalid year: {calendar} has no year {year}")]
    InvalidYear {
        /// Calendar the date was given in
        calendar: Calendar,
        /// The rejected year
        year: i32,
    },

    /// The year has no such month.
    #[error("Invalid month: {calendar} year {year} has no month {month}")]
    InvalidMonth {
        /// Calendar the date was given in
        calendar: Calendar,
        /// Year of the date
        year: i32,
        /// The rejected month
        month: u8,
    },

    /// Day 0 or a day past the end of the month.
    #[error("Invalid day {day} for {calendar} {year}-{month:02} (must be 1-{max})")]
    InvalidDay {
        /// Calendar the date was given in
        calendar: Calendar,
        /// Year of the date
        year: i32,
        /// Month of the date
        month: u8,
        /// The rejected day
        day: u8,
        /// Days in the month
        max: u8,
    },

    /// The date falls outside `MIN_SDN..=MAX_SDN`.
    #[error("SDN {sdn} is outside the supported range {}..={}", MIN_SDN, MAX_SDN)]
    OutOfRange {
        /// SDN of the rejected date
        sdn: i64,
    },

    /// Calendar name not recognized.
    #[error("Unknown calendar: {0:?}")]
    UnknownCalendar(String),
}

/// A day in one of the supported calendars.
///
/// Only constructed through validation, so the fields always name a day that
/// exists and whose SDN lies in `MIN_SDN..=MAX_SDN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{} {}-{:02}-{:02}", calendar, year, month, day)]
#[serde(try_from = "CalendarDateRepr", into = "CalendarDateRepr")]
pub struct CalendarDate {
    calendar: Calendar,
    year: i32,
    month: u8,
    day: u8,
    sdn: Sdn,
}

impl CalendarDate {
    /// Validates `(year, month, day)` in `calendar`.
    ///
    /// # Errors
    /// Returns the first problem found: a year 0 where the calendar has
    /// none, a month the year does not have, a day past the end of the
    /// month, or a date outside the supported SDN range.
    pub fn new(calendar: Calendar, year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if year == 0 && !calendar.has_year_zero() {
            return Err(DateError::InvalidYear { calendar, year });
        }
        let max = calendar
            .days_in_month(year, month)
            .ok_or(DateError::InvalidMonth { calendar, year, month })?;
        if day < MIN_DAY || day > max {
            return Err(DateError::InvalidDay {
                calendar,
                year,
                month,
                day,
                max,
            });
        }

        let sdn = Sdn::new(calendar.to_sdn(year, month, day));
        if !sdn.is_supported() {
            return Err(DateError::OutOfRange { sdn: sdn.get() });
        }

        Ok(Self {
            calendar,
            year,
            month,
            day,
            sdn,
        })
    }

    /// The date in `calendar` that falls on `sdn`.
    ///
    /// # Errors
    /// Returns [`DateError::OutOfRange`] if `sdn` is not supported.
    pub fn from_sdn(calendar: Calendar, sdn: Sdn) -> Result<Self, DateError> {
        if !sdn.is_supported() {
            return Err(DateError::OutOfRange { sdn: sdn.get() });
        }
        Ok(Self::from_supported_sdn(calendar, sdn))
    }

    fn from_supported_sdn(calendar: Calendar, sdn: Sdn) -> Self {
        let (year, month, day) = calendar.from_sdn(sdn.get());
        Self {
            calendar,
            year,
            month,
            day,
            sdn,
        }
    }

    /// Calendar the date is expressed in
    pub const fn calendar(self) -> Calendar {
        self.calendar
    }

    /// Year, numbered as `calendar` numbers them
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Month, starting at 1
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Day of the month, starting at 1
    pub const fn day(self) -> u8 {
        self.day
    }

    /// `(year, month, day)`
    pub const fn ymd(self) -> Ymd {
        (self.year, self.month, self.day)
    }

    /// Serial day number of the date
    pub const fn to_sdn(self) -> Sdn {
        self.sdn
    }

    /// The same day expressed in `calendar`.
    pub fn to_calendar(self, calendar: Calendar) -> Self {
        if calendar == self.calendar {
            return self;
        }
        Self::from_supported_sdn(calendar, self.sdn)
    }

    /// Day of the week, the same in every calendar
    pub const fn weekday(self) -> Weekday {
        self.sdn.weekday()
    }

    /// Whether the date's year is a leap year in its calendar
    pub fn is_leap_year(self) -> bool {
        self.calendar.is_leap_year(self.year)
    }

    /// Moves the date by `days` within its calendar. Returns `None` if the
    /// result is outside the supported range.
    pub fn checked_add_days(self, days: i64) -> Option<Self> {
        let sdn = self.sdn.checked_add_days(days)?;
        Some(Self::from_supported_sdn(self.calendar, sdn))
    }

    /// Days from `self` to `other`; negative if `other` is earlier. The
    /// calendars need not match.
    pub fn days_until(self, other: Self) -> i64 {
        other.sdn - self.sdn
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Chronological first, then by calendar for the same day.
        self.sdn.cmp(&other.sdn).then_with(|| self.calendar.cmp(&other.calendar))
    }
}

impl TryFrom<(Calendar, i32, u8, u8)> for CalendarDate {
    type Error = DateError;

    fn try_from(value: (Calendar, i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2, value.3)
    }
}

impl From<CalendarDate> for Sdn {
    fn from(date: CalendarDate) -> Self {
        date.sdn
    }
}

/// Serialized form of [`CalendarDate`]; the SDN is recomputed on the way in.
#[derive(Serialize, Deserialize)]
struct CalendarDateRepr {
    calendar: Calendar,
    year: i32,
    month: u8,
    day: u8,
}

impl From<CalendarDate> for CalendarDateRepr {
    fn from(date: CalendarDate) -> Self {
        Self {
            calendar: date.calendar,
            year: date.year,
            month: date.month,
            day: date.day,
        }
    }
}

impl TryFrom<CalendarDateRepr> for CalendarDate {
    type Error = DateError;

    fn try_from(repr: CalendarDateRepr) -> Result<Self, Self::Error> {
        Self::new(repr.calendar, repr.year, repr.month, repr.day)
    }
}
