use crate::consts::{DAYS_PER_WEEK, MAX_SDN, MIN_SDN};
use crate::prelude::*;
use crate::{DateError, french, gregorian, hebrew, islamic, julian, persian};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};
use std::str::FromStr;

/// A `(year, month, day)` triple as produced by every `from_sdn` converter.
pub type Ymd = (i32, u8, u8);

/// The calendars a date can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Calendar {
    /// Proleptic Gregorian
    #[display(fmt = "gregorian")]
    Gregorian,
    /// Proleptic Julian
    #[display(fmt = "julian")]
    Julian,
    /// Hebrew lunisolar
    #[display(fmt = "hebrew")]
    Hebrew,
    /// French Republican
    #[display(fmt = "french")]
    French,
    /// Persian (Jalali), arithmetic
    #[display(fmt = "persian")]
    Persian,
    /// Islamic (Hijri), tabular
    #[display(fmt = "islamic")]
    Islamic,
}

impl Calendar {
    /// Every supported calendar
    pub const ALL: [Self; 6] = [
        Self::Gregorian,
        Self::Julian,
        Self::Hebrew,
        Self::French,
        Self::Persian,
        Self::Islamic,
    ];

    /// Lowercase name, as used by `Display`, `FromStr` and serde
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gregorian => "gregorian",
            Self::Julian => "julian",
            Self::Hebrew => "hebrew",
            Self::French => "french",
            Self::Persian => "persian",
            Self::Islamic => "islamic",
        }
    }

    /// Whether year 0 exists. Gregorian, Julian and Persian go straight from
    /// year -1 to year 1.
    pub const fn has_year_zero(self) -> bool {
        matches!(self, Self::Hebrew | Self::French | Self::Islamic)
    }

    /// Converts `(year, month, day)` in this calendar to a serial day number
    /// without validating it.
    pub fn to_sdn(self, year: i32, month: u8, day: u8) -> i64 {
        match self {
            Self::Gregorian => gregorian::to_sdn(year, month, day),
            Self::Julian => julian::to_sdn(year, month, day),
            Self::Hebrew => hebrew::to_sdn(year, month, day),
            Self::French => french::to_sdn(year, month, day),
            Self::Persian => persian::to_sdn(year, month, day),
            Self::Islamic => islamic::to_sdn(year, month, day),
        }
    }

    /// Converts a serial day number to `(year, month, day)` in this calendar.
    /// `sdn` should lie within `MIN_SDN..=MAX_SDN`.
    #[allow(clippy::wrong_self_convention)]
    pub fn from_sdn(self, sdn: i64) -> Ymd {
        match self {
            Self::Gregorian => gregorian::from_sdn(sdn),
            Self::Julian => julian::from_sdn(sdn),
            Self::Hebrew => hebrew::from_sdn(sdn),
            Self::French => french::from_sdn(sdn),
            Self::Persian => persian::from_sdn(sdn),
            Self::Islamic => islamic::from_sdn(sdn),
        }
    }

    /// Whether `year` is a leap year in this calendar.
    pub fn is_leap_year(self, year: i32) -> bool {
        match self {
            Self::Gregorian => gregorian::is_leap_year(year),
            Self::Julian => julian::is_leap_year(year),
            Self::Hebrew => hebrew::is_leap_year(year),
            Self::French => french::is_leap_year(year),
            Self::Persian => persian::is_leap_year(year),
            Self::Islamic => islamic::is_leap_year(year),
        }
    }

    /// Number of months in `year`. Only the Hebrew calendar varies (12 or 13);
    /// the French Republican count includes the complementary days.
    pub fn months_in_year(self, year: i32) -> u8 {
        match self {
            Self::Gregorian | Self::Julian | Self::Persian | Self::Islamic => 12,
            Self::French => 13,
            Self::Hebrew => hebrew::months_in_year(year),
        }
    }

    /// Days in `month` of `year`, or `None` if the year has no such month.
    pub fn days_in_month(self, year: i32, month: u8) -> Option<u8> {
        match self {
            Self::Gregorian => gregorian::days_in_month(year, month),
            Self::Julian => julian::days_in_month(year, month),
            Self::Hebrew => hebrew::days_in_month(year, month),
            Self::French => french::days_in_month(year, month),
            Self::Persian => persian::days_in_month(year, month),
            Self::Islamic => islamic::days_in_month(year, month),
        }
    }
}

impl FromStr for Calendar {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|calendar| calendar.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| DateError::UnknownCalendar(trimmed.to_owned()))
    }
}

/// A serial day number: days since 1 January 4713 BC (Julian), the
/// interchange value between all calendars.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, From, Into, FromStr, Deref,
)]
#[serde(transparent)]
pub struct Sdn(i64);

impl Sdn {
    /// Wraps a raw day number. Use [`Sdn::is_supported`] to check the range.
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// The raw day number
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Whether the value lies in `MIN_SDN..=MAX_SDN`
    pub const fn is_supported(self) -> bool {
        self.0 >= MIN_SDN && self.0 <= MAX_SDN
    }

    /// Day of the week this SDN falls on
    pub const fn weekday(self) -> Weekday {
        Weekday::from_sdn(self.0)
    }

    /// Adds `days`, returning `None` if the result leaves the supported range.
    pub fn checked_add_days(self, days: i64) -> Option<Self> {
        let sdn = Self(self.0.checked_add(days)?);
        sdn.is_supported().then_some(sdn)
    }
}

impl Add<i64> for Sdn {
    type Output = Self;

    fn add(self, days: i64) -> Self::Output {
        Self(self.0 + days)
    }
}

impl Sub for Sdn {
    type Output = i64;

    /// Days from `other` to `self`
    fn sub(self, other: Self) -> Self::Output {
        self.0 - other.0
    }
}

/// Day of the week
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display)]
#[allow(missing_docs)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    const ORDER: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// SDN 0 was a Monday.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn from_sdn(sdn: i64) -> Self {
        Self::ORDER[(sdn + 1).rem_euclid(DAYS_PER_WEEK) as usize]
    }

    /// Days since the preceding Sunday (Sunday = 0)
    pub const fn days_from_sunday(self) -> u8 {
        self as u8
    }
}
