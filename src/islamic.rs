//! Tabular Islamic (Hijri) calendar.
//!
//! Alternating 30- and 29-day months; Dhu al-Hijja gains a 30th day in the
//! 11 leap years of each 30-year cycle (years 2, 5, 7, 10, 13, 16, 18, 21,
//! 24, 26, 29). Years before 1 AH use astronomical numbering.
//!
//! The half-day month length (29.5) is kept exact by working in half days.

use crate::arith::{ceil_div, floor_div, floor_mod, ymd};
use crate::consts::{
    ISLAMIC_CYCLE_YEARS, ISLAMIC_DAYS_PER_COMMON_YEAR, ISLAMIC_DAYS_PER_CYCLE, ISLAMIC_EPOCH,
    ISLAMIC_LEAP_YEARS_PER_CYCLE,
};
use crate::types::Ymd;

/// Dhu al-Hijja
const LAST_MONTH: u8 = 12;

/// Half days in the 29.5-day mean month
const HALF_DAYS_PER_MONTH: i64 = 59;

/// Converts an Islamic date to a serial day number. The date is not
/// validated.
pub fn to_sdn(year: i32, month: u8, day: u8) -> i64 {
    let year = i64::from(year);
    i64::from(day)
        + ceil_div(HALF_DAYS_PER_MONTH * (i64::from(month) - 1), 2)
        + (year - 1) * ISLAMIC_DAYS_PER_COMMON_YEAR
        + floor_div(3 + ISLAMIC_LEAP_YEARS_PER_CYCLE * year, ISLAMIC_CYCLE_YEARS)
        + ISLAMIC_EPOCH
}

/// Converts a serial day number to an Islamic `(year, month, day)`.
pub fn from_sdn(sdn: i64) -> Ymd {
    let days_since_epoch = sdn - (ISLAMIC_EPOCH + 1);
    let year = narrow(floor_div(
        ISLAMIC_CYCLE_YEARS * days_since_epoch + 10_646,
        ISLAMIC_DAYS_PER_CYCLE,
    ));

    // counted from the 30th day of the year
    let into_year = sdn - (29 + to_sdn(year, 1, 1));
    let month = (ceil_div(2 * into_year, HALF_DAYS_PER_MONTH) + 1).min(i64::from(LAST_MONTH));

    let day = sdn - to_sdn(year, narrow_month(month), 1) + 1;
    ymd(i64::from(year), month, day)
}

/// Leap years add a day to Dhu al-Hijjah: 11 in every 30-year cycle.
pub const fn is_leap_year(year: i32) -> bool {
    let year = year as i64;
    floor_mod(ISLAMIC_LEAP_YEARS_PER_CYCLE * year + 14, ISLAMIC_CYCLE_YEARS) < ISLAMIC_LEAP_YEARS_PER_CYCLE
}

/// Days in `month` of `year`, or `None` if `month` is not `1..=12`.
pub const fn days_in_month(year: i32, month: u8) -> Option<u8> {
    match month {
        LAST_MONTH if is_leap_year(year) => Some(30),
        1..=12 if month % 2 == 1 => Some(30),
        1..=12 => Some(29),
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn narrow(year: i64) -> i32 {
    year as i32
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn narrow_month(month: i64) -> u8 {
    month as u8
}
