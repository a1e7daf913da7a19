//! French Republican calendar.
//!
//! Twelve months of 30 days followed by a 13th month of complementary days
//! (5, or 6 in every fourth year). The leap rule is the plain four-year
//! cycle with years III, VII, XI … as leap years; the calendar is extended
//! proleptically with astronomical numbering (year 0 precedes year I).

use crate::arith::{floor_div, floor_mod, ymd};
use crate::consts::{
    DAYS_PER_4_YEARS, FRENCH_COMPLEMENTARY_DAYS, FRENCH_COMPLEMENTARY_MONTH, FRENCH_DAYS_PER_MONTH,
    FRENCH_SDN_OFFSET, LEAP_YEAR_CYCLE,
};
use crate::types::Ymd;

/// Converts a French Republican date to a serial day number. The date is not
/// validated.
pub fn to_sdn(year: i32, month: u8, day: u8) -> i64 {
    floor_div(i64::from(year) * DAYS_PER_4_YEARS, 4)
        + (i64::from(month) - 1) * i64::from(FRENCH_DAYS_PER_MONTH)
        + i64::from(day)
        + FRENCH_SDN_OFFSET
}

/// Converts a serial day number to a French Republican `(year, month, day)`.
pub fn from_sdn(sdn: i64) -> Ymd {
    let temp = (sdn - FRENCH_SDN_OFFSET) * 4 - 1;
    let year = floor_div(temp, DAYS_PER_4_YEARS);
    let day_of_year = floor_div(floor_mod(temp, DAYS_PER_4_YEARS), 4);

    let month_len = i64::from(FRENCH_DAYS_PER_MONTH);
    ymd(year, day_of_year / month_len + 1, day_of_year % month_len + 1)
}

/// Leap ("sextile") years have six complementary days.
pub const fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(LEAP_YEAR_CYCLE) == LEAP_YEAR_CYCLE - 1
}

/// Days in `month` of `year`, or `None` if `month` is not `1..=13`.
pub const fn days_in_month(year: i32, month: u8) -> Option<u8> {
    match month {
        1..=12 => Some(FRENCH_DAYS_PER_MONTH),
        FRENCH_COMPLEMENTARY_MONTH if is_leap_year(year) => Some(FRENCH_COMPLEMENTARY_DAYS + 1),
        FRENCH_COMPLEMENTARY_MONTH => Some(FRENCH_COMPLEMENTARY_DAYS),
        _ => None,
    }
}
