//! Proleptic Julian calendar.
//!
//! Years before 1 AD are numbered `-1` (1 BC), `-2` (2 BC) and so on; there
//! is no year 0. The leap rule is applied to the astronomical year, so 1 BC,
//! 5 BC, 9 BC … are leap years.

use crate::arith::{floor_div, floor_mod, ymd};
use crate::consts::{
    CIVIL_YEAR_SHIFT, DAYS_IN_MONTH, DAYS_PER_4_YEARS, DAYS_PER_5_MONTHS, FEBRUARY,
    FEBRUARY_DAYS_LEAP, JULIAN_SDN_OFFSET, LEAP_YEAR_CYCLE,
};
use crate::types::Ymd;

/// Converts a Julian date to a serial day number. The date is not validated.
pub fn to_sdn(year: i32, month: u8, day: u8) -> i64 {
    let (year, month) = shift_to_march(year, month);
    floor_div(year * DAYS_PER_4_YEARS, 4) + floor_div(month * DAYS_PER_5_MONTHS + 2, 5) + i64::from(day)
        - JULIAN_SDN_OFFSET
}

/// Converts a serial day number to a Julian `(year, month, day)`.
pub fn from_sdn(sdn: i64) -> Ymd {
    let temp = (sdn + JULIAN_SDN_OFFSET) * 4 - 1;
    let year = floor_div(temp, DAYS_PER_4_YEARS);
    let day_of_year = floor_div(floor_mod(temp, DAYS_PER_4_YEARS), 4) + 1;
    shift_from_march(year, day_of_year)
}

/// Every fourth year, counting 1 BC as leap.
pub const fn is_leap_year(year: i32) -> bool {
    astronomical_year(year) % LEAP_YEAR_CYCLE == 0
}

/// Days in `month` of `year`, or `None` if `month` is not `1..=12`.
pub const fn days_in_month(year: i32, month: u8) -> Option<u8> {
    if month == 0 || month > 12 {
        return None;
    }
    if month == FEBRUARY && is_leap_year(year) {
        Some(FEBRUARY_DAYS_LEAP)
    } else {
        Some(DAYS_IN_MONTH[month as usize])
    }
}

/// Maps the BC numbering (`-1` = 1 BC) onto astronomical years (`0` = 1 BC).
pub(crate) const fn astronomical_year(year: i32) -> i32 {
    if year < 0 { year + 1 } else { year }
}

/// Moves the start of the year to March so the leap day falls at its end,
/// and shifts the year far enough that the usual range stays non-negative.
/// Returns `(shifted_year, months_since_march)`.
pub(crate) fn shift_to_march(year: i32, month: u8) -> (i64, i64) {
    let shift = if year < 0 { CIVIL_YEAR_SHIFT + 1 } else { CIVIL_YEAR_SHIFT };
    let year = i64::from(year) + shift;
    let month = i64::from(month);
    if month > 2 { (year, month - 3) } else { (year - 1, month + 9) }
}

/// Inverse of [`shift_to_march`] given the March-based year and its
/// 1-based day of year.
pub(crate) fn shift_from_march(year: i64, day_of_year: i64) -> Ymd {
    let temp = day_of_year * 5 - 3;
    let month = floor_div(temp, DAYS_PER_5_MONTHS);
    let day = floor_div(floor_mod(temp, DAYS_PER_5_MONTHS), 5) + 1;

    let (year, month) = if month < 10 { (year, month + 3) } else { (year + 1, month - 9) };

    // back to BC/AD numbering, skipping year 0
    let year = year - CIVIL_YEAR_SHIFT;
    ymd(if year <= 0 { year - 1 } else { year }, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_dates() {
        struct TestCase {
            ymd: Ymd,
            sdn: i64,
            description: &'static str,
        }

        let cases = [
            TestCase {
                ymd: (-4713, 1, 1),
                sdn: 0,
                description: "Julian day zero",
            },
            TestCase {
                ymd: (1, 1, 1),
                sdn: 1_721_424,
                description: "first day AD",
            },
            TestCase {
                ymd: (1582, 10, 5),
                sdn: 2_299_161,
                description: "day the Gregorian reform took effect",
            },
            TestCase {
                ymd: (1969, 12, 19),
                sdn: 2_440_588,
                description: "Unix epoch",
            },
            TestCase {
                ymd: (2000, 1, 1),
                sdn: 2_451_558,
                description: "Julian new year 2000",
            },
        ];

        for case in &cases {
            let (y, m, d) = case.ymd;
            assert_eq!(to_sdn(y, m, d), case.sdn, "to_sdn: {}", case.description);
            assert_eq!(from_sdn(case.sdn), case.ymd, "from_sdn: {}", case.description);
        }
    }

    #[test]
    fn test_no_year_zero() {
        assert_eq!(from_sdn(to_sdn(1, 1, 1) - 1), (-1, 12, 31));
        assert_eq!(from_sdn(-1), (-4714, 12, 31));
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(1900), "every fourth year, centuries included");
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(-1), "1 BC is astronomical year 0");
        assert!(is_leap_year(-5));
        assert!(!is_leap_year(-4));
    }

    #[test]
    fn test_year_length_matches_leap_rule() {
        for year in -500..500 {
            if year == 0 || year == -1 {
                continue;
            }
            let len = to_sdn(year + 1, 1, 1) - to_sdn(year, 1, 1);
            let expected = if is_leap_year(year) { 366 } else { 365 };
            assert_eq!(len, expected, "year {year}");
        }
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(1900, 2), Some(29));
        assert_eq!(days_in_month(1901, 2), Some(28));
        assert_eq!(days_in_month(1901, 4), Some(30));
        assert_eq!(days_in_month(1901, 12), Some(31));
        assert_eq!(days_in_month(1901, 0), None);
        assert_eq!(days_in_month(1901, 13), None);
    }
}
