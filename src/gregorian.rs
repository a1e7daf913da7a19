//! Proleptic Gregorian calendar.
//!
//! Uses the same BC numbering as [`crate::julian`]: `-1` is 1 BC and there is
//! no year 0.

use crate::arith::{floor_div, floor_mod};
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_PER_400_YEARS, DAYS_PER_4_YEARS, DAYS_PER_5_MONTHS,
    FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, GREGORIAN_SDN_OFFSET, LEAP_YEAR_CYCLE,
};
use crate::julian::{astronomical_year, shift_from_march, shift_to_march};
use crate::types::Ymd;

/// Converts a Gregorian date to a serial day number. The date is not
/// validated.
pub fn to_sdn(year: i32, month: u8, day: u8) -> i64 {
    let (year, month) = shift_to_march(year, month);
    floor_div(floor_div(year, 100) * DAYS_PER_400_YEARS, 4)
        + floor_div(floor_mod(year, 100) * DAYS_PER_4_YEARS, 4)
        + floor_div(month * DAYS_PER_5_MONTHS + 2, 5)
        + i64::from(day)
        - GREGORIAN_SDN_OFFSET
}

/// Converts a serial day number to a Gregorian `(year, month, day)`.
pub fn from_sdn(sdn: i64) -> Ymd {
    let temp = (sdn + GREGORIAN_SDN_OFFSET) * 4 - 1;

    let century = floor_div(temp, DAYS_PER_400_YEARS);
    let temp = floor_div(floor_mod(temp, DAYS_PER_400_YEARS), 4) * 4 + 3;

    let year = century * 100 + floor_div(temp, DAYS_PER_4_YEARS);
    let day_of_year = floor_div(floor_mod(temp, DAYS_PER_4_YEARS), 4) + 1;
    shift_from_march(year, day_of_year)
}

/// Every fourth year, except centuries not divisible by 400. 1 BC is leap.
pub const fn is_leap_year(year: i32) -> bool {
    let year = astronomical_year(year);
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
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
                ymd: (-4714, 11, 24),
                sdn: 0,
                description: "Julian day zero",
            },
            TestCase {
                ymd: (-1, 12, 31),
                sdn: 1_721_425,
                description: "last day BC",
            },
            TestCase {
                ymd: (1, 1, 1),
                sdn: 1_721_426,
                description: "first day AD",
            },
            TestCase {
                ymd: (1582, 10, 15),
                sdn: 2_299_161,
                description: "first day of the Gregorian reform",
            },
            TestCase {
                ymd: (1970, 1, 1),
                sdn: 2_440_588,
                description: "Unix epoch",
            },
            TestCase {
                ymd: (2000, 1, 1),
                sdn: 2_451_545,
                description: "J2000",
            },
            TestCase {
                ymd: (2024, 2, 29),
                sdn: 2_460_370,
                description: "leap day 2024",
            },
        ];

        for case in &cases {
            let (y, m, d) = case.ymd;
            assert_eq!(to_sdn(y, m, d), case.sdn, "to_sdn: {}", case.description);
            assert_eq!(from_sdn(case.sdn), case.ymd, "from_sdn: {}", case.description);
        }
    }

    #[test]
    fn test_negative_sdn_extends_proleptically() {
        assert_eq!(from_sdn(-1), (-4714, 11, 23));
        assert_eq!(to_sdn(-4714, 11, 23), -1);
        let sdn = to_sdn(-10_000, 3, 1);
        assert!(sdn < 0);
        assert_eq!(from_sdn(sdn), (-10_000, 3, 1));
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: i32,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2024,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2023,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2100,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: -1,
                is_leap: true,
                description: "1 BC is astronomical year 0",
            },
            TestCase {
                year: -101,
                is_leap: false,
                description: "101 BC is astronomical year -100",
            },
            TestCase {
                year: -401,
                is_leap: true,
                description: "401 BC is astronomical year -400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description
            );
        }
    }

    #[test]
    fn test_year_length_matches_leap_rule() {
        for year in -1000..1000 {
            if year == 0 || year == -1 {
                continue;
            }
            let len = to_sdn(year + 1, 1, 1) - to_sdn(year, 1, 1);
            let expected = if is_leap_year(year) { 366 } else { 365 };
            assert_eq!(len, expected, "year {year}");
        }
    }

    #[test]
    fn test_february_across_leap_boundaries() {
        assert_eq!(to_sdn(2000, 3, 1) - to_sdn(2000, 2, 28), 2);
        assert_eq!(to_sdn(1900, 3, 1) - to_sdn(1900, 2, 28), 1);
        assert_eq!(to_sdn(2024, 3, 1) - to_sdn(2024, 2, 28), 2);
        assert_eq!(days_in_month(2000, 2), Some(29));
        assert_eq!(days_in_month(1900, 2), Some(28));
        assert_eq!(days_in_month(2024, 2), Some(29));
    }

    #[test]
    fn test_days_in_month_rejects_bad_months() {
        assert_eq!(days_in_month(2024, 0), None);
        assert_eq!(days_in_month(2024, 13), None);
        for month in [1, 3, 5, 7, 8, 10, 12] {
            assert_eq!(days_in_month(2023, month), Some(31), "Month {month}");
        }
        for month in [4, 6, 9, 11] {
            assert_eq!(days_in_month(2023, month), Some(30), "Month {month}");
        }
    }
}
