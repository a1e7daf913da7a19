//! Persian (Jalali) calendar, arithmetic 2820-year cycle.
//!
//! Six months of 31 days, five of 30, and Esfand with 29 days (30 in leap
//! years). There is no year 0: year `-1` immediately precedes year `1`.
//!
//! The usual statement of these formulas mixes floating point with
//! `floor`/`ceil`; here every step is an integer floor or ceiling division,
//! which is exact and keeps the round trip identity.

use crate::arith::{ceil_div, floor_div, floor_mod, ymd};
use crate::consts::{PERSIAN_CYCLE_BASE, PERSIAN_CYCLE_YEARS, PERSIAN_DAYS_PER_CYCLE, PERSIAN_EPOCH};
use crate::types::Ymd;

/// Last month of the year
const ESFAND: u8 = 12;

/// Converts a Persian date to a serial day number. The date is not
/// validated.
pub fn to_sdn(year: i32, month: u8, day: u8) -> i64 {
    sdn_of(i64::from(year), i64::from(month), i64::from(day))
}

/// Widened body of [`to_sdn`]. Leap checks on `i32::MAX` need the year
/// after it.
fn sdn_of(year: i64, month: i64, day: i64) -> i64 {
    let epoch_base = year - if year >= 0 { PERSIAN_CYCLE_BASE } else { PERSIAN_CYCLE_BASE - 1 };
    let epoch_year = PERSIAN_CYCLE_BASE + floor_mod(epoch_base, PERSIAN_CYCLE_YEARS);

    let month_days = if month <= 7 { (month - 1) * 31 } else { (month - 1) * 30 + 6 };

    month_days
        + floor_div(epoch_year * 682 - 110, 2816)
        + (epoch_year - 1) * 365
        + day
        + floor_div(epoch_base, PERSIAN_CYCLE_YEARS) * PERSIAN_DAYS_PER_CYCLE
        + PERSIAN_EPOCH
}

/// Converts a serial day number to a Persian `(year, month, day)`.
pub fn from_sdn(sdn: i64) -> Ymd {
    let days = sdn - cycle_start();
    let cycle = floor_div(days, PERSIAN_DAYS_PER_CYCLE);
    let day_in_cycle = floor_mod(days, PERSIAN_DAYS_PER_CYCLE);

    let year_in_cycle = if day_in_cycle == PERSIAN_DAYS_PER_CYCLE - 1 {
        PERSIAN_CYCLE_YEARS
    } else {
        let a = day_in_cycle / 366;
        let b = day_in_cycle % 366;
        (2134 * a + 2816 * b + 2815) / 1_028_522 + a + 1
    };

    let year = year_in_cycle + PERSIAN_CYCLE_YEARS * cycle + PERSIAN_CYCLE_BASE;
    let year = if year <= 0 { year - 1 } else { year };
    let year = narrow(year);

    let day_of_year = sdn - to_sdn(year, 1, 1) + 1;
    let month = if day_of_year <= 186 { ceil_div(day_of_year, 31) } else { ceil_div(day_of_year - 6, 30) };
    let day = sdn - to_sdn(year, narrow_month(month), 1) + 1;

    ymd(i64::from(year), month, day)
}

/// A year is leap when it has 366 days.
pub fn is_leap_year(year: i32) -> bool {
    let year = i64::from(year);
    let next = if year == -1 { 1 } else { year + 1 };
    sdn_of(next, 1, 1) - sdn_of(year, 1, 1) == 366
}

/// Days in `month` of `year`, or `None` if `month` is not `1..=12`.
pub fn days_in_month(year: i32, month: u8) -> Option<u8> {
    match month {
        1..=6 => Some(31),
        7..=11 => Some(30),
        ESFAND if is_leap_year(year) => Some(30),
        ESFAND => Some(29),
        _ => None,
    }
}

/// SDN of 1 Farvardin 475, the start of the grand cycle the inverse
/// formula counts from.
fn cycle_start() -> i64 {
    to_sdn(475, 1, 1)
}

#[allow(clippy::cast_possible_truncation)]
const fn narrow(year: i64) -> i32 {
    year as i32
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn narrow_month(month: i64) -> u8 {
    month as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_dates() {
        struct TestCase {
            ymd: Ymd,
            gregorian: Ymd,
            description: &'static str,
        }

        let cases = [
            TestCase {
                ymd: (1, 1, 1),
                gregorian: (622, 3, 22),
                description: "epoch",
            },
            TestCase {
                ymd: (1348, 10, 11),
                gregorian: (1970, 1, 1),
                description: "Unix epoch",
            },
            TestCase {
                ymd: (1378, 10, 11),
                gregorian: (2000, 1, 1),
                description: "J2000",
            },
            TestCase {
                ymd: (1403, 1, 1),
                gregorian: (2024, 3, 20),
                description: "Nowruz 1403",
            },
            TestCase {
                ymd: (1403, 12, 29),
                gregorian: (2025, 3, 19),
                description: "last day of common year 1403",
            },
            TestCase {
                ymd: (1404, 12, 30),
                gregorian: (2026, 3, 20),
                description: "leap day of 1404",
            },
        ];

        for case in &cases {
            let (y, m, d) = case.ymd;
            let (gy, gm, gd) = case.gregorian;
            let sdn = crate::gregorian::to_sdn(gy, gm, gd);
            assert_eq!(to_sdn(y, m, d), sdn, "to_sdn: {}", case.description);
            assert_eq!(from_sdn(sdn), case.ymd, "from_sdn: {}", case.description);
        }
    }

    #[test]
    fn test_epoch_sdn() {
        assert_eq!(to_sdn(1, 1, 1), 1_948_321);
        assert_eq!(cycle_start(), 2_121_446);
    }

    #[test]
    fn test_no_year_zero() {
        assert_eq!(from_sdn(to_sdn(1, 1, 1) - 1), (-1, 12, 30));
        assert!(is_leap_year(-1));
    }

    #[test]
    fn test_month_boundaries() {
        // Shahrivar (31 days) into Mehr (30 days)
        assert_eq!(from_sdn(to_sdn(1402, 6, 31) + 1), (1402, 7, 1));
        assert_eq!(from_sdn(to_sdn(1402, 7, 30) + 1), (1402, 8, 1));
        assert_eq!(from_sdn(to_sdn(1402, 12, 29) + 1), (1403, 1, 1));
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(1404));
        assert!(!is_leap_year(1402));
        assert!(!is_leap_year(1403));
        assert_eq!(days_in_month(1404, 12), Some(30));
        assert_eq!(days_in_month(1402, 12), Some(29));
        assert_eq!(days_in_month(1402, 6), Some(31));
        assert_eq!(days_in_month(1402, 7), Some(30));
        assert_eq!(days_in_month(1402, 13), None);
        assert_eq!(days_in_month(1402, 0), None);
    }

    #[test]
    fn test_leap_years_per_cycle() {
        // 683 leap years in every 2820-year cycle
        let leaps = (475..475 + 2820).filter(|&y| is_leap_year(y)).count();
        assert_eq!(leaps, 683);
    }

    #[test]
    fn test_leap_year_at_i32_limits() {
        // The year after i32::MAX is computed in i64
        for year in [i32::MIN, i32::MIN + 1, i32::MAX - 1, i32::MAX] {
            let expected = sdn_of(i64::from(year) + 1, 1, 1) - to_sdn(year, 1, 1) == 366;
            assert_eq!(is_leap_year(year), expected, "year {year}");
            assert!(matches!(days_in_month(year, 12), Some(29 | 30)), "year {year}");
        }
    }
}
