//! Hebrew (lunisolar) calendar.
//!
//! Months are counted from Tishri: 1 Tishri, 2 Heshvan, 3 Kislev, 4 Tevet,
//! 5 Shevat, 6 Adar (Adar I in leap years), 7 Adar II (leap years only),
//! 8 Nisan through 13 Elul. Year 1 begins on SDN 347 998 (7 October 3761 BC,
//! Julian); earlier years are numbered 0, -1, ….
//!
//! The start of each year is derived from the molad (mean conjunction) of
//! Tishri, counted in halakim from the new moon of creation, and then
//! adjusted by the postponement rules. Everything here is integer arithmetic
//! on days relative to that epoch ("internal days").

use crate::arith::{floor_div, floor_mod, ymd};
use crate::consts::{
    ADAR_I, ADAR_II, AV, ELUL, HALAKIM_PER_DAY, HALAKIM_PER_LUNAR_CYCLE, HALAKIM_PER_METONIC_CYCLE,
    HEBREW_SDN_OFFSET, HESHVAN, IYYAR, KISLEV, MOLAD_AM3_11_20, MOLAD_AM9_32_43, MOLAD_NOON,
    MONTHS_PER_METONIC_CYCLE, MONTHS_PER_YEAR, NEW_MOON_OF_CREATION, NISAN, SHEVAT, SIVAN, TAMMUZ,
    TEVET, TISHRI, YEAR_OFFSET, YEARS_PER_METONIC_CYCLE,
};
use crate::types::{Weekday, Ymd};

/// Rough metonic cycle length in days used to estimate the cycle of a day.
/// Before the epoch the estimate must not overshoot, so it rounds down.
const CYCLE_ESTIMATE_DAYS: i64 = 6940;
const CYCLE_ESTIMATE_DAYS_BEFORE_EPOCH: i64 = 6939;
const CYCLE_ESTIMATE_BIAS: i64 = 310;

/// Search window, in days, for the molad of Tishri preceding a day.
const TISHRI_SEARCH_WINDOW: i64 = 74;

/// Heshvan is 30 days long in "complete" years.
const COMPLETE_YEAR_LENGTHS: [i64; 2] = [355, 385];
/// Kislev is 29 days long in "deficient" years.
const DEFICIENT_YEAR_LENGTHS: [i64; 2] = [353, 383];

/// Months after Kislev with a fixed length, in calendar order.
const LATE_MONTHS_LEAP: [(u8, u8); 10] = [
    (TEVET, 29),
    (SHEVAT, 30),
    (ADAR_I, 30),
    (ADAR_II, 29),
    (NISAN, 30),
    (IYYAR, 29),
    (SIVAN, 30),
    (TAMMUZ, 29),
    (AV, 30),
    (ELUL, 29),
];
const LATE_MONTHS_COMMON: [(u8, u8); 9] = [
    (TEVET, 29),
    (SHEVAT, 30),
    (ADAR_I, 29),
    (NISAN, 30),
    (IYYAR, 29),
    (SIVAN, 30),
    (TAMMUZ, 29),
    (AV, 30),
    (ELUL, 29),
];

/// A moment in internal days plus halakim past the start of that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Molad {
    day: i64,
    halakim: i64,
}

impl Molad {
    /// Molad of Tishri in the first year of `cycle`.
    const fn of_metonic_cycle(cycle: i64) -> Self {
        let total = NEW_MOON_OF_CREATION + cycle * HALAKIM_PER_METONIC_CYCLE;
        Self {
            day: floor_div(total, HALAKIM_PER_DAY),
            halakim: floor_mod(total, HALAKIM_PER_DAY),
        }
    }

    const fn advance(self, months: i64) -> Self {
        let halakim = self.halakim + months * HALAKIM_PER_LUNAR_CYCLE;
        Self {
            day: self.day + floor_div(halakim, HALAKIM_PER_DAY),
            halakim: floor_mod(halakim, HALAKIM_PER_DAY),
        }
    }
}

/// The molad of Tishri that opens a given year, with its place in the
/// 19-year cycle.
#[derive(Debug, Clone, Copy)]
struct TishriMolad {
    cycle: i64,
    metonic_year: usize,
    molad: Molad,
}

impl TishriMolad {
    #[allow(clippy::cast_possible_wrap)]
    const fn year(self) -> i64 {
        self.cycle * YEARS_PER_METONIC_CYCLE + self.metonic_year as i64 + 1
    }

    fn tishri1(self) -> i64 {
        tishri1(self.metonic_year, self.molad)
    }

    /// 1 Tishri of the following year.
    fn next_tishri1(self) -> i64 {
        let metonic_year = (self.metonic_year + 1) % MONTHS_PER_YEAR.len();
        tishri1(metonic_year, self.molad.advance(MONTHS_PER_YEAR[self.metonic_year]))
    }
}

/// Molad of Tishri opening `year`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn start_of_year(year: i64) -> TishriMolad {
    let cycle = floor_div(year - 1, YEARS_PER_METONIC_CYCLE);
    let metonic_year = floor_mod(year - 1, YEARS_PER_METONIC_CYCLE) as usize;
    TishriMolad {
        cycle,
        metonic_year,
        molad: Molad::of_metonic_cycle(cycle).advance(YEAR_OFFSET[metonic_year]),
    }
}

/// Finds the first molad of Tishri falling after `input_day - 74`, or the
/// last one of its cycle.
fn find_tishri_molad(input_day: i64) -> TishriMolad {
    let biased = input_day + CYCLE_ESTIMATE_BIAS;
    let divisor = if biased < 0 { CYCLE_ESTIMATE_DAYS_BEFORE_EPOCH } else { CYCLE_ESTIMATE_DAYS };
    let mut cycle = floor_div(biased, divisor);
    let mut molad = Molad::of_metonic_cycle(cycle);

    // The estimate falls short by at most one cycle per 69 000 000 days, so
    // this runs at most 1 + |biased| / 69 000 000 times (15 inside the
    // supported range).
    let mut steps = 0;
    while molad.day < biased - CYCLE_ESTIMATE_DAYS {
        cycle += 1;
        molad = molad.advance(MONTHS_PER_METONIC_CYCLE);
        steps += 1;
    }
    debug_assert!(steps <= 1 + biased.unsigned_abs() / 69_000_000);

    let mut metonic_year = 0;
    while metonic_year < MONTHS_PER_YEAR.len() - 1 && molad.day <= input_day - TISHRI_SEARCH_WINDOW {
        molad = molad.advance(MONTHS_PER_YEAR[metonic_year]);
        metonic_year += 1;
    }

    TishriMolad {
        cycle,
        metonic_year,
        molad,
    }
}

/// Applies the postponement rules to the molad of Tishri and returns the
/// internal day of 1 Tishri.
fn tishri1(metonic_year: usize, molad: Molad) -> i64 {
    let is_leap = MONTHS_PER_YEAR[metonic_year] == 13;
    let last_was_leap = MONTHS_PER_YEAR[(metonic_year + MONTHS_PER_YEAR.len() - 1) % MONTHS_PER_YEAR.len()] == 13;

    let mut day = molad.day;
    let weekday = internal_weekday(day);

    let molad_after_noon = molad.halakim >= MOLAD_NOON;
    let gatarad = !is_leap && weekday == Weekday::Tuesday && molad.halakim >= MOLAD_AM3_11_20;
    let betutakpat = last_was_leap && weekday == Weekday::Monday && molad.halakim >= MOLAD_AM9_32_43;
    if molad_after_noon || gatarad || betutakpat {
        day += 1;
    }

    // Lo ADU Rosh: never on Sunday, Wednesday or Friday
    if matches!(internal_weekday(day), Weekday::Sunday | Weekday::Wednesday | Weekday::Friday) {
        day += 1;
    }
    day
}

const fn internal_weekday(day: i64) -> Weekday {
    Weekday::from_sdn(day + HEBREW_SDN_OFFSET)
}

const fn is_leap(year: i64) -> bool {
    leap_in_cycle(floor_mod(year - 1, YEARS_PER_METONIC_CYCLE))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn leap_in_cycle(metonic_year: i64) -> bool {
    MONTHS_PER_YEAR[metonic_year as usize] == 13
}

const fn late_months(is_leap: bool) -> &'static [(u8, u8)] {
    if is_leap { &LATE_MONTHS_LEAP } else { &LATE_MONTHS_COMMON }
}

fn heshvan_length(year_length: i64) -> i64 {
    if COMPLETE_YEAR_LENGTHS.contains(&year_length) { 30 } else { 29 }
}

/// Resolves a day in Heshvan or Kislev once the length of its year is known.
fn heshvan_or_kislev(year: i64, input_day: i64, tishri1: i64, next_tishri1: i64) -> Ymd {
    let day = input_day - tishri1 - 29;
    let heshvan = heshvan_length(next_tishri1 - tishri1);
    if day <= heshvan {
        ymd(year, i64::from(HESHVAN), day)
    } else {
        ymd(year, i64::from(KISLEV), day - heshvan)
    }
}

/// Converts a Hebrew date to a serial day number. The date is not validated;
/// Adar II of a common year lands on the following Nisan.
pub fn to_sdn(year: i32, month: u8, day: u8) -> i64 {
    let year = i64::from(year);
    let day = i64::from(day);
    let start = start_of_year(year);
    let tishri1 = start.tishri1();

    let internal = match month {
        TISHRI => tishri1 + day - 1,
        HESHVAN => tishri1 + 29 + day,
        KISLEV => {
            let heshvan = heshvan_length(start.next_tishri1() - tishri1);
            tishri1 + 30 + heshvan + day - 1
        }
        _ => {
            // count back from the next 1 Tishri
            let remaining: i64 = late_months(is_leap(year))
                .iter()
                .filter(|&&(m, _)| m >= month)
                .map(|&(_, len)| i64::from(len))
                .sum();
            start.next_tishri1() - remaining + day - 1
        }
    };
    internal + HEBREW_SDN_OFFSET
}

/// Converts a serial day number to a Hebrew `(year, month, day)`.
pub fn from_sdn(sdn: i64) -> Ymd {
    let input_day = sdn - HEBREW_SDN_OFFSET;
    let found = find_tishri_molad(input_day);
    let tishri1 = found.tishri1();

    if input_day >= tishri1 {
        // first months of the year that starts at `tishri1`
        let year = found.year();
        if input_day < tishri1 + 30 {
            return ymd(year, i64::from(TISHRI), input_day - tishri1 + 1);
        }
        if input_day < tishri1 + 59 {
            return ymd(year, i64::from(HESHVAN), input_day - tishri1 - 29);
        }
        return heshvan_or_kislev(year, input_day, tishri1, found.next_tishri1());
    }

    // the year ending just before `tishri1`
    let year = found.year() - 1;
    let mut month_end = tishri1;
    for &(month, len) in late_months(is_leap(year)).iter().rev() {
        let month_start = month_end - i64::from(len);
        if input_day >= month_start {
            return ymd(year, i64::from(month), input_day - month_start + 1);
        }
        month_end = month_start;
    }
    heshvan_or_kislev(year, input_day, start_of_year(year).tishri1(), tishri1)
}

/// Leap years have 13 months: years 3, 6, 8, 11, 14, 17 and 19 of each
/// 19-year cycle.
pub const fn is_leap_year(year: i32) -> bool {
    is_leap(year as i64)
}

/// 13 in a leap year, otherwise 12.
pub const fn months_in_year(year: i32) -> u8 {
    if is_leap_year(year) { 13 } else { 12 }
}

/// Days from 1 Tishri of `year` to 1 Tishri of the next year: one of 353,
/// 354, 355 (common) or 383, 384, 385 (leap).
pub fn year_length(year: i32) -> i64 {
    let start = start_of_year(i64::from(year));
    start.next_tishri1() - start.tishri1()
}

/// Days in `month` of `year`, or `None` if the year has no such month
/// (including Adar II in a common year).
pub fn days_in_month(year: i32, month: u8) -> Option<u8> {
    match month {
        TISHRI => Some(30),
        HESHVAN if COMPLETE_YEAR_LENGTHS.contains(&year_length(year)) => Some(30),
        HESHVAN => Some(29),
        KISLEV if DEFICIENT_YEAR_LENGTHS.contains(&year_length(year)) => Some(29),
        KISLEV => Some(30),
        _ => late_months(is_leap_year(year))
            .iter()
            .find(|&&(m, _)| m == month)
            .map(|&(_, len)| len),
    }
}
