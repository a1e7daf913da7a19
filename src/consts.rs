/// Smallest serial day number the typed API accepts
pub const MIN_SDN: i64 = -1_000_000_000;

/// Largest serial day number the typed API accepts
pub const MAX_SDN: i64 = 1_000_000_000;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Days in a week
pub(crate) const DAYS_PER_WEEK: i64 = 7;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

// Julian and Gregorian

pub(crate) const JULIAN_SDN_OFFSET: i64 = 32_083;
pub(crate) const GREGORIAN_SDN_OFFSET: i64 = 32_045;
/// Years are shifted by this much so the arithmetic starts before SDN 0
pub(crate) const CIVIL_YEAR_SHIFT: i64 = 4800;
pub(crate) const DAYS_PER_5_MONTHS: i64 = 153;
pub(crate) const DAYS_PER_4_YEARS: i64 = 1461;
pub(crate) const DAYS_PER_400_YEARS: i64 = 146_097;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

// French Republican

pub(crate) const FRENCH_SDN_OFFSET: i64 = 2_375_474;
/// Days in each of the twelve regular months
pub const FRENCH_DAYS_PER_MONTH: u8 = 30;
/// Month number of the complementary days (sansculottides)
pub const FRENCH_COMPLEMENTARY_MONTH: u8 = 13;
/// Complementary days in a common year
pub const FRENCH_COMPLEMENTARY_DAYS: u8 = 5;

// Persian

/// SDN of 1 Farvardin 1 is `PERSIAN_EPOCH + 1`
pub(crate) const PERSIAN_EPOCH: i64 = 1_948_320;
pub(crate) const PERSIAN_CYCLE_YEARS: i64 = 2820;
pub(crate) const PERSIAN_DAYS_PER_CYCLE: i64 = 1_029_983;
/// First year of the 2820-year grand cycle the formulas are anchored to
pub(crate) const PERSIAN_CYCLE_BASE: i64 = 474;

// Islamic

/// SDN of 1 Muharram 1 is `ISLAMIC_EPOCH + 1`
pub(crate) const ISLAMIC_EPOCH: i64 = 1_948_439;
pub(crate) const ISLAMIC_CYCLE_YEARS: i64 = 30;
pub(crate) const ISLAMIC_LEAP_YEARS_PER_CYCLE: i64 = 11;
pub(crate) const ISLAMIC_DAYS_PER_CYCLE: i64 = 10_631;
pub(crate) const ISLAMIC_DAYS_PER_COMMON_YEAR: i64 = 354;

// Hebrew

pub(crate) const HEBREW_SDN_OFFSET: i64 = 347_997;
pub(crate) const HALAKIM_PER_HOUR: i64 = 1080;
pub(crate) const HALAKIM_PER_DAY: i64 = 24 * HALAKIM_PER_HOUR;
pub(crate) const HALAKIM_PER_LUNAR_CYCLE: i64 = 29 * HALAKIM_PER_DAY + 13_753;
pub(crate) const MONTHS_PER_METONIC_CYCLE: i64 = 12 * 19 + 7;
pub(crate) const HALAKIM_PER_METONIC_CYCLE: i64 = HALAKIM_PER_LUNAR_CYCLE * MONTHS_PER_METONIC_CYCLE;
/// Molad of Tishri of year 1, in halakim after the start of day 0
pub(crate) const NEW_MOON_OF_CREATION: i64 = 31_524;

/// 18 hours after the 6 p.m. start of the day
pub(crate) const MOLAD_NOON: i64 = 18 * HALAKIM_PER_HOUR;
/// 3 a.m. plus 11 minutes and 20 seconds
pub(crate) const MOLAD_AM3_11_20: i64 = 9 * HALAKIM_PER_HOUR + 204;
/// 9 a.m. plus 32 minutes and 43 1/3 seconds
pub(crate) const MOLAD_AM9_32_43: i64 = 15 * HALAKIM_PER_HOUR + 589;

pub(crate) const YEARS_PER_METONIC_CYCLE: i64 = 19;

/// Months in each year of the 19-year metonic cycle
pub(crate) const MONTHS_PER_YEAR: [i64; 19] = [12, 12, 13, 12, 12, 13, 12, 13, 12, 12, 13, 12, 12, 13, 12, 12, 13, 12, 13];

/// Lunar months elapsed before each year of the metonic cycle
pub(crate) const YEAR_OFFSET: [i64; 19] = [
    0, 12, 24, 37, 49, 61, 74, 86, 99, 111, 123, 136, 148, 160, 173, 185, 197, 210, 222,
];

// Hebrew month numbers, counted from the civil new year

/// First month, holding Rosh Hashanah
pub const TISHRI: u8 = 1;
/// 29 or 30 days depending on the year length
pub const HESHVAN: u8 = 2;
/// 29 or 30 days depending on the year length
pub const KISLEV: u8 = 3;
/// Fourth month, always 29 days
pub const TEVET: u8 = 4;
/// Fifth month, always 30 days
pub const SHEVAT: u8 = 5;
/// Adar in a common year, Adar I in a leap year
pub const ADAR_I: u8 = 6;
/// Only present in leap years
pub const ADAR_II: u8 = 7;
/// Month of Passover, always 30 days
pub const NISAN: u8 = 8;
/// Ninth month, always 29 days
pub const IYYAR: u8 = 9;
/// Tenth month, always 30 days
pub const SIVAN: u8 = 10;
/// Eleventh month, always 29 days
pub const TAMMUZ: u8 = 11;
/// Twelfth month, always 30 days
pub const AV: u8 = 12;
/// Last month of the year, always 29 days
pub const ELUL: u8 = 13;
