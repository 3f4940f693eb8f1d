/// Maximum valid Hebrew year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Most months a Hebrew year can have (Adar II in leap years)
pub const MAX_MONTH: u8 = 13;

/// First day of month, used for month starts
pub const MIN_DAY: u8 = 1;

/// Month number for Nisan (month numbering restarts here mid-year)
pub const NISAN: u8 = 1;
/// Month number for Iyyar
pub const IYYAR: u8 = 2;
/// Month number for Sivan
pub const SIVAN: u8 = 3;
/// Month number for Tammuz
pub const TAMMUZ: u8 = 4;
/// Month number for Av
pub const AV: u8 = 5;
/// Month number for Elul
pub const ELUL: u8 = 6;
/// Month number for Tishrei (the civil year begins here)
pub const TISHREI: u8 = 7;
/// Month number for Cheshvan (29 or 30 days, set by the year length)
pub const CHESHVAN: u8 = 8;
/// Month number for Kislev (29 or 30 days, set by the year length)
pub const KISLEV: u8 = 9;
/// Month number for Tevet
pub const TEVET: u8 = 10;
/// Month number for Shevat
pub const SHEVAT: u8 = 11;
/// Month number for Adar (Adar I in leap years)
pub const ADAR: u8 = 12;
/// Month number for Adar II (leap years only)
pub const ADAR_II: u8 = 13;

/// Years per Metonic cycle; exactly 7 of every 19 consecutive years are leap
pub(crate) const METONIC_CYCLE: i64 = 19;
/// Lunar months per Metonic cycle (12 common years plus 7 leap months)
pub(crate) const MONTHS_PER_CYCLE: i64 = 235;

/// Fixed day of Tishrei 1, Hebrew year 1, relative to the fixed-day epoch
/// (day 1 = proleptic Gregorian January 1 of year 1)
pub(crate) const HEBREW_EPOCH: i64 = -1_373_427;

/// Halakhic parts (chalakim) per day
pub(crate) const PARTS_PER_DAY: i64 = 25_920;
/// Whole days of the mean lunar month
pub(crate) const MONTH_DAYS: i64 = 29;
/// Parts by which the mean lunar month exceeds 29 whole days (12h 793p)
pub(crate) const MONTH_EXCESS_PARTS: i64 = 13_753;
/// Parts offset of the first molad relative to the epoch
pub(crate) const FIRST_MOLAD_PARTS: i64 = 12_084;

/// Maximum valid Gregorian month (December)
pub(crate) const GREGORIAN_MAX_MONTH: u8 = 12;
/// Month number for Gregorian February
pub(crate) const FEBRUARY: u8 = 2;
/// Month number for Gregorian March
pub(crate) const MARCH: u8 = 3;
/// Days in February for Gregorian leap years
pub(crate) const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub(crate) const GREGORIAN_MONTH_DAYS: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_gregorian_leap_year check)
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

/// Gregorian leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days per 400-year Gregorian cycle
pub(crate) const DAYS_PER_400_YEARS: i64 = 146_097;
/// Days per 100-year Gregorian block
pub(crate) const DAYS_PER_100_YEARS: i64 = 36_524;
/// Days per 4-year Gregorian block
pub(crate) const DAYS_PER_4_YEARS: i64 = 1_461;
/// Days per common Gregorian year
pub(crate) const DAYS_PER_YEAR: i64 = 365;

/// Date component separator (ISO 8601 style)
pub const DATE_SEPARATOR: char = '-';
