//! Hebrew calendar arithmetic: leap years, molad-based year boundaries, and
//! month lengths.
//!
//! The internal functions run on `i64` years because the postponement rule
//! inspects the years on either side of its argument, so year 0 and year
//! `MAX_YEAR + 1` intermediates must be well-defined. Division and modulo are
//! euclidean throughout; the fixed-point "parts" arithmetic never touches
//! floating point.

use crate::consts::{
    ADAR, ADAR_II, CHESHVAN, ELUL, FIRST_MOLAD_PARTS, IYYAR, KISLEV, METONIC_CYCLE, MONTH_DAYS,
    MONTH_EXCESS_PARTS, MONTHS_PER_CYCLE, PARTS_PER_DAY, TAMMUZ, TEVET,
};

/// Returns `true` iff `year` is a leap year of the 19-year Metonic cycle.
pub fn is_leap_year(year: u16) -> bool {
    leap(i64::from(year))
}

/// Returns the number of months in `year`: 13 in leap years, 12 otherwise.
pub fn months_in_year(year: u16) -> u8 {
    month_count(i64::from(year))
}

/// Returns the number of days in the given Hebrew month.
///
/// Months 2, 4, 6, 10 and 13 always have 29 days; month 12 (Adar) has 30 days
/// only when the year is leap (it is then Adar I); months 8 (Cheshvan) and
/// 9 (Kislev) vary with the year length; the rest have 30 days.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    month_len(i64::from(year), month)
}

/// Returns the total number of days in `year`.
///
/// Always one of 353, 354 or 355 for common years (deficient, regular,
/// complete) and 383, 384 or 385 for leap years.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hebrew_year_days(year: u16) -> u16 {
    let days = year_len(i64::from(year));
    debug_assert!((353..=385).contains(&days));
    days as u16
}

pub(crate) fn leap(year: i64) -> bool {
    (7 * year + 1).rem_euclid(METONIC_CYCLE) < 7
}

pub(crate) fn month_count(year: i64) -> u8 {
    if leap(year) { 13 } else { 12 }
}

/// Day count of the molad preceding Tishrei 1 of `year`, from the calendar
/// epoch. The trailing correction keeps Rosh Hashana off the weekdays the
/// calendar disallows.
fn elapsed_days(year: i64) -> i64 {
    let months_elapsed = (MONTHS_PER_CYCLE * year - 234).div_euclid(METONIC_CYCLE);
    let parts_elapsed = FIRST_MOLAD_PARTS + MONTH_EXCESS_PARTS * months_elapsed;
    let day = MONTH_DAYS * months_elapsed + parts_elapsed.div_euclid(PARTS_PER_DAY);
    if (3 * (day + 1)).rem_euclid(7) < 3 {
        day + 1
    } else {
        day
    }
}

/// Postponement of Tishrei 1 in days. A gap of 356 days to the next molad or
/// 382 days from the previous one would produce an invalid year length.
fn new_year_delay(year: i64) -> i64 {
    let prev = elapsed_days(year - 1);
    let this = elapsed_days(year);
    let next = elapsed_days(year + 1);
    if next - this == 356 {
        2
    } else if this - prev == 382 {
        1
    } else {
        0
    }
}

/// Day count of Tishrei 1 of `year` from the calendar epoch, with the
/// postponement applied.
pub(crate) fn new_year(year: i64) -> i64 {
    elapsed_days(year) + new_year_delay(year)
}

pub(crate) fn year_len(year: i64) -> i64 {
    new_year(year + 1) - new_year(year)
}

fn long_cheshvan(year: i64) -> bool {
    year_len(year).rem_euclid(10) == 5
}

fn short_kislev(year: i64) -> bool {
    year_len(year).rem_euclid(10) == 3
}

pub(crate) fn month_len(year: i64, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= month_count(year));
    match month {
        IYYAR | TAMMUZ | ELUL | TEVET | ADAR_II => 29,
        ADAR if !leap(year) => 29,
        CHESHVAN if !long_cheshvan(year) => 29,
        KISLEV if short_kislev(year) => 29,
        _ => 30,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{MAX_YEAR, TISHREI};

    #[test]
    fn test_leap_year_known_values() {
        assert!(is_leap_year(5784));
        assert!(!is_leap_year(5785));
        assert!(!is_leap_year(5786));
        assert!(is_leap_year(5787));
    }

    #[test]
    fn test_leap_year_periodicity() {
        // Exactly 7 leap years in any 19 consecutive years
        for start in [1u16, 100, 1000, 5770, 9000] {
            let count = (start..start + 19).filter(|&y| is_leap_year(y)).count();
            assert_eq!(count, 7, "window starting at {start}");
        }
    }

    #[test]
    fn test_months_in_year_matches_leapness() {
        for year in 1..=200u16 {
            let expected = if is_leap_year(year) { 13 } else { 12 };
            assert_eq!(months_in_year(year), expected, "year {year}");
        }
        assert_eq!(months_in_year(5784), 13);
        assert_eq!(months_in_year(5785), 12);
    }

    #[test]
    fn test_year_days_in_valid_set() {
        for year in 1..=2000u16 {
            let days = hebrew_year_days(year);
            assert!(
                matches!(days, 353 | 354 | 355 | 383 | 384 | 385),
                "year {year} has invalid length {days}"
            );
        }
    }

    #[test]
    fn test_year_days_known_values() {
        assert_eq!(hebrew_year_days(5784), 383);
        assert_eq!(hebrew_year_days(5785), 355);
        assert_eq!(hebrew_year_days(5786), 354);
        assert_eq!(hebrew_year_days(5787), 385);
    }

    #[test]
    fn test_year_days_at_bounds() {
        // The delay rule reads the years on either side, so both ends of the
        // valid range must still produce a well-formed length.
        for year in [1u16, 2, MAX_YEAR - 1, MAX_YEAR] {
            let days = hebrew_year_days(year);
            assert!(matches!(days, 353 | 354 | 355 | 383 | 384 | 385));
        }
    }

    #[test]
    fn test_tishrei_always_30_days() {
        for year in (1..=MAX_YEAR).step_by(97) {
            assert_eq!(days_in_month(year, TISHREI), 30, "year {year}");
        }
    }

    #[test]
    fn test_fixed_29_day_months() {
        for year in [5784u16, 5785, 5786] {
            assert_eq!(days_in_month(year, IYYAR), 29);
            assert_eq!(days_in_month(year, TAMMUZ), 29);
            assert_eq!(days_in_month(year, ELUL), 29);
            assert_eq!(days_in_month(year, TEVET), 29);
        }
        // Adar II exists only in leap years and is always 29 days
        assert_eq!(days_in_month(5784, ADAR_II), 29);
    }

    #[test]
    fn test_adar_length_follows_leapness() {
        // In a leap year month 12 is Adar I with 30 days
        assert_eq!(days_in_month(5784, ADAR), 30);
        // In a common year it is plain Adar with 29
        assert_eq!(days_in_month(5785, ADAR), 29);
    }

    #[test]
    fn test_cheshvan_kislev_variants() {
        // 5785 is a complete year (355): long Cheshvan, regular Kislev
        assert_eq!(days_in_month(5785, CHESHVAN), 30);
        assert_eq!(days_in_month(5785, KISLEV), 30);
        // 5784 is a deficient leap year (383): short Kislev
        assert_eq!(days_in_month(5784, CHESHVAN), 29);
        assert_eq!(days_in_month(5784, KISLEV), 29);
    }

    #[test]
    fn test_month_lengths_sum_to_year_length() {
        for year in [1u16, 100, 5784, 5785, 5786, 5787, 9999] {
            let total: u16 = (1..=months_in_year(year))
                .map(|m| u16::from(days_in_month(year, m)))
                .sum();
            assert_eq!(total, hebrew_year_days(year), "year {year}");
        }
    }
}
