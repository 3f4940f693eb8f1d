//! Static holiday classification over Hebrew dates.
//!
//! A lookup layer with no calendar arithmetic of its own: the only
//! data-dependent placements are the Purim cluster, which moves to Adar II
//! in leap years, and the tail of Chanukah, which reaches Tevet 3 only when
//! Kislev is short.

use crate::DateError;
use crate::HebrewDate;
use crate::arith::{days_in_month, is_leap_year};
use crate::consts::{
    ADAR, ADAR_II, AV, IYYAR, KISLEV, MIN_DAY, NISAN, SHEVAT, SIVAN, TAMMUZ, TEVET, TISHREI,
};
use crate::prelude::*;
use crate::types::{Month, Year};
use serde::Serialize;

/// Classification of a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayKind {
    /// Biblical festival with work restrictions
    #[display(fmt = "major")]
    Major,
    /// Festive day without work restrictions
    #[display(fmt = "minor")]
    Minor,
    /// Israeli national day
    #[display(fmt = "modern")]
    Modern,
    /// Fast day
    #[display(fmt = "fast")]
    Fast,
}

/// A named holiday with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Holiday {
    /// Transliterated name
    pub name: &'static str,
    /// Hebrew name
    pub name_he: &'static str,
    /// Classification
    pub kind: HolidayKind,
}

const fn entry(name: &'static str, name_he: &'static str, kind: HolidayKind) -> Option<Holiday> {
    Some(Holiday {
        name,
        name_he,
        kind,
    })
}

/// Returns the holiday falling on `date`, if any.
pub fn holiday(date: &HebrewDate) -> Option<Holiday> {
    use HolidayKind::{Fast, Major, Minor, Modern};

    let year = date.year();
    let month = date.month();
    let day = date.day();

    // Purim and its satellites move to Adar II in leap years
    let adar = if is_leap_year(year) { ADAR_II } else { ADAR };

    match (month, day) {
        (TISHREI, 1) => entry("Rosh Hashana", "ראש השנה", Major),
        (TISHREI, 2) => entry("Rosh Hashana II", "ראש השנה ב׳", Major),
        (TISHREI, 3) => entry("Tzom Gedaliah", "צום גדליה", Fast),
        (TISHREI, 10) => entry("Yom Kippur", "יום כיפור", Major),
        (TISHREI, 15) => entry("Sukkot", "סוכות", Major),
        (TISHREI, 16..=20) => entry("Chol HaMoed Sukkot", "חול המועד סוכות", Minor),
        (TISHREI, 21) => entry("Hoshana Rabbah", "הושענא רבה", Minor),
        (TISHREI, 22) => entry("Shmini Atzeret", "שמיני עצרת", Major),
        (TISHREI, 23) => entry("Simchat Torah", "שמחת תורה", Major),

        // Chanukah runs from Kislev 25 into Tevet; it ends on Tevet 2 when
        // Kislev has 30 days and on Tevet 3 when it has 29
        (KISLEV, 25..=30) => entry("Chanukah", "חנוכה", Minor),
        (TEVET, 1..=2) => entry("Chanukah", "חנוכה", Minor),
        (TEVET, 3) if days_in_month(year, KISLEV) == 29 => entry("Chanukah", "חנוכה", Minor),

        (TEVET, 10) => entry("Asara B'Tevet", "עשרה בטבת", Fast),
        (SHEVAT, 15) => entry("Tu BiShvat", "ט״ו בשבט", Minor),

        (m, 13) if m == adar => entry("Ta'anit Esther", "תענית אסתר", Fast),
        (m, 14) if m == adar => entry("Purim", "פורים", Minor),
        (m, 15) if m == adar => entry("Shushan Purim", "שושן פורים", Minor),

        (NISAN, 15) => entry("Pesach", "פסח", Major),
        (NISAN, 16) => entry("Pesach II", "פסח ב׳", Major),
        (NISAN, 17..=20) => entry("Chol HaMoed Pesach", "חול המועד פסח", Minor),
        (NISAN, 21) => entry("Pesach VII", "שביעי של פסח", Major),
        (NISAN, 22) => entry("Pesach VIII", "אחרון של פסח", Major),
        (NISAN, 27) => entry("Yom HaShoah", "יום השואה", Modern),

        (IYYAR, 5) => entry("Yom HaZikaron", "יום הזיכרון", Modern),
        (IYYAR, 6) => entry("Yom HaAtzmaut", "יום העצמאות", Modern),
        (IYYAR, 18) => entry("Lag BaOmer", "ל״ג בעומר", Minor),
        (IYYAR, 28) => entry("Yom Yerushalayim", "יום ירושלים", Modern),

        (SIVAN, 6) => entry("Shavuot", "שבועות", Major),
        (SIVAN, 7) => entry("Shavuot II", "שבועות ב׳", Major),

        (TAMMUZ, 17) => entry("Shiva Asar B'Tammuz", "שבעה עשר בתמוז", Fast),
        (AV, 9) => entry("Tisha B'Av", "תשעה באב", Fast),
        (AV, 15) => entry("Tu B'Av", "ט״ו באב", Minor),

        _ => None,
    }
}

/// Lists `(day, holiday)` pairs for every holiday in the given month.
///
/// # Errors
/// Returns `DateError::InvalidYear` or `InvalidMonth` for out-of-range
/// input.
pub fn holidays_in_month(year: u16, month: u8) -> Result<Vec<(u8, Holiday)>, DateError> {
    let checked_year = Year::new(year)?;
    let checked_month = Month::new(month, checked_year.get())?;

    let mut found = Vec::new();
    for day in MIN_DAY..=days_in_month(year, checked_month.get()) {
        let date = HebrewDate::new(year, month, day)?;
        if let Some(h) = holiday(&date) {
            found.push((day, h));
        }
    }
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hebrew(year: u16, month: u8, day: u8) -> HebrewDate {
        HebrewDate::new(year, month, day).unwrap()
    }

    fn name_on(year: u16, month: u8, day: u8) -> Option<&'static str> {
        holiday(&hebrew(year, month, day)).map(|h| h.name)
    }

    #[test]
    fn test_tishrei_holidays() {
        assert_eq!(name_on(5785, 7, 1), Some("Rosh Hashana"));
        assert_eq!(name_on(5785, 7, 2), Some("Rosh Hashana II"));
        assert_eq!(name_on(5785, 7, 10), Some("Yom Kippur"));
        assert_eq!(name_on(5785, 7, 15), Some("Sukkot"));
        assert_eq!(name_on(5785, 7, 18), Some("Chol HaMoed Sukkot"));
        assert_eq!(name_on(5785, 7, 23), Some("Simchat Torah"));
        assert_eq!(name_on(5785, 7, 24), None);
    }

    #[test]
    fn test_pesach() {
        assert_eq!(name_on(5784, 1, 15), Some("Pesach"));
        assert_eq!(name_on(5784, 1, 19), Some("Chol HaMoed Pesach"));
        assert_eq!(name_on(5784, 1, 22), Some("Pesach VIII"));
        assert_eq!(name_on(5784, 1, 23), None);
    }

    #[test]
    fn test_purim_placement() {
        // Common year: Purim in Adar (12)
        assert_eq!(name_on(5785, 12, 14), Some("Purim"));
        assert_eq!(name_on(5785, 12, 13), Some("Ta'anit Esther"));
        assert_eq!(name_on(5785, 12, 15), Some("Shushan Purim"));

        // Leap year: Purim in Adar II (13); Adar I has nothing
        assert_eq!(name_on(5784, 13, 14), Some("Purim"));
        assert_eq!(name_on(5784, 12, 14), None);
    }

    #[test]
    fn test_chanukah_span_short_kislev() {
        // 5784 has a 29-day Kislev: Chanukah reaches Tevet 3
        assert_eq!(days_in_month(5784, KISLEV), 29);
        assert_eq!(name_on(5784, 9, 25), Some("Chanukah"));
        assert_eq!(name_on(5784, 9, 29), Some("Chanukah"));
        assert_eq!(name_on(5784, 10, 1), Some("Chanukah"));
        assert_eq!(name_on(5784, 10, 3), Some("Chanukah"));
        assert_eq!(name_on(5784, 10, 4), None);
    }

    #[test]
    fn test_chanukah_span_regular_kislev() {
        // 5785 has a 30-day Kislev: Chanukah ends on Tevet 2
        assert_eq!(days_in_month(5785, KISLEV), 30);
        assert_eq!(name_on(5785, 9, 25), Some("Chanukah"));
        assert_eq!(name_on(5785, 9, 30), Some("Chanukah"));
        assert_eq!(name_on(5785, 10, 2), Some("Chanukah"));
        assert_eq!(name_on(5785, 10, 3), None);
    }

    #[test]
    fn test_kislev_24_is_not_chanukah() {
        assert_eq!(name_on(5785, 9, 24), None);
    }

    #[test]
    fn test_modern_holidays() {
        assert_eq!(name_on(5785, 1, 27), Some("Yom HaShoah"));
        assert_eq!(name_on(5785, 2, 5), Some("Yom HaZikaron"));
        assert_eq!(name_on(5785, 2, 6), Some("Yom HaAtzmaut"));
        assert_eq!(name_on(5785, 2, 28), Some("Yom Yerushalayim"));
    }

    #[test]
    fn test_fasts_and_kinds() {
        let fast = holiday(&hebrew(5785, 5, 9)).unwrap();
        assert_eq!(fast.name, "Tisha B'Av");
        assert_eq!(fast.kind, HolidayKind::Fast);

        let major = holiday(&hebrew(5785, 3, 6)).unwrap();
        assert_eq!(major.name, "Shavuot");
        assert_eq!(major.kind, HolidayKind::Major);
    }

    #[test]
    fn test_holidays_in_month() {
        let tishrei = holidays_in_month(5785, 7).unwrap();
        let days: Vec<u8> = tishrei.iter().map(|(d, _)| *d).collect();
        assert_eq!(days, vec![1, 2, 3, 10, 15, 16, 17, 18, 19, 20, 21, 22, 23]);

        // Av has two entries
        let av = holidays_in_month(5785, 5).unwrap();
        assert_eq!(av.len(), 2);

        // Adar I of a leap year has none
        let adar_one = holidays_in_month(5784, 12).unwrap();
        assert!(adar_one.is_empty());
    }

    #[test]
    fn test_holidays_in_month_invalid_input() {
        assert!(holidays_in_month(0, 7).is_err());
        assert!(holidays_in_month(5785, 13).is_err());
        assert!(holidays_in_month(5785, 0).is_err());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(HolidayKind::Major.to_string(), "major");
        assert_eq!(HolidayKind::Fast.to_string(), "fast");
    }

    #[test]
    fn test_holiday_serialize() {
        let purim = holiday(&hebrew(5785, 12, 14)).unwrap();
        let json = serde_json::to_string(&purim).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Purim","name_he":"פורים","kind":"minor"}"#
        );
    }
}
