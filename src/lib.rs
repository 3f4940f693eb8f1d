mod arith;
mod consts;
mod format;
mod gregorian;
mod holidays;
mod prelude;
mod types;

pub use arith::{days_in_month, hebrew_year_days, is_leap_year, months_in_year};
pub use consts::*;
pub use format::{format_hebrew, format_hebrew_en, month_name, month_name_en};
pub use gregorian::GregorianDate;
pub use holidays::{Holiday, HolidayKind, holiday, holidays_in_month};
pub use types::{Day, Month, Year};

use crate::prelude::*;
use std::cmp::Ordering;
use std::str::FromStr;

/// A date in the traditional Hebrew lunisolar calendar.
///
/// Months are numbered Nisan=1 through Elul=6 and Tishrei=7 through Adar=12
/// (Adar I=12, Adar II=13 in leap years); the civil year begins at Tishrei
/// even though the numbering restarts at Nisan mid-year. Always valid by
/// construction: the month exists in its year and the day fits the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "self.year.get()", "self.month.get()", "self.day.get()")]
pub struct HebrewDate {
    year: Year,
    month: Month,
    day: Day,
}

/// Error type for date construction, conversion and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Year outside the supported Hebrew calendar range.
    #[error("invalid year: {0} (must be 1..=9999)")]
    InvalidYear(i64),

    /// Month outside the month count of its year.
    #[error("invalid month: {month} for year {year} (must be 1..={max})")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
        /// The year for which the month is invalid.
        year: i32,
        /// The maximum valid month for the given year.
        max: u8,
    },

    /// Day outside the length of its month.
    #[error("invalid day: {day} for month {month} of year {year} (max {max})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The year for which the day is invalid.
        year: i32,
        /// The maximum valid day for the given year and month.
        max: u8,
    },

    /// Input string does not have the expected shape.
    #[error("invalid date format: {0}")]
    InvalidFormat(String),

    /// Empty date string.
    #[error("empty date string")]
    EmptyInput,
}

impl HebrewDate {
    /// Creates a new `HebrewDate`, validating all components eagerly.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear`, `InvalidMonth` or `InvalidDay` for
    /// out-of-range components.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let month = Month::new(month, year.get())?;
        let day = Day::new(day, year.get(), month.get())?;
        Ok(Self { year, month, day })
    }

    /// Converts a Gregorian date to its Hebrew calendar equivalent.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the date falls before Tishrei 1
    /// of Hebrew year 1 or past the end of year 9999.
    pub fn from_gregorian(date: GregorianDate) -> Result<Self, DateError> {
        fixed_to_hebrew(date.to_fixed())
    }

    /// Converts this date to the proleptic Gregorian calendar.
    ///
    /// Infallible: every valid `HebrewDate` has a representable Gregorian
    /// image.
    pub fn to_gregorian(&self) -> GregorianDate {
        GregorianDate::from_fixed(self.to_fixed())
    }

    /// Returns the year (1..=9999)
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month number (1..=12, or 1..=13 in leap years)
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day within the month (1..=30)
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Day ordinal of this date; day 1 is Gregorian January 1 of year 1.
    pub(crate) fn to_fixed(&self) -> i64 {
        hebrew_to_fixed(i64::from(self.year.get()), self.month.get(), self.day.get())
    }
}

impl PartialOrd for HebrewDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HebrewDate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Field order lies about chronology here: Tishrei (7) opens the
        // civil year and Nisan (1) falls mid-year, so compare day ordinals
        self.to_fixed().cmp(&other.to_fixed())
    }
}

/// Day ordinal of the given Hebrew date, relative to the fixed-day epoch.
///
/// Runs on raw integers: the boundary searches in `fixed_to_hebrew` probe
/// candidate years outside the validated domain (year 0, year 10000).
fn hebrew_to_fixed(year: i64, month: u8, day: u8) -> i64 {
    let mut days = HEBREW_EPOCH + arith::new_year(year) + i64::from(day) - 1;
    if month < TISHREI {
        // Nisan..Elul fall after the turn of the civil year: count the
        // months from Tishrei through the end of the cycle, then from
        // Nisan up to this month
        for m in TISHREI..=arith::month_count(year) {
            days += i64::from(arith::month_len(year, m));
        }
        for m in NISAN..month {
            days += i64::from(arith::month_len(year, m));
        }
    } else {
        for m in TISHREI..month {
            days += i64::from(arith::month_len(year, m));
        }
    }
    days
}

/// Generous bound for the year-correction search below; the float estimate
/// is never off by more than a few years
const YEAR_SEARCH_LIMIT: usize = 8;

/// Resolves a fixed-day ordinal to a Hebrew date.
///
/// Both searches advance through strictly increasing calendar boundaries, so
/// each is bounded: the year loop by the accuracy of the estimate, the month
/// loop by the month count of the year.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn fixed_to_hebrew(fixed: i64) -> Result<HebrewDate, DateError> {
    // The one floating-point step: a mean-year estimate, immediately
    // corrected by the exact integer search below
    let approx = ((fixed - HEBREW_EPOCH) as f64 / 365.25).floor() as i64;
    let mut year = approx - 1;
    for _ in 0..YEAR_SEARCH_LIMIT {
        if hebrew_to_fixed(year + 1, TISHREI, MIN_DAY) <= fixed {
            year += 1;
        } else {
            break;
        }
    }

    let mut month = if fixed < hebrew_to_fixed(year, NISAN, MIN_DAY) {
        TISHREI
    } else {
        NISAN
    };
    while month < arith::month_count(year)
        && fixed > hebrew_to_fixed(year, month, arith::month_len(year, month))
    {
        month += 1;
    }

    let day = fixed - hebrew_to_fixed(year, month, MIN_DAY) + 1;

    let year = u16::try_from(year).map_err(|_| DateError::InvalidYear(year))?;
    // day lands in 1..=30 by the month search; anything else collapses to
    // 0 and is rejected by the constructor
    let day = u8::try_from(day).unwrap_or(0);
    HebrewDate::new(year, month, day)
}

/// Helper to parse u16 with better error messages
fn parse_u16(s: &str) -> Result<u16, DateError> {
    s.parse::<u16>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

/// Helper to parse u8 with better error messages
fn parse_u8(s: &str) -> Result<u8, DateError> {
    s.parse::<u8>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

impl FromStr for HebrewDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(DateError::InvalidFormat(format!(
                "expected year{DATE_SEPARATOR}month{DATE_SEPARATOR}day, got: {trimmed}"
            )));
        }

        let year = parse_u16(parts[0])?;
        let month = parse_u8(parts[1])?;
        let day = parse_u8(parts[2])?;

        Self::new(year, month, day)
    }
}

impl serde::Serialize for HebrewDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for HebrewDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
