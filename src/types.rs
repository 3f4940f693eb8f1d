use crate::DateError;
use crate::arith::{days_in_month, months_in_year};
use crate::consts::{MAX_MONTH, MAX_YEAR, MIN_DAY};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::num::NonZeroU16;

/// A Hebrew year guaranteed to be in the range `1..=MAX_YEAR` (1..=9999).
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, DateError> {
        let non_zero =
            NonZeroU16::new(value).ok_or(DateError::InvalidYear(i64::from(value)))?;
        if value > MAX_YEAR {
            return Err(DateError::InvalidYear(i64::from(value)));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = DateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A Hebrew month number guaranteed to be valid for a given year:
/// `1..=12` in common years, `1..=13` in leap years (Adar II).
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and within the
    /// month count of `year`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or exceeds
    /// `months_in_year(year)`.
    pub fn new(value: u8, year: u16) -> Result<Self, DateError> {
        let max = months_in_year(year);
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidMonth {
            month: value,
            year: i32::from(year),
            max,
        })?;
        if value > max {
            return Err(DateError::InvalidMonth {
                month: value,
                year: i32::from(year),
                max,
            });
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate against a year here, so only the context-free
        // bound (Adar II is the highest month number any year can have)
        if !(1..=MAX_MONTH).contains(&value) {
            return Err(DateError::InvalidMonth {
                month: value,
                year: 0,
                max: MAX_MONTH,
            });
        }
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidMonth {
            month: value,
            year: 0,
            max: MAX_MONTH,
        })?;
        Ok(Self(non_zero))
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given Hebrew year and month.
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the
    /// given year and month. `month` must already be a valid month of `year`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or exceeds the
    /// month length.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, DateError> {
        let max = days_in_month(year, month);
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidDay {
            day: value,
            month,
            year: i32::from(year),
            max,
        })?;
        if value > max {
            return Err(DateError::InvalidDay {
                day: value,
                month,
                year: i32::from(year),
                max,
            });
        }
        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate without year/month context, so only the
        // context-free bounds (no Hebrew month exceeds 30 days)
        if !(MIN_DAY..=30).contains(&value) {
            return Err(DateError::InvalidDay {
                day: value,
                month: 0,
                year: 0,
                max: 30,
            });
        }
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidDay {
            day: value,
            month: 0,
            year: 0,
            max: 30,
        })?;
        Ok(Self(non_zero))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
