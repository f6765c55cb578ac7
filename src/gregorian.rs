use crate::absolute::AbsoluteDay;
use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_MONTH, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, JANUARY, LEAP_YEAR_CYCLE, MAX_YEAR, MIN_DAY,
};
use crate::prelude::*;
use crate::{DateError, ParseError};
use std::str::FromStr;

/// A validated date in the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct GregorianDate {
    // Field order gives chronological `Ord`
    year: i32,
    month: u8,
    day: u8,
}

impl GregorianDate {
    /// Creates a date, validating the day against the month and leap year.
    ///
    /// # Errors
    /// Returns `DateError` if any component is out of range for `1..=MAX_YEAR`.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if !(1..=MAX_YEAR).contains(&year) {
            return Err(DateError::InvalidYear(year));
        }
        if !(JANUARY..=DECEMBER).contains(&month) {
            return Err(DateError::InvalidMonth { month, year });
        }
        if !(MIN_DAY..=days_in_month(year, month)).contains(&day) {
            return Err(DateError::InvalidDay { day, month, year });
        }
        Ok(Self { year, month, day })
    }

    /// Components must already be known to be valid.
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Ordinal day within the year, January 1 is 1
    pub const fn day_of_year(&self) -> u16 {
        day_of_year(self.year, self.month, self.day)
    }

    pub const fn to_absolute(self) -> AbsoluteDay {
        AbsoluteDay::new(absolute_from_parts(self.year, self.month, self.day))
    }

    /// Inverts [`Self::to_absolute`] by forward search.
    ///
    /// `day` must satisfy [`AbsoluteDay::is_supported`].
    pub fn from_absolute(day: AbsoluteDay) -> Self {
        debug_assert!(day.is_supported(), "absolute day {day} is outside years 1-{MAX_YEAR}");
        let n = day.get();

        // A year never has more than 366 days, so this is at or below the answer.
        let mut year = n / 366;
        // Invariant: the new-year boundary strictly grows with `year`, so the
        // loop stops once it passes `n`.
        while n >= absolute_from_parts(year + 1, JANUARY, MIN_DAY) {
            year += 1;
        }

        let mut month = JANUARY;
        // Invariant: month ends grow strictly; December's end is past `n`.
        while n > absolute_from_parts(year, month, days_in_month(year, month)) {
            month += 1;
        }

        let day = n - absolute_from_parts(year, month, MIN_DAY) + 1;
        debug_assert!((1..=31).contains(&day));
        Self {
            year,
            month,
            day: day as u8,
        }
    }

    /// The date `days` later, or `None` past either end of years `1..=MAX_YEAR`.
    pub fn checked_add(self, days: i32) -> Option<Self> {
        let day = self.to_absolute().get().checked_add(days).map(AbsoluteDay::new)?;
        day.is_supported().then(|| Self::from_absolute(day))
    }

    /// Helper to parse i32 with better error messages
    fn parse_i32(s: &str) -> Result<i32, ParseError> {
        s.parse::<i32>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl From<GregorianDate> for AbsoluteDay {
    fn from(date: GregorianDate) -> Self {
        date.to_absolute()
    }
}

impl From<AbsoluteDay> for GregorianDate {
    fn from(day: AbsoluteDay) -> Self {
        Self::from_absolute(day)
    }
}

impl FromStr for GregorianDate {
    type Err = ParseError;

    /// Parses ISO `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {trimmed}"
            )));
        }

        let year = Self::parse_i32(parts[0])?;
        let month = Self::parse_u8(parts[1])?;
        let day = Self::parse_u8(parts[2])?;

        Self::new(year, month, day).map_err(ParseError::from)
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= DECEMBER);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Ordinal day within the year, January 1 is 1
pub const fn day_of_year(year: i32, month: u8, day: u8) -> u16 {
    let mut total = day as u16;
    let mut m = JANUARY;
    while m < month {
        total += days_in_month(year, m) as u16;
        m += 1;
    }
    total
}

/// Absolute day of unchecked components; the search loops probe one past
/// the last valid year or month end.
pub(crate) const fn absolute_from_parts(year: i32, month: u8, day: u8) -> i32 {
    let prior = year - 1;
    day_of_year(year, month, day) as i32
        + 365 * prior
        + prior / LEAP_YEAR_CYCLE // Julian leap days before this year...
        - prior / CENTURY_CYCLE // ...minus prior century years...
        + prior / GREGORIAN_CYCLE // ...plus prior years divisible by 400
}
