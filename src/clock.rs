//! Civil UTC instants and the clock they are read from.

use crate::DateError;
use crate::gregorian::GregorianDate;
use crate::prelude::*;
use chrono::{Datelike, NaiveDateTime, Timelike, Utc};

/// A UTC instant at one-second resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}T{:02}:{:02}:{:02}Z", date, hour, minute, second)]
pub struct UtcDateTime {
    date: GregorianDate,
    hour: u8,
    minute: u8,
    second: u8,
}

impl UtcDateTime {
    /// 1970-01-01T00:00:00Z
    pub const UNIX_EPOCH: Self = Self {
        date: GregorianDate::new_unchecked(1970, 1, 1),
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// # Errors
    /// Returns `DateError` if the date is invalid or the time of day is not
    /// within `00:00:00..=23:59:59`.
    pub fn new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, DateError> {
        let date = GregorianDate::new(year, month, day)?;
        if hour > 23 || minute > 59 || second > 59 {
            return Err(DateError::InvalidTime {
                hour,
                minute,
                second,
            });
        }
        Ok(Self {
            date,
            hour,
            minute,
            second,
        })
    }

    pub const fn date(&self) -> GregorianDate {
        self.date
    }

    pub const fn hour(&self) -> u8 {
        self.hour
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }

    pub const fn second(&self) -> u8 {
        self.second
    }

    /// Minutes since UTC midnight, with seconds as a fraction
    pub fn minutes_of_day(&self) -> f64 {
        f64::from(self.hour) * 60.0 + f64::from(self.minute) + f64::from(self.second) / 60.0
    }
}

impl TryFrom<NaiveDateTime> for UtcDateTime {
    type Error = DateError;

    fn try_from(value: NaiveDateTime) -> Result<Self, Self::Error> {
        // chrono keeps every component in range; only the year can fall outside ours
        let narrow = |n: u32| u8::try_from(n).map_err(|_| DateError::InvalidYear(value.year()));
        Self::new(
            value.year(),
            narrow(value.month())?,
            narrow(value.day())?,
            narrow(value.hour())?,
            narrow(value.minute())?,
            narrow(value.second())?,
        )
    }
}

/// Source of the current UTC instant.
pub trait Clock {
    fn now(&self) -> UtcDateTime;
}

/// Reads the system wall clock.
///
/// A wall clock outside years `1..=MAX_YEAR` cannot be represented. In that
/// case [`Clock::now`] logs a warning and reports [`UtcDateTime::UNIX_EPOCH`],
/// so every answer derived from it is wrong. Call [`SystemClock::try_now`]
/// to handle that case instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// # Errors
    /// Returns `DateError::InvalidYear` when the wall clock is outside years
    /// `1..=MAX_YEAR`.
    pub fn try_now(&self) -> Result<UtcDateTime, DateError> {
        UtcDateTime::try_from(Utc::now().naive_utc())
    }
}

impl Clock for SystemClock {
    fn now(&self) -> UtcDateTime {
        self.try_now().unwrap_or_else(|err| {
            log::warn!("system clock is unusable, reporting {}: {err}", UtcDateTime::UNIX_EPOCH);
            UtcDateTime::UNIX_EPOCH
        })
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub UtcDateTime);

impl Clock for FixedClock {
    fn now(&self) -> UtcDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> UtcDateTime {
        (**self).now()
    }
}
