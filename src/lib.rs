//! Hebrew calendar dates and sunset-aware day/night classification.
//!
//! Gregorian and Hebrew dates both convert through [`AbsoluteDay`], a plain
//! day count starting at January 1 of year 1. The Hebrew day begins at
//! sunset, so "today" depends on where the observer stands; [`LocalDay`]
//! combines the calendar with the sun's position to answer that.
//!
//! ```
//! use luach::{GregorianDate, HebrewDate, Location, LocalDay, UtcDateTime, day_of_hanukkah};
//!
//! let rosh_hashanah = HebrewDate::new(5785, luach::TISHREI, 1).unwrap();
//! assert_eq!(rosh_hashanah.to_gregorian(), GregorianDate::new(2024, 10, 3).unwrap());
//!
//! let jerusalem = Location::new(31.7683, 35.2137).unwrap();
//! let evening = UtcDateTime::new(2024, 12, 25, 16, 0, 0).unwrap();
//! let today = LocalDay::at(evening, &jerusalem);
//! assert!(today.is_night());
//! assert_eq!(today.hebrew_date.to_string(), "25 / 9 / 5785");
//! assert_eq!(day_of_hanukkah(today.hebrew_date), 1);
//! ```

mod absolute;
mod clock;
mod consts;
pub mod gregorian;
pub mod hebrew;
mod holiday;
mod local;
mod location;
mod prelude;
pub mod solar;

pub use absolute::{AbsoluteDay, Weekday};
pub use clock::{Clock, FixedClock, SystemClock, UtcDateTime};
pub use consts::*;
pub use gregorian::GregorianDate;
pub use hebrew::{HebrewDate, YearKind};
pub use holiday::{Holiday, day_of_hanukkah, day_of_holiday, day_of_passover};
pub use local::{LocalDateResolver, LocalDay, current_hebrew_date, hebrew_date_at};
pub use location::Location;
pub use solar::{Daylight, SolarEvent, is_night, is_night_at, is_night_with_times};

use crate::prelude::*;

/// Error for date, time and location components that are out of range.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum DateError {
    #[error("Invalid year: {0} (must be 1-{max})", max = MAX_YEAR)]
    InvalidYear(i32),

    #[error(
        "Invalid Hebrew year: {0} (must be {min}-{max})",
        min = MIN_HEBREW_YEAR,
        max = MAX_HEBREW_YEAR
    )]
    InvalidHebrewYear(i32),

    /// A Hebrew date with no Gregorian counterpart in years `1..=MAX_YEAR`.
    #[error("Hebrew date {day} / {month} / {year} falls outside 0001-01-01 to 9999-12-31")]
    OutOfRange { day: u8, month: u8, year: i32 },

    /// The month does not exist in that year.
    #[error("Invalid month {month} for year {year}")]
    InvalidMonth { month: u8, year: i32 },

    #[error("Invalid day {day} for month {month} of year {year}")]
    InvalidDay { day: u8, month: u8, year: i32 },

    #[error("Invalid time of day {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u8, minute: u8, second: u8 },

    #[error("Invalid latitude: {0} (must be -90 to 90)")]
    InvalidLatitude(f64),

    #[error("Invalid longitude: {0} (must be -180 to 180)")]
    InvalidLongitude(f64),

    #[error("Invalid holiday starting {day} / {month} lasting {length} days")]
    InvalidHoliday { month: u8, day: u8, length: u8 },
}

/// Error parsing the text form of a date.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "{_0}")]
    InvalidDate(DateError),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidDate(err) => Some(err),
            Self::InvalidFormat(_) | Self::EmptyInput => None,
        }
    }
}

impl From<DateError> for ParseError {
    fn from(err: DateError) -> Self {
        Self::InvalidDate(err)
    }
}
