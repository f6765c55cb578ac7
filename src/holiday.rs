use crate::DateError;
use crate::absolute::AbsoluteDay;
use crate::consts::{ADAR, ADAR_II, KISLEV, MIN_DAY, NISAN};
use crate::hebrew::{self, HebrewDate};
use crate::prelude::*;

/// A recurring holiday: a Hebrew start date and a length in days.
///
/// A holiday in Adar II falls in Adar in common years, which have no Adar II.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{} / {} for {} days", day, month, length)]
pub struct Holiday {
    month: u8,
    day: u8,
    length: u8,
}

impl Holiday {
    /// Eight days from 25 Kislev
    pub const HANUKKAH: Self = Self {
        month: KISLEV,
        day: 25,
        length: 8,
    };

    /// Eight days from 15 Nisan
    pub const PASSOVER: Self = Self {
        month: NISAN,
        day: 15,
        length: 8,
    };

    /// # Errors
    /// Returns `DateError::InvalidHoliday` for a month outside `1..=13`, a day
    /// outside `1..=30` or a zero length.
    pub fn new(month: u8, day: u8, length: u8) -> Result<Self, DateError> {
        if !(NISAN..=ADAR_II).contains(&month) || !(MIN_DAY..=30).contains(&day) || length == 0 {
            return Err(DateError::InvalidHoliday { month, day, length });
        }
        Ok(Self { month, day, length })
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    pub const fn length(&self) -> u8 {
        self.length
    }

    /// First day of the holiday in Hebrew year `year`.
    pub const fn start_in(&self, year: i32) -> AbsoluteDay {
        AbsoluteDay::new(start_of(year, self.month, self.day))
    }

    /// Days since the holiday began: `0..length` while it is on, negative
    /// before it starts.
    pub fn day_offset(&self, date: HebrewDate) -> i32 {
        day_of_holiday(date, self.month, self.day, i32::from(self.length))
    }

    /// 1-based day of the holiday, or `None` when `date` is outside it.
    pub fn day_number(&self, date: HebrewDate) -> Option<u8> {
        u8::try_from(self.day_offset(date))
            .ok()
            .filter(|&offset| offset < self.length)
            .map(|offset| offset + 1)
    }
}

/// Offset of `date` from the holiday starting on `day` of `month`.
///
/// Measured against this year's occurrence unless that one already ended,
/// in which case next year's is used and the result is negative.
pub fn day_of_holiday(date: HebrewDate, month: u8, day: u8, length: i32) -> i32 {
    let absolute = date.to_absolute().get();
    let nth_day = absolute - start_of(date.year(), month, day);
    if nth_day >= length {
        absolute - start_of(date.year() + 1, month, day)
    } else {
        nth_day
    }
}

const fn start_of(year: i32, month: u8, day: u8) -> i32 {
    let month = if month == ADAR_II && !hebrew::is_leap_year(year) {
        ADAR
    } else {
        month
    };
    hebrew::absolute_from_parts(year, month, day)
}

/// Day of Hanukkah, 1 through 8 while it lasts.
pub fn day_of_hanukkah(date: HebrewDate) -> i32 {
    Holiday::HANUKKAH.day_offset(date) + 1
}

/// Day of Passover, 1 through 8 while it lasts.
pub fn day_of_passover(date: HebrewDate) -> i32 {
    Holiday::PASSOVER.day_offset(date) + 1
}
