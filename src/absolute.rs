//! The shared day axis both calendars convert through.

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Days elapsed since Sunday, December 31, 1 BC (proleptic Gregorian).
///
/// January 1, year 1 is day 1. There is no year 0, so the day before is 0
/// and the Hebrew epoch lies far in the negatives.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AbsoluteDay(i32);

impl AbsoluteDay {
    /// January 1, year 1
    pub const EPOCH: Self = Self(1);
    /// December 31, 9999, the last supported day
    pub const MAX: Self = Self(3_652_059);

    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the day number as i32
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Whether both calendars can represent this day.
    pub const fn is_supported(self) -> bool {
        self.0 >= Self::EPOCH.0 && self.0 <= Self::MAX.0
    }

    pub const fn weekday(self) -> Weekday {
        match self.0.rem_euclid(7) {
            0 => Weekday::Sunday,
            1 => Weekday::Monday,
            2 => Weekday::Tuesday,
            3 => Weekday::Wednesday,
            4 => Weekday::Thursday,
            5 => Weekday::Friday,
            _ => Weekday::Saturday,
        }
    }
}

impl Add<i32> for AbsoluteDay {
    type Output = Self;

    fn add(self, rhs: i32) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl Sub<i32> for AbsoluteDay {
    type Output = Self;

    fn sub(self, rhs: i32) -> Self::Output {
        Self(self.0 - rhs)
    }
}

impl Sub for AbsoluteDay {
    type Output = i32;

    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

/// Day of the week, Sunday first as in the Hebrew week
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}
