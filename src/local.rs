//! The Hebrew date as observed at a location, where each day starts at
//! sunset rather than midnight.
//!
//! Local time is approximated from longitude alone: one hour per 15 degrees
//! east of Greenwich, with no time zone or daylight saving rules.

use crate::absolute::AbsoluteDay;
use crate::clock::{Clock, UtcDateTime};
use crate::consts::MINUTES_PER_DAY;
use crate::hebrew::HebrewDate;
use crate::holiday::{day_of_hanukkah, day_of_passover};
use crate::location::Location;
use crate::solar::SolarEvent;

/// Everything derived from one reading of the clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalDay {
    pub time: UtcDateTime,
    pub hebrew_date: HebrewDate,
    pub solar: SolarEvent,
}

impl LocalDay {
    /// Near 0001-01-01 and 9999-12-31 the local day may lie outside the
    /// supported range; the date then holds at the first or last valid day.
    pub fn at(time: UtcDateTime, location: &Location) -> Self {
        let solar = SolarEvent::at(&time, location);
        let (day_offset, local_fraction) = local_day(&time, location.longitude());

        let civil = time.date().to_absolute() + day_offset;
        // Night before local noon is pre-dawn and still belongs to the civil day.
        let day = if solar.is_night && local_fraction > 0.5 {
            log::debug!("{time}: after sunset, the Hebrew date moves past absolute day {civil}");
            civil + 1
        } else {
            civil
        };
        if !day.is_supported() {
            log::debug!("{time}: absolute day {day} is out of range, holding at the nearest end");
        }
        let hebrew_date = HebrewDate::from_absolute(day.clamp(AbsoluteDay::EPOCH, AbsoluteDay::MAX));

        Self {
            time,
            hebrew_date,
            solar,
        }
    }

    pub fn is_night(&self) -> bool {
        self.solar.is_night
    }

    pub fn day_of_hanukkah(&self) -> i32 {
        day_of_hanukkah(self.hebrew_date)
    }

    pub fn day_of_passover(&self) -> i32 {
        day_of_passover(self.hebrew_date)
    }
}

/// Local civil day relative to the UTC date (-1, 0 or 1), and the fraction
/// of that local day already elapsed.
fn local_day(time: &UtcDateTime, longitude: f64) -> (i32, f64) {
    let offset = f64::from(time.hour()) / 24.0
        + f64::from(time.minute()) / MINUTES_PER_DAY
        + longitude / 360.0;
    let day_offset = offset.floor();
    (day_offset as i32, offset - day_offset)
}

/// The Hebrew date in effect at `time` for an observer at `location`.
pub fn hebrew_date_at(time: &UtcDateTime, location: &Location) -> HebrewDate {
    LocalDay::at(*time, location).hebrew_date
}

/// The Hebrew date in effect now.
pub fn current_hebrew_date<C: Clock>(clock: &C, location: &Location) -> HebrewDate {
    hebrew_date_at(&clock.now(), location)
}

/// Answers "what is today" questions for one fixed location.
///
/// Each call reads the clock once; use [`Self::today`] when several answers
/// must agree on the same instant.
#[derive(Debug, Clone)]
pub struct LocalDateResolver<C> {
    clock: C,
    location: Location,
}

impl<C: Clock> LocalDateResolver<C> {
    pub const fn new(clock: C, location: Location) -> Self {
        Self { clock, location }
    }

    pub const fn location(&self) -> &Location {
        &self.location
    }

    pub fn today(&self) -> LocalDay {
        LocalDay::at(self.clock.now(), &self.location)
    }

    pub fn current_hebrew_date(&self) -> HebrewDate {
        current_hebrew_date(&self.clock, &self.location)
    }

    pub fn is_night(&self) -> bool {
        crate::solar::is_night(&self.clock, &self.location)
    }

    pub fn solar_event(&self) -> SolarEvent {
        SolarEvent::at(&self.clock.now(), &self.location)
    }

    pub fn day_of_hanukkah(&self) -> i32 {
        self.today().day_of_hanukkah()
    }

    pub fn day_of_passover(&self) -> i32 {
        self.today().day_of_passover()
    }
}
