//! Sun position from the NOAA fractional-year approximation.
//!
//! Accurate to about a minute for sunrise and sunset at non-polar latitudes.
//! All instants are minutes past midnight UTC of the given civil day.

use crate::clock::{Clock, UtcDateTime};
use crate::consts::{HORIZON_ANGLE, MINUTES_PER_DEGREE, SOLAR_NOON_MINUTES};
use crate::gregorian::is_leap_year;
use crate::location::Location;
use std::f64::consts::PI;

/// Whether the sun crosses the horizon on a given day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Daylight {
    /// Minutes past midnight UTC; may fall outside `0..1440` far from the
    /// prime meridian.
    Regular { sunrise: f64, sunset: f64 },
    /// The sun stays above the horizon.
    PolarDay,
    /// The sun stays below the horizon.
    PolarNight,
}

/// Solar state for one instant at one location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarEvent {
    /// Solar declination, in radians
    pub declination: f64,
    /// Apparent minus mean solar time, in minutes
    pub equation_of_time: f64,
    /// Angle between the sun and the local vertical, in degrees
    pub zenith: f64,
    pub daylight: Daylight,
    pub is_night: bool,
}

impl SolarEvent {
    pub fn at(time: &UtcDateTime, location: &Location) -> Self {
        let gamma = fractional_year(time);
        let eq_time = equation_of_time(gamma);
        let decl = declination(gamma);
        let lat = location.latitude().to_radians();
        let lng = location.longitude();

        let daylight = match horizon_hour_angle(lat, decl) {
            HourAngle::Degrees(hour_angle) => Daylight::Regular {
                sunrise: SOLAR_NOON_MINUTES - MINUTES_PER_DEGREE * (lng + hour_angle) - eq_time,
                sunset: SOLAR_NOON_MINUTES - MINUTES_PER_DEGREE * (lng - hour_angle) - eq_time,
            },
            HourAngle::AlwaysAbove => {
                log::debug!("sun never sets at {location:?} on {}", time.date());
                Daylight::PolarDay
            }
            HourAngle::AlwaysBelow => {
                log::debug!("sun never rises at {location:?} on {}", time.date());
                Daylight::PolarNight
            }
        };

        let true_solar_time = time.minutes_of_day() + eq_time + MINUTES_PER_DEGREE * lng;
        let zenith = zenith_angle(lat, decl, true_solar_time);
        let is_night = match daylight {
            Daylight::Regular { .. } => zenith > HORIZON_ANGLE,
            Daylight::PolarDay => false,
            Daylight::PolarNight => true,
        };

        log::trace!(
            "{time}: declination {decl:.5} rad, equation of time {eq_time:.2} min, zenith {zenith:.2} deg"
        );

        Self {
            declination: decl,
            equation_of_time: eq_time,
            zenith,
            daylight,
            is_night,
        }
    }

    pub const fn sunrise(&self) -> Option<f64> {
        match self.daylight {
            Daylight::Regular { sunrise, .. } => Some(sunrise),
            Daylight::PolarDay | Daylight::PolarNight => None,
        }
    }

    pub const fn sunset(&self) -> Option<f64> {
        match self.daylight {
            Daylight::Regular { sunset, .. } => Some(sunset),
            Daylight::PolarDay | Daylight::PolarNight => None,
        }
    }
}

/// Whether the sun is below the horizon at `time`.
pub fn is_night_at(time: &UtcDateTime, location: &Location) -> bool {
    SolarEvent::at(time, location).is_night
}

/// Whether the sun is below the horizon now.
pub fn is_night<C: Clock>(clock: &C, location: &Location) -> bool {
    is_night_at(&clock.now(), location)
}

/// Day/night now, together with today's sunrise and sunset.
pub fn is_night_with_times<C: Clock>(clock: &C, location: &Location) -> (bool, Daylight) {
    let event = SolarEvent::at(&clock.now(), location);
    (event.is_night, event.daylight)
}

/// Fractional year angle, in radians
pub fn fractional_year(time: &UtcDateTime) -> f64 {
    let date = time.date();
    let days_in_year = if is_leap_year(date.year()) { 366.0 } else { 365.0 };
    let hour = f64::from(time.hour());
    2.0 * PI / days_in_year * (f64::from(date.day_of_year()) - 1.0 + (hour - 12.0) / 24.0)
}

/// Equation of time, in minutes
pub fn equation_of_time(gamma: f64) -> f64 {
    229.18
        * (0.000_075 + 0.001_868 * gamma.cos()
            - 0.032_077 * gamma.sin()
            - 0.014_615 * (2.0 * gamma).cos()
            - 0.040_849 * (2.0 * gamma).sin())
}

/// Solar declination, in radians
pub fn declination(gamma: f64) -> f64 {
    0.006_918 - 0.399_912 * gamma.cos() + 0.070_257 * gamma.sin()
        - 0.006_758 * (2.0 * gamma).cos()
        + 0.000_907 * (2.0 * gamma).sin()
        - 0.002_697 * (3.0 * gamma).cos()
        + 0.001_48 * (3.0 * gamma).sin()
}

enum HourAngle {
    Degrees(f64),
    AlwaysAbove,
    AlwaysBelow,
}

/// Hour angle of sunrise/sunset. Outside `[-1, 1]` the sun never reaches
/// the horizon: below means it stays up, above means it stays down.
fn horizon_hour_angle(lat: f64, decl: f64) -> HourAngle {
    let cos_hour_angle =
        HORIZON_ANGLE.to_radians().cos() / lat.cos() / decl.cos() - lat.tan() * decl.tan();
    if cos_hour_angle < -1.0 {
        HourAngle::AlwaysAbove
    } else if cos_hour_angle > 1.0 {
        HourAngle::AlwaysBelow
    } else {
        HourAngle::Degrees(cos_hour_angle.acos().to_degrees())
    }
}

/// Zenith angle in degrees, from true solar time in minutes.
fn zenith_angle(lat: f64, decl: f64, true_solar_time: f64) -> f64 {
    // Solar time / 4 is degrees past local midnight, so its cosine is the
    // negated hour-angle cosine.
    let cos_zenith = lat.sin() * decl.sin()
        - lat.cos() * decl.cos() * (true_solar_time / MINUTES_PER_DEGREE).to_radians().cos();
    cos_zenith.clamp(-1.0, 1.0).acos().to_degrees()
}
