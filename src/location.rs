use crate::DateError;
use serde::{Deserialize, Serialize};

/// A fixed observer position in degrees, north and east positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LocationFields")]
pub struct Location {
    latitude: f64,
    longitude: f64,
}

/// Unvalidated shape of [`Location`] as it appears in configuration.
#[derive(Deserialize)]
struct LocationFields {
    latitude: f64,
    longitude: f64,
}

impl Location {
    /// # Errors
    /// Returns `DateError::InvalidLatitude` outside `-90..=90` and
    /// `DateError::InvalidLongitude` outside `-180..=180`; NaN is rejected.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DateError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(DateError::InvalidLatitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(DateError::InvalidLongitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl TryFrom<LocationFields> for Location {
    type Error = DateError;

    fn try_from(fields: LocationFields) -> Result<Self, Self::Error> {
        Self::new(fields.latitude, fields.longitude)
    }
}
