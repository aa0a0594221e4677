use hifitime::Epoch;

use crate::Error;

/// One recorded sample of a flight [Track](crate::prelude::Track)
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Waypoint {
    /// Sampling instant
    pub epoch: Epoch,
    /// Latitude [ddeg]
    pub latitude: f64,
    /// Longitude [ddeg]
    pub longitude: f64,
    /// Altitude [ft]
    pub altitude: f64,
    /// Ground speed [kt]
    pub speed: f64,
}

impl Waypoint {
    /// Builds a new [Waypoint]. Coordinates are expressed in decimal degrees,
    /// altitude in feet and speed in knots.
    pub fn new(epoch: Epoch, latitude: f64, longitude: f64, altitude: f64, speed: f64) -> Self {
        Self {
            epoch,
            latitude,
            longitude,
            altitude,
            speed,
        }
    }
    /// Returns (latitude, longitude) in decimal degrees
    pub fn coordinates(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
    pub(crate) fn validate(&self) -> Result<(), Error> {
        let lat_ok = self.latitude.is_finite() && (-90.0..=90.0).contains(&self.latitude);
        let lon_ok = self.longitude.is_finite() && (-180.0..=180.0).contains(&self.longitude);
        if lat_ok && lon_ok {
            Ok(())
        } else {
            Err(Error::InvalidCoordinates {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }
}
