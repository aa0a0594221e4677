//! Position interpolation
pub mod position;

pub use position::PositionInterpolator;

use hifitime::Epoch;

#[cfg(feature = "serde")]
use serde::Deserialize;

use crate::{bearing::bearing_deg, prelude::Track, prelude::Waypoint};

/// Strategy used to locate the bracketing pair
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub enum Search {
    /// Binary search on sampling instants: O(log n)
    #[default]
    Binary,
    /// Slow path, O(n) scan. Only meaningful for very short tracks.
    Linear,
}

/// Aircraft state derived at an arbitrary instant. Never stored.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct InterpolatedPoint {
    /// Instant this state describes
    pub epoch: Epoch,
    /// Latitude [ddeg]
    pub latitude: f64,
    /// Longitude [ddeg]
    pub longitude: f64,
    /// Altitude [ft]
    pub altitude: f64,
    /// Ground speed [kt]
    pub speed: f64,
    /// Samples surrounding [Self::epoch], when this state was interpolated.
    /// None when a sample was returned verbatim.
    pub bracket: Option<(Waypoint, Waypoint)>,
}

impl From<&Waypoint> for InterpolatedPoint {
    fn from(w: &Waypoint) -> Self {
        Self {
            epoch: w.epoch,
            latitude: w.latitude,
            longitude: w.longitude,
            altitude: w.altitude,
            speed: w.speed,
            bracket: None,
        }
    }
}

impl InterpolatedPoint {
    /// Returns (latitude, longitude) in decimal degrees
    pub fn coordinates(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
    /// Drops the bracketing pair
    pub fn waypoint(&self) -> Waypoint {
        Waypoint::new(
            self.epoch,
            self.latitude,
            self.longitude,
            self.altitude,
            self.speed,
        )
    }
    /// Heading [deg] of the bracketing pair, if any
    pub fn heading_deg(&self) -> Option<f64> {
        let (prev, next) = self.bracket?;
        Some(bearing_deg(prev.coordinates(), next.coordinates()))
    }
}

/// Interpolates `track` at `t` with the default [Search] strategy.
/// See [PositionInterpolator::interpolate].
pub fn interpolate(track: &Track, t: Option<Epoch>) -> Option<InterpolatedPoint> {
    PositionInterpolator::default().interpolate(track, t)
}

pub(crate) fn lerp(a: f64, b: f64, fraction: f64) -> f64 {
    a + (b - a) * fraction
}
