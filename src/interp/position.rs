use hifitime::Epoch;

use super::{lerp, InterpolatedPoint, Search};
use crate::prelude::{Track, Waypoint};

/// Position Interpolator.
/// Pure: identical inputs always produce bit-identical outputs,
/// so one instance may be shared by any number of readers.
#[derive(Debug, Copy, Clone, Default)]
pub struct PositionInterpolator {
    search: Search,
}

impl PositionInterpolator {
    pub fn new(search: Search) -> Self {
        Self { search }
    }
    /// Derives aircraft state at `t`:
    /// - None on empty [Track] (no data)
    /// - last sample when `t` is not known
    /// - first (resp. last) sample when `t` precedes (resp. exceeds) the [Track]:
    ///   we never extrapolate
    /// - otherwise, linear interpolation of each field between the bracketing pair.
    pub fn interpolate(&self, track: &Track, t: Option<Epoch>) -> Option<InterpolatedPoint> {
        let first = track.first()?;
        let last = track.last()?;
        let t = match t {
            Some(t) if track.len() > 1 => t,
            _ => return Some(last.into()),
        };
        if t <= first.epoch {
            return Some(first.into());
        }
        if t >= last.epoch {
            return Some(last.into());
        }
        let (prev, next) = match self.search {
            Search::Binary => track.bracket(t)?,
            Search::Linear => Self::linear_bracket(track.waypoints(), t)?,
        };
        let waypoints = track.waypoints();
        Some(Self::lerp_pair(&waypoints[prev], &waypoints[next], t))
    }
    fn linear_bracket(waypoints: &[Waypoint], t: Epoch) -> Option<(usize, usize)> {
        waypoints
            .windows(2)
            .position(|pair| pair[0].epoch <= t && t < pair[1].epoch)
            .map(|idx| (idx, idx + 1))
    }
    fn lerp_pair(prev: &Waypoint, next: &Waypoint, t: Epoch) -> InterpolatedPoint {
        let dt = (next.epoch - prev.epoch).to_seconds();
        let fraction = if dt > 0.0 {
            ((t - prev.epoch).to_seconds() / dt).clamp(0.0, 1.0)
        } else {
            // duplicate instants: snap to next
            1.0
        };
        InterpolatedPoint {
            epoch: t,
            latitude: lerp(prev.latitude, next.latitude, fraction),
            longitude: lerp(prev.longitude, next.longitude, fraction),
            altitude: lerp(prev.altitude, next.altitude, fraction),
            speed: lerp(prev.speed, next.speed, fraction),
            bracket: Some((*prev, *next)),
        }
    }
}
