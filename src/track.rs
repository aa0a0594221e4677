//! Flight track
use hifitime::Epoch;
use itertools::Itertools;

use crate::{prelude::Waypoint, Error};

/// Chronologically ordered [Waypoint]s of a single flight.
/// A [Track] with fewer than 2 samples is degenerate: it can be queried
/// but it cannot be interpolated nor played back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Track {
    inner: Vec<Waypoint>,
}

impl Track {
    /// Builds a new [Track] from samples that should already be sorted in time.
    /// Equal timestamps are tolerated, decreasing timestamps are not.
    pub fn new(waypoints: Vec<Waypoint>) -> Result<Self, Error> {
        for waypoint in waypoints.iter() {
            waypoint.validate()?;
        }
        if let Some((previous, next)) = waypoints
            .iter()
            .tuple_windows()
            .find(|(previous, next)| next.epoch < previous.epoch)
        {
            return Err(Error::ChronologicalOrder {
                previous: previous.epoch,
                next: next.epoch,
            });
        }
        Ok(Self { inner: waypoints })
    }
    pub fn len(&self) -> usize {
        self.inner.len()
    }
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.inner
    }
    pub fn first(&self) -> Option<&Waypoint> {
        self.inner.first()
    }
    pub fn last(&self) -> Option<&Waypoint> {
        self.inner.last()
    }
    /// Epoch of the first sample
    pub fn start(&self) -> Option<Epoch> {
        self.first().map(|w| w.epoch)
    }
    /// Epoch of the last sample
    pub fn end(&self) -> Option<Epoch> {
        self.last().map(|w| w.epoch)
    }
    /// Sampling instants, in chronological order
    pub fn epochs(&self) -> impl Iterator<Item = Epoch> + '_ {
        self.inner.iter().map(|w| w.epoch)
    }
    /// True when this [Track] spans at least two distinct instants
    pub fn is_playable(&self) -> bool {
        match (self.start(), self.end()) {
            (Some(start), Some(end)) => start < end,
            _ => false,
        }
    }
    /// Returns the indexes of the two consecutive samples surrounding `t`,
    /// strictly inside the time span of this [Track].
    /// When `t` matches one or more samples exactly, the last of them is
    /// returned as the lower index.
    pub fn bracket(&self, t: Epoch) -> Option<(usize, usize)> {
        let (start, end) = (self.start()?, self.end()?);
        if t <= start || t >= end {
            return None;
        }
        let next = self.inner.partition_point(|w| w.epoch <= t);
        Some((next - 1, next))
    }
    /// Returns the sample closest in time to `t`. Ties resolve to the earlier sample.
    pub fn closest(&self, t: Epoch) -> Option<&Waypoint> {
        let next = self.inner.partition_point(|w| w.epoch < t);
        let after = self.inner.get(next);
        let before = next.checked_sub(1).and_then(|idx| self.inner.get(idx));
        match (before, after) {
            (Some(before), Some(after)) => {
                if (after.epoch - t).abs() < (t - before.epoch).abs() {
                    Some(after)
                } else {
                    Some(before)
                }
            },
            (Some(before), None) => Some(before),
            (None, after) => after,
        }
    }
    /// Altitude [ft] and speed [kt] series, for charting purposes
    pub fn profile(&self) -> impl Iterator<Item = (Epoch, f64, f64)> + '_ {
        self.inner.iter().map(|w| (w.epoch, w.altitude, w.speed))
    }
}
