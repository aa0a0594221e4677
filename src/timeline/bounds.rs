use hifitime::{Duration, Epoch};
use itertools::{Itertools, MinMaxResult};

use crate::prelude::{Flight, Track};

/// Time range a [Timeline](super::Timeline) is constrained to
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds {
    pub lower: Epoch,
    pub upper: Epoch,
}

impl Bounds {
    /// Builds [Bounds] spanning a single [Track]
    pub fn from_track(track: &Track) -> Option<Self> {
        Some(Self {
            lower: track.start()?,
            upper: track.end()?,
        })
    }
    /// Builds [Bounds] spanning every sample of every [Track]
    pub fn from_tracks<'a>(tracks: impl IntoIterator<Item = &'a Track>) -> Option<Self> {
        match tracks.into_iter().flat_map(|track| track.epochs()).minmax() {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(t) => Some(Self { lower: t, upper: t }),
            MinMaxResult::MinMax(lower, upper) => Some(Self { lower, upper }),
        }
    }
    pub fn span(&self) -> Duration {
        self.upper - self.lower
    }
    /// Fewer than two distinct instants: nothing to play
    pub fn is_degenerate(&self) -> bool {
        self.lower >= self.upper
    }
    pub fn contains(&self, t: Epoch) -> bool {
        t >= self.lower && t <= self.upper
    }
    pub fn clamp(&self, t: Epoch) -> Epoch {
        if t < self.lower {
            self.lower
        } else if t > self.upper {
            self.upper
        } else {
            t
        }
    }
}

/// What the [Timeline](super::Timeline) should follow
#[derive(Debug, Copy, Clone)]
pub enum Selection<'a> {
    /// A single flight was selected
    Single(&'a Flight),
    /// Overview of every visible flight
    Visible(&'a [Flight]),
}

impl Selection<'_> {
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            Self::Single(flight) => Bounds::from_track(&flight.track),
            Self::Visible(flights) => Bounds::from_tracks(flights.iter().map(|f| &f.track)),
        }
    }
    /// Distinct sampling instants of the selection, in chronological order
    pub(crate) fn epochs(&self) -> Vec<Epoch> {
        match self {
            Self::Single(flight) => flight.track.epochs().dedup().collect(),
            Self::Visible(flights) => flights
                .iter()
                .map(|f| f.track.epochs())
                .kmerge()
                .dedup()
                .collect(),
        }
    }
}
