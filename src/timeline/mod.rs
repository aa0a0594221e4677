//! Playback timeline
mod bounds;
mod cfg;
mod ticker;

pub use bounds::{Bounds, Selection};
pub use cfg::{Advance, Config};

use hifitime::Epoch;
use log::{debug, warn};
use std::time::Instant;

use crate::Error;
use ticker::Ticker;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum State {
    #[default]
    Stopped,
    Playing,
}

/// Snapshot of a [Timeline], for readers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineState {
    /// Current instant. None until something is selected.
    pub current: Option<Epoch>,
    pub playing: bool,
    pub bounds: Option<Bounds>,
}

/// Single authoritative playback clock.
/// Every view reads [Timeline::current] and queries the interpolator from it.
/// [Timeline::tick] and [Timeline::seek] are the only writers, and both take
/// `&mut self`: a reader never observes a partial update.
#[derive(Debug)]
pub struct Timeline {
    /// Timeline configuration
    cfg: Config,
    /// Playback state
    state: State,
    /// Current bounds
    bounds: Option<Bounds>,
    /// Current instant, always within bounds
    current: Option<Epoch>,
    /// Sampling instants of current selection
    epochs: Vec<Epoch>,
    /// Recurring timer, only while playing
    ticker: Option<Ticker>,
}

impl Timeline {
    /// Builds a new [Timeline], with nothing selected yet
    pub fn new(cfg: Config) -> Result<Self, Error> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            state: State::default(),
            bounds: None,
            current: None,
            epochs: Vec::new(),
            ticker: None,
        })
    }
    pub fn config(&self) -> &Config {
        &self.cfg
    }
    /// Follows a new [Selection]: playback stops, bounds are recomputed
    /// and the current instant rewinds to the lower bound.
    /// An empty visible set clears the timeline.
    pub fn select(&mut self, selection: Selection<'_>) {
        self.stop();
        self.bounds = selection.bounds();
        self.current = self.bounds.map(|b| b.lower);
        self.epochs = selection.epochs();
        match self.bounds {
            Some(bounds) => debug!("timeline bounds: {} - {}", bounds.lower, bounds.upper),
            None => debug!("timeline cleared: no samples selected"),
        }
    }
    /// Drops the current selection
    pub fn clear(&mut self) {
        self.stop();
        self.bounds = None;
        self.current = None;
        self.epochs.clear();
    }
    pub fn current(&self) -> Option<Epoch> {
        self.current
    }
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }
    pub fn is_playing(&self) -> bool {
        self.state == State::Playing
    }
    pub fn state(&self) -> TimelineState {
        TimelineState {
            current: self.current,
            playing: self.is_playing(),
            bounds: self.bounds,
        }
    }
    /// Elapsed fraction of the bounds, within [0, 1]
    pub fn progress(&self) -> f64 {
        match (self.bounds, self.current) {
            (Some(bounds), Some(current)) if !bounds.is_degenerate() => {
                ((current - bounds.lower).to_seconds() / bounds.span().to_seconds())
                    .clamp(0.0, 1.0)
            },
            _ => 0.0,
        }
    }
    /// Starts playing. Has no effect while already playing,
    /// or when the selection spans fewer than two distinct instants.
    pub fn play(&mut self) {
        self.play_at(Instant::now());
    }
    /// Starts playing, the first tick being due one period after `now`.
    /// See [Timeline::play].
    pub fn play_at(&mut self, now: Instant) {
        if self.is_playing() {
            return;
        }
        match self.bounds {
            Some(bounds) if !bounds.is_degenerate() => {},
            _ => {
                warn!("nothing to play: degenerate timeline");
                return;
            },
        }
        let period = std::time::Duration::from_secs_f64(self.cfg.tick_period.to_seconds());
        self.ticker = Some(Ticker::arm(period, now));
        self.state = State::Playing;
        debug!("{:?} - playing, ticker armed ({})", self.current, self.cfg.tick_period);
    }
    /// Stops playing, preserving the current instant.
    /// Releases the ticker. Calling this while stopped has no effect.
    pub fn stop(&mut self) {
        if self.ticker.take().is_some() {
            debug!("{:?} - stopped, ticker released", self.current);
        }
        self.state = State::Stopped;
    }
    /// Alias of [Timeline::stop]
    pub fn pause(&mut self) {
        self.stop();
    }
    pub fn toggle(&mut self) {
        if self.is_playing() {
            self.stop();
        } else {
            self.play();
        }
    }
    /// Moves to `t`, clamped within bounds. Playback state is preserved.
    /// Has no effect until something is selected.
    pub fn seek(&mut self, t: Epoch) {
        if let Some(bounds) = self.bounds {
            self.current = Some(bounds.clamp(t));
        }
    }
    /// Cooperative driver: applies every tick due at `now`, one at a time.
    /// Returns the number of ticks applied.
    pub fn poll(&mut self, now: Instant) -> usize {
        let mut fired = 0;
        while self.is_playing() {
            let due = match self.ticker.as_mut() {
                Some(ticker) => ticker.due(now),
                None => false,
            };
            if !due {
                break;
            }
            self.tick();
            fired += 1;
        }
        fired
    }
    /// Advances the current instant once. Reaching the upper bound stops playback.
    /// Returns false when stopped (nothing happens).
    pub fn tick(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        let (Some(bounds), Some(current)) = (self.bounds, self.current) else {
            self.stop();
            return false;
        };
        let next = match self.cfg.advance {
            Advance::Continuous(step) => current + step,
            Advance::Waypoint => {
                let idx = self.epochs.partition_point(|t| *t <= current);
                self.epochs.get(idx).copied().unwrap_or(bounds.upper)
            },
        };
        if next >= bounds.upper {
            self.current = Some(bounds.upper);
            debug!("{} - end of timeline", bounds.upper);
            self.stop();
        } else {
            self.current = Some(next);
        }
        true
    }
}

impl Drop for Timeline {
    fn drop(&mut self) {
        self.stop();
    }
}
