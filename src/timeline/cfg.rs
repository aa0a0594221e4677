use hifitime::{Duration, Unit};

#[cfg(feature = "serde")]
use serde::Deserialize;

use crate::Error;

/// Simulated time advancement, per tick
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub enum Advance {
    /// Fixed simulated time step
    Continuous(Duration),
    /// Jump to the next recorded sample, whatever the gap.
    /// Unevenly sampled tracks will not play at a steady pace.
    Waypoint,
}

impl Default for Advance {
    fn default() -> Self {
        Self::Continuous(1.0 * Unit::Second)
    }
}

/// Timeline configuration
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Wall clock time between two ticks
    pub tick_period: Duration,
    /// Simulated time advancement per tick
    pub advance: Advance,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_period: 1.0 * Unit::Second,
            advance: Advance::default(),
        }
    }
}

impl Config {
    /// Copies and returns [Config] with updated wall clock tick period
    pub fn with_tick_period(&self, tick_period: Duration) -> Self {
        let mut s = *self;
        s.tick_period = tick_period;
        s
    }
    /// Copies and returns [Config] with fixed simulated step
    pub fn with_step(&self, step: Duration) -> Self {
        let mut s = *self;
        s.advance = Advance::Continuous(step);
        s
    }
    /// Copies and returns [Config] stepping from one sample to the next
    pub fn with_waypoint_stepping(&self) -> Self {
        let mut s = *self;
        s.advance = Advance::Waypoint;
        s
    }
    pub fn validate(&self) -> Result<(), Error> {
        if self.tick_period <= Duration::ZERO {
            return Err(Error::InvalidConfig("tick period should be positive"));
        }
        if let Advance::Continuous(step) = self.advance {
            if step <= Duration::ZERO {
                return Err(Error::InvalidConfig("simulated step should be positive"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{Advance, Config};
    use hifitime::Unit;

    #[test]
    fn default_pace() {
        let cfg = Config::default();
        assert_eq!(cfg.tick_period, 1.0 * Unit::Second);
        assert_eq!(cfg.advance, Advance::Continuous(1.0 * Unit::Second));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn invalid() {
        let cfg = Config::default().with_tick_period(0.0 * Unit::Second);
        assert!(cfg.validate().is_err());
        let cfg = Config::default().with_step(-1.0 * Unit::Second);
        assert!(cfg.validate().is_err());
        let cfg = Config::default()
            .with_step(-1.0 * Unit::Second)
            .with_waypoint_stepping();
        assert!(cfg.validate().is_ok());
    }
}
