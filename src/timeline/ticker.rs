use std::time::{Duration, Instant};

/// Recurring wall clock timer. Owned by a single [Timeline](super::Timeline):
/// it exists only while playing, and dropping it is the release.
#[derive(Debug)]
pub(crate) struct Ticker {
    period: Duration,
    deadline: Instant,
}

impl Ticker {
    /// Arms a new [Ticker] whose first deadline is one period after `now`
    pub fn arm(period: Duration, now: Instant) -> Self {
        Self {
            period,
            deadline: now + period,
        }
    }
    /// Consumes one elapsed deadline, if any
    pub fn due(&mut self, now: Instant) -> bool {
        if now >= self.deadline {
            self.deadline += self.period;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod test {
    use super::Ticker;
    use std::time::{Duration, Instant};

    #[test]
    fn deadlines() {
        let t0 = Instant::now();
        let period = Duration::from_millis(100);
        let mut ticker = Ticker::arm(period, t0);
        assert!(!ticker.due(t0));
        assert!(!ticker.due(t0 + Duration::from_millis(99)));
        assert!(ticker.due(t0 + Duration::from_millis(100)));
        assert!(!ticker.due(t0 + Duration::from_millis(150)));

        // late poll: every missed deadline fires, one at a time
        let late = t0 + Duration::from_millis(450);
        let mut fired = 0;
        while ticker.due(late) {
            fired += 1;
        }
        assert_eq!(fired, 3);
    }
}
