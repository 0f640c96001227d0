use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    /// The countdown just reached zero.
    Expired,
}

/// Elapsed time and, in timed mode, the remaining seconds. Both counters are
/// advanced by the same external one second tick; the session stops feeding
/// ticks once the game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SessionClock {
    elapsed: u32,
    countdown: Option<Countdown>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Countdown {
    limit: u32,
    remaining: u32,
}

impl SessionClock {
    pub fn new(time_limit: Option<u32>) -> Self {
        Self {
            elapsed: 0,
            countdown: time_limit.map(|limit| Countdown {
                limit,
                remaining: limit,
            }),
        }
    }

    pub fn tick(&mut self) -> TickOutcome {
        self.elapsed += 1;

        let Some(countdown) = &mut self.countdown else {
            return TickOutcome::Running;
        };
        countdown.remaining = countdown.remaining.saturating_sub(1);
        if countdown.remaining == 0 {
            TickOutcome::Expired
        } else {
            TickOutcome::Running
        }
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub fn remaining(&self) -> Option<u32> {
        self.countdown.map(|c| c.remaining)
    }

    pub fn limit(&self) -> Option<u32> {
        self.countdown.map(|c| c.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untimed_clock_never_expires() {
        let mut clock = SessionClock::new(None);
        for _ in 0..1000 {
            assert_eq!(clock.tick(), TickOutcome::Running);
        }
        assert_eq!(clock.elapsed(), 1000);
        assert_eq!(clock.remaining(), None);
    }

    #[test]
    fn test_countdown_expires_on_last_tick() {
        let mut clock = SessionClock::new(Some(3));
        assert_eq!(clock.tick(), TickOutcome::Running);
        assert_eq!(clock.tick(), TickOutcome::Running);
        assert_eq!(clock.remaining(), Some(1));
        assert_eq!(clock.tick(), TickOutcome::Expired);
        assert_eq!(clock.remaining(), Some(0));
        assert_eq!(clock.elapsed(), 3);
        assert_eq!(clock.limit(), Some(3));
    }
}
