use std::time::{Duration, Instant};

/// Admits at most one event per `interval`.
#[derive(Debug, Clone)]
pub struct Throttle {
    interval: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub fn try_acquire(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now.saturating_duration_since(last) < self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }

    /// Time left until the next event would be admitted.
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.last {
            Some(last) => self
                .interval
                .saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_event_is_admitted() {
        let mut throttle = Throttle::new(Duration::from_secs(1));
        assert!(throttle.try_acquire(Instant::now()));
    }

    #[test]
    fn test_events_inside_interval_are_rejected() {
        let start = Instant::now();
        let mut throttle = Throttle::new(Duration::from_secs(1));

        assert!(throttle.try_acquire(start));
        assert!(!throttle.try_acquire(start + Duration::from_millis(500)));
        assert_eq!(
            throttle.remaining(start + Duration::from_millis(400)),
            Duration::from_millis(600)
        );
        assert!(throttle.try_acquire(start + Duration::from_secs(1)));
        assert!(!throttle.try_acquire(start + Duration::from_millis(1999)));
        assert!(throttle.try_acquire(start + Duration::from_secs(2)));
    }

    #[test]
    fn test_rejected_events_do_not_extend_the_window() {
        let start = Instant::now();
        let mut throttle = Throttle::new(Duration::from_secs(1));

        assert!(throttle.try_acquire(start));
        assert!(!throttle.try_acquire(start + Duration::from_millis(900)));
        assert!(throttle.try_acquire(start + Duration::from_millis(1000)));
    }

    #[test]
    fn test_zero_interval_admits_everything() {
        let now = Instant::now();
        let mut throttle = Throttle::new(Duration::ZERO);

        assert!(throttle.try_acquire(now));
        assert!(throttle.try_acquire(now));
        assert_eq!(throttle.remaining(now), Duration::ZERO);
    }
}
