//! Clock abstraction
//!
//! Expiration is a read-time derivation over wall-clock time, so every
//! consumer of "now" goes through this trait. Production code uses
//! [`SystemClock`]; tests drive time explicitly with [`ManualClock`].

use chrono::{DateTime, Duration, Utc};
use std::sync::Mutex;

/// Source of the current time
pub trait Clock: Send + Sync {
    /// Current wall-clock time
    fn now(&self) -> DateTime<Utc>;
}

/// System wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually controlled clock for tests
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// Create a clock frozen at the given instant
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Move the clock forward
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }

    /// Set the clock to an exact instant
    pub fn set(&self, to: DateTime<Utc>) {
        *self.now.lock().unwrap() = to;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_manual_clock_advance() {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let clock = ManualClock::new(start);
        assert_eq!(clock.now(), start);

        clock.advance(Duration::days(3));
        assert_eq!(clock.now(), start + Duration::days(3));

        clock.set(start);
        assert_eq!(clock.now(), start);
    }

    #[test]
    fn test_system_clock_is_monotonic_enough() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
