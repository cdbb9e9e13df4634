use chrono::{Local, Timelike};

use super::TimeSample;

/// Source of wall-clock samples.
///
/// The view polls this once per tick from the ticker thread, hence `Send + Sync`.
pub trait WallClock: Send + Sync {
    fn now(&self) -> TimeSample;
}

/// Local time from the host system clock.
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&self) -> TimeSample {
        let now = Local::now();
        // chrono reports leap seconds as nanosecond >= 1e9; `new` clamps them.
        TimeSample::new(now.hour(), now.minute(), now.second(), now.nanosecond())
    }
}

/// A clock frozen at one sample.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct FixedClock(pub TimeSample);

impl WallClock for FixedClock {
    #[inline]
    fn now(&self) -> TimeSample {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_returns_its_sample() {
        let s = TimeSample::new(4, 20, 0, 0);
        assert_eq!(FixedClock(s).now(), s);
    }

    #[test]
    fn system_clock_samples_are_in_range() {
        let s = SystemClock.now();
        assert!(s.hour < 24 && s.minute < 60 && s.second < 60);
        assert!(s.nanosecond < 1_000_000_000);
    }
}
