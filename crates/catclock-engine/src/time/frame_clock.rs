use std::time::{Duration, Instant};

/// Frame pacing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time since the previous frame, clamped, in seconds.
    pub dt: f64,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Measures how evenly the host loop redraws.
///
/// Wall-clock time for the face comes from [`WallClock`](super::WallClock);
/// this clock is monotonic and only used for pacing diagnostics.
#[derive(Debug, Clone)]
pub struct FrameClock {
    first: Option<Instant>,
    last: Instant,
    frame_index: u64,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a clock whose per-frame dt is clamped to 250 ms, so a stall
    /// (debugger, suspended terminal) does not skew the average.
    pub fn new() -> Self {
        Self::with_max_dt(Duration::from_millis(250))
    }

    pub fn with_max_dt(dt_max: Duration) -> Self {
        Self { first: None, last: Instant::now(), frame_index: 0, dt_max }
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last).min(self.dt_max);
        self.last = now;
        self.first.get_or_insert(now);

        let ft = FrameTime {
            dt: dt.as_secs_f64(),
            now,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }

    /// Number of frames ticked so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frame_index
    }

    /// Mean interval between ticks, `None` before two ticks.
    pub fn average_interval(&self) -> Option<Duration> {
        let first = self.first?;
        let intervals = u32::try_from(self.frame_index.saturating_sub(1)).ok()?;
        if intervals == 0 {
            return None;
        }
        Some(self.last.saturating_duration_since(first) / intervals)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_index_increments() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
        assert_eq!(clock.frames(), 2);
    }

    #[test]
    fn dt_is_clamped() {
        let mut clock = FrameClock::with_max_dt(Duration::from_millis(1));
        std::thread::sleep(Duration::from_millis(5));
        assert!(clock.tick().dt <= 0.001);
    }

    #[test]
    fn average_interval_needs_two_ticks() {
        let mut clock = FrameClock::new();
        assert!(clock.average_interval().is_none());
        clock.tick();
        assert!(clock.average_interval().is_none());
        clock.tick();
        assert!(clock.average_interval().is_some());
    }
}
