//! The live clock view.
//!
//! The view owns the current time sample. While visible, a ticker samples the
//! wall clock and drops each reading into a one-slot mailbox, overwriting any
//! reading the host has not collected yet. The host calls [`ClockView::pump`]
//! from its own loop to take it, then [`ClockView::render`] to draw. Only the
//! mailbox is shared with the ticker thread; hiding or dropping the view
//! cancels the ticker.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use image::RgbaImage;

use crate::error::ConfigError;
use crate::face::ClockFace;
use crate::scene::DrawList;
use crate::ticker::{self, TickHandle};
use crate::time::{TimeSample, WallClock};

/// Holds at most one unread sample; newer readings replace older ones.
#[derive(Debug, Default)]
struct LatestSample(Mutex<Option<TimeSample>>);

impl LatestSample {
    fn put(&self, sample: TimeSample) {
        *self.lock() = Some(sample);
    }

    fn take(&self) -> Option<TimeSample> {
        self.lock().take()
    }

    fn lock(&self) -> MutexGuard<'_, Option<TimeSample>> {
        // The slot holds plain data, so a panic mid-write cannot leave it torn.
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

struct Live {
    ticker: TickHandle,
    latest: Arc<LatestSample>,
}

pub struct ClockView<C: WallClock + 'static> {
    face: ClockFace,
    clock: Arc<C>,
    current: TimeSample,
    live: Option<Live>,
    scene: DrawList,
}

impl<C: WallClock + 'static> ClockView<C> {
    pub fn new(face: ClockFace, clock: C) -> Self {
        Self {
            face,
            clock: Arc::new(clock),
            current: TimeSample::default(),
            live: None,
            scene: DrawList::new(),
        }
    }

    #[inline]
    pub fn face(&self) -> &ClockFace {
        &self.face
    }

    /// The sample the next frame will be drawn from.
    #[inline]
    pub fn current(&self) -> TimeSample {
        self.current
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.live.is_some()
    }

    /// Starts ticking. Takes one sample immediately so the first frame shows
    /// the real time. Calling it on a visible view does nothing.
    pub fn on_appear(&mut self) -> Result<(), ConfigError> {
        if self.live.is_some() {
            return Ok(());
        }

        self.current = self.clock.now();

        let latest = Arc::new(LatestSample::default());
        let slot = Arc::clone(&latest);
        let clock = Arc::clone(&self.clock);
        let ticker = ticker::subscribe(self.face.config().tick_interval, move || {
            slot.put(clock.now());
        })?;

        self.live = Some(Live { ticker, latest });
        log::debug!("clock view visible at {}", self.current);
        Ok(())
    }

    /// Stops ticking and releases the ticker thread.
    pub fn on_disappear(&mut self) {
        if let Some(live) = self.live.take() {
            let ticks = live.ticker.ticks();
            live.ticker.cancel();
            log::debug!("clock view hidden after {ticks} tick(s)");
        }
    }

    /// Takes the newest pending sample. Returns true when the frame must be redrawn.
    pub fn pump(&mut self) -> bool {
        let Some(live) = &self.live else { return false };
        match live.latest.take() {
            Some(sample) if sample != self.current => {
                self.current = sample;
                true
            }
            _ => false,
        }
    }

    /// Draws the frame for the current sample.
    pub fn render(&mut self, background: Option<&RgbaImage>) -> RgbaImage {
        let overlay = self.face.render_overlay_with(&self.current, &mut self.scene);
        self.face.compose(&overlay, background)
    }
}

impl<C: WallClock + 'static> Drop for ClockView<C> {
    fn drop(&mut self) {
        self.on_disappear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::thread;
    use std::time::{Duration, Instant};

    use crate::config::FaceConfig;
    use crate::time::FixedClock;

    /// Advances one second per reading.
    #[derive(Default)]
    struct SteppingClock(AtomicU32);

    impl WallClock for SteppingClock {
        fn now(&self) -> TimeSample {
            let n = self.0.fetch_add(1, Ordering::SeqCst);
            TimeSample::new(0, 0, n % 60, 0)
        }
    }

    struct SharedClock(Arc<SteppingClock>);

    impl WallClock for SharedClock {
        fn now(&self) -> TimeSample {
            self.0.now()
        }
    }

    fn face() -> ClockFace {
        ClockFace::new(FaceConfig::default().tick_interval(Duration::from_millis(1))).unwrap()
    }

    fn pump_until_changed<C: WallClock + 'static>(view: &mut ClockView<C>) -> bool {
        let start = Instant::now();
        while start.elapsed() < Duration::from_secs(5) {
            if view.pump() {
                return true;
            }
            thread::sleep(Duration::from_millis(1));
        }
        false
    }

    // ── mailbox ───────────────────────────────────────────────────────────

    #[test]
    fn mailbox_keeps_only_the_newest_sample() {
        let slot = LatestSample::default();
        for second in 0..500 {
            slot.put(TimeSample::new(0, 0, second % 60, 0));
        }
        assert_eq!(slot.take(), Some(TimeSample::new(0, 0, 499 % 60, 0)));
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn unpumped_view_holds_one_pending_sample() {
        let clock = Arc::new(SteppingClock::default());
        let mut view = ClockView::new(face(), SharedClock(Arc::clone(&clock)));
        view.on_appear().unwrap();

        let start = Instant::now();
        while clock.0.load(Ordering::SeqCst) < 20 {
            assert!(start.elapsed() < Duration::from_secs(5), "ticker never fired");
            thread::sleep(Duration::from_millis(1));
        }

        // Stop the ticker but keep the mailbox to inspect it.
        let live = view.live.take().unwrap();
        live.ticker.cancel();

        // Many ticks went by without a pump; only the last reading is kept.
        let last = clock.0.load(Ordering::SeqCst) - 1;
        assert_eq!(live.latest.take(), Some(TimeSample::new(0, 0, last % 60, 0)));
        assert_eq!(live.latest.take(), None);
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    #[test]
    fn hidden_view_does_not_pump() {
        let mut view = ClockView::new(face(), SteppingClock::default());
        assert!(!view.is_visible());
        assert!(!view.pump());
    }

    #[test]
    fn appear_samples_immediately() {
        let sample = TimeSample::new(8, 15, 0, 0);
        let mut view = ClockView::new(face(), FixedClock(sample));
        view.on_appear().unwrap();
        assert_eq!(view.current(), sample);
        assert!(view.is_visible());
    }

    #[test]
    fn ticks_update_current_sample() {
        let mut view = ClockView::new(face(), SteppingClock::default());
        view.on_appear().unwrap();
        let first = view.current();
        assert!(pump_until_changed(&mut view));
        assert_ne!(view.current(), first);
    }

    #[test]
    fn unchanged_time_needs_no_redraw() {
        let mut view = ClockView::new(face(), FixedClock(TimeSample::new(1, 2, 3, 4)));
        view.on_appear().unwrap();
        thread::sleep(Duration::from_millis(10));
        assert!(!view.pump());
    }

    #[test]
    fn disappear_stops_updates() {
        let mut view = ClockView::new(face(), SteppingClock::default());
        view.on_appear().unwrap();
        view.on_disappear();
        assert!(!view.is_visible());
        let frozen = view.current();
        thread::sleep(Duration::from_millis(10));
        assert!(!view.pump());
        assert_eq!(view.current(), frozen);
    }

    #[test]
    fn appear_is_idempotent() {
        let mut view = ClockView::new(face(), SteppingClock::default());
        view.on_appear().unwrap();
        view.on_appear().unwrap();
        view.on_disappear();
        view.on_disappear();
        assert!(!view.is_visible());
    }

    #[test]
    fn render_uses_face_size() {
        let mut view = ClockView::new(face(), FixedClock(TimeSample::new(6, 0, 0, 0)));
        view.on_appear().unwrap();
        assert_eq!(view.render(None).dimensions(), (150, 300));
    }
}
