//! Periodic tick scheduling.
//!
//! [`subscribe`] starts a dedicated thread that invokes a callback at a fixed
//! rate until the returned [`TickHandle`] is cancelled or dropped. Ticks are
//! scheduled against absolute deadlines; a slow callback delays the next tick
//! but does not shift the cadence. Missed deadlines are skipped rather than
//! replayed in a burst.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::error::ConfigError;

/// Owner of a running ticker. Dropping it stops the ticker and waits for the
/// thread to exit, so no callback runs once the handle is gone.
#[derive(Debug)]
pub struct TickHandle {
    stop: Option<Sender<()>>,
    thread: Option<JoinHandle<()>>,
    ticks: Arc<AtomicU64>,
    interval: Duration,
}

/// Runs `on_tick` every `interval` until the returned handle is cancelled or dropped.
pub fn subscribe<F>(interval: Duration, mut on_tick: F) -> Result<TickHandle, ConfigError>
where
    F: FnMut() + Send + 'static,
{
    if interval.is_zero() {
        return Err(ConfigError::new("tick_interval", "must be non-zero"));
    }

    let (stop_tx, stop_rx) = mpsc::channel::<()>();
    let ticks = Arc::new(AtomicU64::new(0));
    let counter = Arc::clone(&ticks);

    let thread = thread::Builder::new()
        .name("catclock-ticker".to_string())
        .spawn(move || {
            let mut deadline = Instant::now() + interval;
            loop {
                let wait = deadline.saturating_duration_since(Instant::now());
                match stop_rx.recv_timeout(wait) {
                    Err(RecvTimeoutError::Timeout) => {}
                    // Explicit stop or the handle was dropped.
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }

                on_tick();
                counter.fetch_add(1, Ordering::Relaxed);

                deadline += interval;
                let now = Instant::now();
                if deadline < now {
                    let behind = now.duration_since(deadline);
                    let skipped = behind.as_nanos() / interval.as_nanos() + 1;
                    log::trace!("ticker fell behind, skipping {skipped} tick(s)");
                    deadline += interval * u32::try_from(skipped).unwrap_or(u32::MAX);
                }
            }
            log::debug!("ticker thread exiting");
        })
        .map_err(|e| ConfigError::new("tick_interval", format!("failed to spawn ticker: {e}")))?;

    log::info!("ticker subscribed ({} ms interval)", interval.as_millis());

    Ok(TickHandle {
        stop: Some(stop_tx),
        thread: Some(thread),
        ticks,
        interval,
    })
}

impl TickHandle {
    /// Stops the ticker and waits for the in-flight callback, if any, to finish.
    pub fn cancel(mut self) {
        self.shutdown();
    }

    /// Number of callbacks run so far.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// False once the ticker thread has exited (for example after the callback panicked).
    pub fn is_active(&self) -> bool {
        self.thread.as_ref().is_some_and(|t| !t.is_finished())
    }

    fn shutdown(&mut self) {
        if let Some(stop) = self.stop.take() {
            // The thread may already be gone; a failed send is fine.
            let _ = stop.send(());
        }
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                log::warn!("ticker callback panicked");
            }
            log::info!("ticker cancelled after {} tick(s)", self.ticks());
        }
    }
}

impl Drop for TickHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicBool;

    #[test]
    fn zero_interval_is_rejected() {
        let err = subscribe(Duration::ZERO, || {}).unwrap_err();
        assert_eq!(err.field, "tick_interval");
    }

    #[test]
    fn ticks_until_cancelled() {
        let handle = subscribe(Duration::from_millis(2), || {}).unwrap();
        let start = Instant::now();
        while handle.ticks() < 3 {
            assert!(start.elapsed() < Duration::from_secs(5), "ticker never fired");
            thread::sleep(Duration::from_millis(1));
        }
        assert!(handle.is_active());
        handle.cancel();
    }

    #[test]
    fn no_callback_runs_after_cancel() {
        let fired = Arc::new(AtomicU64::new(0));
        let seen = Arc::clone(&fired);
        let handle = subscribe(Duration::from_millis(1), move || {
            seen.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

        thread::sleep(Duration::from_millis(10));
        handle.cancel();
        let after_cancel = fired.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(10));
        assert_eq!(fired.load(Ordering::SeqCst), after_cancel);
    }

    #[test]
    fn drop_releases_the_thread() {
        let running = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&running);
        {
            let _handle = subscribe(Duration::from_millis(1), move || {
                flag.store(true, Ordering::SeqCst);
            })
            .unwrap();
            let start = Instant::now();
            while !running.load(Ordering::SeqCst) {
                assert!(start.elapsed() < Duration::from_secs(5), "ticker never fired");
                thread::sleep(Duration::from_millis(1));
            }
        }
        running.store(false, Ordering::SeqCst);
        thread::sleep(Duration::from_millis(10));
        assert!(!running.load(Ordering::SeqCst));
    }

    #[test]
    fn long_interval_cancels_promptly() {
        let handle = subscribe(Duration::from_secs(3600), || {}).unwrap();
        let start = Instant::now();
        handle.cancel();
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
