use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use panel_logging::panel_debug;

/// Cadence of the unattended log poll.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Cancellable repeating timer for the log poll. Fires `on_tick` every
/// `interval` from start until stopped (or dropped), so no timer thread
/// leaks across sessions or test runs. On-demand log fetches go around
/// this handle entirely; nothing resets or duplicates the cadence.
pub struct PollerHandle {
    stop: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl PollerHandle {
    pub fn start(interval: Duration, on_tick: impl Fn() + Send + 'static) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = stop.clone();
        let thread = thread::spawn(move || {
            panel_debug!("poller started, interval {:?}", interval);
            // Sleep in short slices so stop() takes effect promptly.
            let slice = Duration::from_millis(25).min(interval);
            loop {
                let mut waited = Duration::ZERO;
                while waited < interval {
                    if stop_flag.load(Ordering::Relaxed) {
                        return;
                    }
                    let step = slice.min(interval - waited).max(Duration::from_millis(1));
                    thread::sleep(step);
                    waited += step;
                }
                if stop_flag.load(Ordering::Relaxed) {
                    return;
                }
                on_tick();
            }
        });
        Self {
            stop,
            thread: Some(thread),
        }
    }

    /// Signals the timer thread and waits for it to exit.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
