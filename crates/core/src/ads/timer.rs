//! Background timer that drives an `AdScheduler`

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use super::{AdScheduler, Schedule, TickOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HideReason {
    /// Display time ran out.
    Elapsed,
    /// User clicked the ad.
    Dismissed,
    /// Timer was cancelled while the ad was up.
    Cancelled,
}

/// Receives ad events from the timer thread.
pub trait AdSink: Send {
    fn show(&mut self, image: Option<&str>, duration: Duration);

    fn hide(&mut self, reason: HideReason);

    /// Whether a full-screen overlay (screen-off, prayer overlay) is currently up.
    fn overlay_visible(&self) -> bool {
        false
    }
}

enum Command {
    Dismiss,
    Cancel,
}

/// Handle to a running ad timer. Dropping it cancels the timer.
pub struct AdTimer {
    tx: Sender<Command>,
    handle: Option<JoinHandle<()>>,
}

impl AdTimer {
    pub fn spawn<S: AdSink + 'static>(scheduler: AdScheduler, schedule: Schedule, sink: S) -> Self {
        let (tx, rx) = mpsc::channel();
        let handle = std::thread::spawn(move || run(scheduler, schedule, sink, rx));
        Self {
            tx,
            handle: Some(handle),
        }
    }

    /// Close the visible ad, if any.
    pub fn dismiss(&self) {
        let _ = self.tx.send(Command::Dismiss);
    }

    /// Stop the timer and wait for the thread to exit.
    pub fn cancel(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        let _ = self.tx.send(Command::Cancel);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::warn!("ad timer thread panicked");
            }
        }
    }
}

impl Drop for AdTimer {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run<S: AdSink>(
    mut scheduler: AdScheduler,
    schedule: Schedule,
    mut sink: S,
    rx: mpsc::Receiver<Command>,
) {
    let period = schedule.period.max(Duration::from_millis(1));
    let start = Instant::now();
    let mut first_tick = Some(start + schedule.first_delay);
    let mut next_tick = start + period;

    loop {
        let wake_at = [first_tick, Some(next_tick), scheduler.deadline()]
            .into_iter()
            .flatten()
            .min()
            .unwrap_or(next_tick);

        match rx.recv_timeout(wake_at.saturating_duration_since(Instant::now())) {
            Ok(Command::Dismiss) => {
                if scheduler.dismiss() {
                    sink.hide(HideReason::Dismissed);
                }
                continue;
            }
            Ok(Command::Cancel) | Err(RecvTimeoutError::Disconnected) => {
                if scheduler.dismiss() {
                    sink.hide(HideReason::Cancelled);
                }
                break;
            }
            Err(RecvTimeoutError::Timeout) => {}
        }

        let now = Instant::now();
        if scheduler.poll(now) {
            sink.hide(HideReason::Elapsed);
        }

        let mut due = false;
        if first_tick.is_some_and(|at| now >= at) {
            first_tick = None;
            due = true;
        }
        if now >= next_tick {
            due = true;
            while next_tick <= now {
                next_tick += period;
            }
        }
        if !due {
            continue;
        }

        match scheduler.tick(now, sink.overlay_visible()) {
            TickOutcome::Shown { image } => {
                tracing::debug!(image = ?image, "showing ad");
                sink.show(image.as_deref(), scheduler.display());
            }
            TickOutcome::Suppressed | TickOutcome::AlreadyShowing | TickOutcome::Disabled => {}
        }
    }
    tracing::debug!("ad timer stopped");
}
