//! Periodic redraw scheduling.
//!
//! A [`RedrawTimer`] runs on its own thread and does nothing but post
//! [`RedrawRequest`] ticks into a channel. The paired [`RedrawQueue`] stays on
//! the UI thread; the widget drains it there and only then repaints, so the
//! timer thread never reads or writes widget state.
//!
//! The channel holds at most one pending tick. If the UI thread falls behind,
//! extra ticks are dropped rather than queued.
//!
//! The thread waits on a stop channel between ticks, so cancelling returns
//! as soon as the thread observes the signal, not after a full period.

use crate::error::TimerError;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TrySendError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Default redraw cadence (~100 Hz).
pub const DEFAULT_REDRAW_INTERVAL: Duration = Duration::from_millis(10);

/// A "please repaint" message from the timer thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedrawRequest {
    /// Monotonic tick counter, starting at 1.
    pub tick: u64,
}

/// Handle to a running redraw timer.
///
/// When dropped, the timer is stopped and its thread joined.
#[derive(Debug)]
pub struct RedrawTimer {
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
    period: Duration,
}

impl RedrawTimer {
    /// Start ticking every `period` on a background thread.
    pub fn start(period: Duration) -> Result<(Self, RedrawQueue), TimerError> {
        if period.is_zero() {
            return Err(TimerError::ZeroPeriod);
        }

        let (tx, rx) = mpsc::sync_channel(1);
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let handle = thread::Builder::new()
            .name("balloon-redraw".into())
            .spawn(move || {
                let mut tick = 0u64;
                loop {
                    match stop_rx.recv_timeout(period) {
                        Err(RecvTimeoutError::Timeout) => {}
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                    tick = tick.wrapping_add(1);
                    match tx.try_send(RedrawRequest { tick }) {
                        Ok(()) | Err(TrySendError::Full(_)) => {}
                        Err(TrySendError::Disconnected(_)) => break,
                    }
                }
            })?;

        tracing::debug!(period_ms = period.as_millis() as u64, "redraw timer started");
        Ok((
            Self {
                stop: Some(stop_tx),
                handle: Some(handle),
                period,
            },
            RedrawQueue { rx },
        ))
    }

    /// Tick period.
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Whether the timer thread is still scheduled to tick.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Stop ticking and join the thread. Safe to call more than once.
    ///
    /// Returns without waiting out the current period.
    pub fn cancel(&mut self) {
        if let Some(stop) = self.stop.take() {
            // the thread may already have exited
            let _ = stop.send(());
        }
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::warn!("redraw timer thread panicked");
            } else {
                tracing::debug!("redraw timer stopped");
            }
        }
    }
}

impl Drop for RedrawTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// UI-thread end of the redraw channel.
#[derive(Debug)]
pub struct RedrawQueue {
    rx: Receiver<RedrawRequest>,
}

impl RedrawQueue {
    /// Consume all pending ticks without blocking. Returns how many there were.
    pub fn drain(&self) -> usize {
        self.rx.try_iter().count()
    }

    /// Block for up to `timeout` waiting for the next tick.
    ///
    /// Returns `None` on timeout or once the timer has stopped.
    pub fn wait(&self, timeout: Duration) -> Option<RedrawRequest> {
        match self.rx.recv_timeout(timeout) {
            Ok(request) => Some(request),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }
}
