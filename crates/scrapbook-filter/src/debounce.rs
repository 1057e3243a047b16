//! Trailing-edge debounce on the tokio timer

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Delay used by the filter bars
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

/// Coalesces bursts of triggers into one trailing call
///
/// Every `trigger` restarts the timer; the callback runs once, with the
/// latest value, after `delay` has passed without another trigger. Must be
/// used from within a tokio runtime.
pub struct Debouncer<T> {
    delay: Duration,
    callback: Arc<dyn Fn(T) + Send + Sync>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(delay: Duration, callback: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            delay,
            callback: Arc::new(callback),
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules the callback with `value`, replacing any pending call
    pub fn trigger(&mut self, value: T) {
        if let Some(previous) = self.pending.take() {
            if !previous.is_finished() {
                tracing::trace!("debounce restarted");
            }
            previous.abort();
        }

        let delay = self.delay;
        let callback = Arc::clone(&self.callback);
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback(value);
        }));
    }

    /// True while a scheduled call has not run yet
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}
