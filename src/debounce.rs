//! Delayed commitment of rapidly changing input.
//!
//! [`DebouncedValue`] is the clock-driven state machine; [`Debouncer`] drives
//! the same rule with tokio timers and publishes commits on a watch channel.

use std::time::{Duration, Instant};

/// Default quiet period before a typed value is committed.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Raw input paired with the value last committed from it.
#[derive(Debug, Clone)]
pub struct DebouncedValue<T> {
    raw: T,
    committed: T,
    delay: Duration,
    deadline: Option<Instant>,
}

impl<T: Clone> DebouncedValue<T> {
    pub fn new(initial: T, delay: Duration) -> Self {
        Self {
            raw: initial.clone(),
            committed: initial,
            delay,
            deadline: None,
        }
    }

    pub fn raw(&self) -> &T {
        &self.raw
    }

    pub fn committed(&self) -> &T {
        &self.committed
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Records a new raw value, replacing any pending commit.
    pub fn set(&mut self, value: T, now: Instant) {
        self.raw = value;
        self.deadline = Some(now + self.delay);
    }

    /// Commits the raw value once its quiet period has elapsed.
    ///
    /// Returns the newly committed value exactly once per quiet period.
    pub fn poll(&mut self, now: Instant) -> Option<&T> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.committed = self.raw.clone();
                Some(&self.committed)
            }
            _ => None,
        }
    }

    /// Commits the raw value immediately, e.g. when the user presses enter.
    pub fn flush(&mut self) -> &T {
        self.deadline = None;
        self.committed = self.raw.clone();
        &self.committed
    }
}

#[cfg(feature = "client")]
pub use self::timer::Debouncer;

#[cfg(feature = "client")]
mod timer {
    use std::sync::Arc;
    use std::time::Duration;

    use tokio::sync::watch;
    use tokio::task::JoinHandle;

    /// Timer-backed debouncer.
    ///
    /// Every [`push`](Debouncer::push) aborts the timer scheduled by the
    /// previous one, so only the last value of a burst is ever published.
    /// Must be used from within a tokio runtime.
    pub struct Debouncer<T> {
        delay: Duration,
        sender: Arc<watch::Sender<T>>,
        pending: Option<JoinHandle<()>>,
    }

    impl<T: Send + Sync + 'static> Debouncer<T> {
        pub fn new(initial: T, delay: Duration) -> Self {
            let (sender, _) = watch::channel(initial);
            Self {
                delay,
                sender: Arc::new(sender),
                pending: None,
            }
        }

        /// Receiver notified once per committed value.
        pub fn subscribe(&self) -> watch::Receiver<T> {
            self.sender.subscribe()
        }

        pub fn push(&mut self, value: T) {
            if let Some(pending) = self.pending.take() {
                pending.abort();
            }

            let sender = Arc::clone(&self.sender);
            let delay = self.delay;
            self.pending = Some(tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                sender.send_replace(value);
            }));
        }

        /// Drops the pending value without committing it.
        pub fn cancel(&mut self) {
            if let Some(pending) = self.pending.take() {
                pending.abort();
            }
        }
    }

    impl<T> Drop for Debouncer<T> {
        fn drop(&mut self) {
            if let Some(pending) = self.pending.take() {
                pending.abort();
            }
        }
    }
}
