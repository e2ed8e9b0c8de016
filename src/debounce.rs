//! Generic trailing-edge debounce scheduler.
//!
//! Coalesces a burst of [`Debouncer::schedule`] calls into a single delayed
//! invocation of the action, carrying the latest arguments. Supports explicit
//! cancel and immediate flush. There is no leading-edge firing and no queue:
//! at most one pending invocation exists per debouncer, and superseded
//! arguments are dropped, never dispatched.

use futures::future::BoxFuture;
use futures::FutureExt;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

type Action<T> = Arc<dyn Fn(T) -> BoxFuture<'static, ()> + Send + Sync>;

struct Pending<T> {
    /// Latest scheduled arguments; `Some` exactly while a timer is armed.
    args: Option<T>,
    /// Bumped on every schedule/cancel/flush so a fired timer can detect it
    /// was superseded even if the abort signal has not landed yet.
    generation: u64,
    timer: Option<JoinHandle<()>>,
}

/// Debounces calls to an asynchronous action.
///
/// The action itself may still be in flight when a new window is armed; the
/// debouncer never waits for a previous invocation to settle. Overlap is the
/// caller's concern (see the autosave coordinator's status handling).
pub struct Debouncer<T: Send + 'static> {
    delay: Duration,
    action: Action<T>,
    pending: Arc<Mutex<Pending<T>>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Create a debouncer invoking `action` after `delay` of quiet.
    pub fn new<F, Fut>(delay: Duration, action: F) -> Self
    where
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self {
            delay,
            action: Arc::new(move |args| action(args).boxed()),
            pending: Arc::new(Mutex::new(Pending {
                args: None,
                generation: 0,
                timer: None,
            })),
        }
    }

    /// Record `args` as pending and (re)start the delay window.
    ///
    /// A timer already running for this debouncer is discarded; nothing fires
    /// until the input stream has been quiet for the full delay.
    pub fn schedule(&self, args: T) {
        let mut pending = self.pending.lock().expect("debouncer state poisoned");
        pending.args = Some(args);
        pending.generation += 1;
        if let Some(timer) = pending.timer.take() {
            timer.abort();
        }

        let generation = pending.generation;
        let delay = self.delay;
        let action = Arc::clone(&self.action);
        let state = Arc::clone(&self.pending);
        pending.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let fired = {
                let mut pending = state.lock().expect("debouncer state poisoned");
                if pending.generation != generation {
                    return;
                }
                pending.timer = None;
                pending.args.take()
            };
            if let Some(args) = fired {
                action(args).await;
            }
        }));
    }

    /// Discard any pending timer and arguments without invoking the action.
    ///
    /// Idempotent; cannot affect an action invocation already in flight.
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().expect("debouncer state poisoned");
        pending.generation += 1;
        pending.args = None;
        if let Some(timer) = pending.timer.take() {
            timer.abort();
            debug!("debounce timer cancelled");
        }
    }

    /// If an invocation is pending, cancel its timer and dispatch the action
    /// immediately with `args` (or the last-scheduled arguments when `args`
    /// is `None`). A no-op when nothing is pending.
    ///
    /// The dispatch is fire-and-forget: the caller does not wait for the
    /// action to settle.
    pub fn flush(&self, args: Option<T>) {
        let fired = {
            let mut pending = self.pending.lock().expect("debouncer state poisoned");
            let Some(last_scheduled) = pending.args.take() else {
                return;
            };
            pending.generation += 1;
            if let Some(timer) = pending.timer.take() {
                timer.abort();
            }
            args.unwrap_or(last_scheduled)
        };
        debug!("flushing pending debounced call");
        let action = Arc::clone(&self.action);
        tokio::spawn(async move {
            action(fired).await;
        });
    }

    /// Whether a delayed invocation is currently armed.
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .expect("debouncer state poisoned")
            .args
            .is_some()
    }
}
