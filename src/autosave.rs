//! Autosave coordinator binding the debounce schedulers to a document.
//!
//! One coordinator per open document. It owns two independently-debounced
//! channels (content and title) sharing one persistence store and one
//! [`StatusSignal`]: a burst of title keystrokes never resets the content
//! timer, and vice versa.

use crate::debounce::Debouncer;
use crate::models::{Snapshot, UpdatePostRequest};
use crate::status::{SaveStatus, StatusSignal};
use crate::store::PostStore;
use futures::future::BoxFuture;
use futures::FutureExt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Coalesces edits on a resolved document into debounced persistence calls
/// and derives the visible save status.
pub struct AutosaveCoordinator {
    status: StatusSignal,
    content: Debouncer<Snapshot>,
    title: Debouncer<String>,
}

/// Build the debounced action for one channel.
///
/// The returned future issues a single partial update and writes the outcome
/// to the shared status at settlement time. Overlapping calls are allowed;
/// whichever settles last wins the visible status.
fn save_action<T, F>(
    store: Arc<dyn PostStore>,
    post_id: String,
    status: StatusSignal,
    channel: &'static str,
    to_request: F,
) -> impl Fn(T) -> BoxFuture<'static, ()> + Send + Sync
where
    T: Send + 'static,
    F: Fn(T) -> UpdatePostRequest + Send + Sync + 'static,
{
    move |payload: T| {
        let store = Arc::clone(&store);
        let post_id = post_id.clone();
        let status = status.clone();
        let request = to_request(payload);
        async move {
            debug!(post_id = %post_id, channel, "dispatching autosave");
            match store.update(&post_id, request).await {
                Ok(_) => status.set(SaveStatus::Saved),
                Err(err) => {
                    warn!(post_id = %post_id, channel, error = %err, "autosave failed");
                    status.set(SaveStatus::Error);
                }
            }
        }
        .boxed()
    }
}

impl AutosaveCoordinator {
    /// Bind a coordinator to a resolved post id.
    ///
    /// Callers must not construct a coordinator before the id is known; edits
    /// arriving in that window are the session's to drop.
    pub fn new(
        post_id: String,
        store: Arc<dyn PostStore>,
        status: StatusSignal,
        delay: Duration,
    ) -> Self {
        let content = Debouncer::new(
            delay,
            save_action(
                Arc::clone(&store),
                post_id.clone(),
                status.clone(),
                "content",
                UpdatePostRequest::content,
            ),
        );
        let title = Debouncer::new(
            delay,
            save_action(store, post_id, status.clone(), "title", UpdatePostRequest::title),
        );
        Self {
            status,
            content,
            title,
        }
    }

    /// Record a content edit: flip the status to `Saving` immediately and
    /// (re)arm the content channel's delay window.
    pub fn on_content_change(&self, snapshot: Snapshot) {
        self.status.set(SaveStatus::Saving);
        self.content.schedule(snapshot);
    }

    /// Record a title edit on the independent title channel.
    pub fn on_title_change(&self, title: String) {
        self.status.set(SaveStatus::Saving);
        self.title.schedule(title);
    }

    /// Flush any pending write on both channels, then cancel their timers.
    ///
    /// Pending state is the authority here, not the displayed status label:
    /// a flush dispatches whenever a debounced write is armed, regardless of
    /// what the signal currently shows. Dispatched writes are fire-and-forget;
    /// teardown does not wait for their responses.
    pub fn flush_all(&self) {
        self.content.flush(None);
        self.title.flush(None);
        self.content.cancel();
        self.title.cancel();
    }

    /// Whether either channel has a write armed but not yet dispatched.
    pub fn has_pending_writes(&self) -> bool {
        self.content.is_pending() || self.title.is_pending()
    }

    /// Handle to the shared status signal.
    pub fn status(&self) -> StatusSignal {
        self.status.clone()
    }
}
