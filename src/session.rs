//! Page-level document session: lifecycle, wiring, and teardown flush.
//!
//! A session is single-use per mounted page instance. It owns the post
//! identity, initializes against the backend (load an existing post or
//! create a blank one), routes editor and title edits into the autosave
//! coordinator, and flushes pending writes when the page is left.

use crate::autosave::AutosaveCoordinator;
use crate::bridge::EditorChangeBridge;
use crate::config::Config;
use crate::error::AppError;
use crate::models::{CreatePostRequest, Post, Snapshot};
use crate::status::{SaveStatus, StatusSignal};
use crate::store::PostStore;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// Lifecycle of a document session.
///
/// `Uninitialized → Loading → Ready → Closed`; nothing returns from
/// `Closed`. Edits arriving before `Ready` are discarded: the document
/// identity is not resolved yet, so there is nothing safe to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    Loading,
    Ready,
    Closed,
}

/// Orchestrates one editing session over a single post.
pub struct DocumentSession {
    store: Arc<dyn PostStore>,
    config: Config,
    status: StatusSignal,
    state: SessionState,
    post: Option<Post>,
    bridge: EditorChangeBridge,
    coordinator: Option<AutosaveCoordinator>,
}

impl DocumentSession {
    /// Create an uninitialized session bound to a store.
    pub fn new(store: Arc<dyn PostStore>, config: Config) -> Self {
        Self {
            store,
            config,
            status: StatusSignal::new(),
            state: SessionState::Uninitialized,
            post: None,
            bridge: EditorChangeBridge::new(),
            coordinator: None,
        }
    }

    /// Resolve the document identity and activate the save channels.
    ///
    /// With `Some(id)` the existing post is loaded; with `None` a blank
    /// "Untitled" draft is created and its server-assigned id adopted. Only
    /// after this resolves do edits start scheduling writes.
    pub async fn init(&mut self, existing_id: Option<&str>) -> Result<&Post, AppError> {
        if self.state != SessionState::Uninitialized {
            return Err(AppError::Session("already initialized"));
        }
        self.state = SessionState::Loading;

        let loaded = match existing_id {
            Some(id) => self.store.get(id).await,
            None => self.store.create(CreatePostRequest::default()).await,
        };
        let post = match loaded {
            Ok(post) => post,
            Err(err) => {
                // A session that failed to resolve an identity never becomes
                // Ready; it can only be closed.
                self.state = SessionState::Closed;
                return Err(err);
            }
        };

        info!(post_id = %post.id, "document session ready");
        self.coordinator = Some(AutosaveCoordinator::new(
            post.id.clone(),
            Arc::clone(&self.store),
            self.status.clone(),
            self.config.debounce_delay,
        ));
        self.state = SessionState::Ready;
        Ok(&*self.post.insert(post))
    }

    /// Entry point for the editor's change notifications.
    ///
    /// The mount-time emission is swallowed by the bridge; everything else
    /// is forwarded to the content channel. Edits outside `Ready` are
    /// dropped entirely, including the immediate status flip.
    pub fn on_editor_update(&mut self, snapshot: Snapshot) {
        if self.state != SessionState::Ready {
            debug!(state = ?self.state, "dropping editor update outside ready state");
            return;
        }
        let Some(snapshot) = self.bridge.filter(snapshot) else {
            return;
        };
        if let Some(coordinator) = &self.coordinator {
            coordinator.on_content_change(snapshot);
        }
    }

    /// Entry point for title field edits (independent channel, no
    /// first-change suppression).
    pub fn on_title_change(&mut self, title: String) {
        if self.state != SessionState::Ready {
            debug!(state = ?self.state, "dropping title edit outside ready state");
            return;
        }
        if let Some(coordinator) = &self.coordinator {
            coordinator.on_title_change(title);
        }
    }

    /// Consume editor notifications from a channel until the editor hangs up.
    ///
    /// This is the subscription form of [`Self::on_editor_update`] for
    /// callers that expose the editor as a snapshot stream.
    pub async fn drive_editor(&mut self, mut updates: mpsc::UnboundedReceiver<Snapshot>) {
        while let Some(snapshot) = updates.recv().await {
            self.on_editor_update(snapshot);
        }
    }

    /// Tear the session down, flushing any pending debounced write on both
    /// channels before cancelling their timers.
    ///
    /// Flushed writes are fire-and-forget; teardown does not wait for their
    /// network responses. Legal from any state and idempotent; the session
    /// never leaves `Closed`.
    pub fn close(&mut self) {
        if self.state == SessionState::Closed {
            return;
        }
        if let Some(coordinator) = &self.coordinator {
            if coordinator.has_pending_writes() {
                info!("flushing pending saves on session close");
            }
            coordinator.flush_all();
        }
        self.state = SessionState::Closed;
    }

    /// Current save status.
    pub fn save_status(&self) -> SaveStatus {
        self.status.get()
    }

    /// Subscribe to save-status changes (for UI bindings).
    pub fn subscribe_status(&self) -> watch::Receiver<SaveStatus> {
        self.status.subscribe()
    }

    /// The loaded/created post, once the session is past `Loading`.
    pub fn post(&self) -> Option<&Post> {
        self.post.as_ref()
    }

    /// Resolved post id, if any.
    pub fn post_id(&self) -> Option<&str> {
        self.post.as_ref().map(|post| post.id.as_str())
    }

    pub fn state(&self) -> SessionState {
        self.state
    }
}

impl Drop for DocumentSession {
    fn drop(&mut self) {
        if self.state != SessionState::Ready {
            return;
        }
        if let Some(coordinator) = &self.coordinator {
            if coordinator.has_pending_writes() {
                warn!("document session dropped with pending saves; call close() on teardown");
            }
        }
        // Flushing spawns tasks, which is only possible on a live runtime.
        if tokio::runtime::Handle::try_current().is_ok() {
            self.close();
        } else {
            self.state = SessionState::Closed;
        }
    }
}
