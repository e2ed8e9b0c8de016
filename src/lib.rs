//! Debounced autosave and editor-state synchronization engine for a
//! blog authoring tool.
//!
//! The engine watches a continuously-mutating rich-text document and a
//! separate title field, coalesces rapid local edits into infrequent
//! persistence requests, exposes a save-status signal for the UI, and
//! guarantees no edit is lost when the page is left mid-edit.
//!
//! Typical wiring:
//!
//! ```no_run
//! use draftsync::{Config, DocumentSession, HttpPostStore};
//! use std::sync::Arc;
//!
//! # async fn wire() -> Result<(), draftsync::AppError> {
//! let config = Config::from_env();
//! let store = Arc::new(HttpPostStore::new(config.server_url.clone()));
//! let mut session = DocumentSession::new(store, config);
//! let post = session.init(None).await?; // create a blank draft
//! println!("editing {}", post.id);
//! // feed editor snapshots via session.on_editor_update(..),
//! // title keystrokes via session.on_title_change(..),
//! // and call session.close() on teardown.
//! # Ok(())
//! # }
//! ```

/// Autosave coordinator binding debounce schedulers to a document.
pub mod autosave;
/// Editor change bridge (mount-time notification suppression).
pub mod bridge;
/// Configuration loading and defaults.
pub mod config;
/// Shared constants.
pub mod constants;
/// Generic trailing-edge debounce scheduler.
pub mod debounce;
/// Application error types.
pub mod error;
/// Post data models.
pub mod models;
/// Page-level document session orchestration.
pub mod session;
/// Save-status signal shared by both channels.
pub mod status;
/// Persistence boundary (trait, REST client, in-memory store).
pub mod store;
/// Scriptable store helpers for tests.
pub mod test_support;

pub use autosave::AutosaveCoordinator;
pub use bridge::EditorChangeBridge;
pub use config::Config;
pub use debounce::Debouncer;
pub use error::AppError;
pub use models::{CreatePostRequest, Post, PostListItem, PostStatus, Snapshot, UpdatePostRequest};
pub use session::{DocumentSession, SessionState};
pub use status::{SaveStatus, StatusSignal};
pub use store::{HttpPostStore, MemoryPostStore, PostStore};
