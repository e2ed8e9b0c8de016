//! Post data models shared by the autosave engine and the persistence client.

use crate::constants::DEFAULT_NEW_POST_TITLE;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Serialized rich-text document state at a point in time.
///
/// The editor is opaque to this engine; its snapshots are carried as raw
/// JSON values and persisted without inspection.
pub type Snapshot = serde_json::Value;

/// Publication state of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
}

/// A blog post as stored by the backend and returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: Option<Snapshot>,
    pub status: PostStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Lightweight post summary used for list rendering (no content payload).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListItem {
    pub id: String,
    pub title: String,
    pub status: PostStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: Option<Snapshot>,
}

/// Partial-update payload for a post.
///
/// The two save channels build disjoint shapes: a title update never carries
/// content and vice versa. Absent fields are omitted from the wire payload so
/// the backend only touches what was sent.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdatePostRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Snapshot>,
}

impl Post {
    /// Create a new draft post with a fresh id and timestamps.
    pub fn new(title: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            content: None,
            status: PostStatus::Draft,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<&Post> for PostListItem {
    fn from(value: &Post) -> Self {
        Self {
            id: value.id.clone(),
            title: value.title.clone(),
            status: value.status,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl Default for CreatePostRequest {
    fn default() -> Self {
        Self {
            title: DEFAULT_NEW_POST_TITLE.to_string(),
            content: None,
        }
    }
}

impl UpdatePostRequest {
    /// Title-only partial update.
    pub fn title(title: String) -> Self {
        Self {
            title: Some(title),
            content: None,
        }
    }

    /// Content-only partial update.
    pub fn content(snapshot: Snapshot) -> Self {
        Self {
            title: None,
            content: Some(snapshot),
        }
    }
}
