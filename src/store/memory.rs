//! In-process post store used by tests and embedded setups.

use crate::error::AppError;
use crate::models::{CreatePostRequest, Post, PostListItem, PostStatus, UpdatePostRequest};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Mutex;

use super::PostStore;

/// Post store backed by a plain in-memory map.
#[derive(Default)]
pub struct MemoryPostStore {
    posts: Mutex<HashMap<String, Post>>,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of posts currently stored.
    pub fn len(&self) -> usize {
        self.posts.lock().expect("post store poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn create(&self, request: CreatePostRequest) -> Result<Post, AppError> {
        let mut post = Post::new(request.title);
        post.content = request.content;
        let mut posts = self.posts.lock().expect("post store poisoned");
        posts.insert(post.id.clone(), post.clone());
        Ok(post)
    }

    async fn get(&self, id: &str) -> Result<Post, AppError> {
        let posts = self.posts.lock().expect("post store poisoned");
        posts.get(id).cloned().ok_or(AppError::NotFound)
    }

    async fn update(&self, id: &str, request: UpdatePostRequest) -> Result<Post, AppError> {
        let mut posts = self.posts.lock().expect("post store poisoned");
        let post = posts.get_mut(id).ok_or(AppError::NotFound)?;
        if let Some(title) = request.title {
            post.title = title;
        }
        if let Some(content) = request.content {
            post.content = Some(content);
        }
        post.updated_at = Utc::now();
        Ok(post.clone())
    }

    async fn list(&self) -> Result<Vec<PostListItem>, AppError> {
        let posts = self.posts.lock().expect("post store poisoned");
        let mut items: Vec<PostListItem> = posts.values().map(PostListItem::from).collect();
        items.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(items)
    }

    async fn publish(&self, id: &str) -> Result<Post, AppError> {
        let mut posts = self.posts.lock().expect("post store poisoned");
        let post = posts.get_mut(id).ok_or(AppError::NotFound)?;
        post.status = PostStatus::Published;
        post.updated_at = Utc::now();
        Ok(post.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut posts = self.posts.lock().expect("post store poisoned");
        posts.remove(id).map(|_| ()).ok_or(AppError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn create_get_update_roundtrip() {
        let store = MemoryPostStore::new();
        let created = store
            .create(CreatePostRequest::default())
            .await
            .expect("create");
        assert_eq!(created.title, "Untitled");

        let fetched = store.get(&created.id).await.expect("get");
        assert_eq!(fetched.id, created.id);

        let updated = store
            .update(&created.id, UpdatePostRequest::title("Named".to_string()))
            .await
            .expect("update");
        assert_eq!(updated.title, "Named");
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn partial_update_leaves_other_fields_alone() {
        let store = MemoryPostStore::new();
        let created = store
            .create(CreatePostRequest {
                title: "Keep me".to_string(),
                content: Some(json!({"v": 1})),
            })
            .await
            .expect("create");

        let updated = store
            .update(&created.id, UpdatePostRequest::content(json!({"v": 2})))
            .await
            .expect("update");
        assert_eq!(updated.title, "Keep me");
        assert_eq!(updated.content, Some(json!({"v": 2})));
    }

    #[tokio::test]
    async fn missing_post_reports_not_found() {
        let store = MemoryPostStore::new();
        assert!(matches!(
            store.get("missing").await,
            Err(AppError::NotFound)
        ));
        assert!(matches!(
            store
                .update("missing", UpdatePostRequest::title("x".to_string()))
                .await,
            Err(AppError::NotFound)
        ));
        assert!(matches!(
            store.delete("missing").await,
            Err(AppError::NotFound)
        ));
    }

    #[tokio::test]
    async fn publish_flips_status_and_list_orders_by_recency() {
        let store = MemoryPostStore::new();
        let first = store
            .create(CreatePostRequest {
                title: "first".to_string(),
                content: None,
            })
            .await
            .expect("create first");
        let second = store
            .create(CreatePostRequest {
                title: "second".to_string(),
                content: None,
            })
            .await
            .expect("create second");

        let published = store.publish(&first.id).await.expect("publish");
        assert_eq!(published.status, PostStatus::Published);

        let items = store.list().await.expect("list");
        assert_eq!(items.len(), 2);
        // Publishing bumped updated_at, so `first` now leads the list.
        assert_eq!(items[0].id, first.id);
        assert_eq!(items[1].id, second.id);
    }
}
