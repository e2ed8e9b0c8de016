//! Persistence boundary for posts.
//!
//! The autosave engine only sees this trait; production wires in the REST
//! client, tests wire in the in-memory store.

mod http;
mod memory;

use crate::error::AppError;
use crate::models::{CreatePostRequest, Post, PostListItem, UpdatePostRequest};
use async_trait::async_trait;

pub use http::HttpPostStore;
pub use memory::MemoryPostStore;

/// Asynchronous post persistence operations.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Create a new post and return it with its server-assigned id.
    async fn create(&self, request: CreatePostRequest) -> Result<Post, AppError>;

    /// Fetch a post by id.
    async fn get(&self, id: &str) -> Result<Post, AppError>;

    /// Apply a partial update to a post; only the fields present in the
    /// request are touched. `updated_at` is always bumped.
    async fn update(&self, id: &str, request: UpdatePostRequest) -> Result<Post, AppError>;

    /// List post summaries, most recently updated first.
    async fn list(&self) -> Result<Vec<PostListItem>, AppError>;

    /// Mark a post as published.
    async fn publish(&self, id: &str) -> Result<Post, AppError>;

    /// Delete a post by id.
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}
