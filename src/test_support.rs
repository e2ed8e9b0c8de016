//! Shared test helpers: a scriptable, recording post store.
//!
//! Used by unit tests and the integration suite to observe exactly which
//! persistence calls the engine dispatches, and to script per-call latency
//! and failures.

use crate::error::AppError;
use crate::models::{CreatePostRequest, Post, PostListItem, UpdatePostRequest};
use crate::store::{MemoryPostStore, PostStore};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// Post store wrapper that records update payloads and can be scripted to
/// delay or fail individual update calls.
#[derive(Default)]
pub struct RecordingStore {
    inner: MemoryPostStore,
    updates: Mutex<Vec<UpdatePostRequest>>,
    update_delays_ms: Mutex<VecDeque<u64>>,
    failures_remaining: Mutex<u32>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a post directly in the backing store and return its id.
    pub async fn seed_post(&self, title: &str) -> String {
        let post = self
            .inner
            .create(CreatePostRequest {
                title: title.to_string(),
                content: None,
            })
            .await
            .expect("seed post");
        post.id
    }

    /// Update payloads recorded so far, in dispatch order.
    pub fn updates(&self) -> Vec<UpdatePostRequest> {
        self.updates.lock().expect("recording store poisoned").clone()
    }

    /// Fail the next `count` update calls with a server error.
    pub fn fail_next_updates(&self, count: u32) {
        *self.failures_remaining.lock().expect("recording store poisoned") = count;
    }

    /// Script per-call latency for upcoming updates, consumed in dispatch
    /// order. Calls beyond the scripted list settle immediately.
    pub fn set_update_delay_ms(&self, delays: Vec<u64>) {
        *self.update_delays_ms.lock().expect("recording store poisoned") = delays.into();
    }

    fn take_update_script(&self) -> (Option<u64>, bool) {
        let delay = self
            .update_delays_ms
            .lock()
            .expect("recording store poisoned")
            .pop_front();
        let mut failures = self.failures_remaining.lock().expect("recording store poisoned");
        let fail = *failures > 0;
        if fail {
            *failures -= 1;
        }
        (delay, fail)
    }
}

#[async_trait]
impl PostStore for RecordingStore {
    async fn create(&self, request: CreatePostRequest) -> Result<Post, AppError> {
        self.inner.create(request).await
    }

    async fn get(&self, id: &str) -> Result<Post, AppError> {
        self.inner.get(id).await
    }

    async fn update(&self, id: &str, request: UpdatePostRequest) -> Result<Post, AppError> {
        self.updates
            .lock()
            .expect("recording store poisoned")
            .push(request.clone());
        let (delay, fail) = self.take_update_script();
        if let Some(ms) = delay {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
        if fail {
            return Err(AppError::Server(500));
        }
        self.inner.update(id, request).await
    }

    async fn list(&self) -> Result<Vec<PostListItem>, AppError> {
        self.inner.list().await
    }

    async fn publish(&self, id: &str) -> Result<Post, AppError> {
        self.inner.publish(id).await
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.inner.delete(id).await
    }
}
