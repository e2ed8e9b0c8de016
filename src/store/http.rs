//! REST persistence client backed by reqwest.

use crate::error::AppError;
use crate::models::{CreatePostRequest, Post, PostListItem, UpdatePostRequest};
use async_trait::async_trait;
use reqwest::{Response, StatusCode};

use super::PostStore;

/// Post store talking to the blog backend over HTTP.
#[derive(Debug, Clone)]
pub struct HttpPostStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPostStore {
    /// Build a client for the given backend base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn posts_url(&self) -> String {
        format!("{}/api/posts", self.base_url)
    }

    fn post_url(&self, id: &str) -> String {
        format!("{}/api/posts/{}", self.base_url, id)
    }
}

/// Map non-success HTTP statuses onto the application error taxonomy.
fn check_status(response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    match status {
        StatusCode::NOT_FOUND => Err(AppError::NotFound),
        StatusCode::BAD_REQUEST => Err(AppError::BadRequest(format!(
            "backend rejected request to {}",
            response.url()
        ))),
        other => Err(AppError::Server(other.as_u16())),
    }
}

#[async_trait]
impl PostStore for HttpPostStore {
    async fn create(&self, request: CreatePostRequest) -> Result<Post, AppError> {
        let response = self
            .client
            .post(self.posts_url())
            .json(&request)
            .send()
            .await?;
        Ok(check_status(response)?.json().await?)
    }

    async fn get(&self, id: &str) -> Result<Post, AppError> {
        let response = self.client.get(self.post_url(id)).send().await?;
        Ok(check_status(response)?.json().await?)
    }

    async fn update(&self, id: &str, request: UpdatePostRequest) -> Result<Post, AppError> {
        let response = self
            .client
            .patch(self.post_url(id))
            .json(&request)
            .send()
            .await?;
        Ok(check_status(response)?.json().await?)
    }

    async fn list(&self) -> Result<Vec<PostListItem>, AppError> {
        let response = self.client.get(self.posts_url()).send().await?;
        Ok(check_status(response)?.json().await?)
    }

    async fn publish(&self, id: &str) -> Result<Post, AppError> {
        let response = self
            .client
            .post(format!("{}/publish", self.post_url(id)))
            .send()
            .await?;
        Ok(check_status(response)?.json().await?)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let response = self.client.delete(self.post_url(id)).send().await?;
        check_status(response)?;
        Ok(())
    }
}
