//! Data models for posts and persistence requests.

pub mod post;

pub use post::{
    CreatePostRequest, Post, PostListItem, PostStatus, Snapshot, UpdatePostRequest,
};
