//! Narrow counter capabilities handed to the comment and like services.
//!
//! Both receive the post repository of the caller's transaction so the
//! counter write commits or rolls back together with the child row.

use async_trait::async_trait;

use super::repository::PostRepository;
use crate::domain::PostId;
use crate::error::RepoError;

/// Maintains `Post::comment_count`.
#[async_trait]
pub trait CommentCounter: Send + Sync {
    /// Returns `false` when the post does not exist.
    async fn apply_comment_delta(
        &self,
        posts: &dyn PostRepository,
        post_id: PostId,
        delta: i64,
    ) -> Result<bool, RepoError>;
}

/// Maintains `Post::like_count`.
#[async_trait]
pub trait LikeCounter: Send + Sync {
    /// Returns `false` when the post does not exist.
    async fn apply_like_delta(
        &self,
        posts: &dyn PostRepository,
        post_id: PostId,
        delta: i64,
    ) -> Result<bool, RepoError>;
}
