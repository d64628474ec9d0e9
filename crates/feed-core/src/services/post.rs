use std::sync::Arc;

use async_trait::async_trait;

use super::require_text;
use crate::domain::{NewPost, Post, PostId};
use crate::error::{DomainResult, RepoError};
use crate::ports::{
    BaseRepository, CommentCounter, LikeCounter, PostCounter, PostRepository, UnitOfWork,
};

/// Owns the post lifecycle and its two denormalized counters.
pub struct PostService {
    store: Arc<dyn UnitOfWork>,
}

impl PostService {
    pub fn new(store: Arc<dyn UnitOfWork>) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> DomainResult<Vec<Post>> {
        Ok(self.store.posts().find_all().await?)
    }

    pub async fn get(&self, id: PostId) -> DomainResult<Option<Post>> {
        Ok(self.store.posts().find_by_id(id).await?)
    }

    pub async fn create(&self, user_name: String, content: String) -> DomainResult<Post> {
        require_text("userName", &user_name)?;
        require_text("content", &content)?;

        let post = self
            .store
            .posts()
            .insert(NewPost::new(user_name, content))
            .await?;

        tracing::info!(post_id = post.id, "Post created");
        Ok(post)
    }

    /// Replace the content of a post. Returns `None`, without writing, when
    /// the post does not exist.
    pub async fn update(&self, id: PostId, content: String) -> DomainResult<Option<Post>> {
        require_text("content", &content)?;
        let tx = self.store.begin().await?;

        let Some(mut post) = tx.posts().find_by_id(id).await? else {
            return Ok(None);
        };

        post.edit(content);
        let post = tx.posts().update(post).await?;
        tx.commit().await?;

        tracing::debug!(post_id = id, "Post updated");
        Ok(Some(post))
    }

    /// Delete a post together with its comments and likes.
    /// Returns `false` when the post did not exist.
    pub async fn delete(&self, id: PostId) -> DomainResult<bool> {
        let tx = self.store.begin().await?;

        let comments = tx.comments().delete_by_post_id(id).await?;
        let likes = tx.likes().delete_by_post_id(id).await?;
        if !tx.posts().delete(id).await? {
            return Ok(false);
        }
        tx.commit().await?;

        tracing::info!(post_id = id, comments, likes, "Post deleted");
        Ok(true)
    }

    /// Add `delta` to the like counter. A missing post is a silent no-op,
    /// reported as `false`.
    pub async fn adjust_like_count(&self, id: PostId, delta: i64) -> DomainResult<bool> {
        Ok(self.apply_like_delta(self.store.posts(), id, delta).await?)
    }

    /// Add `delta` to the comment counter. A missing post is a silent no-op,
    /// reported as `false`.
    pub async fn adjust_comment_count(&self, id: PostId, delta: i64) -> DomainResult<bool> {
        Ok(self.apply_comment_delta(self.store.posts(), id, delta).await?)
    }
}

#[async_trait]
impl LikeCounter for PostService {
    async fn apply_like_delta(
        &self,
        posts: &dyn PostRepository,
        post_id: PostId,
        delta: i64,
    ) -> Result<bool, RepoError> {
        let found = posts
            .adjust_counter(post_id, PostCounter::Likes, delta)
            .await?;
        if !found {
            tracing::debug!(post_id, delta, "Like counter not adjusted: post not found");
        }
        Ok(found)
    }
}

#[async_trait]
impl CommentCounter for PostService {
    async fn apply_comment_delta(
        &self,
        posts: &dyn PostRepository,
        post_id: PostId,
        delta: i64,
    ) -> Result<bool, RepoError> {
        let found = posts
            .adjust_counter(post_id, PostCounter::Comments, delta)
            .await?;
        if !found {
            tracing::debug!(post_id, delta, "Comment counter not adjusted: post not found");
        }
        Ok(found)
    }
}
