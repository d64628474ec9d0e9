use std::sync::Arc;

use super::require_text;
use crate::domain::{Comment, CommentId, NewComment, PostId};
use crate::error::DomainResult;
use crate::ports::{BaseRepository, CommentCounter, UnitOfWork};

/// Owns the comment lifecycle and keeps `Post::comment_count` in step.
pub struct CommentService {
    store: Arc<dyn UnitOfWork>,
    counter: Arc<dyn CommentCounter>,
}

impl CommentService {
    pub fn new(store: Arc<dyn UnitOfWork>, counter: Arc<dyn CommentCounter>) -> Self {
        Self { store, counter }
    }

    pub async fn list_by_post(&self, post_id: PostId) -> DomainResult<Vec<Comment>> {
        Ok(self.store.comments().find_by_post_id(post_id).await?)
    }

    pub async fn get(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        Ok(self.store.comments().find_by_id(id).await?)
    }

    /// Create a comment and bump the post's comment counter.
    ///
    /// Returns `None` and persists nothing when the post does not exist.
    pub async fn create(
        &self,
        post_id: PostId,
        user_name: String,
        content: String,
    ) -> DomainResult<Option<Comment>> {
        require_text("userName", &user_name)?;
        require_text("content", &content)?;
        let tx = self.store.begin().await?;

        // Counter first: it doubles as the existence check and locks the post row.
        if !self.counter.apply_comment_delta(tx.posts(), post_id, 1).await? {
            tracing::warn!(post_id, "Rejected comment on missing post");
            return Ok(None);
        }
        let comment = tx
            .comments()
            .insert(NewComment::new(post_id, user_name, content))
            .await?;
        tx.commit().await?;

        tracing::info!(post_id, comment_id = comment.id, "Comment created");
        Ok(Some(comment))
    }

    /// Replace the content of a comment. Counters are not touched.
    pub async fn update(&self, id: CommentId, content: String) -> DomainResult<Option<Comment>> {
        require_text("content", &content)?;
        let tx = self.store.begin().await?;

        let Some(mut comment) = tx.comments().find_by_id(id).await? else {
            return Ok(None);
        };

        comment.edit(content);
        let comment = tx.comments().update(comment).await?;
        tx.commit().await?;

        Ok(Some(comment))
    }

    /// Delete a comment and decrement the post's comment counter.
    /// Returns `false` when the comment did not exist.
    pub async fn delete(&self, id: CommentId) -> DomainResult<bool> {
        let tx = self.store.begin().await?;

        let Some(comment) = tx.comments().find_by_id(id).await? else {
            return Ok(false);
        };

        // A concurrent delete may have won since the lookup.
        if !tx.comments().delete(id).await? {
            return Ok(false);
        }
        self.counter
            .apply_comment_delta(tx.posts(), comment.post_id, -1)
            .await?;
        tx.commit().await?;

        tracing::info!(post_id = comment.post_id, comment_id = id, "Comment deleted");
        Ok(true)
    }
}
