use std::sync::Arc;

use super::require_text;
use crate::domain::{Like, NewLike, PostId};
use crate::error::DomainResult;
use crate::ports::{BaseRepository, LikeCounter, UnitOfWork};

/// Owns the like lifecycle: at most one like per user and post.
///
/// Per `(post, user)` pair a like is either absent or present. `add` on a
/// present like and `remove` on an absent one change nothing.
pub struct LikeService {
    store: Arc<dyn UnitOfWork>,
    counter: Arc<dyn LikeCounter>,
}

impl LikeService {
    pub fn new(store: Arc<dyn UnitOfWork>, counter: Arc<dyn LikeCounter>) -> Self {
        Self { store, counter }
    }

    pub async fn has_liked(&self, post_id: PostId, user_name: &str) -> DomainResult<bool> {
        let like = self
            .store
            .likes()
            .find_by_post_id_and_user_name(post_id, user_name)
            .await?;
        Ok(like.is_some())
    }

    pub async fn list_by_post(&self, post_id: PostId) -> DomainResult<Vec<Like>> {
        Ok(self.store.likes().find_by_post_id(post_id).await?)
    }

    /// Like a post. An existing like is returned unchanged.
    ///
    /// Returns `None` and persists nothing when the post does not exist.
    pub async fn add(&self, post_id: PostId, user_name: String) -> DomainResult<Option<Like>> {
        require_text("userName", &user_name)?;
        let tx = self.store.begin().await?;

        if let Some(existing) = tx
            .likes()
            .find_by_post_id_and_user_name(post_id, &user_name)
            .await?
        {
            return Ok(Some(existing));
        }

        if !self.counter.apply_like_delta(tx.posts(), post_id, 1).await? {
            tracing::warn!(post_id, "Rejected like on missing post");
            return Ok(None);
        }
        let like = tx.likes().insert(NewLike::new(post_id, user_name)).await?;
        tx.commit().await?;

        tracing::info!(post_id, like_id = like.id, "Like added");
        Ok(Some(like))
    }

    /// Unlike a post. Returns `false` when there was no like to remove.
    pub async fn remove(&self, post_id: PostId, user_name: &str) -> DomainResult<bool> {
        let tx = self.store.begin().await?;

        let Some(like) = tx
            .likes()
            .find_by_post_id_and_user_name(post_id, user_name)
            .await?
        else {
            return Ok(false);
        };

        if !tx.likes().delete(like.id).await? {
            return Ok(false);
        }
        self.counter.apply_like_delta(tx.posts(), post_id, -1).await?;
        tx.commit().await?;

        tracing::info!(post_id, like_id = like.id, "Like removed");
        Ok(true)
    }

    /// Live number of like rows for a post, independent of the cached counter.
    pub async fn count_by_post(&self, post_id: PostId) -> DomainResult<u64> {
        Ok(self.store.likes().count_by_post_id(post_id).await?)
    }
}
