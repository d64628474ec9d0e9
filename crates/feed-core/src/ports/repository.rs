use async_trait::async_trait;

use crate::domain::{Comment, CommentId, Like, LikeId, NewComment, NewLike, NewPost, Post, PostId};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
///
/// `T` is the persisted entity, `N` its not-yet-persisted draft and `ID` the
/// store-generated key.
#[async_trait]
pub trait BaseRepository<T, N, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Load every entity, in store-native order.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Persist a draft; the store assigns the ID.
    async fn insert(&self, draft: N) -> Result<T, RepoError>;

    /// Persist changes to an existing entity.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Returns `false` when nothing was deleted.
    async fn delete(&self, id: ID) -> Result<bool, RepoError>;
}

/// Denormalized counters kept on a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostCounter {
    Likes,
    Comments,
}

/// Post repository.
///
/// `update` never writes the counters; they change only through
/// `adjust_counter`.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, NewPost, PostId> {
    /// Atomically add `delta` to a counter, clamping at zero.
    /// Returns `false` when the post does not exist.
    async fn adjust_counter(
        &self,
        id: PostId,
        counter: PostCounter,
        delta: i64,
    ) -> Result<bool, RepoError>;
}

/// Comment repository with lookups by owning post.
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, NewComment, CommentId> {
    async fn find_by_post_id(&self, post_id: PostId) -> Result<Vec<Comment>, RepoError>;

    /// Delete every comment of a post, returning how many were removed.
    async fn delete_by_post_id(&self, post_id: PostId) -> Result<u64, RepoError>;
}

/// Like repository with lookups by owning post and user.
#[async_trait]
pub trait LikeRepository: BaseRepository<Like, NewLike, LikeId> {
    async fn find_by_post_id(&self, post_id: PostId) -> Result<Vec<Like>, RepoError>;

    async fn find_by_post_id_and_user_name(
        &self,
        post_id: PostId,
        user_name: &str,
    ) -> Result<Option<Like>, RepoError>;

    async fn count_by_post_id(&self, post_id: PostId) -> Result<u64, RepoError>;

    /// Delete every like of a post, returning how many were removed.
    async fn delete_by_post_id(&self, post_id: PostId) -> Result<u64, RepoError>;
}
