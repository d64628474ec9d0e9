//! In-memory store - used as fallback when no database is configured.
//!
//! A transaction holds the store lock for its whole lifetime and works on a
//! private copy of the tables, which replaces the shared tables on commit.
//! Calls made directly on the store wait until open transactions finish.
//! Note: Data is lost on process restart.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, OwnedMutexGuard};

use feed_core::domain::{
    Comment, CommentId, Like, LikeId, NewComment, NewLike, NewPost, Post, PostId,
};
use feed_core::error::RepoError;
use feed_core::ports::{
    BaseRepository, CommentRepository, LikeRepository, PostCounter, PostRepository,
    Repositories, Transaction, UnitOfWork,
};

#[derive(Debug, Default, Clone)]
struct Tables {
    posts: BTreeMap<PostId, Post>,
    comments: BTreeMap<CommentId, Comment>,
    likes: BTreeMap<LikeId, Like>,
    post_seq: i64,
    comment_seq: i64,
    like_seq: i64,
}

fn next_id(seq: &mut i64) -> i64 {
    *seq += 1;
    *seq
}

type SharedTables = Arc<Mutex<Tables>>;

pub struct InMemoryPostRepository {
    tables: SharedTables,
}

pub struct InMemoryCommentRepository {
    tables: SharedTables,
}

pub struct InMemoryLikeRepository {
    tables: SharedTables,
}

struct InMemoryRepositories {
    posts: InMemoryPostRepository,
    comments: InMemoryCommentRepository,
    likes: InMemoryLikeRepository,
}

impl InMemoryRepositories {
    fn over(tables: &SharedTables) -> Self {
        Self {
            posts: InMemoryPostRepository {
                tables: tables.clone(),
            },
            comments: InMemoryCommentRepository {
                tables: tables.clone(),
            },
            likes: InMemoryLikeRepository {
                tables: tables.clone(),
            },
        }
    }
}

/// In-memory feed store with transaction support.
pub struct InMemoryStore {
    tables: SharedTables,
    repos: InMemoryRepositories,
}

impl InMemoryStore {
    pub fn new() -> Self {
        let tables = SharedTables::default();
        let repos = InMemoryRepositories::over(&tables);
        Self { tables, repos }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Repositories for InMemoryStore {
    fn posts(&self) -> &dyn PostRepository {
        &self.repos.posts
    }

    fn comments(&self) -> &dyn CommentRepository {
        &self.repos.comments
    }

    fn likes(&self) -> &dyn LikeRepository {
        &self.repos.likes
    }
}

#[async_trait]
impl UnitOfWork for InMemoryStore {
    async fn begin(&self) -> Result<Box<dyn Transaction>, RepoError> {
        let committed = self.tables.clone().lock_owned().await;
        let working = Arc::new(Mutex::new(committed.clone()));
        let repos = InMemoryRepositories::over(&working);

        Ok(Box::new(InMemoryTransaction {
            committed,
            working,
            repos,
        }))
    }
}

/// Open transaction on an [`InMemoryStore`].
pub struct InMemoryTransaction {
    committed: OwnedMutexGuard<Tables>,
    working: SharedTables,
    repos: InMemoryRepositories,
}

impl Repositories for InMemoryTransaction {
    fn posts(&self) -> &dyn PostRepository {
        &self.repos.posts
    }

    fn comments(&self) -> &dyn CommentRepository {
        &self.repos.comments
    }

    fn likes(&self) -> &dyn LikeRepository {
        &self.repos.likes
    }
}

#[async_trait]
impl Transaction for InMemoryTransaction {
    async fn commit(self: Box<Self>) -> Result<(), RepoError> {
        let Self {
            mut committed,
            working,
            ..
        } = *self;

        *committed = std::mem::take(&mut *working.lock().await);
        Ok(())
    }
}

#[async_trait]
impl BaseRepository<Post, NewPost, PostId> for InMemoryPostRepository {
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        Ok(self.tables.lock().await.posts.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.tables.lock().await.posts.values().cloned().collect())
    }

    async fn insert(&self, draft: NewPost) -> Result<Post, RepoError> {
        let mut tables = self.tables.lock().await;
        let post = draft.with_id(next_id(&mut tables.post_seq));
        tables.posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update(&self, entity: Post) -> Result<Post, RepoError> {
        let mut tables = self.tables.lock().await;
        let stored = tables.posts.get_mut(&entity.id).ok_or(RepoError::NotFound)?;

        // Counters and creation time are owned by the store.
        stored.user_name = entity.user_name;
        stored.content = entity.content;
        stored.updated_at = entity.updated_at;
        Ok(stored.clone())
    }

    async fn delete(&self, id: PostId) -> Result<bool, RepoError> {
        Ok(self.tables.lock().await.posts.remove(&id).is_some())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn adjust_counter(
        &self,
        id: PostId,
        counter: PostCounter,
        delta: i64,
    ) -> Result<bool, RepoError> {
        let mut tables = self.tables.lock().await;
        let Some(post) = tables.posts.get_mut(&id) else {
            return Ok(false);
        };

        let value = match counter {
            PostCounter::Likes => &mut post.like_count,
            PostCounter::Comments => &mut post.comment_count,
        };
        *value = (*value + delta).max(0);
        Ok(true)
    }
}

#[async_trait]
impl BaseRepository<Comment, NewComment, CommentId> for InMemoryCommentRepository {
    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, RepoError> {
        Ok(self.tables.lock().await.comments.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Comment>, RepoError> {
        Ok(self.tables.lock().await.comments.values().cloned().collect())
    }

    async fn insert(&self, draft: NewComment) -> Result<Comment, RepoError> {
        let mut tables = self.tables.lock().await;
        if !tables.posts.contains_key(&draft.post_id) {
            return Err(RepoError::Constraint(format!(
                "comment references missing post {}",
                draft.post_id
            )));
        }

        let comment = draft.with_id(next_id(&mut tables.comment_seq));
        tables.comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn update(&self, entity: Comment) -> Result<Comment, RepoError> {
        let mut tables = self.tables.lock().await;
        let stored = tables
            .comments
            .get_mut(&entity.id)
            .ok_or(RepoError::NotFound)?;

        stored.user_name = entity.user_name;
        stored.content = entity.content;
        stored.updated_at = entity.updated_at;
        Ok(stored.clone())
    }

    async fn delete(&self, id: CommentId) -> Result<bool, RepoError> {
        Ok(self.tables.lock().await.comments.remove(&id).is_some())
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn find_by_post_id(&self, post_id: PostId) -> Result<Vec<Comment>, RepoError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .comments
            .values()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect())
    }

    async fn delete_by_post_id(&self, post_id: PostId) -> Result<u64, RepoError> {
        let mut tables = self.tables.lock().await;
        let before = tables.comments.len();
        tables.comments.retain(|_, c| c.post_id != post_id);
        Ok((before - tables.comments.len()) as u64)
    }
}

#[async_trait]
impl BaseRepository<Like, NewLike, LikeId> for InMemoryLikeRepository {
    async fn find_by_id(&self, id: LikeId) -> Result<Option<Like>, RepoError> {
        Ok(self.tables.lock().await.likes.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Like>, RepoError> {
        Ok(self.tables.lock().await.likes.values().cloned().collect())
    }

    async fn insert(&self, draft: NewLike) -> Result<Like, RepoError> {
        let mut tables = self.tables.lock().await;
        if !tables.posts.contains_key(&draft.post_id) {
            return Err(RepoError::Constraint(format!(
                "like references missing post {}",
                draft.post_id
            )));
        }
        let duplicate = tables
            .likes
            .values()
            .any(|l| l.post_id == draft.post_id && l.user_name == draft.user_name);
        if duplicate {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }

        let like = draft.with_id(next_id(&mut tables.like_seq));
        tables.likes.insert(like.id, like.clone());
        Ok(like)
    }

    async fn update(&self, entity: Like) -> Result<Like, RepoError> {
        let mut tables = self.tables.lock().await;
        let stored = tables.likes.get_mut(&entity.id).ok_or(RepoError::NotFound)?;
        *stored = entity;
        Ok(stored.clone())
    }

    async fn delete(&self, id: LikeId) -> Result<bool, RepoError> {
        Ok(self.tables.lock().await.likes.remove(&id).is_some())
    }
}

#[async_trait]
impl LikeRepository for InMemoryLikeRepository {
    async fn find_by_post_id(&self, post_id: PostId) -> Result<Vec<Like>, RepoError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .likes
            .values()
            .filter(|l| l.post_id == post_id)
            .cloned()
            .collect())
    }

    async fn find_by_post_id_and_user_name(
        &self,
        post_id: PostId,
        user_name: &str,
    ) -> Result<Option<Like>, RepoError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .likes
            .values()
            .find(|l| l.post_id == post_id && l.user_name == user_name)
            .cloned())
    }

    async fn count_by_post_id(&self, post_id: PostId) -> Result<u64, RepoError> {
        let tables = self.tables.lock().await;
        Ok(tables.likes.values().filter(|l| l.post_id == post_id).count() as u64)
    }

    async fn delete_by_post_id(&self, post_id: PostId) -> Result<u64, RepoError> {
        let mut tables = self.tables.lock().await;
        let before = tables.likes.len();
        tables.likes.retain(|_, l| l.post_id != post_id);
        Ok((before - tables.likes.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(content: &str) -> NewPost {
        NewPost::new("alice".to_string(), content.to_string())
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let store = InMemoryStore::new();
        let first = store.posts().insert(draft("one")).await.unwrap();
        let second = store.posts().insert(draft("two")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_dropped_transaction_rolls_back() {
        let store = InMemoryStore::new();

        let tx = store.begin().await.unwrap();
        tx.posts().insert(draft("lost")).await.unwrap();
        drop(tx);

        assert!(store.posts().find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_committed_transaction_is_visible() {
        let store = InMemoryStore::new();

        let tx = store.begin().await.unwrap();
        let post = tx.posts().insert(draft("kept")).await.unwrap();
        tx.commit().await.unwrap();

        let found = store.posts().find_by_id(post.id).await.unwrap();
        assert_eq!(found, Some(post));
    }

    #[tokio::test]
    async fn test_adjust_counter_clamps_at_zero() {
        let store = InMemoryStore::new();
        let post = store.posts().insert(draft("hi")).await.unwrap();

        let found = store
            .posts()
            .adjust_counter(post.id, PostCounter::Likes, -1)
            .await
            .unwrap();

        assert!(found);
        let post = store.posts().find_by_id(post.id).await.unwrap().unwrap();
        assert_eq!(post.like_count, 0);
    }

    #[tokio::test]
    async fn test_adjust_counter_on_missing_post() {
        let store = InMemoryStore::new();
        let found = store
            .posts()
            .adjust_counter(42, PostCounter::Comments, 1)
            .await
            .unwrap();
        assert!(!found);
    }

    #[tokio::test]
    async fn test_update_keeps_counters() {
        let store = InMemoryStore::new();
        let post = store.posts().insert(draft("hi")).await.unwrap();
        store
            .posts()
            .adjust_counter(post.id, PostCounter::Comments, 3)
            .await
            .unwrap();

        let mut stale = post.clone();
        stale.edit("edited".to_string());
        let updated = store.posts().update(stale).await.unwrap();

        assert_eq!(updated.content, "edited");
        assert_eq!(updated.comment_count, 3);
    }

    #[tokio::test]
    async fn test_duplicate_like_violates_constraint() {
        let store = InMemoryStore::new();
        let post = store.posts().insert(draft("hi")).await.unwrap();
        store
            .likes()
            .insert(NewLike::new(post.id, "bob".to_string()))
            .await
            .unwrap();

        let err = store
            .likes()
            .insert(NewLike::new(post.id, "bob".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, RepoError::Constraint(_)));
    }
}
