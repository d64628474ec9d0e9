//! Service behaviour against the in-memory store.

use std::sync::Arc;

use feed_core::DomainError;
use feed_core::ports::{PostCounter, Repositories, UnitOfWork};
use feed_core::services::{CommentService, LikeService, PostService};
use feed_infra::InMemoryStore;

struct Feed {
    store: Arc<InMemoryStore>,
    posts: Arc<PostService>,
    comments: CommentService,
    likes: LikeService,
}

fn feed() -> Feed {
    let store = Arc::new(InMemoryStore::new());
    let uow: Arc<dyn UnitOfWork> = store.clone();
    let posts = Arc::new(PostService::new(uow.clone()));

    Feed {
        comments: CommentService::new(uow.clone(), posts.clone()),
        likes: LikeService::new(uow, posts.clone()),
        posts,
        store,
    }
}

impl Feed {
    async fn like_count(&self, post_id: i64) -> i64 {
        self.posts.get(post_id).await.unwrap().unwrap().like_count
    }

    async fn comment_count(&self, post_id: i64) -> i64 {
        self.posts.get(post_id).await.unwrap().unwrap().comment_count
    }
}

#[tokio::test]
async fn test_created_post_has_zero_counters() {
    let feed = feed();

    let post = feed
        .posts
        .create("alice".to_string(), "hi".to_string())
        .await
        .unwrap();

    assert_eq!(post.like_count, 0);
    assert_eq!(post.comment_count, 0);
    assert_eq!(post.user_name, "alice");
    assert_eq!(post.created_at, post.updated_at);
    assert_eq!(feed.posts.get(post.id).await.unwrap(), Some(post));
}

#[tokio::test]
async fn test_list_all_returns_every_post() {
    let feed = feed();
    assert!(feed.posts.list_all().await.unwrap().is_empty());

    feed.posts.create("a".into(), "1".into()).await.unwrap();
    feed.posts.create("b".into(), "2".into()).await.unwrap();

    assert_eq!(feed.posts.list_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_replaces_content() {
    let feed = feed();
    let post = feed.posts.create("alice".into(), "hi".into()).await.unwrap();

    let updated = feed
        .posts
        .update(post.id, "edited".into())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.content, "edited");
    assert_eq!(updated.created_at, post.created_at);
    assert!(updated.updated_at >= post.updated_at);
}

#[tokio::test]
async fn test_update_missing_post_writes_nothing() {
    let feed = feed();

    let result = feed.posts.update(404, "x".into()).await.unwrap();

    assert!(result.is_none());
    assert!(feed.posts.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_like_scenario() {
    let feed = feed();
    let post = feed.posts.create("alice".into(), "hi".into()).await.unwrap();

    let first = feed.likes.add(post.id, "bob".into()).await.unwrap().unwrap();
    assert_eq!(feed.like_count(post.id).await, 1);

    let second = feed.likes.add(post.id, "bob".into()).await.unwrap().unwrap();
    assert_eq!(second, first);
    assert_eq!(feed.like_count(post.id).await, 1);
    assert_eq!(feed.likes.count_by_post(post.id).await.unwrap(), 1);

    assert!(feed.likes.remove(post.id, "bob").await.unwrap());
    assert_eq!(feed.like_count(post.id).await, 0);
    assert_eq!(feed.likes.count_by_post(post.id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_has_liked_follows_add_and_remove() {
    let feed = feed();
    let post = feed.posts.create("alice".into(), "hi".into()).await.unwrap();

    assert!(!feed.likes.has_liked(post.id, "bob").await.unwrap());
    feed.likes.add(post.id, "bob".into()).await.unwrap();
    assert!(feed.likes.has_liked(post.id, "bob").await.unwrap());
    assert!(!feed.likes.has_liked(post.id, "carol").await.unwrap());
    feed.likes.remove(post.id, "bob").await.unwrap();
    assert!(!feed.likes.has_liked(post.id, "bob").await.unwrap());
}

#[tokio::test]
async fn test_remove_absent_like_changes_nothing() {
    let feed = feed();
    let post = feed.posts.create("alice".into(), "hi".into()).await.unwrap();
    feed.likes.add(post.id, "bob".into()).await.unwrap();

    assert!(!feed.likes.remove(post.id, "carol").await.unwrap());

    assert_eq!(feed.like_count(post.id).await, 1);
    assert_eq!(feed.likes.list_by_post(post.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_like_on_missing_post_is_rejected() {
    let feed = feed();

    let like = feed.likes.add(999, "dave".into()).await.unwrap();

    assert!(like.is_none());
    assert_eq!(feed.likes.count_by_post(999).await.unwrap(), 0);
    assert!(!feed.likes.has_liked(999, "dave").await.unwrap());
}

#[tokio::test]
async fn test_likes_from_many_users_are_counted() {
    let feed = feed();
    let post = feed.posts.create("alice".into(), "hi".into()).await.unwrap();

    for user in ["bob", "carol", "dave"] {
        feed.likes.add(post.id, user.into()).await.unwrap();
    }

    assert_eq!(feed.like_count(post.id).await, 3);
    assert_eq!(feed.likes.count_by_post(post.id).await.unwrap(), 3);
}

#[tokio::test]
async fn test_comment_scenario() {
    let feed = feed();
    let post = feed.posts.create("alice".into(), "hi".into()).await.unwrap();

    let comment = feed
        .comments
        .create(post.id, "carol".into(), "nice!".into())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(comment.post_id, post.id);
    assert_eq!(feed.comment_count(post.id).await, 1);

    assert!(feed.comments.delete(comment.id).await.unwrap());
    assert_eq!(feed.comment_count(post.id).await, 0);
    assert!(feed.comments.get(comment.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_comment_round_trip_restores_counter() {
    let feed = feed();
    let post = feed.posts.create("alice".into(), "hi".into()).await.unwrap();
    feed.comments
        .create(post.id, "bob".into(), "first".into())
        .await
        .unwrap();
    let before = feed.comment_count(post.id).await;

    let comment = feed
        .comments
        .create(post.id, "carol".into(), "second".into())
        .await
        .unwrap()
        .unwrap();
    feed.comments.delete(comment.id).await.unwrap();

    assert_eq!(feed.comment_count(post.id).await, before);
}

#[tokio::test]
async fn test_comment_on_missing_post_is_rejected() {
    let feed = feed();

    let comment = feed
        .comments
        .create(999, "carol".into(), "hello?".into())
        .await
        .unwrap();

    assert!(comment.is_none());
    assert!(feed.comments.list_by_post(999).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_comment_update_leaves_counter_alone() {
    let feed = feed();
    let post = feed.posts.create("alice".into(), "hi".into()).await.unwrap();
    let comment = feed
        .comments
        .create(post.id, "carol".into(), "nice!".into())
        .await
        .unwrap()
        .unwrap();

    let updated = feed
        .comments
        .update(comment.id, "very nice!".into())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.content, "very nice!");
    assert_eq!(updated.post_id, post.id);
    assert_eq!(feed.comment_count(post.id).await, 1);
    assert!(feed.comments.update(404, "x".into()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_missing_comment_is_noop() {
    let feed = feed();
    let post = feed.posts.create("alice".into(), "hi".into()).await.unwrap();
    feed.comments
        .create(post.id, "carol".into(), "nice!".into())
        .await
        .unwrap();

    assert!(!feed.comments.delete(404).await.unwrap());
    assert_eq!(feed.comment_count(post.id).await, 1);
}

#[tokio::test]
async fn test_list_comments_by_post() {
    let feed = feed();
    let first = feed.posts.create("alice".into(), "one".into()).await.unwrap();
    let second = feed.posts.create("alice".into(), "two".into()).await.unwrap();
    feed.comments
        .create(first.id, "bob".into(), "a".into())
        .await
        .unwrap();
    feed.comments
        .create(first.id, "carol".into(), "b".into())
        .await
        .unwrap();
    feed.comments
        .create(second.id, "dave".into(), "c".into())
        .await
        .unwrap();

    assert_eq!(feed.comments.list_by_post(first.id).await.unwrap().len(), 2);
    assert_eq!(feed.comments.list_by_post(second.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_post_cascades_to_children() {
    let feed = feed();
    let post = feed.posts.create("alice".into(), "hi".into()).await.unwrap();
    let comment = feed
        .comments
        .create(post.id, "carol".into(), "nice!".into())
        .await
        .unwrap()
        .unwrap();
    feed.likes.add(post.id, "bob".into()).await.unwrap();

    assert!(feed.posts.delete(post.id).await.unwrap());

    assert!(feed.posts.get(post.id).await.unwrap().is_none());
    assert!(feed.comments.get(comment.id).await.unwrap().is_none());
    assert_eq!(feed.likes.count_by_post(post.id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete_missing_post_reports_absence() {
    let feed = feed();
    assert!(!feed.posts.delete(404).await.unwrap());
}

#[tokio::test]
async fn test_adjust_counts_directly() {
    let feed = feed();
    let post = feed.posts.create("alice".into(), "hi".into()).await.unwrap();

    assert!(feed.posts.adjust_like_count(post.id, 2).await.unwrap());
    assert!(feed.posts.adjust_comment_count(post.id, 1).await.unwrap());
    assert_eq!(feed.like_count(post.id).await, 2);
    assert_eq!(feed.comment_count(post.id).await, 1);

    assert!(!feed.posts.adjust_like_count(999, 1).await.unwrap());
}

#[tokio::test]
async fn test_counters_never_go_negative() {
    let feed = feed();
    let post = feed.posts.create("alice".into(), "hi".into()).await.unwrap();

    feed.posts.adjust_like_count(post.id, -3).await.unwrap();

    assert_eq!(feed.like_count(post.id).await, 0);
}

#[tokio::test]
async fn test_concurrent_likes_keep_counter_consistent() {
    let feed = Arc::new(feed());
    let post_id = feed
        .posts
        .create("alice".into(), "hi".into())
        .await
        .unwrap()
        .id;

    let mut handles = Vec::new();
    for i in 0..20 {
        let feed = feed.clone();
        handles.push(tokio::spawn(async move {
            feed.likes
                .add(post_id, format!("user-{}", i % 10))
                .await
                .unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(feed.like_count(post_id).await, 10);
    assert_eq!(feed.likes.count_by_post(post_id).await.unwrap(), 10);
}

#[tokio::test]
async fn test_store_counter_matches_service_view() {
    let feed = feed();
    let post = feed.posts.create("alice".into(), "hi".into()).await.unwrap();

    feed.store
        .posts()
        .adjust_counter(post.id, PostCounter::Likes, 1)
        .await
        .unwrap();

    assert_eq!(feed.like_count(post.id).await, 1);
}

#[tokio::test]
async fn test_blank_input_is_rejected_before_storage() {
    let feed = feed();

    let err = feed.posts.create("  ".into(), "hi".into()).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));

    let post = feed.posts.create("alice".into(), "hi".into()).await.unwrap();
    let err = feed
        .comments
        .create(post.id, "carol".into(), "".into())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
    assert!(feed.likes.add(post.id, "\t".into()).await.is_err());

    assert_eq!(feed.comment_count(post.id).await, 0);
    assert_eq!(feed.like_count(post.id).await, 0);
    assert_eq!(feed.posts.list_all().await.unwrap().len(), 1);
}
