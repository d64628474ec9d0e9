use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-generated surrogate key of a post.
pub type PostId = i64;

/// Post entity - the root content item of the feed.
///
/// `like_count` and `comment_count` are denormalized: they are only changed
/// through the counter capabilities of the post service, never by `update`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub user_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub like_count: i64,
    pub comment_count: i64,
}

impl Post {
    /// Replace the content and refresh the update timestamp.
    pub fn edit(&mut self, content: String) {
        self.content = content;
        self.updated_at = Utc::now();
    }
}

/// A post that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub user_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub like_count: i64,
    pub comment_count: i64,
}

impl NewPost {
    /// Create a new post draft with zeroed counters and both timestamps set to now.
    pub fn new(user_name: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            user_name,
            content,
            created_at: now,
            updated_at: now,
            like_count: 0,
            comment_count: 0,
        }
    }

    /// Attach the identity assigned by the store.
    pub fn with_id(self, id: PostId) -> Post {
        Post {
            id,
            user_name: self.user_name,
            content: self.content,
            created_at: self.created_at,
            updated_at: self.updated_at,
            like_count: self.like_count,
            comment_count: self.comment_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_post_starts_with_zero_counters() {
        let post = NewPost::new("alice".to_string(), "hi".to_string()).with_id(7);

        assert_eq!(post.id, 7);
        assert_eq!(post.like_count, 0);
        assert_eq!(post.comment_count, 0);
        assert_eq!(post.created_at, post.updated_at);
    }

    #[test]
    fn edit_refreshes_update_timestamp_only() {
        let mut post = NewPost::new("alice".to_string(), "hi".to_string()).with_id(1);
        let created_at = post.created_at;

        post.edit("edited".to_string());

        assert_eq!(post.content, "edited");
        assert_eq!(post.created_at, created_at);
        assert!(post.updated_at >= created_at);
    }
}
