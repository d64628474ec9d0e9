use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PostId;

/// Store-generated surrogate key of a comment.
pub type CommentId = i64;

/// Comment entity - text attached to exactly one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    pub user_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Replace the content and refresh the update timestamp.
    pub fn edit(&mut self, content: String) {
        self.content = content;
        self.updated_at = Utc::now();
    }
}

/// A comment that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub post_id: PostId,
    pub user_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewComment {
    pub fn new(post_id: PostId, user_name: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            post_id,
            user_name,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_id(self, id: CommentId) -> Comment {
        Comment {
            id,
            post_id: self.post_id,
            user_name: self.user_name,
            content: self.content,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
