use serde::{Deserialize, Serialize};

use super::PostId;

/// Store-generated surrogate key of a like.
pub type LikeId = i64;

/// Like entity - marks that a user likes a post.
///
/// At most one like exists per `(post_id, user_name)` pair. Likes are
/// immutable: they are only ever inserted or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub id: LikeId,
    pub post_id: PostId,
    pub user_name: String,
}

/// A like that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLike {
    pub post_id: PostId,
    pub user_name: String,
}

impl NewLike {
    pub fn new(post_id: PostId, user_name: String) -> Self {
        Self { post_id, user_name }
    }

    pub fn with_id(self, id: LikeId) -> Like {
        Like {
            id,
            post_id: self.post_id,
            user_name: self.user_name,
        }
    }
}
