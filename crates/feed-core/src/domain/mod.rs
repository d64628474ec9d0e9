//! Domain entities - the core business objects.

mod comment;
mod like;
mod post;

pub use comment::{Comment, CommentId, NewComment};
pub use like::{Like, LikeId, NewLike};
pub use post::{NewPost, Post, PostId};
