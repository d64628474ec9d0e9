//! SeaORM entities for the `posts`, `comments` and `likes` tables.

pub mod comment;
pub mod like;
pub mod post;
