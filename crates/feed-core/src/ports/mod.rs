//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod counters;
mod repository;
mod store;

pub use counters::{CommentCounter, LikeCounter};
pub use repository::{
    BaseRepository, CommentRepository, LikeRepository, PostCounter, PostRepository,
};
pub use store::{Repositories, Transaction, UnitOfWork};
