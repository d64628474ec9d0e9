//! Unit of work - groups repository calls into one atomic transaction.

use async_trait::async_trait;

use super::repository::{CommentRepository, LikeRepository, PostRepository};
use crate::error::RepoError;

/// Access to the three repositories of the feed.
pub trait Repositories: Send + Sync {
    fn posts(&self) -> &dyn PostRepository;
    fn comments(&self) -> &dyn CommentRepository;
    fn likes(&self) -> &dyn LikeRepository;
}

/// A store that can open transactions.
///
/// Repository calls made directly on the store run outside any transaction,
/// each one atomic on its own.
#[async_trait]
pub trait UnitOfWork: Repositories {
    async fn begin(&self) -> Result<Box<dyn Transaction>, RepoError>;
}

/// An open transaction.
///
/// Dropping it without calling [`Transaction::commit`] rolls back every
/// write made through its repositories.
#[async_trait]
pub trait Transaction: Repositories {
    async fn commit(self: Box<Self>) -> Result<(), RepoError>;
}
