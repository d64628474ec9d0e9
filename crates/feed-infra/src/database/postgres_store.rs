//! PostgreSQL unit of work built on SeaORM transactions.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction, DbConn, TransactionTrait};

use feed_core::error::RepoError;
use feed_core::ports::{
    CommentRepository, LikeRepository, PostRepository, Repositories, Transaction, UnitOfWork,
};

use super::postgres_base::{PostgresBaseRepository, map_db_err};
use super::postgres_repo::{
    PostgresCommentRepository, PostgresLikeRepository, PostgresPostRepository,
};

/// Feed store backed by a PostgreSQL connection pool.
pub struct PostgresStore {
    db: Arc<DatabaseConnection>,
    posts: PostgresPostRepository<DatabaseConnection>,
    comments: PostgresCommentRepository<DatabaseConnection>,
    likes: PostgresLikeRepository<DatabaseConnection>,
}

impl PostgresStore {
    pub fn new(db: DbConn) -> Self {
        let db = Arc::new(db);
        Self {
            posts: PostgresBaseRepository::new(db.clone()),
            comments: PostgresBaseRepository::new(db.clone()),
            likes: PostgresBaseRepository::new(db.clone()),
            db,
        }
    }
}

impl Repositories for PostgresStore {
    fn posts(&self) -> &dyn PostRepository {
        &self.posts
    }

    fn comments(&self) -> &dyn CommentRepository {
        &self.comments
    }

    fn likes(&self) -> &dyn LikeRepository {
        &self.likes
    }
}

#[async_trait]
impl UnitOfWork for PostgresStore {
    async fn begin(&self) -> Result<Box<dyn Transaction>, RepoError> {
        let txn = Arc::new(self.db.begin().await.map_err(map_db_err)?);

        Ok(Box::new(PostgresTransaction {
            posts: PostgresBaseRepository::new(txn.clone()),
            comments: PostgresBaseRepository::new(txn.clone()),
            likes: PostgresBaseRepository::new(txn.clone()),
            txn,
        }))
    }
}

/// Open PostgreSQL transaction. SeaORM rolls it back when dropped uncommitted.
pub struct PostgresTransaction {
    txn: Arc<DatabaseTransaction>,
    posts: PostgresPostRepository<DatabaseTransaction>,
    comments: PostgresCommentRepository<DatabaseTransaction>,
    likes: PostgresLikeRepository<DatabaseTransaction>,
}

impl Repositories for PostgresTransaction {
    fn posts(&self) -> &dyn PostRepository {
        &self.posts
    }

    fn comments(&self) -> &dyn CommentRepository {
        &self.comments
    }

    fn likes(&self) -> &dyn LikeRepository {
        &self.likes
    }
}

#[async_trait]
impl Transaction for PostgresTransaction {
    async fn commit(self: Box<Self>) -> Result<(), RepoError> {
        let Self {
            txn,
            posts,
            comments,
            likes,
        } = *self;
        drop((posts, comments, likes));

        let txn = Arc::try_unwrap(txn)
            .map_err(|_| RepoError::Query("transaction is still shared".to_string()))?;
        txn.commit().await.map_err(map_db_err)
    }
}
