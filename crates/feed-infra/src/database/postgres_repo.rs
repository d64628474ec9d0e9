//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter};

use feed_core::domain::{Comment, Like, PostId};
use feed_core::error::RepoError;
use feed_core::ports::{CommentRepository, LikeRepository, PostCounter, PostRepository};

use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::like::{self, Entity as LikeEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL post repository.
pub type PostgresPostRepository<C> = PostgresBaseRepository<PostEntity, C>;

/// PostgreSQL comment repository.
pub type PostgresCommentRepository<C> = PostgresBaseRepository<CommentEntity, C>;

/// PostgreSQL like repository.
pub type PostgresLikeRepository<C> = PostgresBaseRepository<LikeEntity, C>;

#[async_trait]
impl<C> PostRepository for PostgresPostRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn adjust_counter(
        &self,
        id: PostId,
        counter: PostCounter,
        delta: i64,
    ) -> Result<bool, RepoError> {
        let column = match counter {
            PostCounter::Likes => post::Column::LikeCount,
            PostCounter::Comments => post::Column::CommentCount,
        };

        // Single statement: no lost update between concurrent adjustments.
        let result = PostEntity::update_many()
            .col_expr(
                column,
                Expr::cust_with_exprs("GREATEST($1, 0)", [Expr::col(column).add(delta)]),
            )
            .filter(post::Column::Id.eq(id))
            .exec(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }
}

#[async_trait]
impl<C> CommentRepository for PostgresCommentRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_by_post_id(&self, post_id: PostId) -> Result<Vec<Comment>, RepoError> {
        let result = CommentEntity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn delete_by_post_id(&self, post_id: PostId) -> Result<u64, RepoError> {
        let result = CommentEntity::delete_many()
            .filter(comment::Column::PostId.eq(post_id))
            .exec(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }
}

#[async_trait]
impl<C> LikeRepository for PostgresLikeRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_by_post_id(&self, post_id: PostId) -> Result<Vec<Like>, RepoError> {
        let result = LikeEntity::find()
            .filter(like::Column::PostId.eq(post_id))
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_post_id_and_user_name(
        &self,
        post_id: PostId,
        user_name: &str,
    ) -> Result<Option<Like>, RepoError> {
        tracing::debug!(post_id, "Finding like by post and user");

        let result = LikeEntity::find()
            .filter(like::Column::PostId.eq(post_id))
            .filter(like::Column::UserName.eq(user_name))
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn count_by_post_id(&self, post_id: PostId) -> Result<u64, RepoError> {
        LikeEntity::find()
            .filter(like::Column::PostId.eq(post_id))
            .count(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    async fn delete_by_post_id(&self, post_id: PostId) -> Result<u64, RepoError> {
        let result = LikeEntity::delete_many()
            .filter(like::Column::PostId.eq(post_id))
            .exec(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }
}
