use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait, SqlErr,
};

use feed_core::error::RepoError;
use feed_core::ports::BaseRepository;

/// Translate a SeaORM error into the repository error of the ports.
pub(crate) fn map_db_err(err: DbErr) -> RepoError {
    if let Some(sql_err) = err.sql_err() {
        return match sql_err {
            SqlErr::UniqueConstraintViolation(_) => {
                RepoError::Constraint("Entity already exists".to_string())
            }
            SqlErr::ForeignKeyConstraintViolation(detail) => RepoError::Constraint(detail),
            other => RepoError::Query(other.to_string()),
        };
    }

    match err {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepoError::NotFound,
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(err.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

/// Generic PostgreSQL repository implementation.
///
/// `C` is either the pooled connection or an open transaction, so the same
/// repository code serves both plain and transactional calls.
pub struct PostgresBaseRepository<E, C>
where
    E: EntityTrait,
{
    pub(crate) db: Arc<C>,
    _entity: PhantomData<E>,
}

impl<E, C> PostgresBaseRepository<E, C>
where
    E: EntityTrait,
{
    pub fn new(db: Arc<C>) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E, C, T, N, ID> BaseRepository<T, N, ID> for PostgresBaseRepository<E, C>
where
    E: EntityTrait,
    C: ConnectionTrait + Send + Sync + 'static,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync + Send,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = ID>,
    ID: Send + Sync + Into<sea_orm::Value> + Clone + Copy + 'static,
    T: From<E::Model> + Into<E::ActiveModel> + Send + Sync + 'static,
    N: Into<E::ActiveModel> + Send + 'static,
{
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError> {
        let result = E::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<T>, RepoError> {
        let result = E::find().all(self.db.as_ref()).await.map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, draft: N) -> Result<T, RepoError> {
        let active_model: E::ActiveModel = draft.into();
        let model = active_model
            .insert(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn update(&self, entity: T) -> Result<T, RepoError> {
        let active_model: E::ActiveModel = entity.into();
        let model = active_model
            .update(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn delete(&self, id: ID) -> Result<bool, RepoError> {
        let result = E::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }
}
