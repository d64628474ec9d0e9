//! Like entity for SeaORM.
//!
//! `(post_id, user_name)` carries a unique index, created by the migration.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "likes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub post_id: i64,
    pub user_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::post::Entity",
        from = "Column::PostId",
        to = "super::post::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Post,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for feed_core::domain::Like {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            post_id: model.post_id,
            user_name: model.user_name,
        }
    }
}

impl From<feed_core::domain::NewLike> for ActiveModel {
    fn from(like: feed_core::domain::NewLike) -> Self {
        Self {
            id: NotSet,
            post_id: Set(like.post_id),
            user_name: Set(like.user_name),
        }
    }
}

impl From<feed_core::domain::Like> for ActiveModel {
    fn from(like: feed_core::domain::Like) -> Self {
        Self {
            id: Set(like.id),
            post_id: Set(like.post_id),
            user_name: Set(like.user_name),
        }
    }
}
