//! Comment entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(indexed)]
    pub post_id: i64,
    pub user_name: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
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

impl From<Model> for feed_core::domain::Comment {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            post_id: model.post_id,
            user_name: model.user_name,
            content: model.content,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<feed_core::domain::NewComment> for ActiveModel {
    fn from(comment: feed_core::domain::NewComment) -> Self {
        Self {
            id: NotSet,
            post_id: Set(comment.post_id),
            user_name: Set(comment.user_name),
            content: Set(comment.content),
            created_at: Set(comment.created_at.into()),
            updated_at: Set(comment.updated_at.into()),
        }
    }
}

/// The owning post and creation time never change after insert.
impl From<feed_core::domain::Comment> for ActiveModel {
    fn from(comment: feed_core::domain::Comment) -> Self {
        Self {
            id: Set(comment.id),
            post_id: NotSet,
            user_name: Set(comment.user_name),
            content: Set(comment.content),
            created_at: NotSet,
            updated_at: Set(comment.updated_at.into()),
        }
    }
}
