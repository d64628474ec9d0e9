//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_name: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub like_count: i64,
    pub comment_count: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
    #[sea_orm(has_many = "super::like::Entity")]
    Like,
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl Related<super::like::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Like.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for feed_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_name: model.user_name,
            content: model.content,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
            like_count: model.like_count,
            comment_count: model.comment_count,
        }
    }
}

/// Conversion from a Domain post draft to an insertable ActiveModel.
impl From<feed_core::domain::NewPost> for ActiveModel {
    fn from(post: feed_core::domain::NewPost) -> Self {
        Self {
            id: NotSet,
            user_name: Set(post.user_name),
            content: Set(post.content),
            created_at: Set(post.created_at.into()),
            updated_at: Set(post.updated_at.into()),
            like_count: Set(post.like_count),
            comment_count: Set(post.comment_count),
        }
    }
}

/// Conversion from Domain Post to an updating ActiveModel.
///
/// Counters stay `NotSet`: only atomic increments may write them.
impl From<feed_core::domain::Post> for ActiveModel {
    fn from(post: feed_core::domain::Post) -> Self {
        Self {
            id: Set(post.id),
            user_name: Set(post.user_name),
            content: Set(post.content),
            created_at: NotSet,
            updated_at: Set(post.updated_at.into()),
            like_count: NotSet,
            comment_count: NotSet,
        }
    }
}
