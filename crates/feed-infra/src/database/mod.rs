//! Storage backends: PostgreSQL through SeaORM, and an in-memory fallback.

mod memory;

#[cfg(feature = "postgres")]
mod connections;
#[cfg(feature = "postgres")]
pub(crate) mod postgres_base;
#[cfg(feature = "postgres")]
pub mod postgres_repo;
#[cfg(feature = "postgres")]
mod postgres_store;

#[cfg(feature = "postgres")]
pub mod entity;

pub use memory::{InMemoryStore, InMemoryTransaction};

#[cfg(feature = "postgres")]
pub use connections::{DatabaseConfig, connect};
#[cfg(feature = "postgres")]
pub use postgres_repo::{
    PostgresCommentRepository, PostgresLikeRepository, PostgresPostRepository,
};
#[cfg(feature = "postgres")]
pub use postgres_store::{PostgresStore, PostgresTransaction};
