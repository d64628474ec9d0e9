//! # Feed Infrastructure
//!
//! Concrete implementations of the storage ports defined in `feed-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL storage via SeaORM

pub mod database;

pub use database::InMemoryStore;

#[cfg(feature = "postgres")]
pub use database::{DatabaseConfig, PostgresStore};
