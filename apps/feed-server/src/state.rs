//! Application state - shared across all handlers.

use std::sync::Arc;

use feed_core::ports::UnitOfWork;
use feed_core::{CommentService, LikeService, PostService};
use feed_infra::InMemoryStore;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostService>,
    pub comments: Arc<CommentService>,
    pub likes: Arc<LikeService>,
    /// Name of the active storage backend, reported by the health check.
    pub storage: &'static str,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "postgres")]
        if let Some(db_config) = config.database() {
            match postgres_store(&db_config, config.auto_migrate).await {
                Ok(store) => {
                    tracing::info!("Application state initialized (postgres)");
                    return Self::with_store(store, "postgres");
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                }
            }
        } else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        }

        #[cfg(not(feature = "postgres"))]
        if config.database_url.is_some() {
            tracing::warn!("Built without postgres feature - DATABASE_URL is ignored");
        }

        tracing::info!("Application state initialized (memory)");
        Self::with_store(Arc::new(InMemoryStore::new()), "memory")
    }

    /// Wire the services over a store. The post service is shared as the
    /// counter capability of the comment and like services.
    pub fn with_store(store: Arc<dyn UnitOfWork>, storage: &'static str) -> Self {
        let posts = Arc::new(PostService::new(store.clone()));

        Self {
            comments: Arc::new(CommentService::new(store.clone(), posts.clone())),
            likes: Arc::new(LikeService::new(store, posts.clone())),
            posts,
            storage,
        }
    }
}

#[cfg(feature = "postgres")]
async fn postgres_store(
    config: &feed_infra::DatabaseConfig,
    auto_migrate: bool,
) -> Result<Arc<dyn UnitOfWork>, sea_orm::DbErr> {
    use migration::MigratorTrait;

    let conn = feed_infra::database::connect(config).await?;
    if auto_migrate {
        migration::Migrator::up(&conn, None).await?;
        tracing::info!("Database migrations applied");
    }

    Ok(Arc::new(feed_infra::PostgresStore::new(conn)))
}
