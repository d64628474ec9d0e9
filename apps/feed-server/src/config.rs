//! Application configuration loaded from environment variables.

use std::env;

#[cfg(feature = "postgres")]
use feed_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Without it the server runs on the in-memory store.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    /// Apply pending migrations before serving.
    pub auto_migrate: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(8080),
            database_url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
            db_max_connections: parse_var("DB_MAX_CONNECTIONS").unwrap_or(10),
            db_min_connections: parse_var("DB_MIN_CONNECTIONS").unwrap_or(1),
            auto_migrate: env::var("DB_AUTO_MIGRATE")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }

    #[cfg(feature = "postgres")]
    pub fn database(&self) -> Option<DatabaseConfig> {
        self.database_url.as_ref().map(|url| DatabaseConfig {
            max_connections: self.db_max_connections,
            min_connections: self.db_min_connections,
            ..DatabaseConfig::new(url.clone())
        })
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}
