use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

/// Configuration constants for the bot

/// Postgres connection string
/// Read once at startup from DATABASE_URL environment variable
pub static DATABASE_URL: Lazy<String> =
    Lazy::new(|| env::var("DATABASE_URL").unwrap_or_else(|_| "postgres://localhost/gastos".to_string()));

/// Base URL of the gastos-operativos web service (Cloud Run deployment)
/// Read from GASTOS_BASE_URL environment variable
/// The coordinates webhook lives at {base}/api/actualizar-coordenadas and the
/// index-sync endpoint at {base}/api/elastic
pub static GASTOS_BASE_URL: Lazy<String> =
    Lazy::new(|| env::var("GASTOS_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string()));

/// Elasticsearch node URL for direct driver-location indexing
/// Read from ELASTICSEARCH_URL environment variable
/// If unset, direct indexing is skipped (the webhook path still syncs)
pub static ELASTICSEARCH_URL: Lazy<Option<String>> = Lazy::new(|| env::var("ELASTICSEARCH_URL").ok());

/// Index that receives driver-location documents
pub static ELASTICSEARCH_INDEX: Lazy<String> =
    Lazy::new(|| env::var("ELASTICSEARCH_INDEX").unwrap_or_else(|_| "ubicacion_conductor".to_string()));

/// Elasticsearch API key (takes priority over basic auth)
pub static ELASTICSEARCH_API_KEY: Lazy<Option<String>> = Lazy::new(|| env::var("ELASTICSEARCH_API_KEY").ok());

/// Elasticsearch basic-auth username
pub static ELASTICSEARCH_USERNAME: Lazy<Option<String>> = Lazy::new(|| env::var("ELASTICSEARCH_USERNAME").ok());

/// Elasticsearch basic-auth password
pub static ELASTICSEARCH_PASSWORD: Lazy<Option<String>> = Lazy::new(|| env::var("ELASTICSEARCH_PASSWORD").ok());

/// Coordinates-webhook configuration
pub mod webhook {
    use super::Duration;

    /// Timeout for the actualizar-coordenadas call (in seconds).
    /// Past this budget the location is left for the cron sync.
    pub const TIMEOUT_SECS: u64 = 15;

    /// Webhook call timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(TIMEOUT_SECS)
    }
}

/// Search-index synchronization configuration
pub mod elastic_sync {
    /// Window (in minutes) of gastos rows re-indexed after a form location
    /// lands. Matches the widest window the /api/elastic endpoint accepts.
    pub const WINDOW_MINUTES: u32 = 60;

    /// Timeout for index-sync calls (in seconds)
    pub const TIMEOUT_SECS: u64 = 10;

    /// Index-sync call timeout duration
    pub fn timeout() -> std::time::Duration {
        std::time::Duration::from_secs(TIMEOUT_SECS)
    }
}

/// Database configuration
pub mod database {
    /// Maximum number of connections in the pool
    pub const MAX_CONNECTIONS: u32 = 10;
}
