//! Logging initialization and configuration checking
//!
//! This module provides:
//! - Logger initialization
//! - Gateway configuration validation and logging
//! - Startup diagnostics

use crate::config;

/// Initialize the logger from RUST_LOG (defaults to info)
pub fn init_logger() {
    if std::env::var("RUST_LOG").is_err() {
        // Runs at startup before any concurrent access to env vars
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init_timed();
}

/// Logs gateway configuration at application startup
///
/// Validates and logs:
/// - GASTOS_BASE_URL shape (the coordinates webhook and index-sync endpoints)
/// - Elasticsearch node and credentials for direct driver indexing
pub fn log_gateway_configuration() {
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    log::info!("🌐 Gateway Configuration Check");
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    match url::Url::parse(&config::GASTOS_BASE_URL) {
        Ok(u) => {
            log::info!("✅ GASTOS_BASE_URL: {}", u);
            log::info!("   Webhook: {}/api/actualizar-coordenadas", config::GASTOS_BASE_URL.trim_end_matches('/'));
        }
        Err(e) => {
            log::error!("❌ GASTOS_BASE_URL: {} ({})", *config::GASTOS_BASE_URL, e);
            log::error!("   Form locations will fail to sync with gastos_operacionales!");
        }
    }

    match config::ELASTICSEARCH_URL.as_deref() {
        Some(node) => {
            log::info!("✅ ELASTICSEARCH_URL: {}", node);
            log::info!("   Driver index: {}", *config::ELASTICSEARCH_INDEX);
            if config::ELASTICSEARCH_API_KEY.is_some() {
                log::info!("   Auth: api key");
            } else if config::ELASTICSEARCH_USERNAME.is_some() && config::ELASTICSEARCH_PASSWORD.is_some() {
                log::info!("   Auth: basic");
            } else {
                log::warn!("⚠️  No Elasticsearch credentials set, indexing unauthenticated");
            }
        }
        None => {
            log::warn!("⚠️  ELASTICSEARCH_URL: not set");
            log::warn!("   Driver locations will be stored in Postgres only");
        }
    }
}
