//! Rutabot — Telegram bot that routes incoming driver geolocations.
//!
//! A location message is dispatched to one of two persistence flows based on
//! per-chat session flags: association with a pending operational-expense
//! form, or live driver tracking. Both flows synchronize best-effort with an
//! Elasticsearch index and the gastos-operativos web service.
//!
//! # Module Structure
//!
//! - `core`: errors, logging, startup diagnostics
//! - `storage`: Postgres location tables
//! - `gastos`: webhook gateway to the gastos-operativos service
//! - `elastic`: search-index synchronization
//! - `session`: per-chat flow flags
//! - `telegram`: bot integration and handlers

pub mod config;
pub mod core;
pub mod elastic;
pub mod gastos;
pub mod session;
pub mod storage;
pub mod telegram;

// Re-export commonly used types for convenience
pub use crate::core::error::{AppError, AppResult};
pub use gastos::{GastosGateway, WebhookOutcome};
pub use session::SessionFlags;
pub use storage::{create_pool, LocationStore, PgLocationStore};
pub use telegram::{schema, HandlerDeps, HandlerError};
