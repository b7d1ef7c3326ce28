//! Postgres persistence for location records

pub mod db;

// Re-exports for convenience
pub use db::{create_pool, DbPool, LocationStore, PgLocationStore};
