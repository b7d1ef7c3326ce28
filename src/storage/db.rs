use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;

use crate::config;
use crate::core::error::AppResult;

pub type DbPool = sqlx::PgPool;

/// Create the Postgres connection pool
///
/// # Arguments
///
/// * `database_url` - Postgres connection string
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config::database::MAX_CONNECTIONS)
        .connect(database_url)
        .await
}

/// Append-only writes to the two location tables.
///
/// The two tables share the `(telegram_id, lat, lon)` shape but serve
/// different flows: `ubicaciones_telegram` is the historical record behind
/// form association, `ubicacion_conductor` holds driver tracking points.
/// Behind a trait so handler tests can inject write failures.
#[async_trait]
pub trait LocationStore: Send + Sync {
    /// Append to the historical form-association table
    async fn insert_form_location(&self, telegram_id: i64, lat: f64, lon: f64) -> AppResult<()>;

    /// Append to the driver-tracking table
    async fn insert_driver_location(&self, telegram_id: i64, lat: f64, lon: f64) -> AppResult<()>;
}

/// Production store backed by the shared pool.
///
/// Each write acquires a pooled connection for the duration of a single
/// INSERT; the connection returns to the pool when the guard drops, on every
/// exit path.
pub struct PgLocationStore {
    pool: DbPool,
}

impl PgLocationStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LocationStore for PgLocationStore {
    async fn insert_form_location(&self, telegram_id: i64, lat: f64, lon: f64) -> AppResult<()> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query("INSERT INTO public.ubicaciones_telegram (telegram_id, lat, lon) VALUES ($1, $2, $3)")
            .bind(telegram_id)
            .bind(lat)
            .bind(lon)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    async fn insert_driver_location(&self, telegram_id: i64, lat: f64, lon: f64) -> AppResult<()> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query("INSERT INTO public.ubicacion_conductor (telegram_id, lat, lon) VALUES ($1, $2, $3)")
            .bind(telegram_id)
            .bind(lat)
            .bind(lon)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }
}
