use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;
use teloxide::prelude::*;

use rutabot::core::{init_logger, log_gateway_configuration};
use rutabot::elastic::ElasticGateway;
use rutabot::storage::{create_pool, LocationStore, PgLocationStore};
use rutabot::telegram::{create_bot, schema, HandlerDeps};
use rutabot::{config, GastosGateway, SessionFlags};

/// Main entry point for the Telegram bot
///
/// # Errors
/// Returns an error if initialization fails (database, bot creation).
#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env if present
    let _ = dotenv();

    init_logger();
    log_gateway_configuration();

    let pool = create_pool(&config::DATABASE_URL).await?;
    log::info!("Connected to Postgres");

    let store: Arc<dyn LocationStore> = Arc::new(PgLocationStore::new(pool));
    let deps = HandlerDeps::new(
        store,
        Arc::new(SessionFlags::new()),
        Arc::new(GastosGateway::from_env()),
        Arc::new(ElasticGateway::from_env()?),
    );

    let bot = create_bot()?;
    log::info!("Starting rutabot dispatcher");

    Dispatcher::builder(bot, schema(deps))
        .dependencies(DependencyMap::new())
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    log::info!("Dispatcher shutdown gracefully");
    Ok(())
}
