use anyhow::{Context, Result};
use api::handler::AppRouter;
use shared::{
    config::{Config, ConnectionManager, ConnectionPool},
    state::AppState,
    utils::init_logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::init().context("Failed to load configuration")?;

    let _log_guard = init_logger("jobboard-api", config.is_dev, config.enable_file_log);

    info!("Starting job board API initialization...");

    let db_pool = ConnectionManager::new_pool(&config.database_url, config.db_max_connections)
        .await
        .context("Failed to initialize database pool")?;

    if config.run_migrations {
        run_migrations(&db_pool)
            .await
            .context("Failed to run database migrations")?;
        info!("✅ Database migrations applied");
    }

    let state = AppState::new(db_pool, &config).await;

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("✅ Job board API shutdown complete.");

    Ok(())
}

async fn run_migrations(pool: &ConnectionPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;

    Ok(())
}
