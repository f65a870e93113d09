//! Ledger / Stock API - Main Application Entry Point
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Pick the ledger store: PostgreSQL (pool + migrations) when
//!    `DATABASE_URL` is set, in memory otherwise
//! 3. Create the in-memory stock store, seeded unless `SEED_STOCK=false`
//! 4. Build HTTP router with routes and middleware
//! 5. Start server on configured port

use std::sync::Arc;

use ledger_stock_api::{
    config::Config,
    db,
    repositories::{
        InMemoryLedgerRepository, InMemoryStockRepository, LedgerRepository, PgLedgerRepository,
    },
    routes,
    state::AppState,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let ledger: Arc<dyn LedgerRepository> = match config.database_url.as_deref() {
        Some(url) => {
            let pool = db::create_pool(url, config.database_max_connections).await?;
            tracing::info!("Database pool created");

            db::run_migrations(&pool).await?;
            tracing::info!("Database migrations complete");

            Arc::new(PgLedgerRepository::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, ledger entries are kept in memory");
            Arc::new(InMemoryLedgerRepository::new())
        }
    };

    let stock = if config.seed_stock {
        InMemoryStockRepository::seeded()
    } else {
        InMemoryStockRepository::new()
    };

    let app = routes::create_router(AppState::new(ledger, Arc::new(stock)));

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
