//! # Holocron API Server
//!
//! REST/JSON backend for the Holocron catalog: users, people, planets, and
//! per-user favorites with a popularity counter.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p holocron-api
//! ```

use holocron_api::{
    app::{build_router, AppState},
    config::Config,
};
use holocron_shared::db::{
    migrations::{get_migration_status, run_migrations},
    pool::{close_pool, create_pool, DatabaseConfig},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "holocron_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Holocron API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;

    let pool = create_pool(&DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        ..Default::default()
    })
    .await?;

    run_migrations(&pool).await?;
    let status = get_migration_status(&pool).await?;
    tracing::info!(
        applied_migrations = status.applied_migrations,
        "Schema is provisioned"
    );

    let state = AppState::new(pool.clone(), config.clone());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Server listening on http://{}", config.bind_address());

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutdown signal received, exiting...");
        })
        .await?;

    close_pool(pool).await;

    Ok(())
}
