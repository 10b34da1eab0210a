/// Application state and router builder
///
/// The shared state holds the connection pool and configuration and is
/// handed to every handler through Axum's `State` extractor — the store
/// handle is injected explicitly rather than living in a process-wide
/// global.
///
/// # Example
///
/// ```no_run
/// use holocron_api::{app::AppState, config::Config};
/// use holocron_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = create_pool(&DatabaseConfig {
///     url: config.database.url.clone(),
///     max_connections: config.database.max_connections,
///     ..Default::default()
/// })
/// .await?;
/// let state = AppState::new(pool, config);
/// let app = holocron_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    routing::{delete, get, post},
    Router,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: SqlitePool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── /health                        # Health check
/// ├── /user                          # GET list, POST create
/// │   ├── /:id                       # GET, DELETE
/// │   └── /favorites/:id             # GET per-user favorites
/// ├── /people                        # GET list
/// │   └── /:id                       # GET
/// ├── /planet                        # GET list
/// │   ├── /:id                       # GET
/// │   └── /favorites                 # GET all planet favorites
/// └── /favorite
///     ├── /planet                    # POST add (bumps stars)
///     ├── /planet/:planet_id         # DELETE first match
///     ├── /people                    # POST add (bumps stars)
///     └── /people/:people_id         # DELETE first match
/// ```
///
/// Middleware: request tracing (tower-http TraceLayer) and permissive CORS.
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route(
            "/user",
            get(routes::users::list_users).post(routes::users::create_user),
        )
        .route("/user/favorites/:id", get(routes::favorites::user_favorites))
        .route(
            "/user/:id",
            get(routes::users::get_user).delete(routes::users::delete_user),
        )
        .route("/people", get(routes::people::list_people))
        .route("/people/:id", get(routes::people::get_person))
        .route("/planet", get(routes::planets::list_planets))
        .route(
            "/planet/favorites",
            get(routes::favorites::list_planet_favorites),
        )
        .route("/planet/:id", get(routes::planets::get_planet))
        .route(
            "/favorite/planet",
            post(routes::favorites::add_planet_favorite),
        )
        .route(
            "/favorite/planet/:planet_id",
            delete(routes::favorites::remove_planet_favorite),
        )
        .route(
            "/favorite/people",
            post(routes::favorites::add_people_favorite),
        )
        .route(
            "/favorite/people/:people_id",
            delete(routes::favorites::remove_people_favorite),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
