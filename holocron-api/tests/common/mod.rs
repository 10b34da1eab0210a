/// Common test utilities for integration tests
///
/// Provides a TestContext wrapping a fresh in-memory SQLite database with
/// the schema and seed catalog applied, plus small request/response helpers
/// for driving the router directly through tower.

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use holocron_api::app::{build_router, AppState};
use holocron_api::config::{ApiConfig, Config, DatabaseConfig as ApiDatabaseConfig};
use holocron_shared::db::migrations::run_migrations;
use holocron_shared::db::pool::{create_pool, DatabaseConfig};
use sqlx::SqlitePool;
use tower::ServiceExt as _;

/// Test context containing the database pool and the built router
pub struct TestContext {
    pub db: SqlitePool,
    pub app: axum::Router,
}

impl TestContext {
    /// Creates a new test context against a fresh in-memory database
    ///
    /// A single-connection pool keeps every query on the same in-memory
    /// database instance.
    pub async fn new() -> anyhow::Result<Self> {
        let db = create_pool(&DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            ..Default::default()
        })
        .await?;

        run_migrations(&db).await?;

        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            database: ApiDatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
            },
        };

        let state = AppState::new(db.clone(), config);
        let app = build_router(state);

        Ok(TestContext { db, app })
    }

    /// Sends a GET request
    pub async fn get(&self, uri: &str) -> Response<Body> {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        self.app.clone().oneshot(request).await.unwrap()
    }

    /// Sends a POST request with a JSON body
    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> Response<Body> {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.app.clone().oneshot(request).await.unwrap()
    }

    /// Sends a POST request with no body at all
    pub async fn post_empty(&self, uri: &str) -> Response<Body> {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        self.app.clone().oneshot(request).await.unwrap()
    }

    /// Sends a DELETE request
    pub async fn delete(&self, uri: &str) -> Response<Body> {
        let request = Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        self.app.clone().oneshot(request).await.unwrap()
    }
}

/// Reads a response body as JSON
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Creates a user through the API and returns its id
pub async fn create_test_user(ctx: &TestContext, name: &str, email: &str) -> i64 {
    let response = ctx
        .post_json(
            "/user",
            serde_json::json!({
                "name": name,
                "email": email,
                "password": "opensesame",
            }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}
