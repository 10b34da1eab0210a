/// Database infrastructure
///
/// - `pool`: SQLite connection pool construction and health checks
/// - `migrations`: Migration runner built on sqlx's migration system

pub mod migrations;
pub mod pool;
