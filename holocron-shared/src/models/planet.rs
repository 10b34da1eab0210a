/// Planet model and database operations
///
/// Structurally identical to `Person` with a description instead of a bio.
/// Same lifecycle: seeded by schema provisioning, mutated only by the stars
/// increment, never deleted through the API.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE planet (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     name TEXT NOT NULL UNIQUE,
///     stars INTEGER,
///     description TEXT NOT NULL
/// );
/// ```

use serde::Serialize;
use sqlx::{Sqlite, SqlitePool};

/// Catalog planet record
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Planet {
    /// Row id
    pub id: i64,

    /// Unique name
    pub name: String,

    /// Popularity counter; NULL means never favorited
    pub stars: Option<i64>,

    /// Description text
    pub description: String,
}

impl Planet {
    /// Finds a planet by id, returning `None` if absent
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let planet = sqlx::query_as::<_, Planet>(
            "SELECT id, name, stars, description FROM planet WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(planet)
    }

    /// Lists all planets ordered by id
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        let planets = sqlx::query_as::<_, Planet>(
            "SELECT id, name, stars, description FROM planet ORDER BY id",
        )
        .fetch_all(pool)
        .await?;

        Ok(planets)
    }

    /// Atomically bumps the stars counter for a planet
    ///
    /// See [`crate::models::person::Person::increment_stars`]; same contract.
    pub async fn increment_stars<'e, E>(db: E, id: i64) -> Result<bool, sqlx::Error>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("UPDATE planet SET stars = COALESCE(stars, 0) + 1 WHERE id = ?")
            .bind(id)
            .execute(db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
