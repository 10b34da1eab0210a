/// Person model and database operations
///
/// People are catalog records: they enter the system only through schema
/// provisioning (the seed migration), are never deleted via the API, and
/// the only mutation is the stars increment performed when a favorite is
/// added.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE people (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     name TEXT NOT NULL UNIQUE,
///     stars INTEGER,
///     bio TEXT NOT NULL
/// );
/// ```

use serde::Serialize;
use sqlx::{Sqlite, SqlitePool};

/// Catalog person record
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Person {
    /// Row id
    pub id: i64,

    /// Unique name
    pub name: String,

    /// Popularity counter; NULL means never favorited
    pub stars: Option<i64>,

    /// Biography text
    pub bio: String,
}

impl Person {
    /// Finds a person by id, returning `None` if absent
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let person =
            sqlx::query_as::<_, Person>("SELECT id, name, stars, bio FROM people WHERE id = ?")
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(person)
    }

    /// Lists all people ordered by id
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        let people =
            sqlx::query_as::<_, Person>("SELECT id, name, stars, bio FROM people ORDER BY id")
                .fetch_all(pool)
                .await?;

        Ok(people)
    }

    /// Atomically bumps the stars counter for a person
    ///
    /// A single UPDATE sets NULL to 1 and otherwise adds one, so concurrent
    /// favorite-adds cannot lose updates the way a read-then-write would.
    /// Takes any executor so it can run inside the favorite-add transaction.
    ///
    /// Returns true if the row exists, false otherwise.
    pub async fn increment_stars<'e, E>(db: E, id: i64) -> Result<bool, sqlx::Error>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("UPDATE people SET stars = COALESCE(stars, 0) + 1 WHERE id = ?")
            .bind(id)
            .execute(db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
