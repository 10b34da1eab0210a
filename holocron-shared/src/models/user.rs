/// User model and database operations
///
/// Users sign up through the API and can favorite people and planets.
/// There is no update endpoint; the lifecycle is create → delete.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE "user" (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     name TEXT NOT NULL UNIQUE,
///     email TEXT NOT NULL UNIQUE,
///     password TEXT NOT NULL
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use holocron_shared::models::user::{CreateUser, User};
/// # use sqlx::SqlitePool;
/// # async fn example(pool: SqlitePool) -> Result<(), sqlx::Error> {
/// let user = User::create(
///     &pool,
///     CreateUser {
///         name: "han".to_string(),
///         email: "han@falcon.example".to_string(),
///         password: "nevertellmetheodds".to_string(),
///     },
/// )
/// .await?;
///
/// assert!(User::find_by_id(&pool, user.id).await?.is_some());
/// # Ok(())
/// # }
/// ```

use serde::Serialize;
use sqlx::SqlitePool;

/// User account record
///
/// The password column is stored as-is (no hashing exists in this system —
/// a known gap carried over deliberately) and is never serialized into API
/// responses.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    /// Row id
    pub id: i64,

    /// Unique display name
    pub name: String,

    /// Unique email address
    pub email: String,

    /// Plaintext password; excluded from all JSON output
    #[serde(skip_serializing)]
    pub password: String,
}

/// Input for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl User {
    /// Creates a new user
    ///
    /// # Errors
    ///
    /// Returns an error if the name or email is already taken (unique
    /// constraint violation) or the database is unreachable.
    pub async fn create(pool: &SqlitePool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO "user" (name, email, password)
            VALUES (?, ?, ?)
            RETURNING id, name, email, password
            "#,
        )
        .bind(data.name)
        .bind(data.email)
        .bind(data.password)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by id, returning `None` if absent
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"SELECT id, name, email, password FROM "user" WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Lists all users ordered by id
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        let users = sqlx::query_as::<_, User>(
            r#"SELECT id, name, email, password FROM "user" ORDER BY id"#,
        )
        .fetch_all(pool)
        .await?;

        Ok(users)
    }

    /// Deletes a user by id
    ///
    /// Returns true if a row was deleted, false if the user did not exist.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(r#"DELETE FROM "user" WHERE id = ?"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
