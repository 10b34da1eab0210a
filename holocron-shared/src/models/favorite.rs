/// Favorite join records
///
/// A favorite links a user to a planet or a person. Favorites carry their
/// own id and no uniqueness constraint, so the same (entity, user) pair may
/// appear more than once; removal deletes the first match (lowest id).
///
/// The create operations take any executor so the request handler can stage
/// the insert and the stars increment inside one transaction and commit
/// them as a single durable unit.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE planet_favorite (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     planet_id INTEGER NOT NULL REFERENCES planet (id),
///     user_id INTEGER NOT NULL REFERENCES "user" (id)
/// );
///
/// CREATE TABLE people_favorite (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     people_id INTEGER NOT NULL REFERENCES people (id),
///     user_id INTEGER NOT NULL REFERENCES "user" (id)
/// );
/// ```

use serde::Serialize;
use sqlx::{Sqlite, SqlitePool};

/// Join record linking a user to a planet
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PlanetFavorite {
    /// Row id
    pub id: i64,

    /// Favorited planet
    pub planet_id: i64,

    /// Owning user
    pub user_id: i64,
}

/// Join record linking a user to a person
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PeopleFavorite {
    /// Row id
    pub id: i64,

    /// Favorited person
    pub people_id: i64,

    /// Owning user
    pub user_id: i64,
}

impl PlanetFavorite {
    /// Inserts a new planet favorite
    ///
    /// # Errors
    ///
    /// Fails with a foreign-key constraint violation if the planet or user
    /// does not exist.
    pub async fn create<'e, E>(db: E, planet_id: i64, user_id: i64) -> Result<Self, sqlx::Error>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let favorite = sqlx::query_as::<_, PlanetFavorite>(
            r#"
            INSERT INTO planet_favorite (planet_id, user_id)
            VALUES (?, ?)
            RETURNING id, planet_id, user_id
            "#,
        )
        .bind(planet_id)
        .bind(user_id)
        .fetch_one(db)
        .await?;

        Ok(favorite)
    }

    /// Lists all planet favorites ordered by id
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        let favorites = sqlx::query_as::<_, PlanetFavorite>(
            "SELECT id, planet_id, user_id FROM planet_favorite ORDER BY id",
        )
        .fetch_all(pool)
        .await?;

        Ok(favorites)
    }

    /// Lists a user's planet favorites ordered by id
    pub async fn list_by_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<Self>, sqlx::Error> {
        let favorites = sqlx::query_as::<_, PlanetFavorite>(
            "SELECT id, planet_id, user_id FROM planet_favorite WHERE user_id = ? ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(favorites)
    }

    /// Deletes the first favorite matching the planet id
    ///
    /// Tie-break between duplicates is lowest id. Returns true if a row was
    /// deleted. The stars counter is not touched on removal.
    pub async fn delete_first_by_planet(
        pool: &SqlitePool,
        planet_id: i64,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM planet_favorite
            WHERE id = (
                SELECT id FROM planet_favorite
                WHERE planet_id = ?
                ORDER BY id
                LIMIT 1
            )
            "#,
        )
        .bind(planet_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl PeopleFavorite {
    /// Inserts a new people favorite
    ///
    /// # Errors
    ///
    /// Fails with a foreign-key constraint violation if the person or user
    /// does not exist.
    pub async fn create<'e, E>(db: E, people_id: i64, user_id: i64) -> Result<Self, sqlx::Error>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let favorite = sqlx::query_as::<_, PeopleFavorite>(
            r#"
            INSERT INTO people_favorite (people_id, user_id)
            VALUES (?, ?)
            RETURNING id, people_id, user_id
            "#,
        )
        .bind(people_id)
        .bind(user_id)
        .fetch_one(db)
        .await?;

        Ok(favorite)
    }

    /// Lists a user's people favorites ordered by id
    pub async fn list_by_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<Self>, sqlx::Error> {
        let favorites = sqlx::query_as::<_, PeopleFavorite>(
            "SELECT id, people_id, user_id FROM people_favorite WHERE user_id = ? ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(favorites)
    }

    /// Deletes the first favorite matching the person id
    ///
    /// Same contract as [`PlanetFavorite::delete_first_by_planet`].
    pub async fn delete_first_by_person(
        pool: &SqlitePool,
        people_id: i64,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM people_favorite
            WHERE id = (
                SELECT id FROM people_favorite
                WHERE people_id = ?
                ORDER BY id
                LIMIT 1
            )
            "#,
        )
        .bind(people_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favorite_serialization_shape() {
        let favorite = PlanetFavorite {
            id: 1,
            planet_id: 3,
            user_id: 7,
        };

        let json = serde_json::to_value(&favorite).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["planet_id"], 3);
        assert_eq!(json["user_id"], 7);
    }

    #[test]
    fn test_people_favorite_uses_people_id_key() {
        let favorite = PeopleFavorite {
            id: 1,
            people_id: 1,
            user_id: 1,
        };

        let json = serde_json::to_value(&favorite).unwrap();
        assert!(json.get("people_id").is_some());
        assert!(json.get("person_id").is_none());
    }
}
