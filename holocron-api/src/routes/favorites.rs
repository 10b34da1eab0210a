/// Favorite endpoints
///
/// Adding a favorite is the one multi-step write in the system: the join
/// record insert and the stars bump on the target entity commit as a single
/// transaction, so a failure in either leaves no partial effects. The bump
/// itself is a single atomic UPDATE (NULL → 1, otherwise +1) rather than a
/// read-modify-write, so concurrent adds on the same row cannot lose
/// updates.
///
/// Removal deletes the first matching join record and deliberately leaves
/// the counter alone: stars counts favorites ever added, not live ones.
///
/// # Endpoints
///
/// - `POST /favorite/planet` - Add a planet favorite
/// - `DELETE /favorite/planet/:planet_id` - Remove one planet favorite
/// - `POST /favorite/people` - Add a people favorite
/// - `DELETE /favorite/people/:people_id` - Remove one people favorite
/// - `GET /planet/favorites` - List all planet favorites
/// - `GET /user/favorites/:id` - List one user's favorites, grouped

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::MessageResponse,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use holocron_shared::models::favorite::{PeopleFavorite, PlanetFavorite};
use holocron_shared::models::{person::Person, planet::Planet};
use serde::{Deserialize, Serialize};

/// Add planet favorite request
#[derive(Debug, Deserialize)]
pub struct AddPlanetFavoriteRequest {
    /// Target planet
    pub planet_id: i64,

    /// Favoriting user
    pub user_id: i64,
}

/// Add people favorite request
#[derive(Debug, Deserialize)]
pub struct AddPeopleFavoriteRequest {
    /// Target person
    pub people_id: i64,

    /// Favoriting user
    pub user_id: i64,
}

/// Per-user favorites, grouped by entity kind
#[derive(Debug, Serialize)]
pub struct UserFavoritesResponse {
    pub favorite_planets: Vec<PlanetFavorite>,
    pub favorite_people: Vec<PeopleFavorite>,
}

/// Adds a planet favorite and bumps the planet's stars
///
/// # Endpoint
///
/// ```text
/// POST /favorite/planet
/// Content-Type: application/json
///
/// {"planet_id": 1, "user_id": 1}
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: missing body, missing or non-positive ids, or the
///   planet/user does not exist (foreign-key constraint)
pub async fn add_planet_favorite(
    State(state): State<AppState>,
    body: Result<Json<AddPlanetFavoriteRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<PlanetFavorite>)> {
    let Json(req) = body?;

    if req.planet_id <= 0 || req.user_id <= 0 {
        return Err(ApiError::BadRequest(
            "planet_id and user_id are required".to_string(),
        ));
    }

    let mut tx = state.db.begin().await?;

    let favorite = PlanetFavorite::create(&mut *tx, req.planet_id, req.user_id).await?;

    // Backstop for the FK check: a vanished target must fail cleanly, not
    // leave the join record behind.
    let starred = Planet::increment_stars(&mut *tx, req.planet_id).await?;
    if !starred {
        return Err(ApiError::BadRequest("Planet not found".to_string()));
    }

    tx.commit().await?;

    Ok((StatusCode::CREATED, Json(favorite)))
}

/// Removes the first favorite matching the planet id
///
/// The stars counter is not decremented.
///
/// # Errors
///
/// - `404 Not Found`: no favorite for that planet
pub async fn remove_planet_favorite(
    State(state): State<AppState>,
    Path(planet_id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    let deleted = PlanetFavorite::delete_first_by_planet(&state.db, planet_id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Favorite not found".to_string()));
    }

    Ok(Json(MessageResponse::new("Favorite deleted")))
}

/// Adds a people favorite and bumps the person's stars
///
/// Same contract as [`add_planet_favorite`].
pub async fn add_people_favorite(
    State(state): State<AppState>,
    body: Result<Json<AddPeopleFavoriteRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<PeopleFavorite>)> {
    let Json(req) = body?;

    if req.people_id <= 0 || req.user_id <= 0 {
        return Err(ApiError::BadRequest(
            "people_id and user_id are required".to_string(),
        ));
    }

    let mut tx = state.db.begin().await?;

    let favorite = PeopleFavorite::create(&mut *tx, req.people_id, req.user_id).await?;

    let starred = Person::increment_stars(&mut *tx, req.people_id).await?;
    if !starred {
        return Err(ApiError::BadRequest("Person not found".to_string()));
    }

    tx.commit().await?;

    Ok((StatusCode::CREATED, Json(favorite)))
}

/// Removes the first favorite matching the person id
///
/// # Errors
///
/// - `404 Not Found`: no favorite for that person
pub async fn remove_people_favorite(
    State(state): State<AppState>,
    Path(people_id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    let deleted = PeopleFavorite::delete_first_by_person(&state.db, people_id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Favorite not found".to_string()));
    }

    Ok(Json(MessageResponse::new("Favorite deleted")))
}

/// Lists all planet favorites
pub async fn list_planet_favorites(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<PlanetFavorite>>> {
    let favorites = PlanetFavorite::list(&state.db).await?;
    Ok(Json(favorites))
}

/// Lists one user's favorites, grouped by entity kind
///
/// Always 200; an unknown user id simply yields two empty lists.
pub async fn user_favorites(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<UserFavoritesResponse>> {
    let favorite_planets = PlanetFavorite::list_by_user(&state.db, id).await?;
    let favorite_people = PeopleFavorite::list_by_user(&state.db, id).await?;

    Ok(Json(UserFavoritesResponse {
        favorite_planets,
        favorite_people,
    }))
}
