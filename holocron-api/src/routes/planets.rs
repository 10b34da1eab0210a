/// Catalog planet endpoints
///
/// Same read-only surface as people.
///
/// # Endpoints
///
/// - `GET /planet` - List all planets
/// - `GET /planet/:id` - Get one planet

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, State},
    Json,
};
use holocron_shared::models::planet::Planet;

/// Lists all planets
pub async fn list_planets(State(state): State<AppState>) -> ApiResult<Json<Vec<Planet>>> {
    let planets = Planet::list(&state.db).await?;
    Ok(Json(planets))
}

/// Gets a single planet by id
///
/// # Errors
///
/// - `404 Not Found`: no planet with that id
pub async fn get_planet(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Planet>> {
    let planet = Planet::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Planet not found".to_string()))?;

    Ok(Json(planet))
}
