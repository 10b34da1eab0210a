/// Catalog people endpoints
///
/// People are read-only through the API; rows arrive via schema
/// provisioning and the stars counter moves only through the favorite flow.
///
/// # Endpoints
///
/// - `GET /people` - List all people
/// - `GET /people/:id` - Get one person

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, State},
    Json,
};
use holocron_shared::models::person::Person;

/// Lists all people
pub async fn list_people(State(state): State<AppState>) -> ApiResult<Json<Vec<Person>>> {
    let people = Person::list(&state.db).await?;
    Ok(Json(people))
}

/// Gets a single person by id
///
/// # Errors
///
/// - `404 Not Found`: no person with that id
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Person>> {
    let person = Person::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Person not found".to_string()))?;

    Ok(Json(person))
}
