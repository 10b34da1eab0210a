/// User endpoints
///
/// # Endpoints
///
/// - `GET /user` - List all users
/// - `GET /user/:id` - Get one user
/// - `POST /user` - Create a user
/// - `DELETE /user/:id` - Delete a user

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
use holocron_shared::models::user::{CreateUser, User};
use serde::Deserialize;

/// Create user request
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    /// Unique display name
    pub name: String,

    /// Unique email address
    pub email: String,

    /// Password (stored as received; no hashing exists in this system)
    pub password: String,
}

/// Lists all users
///
/// # Endpoint
///
/// ```text
/// GET /user
/// ```
///
/// Responds 200 with a list of `{id, name, email}` objects.
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = User::list(&state.db).await?;
    Ok(Json(users))
}

/// Gets a single user by id
///
/// # Errors
///
/// - `404 Not Found`: no user with that id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<User>> {
    let user = User::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(user))
}

/// Creates a new user
///
/// # Endpoint
///
/// ```text
/// POST /user
/// Content-Type: application/json
///
/// {"name": "han", "email": "han@falcon.example", "password": "..."}
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: missing body, missing/empty fields, or a name/email
///   already in use (unique constraint violation)
pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let Json(req) = body?;

    if req.name.trim().is_empty() || req.email.trim().is_empty() || req.password.is_empty() {
        return Err(ApiError::BadRequest(
            "name, email and password are required".to_string(),
        ));
    }

    let user = User::create(
        &state.db,
        CreateUser {
            name: req.name,
            email: req.email,
            password: req.password,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Deletes a user by id
///
/// # Errors
///
/// - `404 Not Found`: no user with that id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    let deleted = User::delete(&state.db, id).await?;
    if !deleted {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    Ok(Json(MessageResponse::new("User deleted")))
}
