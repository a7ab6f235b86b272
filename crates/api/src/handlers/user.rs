//! Handlers for the `/users` resource.
//!
//! Request bodies carry a plaintext password which is hashed before it
//! reaches the repository; responses use [`UserResponse`] and never include
//! the hash.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pm_core::types::DbId;
use pm_core::validation;
use pm_db::models::user::{CreateUser, UpdateUser, UserResponse};
use pm_db::repositories::UserRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::password::hash_password;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /users`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub full_name: Option<String>,
}

/// Request body for `PUT /users/{id}`. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/users
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    validation::validate_username(&input.username)?;
    validation::validate_password(&input.password)?;
    validation::validate_email(&input.email)?;
    if let Some(full_name) = &input.full_name {
        validation::validate_full_name(full_name)?;
    }

    let create_dto = CreateUser {
        username: input.username,
        password_hash: hash(&input.password)?,
        email: input.email,
        full_name: input.full_name,
    };

    let user = UserRepo::create(&state.pool, &create_dto).await?;
    tracing::info!(user_id = user.id, username = %user.username, "User created");
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /api/v1/users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("User", id))?;
    Ok(Json(user.into()))
}

/// PUT /api/v1/users/{id}
///
/// A supplied password replaces the stored hash.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    if let Some(username) = &input.username {
        validation::validate_username(username)?;
    }
    if let Some(email) = &input.email {
        validation::validate_email(email)?;
    }
    if let Some(full_name) = &input.full_name {
        validation::validate_full_name(full_name)?;
    }
    let password_hash = match &input.password {
        Some(password) => {
            validation::validate_password(password)?;
            Some(hash(password)?)
        }
        None => None,
    };

    let update_dto = UpdateUser {
        username: input.username,
        password_hash,
        email: input.email,
        full_name: input.full_name,
    };

    let user = UserRepo::update(&state.pool, id, &update_dto)
        .await?
        .ok_or(AppError::not_found("User", id))?;
    tracing::info!(user_id = id, "User updated");
    Ok(Json(user.into()))
}

/// DELETE /api/v1/users/{id}
///
/// Always 204. Tasks assigned to the user are left unassigned.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if UserRepo::delete(&state.pool, id).await? {
        tracing::info!(user_id = id, "User deleted");
    }
    Ok(StatusCode::NO_CONTENT)
}

fn hash(password: &str) -> AppResult<String> {
    hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))
}
