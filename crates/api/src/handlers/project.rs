//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{Months, Utc};
use pm_core::types::DbId;
use pm_core::validation;
use pm_db::models::project::{CreateProject, Project, UpdateProject};
use pm_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    validation::validate_project_name(&input.name)?;

    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = project.id, name = %project.name, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Project", id))?;
    Ok(Json(project))
}

/// PUT /api/v1/projects/{id}
///
/// Applies the supplied fields to the stored project; omitted fields keep
/// their current values.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    if let Some(name) = &input.name {
        validation::validate_project_name(name)?;
    }

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Project", id))?;
    tracing::info!(project_id = id, "Project updated");
    Ok(Json(project))
}

/// DELETE /api/v1/projects/{id}
///
/// Always 204: deleting a project that does not exist is a no-op.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(project_id = id, "Project deleted");
    } else {
        tracing::debug!(project_id = id, "Delete requested for missing project");
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/projects/create-test
///
/// Debug shortcut: creates a throwaway project running from today for one
/// month. Only mounted when `ENABLE_DEBUG_ROUTES` is set.
pub async fn create_test(State(state): State<AppState>) -> AppResult<Json<Project>> {
    let now = Utc::now();
    let today = now.date_naive();
    let input = CreateProject {
        name: format!("Test Project {}", now.timestamp_millis()),
        description: Some("Description for test project".to_string()),
        start_date: Some(today),
        end_date: today.checked_add_months(Months::new(1)),
    };

    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::warn!(project_id = project.id, "Debug test project created");
    Ok(Json(project))
}
